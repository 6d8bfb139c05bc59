// src/fmt.rs

// Logging shim, loaded with `#[macro_use]` so the macros are in textual scope
// everywhere. Forwards to the `log` facade when the feature is on, otherwise
// the arguments are type-checked and discarded.

#[cfg(feature = "log")]
macro_rules! trace {
    ($($arg:tt)*) => {
        ::log::trace!($($arg)*)
    };
}
#[cfg(feature = "log")]
macro_rules! debug {
    ($($arg:tt)*) => {
        ::log::debug!($($arg)*)
    };
}
#[cfg(feature = "log")]
macro_rules! warn {
    ($($arg:tt)*) => {
        ::log::warn!($($arg)*)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($arg:tt)*) => {{
        if false {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}
#[cfg(not(feature = "log"))]
macro_rules! debug {
    ($($arg:tt)*) => {{
        if false {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}
#[cfg(not(feature = "log"))]
macro_rules! warn {
    ($($arg:tt)*) => {{
        if false {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}
