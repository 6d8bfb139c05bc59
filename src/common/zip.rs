// src/common/zip.rs

/// Flattens a device's latest readings into shared label/value arrays.
///
/// Implementors write their label/value pairs starting at `index`, never past
/// `max_size`, and return the index one past the last slot written.
pub trait ZipReadings {
    fn zip(
        &mut self,
        labels: &mut [&'static str],
        readings: &mut [f32],
        index: usize,
        max_size: usize,
    ) -> usize;
}
