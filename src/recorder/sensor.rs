// src/recorder/sensor.rs

use crate::common::{
    address::Sdi12Addr,
    error::Sdi12Error,
    response::IdentificationInfo,
    types::SENTINEL_VALUE,
    zip::ZipReadings,
};
use heapless::Vec;

/// Default upper bound on values per measurement; `aM!` returns at most 9.
pub const DEFAULT_MAX_VALUES: usize = 9;

/// Recorder-side view of one SDI-12 sensor on the bus.
///
/// `values` always holds exactly `expected_value_count` entries. Any slot
/// without a valid reading holds [`SENTINEL_VALUE`].
#[derive(Debug, Clone, PartialEq)]
pub struct Sdi12Sensor<const N: usize = DEFAULT_MAX_VALUES> {
    address: Sdi12Addr,
    values: Vec<f32, N>,
    info: Option<IdentificationInfo>,
}

impl<const N: usize> Sdi12Sensor<N> {
    /// Creates a sensor expecting `expected_value_count` values per measurement.
    ///
    /// Fails with `BufferOverflow` if the count does not fit in `N`.
    pub fn new(address: Sdi12Addr, expected_value_count: usize) -> Result<Self, Sdi12Error<()>> {
        let mut values = Vec::new();
        values
            .resize(expected_value_count, SENTINEL_VALUE)
            .map_err(|_| Sdi12Error::BufferOverflow { needed: expected_value_count, got: N })?;
        Ok(Sdi12Sensor { address, values, info: None })
    }

    pub fn address(&self) -> Sdi12Addr {
        self.address
    }

    pub fn expected_value_count(&self) -> usize {
        self.values.len()
    }

    /// Latest readings, in the order the sensor reported them.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Identification record from the last successful `aI!`.
    pub fn info(&self) -> Option<&IdentificationInfo> {
        self.info.as_ref()
    }

    /// True when every slot holds a reading.
    pub fn has_valid_values(&self) -> bool {
        self.values.iter().all(|v| *v != SENTINEL_VALUE)
    }

    /// Marks every reading as unavailable.
    pub fn invalidate_values(&mut self) {
        self.values.fill(SENTINEL_VALUE);
    }

    pub(crate) fn values_mut(&mut self) -> &mut [f32] {
        &mut self.values
    }

    pub(crate) fn set_address(&mut self, address: Sdi12Addr) {
        self.address = address;
    }

    pub(crate) fn set_info(&mut self, info: IdentificationInfo) {
        self.info = Some(info);
    }
}

impl<const N: usize> ZipReadings for Sdi12Sensor<N> {
    /// Not wired into aggregation yet: leaves both arrays untouched.
    fn zip(
        &mut self,
        _labels: &mut [&'static str],
        _readings: &mut [f32],
        index: usize,
        _max_size: usize,
    ) -> usize {
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(c: char) -> Sdi12Addr {
        Sdi12Addr::new(c).unwrap()
    }

    #[test]
    fn test_new_starts_with_sentinels() {
        let sensor: Sdi12Sensor = Sdi12Sensor::new(addr('3'), 4).unwrap();
        assert_eq!(sensor.address(), addr('3'));
        assert_eq!(sensor.expected_value_count(), 4);
        assert_eq!(sensor.values(), &[SENTINEL_VALUE; 4]);
        assert!(!sensor.has_valid_values());
        assert!(sensor.info().is_none());
    }

    #[test]
    fn test_new_rejects_too_many_values() {
        let result = Sdi12Sensor::<2>::new(addr('0'), 3);
        assert!(matches!(result, Err(Sdi12Error::BufferOverflow { needed: 3, got: 2 })));
    }

    #[test]
    fn test_invalidate_values() {
        let mut sensor: Sdi12Sensor = Sdi12Sensor::new(addr('0'), 2).unwrap();
        sensor.values_mut().copy_from_slice(&[1.0, 2.0]);
        assert!(sensor.has_valid_values());
        sensor.invalidate_values();
        assert_eq!(sensor.values(), &[SENTINEL_VALUE, SENTINEL_VALUE]);
    }

    #[test]
    fn test_zip_leaves_index_unchanged() {
        let mut sensor: Sdi12Sensor = Sdi12Sensor::new(addr('0'), 2).unwrap();
        let mut labels = [""; 4];
        let mut readings = [0.0f32; 4];
        assert_eq!(sensor.zip(&mut labels, &mut readings, 1, 4), 1);
        assert_eq!(labels, [""; 4]);
        assert_eq!(readings, [0.0; 4]);
    }
}
