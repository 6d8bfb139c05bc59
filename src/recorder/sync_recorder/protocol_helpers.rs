// src/recorder/sync_recorder/protocol_helpers.rs

use super::SyncRecorder;
use crate::common::{
    command::Command,
    crc::verify_response_crc_ascii,
    error::Sdi12Error,
    hal_traits::{Sdi12Serial, Sdi12Timer},
    response::{parse_measurement_timing, parse_values, MeasurementTiming},
};
use crate::recorder::sensor::Sdi12Sensor;

impl<IF, const N: usize> SyncRecorder<'_, IF, N>
where
    IF: Sdi12Serial + Sdi12Timer,
{
    /// Sends a measurement command and decodes the `atttn` ack.
    pub(super) fn start_measurement<const S: usize>(
        &mut self,
        sensor: &Sdi12Sensor<S>,
        command: &Command,
    ) -> Result<MeasurementTiming, Sdi12Error<IF::Error>> {
        let ack = self.execute_transaction(command)?;
        let timing = parse_measurement_timing(&ack)?;

        if timing.address != sensor.address() {
            warn!("sdi12 {} answered from address {}", command, timing.address);
        }
        if usize::from(timing.values_count) != sensor.expected_value_count() {
            warn!(
                "sdi12 {} announced {} values, sensor expects {}",
                command,
                timing.values_count,
                sensor.expected_value_count()
            );
        }
        Ok(timing)
    }

    /// Requests `aD0!` and stores the values in `sensor`.
    ///
    /// With `crc` set the data line must end in a valid ASCII CRC, which is
    /// checked before any value is taken from it. Returns the number of values
    /// actually parsed; missing ones are left at the sentinel.
    pub(super) fn read_data<const S: usize>(
        &mut self,
        sensor: &mut Sdi12Sensor<S>,
        crc: bool,
    ) -> Result<usize, Sdi12Error<IF::Error>> {
        let command = Command::SendData { address: sensor.address(), index: 0 };
        let payload = self.execute_transaction(&command)?;

        let line = if crc {
            verify_response_crc_ascii::<IF::Error>(&payload).map_err(|e| {
                warn!("sdi12 {} failed CRC check: {:?}", command, e);
                e
            })?
        } else {
            &payload[..]
        };

        let parsed = parse_values(line, sensor.values_mut()).map_err(|e| {
            warn!("sdi12 {} unusable data line: {:?}", command, e);
            Sdi12Error::<IF::Error>::from(e)
        })?;
        if parsed < sensor.expected_value_count() {
            warn!(
                "sdi12 {} returned {} of {} values",
                command,
                parsed,
                sensor.expected_value_count()
            );
        }
        Ok(parsed)
    }

    /// Runs a full measurement: start, wait `ttt` seconds, read `D0`.
    pub(super) fn measure<const S: usize>(
        &mut self,
        sensor: &mut Sdi12Sensor<S>,
        command: &Command,
        crc: bool,
    ) -> Result<usize, Sdi12Error<IF::Error>> {
        let timing = self.start_measurement(sensor, command)?;
        self.interface.delay_ms(timing.delay_ms());
        self.read_data(sensor, crc)
    }
}
