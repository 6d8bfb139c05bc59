// src/recorder/sync_recorder/mod.rs

mod io_helpers;
mod protocol_helpers;
mod transaction;

#[cfg(test)]
mod mock;

use crate::common::{
    address::Sdi12Addr,
    command::Command,
    error::Sdi12Error,
    hal_traits::{Sdi12Serial, Sdi12Timer},
    response::{parse_address_query, parse_identification, parse_measurement_timing, MeasurementTiming},
    rx_buffer::{RxBuffer, RX_BUFFER_CAPACITY},
};
use crate::recorder::{config::PollConfig, sensor::Sdi12Sensor};

/// Represents an SDI-12 Recorder (Datalogger) instance for SYNCHRONOUS operations.
///
/// Commands go out through `interface`; responses are read from `rx`, which
/// the platform's receive interrupt fills. Every operation blocks until the
/// response arrives or the [`PollConfig`] budget runs out. Failed operations
/// leave the bus idle and can simply be called again.
#[derive(Debug)]
pub struct SyncRecorder<'a, IF, const N: usize = RX_BUFFER_CAPACITY> {
    interface: IF,
    rx: &'a RxBuffer<N>,
    poll: PollConfig,
}

impl<'a, IF, const N: usize> SyncRecorder<'a, IF, N>
where
    IF: Sdi12Serial + Sdi12Timer,
{
    pub fn new(interface: IF, rx: &'a RxBuffer<N>) -> Self {
        Self::with_config(interface, rx, PollConfig::default())
    }

    pub fn with_config(interface: IF, rx: &'a RxBuffer<N>, poll: PollConfig) -> Self {
        SyncRecorder { interface, rx, poll }
    }

    pub fn poll_config(&self) -> &PollConfig {
        &self.poll
    }

    pub fn set_poll_config(&mut self, poll: PollConfig) {
        self.poll = poll;
    }

    pub fn interface(&mut self) -> &mut IF {
        &mut self.interface
    }

    /// Gives the interface back.
    pub fn release(self) -> IF {
        self.interface
    }

    // --- Public Blocking Methods ---

    /// `a!`: succeeds if the sensor answers at all.
    pub fn is_active<const S: usize>(
        &mut self,
        sensor: &Sdi12Sensor<S>,
    ) -> Result<(), Sdi12Error<IF::Error>> {
        self.execute_transaction(&Command::AcknowledgeActive { address: sensor.address() })?;
        Ok(())
    }

    /// `?!`: address of the only sensor on the bus.
    pub fn query_address(&mut self) -> Result<Sdi12Addr, Sdi12Error<IF::Error>> {
        let payload = self.execute_transaction(&Command::AddressQuery)?;
        Ok(parse_address_query(&payload)?)
    }

    /// `aAb!`: moves `sensor` to `new_address`.
    ///
    /// The sensor is updated only once it answers from the new address;
    /// otherwise `AddressMismatch` is returned and its address is unchanged.
    pub fn change_address<const S: usize>(
        &mut self,
        sensor: &mut Sdi12Sensor<S>,
        new_address: Sdi12Addr,
    ) -> Result<(), Sdi12Error<IF::Error>> {
        self.send_command(&Command::ChangeAddress { address: sensor.address(), new_address })?;

        let confirmation = [new_address.as_byte(), b'\r', b'\n'];
        match self.wait_for_sequence(&confirmation) {
            Ok(()) => {
                debug!("sdi12 address {} -> {}", sensor.address(), new_address);
                sensor.set_address(new_address);
                Ok(())
            }
            Err(Sdi12Error::Timeout) => Err(Sdi12Error::AddressMismatch),
            Err(e) => Err(e),
        }
    }

    /// `aM!` then `aD0!`. Returns the number of values parsed.
    ///
    /// On any failure every value of `sensor` is set to the sentinel.
    pub fn take_measurement<const S: usize>(
        &mut self,
        sensor: &mut Sdi12Sensor<S>,
    ) -> Result<usize, Sdi12Error<IF::Error>> {
        let command = Command::StartMeasurement { address: sensor.address() };
        let result = self.measure(sensor, &command, false);
        if result.is_err() {
            sensor.invalidate_values();
        }
        result
    }

    /// `aMC!` then `aD0!`, rejecting data lines whose CRC does not match.
    pub fn take_measurement_crc<const S: usize>(
        &mut self,
        sensor: &mut Sdi12Sensor<S>,
    ) -> Result<usize, Sdi12Error<IF::Error>> {
        let command = Command::StartMeasurementCrc { address: sensor.address() };
        let result = self.measure(sensor, &command, true);
        if result.is_err() {
            sensor.invalidate_values();
        }
        result
    }

    /// `aC!`: starts a concurrent measurement and returns without waiting for it.
    ///
    /// Succeeds as soon as the sensor answers. The `atttnn` ack is decoded
    /// when possible; fetch the data later with [`send_data`](Self::send_data).
    pub fn take_concurrent_measurement<const S: usize>(
        &mut self,
        sensor: &Sdi12Sensor<S>,
    ) -> Result<Option<MeasurementTiming>, Sdi12Error<IF::Error>> {
        let payload =
            self.execute_transaction(&Command::StartConcurrentMeasurement { address: sensor.address() })?;
        match parse_measurement_timing(&payload) {
            Ok(timing) => Ok(Some(timing)),
            Err(e) => {
                debug!("sdi12 concurrent ack not decoded: {:?}", e);
                Ok(None)
            }
        }
    }

    /// `aD0!` on its own, e.g. once a concurrent measurement is ready.
    pub fn send_data<const S: usize>(
        &mut self,
        sensor: &mut Sdi12Sensor<S>,
    ) -> Result<usize, Sdi12Error<IF::Error>> {
        let result = self.read_data(sensor, false);
        if result.is_err() {
            sensor.invalidate_values();
        }
        result
    }

    /// `aI!`: stores the identification record in `sensor`.
    pub fn read_info<const S: usize>(
        &mut self,
        sensor: &mut Sdi12Sensor<S>,
    ) -> Result<(), Sdi12Error<IF::Error>> {
        let payload = self.execute_transaction(&Command::SendIdentification { address: sensor.address() })?;
        sensor.set_info(parse_identification(&payload)?);
        Ok(())
    }
}
