//! I2C interface adapter for the BMI3 family.

use embedded_hal_async::i2c::{I2c, Operation};

use super::Bmi3Address;
use super::{DEFAULT_MAX_READ_LEN, Interface, InterfaceSettings, sealed};
use crate::error::Error;

/// Dummy bytes clocked out before read payload on I2C.
const I2C_DUMMY_BYTES: usize = 2;

/// I2C interface configuration (address + burst limit).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    pub(crate) address: u8,
    pub(crate) max_read_len: usize,
}

impl I2cConfig {
    /// Creates a new I2C configuration for the provided address.
    pub const fn new(address: u8) -> Self {
        Self {
            address,
            max_read_len: DEFAULT_MAX_READ_LEN,
        }
    }

    /// Sets the I2C address.
    #[must_use]
    pub const fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Sets the largest payload read in one transfer (FIFO reads are chunked to this).
    ///
    /// Must be at least 2 bytes; smaller limits make `init` and every chunked
    /// read fail with `InvalidArgument`.
    #[must_use]
    pub const fn with_max_read_len(mut self, max_read_len: usize) -> Self {
        self.max_read_len = max_read_len;
        self
    }

    pub(crate) const fn interface_settings(self) -> InterfaceSettings {
        InterfaceSettings::new(self.max_read_len, false)
    }
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::new(Bmi3Address::Primary.addr())
    }
}

/// I2C register interface.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Creates a new I2C interface with the given bus and 7-bit address.
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Changes the 7-bit I2C address.
    pub fn set_address(&mut self, address: u8) {
        self.address = address;
    }

    /// Releases the underlying I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Interface for I2cInterface<I2C>
where
    I2C: I2c,
{
    async fn read_reg(&mut self, reg: u8) -> Result<u16, Error> {
        let mut buffer = [0u8; 2];
        self.read_regs(reg, &mut buffer).await?;
        Ok(u16::from_le_bytes(buffer))
    }

    async fn read_regs(&mut self, reg: u8, buffer: &mut [u8]) -> Result<(), Error> {
        if buffer.is_empty() {
            return Ok(());
        }
        let reg_buffer = [reg];
        let mut dummy = [0u8; I2C_DUMMY_BYTES];
        let mut ops = [
            Operation::Write(&reg_buffer),
            Operation::Read(&mut dummy),
            Operation::Read(buffer),
        ];
        self.i2c
            .transaction(self.address, &mut ops)
            .await
            .map_err(|_| Error::Bus)
    }

    async fn write_reg(&mut self, reg: u8, value: u16) -> Result<(), Error> {
        let [lsb, msb] = value.to_le_bytes();
        let buffer = [reg, lsb, msb];
        self.i2c
            .write(self.address, &buffer)
            .await
            .map_err(|_| Error::Bus)
    }

    async fn write_regs(&mut self, reg: u8, data: &[u8]) -> Result<(), Error> {
        if data.is_empty() {
            return Ok(());
        }
        let reg_buffer = [reg];
        let mut ops = [Operation::Write(&reg_buffer), Operation::Write(data)];
        self.i2c
            .transaction(self.address, &mut ops)
            .await
            .map_err(|_| Error::Bus)
    }
}

impl<I2C> sealed::Sealed for I2cInterface<I2C> {}
