//! SPI interface adapter for the BMI3 family.

use embedded_hal_async::spi::{Operation, SpiDevice};

use super::{DEFAULT_MAX_READ_LEN, Interface, InterfaceSettings, sealed};
use crate::error::Error;

/// Dummy byte clocked out before read payload on SPI.
const SPI_DUMMY_BYTES: usize = 1;

/// SPI interface configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiConfig {
    pub(crate) max_read_len: usize,
}

impl SpiConfig {
    /// Creates a new SPI configuration (4-wire, default burst limit).
    pub const fn new() -> Self {
        Self {
            max_read_len: DEFAULT_MAX_READ_LEN,
        }
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
        InterfaceSettings::new(self.max_read_len, true)
    }
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// SPI register interface.
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Creates a new SPI interface with the given bus.
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Releases the underlying SPI bus.
    pub fn release(self) -> SPI {
        self.spi
    }
}

const SPI_READ_MASK: u8 = 0x80;

const fn spi_addr_read(reg: u8) -> u8 {
    (reg & 0x7F) | SPI_READ_MASK
}

const fn spi_addr_write(reg: u8) -> u8 {
    reg & 0x7F
}

impl<SPI> Interface for SpiInterface<SPI>
where
    SPI: SpiDevice,
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
        let addr_buf = [spi_addr_read(reg)];
        let mut dummy = [0u8; SPI_DUMMY_BYTES];
        let mut ops = [
            Operation::Write(&addr_buf),
            Operation::Read(&mut dummy),
            Operation::Read(buffer),
        ];
        self.spi.transaction(&mut ops).await.map_err(|_| Error::Bus)
    }

    async fn write_reg(&mut self, reg: u8, value: u16) -> Result<(), Error> {
        let [lsb, msb] = value.to_le_bytes();
        let buffer = [spi_addr_write(reg), lsb, msb];
        self.spi.write(&buffer).await.map_err(|_| Error::Bus)
    }

    async fn write_regs(&mut self, reg: u8, data: &[u8]) -> Result<(), Error> {
        if data.is_empty() {
            return Ok(());
        }
        let addr_buf = [spi_addr_write(reg)];
        let mut ops = [Operation::Write(&addr_buf), Operation::Write(data)];
        self.spi.transaction(&mut ops).await.map_err(|_| Error::Bus)
    }
}

impl<SPI> sealed::Sealed for SpiInterface<SPI> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_address_sets_msb() {
        assert_eq!(spi_addr_read(0x16), 0x96);
        assert_eq!(spi_addr_write(0x96), 0x16);
    }
}
