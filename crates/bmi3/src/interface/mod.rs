//! Interface abstraction for register I/O.
//!
//! BMI3 registers are 16-bit words sent little-endian. Every read is
//! preceded by dummy bytes (one on SPI, two on I2C) that the adapters
//! discard inside the bus transaction.

pub(crate) mod address;
pub(crate) mod i2c;
pub(crate) mod spi;

pub use address::Bmi3Address;
pub use i2c::{I2cConfig, I2cInterface};
pub use spi::{SpiConfig, SpiInterface};

use crate::error::Error;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Default upper bound for a single burst read, in bytes.
pub const DEFAULT_MAX_READ_LEN: usize = 128;

/// Minimal async register I/O for the device core.
#[allow(async_fn_in_trait)]
pub trait Interface: sealed::Sealed {
    /// Reads a single 16-bit register.
    async fn read_reg(&mut self, reg: u8) -> Result<u16, Error>;
    /// Reads `buffer.len()` payload bytes starting at `reg`.
    async fn read_regs(&mut self, reg: u8, buffer: &mut [u8]) -> Result<(), Error>;
    /// Writes a single 16-bit register.
    async fn write_reg(&mut self, reg: u8, value: u16) -> Result<(), Error>;
    /// Writes a contiguous block of register bytes from `data`.
    async fn write_regs(&mut self, reg: u8, data: &[u8]) -> Result<(), Error>;
}

/// Transport settings the device core needs to sequence bus traffic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct InterfaceSettings {
    /// Largest payload a single read transfer may carry.
    pub(crate) max_read_len: usize,
    /// SPI needs a dummy read after reset to leave I2C mode.
    pub(crate) spi: bool,
}

impl InterfaceSettings {
    pub(crate) const fn new(max_read_len: usize, spi: bool) -> Self {
        Self { max_read_len, spi }
    }

    /// Returns the maximum burst length rounded down to whole words.
    ///
    /// A limit below one word is rejected with `InvalidArgument`.
    pub(crate) const fn word_aligned_read_len(self) -> Result<usize, Error> {
        if self.max_read_len < 2 {
            return Err(Error::InvalidArgument);
        }
        Ok(self.max_read_len & !1)
    }
}

impl Default for InterfaceSettings {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_READ_LEN, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_len_is_word_aligned() {
        assert_eq!(InterfaceSettings::new(128, false).word_aligned_read_len(), Ok(128));
        assert_eq!(InterfaceSettings::new(33, false).word_aligned_read_len(), Ok(32));
        assert_eq!(InterfaceSettings::new(2, true).word_aligned_read_len(), Ok(2));
    }

    #[test]
    fn read_len_below_one_word_is_rejected() {
        assert_eq!(
            InterfaceSettings::new(1, true).word_aligned_read_len(),
            Err(Error::InvalidArgument)
        );
        assert_eq!(
            InterfaceSettings::new(0, false).word_aligned_read_len(),
            Err(Error::InvalidArgument)
        );
    }
}
