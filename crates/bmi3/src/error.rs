//! Error type for the BMI3 driver.

/// Error type for BMI3 operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Bus communication error (I2C, SPI, etc.).
    Bus,
    /// Sensor not responding at any of the tried addresses.
    NotPresent,
    /// Chip ID does not match a BMI3-family device.
    WrongDevice,
    /// A polled completion flag did not set in time.
    NotReady,
    /// Device reported an error state or returned inconsistent data.
    InvalidData,
    /// A parameter is out of range or a buffer has no capacity.
    InvalidArgument,
    /// Operation not supported by the current device or configuration.
    Unsupported,
}
