//! Configuration helpers for the BMI3 family.

pub(crate) mod alternate;
pub(crate) mod common;

pub use alternate::{AltAccelConfig, AltConfigControl, AltGyroConfig, AltSensorConfig, AltStatus};
pub use common::{AccelConfig, AccelRange, Averaging, Bandwidth, OutputDataRate, SensorMode};
pub use common::{GyroConfig, GyroRange};

use crate::error::Error;

/// BMI3 sensor configuration settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Accelerometer configuration (ACC_CONF).
    pub accel: AccelConfig,
    /// Gyroscope configuration (GYR_CONF).
    pub gyro: GyroConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a default configuration (both sensors in normal mode at 100 Hz).
    pub const fn new() -> Self {
        Self {
            accel: AccelConfig::DEFAULT,
            gyro: GyroConfig::DEFAULT,
        }
    }

    /// Sets the accelerometer configuration.
    #[must_use]
    pub const fn with_accel_config(mut self, accel: AccelConfig) -> Self {
        self.accel = accel;
        self
    }

    /// Disables the accelerometer.
    #[must_use]
    pub const fn without_accel(mut self) -> Self {
        self.accel.mode = SensorMode::Disabled;
        self
    }

    /// Sets the gyroscope configuration.
    #[must_use]
    pub const fn with_gyro_config(mut self, gyro: GyroConfig) -> Self {
        self.gyro = gyro;
        self
    }

    /// Disables the gyroscope.
    #[must_use]
    pub const fn without_gyro(mut self) -> Self {
        self.gyro.mode = SensorMode::Disabled;
        self
    }

    pub(crate) const fn accel_enabled(self) -> bool {
        self.accel.mode.is_enabled()
    }

    pub(crate) const fn gyro_enabled(self) -> bool {
        self.gyro.mode.is_enabled()
    }

    pub(crate) fn validate(self) -> Result<(), Error> {
        self.accel.validate()?;
        self.gyro.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn without_sensors_clears_enable() {
        let config = Config::new().without_accel().without_gyro();
        assert!(!config.accel_enabled());
        assert!(!config.gyro_enabled());
        assert_eq!(config.accel.range, AccelRange::G8);
    }

    #[test]
    fn validate_checks_both_sensors() {
        let gyro = GyroConfig::DEFAULT
            .with_mode(SensorMode::LowPower)
            .with_odr(OutputDataRate::Hz1600);
        let config = Config::new().with_gyro_config(gyro);
        assert_eq!(config.validate(), Err(Error::InvalidArgument));
        assert_eq!(Config::new().validate(), Ok(()));
    }
}
