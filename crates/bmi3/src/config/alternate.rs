//! Alternate sensor configuration (ALT_ACC_CONF, ALT_GYR_CONF, ALT_CONF).
//!
//! The device can switch each sensor between its user configuration and an
//! alternate one when a feature-engine event fires. Only ODR, averaging and
//! power mode can differ; range and bandwidth are shared with the user set.

use super::common::{Averaging, OutputDataRate, SensorMode, validate_odr};
use crate::error::Error;
use crate::register::{alt_conf, alt_status, sensor_conf};

/// Alternate configuration for one sensor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AltSensorConfig {
    /// Output data rate while the alternate configuration is active.
    pub odr: OutputDataRate,
    /// Sample averaging while the alternate configuration is active.
    pub averaging: Averaging,
    /// Power mode while the alternate configuration is active.
    pub mode: SensorMode,
}

/// Alternate accelerometer configuration (ALT_ACC_CONF).
pub type AltAccelConfig = AltSensorConfig;
/// Alternate gyroscope configuration (ALT_GYR_CONF).
pub type AltGyroConfig = AltSensorConfig;

impl AltSensorConfig {
    /// Default alternate configuration (low power, 50 Hz, no averaging).
    pub const DEFAULT: Self = Self {
        odr: OutputDataRate::Hz50,
        averaging: Averaging::NoAveraging,
        mode: SensorMode::LowPower,
    };

    /// Creates an alternate configuration.
    pub const fn new(mode: SensorMode, odr: OutputDataRate) -> Self {
        Self {
            odr,
            averaging: Averaging::NoAveraging,
            mode,
        }
    }

    /// Sets sample averaging.
    #[must_use]
    pub const fn with_averaging(mut self, averaging: Averaging) -> Self {
        self.averaging = averaging;
        self
    }

    pub(crate) const fn conf_value(self) -> u16 {
        (self.odr.bits() & sensor_conf::ODR_MASK)
            | ((self.averaging.bits() << sensor_conf::AVG_SHIFT) & sensor_conf::AVG_MASK)
            | ((self.mode.bits() << sensor_conf::MODE_SHIFT) & sensor_conf::MODE_MASK)
    }

    pub(crate) fn validate(self) -> Result<(), Error> {
        validate_odr(self.mode, self.odr)
    }
}

impl Default for AltSensorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Alternate configuration switching control (ALT_CONF).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AltConfigControl {
    /// Allow the accelerometer to switch to its alternate configuration.
    pub accel: bool,
    /// Allow the gyroscope to switch to its alternate configuration.
    pub gyro: bool,
    /// Return to the user configuration whenever ACC_CONF/GYR_CONF is written.
    pub reset_on_user_write: bool,
}

impl AltConfigControl {
    /// Switching disabled for both sensors.
    pub const DEFAULT: Self = Self {
        accel: false,
        gyro: false,
        reset_on_user_write: false,
    };

    /// Creates a control word with switching disabled.
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Enables or disables accelerometer switching.
    #[must_use]
    pub const fn with_accel(mut self, enable: bool) -> Self {
        self.accel = enable;
        self
    }

    /// Enables or disables gyroscope switching.
    #[must_use]
    pub const fn with_gyro(mut self, enable: bool) -> Self {
        self.gyro = enable;
        self
    }

    /// Enables or disables the reset-on-write behaviour.
    #[must_use]
    pub const fn with_reset_on_user_write(mut self, enable: bool) -> Self {
        self.reset_on_user_write = enable;
        self
    }

    pub(crate) const fn alt_conf_value(self) -> u16 {
        let mut value = 0;
        if self.accel {
            value |= alt_conf::ACC_EN;
        }
        if self.gyro {
            value |= alt_conf::GYR_EN;
        }
        if self.reset_on_user_write {
            value |= alt_conf::RST_CONF_WRITE_EN;
        }
        value
    }
}

/// Which sensors currently run their alternate configuration (ALT_STATUS).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AltStatus {
    /// Accelerometer runs the alternate configuration.
    pub accel_alternate: bool,
    /// Gyroscope runs the alternate configuration.
    pub gyro_alternate: bool,
}

impl AltStatus {
    pub(crate) const fn from_reg(value: u16) -> Self {
        Self {
            accel_alternate: (value & alt_status::ALT_ACC_ACTIVE) != 0,
            gyro_alternate: (value & alt_status::ALT_GYR_ACTIVE) != 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alt_conf_value_packs_fields() {
        let alt = AltSensorConfig::new(SensorMode::LowPower, OutputDataRate::Hz50)
            .with_averaging(Averaging::Avg2);
        assert_eq!(alt.conf_value(), 0x3107);
    }

    #[test]
    fn control_value_sets_enable_bits() {
        let control = AltConfigControl::new()
            .with_accel(true)
            .with_gyro(true)
            .with_reset_on_user_write(false);
        assert_eq!(control.alt_conf_value(), 0x0011);
    }

    #[test]
    fn status_decodes_flags() {
        let status = AltStatus::from_reg(alt_status::ALT_GYR_ACTIVE);
        assert!(!status.accel_alternate);
        assert!(status.gyro_alternate);
    }
}
