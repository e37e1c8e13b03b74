//! Chip identification and device status registers.

use crate::register::{chip_id, err_reg, status};

/// Detected BMI3-family part.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bmi3Variant {
    /// BMI323.
    Bmi323,
    /// BMI330.
    Bmi330,
}

impl Bmi3Variant {
    pub(crate) const fn from_chip_id(value: u16) -> Option<Self> {
        match (value & chip_id::MASK) as u8 {
            chip_id::BMI323 => Some(Self::Bmi323),
            chip_id::BMI330 => Some(Self::Bmi330),
            _ => None,
        }
    }

    /// Returns the chip id byte.
    pub const fn chip_id(self) -> u8 {
        match self {
            Self::Bmi323 => chip_id::BMI323,
            Self::Bmi330 => chip_id::BMI330,
        }
    }
}

/// Error conditions from ERR_REG.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ErrorStatus {
    /// Fatal error; a soft reset is required.
    pub fatal: bool,
    /// Feature engine overloaded.
    pub feature_engine_overload: bool,
    /// Feature engine watchdog triggered.
    pub feature_engine_watchdog: bool,
    /// Invalid accelerometer configuration.
    pub accel_config: bool,
    /// Invalid gyroscope configuration.
    pub gyro_config: bool,
    /// I3C SDR parity error.
    pub i3c_parity: bool,
    /// I3C S0/S1 error.
    pub i3c_error: bool,
}

impl ErrorStatus {
    pub(crate) const fn from_reg(value: u16) -> Self {
        Self {
            fatal: value & err_reg::FATAL != 0,
            feature_engine_overload: value & err_reg::FEAT_ENG_OVRLD != 0,
            feature_engine_watchdog: value & err_reg::FEAT_ENG_WD != 0,
            accel_config: value & err_reg::ACC_CONF_ERR != 0,
            gyro_config: value & err_reg::GYR_CONF_ERR != 0,
            i3c_parity: value & err_reg::I3C_ERROR0 != 0,
            i3c_error: value & err_reg::I3C_ERROR3 != 0,
        }
    }

    /// Returns true if any error bit is set.
    pub const fn any(self) -> bool {
        self.fatal
            || self.feature_engine_overload
            || self.feature_engine_watchdog
            || self.accel_config
            || self.gyro_config
            || self.i3c_parity
            || self.i3c_error
    }
}

/// Power-on and data-ready flags from STATUS.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorStatus {
    /// Power-on reset detected since the last read.
    pub por_detected: bool,
    /// New temperature data.
    pub temperature_ready: bool,
    /// New gyroscope data.
    pub gyro_ready: bool,
    /// New accelerometer data.
    pub accel_ready: bool,
}

impl SensorStatus {
    pub(crate) const fn from_reg(value: u16) -> Self {
        Self {
            por_detected: value & status::POR_DETECTED != 0,
            temperature_ready: value & status::DRDY_TEMP != 0,
            gyro_ready: value & status::DRDY_GYR != 0,
            accel_ready: value & status::DRDY_ACC != 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_from_chip_id_ignores_high_byte() {
        assert_eq!(Bmi3Variant::from_chip_id(0x0043), Some(Bmi3Variant::Bmi323));
        assert_eq!(Bmi3Variant::from_chip_id(0xA548), Some(Bmi3Variant::Bmi330));
        assert_eq!(Bmi3Variant::from_chip_id(0x0005), None);
    }

    #[test]
    fn decode_status_registers() {
        let errors = ErrorStatus::from_reg(0x0021);
        assert!(errors.fatal);
        assert!(errors.accel_config);
        assert!(!errors.gyro_config);
        assert!(errors.any());

        let status = SensorStatus::from_reg(0x00C1);
        assert!(status.por_detected);
        assert!(status.accel_ready);
        assert!(status.gyro_ready);
        assert!(!status.temperature_ready);
    }
}
