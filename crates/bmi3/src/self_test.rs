//! Self-test and gyroscope self-calibration types.

use crate::register::{gyro_sc_select, st_result, st_select};

/// Sensors exercised by a self-test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SelfTestSelection {
    /// Accelerometer only.
    Accel,
    /// Gyroscope only.
    Gyro,
    /// Both sensors.
    Both,
}

impl SelfTestSelection {
    pub(crate) const fn select_value(self) -> u16 {
        match self {
            Self::Accel => st_select::ACC,
            Self::Gyro => st_select::GYR,
            Self::Both => st_select::ACC | st_select::GYR,
        }
    }
}

/// Self-test outcome.
///
/// Per-axis flags are only meaningful for the sensors that were selected.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SelfTestReport {
    /// Overall result reported by the feature engine.
    pub passed: bool,
    /// Accelerometer X axis passed.
    pub accel_x: bool,
    /// Accelerometer Y axis passed.
    pub accel_y: bool,
    /// Accelerometer Z axis passed.
    pub accel_z: bool,
    /// Gyroscope X axis passed.
    pub gyro_x: bool,
    /// Gyroscope Y axis passed.
    pub gyro_y: bool,
    /// Gyroscope Z axis passed.
    pub gyro_z: bool,
    /// Gyroscope drive test passed.
    pub gyro_drive: bool,
}

impl SelfTestReport {
    pub(crate) const fn from_result(passed: bool, result: u16) -> Self {
        Self {
            passed,
            accel_x: result & st_result::ACC_X != 0,
            accel_y: result & st_result::ACC_Y != 0,
            accel_z: result & st_result::ACC_Z != 0,
            gyro_x: result & st_result::GYR_X != 0,
            gyro_y: result & st_result::GYR_Y != 0,
            gyro_z: result & st_result::GYR_Z != 0,
            gyro_drive: result & st_result::GYR_DRIVE != 0,
        }
    }

    /// Returns true if every accelerometer axis passed.
    pub const fn accel_passed(self) -> bool {
        self.accel_x && self.accel_y && self.accel_z
    }

    /// Returns true if every gyroscope axis and the drive test passed.
    pub const fn gyro_passed(self) -> bool {
        self.gyro_x && self.gyro_y && self.gyro_z && self.gyro_drive
    }
}

/// Gyroscope self-calibration steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroCalibration {
    /// Sensitivity calibration only.
    Sensitivity,
    /// Offset calibration only.
    Offset,
    /// Sensitivity and offset calibration.
    Both,
}

impl GyroCalibration {
    pub(crate) const fn select_value(self, apply: bool) -> u16 {
        let mut value = match self {
            Self::Sensitivity => gyro_sc_select::SENSITIVITY,
            Self::Offset => gyro_sc_select::OFFSET,
            Self::Both => gyro_sc_select::SENSITIVITY | gyro_sc_select::OFFSET,
        };
        if apply {
            value |= gyro_sc_select::APPLY_CORRECTION;
        }
        value
    }
}

/// Gyroscope self-calibration outcome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroCalibrationReport {
    /// Calibration succeeded.
    pub passed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_values() {
        assert_eq!(SelfTestSelection::Both.select_value(), 0x0003);
        assert_eq!(GyroCalibration::Offset.select_value(true), 0x0006);
        assert_eq!(GyroCalibration::Both.select_value(false), 0x0003);
    }

    #[test]
    fn report_decodes_axis_flags() {
        let report = SelfTestReport::from_result(false, 0x003B);
        assert!(report.accel_x);
        assert!(report.accel_y);
        assert!(!report.accel_z);
        assert!(!report.accel_passed());
        assert!(!report.gyro_passed());
        let report = SelfTestReport::from_result(true, 0x007F);
        assert!(report.accel_passed());
        assert!(report.gyro_passed());
    }
}
