//! Integer scaling helpers for raw sensor data.

use crate::config::common::{AccelRange, GyroRange};

/// Ratio representing a scale factor without floating-point math.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScaleFactor {
    /// Scale numerator.
    pub numerator: i32,
    /// Scale denominator.
    pub denominator: i32,
}

impl ScaleFactor {
    /// Creates a new scale ratio.
    pub const fn new(numerator: i32, denominator: i32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Applies the ratio to a raw value, truncating toward zero.
    pub const fn apply(self, raw: i16) -> i32 {
        if self.denominator == 0 {
            return 0;
        }
        ((raw as i64 * self.numerator as i64) / self.denominator as i64) as i32
    }
}

/// Temperature reported by a raw reading of zero, in degrees Celsius.
pub const TEMPERATURE_OFFSET_CELSIUS: i32 = 23;

/// Returns the accelerometer sensitivity in LSB/g.
pub const fn accel_lsb_per_g(range: AccelRange) -> i32 {
    match range {
        AccelRange::G2 => 16_384,
        AccelRange::G4 => 8_192,
        AccelRange::G8 => 4_096,
        AccelRange::G16 => 2_048,
    }
}

/// Returns the gyroscope sensitivity in LSB/dps as a ratio.
///
/// Full scale maps to 32768 LSB, so 125 dps is 262.144 LSB/dps.
pub const fn gyro_lsb_per_dps(range: GyroRange) -> ScaleFactor {
    ScaleFactor::new(32_768, range.dps() as i32)
}

/// Returns the temperature sensitivity in LSB per degree Celsius.
pub const fn temperature_lsb_per_celsius() -> i32 {
    512
}

/// Returns the accelerometer scale in milli-g per LSB as a ratio.
pub const fn accel_mg_per_lsb(range: AccelRange) -> ScaleFactor {
    ScaleFactor::new(1000, accel_lsb_per_g(range))
}

/// Returns the gyroscope scale in milli-deg/s per LSB as a ratio.
pub const fn gyro_mdps_per_lsb(range: GyroRange) -> ScaleFactor {
    ScaleFactor::new(range.dps() as i32 * 1000, 32_768)
}

/// Returns the temperature scale in milli-deg C per LSB as a ratio (offset excluded).
pub const fn temperature_mdegc_per_lsb() -> ScaleFactor {
    ScaleFactor::new(1000, temperature_lsb_per_celsius())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accel_lsb_per_g_values() {
        assert_eq!(accel_lsb_per_g(AccelRange::G2), 16_384);
        assert_eq!(accel_lsb_per_g(AccelRange::G16), 2_048);
        assert_eq!(accel_mg_per_lsb(AccelRange::G8).apply(4_096), 1_000);
    }

    #[test]
    fn gyro_scale_values() {
        assert_eq!(gyro_lsb_per_dps(GyroRange::Dps2000), ScaleFactor::new(32_768, 2_000));
        assert_eq!(gyro_mdps_per_lsb(GyroRange::Dps125).apply(i16::MIN), -125_000);
        assert_eq!(gyro_mdps_per_lsb(GyroRange::Dps2000).apply(16_384), 1_000_000);
    }

    #[test]
    fn temperature_scale_values() {
        assert_eq!(temperature_lsb_per_celsius(), 512);
        assert_eq!(temperature_mdegc_per_lsb(), ScaleFactor::new(1000, 512));
    }
}
