//! Tap detection parameters.

use crate::error::Error;

/// Axis used for tap detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TapAxis {
    /// X axis.
    X,
    /// Y axis.
    Y,
    /// Z axis.
    Z,
}

impl TapAxis {
    const fn bits(self) -> u16 {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    const fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            0 => Some(Self::X),
            1 => Some(Self::Y),
            2 => Some(Self::Z),
            _ => None,
        }
    }
}

/// Detection profile trading sensitivity against false positives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TapMode {
    /// Most sensitive.
    Sensitive,
    /// Balanced.
    Normal,
    /// Least prone to false detection.
    Robust,
}

impl TapMode {
    const fn bits(self) -> u16 {
        match self {
            Self::Sensitive => 0,
            Self::Normal => 1,
            Self::Robust => 2,
        }
    }

    const fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            0 => Some(Self::Sensitive),
            1 => Some(Self::Normal),
            2 => Some(Self::Robust),
            _ => None,
        }
    }
}

/// Tap detector parameters (three words in extended memory).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapConfig {
    /// Detection axis.
    pub axis: TapAxis,
    /// Report a gesture only after `max_gesture_duration` elapses.
    pub wait_for_timeout: bool,
    /// Maximum peaks that may occur in one tap (3 bits).
    pub max_peaks_for_tap: u8,
    /// Detection profile.
    pub mode: TapMode,
    /// Minimum peak amplitude, 1 LSB = 1/512 g (10 bits).
    pub peak_threshold: u16,
    /// Maximum gesture duration, 1 LSB = 40 ms (6 bits).
    pub max_gesture_duration: u8,
    /// Maximum time between peaks, 1 LSB = 5 ms (4 bits).
    pub max_duration_between_peaks: u8,
    /// Shock settling time, 1 LSB = 5 ms (4 bits).
    pub shock_settling_duration: u8,
    /// Minimum quiet time between taps, 1 LSB = 5 ms (4 bits).
    pub min_quiet_duration_between_taps: u8,
    /// Quiet time after a gesture, 1 LSB = 40 ms (4 bits).
    pub quiet_time_after_gesture: u8,
}

impl TapConfig {
    /// Device power-on defaults.
    pub const DEFAULT: Self = Self {
        axis: TapAxis::Z,
        wait_for_timeout: true,
        max_peaks_for_tap: 6,
        mode: TapMode::Normal,
        peak_threshold: 0x2D,
        max_gesture_duration: 0x11,
        max_duration_between_peaks: 0x04,
        shock_settling_duration: 0x06,
        min_quiet_duration_between_taps: 0x08,
        quiet_time_after_gesture: 0x06,
    };

    /// Creates a configuration for the given axis and mode.
    pub const fn new(axis: TapAxis, mode: TapMode) -> Self {
        Self {
            axis,
            mode,
            ..Self::DEFAULT
        }
    }

    /// Sets the detection axis.
    #[must_use]
    pub const fn with_axis(mut self, axis: TapAxis) -> Self {
        self.axis = axis;
        self
    }

    /// Sets the detection profile.
    #[must_use]
    pub const fn with_mode(mut self, mode: TapMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets whether gestures wait for the timeout before reporting.
    #[must_use]
    pub const fn with_wait_for_timeout(mut self, enable: bool) -> Self {
        self.wait_for_timeout = enable;
        self
    }

    /// Sets the peak threshold.
    #[must_use]
    pub const fn with_peak_threshold(mut self, threshold: u16) -> Self {
        self.peak_threshold = threshold;
        self
    }

    /// Sets the maximum peaks per tap.
    #[must_use]
    pub const fn with_max_peaks_for_tap(mut self, peaks: u8) -> Self {
        self.max_peaks_for_tap = peaks;
        self
    }

    /// Sets the gesture timing windows.
    #[must_use]
    pub const fn with_timing(
        mut self,
        max_gesture_duration: u8,
        max_duration_between_peaks: u8,
        min_quiet_duration_between_taps: u8,
        quiet_time_after_gesture: u8,
    ) -> Self {
        self.max_gesture_duration = max_gesture_duration;
        self.max_duration_between_peaks = max_duration_between_peaks;
        self.min_quiet_duration_between_taps = min_quiet_duration_between_taps;
        self.quiet_time_after_gesture = quiet_time_after_gesture;
        self
    }

    /// Sets the shock settling time.
    #[must_use]
    pub const fn with_shock_settling_duration(mut self, duration: u8) -> Self {
        self.shock_settling_duration = duration;
        self
    }

    pub(crate) fn validate(self) -> Result<(), Error> {
        if self.max_peaks_for_tap > 0x07
            || self.peak_threshold > 0x03FF
            || self.max_gesture_duration > 0x3F
            || self.max_duration_between_peaks > 0x0F
            || self.shock_settling_duration > 0x0F
            || self.min_quiet_duration_between_taps > 0x0F
            || self.quiet_time_after_gesture > 0x0F
        {
            return Err(Error::InvalidArgument);
        }
        Ok(())
    }

    pub(crate) const fn words(self) -> [u16; 3] {
        let word0 = self.axis.bits()
            | ((self.wait_for_timeout as u16) << 2)
            | ((self.max_peaks_for_tap as u16 & 0x07) << 3)
            | (self.mode.bits() << 6);
        let word1 =
            (self.peak_threshold & 0x03FF) | ((self.max_gesture_duration as u16 & 0x3F) << 10);
        let word2 = (self.max_duration_between_peaks as u16 & 0x0F)
            | ((self.shock_settling_duration as u16 & 0x0F) << 4)
            | ((self.min_quiet_duration_between_taps as u16 & 0x0F) << 8)
            | ((self.quiet_time_after_gesture as u16 & 0x0F) << 12);
        [word0, word1, word2]
    }

    pub(crate) fn from_words(words: [u16; 3]) -> Result<Self, Error> {
        let axis = TapAxis::from_bits(words[0] & 0x03).ok_or(Error::InvalidData)?;
        let mode = TapMode::from_bits((words[0] >> 6) & 0x03).ok_or(Error::InvalidData)?;
        Ok(Self {
            axis,
            wait_for_timeout: words[0] & (1 << 2) != 0,
            max_peaks_for_tap: ((words[0] >> 3) & 0x07) as u8,
            mode,
            peak_threshold: words[1] & 0x03FF,
            max_gesture_duration: ((words[1] >> 10) & 0x3F) as u8,
            max_duration_between_peaks: (words[2] & 0x0F) as u8,
            shock_settling_duration: ((words[2] >> 4) & 0x0F) as u8,
            min_quiet_duration_between_taps: ((words[2] >> 8) & 0x0F) as u8,
            quiet_time_after_gesture: ((words[2] >> 12) & 0x0F) as u8,
        })
    }
}

impl Default for TapConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_words_match_power_on_values() {
        assert_eq!(TapConfig::DEFAULT.words(), [0x0076, 0x442D, 0x6864]);
    }

    #[test]
    fn from_words_decodes_and_rejects_reserved() {
        let config = TapConfig::new(TapAxis::X, TapMode::Robust).with_peak_threshold(0x100);
        assert_eq!(TapConfig::from_words(config.words()), Ok(config));
        assert_eq!(TapConfig::from_words([0x0003, 0, 0]), Err(Error::InvalidData));
        assert_eq!(TapConfig::from_words([0x00C0, 0, 0]), Err(Error::InvalidData));
    }

    #[test]
    fn validate_checks_field_widths() {
        assert_eq!(TapConfig::DEFAULT.validate(), Ok(()));
        let config = TapConfig::DEFAULT.with_timing(0x40, 0, 0, 0);
        assert_eq!(config.validate(), Err(Error::InvalidArgument));
    }
}
