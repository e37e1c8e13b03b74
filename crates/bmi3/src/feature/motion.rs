//! Any-motion and no-motion detection parameters.

use crate::error::Error;

const SLOPE_THRESHOLD_MASK: u16 = 0x0FFF;
const ACC_REF_UP: u16 = 1 << 12;
const HYSTERESIS_MASK: u16 = 0x03FF;
const DURATION_MASK: u16 = 0x1FFF;
const WAIT_TIME_SHIFT: u16 = 13;
const WAIT_TIME_MASK: u16 = 0x0007;

/// How the reference acceleration is refreshed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReferenceUpdate {
    /// Refresh only when an event is detected.
    OnDetection,
    /// Refresh on every sample.
    EverySample,
}

/// Motion detector parameters (three words in extended memory).
///
/// Used for both any-motion and no-motion; the engine keeps one block each.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionConfig {
    /// Slope threshold, 1 LSB = 1/512 g (12 bits).
    pub slope_threshold: u16,
    /// Reference update policy.
    pub reference_update: ReferenceUpdate,
    /// Hysteresis, 1 LSB = 1/512 g (10 bits).
    pub hysteresis: u16,
    /// Samples the condition must hold, 1 LSB = 20 ms (13 bits).
    pub duration: u16,
    /// Samples to wait after the condition clears, 1 LSB = 20 ms (3 bits).
    pub wait_time: u8,
}

impl MotionConfig {
    /// Device power-on defaults for any-motion.
    pub const DEFAULT: Self = Self {
        slope_threshold: 0x0A,
        reference_update: ReferenceUpdate::EverySample,
        hysteresis: 0x02,
        duration: 0x05,
        wait_time: 0x04,
    };

    /// Creates a configuration with the given threshold and duration.
    pub const fn new(slope_threshold: u16, duration: u16) -> Self {
        Self {
            slope_threshold,
            duration,
            ..Self::DEFAULT
        }
    }

    /// Sets the slope threshold.
    #[must_use]
    pub const fn with_slope_threshold(mut self, threshold: u16) -> Self {
        self.slope_threshold = threshold;
        self
    }

    /// Sets the reference update policy.
    #[must_use]
    pub const fn with_reference_update(mut self, update: ReferenceUpdate) -> Self {
        self.reference_update = update;
        self
    }

    /// Sets the hysteresis.
    #[must_use]
    pub const fn with_hysteresis(mut self, hysteresis: u16) -> Self {
        self.hysteresis = hysteresis;
        self
    }

    /// Sets the duration.
    #[must_use]
    pub const fn with_duration(mut self, duration: u16) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the wait time.
    #[must_use]
    pub const fn with_wait_time(mut self, wait_time: u8) -> Self {
        self.wait_time = wait_time;
        self
    }

    pub(crate) fn validate(self) -> Result<(), Error> {
        if self.slope_threshold > SLOPE_THRESHOLD_MASK
            || self.hysteresis > HYSTERESIS_MASK
            || self.duration > DURATION_MASK
            || u16::from(self.wait_time) > WAIT_TIME_MASK
        {
            return Err(Error::InvalidArgument);
        }
        Ok(())
    }

    pub(crate) const fn words(self) -> [u16; 3] {
        let mut word0 = self.slope_threshold & SLOPE_THRESHOLD_MASK;
        if matches!(self.reference_update, ReferenceUpdate::EverySample) {
            word0 |= ACC_REF_UP;
        }
        let word1 = self.hysteresis & HYSTERESIS_MASK;
        let word2 = (self.duration & DURATION_MASK)
            | ((self.wait_time as u16 & WAIT_TIME_MASK) << WAIT_TIME_SHIFT);
        [word0, word1, word2]
    }

    pub(crate) const fn from_words(words: [u16; 3]) -> Self {
        Self {
            slope_threshold: words[0] & SLOPE_THRESHOLD_MASK,
            reference_update: if words[0] & ACC_REF_UP != 0 {
                ReferenceUpdate::EverySample
            } else {
                ReferenceUpdate::OnDetection
            },
            hysteresis: words[1] & HYSTERESIS_MASK,
            duration: words[2] & DURATION_MASK,
            wait_time: ((words[2] >> WAIT_TIME_SHIFT) & WAIT_TIME_MASK) as u8,
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_pack_fields() {
        let config = MotionConfig::new(0x123, 0x50)
            .with_hysteresis(0x3FF)
            .with_wait_time(5)
            .with_reference_update(ReferenceUpdate::OnDetection);
        assert_eq!(config.words(), [0x0123, 0x03FF, 0xA050]);
        assert_eq!(MotionConfig::from_words(config.words()), config);
    }

    #[test]
    fn validate_rejects_wide_fields() {
        assert_eq!(MotionConfig::DEFAULT.validate(), Ok(()));
        let config = MotionConfig::DEFAULT.with_slope_threshold(0x1000);
        assert_eq!(config.validate(), Err(Error::InvalidArgument));
        let config = MotionConfig::DEFAULT.with_wait_time(8);
        assert_eq!(config.validate(), Err(Error::InvalidArgument));
    }
}
