//! Step counter parameters.
//!
//! The step counter block is 12 words (extended memory 0x10..=0x1B); the
//! orientation block follows directly. Words 8..=11 hold filter
//! coefficients with no documented meaning; they and any reserved bits are
//! carried through unchanged, so the block is always updated by
//! read-modify-write.

use crate::error::Error;

/// Number of words in the step counter block.
pub const STEP_COUNTER_WORDS: usize = 12;

const FILTER_START: usize = 8;
const FILTER_WORDS: usize = STEP_COUNTER_WORDS - FILTER_START;

const WATERMARK_MASK: u16 = 0x03FF;
const RESET_COUNTER: u16 = 1 << 10;
const STEP_BUFFER_SIZE_MASK: u16 = 0x000F;
const FILTER_CASCADE: u16 = 1 << 4;

/// Step counter tuning block.
///
/// Built from a device read (`get_step_counter_config`) and written back with
/// `set_step_counter_config`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepCounterConfig {
    /// Step-counter interrupt every `watermark * 20` steps; 0 disables (10 bits).
    pub watermark: u16,
    /// Resets the accumulated step count when written.
    pub reset_counter: bool,
    /// Minimum distance of the upper envelope.
    pub env_min_dist_up: u16,
    /// Upper envelope coefficient.
    pub env_coef_up: u16,
    /// Minimum distance of the lower envelope.
    pub env_min_dist_down: u16,
    /// Lower envelope coefficient.
    pub env_coef_down: u16,
    /// Mean value decay coefficient.
    pub mean_val_decay: u16,
    /// Mean step duration coefficient.
    pub mean_step_dur: u16,
    /// Step buffer size (4 bits).
    pub step_buffer_size: u8,
    /// Enables the filter cascade.
    pub filter_cascade: bool,
    raw: [u16; STEP_COUNTER_WORDS],
}

impl StepCounterConfig {
    /// Decodes a step counter block read from the device.
    pub const fn from_words(words: [u16; STEP_COUNTER_WORDS]) -> Self {
        Self {
            watermark: words[0] & WATERMARK_MASK,
            reset_counter: words[0] & RESET_COUNTER != 0,
            env_min_dist_up: words[1],
            env_coef_up: words[2],
            env_min_dist_down: words[3],
            env_coef_down: words[4],
            mean_val_decay: words[5],
            mean_step_dur: words[6],
            step_buffer_size: (words[7] & STEP_BUFFER_SIZE_MASK) as u8,
            filter_cascade: words[7] & FILTER_CASCADE != 0,
            raw: words,
        }
    }

    /// Returns the opaque filter coefficients (words 8..=11).
    pub fn filter_coefficients(&self) -> [u16; FILTER_WORDS] {
        let mut out = [0u16; FILTER_WORDS];
        out.copy_from_slice(&self.raw[FILTER_START..]);
        out
    }

    /// Sets the step-counter interrupt watermark.
    #[must_use]
    pub const fn with_watermark(mut self, watermark: u16) -> Self {
        self.watermark = watermark;
        self
    }

    /// Sets the reset request bit.
    #[must_use]
    pub const fn with_reset_counter(mut self, reset: bool) -> Self {
        self.reset_counter = reset;
        self
    }

    /// Sets the upper and lower envelope parameters.
    #[must_use]
    pub const fn with_envelope(
        mut self,
        min_dist_up: u16,
        coef_up: u16,
        min_dist_down: u16,
        coef_down: u16,
    ) -> Self {
        self.env_min_dist_up = min_dist_up;
        self.env_coef_up = coef_up;
        self.env_min_dist_down = min_dist_down;
        self.env_coef_down = coef_down;
        self
    }

    /// Sets the mean value decay and mean step duration coefficients.
    #[must_use]
    pub const fn with_mean(mut self, val_decay: u16, step_dur: u16) -> Self {
        self.mean_val_decay = val_decay;
        self.mean_step_dur = step_dur;
        self
    }

    /// Sets the step buffer size and filter cascade.
    #[must_use]
    pub const fn with_step_buffer(mut self, size: u8, filter_cascade: bool) -> Self {
        self.step_buffer_size = size;
        self.filter_cascade = filter_cascade;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.watermark > WATERMARK_MASK
            || u16::from(self.step_buffer_size) > STEP_BUFFER_SIZE_MASK
        {
            return Err(Error::InvalidArgument);
        }
        Ok(())
    }

    /// Encodes the block, keeping filter words and reserved bits as read.
    pub(crate) fn words(&self) -> [u16; STEP_COUNTER_WORDS] {
        let mut words = self.raw;

        words[0] = (words[0] & !(WATERMARK_MASK | RESET_COUNTER))
            | (self.watermark & WATERMARK_MASK)
            | if self.reset_counter { RESET_COUNTER } else { 0 };
        words[1] = self.env_min_dist_up;
        words[2] = self.env_coef_up;
        words[3] = self.env_min_dist_down;
        words[4] = self.env_coef_down;
        words[5] = self.mean_val_decay;
        words[6] = self.mean_step_dur;
        words[7] = (words[7] & !(STEP_BUFFER_SIZE_MASK | FILTER_CASCADE))
            | (u16::from(self.step_buffer_size) & STEP_BUFFER_SIZE_MASK)
            | if self.filter_cascade { FILTER_CASCADE } else { 0 };
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::register::FeatureAddr;

    fn sample_block() -> [u16; STEP_COUNTER_WORDS] {
        let mut words = [0u16; STEP_COUNTER_WORDS];
        for (index, word) in words.iter_mut().enumerate() {
            *word = 0x0100 + index as u16;
        }
        words[0] = 0xF805;
        words[7] = 0xFFE6;
        words
    }

    #[test]
    fn block_ends_where_orientation_starts() {
        assert_eq!(
            FeatureAddr::StepCounter.addr() as usize + STEP_COUNTER_WORDS,
            FeatureAddr::Orientation.addr() as usize
        );
    }

    #[test]
    fn decode_fields() {
        let config = StepCounterConfig::from_words(sample_block());
        assert_eq!(config.watermark, 5);
        assert!(!config.reset_counter);
        assert_eq!(config.env_min_dist_up, 0x0101);
        assert_eq!(config.mean_step_dur, 0x0106);
        assert_eq!(config.step_buffer_size, 6);
        assert!(!config.filter_cascade);
        assert_eq!(config.filter_coefficients(), [0x0108, 0x0109, 0x010A, 0x010B]);
    }

    #[test]
    fn unchanged_config_round_trips_block() {
        let block = sample_block();
        assert_eq!(StepCounterConfig::from_words(block).words(), block);
    }

    #[test]
    fn modify_keeps_opaque_words_and_reserved_bits() {
        let block = sample_block();
        let config = StepCounterConfig::from_words(block)
            .with_watermark(1)
            .with_reset_counter(true)
            .with_step_buffer(3, true);
        let words = config.words();
        assert_eq!(words[0], 0xFC01);
        assert_eq!(words[7], 0xFFF3);
        assert_eq!(&words[FILTER_START..], &block[FILTER_START..]);
    }

    #[test]
    fn validate_rejects_wide_fields() {
        let config = StepCounterConfig::from_words(sample_block());
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(
            config.with_watermark(0x400).validate(),
            Err(Error::InvalidArgument)
        );
        assert_eq!(
            config.with_step_buffer(16, false).validate(),
            Err(Error::InvalidArgument)
        );
    }
}
