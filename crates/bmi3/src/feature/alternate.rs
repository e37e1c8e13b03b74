//! Feature events that switch between user and alternate configuration.

use crate::error::Error;

/// Feature event that triggers a configuration switch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AltSwitchSource {
    /// No automatic switch.
    None,
    /// No-motion detected.
    NoMotion,
    /// Any-motion detected.
    AnyMotion,
    /// Flat detected.
    Flat,
    /// Orientation change detected.
    Orientation,
    /// Step detected.
    StepDetector,
    /// Step-counter watermark reached.
    StepCounter,
    /// Significant motion detected.
    SigMotion,
    /// Tilt detected.
    Tilt,
    /// Tap detected.
    Tap,
}

impl AltSwitchSource {
    const fn bits(self) -> u16 {
        match self {
            Self::None => 0,
            Self::NoMotion => 1,
            Self::AnyMotion => 2,
            Self::Flat => 3,
            Self::Orientation => 4,
            Self::StepDetector => 5,
            Self::StepCounter => 6,
            Self::SigMotion => 7,
            Self::Tilt => 8,
            Self::Tap => 9,
        }
    }

    const fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            0 => Some(Self::None),
            1 => Some(Self::NoMotion),
            2 => Some(Self::AnyMotion),
            3 => Some(Self::Flat),
            4 => Some(Self::Orientation),
            5 => Some(Self::StepDetector),
            6 => Some(Self::StepCounter),
            7 => Some(Self::SigMotion),
            8 => Some(Self::Tilt),
            9 => Some(Self::Tap),
            _ => None,
        }
    }
}

/// Automatic switching sources (one word in extended memory).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AltAutoConfig {
    /// Event that switches to the alternate configuration.
    pub alt_switch: AltSwitchSource,
    /// Event that switches back to the user configuration.
    pub user_switch: AltSwitchSource,
}

impl AltAutoConfig {
    /// No automatic switching.
    pub const DEFAULT: Self = Self {
        alt_switch: AltSwitchSource::None,
        user_switch: AltSwitchSource::None,
    };

    /// Creates a switching configuration.
    pub const fn new(alt_switch: AltSwitchSource, user_switch: AltSwitchSource) -> Self {
        Self {
            alt_switch,
            user_switch,
        }
    }

    pub(crate) const fn word(self) -> u16 {
        self.alt_switch.bits() | (self.user_switch.bits() << 4)
    }

    pub(crate) fn from_word(word: u16) -> Result<Self, Error> {
        Ok(Self {
            alt_switch: AltSwitchSource::from_bits(word & 0x0F).ok_or(Error::InvalidData)?,
            user_switch: AltSwitchSource::from_bits((word >> 4) & 0x0F)
                .ok_or(Error::InvalidData)?,
        })
    }
}

impl Default for AltAutoConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_packs_sources() {
        let config = AltAutoConfig::new(AltSwitchSource::AnyMotion, AltSwitchSource::NoMotion);
        assert_eq!(config.word(), 0x0012);
        assert_eq!(AltAutoConfig::from_word(0x0012), Ok(config));
        assert_eq!(AltAutoConfig::from_word(0x00A0), Err(Error::InvalidData));
    }
}
