//! Axis remapping and user data-path offset/gain.

use crate::error::Error;
use crate::register::{axis_map, dp_offset_gain};

/// Order in which the physical axes are reported as X, Y and Z.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisMap {
    /// No remapping.
    #[default]
    Xyz,
    /// X and Y swapped.
    Yxz,
    /// Y and Z swapped.
    Xzy,
    /// Z, X, Y.
    Zxy,
    /// Y, Z, X.
    Yzx,
    /// X and Z swapped.
    Zyx,
}

impl AxisMap {
    const fn bits(self) -> u16 {
        match self {
            Self::Xyz => 0,
            Self::Yxz => 1,
            Self::Xzy => 2,
            Self::Zxy => 3,
            Self::Yzx => 4,
            Self::Zyx => 5,
        }
    }

    const fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            0 => Some(Self::Xyz),
            1 => Some(Self::Yxz),
            2 => Some(Self::Xzy),
            3 => Some(Self::Zxy),
            4 => Some(Self::Yzx),
            5 => Some(Self::Zyx),
            _ => None,
        }
    }
}

/// Axis remapping applied by the feature engine to data and feature inputs.
///
/// Sign inversions apply after the axes are reordered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisRemap {
    /// Axis order.
    pub map: AxisMap,
    /// Negate the reported X axis.
    pub invert_x: bool,
    /// Negate the reported Y axis.
    pub invert_y: bool,
    /// Negate the reported Z axis.
    pub invert_z: bool,
}

impl AxisRemap {
    /// Identity mapping.
    pub const DEFAULT: Self = Self {
        map: AxisMap::Xyz,
        invert_x: false,
        invert_y: false,
        invert_z: false,
    };

    /// Creates a remap with the given axis order and no inversions.
    pub const fn new(map: AxisMap) -> Self {
        Self {
            map,
            ..Self::DEFAULT
        }
    }

    /// Sets the per-axis sign inversions.
    #[must_use]
    pub const fn with_inverted(mut self, x: bool, y: bool, z: bool) -> Self {
        self.invert_x = x;
        self.invert_y = y;
        self.invert_z = z;
        self
    }

    pub(crate) const fn word(self) -> u16 {
        let mut word = self.map.bits();
        if self.invert_x {
            word |= axis_map::INVERT_X;
        }
        if self.invert_y {
            word |= axis_map::INVERT_Y;
        }
        if self.invert_z {
            word |= axis_map::INVERT_Z;
        }
        word
    }

    pub(crate) fn from_word(word: u16) -> Result<Self, Error> {
        Ok(Self {
            map: AxisMap::from_bits(word & axis_map::MAP_MASK).ok_or(Error::InvalidData)?,
            invert_x: word & axis_map::INVERT_X != 0,
            invert_y: word & axis_map::INVERT_Y != 0,
            invert_z: word & axis_map::INVERT_Z != 0,
        })
    }
}

const fn sign_extend(raw: u16, bits: u32) -> i16 {
    let shift = 16 - bits;
    ((raw << shift) as i16) >> shift
}

const fn fits_signed(value: i16, bits: u32) -> bool {
    let limit = 1i16 << (bits - 1);
    value >= -limit && value < limit
}

/// Accelerometer data-path offset and gain (ACC_DP_OFF_* / ACC_DP_DGAIN_*).
///
/// Offsets are 14-bit signed counts; gains are 8-bit unsigned corrections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelOffsetGain {
    /// Offset per axis (X, Y, Z).
    pub offset: [i16; 3],
    /// Gain correction per axis (X, Y, Z).
    pub gain: [u8; 3],
}

impl AccelOffsetGain {
    /// Creates an offset/gain set.
    pub const fn new(offset: [i16; 3], gain: [u8; 3]) -> Self {
        Self { offset, gain }
    }

    pub(crate) fn validate(self) -> Result<(), Error> {
        if self
            .offset
            .iter()
            .any(|&offset| !fits_signed(offset, dp_offset_gain::ACC_OFF_BITS))
        {
            return Err(Error::InvalidArgument);
        }
        Ok(())
    }

    /// Register words in address order: offset X, gain X, offset Y, ...
    pub(crate) fn words(self) -> [u16; 6] {
        let mut words = [0u16; 6];
        for ((pair, offset), gain) in words.chunks_exact_mut(2).zip(self.offset).zip(self.gain) {
            pair[0] = offset as u16 & dp_offset_gain::ACC_OFF_MASK;
            pair[1] = u16::from(gain) & dp_offset_gain::ACC_DGAIN_MASK;
        }
        words
    }

    pub(crate) fn from_words(words: [u16; 6]) -> Self {
        let mut value = Self::default();
        for (axis, pair) in words.chunks_exact(2).enumerate() {
            value.offset[axis] = sign_extend(
                pair[0] & dp_offset_gain::ACC_OFF_MASK,
                dp_offset_gain::ACC_OFF_BITS,
            );
            value.gain[axis] = (pair[1] & dp_offset_gain::ACC_DGAIN_MASK) as u8;
        }
        value
    }
}

/// Gyroscope data-path offset and gain (GYR_DP_OFF_* / GYR_DP_DGAIN_*).
///
/// Offsets are 10-bit signed counts; gains are 7-bit unsigned corrections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroOffsetGain {
    /// Offset per axis (X, Y, Z).
    pub offset: [i16; 3],
    /// Gain correction per axis (X, Y, Z).
    pub gain: [u8; 3],
}

impl GyroOffsetGain {
    /// Creates an offset/gain set.
    pub const fn new(offset: [i16; 3], gain: [u8; 3]) -> Self {
        Self { offset, gain }
    }

    pub(crate) fn validate(self) -> Result<(), Error> {
        if self
            .offset
            .iter()
            .any(|&offset| !fits_signed(offset, dp_offset_gain::GYR_OFF_BITS))
            || self
                .gain
                .iter()
                .any(|&gain| u16::from(gain) > dp_offset_gain::GYR_DGAIN_MASK)
        {
            return Err(Error::InvalidArgument);
        }
        Ok(())
    }

    pub(crate) fn words(self) -> [u16; 6] {
        let mut words = [0u16; 6];
        for ((pair, offset), gain) in words.chunks_exact_mut(2).zip(self.offset).zip(self.gain) {
            pair[0] = offset as u16 & dp_offset_gain::GYR_OFF_MASK;
            pair[1] = u16::from(gain) & dp_offset_gain::GYR_DGAIN_MASK;
        }
        words
    }

    pub(crate) fn from_words(words: [u16; 6]) -> Self {
        let mut value = Self::default();
        for (axis, pair) in words.chunks_exact(2).enumerate() {
            value.offset[axis] = sign_extend(
                pair[0] & dp_offset_gain::GYR_OFF_MASK,
                dp_offset_gain::GYR_OFF_BITS,
            );
            value.gain[axis] = (pair[1] & dp_offset_gain::GYR_DGAIN_MASK) as u8;
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remap_word_packs_map_and_signs() {
        let remap = AxisRemap::new(AxisMap::Zyx).with_inverted(true, false, true);
        assert_eq!(remap.word(), 0x0005 | 0x0008 | 0x0020);
        assert_eq!(AxisRemap::from_word(remap.word()), Ok(remap));
        assert_eq!(AxisRemap::from_word(0x0006), Err(Error::InvalidData));
    }

    #[test]
    fn accel_offsets_sign_extend_from_14_bits() {
        let words = [0x3FFF, 0x0080, 0x2000, 0x00FF, 0x1FFF, 0xFF00];
        let value = AccelOffsetGain::from_words(words);
        assert_eq!(value.offset, [-1, -8192, 8191]);
        assert_eq!(value.gain, [0x80, 0xFF, 0x00]);
        assert_eq!(value.words(), [0x3FFF, 0x0080, 0x2000, 0x00FF, 0x1FFF, 0x0000]);
    }

    #[test]
    fn accel_validate_rejects_wide_offset() {
        assert_eq!(AccelOffsetGain::new([8191, -8192, 0], [255; 3]).validate(), Ok(()));
        assert_eq!(
            AccelOffsetGain::new([8192, 0, 0], [0; 3]).validate(),
            Err(Error::InvalidArgument)
        );
    }

    #[test]
    fn gyro_fields_use_narrow_widths() {
        let value = GyroOffsetGain::new([-512, 511, -3], [0x7F, 0, 1]);
        assert_eq!(value.validate(), Ok(()));
        assert_eq!(value.words(), [0x0200, 0x007F, 0x01FF, 0x0000, 0x03FD, 0x0001]);
        assert_eq!(GyroOffsetGain::from_words(value.words()), value);
        assert_eq!(
            GyroOffsetGain::new([512, 0, 0], [0; 3]).validate(),
            Err(Error::InvalidArgument)
        );
        assert_eq!(
            GyroOffsetGain::new([0; 3], [0x80, 0, 0]).validate(),
            Err(Error::InvalidArgument)
        );
    }
}
