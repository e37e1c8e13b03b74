//! Feature-engine configuration and event decoding.
//!
//! The feature engine runs on the sensor and owns motion detection, tap
//! detection and step counting. Its enable bits live in FEATURE_IO0 and its
//! parameters in extended memory reached through FEATURE_DATA_ADDR/TX.

pub(crate) mod alternate;
pub(crate) mod motion;
pub(crate) mod step_counter;
pub(crate) mod tap;

pub use alternate::{AltAutoConfig, AltSwitchSource};
pub use motion::{MotionConfig, ReferenceUpdate};
pub use step_counter::{STEP_COUNTER_WORDS, StepCounterConfig};
pub use tap::{TapAxis, TapConfig, TapMode};

use crate::register::{feature_event_ext, feature_io0, feature_io1};

/// Feature enable bits (FEATURE_IO0).
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FeatureEnable {
    /// No-motion detection on the X axis.
    pub no_motion_x: bool,
    /// No-motion detection on the Y axis.
    pub no_motion_y: bool,
    /// No-motion detection on the Z axis.
    pub no_motion_z: bool,
    /// Any-motion detection on the X axis.
    pub any_motion_x: bool,
    /// Any-motion detection on the Y axis.
    pub any_motion_y: bool,
    /// Any-motion detection on the Z axis.
    pub any_motion_z: bool,
    /// Flat detection.
    pub flat: bool,
    /// Orientation detection.
    pub orientation: bool,
    /// Step detector.
    pub step_detector: bool,
    /// Step counter.
    pub step_counter: bool,
    /// Significant motion detection.
    pub sig_motion: bool,
    /// Tilt detection.
    pub tilt: bool,
    /// Single tap detection.
    pub single_tap: bool,
    /// Double tap detection.
    pub double_tap: bool,
    /// Triple tap detection.
    pub triple_tap: bool,
}

impl FeatureEnable {
    /// All features disabled.
    pub const NONE: Self = Self {
        no_motion_x: false,
        no_motion_y: false,
        no_motion_z: false,
        any_motion_x: false,
        any_motion_y: false,
        any_motion_z: false,
        flat: false,
        orientation: false,
        step_detector: false,
        step_counter: false,
        sig_motion: false,
        tilt: false,
        single_tap: false,
        double_tap: false,
        triple_tap: false,
    };

    /// Creates an empty feature selection.
    pub const fn new() -> Self {
        Self::NONE
    }

    /// Enables no-motion detection per axis.
    #[must_use]
    pub const fn with_no_motion(mut self, x: bool, y: bool, z: bool) -> Self {
        self.no_motion_x = x;
        self.no_motion_y = y;
        self.no_motion_z = z;
        self
    }

    /// Enables any-motion detection per axis.
    #[must_use]
    pub const fn with_any_motion(mut self, x: bool, y: bool, z: bool) -> Self {
        self.any_motion_x = x;
        self.any_motion_y = y;
        self.any_motion_z = z;
        self
    }

    /// Enables or disables flat detection.
    #[must_use]
    pub const fn with_flat(mut self, enable: bool) -> Self {
        self.flat = enable;
        self
    }

    /// Enables or disables orientation detection.
    #[must_use]
    pub const fn with_orientation(mut self, enable: bool) -> Self {
        self.orientation = enable;
        self
    }

    /// Enables or disables the step detector.
    #[must_use]
    pub const fn with_step_detector(mut self, enable: bool) -> Self {
        self.step_detector = enable;
        self
    }

    /// Enables or disables the step counter.
    #[must_use]
    pub const fn with_step_counter(mut self, enable: bool) -> Self {
        self.step_counter = enable;
        self
    }

    /// Enables or disables significant motion detection.
    #[must_use]
    pub const fn with_sig_motion(mut self, enable: bool) -> Self {
        self.sig_motion = enable;
        self
    }

    /// Enables or disables tilt detection.
    #[must_use]
    pub const fn with_tilt(mut self, enable: bool) -> Self {
        self.tilt = enable;
        self
    }

    /// Enables single, double and triple tap detection.
    #[must_use]
    pub const fn with_tap(mut self, single: bool, double: bool, triple: bool) -> Self {
        self.single_tap = single;
        self.double_tap = double;
        self.triple_tap = triple;
        self
    }

    pub(crate) const fn io0_value(self) -> u16 {
        let flags = [
            (self.no_motion_x, feature_io0::NO_MOTION_X),
            (self.no_motion_y, feature_io0::NO_MOTION_Y),
            (self.no_motion_z, feature_io0::NO_MOTION_Z),
            (self.any_motion_x, feature_io0::ANY_MOTION_X),
            (self.any_motion_y, feature_io0::ANY_MOTION_Y),
            (self.any_motion_z, feature_io0::ANY_MOTION_Z),
            (self.flat, feature_io0::FLAT),
            (self.orientation, feature_io0::ORIENTATION),
            (self.step_detector, feature_io0::STEP_DETECTOR),
            (self.step_counter, feature_io0::STEP_COUNTER),
            (self.sig_motion, feature_io0::SIG_MOTION),
            (self.tilt, feature_io0::TILT),
            (self.single_tap, feature_io0::TAP_SINGLE),
            (self.double_tap, feature_io0::TAP_DOUBLE),
            (self.triple_tap, feature_io0::TAP_TRIPLE),
        ];
        let mut value = 0;
        let mut index = 0;
        while index < flags.len() {
            if flags[index].0 {
                value |= flags[index].1;
            }
            index += 1;
        }
        value
    }

    pub(crate) const fn from_io0(value: u16) -> Self {
        Self {
            no_motion_x: value & feature_io0::NO_MOTION_X != 0,
            no_motion_y: value & feature_io0::NO_MOTION_Y != 0,
            no_motion_z: value & feature_io0::NO_MOTION_Z != 0,
            any_motion_x: value & feature_io0::ANY_MOTION_X != 0,
            any_motion_y: value & feature_io0::ANY_MOTION_Y != 0,
            any_motion_z: value & feature_io0::ANY_MOTION_Z != 0,
            flat: value & feature_io0::FLAT != 0,
            orientation: value & feature_io0::ORIENTATION != 0,
            step_detector: value & feature_io0::STEP_DETECTOR != 0,
            step_counter: value & feature_io0::STEP_COUNTER != 0,
            sig_motion: value & feature_io0::SIG_MOTION != 0,
            tilt: value & feature_io0::TILT != 0,
            single_tap: value & feature_io0::TAP_SINGLE != 0,
            double_tap: value & feature_io0::TAP_DOUBLE != 0,
            triple_tap: value & feature_io0::TAP_TRIPLE != 0,
        }
    }
}

/// Feature-engine status reported in FEATURE_IO1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FeatureEngineState {
    /// Engine not started.
    Inactive,
    /// Engine running.
    Active,
    /// Configuration string CRC check failed at start-up.
    InitCrcError,
    /// Gain or offset update rejected.
    UgainOffsetUpdateError,
    /// No error since the last read.
    NoError,
    /// Axis remap request rejected.
    AxisMapError,
    /// Timer-sync configuration rejected.
    TcsyncConfigError,
    /// Self-calibration or self-test aborted.
    ScStAborted,
    /// Self-calibration command ignored.
    ScIgnored,
    /// Self-test command ignored.
    StIgnored,
    /// Self-calibration or self-test preconditions not met.
    ScStPreconditionError,
    /// Sensor mode changed while self-calibration or self-test ran.
    ModeChangeWhileScSt,
    /// I3C sync request postponed.
    PostponeI3cSync,
    /// Sensor mode changed during I3C sync.
    ModeChangeWhileI3cSync,
    /// Code not defined for this device.
    Unknown(u8),
}

impl FeatureEngineState {
    pub(crate) const fn from_io1(value: u16) -> Self {
        match (value & feature_io1::ERROR_STATUS_MASK) as u8 {
            0x0 => Self::Inactive,
            0x1 => Self::Active,
            0x3 => Self::InitCrcError,
            0x4 => Self::UgainOffsetUpdateError,
            0x5 => Self::NoError,
            0x6 => Self::AxisMapError,
            0x8 => Self::TcsyncConfigError,
            0x9 => Self::ScStAborted,
            0xA => Self::ScIgnored,
            0xB => Self::StIgnored,
            0xC => Self::ScStPreconditionError,
            0xD => Self::ModeChangeWhileScSt,
            0xE => Self::PostponeI3cSync,
            0xF => Self::ModeChangeWhileI3cSync,
            code => Self::Unknown(code),
        }
    }

    /// Returns true when the engine is running without a reported error.
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Active | Self::NoError)
    }
}

/// Device orientation reported by the orientation feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    /// Portrait, upright.
    PortraitUpright,
    /// Landscape, rotated left.
    LandscapeLeft,
    /// Portrait, upside down.
    PortraitUpsideDown,
    /// Landscape, rotated right.
    LandscapeRight,
}

/// Face direction reported by the orientation feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceDirection {
    /// Face up.
    Up,
    /// Face down.
    Down,
}

/// Event details decoded from FEATURE_EVENT_EXT.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FeatureEvent {
    /// Last detected orientation.
    pub orientation: Orientation,
    /// Last detected face direction.
    pub face: FaceDirection,
    /// Single tap detected.
    pub single_tap: bool,
    /// Double tap detected.
    pub double_tap: bool,
    /// Triple tap detected.
    pub triple_tap: bool,
}

impl FeatureEvent {
    pub(crate) const fn from_reg(value: u16) -> Self {
        let orientation = match value & feature_event_ext::ORIENTATION_MASK {
            0 => Orientation::PortraitUpright,
            1 => Orientation::LandscapeLeft,
            2 => Orientation::PortraitUpsideDown,
            _ => Orientation::LandscapeRight,
        };
        let face = if value & feature_event_ext::FACE_UP_DOWN != 0 {
            FaceDirection::Down
        } else {
            FaceDirection::Up
        };
        Self {
            orientation,
            face,
            single_tap: value & feature_event_ext::SINGLE_TAP != 0,
            double_tap: value & feature_event_ext::DOUBLE_TAP != 0,
            triple_tap: value & feature_event_ext::TRIPLE_TAP != 0,
        }
    }

    /// Returns true if any tap was detected.
    pub const fn any_tap(self) -> bool {
        self.single_tap || self.double_tap || self.triple_tap
    }
}
