//! Interrupt pin configuration, routing and status decoding.

use crate::register::{int_map, int_status, io_int_ctrl};

/// Interrupt destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptPin {
    /// Interrupt pin 1.
    Int1,
    /// Interrupt pin 2.
    Int2,
    /// I3C in-band interrupt.
    Ibi,
}

impl InterruptPin {
    const fn field(self) -> u16 {
        match self {
            Self::Int1 => 0b01,
            Self::Int2 => 0b10,
            Self::Ibi => 0b11,
        }
    }
}

/// Electrical configuration of one interrupt pin (IO_INT_CTRL).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IntPinConfig {
    /// Drive the pin high when asserted.
    pub active_high: bool,
    /// Open-drain output instead of push-pull.
    pub open_drain: bool,
    /// Enable the output driver.
    pub enabled: bool,
}

impl IntPinConfig {
    /// Enabled, push-pull, active-high.
    pub const DEFAULT: Self = Self {
        active_high: true,
        open_drain: false,
        enabled: true,
    };

    /// Output driver disabled.
    pub const DISABLED: Self = Self {
        active_high: false,
        open_drain: false,
        enabled: false,
    };

    /// Creates an enabled pin configuration.
    pub const fn new(active_high: bool, open_drain: bool) -> Self {
        Self {
            active_high,
            open_drain,
            enabled: true,
        }
    }

    /// Sets the output level polarity.
    #[must_use]
    pub const fn with_active_high(mut self, active_high: bool) -> Self {
        self.active_high = active_high;
        self
    }

    /// Sets open-drain output.
    #[must_use]
    pub const fn with_open_drain(mut self, open_drain: bool) -> Self {
        self.open_drain = open_drain;
        self
    }

    /// Enables or disables the output driver.
    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    const fn bits(self, level: u16, od: u16, output_en: u16) -> u16 {
        let mut value = 0;
        if self.active_high {
            value |= level;
        }
        if self.open_drain {
            value |= od;
        }
        if self.enabled {
            value |= output_en;
        }
        value
    }

    pub(crate) const fn io_int_ctrl_value(int1: Self, int2: Self) -> u16 {
        int1.bits(
            io_int_ctrl::INT1_LVL,
            io_int_ctrl::INT1_OD,
            io_int_ctrl::INT1_OUTPUT_EN,
        ) | int2.bits(
            io_int_ctrl::INT2_LVL,
            io_int_ctrl::INT2_OD,
            io_int_ctrl::INT2_OUTPUT_EN,
        )
    }
}

impl Default for IntPinConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Routing of every interrupt source (INT_MAP1 + INT_MAP2).
///
/// `None` leaves the source unmapped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptMap {
    /// No-motion.
    pub no_motion: Option<InterruptPin>,
    /// Any-motion.
    pub any_motion: Option<InterruptPin>,
    /// Flat.
    pub flat: Option<InterruptPin>,
    /// Orientation.
    pub orientation: Option<InterruptPin>,
    /// Step detector.
    pub step_detector: Option<InterruptPin>,
    /// Step counter watermark.
    pub step_counter: Option<InterruptPin>,
    /// Significant motion.
    pub sig_motion: Option<InterruptPin>,
    /// Tilt.
    pub tilt: Option<InterruptPin>,
    /// Tap.
    pub tap: Option<InterruptPin>,
    /// I3C sync data ready.
    pub i3c: Option<InterruptPin>,
    /// Feature-engine error status.
    pub error_status: Option<InterruptPin>,
    /// Temperature data ready.
    pub temperature_ready: Option<InterruptPin>,
    /// Gyroscope data ready.
    pub gyro_ready: Option<InterruptPin>,
    /// Accelerometer data ready.
    pub accel_ready: Option<InterruptPin>,
    /// FIFO watermark.
    pub fifo_watermark: Option<InterruptPin>,
    /// FIFO full.
    pub fifo_full: Option<InterruptPin>,
}

macro_rules! map_setters {
    ($($(#[$doc:meta])* $name:ident => $field:ident;)*) => {
        $(
            $(#[$doc])*
            #[must_use]
            pub const fn $name(mut self, pin: Option<InterruptPin>) -> Self {
                self.$field = pin;
                self
            }
        )*
    };
}

const fn route(pin: Option<InterruptPin>, shift: u16) -> u16 {
    match pin {
        Some(pin) => (pin.field() & int_map::FIELD_MASK) << shift,
        None => 0,
    }
}

impl InterruptMap {
    /// Nothing mapped.
    pub const NONE: Self = Self {
        no_motion: None,
        any_motion: None,
        flat: None,
        orientation: None,
        step_detector: None,
        step_counter: None,
        sig_motion: None,
        tilt: None,
        tap: None,
        i3c: None,
        error_status: None,
        temperature_ready: None,
        gyro_ready: None,
        accel_ready: None,
        fifo_watermark: None,
        fifo_full: None,
    };

    /// Creates an empty map.
    pub const fn new() -> Self {
        Self::NONE
    }

    map_setters! {
        /// Routes no-motion.
        with_no_motion => no_motion;
        /// Routes any-motion.
        with_any_motion => any_motion;
        /// Routes flat.
        with_flat => flat;
        /// Routes orientation.
        with_orientation => orientation;
        /// Routes the step detector.
        with_step_detector => step_detector;
        /// Routes the step counter watermark.
        with_step_counter => step_counter;
        /// Routes significant motion.
        with_sig_motion => sig_motion;
        /// Routes tilt.
        with_tilt => tilt;
        /// Routes tap.
        with_tap => tap;
        /// Routes I3C sync data ready.
        with_i3c => i3c;
        /// Routes feature-engine error status.
        with_error_status => error_status;
        /// Routes temperature data ready.
        with_temperature_ready => temperature_ready;
        /// Routes gyroscope data ready.
        with_gyro_ready => gyro_ready;
        /// Routes accelerometer data ready.
        with_accel_ready => accel_ready;
        /// Routes FIFO watermark.
        with_fifo_watermark => fifo_watermark;
        /// Routes FIFO full.
        with_fifo_full => fifo_full;
    }

    pub(crate) const fn map1_value(self) -> u16 {
        route(self.no_motion, int_map::NO_MOTION_SHIFT)
            | route(self.any_motion, int_map::ANY_MOTION_SHIFT)
            | route(self.flat, int_map::FLAT_SHIFT)
            | route(self.orientation, int_map::ORIENTATION_SHIFT)
            | route(self.step_detector, int_map::STEP_DETECTOR_SHIFT)
            | route(self.step_counter, int_map::STEP_COUNTER_SHIFT)
            | route(self.sig_motion, int_map::SIG_MOTION_SHIFT)
            | route(self.tilt, int_map::TILT_SHIFT)
    }

    pub(crate) const fn map2_value(self) -> u16 {
        route(self.tap, int_map::TAP_SHIFT)
            | route(self.i3c, int_map::I3C_SHIFT)
            | route(self.error_status, int_map::ERR_STATUS_SHIFT)
            | route(self.temperature_ready, int_map::TEMP_DRDY_SHIFT)
            | route(self.gyro_ready, int_map::GYR_DRDY_SHIFT)
            | route(self.accel_ready, int_map::ACC_DRDY_SHIFT)
            | route(self.fifo_watermark, int_map::FWM_SHIFT)
            | route(self.fifo_full, int_map::FFULL_SHIFT)
    }
}

/// Decoded interrupt status flags for one destination.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptStatus {
    /// No-motion detected.
    pub no_motion: bool,
    /// Any-motion detected.
    pub any_motion: bool,
    /// Flat detected.
    pub flat: bool,
    /// Orientation changed.
    pub orientation: bool,
    /// Step detected.
    pub step_detector: bool,
    /// Step-counter watermark reached.
    pub step_counter: bool,
    /// Significant motion detected.
    pub sig_motion: bool,
    /// Tilt detected.
    pub tilt: bool,
    /// Tap detected.
    pub tap: bool,
    /// I3C sync data ready.
    pub i3c: bool,
    /// Feature-engine error status changed.
    pub error_status: bool,
    /// Temperature data ready.
    pub temperature_ready: bool,
    /// Gyroscope data ready.
    pub gyro_ready: bool,
    /// Accelerometer data ready.
    pub accel_ready: bool,
    /// FIFO watermark reached.
    pub fifo_watermark: bool,
    /// FIFO full.
    pub fifo_full: bool,
}

impl InterruptStatus {
    pub(crate) const fn from_reg(value: u16) -> Self {
        Self {
            no_motion: value & int_status::NO_MOTION != 0,
            any_motion: value & int_status::ANY_MOTION != 0,
            flat: value & int_status::FLAT != 0,
            orientation: value & int_status::ORIENTATION != 0,
            step_detector: value & int_status::STEP_DETECTOR != 0,
            step_counter: value & int_status::STEP_COUNTER != 0,
            sig_motion: value & int_status::SIG_MOTION != 0,
            tilt: value & int_status::TILT != 0,
            tap: value & int_status::TAP != 0,
            i3c: value & int_status::I3C != 0,
            error_status: value & int_status::ERR_STATUS != 0,
            temperature_ready: value & int_status::TEMP_DRDY != 0,
            gyro_ready: value & int_status::GYR_DRDY != 0,
            accel_ready: value & int_status::ACC_DRDY != 0,
            fifo_watermark: value & int_status::FWM != 0,
            fifo_full: value & int_status::FFULL != 0,
        }
    }

    /// Returns true if any status bit is set.
    pub const fn any(self) -> bool {
        self.no_motion
            || self.any_motion
            || self.flat
            || self.orientation
            || self.step_detector
            || self.step_counter
            || self.sig_motion
            || self.tilt
            || self.tap
            || self.i3c
            || self.error_status
            || self.temperature_ready
            || self.gyro_ready
            || self.accel_ready
            || self.fifo_watermark
            || self.fifo_full
    }
}

/// Error returned when waiting on an interrupt pin.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptWaitError<E> {
    /// Interrupt pin was not provided to the driver.
    Missing,
    /// Underlying pin error.
    Pin(E),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_config_packs_both_pins() {
        let int1 = IntPinConfig::DEFAULT;
        let int2 = IntPinConfig::new(false, true);
        assert_eq!(IntPinConfig::io_int_ctrl_value(int1, int2), 0x0605);
        assert_eq!(
            IntPinConfig::io_int_ctrl_value(IntPinConfig::DISABLED, IntPinConfig::DISABLED),
            0
        );
    }

    #[test]
    fn map_values_place_two_bit_fields() {
        let map = InterruptMap::new()
            .with_any_motion(Some(InterruptPin::Int1))
            .with_no_motion(Some(InterruptPin::Int2))
            .with_step_counter(Some(InterruptPin::Int1))
            .with_tap(Some(InterruptPin::Ibi))
            .with_fifo_watermark(Some(InterruptPin::Int2));
        assert_eq!(map.map1_value(), 0x0406);
        assert_eq!(map.map2_value(), 0x2003);
        assert_eq!(InterruptMap::NONE.map1_value(), 0);
    }

    #[test]
    fn decode_interrupt_status() {
        let status = InterruptStatus::from_reg(
            int_status::ANY_MOTION | int_status::TAP | int_status::FWM | int_status::STEP_COUNTER,
        );
        assert!(status.any_motion);
        assert!(status.tap);
        assert!(status.fifo_watermark);
        assert!(status.step_counter);
        assert!(!status.no_motion);
        assert!(status.any());
        assert!(!InterruptStatus::from_reg(0).any());
    }
}
