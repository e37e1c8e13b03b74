//! Register map and bit masks for the BMI3 family.
//!
//! All registers are 16 bits wide and little-endian on the wire.

#![allow(dead_code)]

/// BMI3 register addresses.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Register {
    /// Chip identification (low byte).
    ChipId = 0x00,
    /// Sensor error conditions.
    ErrReg = 0x01,
    /// Sensor status flags.
    Status = 0x02,
    /// Accelerometer X-axis data.
    AccDataX = 0x03,
    /// Accelerometer Y-axis data.
    AccDataY = 0x04,
    /// Accelerometer Z-axis data.
    AccDataZ = 0x05,
    /// Gyroscope X-axis data.
    GyrDataX = 0x06,
    /// Gyroscope Y-axis data.
    GyrDataY = 0x07,
    /// Gyroscope Z-axis data.
    GyrDataZ = 0x08,
    /// Temperature data.
    TempData = 0x09,
    /// Sensor time, low word.
    SensorTime0 = 0x0A,
    /// Sensor time, high word.
    SensorTime1 = 0x0B,
    /// Saturation flags.
    SatFlags = 0x0C,
    /// Interrupt status for INT1.
    IntStatusInt1 = 0x0D,
    /// Interrupt status for INT2.
    IntStatusInt2 = 0x0E,
    /// Interrupt status for I3C IBI.
    IntStatusIbi = 0x0F,
    /// Feature engine enable bits.
    FeatureIo0 = 0x10,
    /// Feature engine status and results.
    FeatureIo1 = 0x11,
    /// Feature engine data word 2 (step count low word).
    FeatureIo2 = 0x12,
    /// Feature engine data word 3 (step count high word).
    FeatureIo3 = 0x13,
    /// Feature engine IO synchronization.
    FeatureIoStatus = 0x14,
    /// FIFO fill level in words.
    FifoFillLevel = 0x15,
    /// FIFO data output.
    FifoData = 0x16,
    /// Accelerometer configuration.
    AccConf = 0x20,
    /// Gyroscope configuration.
    GyrConf = 0x21,
    /// Alternate accelerometer configuration.
    AltAccConf = 0x28,
    /// Alternate gyroscope configuration.
    AltGyrConf = 0x29,
    /// Alternate configuration control.
    AltConf = 0x2A,
    /// Alternate configuration status.
    AltStatus = 0x2B,
    /// FIFO watermark level in words.
    FifoWatermark = 0x35,
    /// FIFO configuration.
    FifoConf = 0x36,
    /// FIFO control (flush).
    FifoCtrl = 0x37,
    /// Interrupt pin electrical configuration.
    IoIntCtrl = 0x38,
    /// Interrupt latch configuration.
    IntConf = 0x39,
    /// Interrupt mapping for feature events.
    IntMap1 = 0x3A,
    /// Interrupt mapping for data and FIFO events.
    IntMap2 = 0x3B,
    /// Feature engine control.
    FeatureCtrl = 0x40,
    /// Extended feature memory address.
    FeatureDataAddr = 0x41,
    /// Extended feature memory data.
    FeatureDataTx = 0x42,
    /// Extended feature memory transfer status.
    FeatureDataStatus = 0x43,
    /// Feature engine status.
    FeatureEngineStatus = 0x45,
    /// Feature event details (orientation, tap).
    FeatureEventExt = 0x47,
    /// Accelerometer X data-path offset.
    AccDpOffX = 0x60,
    /// Accelerometer X data-path gain.
    AccDpDGainX = 0x61,
    /// Accelerometer Y data-path offset.
    AccDpOffY = 0x62,
    /// Accelerometer Y data-path gain.
    AccDpDGainY = 0x63,
    /// Accelerometer Z data-path offset.
    AccDpOffZ = 0x64,
    /// Accelerometer Z data-path gain.
    AccDpDGainZ = 0x65,
    /// Gyroscope X data-path offset.
    GyrDpOffX = 0x66,
    /// Gyroscope X data-path gain.
    GyrDpDGainX = 0x67,
    /// Gyroscope Y data-path offset.
    GyrDpOffY = 0x68,
    /// Gyroscope Y data-path gain.
    GyrDpDGainY = 0x69,
    /// Gyroscope Z data-path offset.
    GyrDpOffZ = 0x6A,
    /// Gyroscope Z data-path gain.
    GyrDpDGainZ = 0x6B,
    /// Command register.
    Cmd = 0x7E,
    /// Reserved configuration register.
    CfgRes = 0x7F,
}

impl Register {
    /// Returns the register address.
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

/// Extended feature-engine memory addresses (accessed via FEATURE_DATA_ADDR/TX).
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureAddr {
    /// Axis remapping.
    AxisRemap = 0x03,
    /// Any-motion configuration (3 words).
    AnyMotion = 0x05,
    /// No-motion configuration (3 words).
    NoMotion = 0x08,
    /// Flat detection configuration.
    Flat = 0x0B,
    /// Significant motion configuration.
    SigMotion = 0x0D,
    /// Step counter configuration block.
    StepCounter = 0x10,
    /// Orientation configuration.
    Orientation = 0x1C,
    /// Tap configuration (3 words).
    Tap = 0x1E,
    /// Tilt configuration.
    Tilt = 0x21,
    /// Alternate configuration auto-switch sources.
    AltAutoConfig = 0x23,
    /// Self-test result bits.
    SelfTestResult = 0x24,
    /// Self-test sensor selection.
    SelfTestSelect = 0x25,
    /// Gyroscope self-calibration selection.
    GyroScSelect = 0x26,
    /// Gyroscope self-calibration/self-test configuration.
    GyroScStConf = 0x27,
    /// Gyroscope self-calibration/self-test coefficients.
    GyroScStCoefficients = 0x28,
}

impl FeatureAddr {
    /// Returns the extended memory address.
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

pub mod chip_id {
    pub const MASK: u16 = 0x00FF;
    pub const BMI323: u8 = 0x43;
    pub const BMI330: u8 = 0x48;
}

pub mod cmd {
    pub const SOFT_RESET: u16 = 0xDEAF;
    pub const SELF_TEST: u16 = 0x0100;
    pub const SELF_CALIBRATION: u16 = 0x0101;
    pub const AXIS_MAP_UPDATE: u16 = 0x0300;
}

pub mod err_reg {
    pub const FATAL: u16 = 1 << 0;
    pub const FEAT_ENG_OVRLD: u16 = 1 << 2;
    pub const FEAT_ENG_WD: u16 = 1 << 4;
    pub const ACC_CONF_ERR: u16 = 1 << 5;
    pub const GYR_CONF_ERR: u16 = 1 << 6;
    pub const I3C_ERROR0: u16 = 1 << 8;
    pub const I3C_ERROR3: u16 = 1 << 11;
}

pub mod status {
    pub const POR_DETECTED: u16 = 1 << 0;
    pub const DRDY_TEMP: u16 = 1 << 5;
    pub const DRDY_GYR: u16 = 1 << 6;
    pub const DRDY_ACC: u16 = 1 << 7;
}

/// Shared field layout of ACC_CONF, GYR_CONF, ALT_ACC_CONF and ALT_GYR_CONF.
pub mod sensor_conf {
    pub const ODR_MASK: u16 = 0x000F;
    pub const RANGE_SHIFT: u16 = 4;
    pub const RANGE_MASK: u16 = 0x0070;
    pub const BW_SHIFT: u16 = 7;
    pub const BW_MASK: u16 = 0x0080;
    pub const AVG_SHIFT: u16 = 8;
    pub const AVG_MASK: u16 = 0x0700;
    pub const MODE_SHIFT: u16 = 12;
    pub const MODE_MASK: u16 = 0x7000;
}

pub mod alt_conf {
    pub const ACC_EN: u16 = 1 << 0;
    pub const GYR_EN: u16 = 1 << 4;
    pub const RST_CONF_WRITE_EN: u16 = 1 << 8;
}

pub mod alt_status {
    pub const ALT_ACC_ACTIVE: u16 = 1 << 0;
    pub const ALT_GYR_ACTIVE: u16 = 1 << 4;
}

pub mod int_status {
    pub const NO_MOTION: u16 = 1 << 0;
    pub const ANY_MOTION: u16 = 1 << 1;
    pub const FLAT: u16 = 1 << 2;
    pub const ORIENTATION: u16 = 1 << 3;
    pub const STEP_DETECTOR: u16 = 1 << 4;
    pub const STEP_COUNTER: u16 = 1 << 5;
    pub const SIG_MOTION: u16 = 1 << 6;
    pub const TILT: u16 = 1 << 7;
    pub const TAP: u16 = 1 << 8;
    pub const I3C: u16 = 1 << 9;
    pub const ERR_STATUS: u16 = 1 << 10;
    pub const TEMP_DRDY: u16 = 1 << 11;
    pub const GYR_DRDY: u16 = 1 << 12;
    pub const ACC_DRDY: u16 = 1 << 13;
    pub const FWM: u16 = 1 << 14;
    pub const FFULL: u16 = 1 << 15;
}

pub mod feature_io0 {
    pub const NO_MOTION_X: u16 = 1 << 0;
    pub const NO_MOTION_Y: u16 = 1 << 1;
    pub const NO_MOTION_Z: u16 = 1 << 2;
    pub const ANY_MOTION_X: u16 = 1 << 3;
    pub const ANY_MOTION_Y: u16 = 1 << 4;
    pub const ANY_MOTION_Z: u16 = 1 << 5;
    pub const FLAT: u16 = 1 << 6;
    pub const ORIENTATION: u16 = 1 << 7;
    pub const STEP_DETECTOR: u16 = 1 << 8;
    pub const STEP_COUNTER: u16 = 1 << 9;
    pub const SIG_MOTION: u16 = 1 << 10;
    pub const TILT: u16 = 1 << 11;
    pub const TAP_SINGLE: u16 = 1 << 12;
    pub const TAP_DOUBLE: u16 = 1 << 13;
    pub const TAP_TRIPLE: u16 = 1 << 14;
    pub const I3C_SYNC: u16 = 1 << 15;
}

pub mod feature_io1 {
    pub const ERROR_STATUS_MASK: u16 = 0x000F;
    /// Feature engine activated, no error.
    pub const ERROR_STATUS_ACTIVE: u16 = 0x0001;
    pub const SC_ST_COMPLETE: u16 = 1 << 4;
    pub const GYRO_SC_RESULT: u16 = 1 << 5;
    pub const ST_RESULT: u16 = 1 << 6;
    pub const SAMPLE_RATE_ERR: u16 = 1 << 7;
    pub const AXIS_MAP_COMPLETE: u16 = 1 << 10;
    pub const STATE_SHIFT: u16 = 11;
    pub const STATE_MASK: u16 = 0x1800;
}

pub mod feature_io_status {
    pub const SYNC: u16 = 1 << 0;
}

pub mod feature_ctrl {
    pub const ENGINE_EN: u16 = 1 << 0;
}

/// Startup configuration written to FEATURE_IO2 before enabling the engine.
pub const FEATURE_ENGINE_STARTUP: u16 = 0x012C;

pub mod feature_data_status {
    pub const OUT_OF_BOUND: u16 = 1 << 0;
    pub const DATA_TX_READY: u16 = 1 << 1;
}

pub mod feature_event_ext {
    pub const ORIENTATION_MASK: u16 = 0x0003;
    pub const FACE_UP_DOWN: u16 = 1 << 2;
    pub const SINGLE_TAP: u16 = 1 << 3;
    pub const DOUBLE_TAP: u16 = 1 << 4;
    pub const TRIPLE_TAP: u16 = 1 << 5;
}

pub mod fifo_fill_level {
    pub const MASK: u16 = 0x07FF;
}

pub mod fifo_watermark {
    pub const MASK: u16 = 0x03FF;
}

pub mod fifo_conf {
    pub const STOP_ON_FULL: u16 = 1 << 0;
    pub const TIME_EN: u16 = 1 << 8;
    pub const ACC_EN: u16 = 1 << 9;
    pub const GYR_EN: u16 = 1 << 10;
    pub const TEMP_EN: u16 = 1 << 11;
}

pub mod fifo_ctrl {
    pub const FLUSH: u16 = 1 << 0;
}

pub mod io_int_ctrl {
    pub const INT1_LVL: u16 = 1 << 0;
    pub const INT1_OD: u16 = 1 << 1;
    pub const INT1_OUTPUT_EN: u16 = 1 << 2;
    pub const INT2_LVL: u16 = 1 << 8;
    pub const INT2_OD: u16 = 1 << 9;
    pub const INT2_OUTPUT_EN: u16 = 1 << 10;
}

pub mod int_conf {
    pub const LATCHED: u16 = 1 << 0;
}

/// Two-bit field positions within INT_MAP1 and INT_MAP2.
pub mod int_map {
    pub const FIELD_MASK: u16 = 0b11;

    pub const NO_MOTION_SHIFT: u16 = 0;
    pub const ANY_MOTION_SHIFT: u16 = 2;
    pub const FLAT_SHIFT: u16 = 4;
    pub const ORIENTATION_SHIFT: u16 = 6;
    pub const STEP_DETECTOR_SHIFT: u16 = 8;
    pub const STEP_COUNTER_SHIFT: u16 = 10;
    pub const SIG_MOTION_SHIFT: u16 = 12;
    pub const TILT_SHIFT: u16 = 14;

    pub const TAP_SHIFT: u16 = 0;
    pub const I3C_SHIFT: u16 = 2;
    pub const ERR_STATUS_SHIFT: u16 = 4;
    pub const TEMP_DRDY_SHIFT: u16 = 6;
    pub const GYR_DRDY_SHIFT: u16 = 8;
    pub const ACC_DRDY_SHIFT: u16 = 10;
    pub const FWM_SHIFT: u16 = 12;
    pub const FFULL_SHIFT: u16 = 14;
}

/// Self-test selection bits (extended memory ST_SELECT).
pub mod st_select {
    pub const ACC: u16 = 1 << 0;
    pub const GYR: u16 = 1 << 1;
}

/// Self-test result bits (extended memory ST_RESULT).
pub mod st_result {
    pub const ACC_X: u16 = 1 << 0;
    pub const ACC_Y: u16 = 1 << 1;
    pub const ACC_Z: u16 = 1 << 2;
    pub const GYR_X: u16 = 1 << 3;
    pub const GYR_Y: u16 = 1 << 4;
    pub const GYR_Z: u16 = 1 << 5;
    pub const GYR_DRIVE: u16 = 1 << 6;
}

/// Gyroscope self-calibration selection bits (extended memory GYRO_SC_SELECT).
pub mod gyro_sc_select {
    pub const SENSITIVITY: u16 = 1 << 0;
    pub const OFFSET: u16 = 1 << 1;
    pub const APPLY_CORRECTION: u16 = 1 << 2;
}

/// Axis remap word (extended memory AXIS_MAP).
pub mod axis_map {
    pub const MAP_MASK: u16 = 0x0007;
    pub const INVERT_X: u16 = 1 << 3;
    pub const INVERT_Y: u16 = 1 << 4;
    pub const INVERT_Z: u16 = 1 << 5;
}

/// Data-path offset and gain field widths.
pub mod dp_offset_gain {
    pub const ACC_OFF_MASK: u16 = 0x3FFF;
    pub const ACC_OFF_BITS: u32 = 14;
    pub const ACC_DGAIN_MASK: u16 = 0x00FF;
    pub const GYR_OFF_MASK: u16 = 0x03FF;
    pub const GYR_OFF_BITS: u32 = 10;
    pub const GYR_DGAIN_MASK: u16 = 0x007F;
}

/// FIFO frame header bytes.
pub mod fifo_header {
    pub const ACCEL: u8 = 0x84;
    pub const GYRO: u8 = 0x88;
    pub const TEMPERATURE: u8 = 0x90;
    pub const SKIP: u8 = 0x40;
    pub const CONFIG_CHANGE: u8 = 0x48;
    pub const EMPTY: u8 = 0x80;
}
