//! Async `#![no_std]` driver for the Bosch
//! [BMI323](https://www.bosch-sensortec.com/products/motion-sensors/imus/bmi323/)
//! and BMI330 6-axis IMUs (accelerometer + gyroscope + temperature).
//!
//! The driver is built on `embedded-hal-async` and talks to the device over
//! I2C or SPI. Registers are 16-bit words; the bus adapters take care of the
//! dummy bytes the device prepends to every read.
//!
//! # Quick start (I2C)
//!
//! ```rust,no_run
//! use ph_bmi3::{Bmi3Address, Bmi3I2c, Config, I2cConfig};
//! # use embedded_hal_async::delay::DelayNs;
//! # use embedded_hal_async::i2c::I2c;
//! #
//! # async fn example<I2C: I2c, D: DelayNs>(i2c: I2C, delay: &mut D) -> Result<(), ph_bmi3::Error> {
//! let config = Config::new();
//! let i2c_config = I2cConfig::new(Bmi3Address::Primary.addr());
//! let mut imu: Bmi3I2c<I2C> = Bmi3I2c::with_i2c_config(i2c, None, None, config, i2c_config);
//! imu.init(delay).await?;
//! let sample = imu.read_accel_raw().await?;
//! # let _ = sample;
//! # Ok(())
//! # }
//! ```
//!
//! # FIFO
//!
//! The FIFO is read into a fixed-capacity [`FifoBuffer`] and decoded
//! afterwards. Frames from all enabled sensors arrive interleaved; each
//! `extract_*` call picks out one sensor and steps over the rest.
//!
//! ```rust,no_run
//! use ph_bmi3::{AccelRaw, Bmi3I2c, FifoBuffer, FifoConfig, FifoCursor, GyroRaw, Sample};
//! # use embedded_hal_async::i2c::I2c;
//! #
//! # async fn example<I2C: I2c>(imu: &mut Bmi3I2c<I2C>) -> Result<(), ph_bmi3::Error> {
//! imu.apply_fifo_config(FifoConfig::new(true, true, false).with_sensor_time(true))
//!     .await?;
//!
//! let mut buffer = FifoBuffer::<1024>::new();
//! imu.read_fifo(&mut buffer).await?;
//!
//! let layout = imu.fifo_layout();
//! let mut accel = [Sample::<AccelRaw>::default(); 32];
//! let mut gyro = [Sample::<GyroRaw>::default(); 32];
//! let accel = buffer.extract_accel(layout, &mut accel);
//! let gyro = buffer.extract_gyro(layout, &mut gyro);
//! # let _ = (accel, gyro);
//!
//! // Drain a larger batch in pieces with a caller-owned cursor.
//! let mut cursor = FifoCursor::new();
//! let mut chunk = [Sample::<AccelRaw>::default(); 8];
//! while !buffer.extract_accel_from(layout, &mut cursor, &mut chunk).is_empty() {}
//! # Ok(())
//! # }
//! ```
//!
//! Unknown headers stop a scan and are counted in [`Extraction::anomalies`];
//! they are diagnostics, not errors. Temperature frames carrying the
//! invalid-reading sentinel are returned as-is (see
//! [`TemperatureRaw::is_invalid`]).
//!
//! # Feature engine
//!
//! `init` starts the on-chip feature engine. Motion, tap and step-counter
//! parameters live in its extended memory and are written with the typed
//! `set_*_config` calls; [`FeatureEnable`] switches features on, and
//! [`InterruptMap`] routes their interrupts to INT1/INT2.
//!
//! # Calibration
//!
//! [`AxisRemap`] reorders and negates axes to match the board mounting;
//! [`AccelOffsetGain`] and [`GyroOffsetGain`] expose the user offset and
//! gain corrections applied in the data path.
//!
//! # Scaling helpers
//!
//! Use [`accel_lsb_per_g`], [`gyro_lsb_per_dps`], and [`temperature_lsb_per_celsius`]
//! (or the milli-unit ratios [`accel_mg_per_lsb`] / [`gyro_mdps_per_lsb`]) to
//! convert raw counts to physical units without floating-point math.
//!
//! # Fixed-point conversions
//!
//! Enable the `fixed` feature to access fixed-point helpers that convert raw
//! readings into g, dps, and degrees C using `I32F32` integer math.

#![no_std]
#![deny(missing_docs)]
#![allow(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
// Clippy lint levels.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::type_complexity,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements,
    clippy::let_underscore_future
)]

#[cfg(feature = "fixed")]
extern crate fixed as fixed_crate;

mod calibration;
mod config;
mod data;
mod device;
mod driver;
mod error;
mod feature;
mod interface;
mod interrupt;
mod macros;
mod register;
mod self_test;
mod status;

#[cfg(test)]
mod testing;

// Interface layer
pub use interface::Bmi3Address;
pub use interface::{DEFAULT_MAX_READ_LEN, I2cConfig, I2cInterface};
pub use interface::{SpiConfig, SpiInterface};

// Configuration
pub use config::{AccelConfig, AccelRange, Averaging, Bandwidth, OutputDataRate, SensorMode};
pub use config::{AltAccelConfig, AltConfigControl, AltGyroConfig, AltSensorConfig, AltStatus};
pub use config::{Config, GyroConfig, GyroRange};

// Calibration
pub use calibration::{AccelOffsetGain, AxisMap, AxisRemap, GyroOffsetGain};

// Driver
pub use driver::{Bmi3, Bmi3I2c, Bmi3Spi};
pub use status::{Bmi3Variant, ErrorStatus, SensorStatus};

// Data types
pub use data::{AccelRaw, GyroRaw, RawBlock, Sample, TemperatureRaw, Timestamp};
pub use data::{
    Extraction,
    FIFO_CAPACITY,
    FifoBuffer,
    FifoConfig,
    FifoCursor,
    FifoFrame,
    FifoFrameIterator,
    FifoFrameKind,
    FifoLayout,
    FifoReadout,
    FifoSample,
    FifoStatus,
    FrameDecode,
    ScaleFactor,
    TEMPERATURE_OFFSET_CELSIUS,
    accel_lsb_per_g,
    accel_mg_per_lsb,
    decode_frame,
    gyro_lsb_per_dps,
    gyro_mdps_per_lsb,
    temperature_lsb_per_celsius,
    temperature_mdegc_per_lsb,
};

// Features
pub use error::Error;
pub use feature::{AltAutoConfig, AltSwitchSource};
pub use feature::{FaceDirection, FeatureEnable, FeatureEngineState, FeatureEvent, Orientation};
pub use feature::{MotionConfig, ReferenceUpdate};
pub use feature::{STEP_COUNTER_WORDS, StepCounterConfig};
pub use feature::{TapAxis, TapConfig, TapMode};
pub use interrupt::{IntPinConfig, InterruptMap, InterruptPin, InterruptStatus, InterruptWaitError};
pub use self_test::{GyroCalibration, GyroCalibrationReport, SelfTestReport, SelfTestSelection};

// Fixed-point conversions (feature-gated)
#[cfg(feature = "fixed")]
pub use data::fixed::{
    AccelFixed, Fixed, GyroFixed, TemperatureFixed, accel_sample_to_g, accel_to_g,
    gyro_sample_to_dps, gyro_to_dps, temperature_celsius, temperature_sample_celsius,
};
