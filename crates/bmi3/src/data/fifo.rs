//! FIFO configuration, layout snapshot and readout buffer.

use super::frame::{Extraction, FifoCursor, FifoFrameIterator, extract};
use super::{AccelRaw, GyroRaw, Sample, TemperatureRaw};
use crate::error::Error;
use crate::register::{fifo_conf, fifo_fill_level, fifo_watermark};

/// Hardware FIFO size in bytes.
pub const FIFO_CAPACITY: usize = 2048;

/// FIFO configuration (FIFO_CONF + FIFO_WATERMARK).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FifoConfig {
    /// Store accelerometer frames.
    pub accel: bool,
    /// Store gyroscope frames.
    pub gyro: bool,
    /// Store temperature frames.
    pub temperature: bool,
    /// Append sensor time to every data frame.
    pub sensor_time: bool,
    /// Stop writing when full instead of overwriting the oldest frames.
    pub stop_on_full: bool,
    /// Watermark level in 16-bit words.
    pub watermark_words: u16,
}

impl FifoConfig {
    /// Default FIFO configuration (nothing stored).
    pub const DEFAULT: Self = Self {
        accel: false,
        gyro: false,
        temperature: false,
        sensor_time: false,
        stop_on_full: false,
        watermark_words: 0,
    };

    /// Creates a FIFO configuration storing the selected sensors.
    pub const fn new(accel: bool, gyro: bool, temperature: bool) -> Self {
        Self {
            accel,
            gyro,
            temperature,
            ..Self::DEFAULT
        }
    }

    /// Enables or disables sensor time in data frames.
    #[must_use]
    pub const fn with_sensor_time(mut self, enable: bool) -> Self {
        self.sensor_time = enable;
        self
    }

    /// Enables or disables stop-on-full.
    #[must_use]
    pub const fn with_stop_on_full(mut self, enable: bool) -> Self {
        self.stop_on_full = enable;
        self
    }

    /// Sets the watermark level in 16-bit words.
    #[must_use]
    pub const fn with_watermark_words(mut self, words: u16) -> Self {
        self.watermark_words = words;
        self
    }

    pub(crate) const fn conf_value(self) -> u16 {
        let mut value = 0;
        if self.stop_on_full {
            value |= fifo_conf::STOP_ON_FULL;
        }
        if self.sensor_time {
            value |= fifo_conf::TIME_EN;
        }
        if self.accel {
            value |= fifo_conf::ACC_EN;
        }
        if self.gyro {
            value |= fifo_conf::GYR_EN;
        }
        if self.temperature {
            value |= fifo_conf::TEMP_EN;
        }
        value
    }

    pub(crate) const fn watermark_value(self) -> u16 {
        self.watermark_words & fifo_watermark::MASK
    }

    /// Decodes FIFO_CONF and FIFO_WATERMARK as read back from the device.
    pub(crate) const fn from_regs(conf: u16, watermark: u16) -> Self {
        Self {
            accel: conf & fifo_conf::ACC_EN != 0,
            gyro: conf & fifo_conf::GYR_EN != 0,
            temperature: conf & fifo_conf::TEMP_EN != 0,
            sensor_time: conf & fifo_conf::TIME_EN != 0,
            stop_on_full: conf & fifo_conf::STOP_ON_FULL != 0,
            watermark_words: watermark & fifo_watermark::MASK,
        }
    }

    pub(crate) fn validate(self) -> Result<(), Error> {
        if self.watermark_words > fifo_watermark::MASK {
            return Err(Error::InvalidArgument);
        }
        Ok(())
    }

    /// Returns the frame layout this configuration produces.
    pub const fn layout(self) -> FifoLayout {
        FifoLayout {
            accel: self.accel,
            gyro: self.gyro,
            temperature: self.temperature,
            time_accel: self.accel && self.sensor_time,
            time_gyro: self.gyro && self.sensor_time,
            time_temperature: self.temperature && self.sensor_time,
        }
    }
}

impl Default for FifoConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Read-only snapshot of which frames the FIFO carries and how wide they are.
///
/// Passed to every decode and extraction call; the parser never reads device
/// state on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FifoLayout {
    /// Accelerometer frames may appear.
    pub accel: bool,
    /// Gyroscope frames may appear.
    pub gyro: bool,
    /// Temperature frames may appear.
    pub temperature: bool,
    /// Accelerometer frames carry sensor time.
    pub time_accel: bool,
    /// Gyroscope frames carry sensor time.
    pub time_gyro: bool,
    /// Temperature frames carry sensor time.
    pub time_temperature: bool,
}

impl FifoLayout {
    /// Layout with no sensors enabled.
    pub const NONE: Self = Self {
        accel: false,
        gyro: false,
        temperature: false,
        time_accel: false,
        time_gyro: false,
        time_temperature: false,
    };

    /// Creates a layout for the selected sensors without sensor time.
    pub const fn new(accel: bool, gyro: bool, temperature: bool) -> Self {
        Self {
            accel,
            gyro,
            temperature,
            ..Self::NONE
        }
    }

    /// Sets sensor time for accelerometer frames.
    #[must_use]
    pub const fn with_accel_time(mut self, enable: bool) -> Self {
        self.time_accel = enable;
        self
    }

    /// Sets sensor time for gyroscope frames.
    #[must_use]
    pub const fn with_gyro_time(mut self, enable: bool) -> Self {
        self.time_gyro = enable;
        self
    }

    /// Sets sensor time for temperature frames.
    #[must_use]
    pub const fn with_temperature_time(mut self, enable: bool) -> Self {
        self.time_temperature = enable;
        self
    }
}

/// FIFO fill level decoded from FIFO_FILL_LEVEL.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FifoStatus {
    /// Queued data in 16-bit words.
    pub fill_level_words: u16,
}

impl FifoStatus {
    pub(crate) const fn from_reg(value: u16) -> Self {
        Self {
            fill_level_words: value & fifo_fill_level::MASK,
        }
    }

    /// Returns the queued data in bytes.
    pub const fn bytes(self) -> usize {
        self.fill_level_words as usize * 2
    }

    /// Returns true when nothing is queued.
    pub const fn is_empty(self) -> bool {
        self.fill_level_words == 0
    }
}

/// Result of a FIFO readout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FifoReadout {
    /// Fill level captured before reading.
    pub status: FifoStatus,
    /// Number of bytes read into the buffer.
    pub bytes_read: usize,
    /// True when more data was queued than the buffer could hold.
    pub clamped: bool,
}

/// Number of bytes to read: the queued amount clamped to capacity, in whole words.
pub(crate) const fn fifo_read_len(status: FifoStatus, capacity: usize) -> usize {
    let available = status.bytes();
    let len = if available > capacity {
        capacity
    } else {
        available
    };
    len - (len % 2)
}

/// Owned snapshot of one FIFO readout.
///
/// `N` is the capacity in bytes; the default matches the hardware FIFO.
/// Extraction never consumes the buffer, so every sensor can be pulled from
/// the same snapshot.
#[derive(Clone, Debug)]
pub struct FifoBuffer<const N: usize = FIFO_CAPACITY> {
    data: [u8; N],
    len: usize,
}

impl<const N: usize> FifoBuffer<N> {
    /// Creates an empty buffer.
    pub const fn new() -> Self {
        Self {
            data: [0u8; N],
            len: 0,
        }
    }

    /// Creates a buffer holding a copy of `bytes`.
    ///
    /// Fails with `InvalidArgument` if `bytes` exceeds the capacity.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() > N {
            return Err(Error::InvalidArgument);
        }
        let mut buffer = Self::new();
        buffer.data[..bytes.len()].copy_from_slice(bytes);
        buffer.len = bytes.len();
        Ok(buffer)
    }

    /// Returns the populated bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Returns the number of populated bytes.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true when no bytes are populated.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the buffer capacity in bytes.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Discards the populated bytes.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub(crate) fn storage_mut(&mut self, len: usize) -> &mut [u8] {
        &mut self.data[..len]
    }

    pub(crate) fn set_len(&mut self, len: usize) {
        self.len = len.min(N);
    }

    /// Iterates over the frames in arrival order.
    pub fn frames(&self, layout: FifoLayout) -> FifoFrameIterator<'_> {
        FifoFrameIterator::new(self.as_bytes(), layout)
    }

    /// Extracts accelerometer samples, scanning from the start of the buffer.
    pub fn extract_accel<'a>(
        &self,
        layout: FifoLayout,
        out: &'a mut [Sample<AccelRaw>],
    ) -> Extraction<'a, AccelRaw> {
        extract(self.as_bytes(), layout, &mut FifoCursor::new(), out)
    }

    /// Extracts gyroscope samples, scanning from the start of the buffer.
    pub fn extract_gyro<'a>(
        &self,
        layout: FifoLayout,
        out: &'a mut [Sample<GyroRaw>],
    ) -> Extraction<'a, GyroRaw> {
        extract(self.as_bytes(), layout, &mut FifoCursor::new(), out)
    }

    /// Extracts temperature samples, scanning from the start of the buffer.
    ///
    /// Frames carrying the "no temperature" sentinel are returned as-is.
    pub fn extract_temperature<'a>(
        &self,
        layout: FifoLayout,
        out: &'a mut [Sample<TemperatureRaw>],
    ) -> Extraction<'a, TemperatureRaw> {
        extract(self.as_bytes(), layout, &mut FifoCursor::new(), out)
    }

    /// Extracts accelerometer samples, resuming from `cursor`.
    pub fn extract_accel_from<'a>(
        &self,
        layout: FifoLayout,
        cursor: &mut FifoCursor,
        out: &'a mut [Sample<AccelRaw>],
    ) -> Extraction<'a, AccelRaw> {
        extract(self.as_bytes(), layout, cursor, out)
    }

    /// Extracts gyroscope samples, resuming from `cursor`.
    pub fn extract_gyro_from<'a>(
        &self,
        layout: FifoLayout,
        cursor: &mut FifoCursor,
        out: &'a mut [Sample<GyroRaw>],
    ) -> Extraction<'a, GyroRaw> {
        extract(self.as_bytes(), layout, cursor, out)
    }

    /// Extracts temperature samples, resuming from `cursor`.
    pub fn extract_temperature_from<'a>(
        &self,
        layout: FifoLayout,
        cursor: &mut FifoCursor,
        out: &'a mut [Sample<TemperatureRaw>],
    ) -> Extraction<'a, TemperatureRaw> {
        extract(self.as_bytes(), layout, cursor, out)
    }
}

impl<const N: usize> Default for FifoBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conf_value_sets_enable_bits() {
        let config = FifoConfig::new(true, true, false)
            .with_sensor_time(true)
            .with_stop_on_full(true);
        assert_eq!(config.conf_value(), 0x0701);
    }

    #[test]
    fn from_regs_ignores_reserved_bits() {
        let config = FifoConfig::from_regs(0xFB01, 0xFC40);
        assert_eq!(
            config,
            FifoConfig::new(true, false, true)
                .with_sensor_time(true)
                .with_stop_on_full(true)
                .with_watermark_words(0x40)
        );
    }

    #[test]
    fn layout_stamps_enabled_classes_only() {
        let layout = FifoConfig::new(true, false, true)
            .with_sensor_time(true)
            .layout();
        assert!(layout.time_accel);
        assert!(!layout.time_gyro);
        assert!(layout.time_temperature);
        assert!(!layout.gyro);
    }

    #[test]
    fn watermark_validation() {
        let config = FifoConfig::DEFAULT.with_watermark_words(1023);
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.watermark_value(), 1023);
        let config = config.with_watermark_words(1024);
        assert_eq!(config.validate(), Err(Error::InvalidArgument));
    }

    #[test]
    fn fifo_read_len_clamps_and_aligns() {
        let status = FifoStatus::from_reg(100);
        assert_eq!(fifo_read_len(status, 2048), 200);
        assert_eq!(fifo_read_len(status, 64), 64);
        assert_eq!(fifo_read_len(status, 33), 32);
        assert_eq!(fifo_read_len(FifoStatus::from_reg(0xF800), 64), 0);
    }

    #[test]
    fn buffer_from_bytes_respects_capacity() {
        let buffer = FifoBuffer::<4>::from_bytes(&[1, 2, 3]).expect("fits");
        assert_eq!(buffer.as_bytes(), &[1, 2, 3]);
        assert_eq!(buffer.capacity(), 4);
        assert!(FifoBuffer::<2>::from_bytes(&[1, 2, 3]).is_err());
    }
}
