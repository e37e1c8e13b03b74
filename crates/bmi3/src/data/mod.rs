//! Sensor data readout helpers.

pub(crate) mod fifo;
#[cfg(feature = "fixed")]
pub(crate) mod fixed;
pub(crate) mod frame;
pub(crate) mod scale;

pub(crate) use fifo::fifo_read_len;
pub use fifo::{FIFO_CAPACITY, FifoBuffer, FifoConfig, FifoLayout, FifoReadout, FifoStatus};
pub use frame::{
    Extraction, FifoCursor, FifoFrame, FifoFrameIterator, FifoFrameKind, FifoSample, FrameDecode,
    decode_frame,
};
pub use scale::{
    ScaleFactor, TEMPERATURE_OFFSET_CELSIUS, accel_lsb_per_g, accel_mg_per_lsb, gyro_lsb_per_dps,
    gyro_mdps_per_lsb, temperature_lsb_per_celsius, temperature_mdegc_per_lsb,
};

use crate::register::Register;

pub(crate) const RAW_BLOCK_START: Register = Register::AccDataX;
pub(crate) const RAW_BLOCK_LEN: usize = 18;
pub(crate) const RAW_BLOCK_ACCEL_OFFSET: usize = 0;
pub(crate) const RAW_BLOCK_GYRO_OFFSET: usize = 6;
pub(crate) const RAW_BLOCK_TEMPERATURE_OFFSET: usize = 12;
pub(crate) const RAW_BLOCK_TIME_OFFSET: usize = 14;

/// Sensor time counter (39.0625 us per tick).
///
/// Register reads return all 32 bits; FIFO frames carry only the low 16.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timestamp {
    /// Raw counter value.
    pub ticks: u32,
}

impl Timestamp {
    /// Duration of one tick in nanoseconds.
    pub const TICK_NS: u32 = 39_062;

    pub(crate) const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self {
            ticks: u32::from_le_bytes(bytes),
        }
    }

    pub(crate) const fn from_fifo_bytes(bytes: [u8; 2]) -> Self {
        Self {
            ticks: u16::from_le_bytes(bytes) as u32,
        }
    }

    /// Returns the counter value in microseconds (wrapping with the counter).
    pub const fn micros(self) -> u64 {
        (self.ticks as u64 * 390_625) / 10_000
    }
}

/// Sample wrapper with an optional sensor time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample<T> {
    /// Sensor time, when the source carries one.
    pub timestamp: Option<Timestamp>,
    /// Sample payload.
    pub data: T,
}

/// Raw accelerometer reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelRaw {
    /// X-axis raw value.
    pub x: i16,
    /// Y-axis raw value.
    pub y: i16,
    /// Z-axis raw value.
    pub z: i16,
}

impl AccelRaw {
    pub(crate) const fn from_bytes(bytes: [u8; 6]) -> Self {
        Self {
            x: i16::from_le_bytes([bytes[0], bytes[1]]),
            y: i16::from_le_bytes([bytes[2], bytes[3]]),
            z: i16::from_le_bytes([bytes[4], bytes[5]]),
        }
    }
}

/// Raw gyroscope reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroRaw {
    /// X-axis raw value.
    pub x: i16,
    /// Y-axis raw value.
    pub y: i16,
    /// Z-axis raw value.
    pub z: i16,
}

impl GyroRaw {
    pub(crate) const fn from_bytes(bytes: [u8; 6]) -> Self {
        Self {
            x: i16::from_le_bytes([bytes[0], bytes[1]]),
            y: i16::from_le_bytes([bytes[2], bytes[3]]),
            z: i16::from_le_bytes([bytes[4], bytes[5]]),
        }
    }
}

/// Raw temperature reading (512 LSB per degree C, 0 LSB = 23 degree C).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TemperatureRaw {
    /// Raw temperature value.
    pub value: i16,
}

impl TemperatureRaw {
    /// Wire value reported when no temperature is available.
    pub const INVALID: i16 = i16::MIN;

    pub(crate) const fn from_bytes(bytes: [u8; 2]) -> Self {
        Self {
            value: i16::from_le_bytes(bytes),
        }
    }

    /// Returns true when the reading is the "no temperature" sentinel (0x8000).
    pub const fn is_invalid(self) -> bool {
        self.value == Self::INVALID
    }

    /// Converts to milli-degrees Celsius, or `None` for the sentinel.
    pub const fn millicelsius(self) -> Option<i32> {
        if self.is_invalid() {
            return None;
        }
        let scale = scale::temperature_lsb_per_celsius();
        Some((self.value as i32 * 1000) / scale + TEMPERATURE_OFFSET_CELSIUS * 1000)
    }
}

/// Accelerometer, gyroscope, temperature and sensor time read in one burst.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawBlock {
    /// Sensor time at readout.
    pub timestamp: Timestamp,
    /// Raw temperature reading.
    pub temperature: TemperatureRaw,
    /// Raw accelerometer reading, if enabled.
    pub accel: Option<AccelRaw>,
    /// Raw gyroscope reading, if enabled.
    pub gyro: Option<GyroRaw>,
}

pub(crate) const fn take6(bytes: &[u8], offset: usize) -> [u8; 6] {
    [
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
        bytes[offset + 4],
        bytes[offset + 5],
    ]
}

/// Decodes a raw block buffer (ACC_DATA_X .. SENSOR_TIME_1) into a structured sample.
pub(crate) fn decode_raw_block(
    buffer: &[u8; RAW_BLOCK_LEN],
    accel_enabled: bool,
    gyro_enabled: bool,
) -> RawBlock {
    let timestamp = Timestamp::from_bytes([
        buffer[RAW_BLOCK_TIME_OFFSET],
        buffer[RAW_BLOCK_TIME_OFFSET + 1],
        buffer[RAW_BLOCK_TIME_OFFSET + 2],
        buffer[RAW_BLOCK_TIME_OFFSET + 3],
    ]);
    let temperature = TemperatureRaw::from_bytes([
        buffer[RAW_BLOCK_TEMPERATURE_OFFSET],
        buffer[RAW_BLOCK_TEMPERATURE_OFFSET + 1],
    ]);

    let accel =
        accel_enabled.then(|| AccelRaw::from_bytes(take6(buffer, RAW_BLOCK_ACCEL_OFFSET)));
    let gyro = gyro_enabled.then(|| GyroRaw::from_bytes(take6(buffer, RAW_BLOCK_GYRO_OFFSET)));

    RawBlock {
        timestamp,
        temperature,
        accel,
        gyro,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_raw_block_offsets() {
        let mut buffer = [0u8; RAW_BLOCK_LEN];
        buffer[..6].copy_from_slice(&[0x01, 0x00, 0xFF, 0xFF, 0x00, 0x40]);
        buffer[6..12].copy_from_slice(&[0x0A, 0x00, 0x0B, 0x00, 0x00, 0x80]);
        buffer[12..14].copy_from_slice(&[0x00, 0x02]);
        buffer[14..18].copy_from_slice(&[0x78, 0x56, 0x34, 0x12]);

        let block = decode_raw_block(&buffer, true, false);
        assert_eq!(block.accel, Some(AccelRaw { x: 1, y: -1, z: 16_384 }));
        assert_eq!(block.gyro, None);
        assert_eq!(block.temperature.value, 512);
        assert_eq!(block.timestamp.ticks, 0x1234_5678);
    }

    #[test]
    fn temperature_conversion_and_sentinel() {
        assert_eq!(TemperatureRaw { value: 512 }.millicelsius(), Some(24_000));
        assert_eq!(TemperatureRaw { value: -512 }.millicelsius(), Some(22_000));
        let invalid = TemperatureRaw::from_bytes([0x00, 0x80]);
        assert!(invalid.is_invalid());
        assert_eq!(invalid.millicelsius(), None);
    }

    #[test]
    fn timestamp_micros() {
        assert_eq!(Timestamp { ticks: 256 }.micros(), 10_000);
        assert_eq!(Timestamp::from_fifo_bytes([0x34, 0x12]).ticks, 0x1234);
    }
}
