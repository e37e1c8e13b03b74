use crate::error::Error;
use crate::register::sensor_conf;

/// Output data rate shared by the accelerometer and gyroscope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputDataRate {
    /// 0.78125 Hz.
    Hz0_78,
    /// 1.5625 Hz.
    Hz1_56,
    /// 3.125 Hz.
    Hz3_125,
    /// 6.25 Hz.
    Hz6_25,
    /// 12.5 Hz.
    Hz12_5,
    /// 25 Hz.
    Hz25,
    /// 50 Hz.
    Hz50,
    /// 100 Hz.
    Hz100,
    /// 200 Hz.
    Hz200,
    /// 400 Hz.
    Hz400,
    /// 800 Hz.
    Hz800,
    /// 1.6 kHz.
    Hz1600,
    /// 3.2 kHz.
    Hz3200,
    /// 6.4 kHz.
    Hz6400,
}

impl OutputDataRate {
    /// Returns the output data rate in milli-hertz.
    pub const fn hz_milli(self) -> u32 {
        match self {
            Self::Hz0_78 => 781,
            Self::Hz1_56 => 1_562,
            Self::Hz3_125 => 3_125,
            Self::Hz6_25 => 6_250,
            Self::Hz12_5 => 12_500,
            Self::Hz25 => 25_000,
            Self::Hz50 => 50_000,
            Self::Hz100 => 100_000,
            Self::Hz200 => 200_000,
            Self::Hz400 => 400_000,
            Self::Hz800 => 800_000,
            Self::Hz1600 => 1_600_000,
            Self::Hz3200 => 3_200_000,
            Self::Hz6400 => 6_400_000,
        }
    }

    pub(crate) const fn bits(self) -> u16 {
        match self {
            Self::Hz0_78 => 0x01,
            Self::Hz1_56 => 0x02,
            Self::Hz3_125 => 0x03,
            Self::Hz6_25 => 0x04,
            Self::Hz12_5 => 0x05,
            Self::Hz25 => 0x06,
            Self::Hz50 => 0x07,
            Self::Hz100 => 0x08,
            Self::Hz200 => 0x09,
            Self::Hz400 => 0x0A,
            Self::Hz800 => 0x0B,
            Self::Hz1600 => 0x0C,
            Self::Hz3200 => 0x0D,
            Self::Hz6400 => 0x0E,
        }
    }

    pub(crate) const fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            0x01 => Some(Self::Hz0_78),
            0x02 => Some(Self::Hz1_56),
            0x03 => Some(Self::Hz3_125),
            0x04 => Some(Self::Hz6_25),
            0x05 => Some(Self::Hz12_5),
            0x06 => Some(Self::Hz25),
            0x07 => Some(Self::Hz50),
            0x08 => Some(Self::Hz100),
            0x09 => Some(Self::Hz200),
            0x0A => Some(Self::Hz400),
            0x0B => Some(Self::Hz800),
            0x0C => Some(Self::Hz1600),
            0x0D => Some(Self::Hz3200),
            0x0E => Some(Self::Hz6400),
            _ => None,
        }
    }
}

/// Accelerometer full-scale range selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelRange {
    /// +/-2 g range.
    G2,
    /// +/-4 g range.
    G4,
    /// +/-8 g range.
    G8,
    /// +/-16 g range.
    G16,
}

impl AccelRange {
    /// Returns the full-scale range in g.
    pub const fn g(self) -> u16 {
        match self {
            Self::G2 => 2,
            Self::G4 => 4,
            Self::G8 => 8,
            Self::G16 => 16,
        }
    }

    pub(crate) const fn bits(self) -> u16 {
        match self {
            Self::G2 => 0b000,
            Self::G4 => 0b001,
            Self::G8 => 0b010,
            Self::G16 => 0b011,
        }
    }

    pub(crate) const fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            0b000 => Some(Self::G2),
            0b001 => Some(Self::G4),
            0b010 => Some(Self::G8),
            0b011 => Some(Self::G16),
            _ => None,
        }
    }
}

/// Gyroscope full-scale range selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroRange {
    /// +/-125 dps range.
    Dps125,
    /// +/-250 dps range.
    Dps250,
    /// +/-500 dps range.
    Dps500,
    /// +/-1000 dps range.
    Dps1000,
    /// +/-2000 dps range.
    Dps2000,
}

impl GyroRange {
    /// Returns the full-scale range in degrees per second.
    pub const fn dps(self) -> u16 {
        match self {
            Self::Dps125 => 125,
            Self::Dps250 => 250,
            Self::Dps500 => 500,
            Self::Dps1000 => 1000,
            Self::Dps2000 => 2000,
        }
    }

    pub(crate) const fn bits(self) -> u16 {
        match self {
            Self::Dps125 => 0b000,
            Self::Dps250 => 0b001,
            Self::Dps500 => 0b010,
            Self::Dps1000 => 0b011,
            Self::Dps2000 => 0b100,
        }
    }

    pub(crate) const fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            0b000 => Some(Self::Dps125),
            0b001 => Some(Self::Dps250),
            0b010 => Some(Self::Dps500),
            0b011 => Some(Self::Dps1000),
            0b100 => Some(Self::Dps2000),
            _ => None,
        }
    }
}

/// Filter bandwidth as a fraction of the output data rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bandwidth {
    /// -3 dB cut-off at ODR/2.
    OdrHalf,
    /// -3 dB cut-off at ODR/4.
    OdrQuarter,
}

impl Bandwidth {
    pub(crate) const fn bits(self) -> u16 {
        match self {
            Self::OdrHalf => 0,
            Self::OdrQuarter => 1,
        }
    }

    pub(crate) const fn from_bits(bits: u16) -> Self {
        if bits == 0 {
            Self::OdrHalf
        } else {
            Self::OdrQuarter
        }
    }
}

/// Number of samples averaged per output sample (low-power modes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Averaging {
    /// No averaging.
    NoAveraging,
    /// 2 samples.
    Avg2,
    /// 4 samples.
    Avg4,
    /// 8 samples.
    Avg8,
    /// 16 samples.
    Avg16,
    /// 32 samples.
    Avg32,
    /// 64 samples.
    Avg64,
}

impl Averaging {
    /// Returns the number of samples averaged.
    pub const fn samples(self) -> u8 {
        match self {
            Self::NoAveraging => 1,
            Self::Avg2 => 2,
            Self::Avg4 => 4,
            Self::Avg8 => 8,
            Self::Avg16 => 16,
            Self::Avg32 => 32,
            Self::Avg64 => 64,
        }
    }

    pub(crate) const fn bits(self) -> u16 {
        match self {
            Self::NoAveraging => 0,
            Self::Avg2 => 1,
            Self::Avg4 => 2,
            Self::Avg8 => 3,
            Self::Avg16 => 4,
            Self::Avg32 => 5,
            Self::Avg64 => 6,
        }
    }

    pub(crate) const fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            0 => Some(Self::NoAveraging),
            1 => Some(Self::Avg2),
            2 => Some(Self::Avg4),
            3 => Some(Self::Avg8),
            4 => Some(Self::Avg16),
            5 => Some(Self::Avg32),
            6 => Some(Self::Avg64),
            _ => None,
        }
    }
}

/// Sensor power mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorMode {
    /// Sensor disabled.
    Disabled,
    /// Duty-cycled low-power mode.
    LowPower,
    /// Continuous normal mode.
    Normal,
    /// Continuous high-performance mode.
    HighPerformance,
}

impl SensorMode {
    pub(crate) const fn bits(self) -> u16 {
        match self {
            Self::Disabled => 0b000,
            Self::LowPower => 0b011,
            Self::Normal => 0b100,
            Self::HighPerformance => 0b111,
        }
    }

    pub(crate) const fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            0b000 => Some(Self::Disabled),
            0b011 => Some(Self::LowPower),
            0b100 => Some(Self::Normal),
            0b111 => Some(Self::HighPerformance),
            _ => None,
        }
    }

    /// Returns true when the sensor produces samples in this mode.
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

/// Checks an ODR against the limits of a power mode.
pub(crate) fn validate_odr(mode: SensorMode, odr: OutputDataRate) -> Result<(), Error> {
    match mode {
        SensorMode::Disabled => Ok(()),
        SensorMode::LowPower if odr > OutputDataRate::Hz400 => Err(Error::InvalidArgument),
        SensorMode::Normal | SensorMode::HighPerformance if odr < OutputDataRate::Hz12_5 => {
            Err(Error::InvalidArgument)
        }
        _ => Ok(()),
    }
}

const fn field(value: u16, shift: u16, mask: u16) -> u16 {
    (value << shift) & mask
}

const fn extract(value: u16, shift: u16, mask: u16) -> u16 {
    (value & mask) >> shift
}

/// Accelerometer configuration (ACC_CONF).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelConfig {
    /// Output data rate.
    pub odr: OutputDataRate,
    /// Full-scale range.
    pub range: AccelRange,
    /// Filter bandwidth.
    pub bandwidth: Bandwidth,
    /// Sample averaging.
    pub averaging: Averaging,
    /// Power mode.
    pub mode: SensorMode,
}

impl AccelConfig {
    /// Default accelerometer configuration (normal mode, 100 Hz, +/-8 g).
    pub const DEFAULT: Self = Self {
        odr: OutputDataRate::Hz100,
        range: AccelRange::G8,
        bandwidth: Bandwidth::OdrHalf,
        averaging: Averaging::NoAveraging,
        mode: SensorMode::Normal,
    };

    /// Creates a normal-mode accelerometer configuration.
    pub const fn new(range: AccelRange, odr: OutputDataRate) -> Self {
        Self {
            odr,
            range,
            ..Self::DEFAULT
        }
    }

    /// Sets the output data rate.
    #[must_use]
    pub const fn with_odr(mut self, odr: OutputDataRate) -> Self {
        self.odr = odr;
        self
    }

    /// Sets the full-scale range.
    #[must_use]
    pub const fn with_range(mut self, range: AccelRange) -> Self {
        self.range = range;
        self
    }

    /// Sets the filter bandwidth.
    #[must_use]
    pub const fn with_bandwidth(mut self, bandwidth: Bandwidth) -> Self {
        self.bandwidth = bandwidth;
        self
    }

    /// Sets sample averaging.
    #[must_use]
    pub const fn with_averaging(mut self, averaging: Averaging) -> Self {
        self.averaging = averaging;
        self
    }

    /// Sets the power mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: SensorMode) -> Self {
        self.mode = mode;
        self
    }

    pub(crate) const fn conf_value(self) -> u16 {
        field(self.odr.bits(), 0, sensor_conf::ODR_MASK)
            | field(self.range.bits(), sensor_conf::RANGE_SHIFT, sensor_conf::RANGE_MASK)
            | field(self.bandwidth.bits(), sensor_conf::BW_SHIFT, sensor_conf::BW_MASK)
            | field(self.averaging.bits(), sensor_conf::AVG_SHIFT, sensor_conf::AVG_MASK)
            | field(self.mode.bits(), sensor_conf::MODE_SHIFT, sensor_conf::MODE_MASK)
    }

    pub(crate) fn from_conf(value: u16) -> Result<Self, Error> {
        Ok(Self {
            odr: OutputDataRate::from_bits(extract(value, 0, sensor_conf::ODR_MASK))
                .ok_or(Error::InvalidData)?,
            range: AccelRange::from_bits(extract(
                value,
                sensor_conf::RANGE_SHIFT,
                sensor_conf::RANGE_MASK,
            ))
            .ok_or(Error::InvalidData)?,
            bandwidth: Bandwidth::from_bits(extract(
                value,
                sensor_conf::BW_SHIFT,
                sensor_conf::BW_MASK,
            )),
            averaging: Averaging::from_bits(extract(
                value,
                sensor_conf::AVG_SHIFT,
                sensor_conf::AVG_MASK,
            ))
            .ok_or(Error::InvalidData)?,
            mode: SensorMode::from_bits(extract(
                value,
                sensor_conf::MODE_SHIFT,
                sensor_conf::MODE_MASK,
            ))
            .ok_or(Error::InvalidData)?,
        })
    }

    pub(crate) fn validate(self) -> Result<(), Error> {
        validate_odr(self.mode, self.odr)
    }
}

impl Default for AccelConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Gyroscope configuration (GYR_CONF).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroConfig {
    /// Output data rate.
    pub odr: OutputDataRate,
    /// Full-scale range.
    pub range: GyroRange,
    /// Filter bandwidth.
    pub bandwidth: Bandwidth,
    /// Sample averaging.
    pub averaging: Averaging,
    /// Power mode.
    pub mode: SensorMode,
}

impl GyroConfig {
    /// Default gyroscope configuration (normal mode, 100 Hz, +/-2000 dps).
    pub const DEFAULT: Self = Self {
        odr: OutputDataRate::Hz100,
        range: GyroRange::Dps2000,
        bandwidth: Bandwidth::OdrHalf,
        averaging: Averaging::NoAveraging,
        mode: SensorMode::Normal,
    };

    /// Creates a normal-mode gyroscope configuration.
    pub const fn new(range: GyroRange, odr: OutputDataRate) -> Self {
        Self {
            odr,
            range,
            ..Self::DEFAULT
        }
    }

    /// Sets the output data rate.
    #[must_use]
    pub const fn with_odr(mut self, odr: OutputDataRate) -> Self {
        self.odr = odr;
        self
    }

    /// Sets the full-scale range.
    #[must_use]
    pub const fn with_range(mut self, range: GyroRange) -> Self {
        self.range = range;
        self
    }

    /// Sets the filter bandwidth.
    #[must_use]
    pub const fn with_bandwidth(mut self, bandwidth: Bandwidth) -> Self {
        self.bandwidth = bandwidth;
        self
    }

    /// Sets sample averaging.
    #[must_use]
    pub const fn with_averaging(mut self, averaging: Averaging) -> Self {
        self.averaging = averaging;
        self
    }

    /// Sets the power mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: SensorMode) -> Self {
        self.mode = mode;
        self
    }

    pub(crate) const fn conf_value(self) -> u16 {
        field(self.odr.bits(), 0, sensor_conf::ODR_MASK)
            | field(self.range.bits(), sensor_conf::RANGE_SHIFT, sensor_conf::RANGE_MASK)
            | field(self.bandwidth.bits(), sensor_conf::BW_SHIFT, sensor_conf::BW_MASK)
            | field(self.averaging.bits(), sensor_conf::AVG_SHIFT, sensor_conf::AVG_MASK)
            | field(self.mode.bits(), sensor_conf::MODE_SHIFT, sensor_conf::MODE_MASK)
    }

    pub(crate) fn from_conf(value: u16) -> Result<Self, Error> {
        Ok(Self {
            odr: OutputDataRate::from_bits(extract(value, 0, sensor_conf::ODR_MASK))
                .ok_or(Error::InvalidData)?,
            range: GyroRange::from_bits(extract(
                value,
                sensor_conf::RANGE_SHIFT,
                sensor_conf::RANGE_MASK,
            ))
            .ok_or(Error::InvalidData)?,
            bandwidth: Bandwidth::from_bits(extract(
                value,
                sensor_conf::BW_SHIFT,
                sensor_conf::BW_MASK,
            )),
            averaging: Averaging::from_bits(extract(
                value,
                sensor_conf::AVG_SHIFT,
                sensor_conf::AVG_MASK,
            ))
            .ok_or(Error::InvalidData)?,
            mode: SensorMode::from_bits(extract(
                value,
                sensor_conf::MODE_SHIFT,
                sensor_conf::MODE_MASK,
            ))
            .ok_or(Error::InvalidData)?,
        })
    }

    pub(crate) fn validate(self) -> Result<(), Error> {
        validate_odr(self.mode, self.odr)
    }
}

impl Default for GyroConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accel_conf_value_packs_fields() {
        let accel = AccelConfig::new(AccelRange::G4, OutputDataRate::Hz200)
            .with_bandwidth(Bandwidth::OdrQuarter)
            .with_averaging(Averaging::Avg8)
            .with_mode(SensorMode::HighPerformance);
        // odr 0x9 | range 1 << 4 | bw 1 << 7 | avg 3 << 8 | mode 7 << 12
        assert_eq!(accel.conf_value(), 0x7399);
        assert_eq!(AccelConfig::from_conf(0x7399), Ok(accel));
    }

    #[test]
    fn gyro_conf_value_packs_fields() {
        let gyro = GyroConfig::DEFAULT;
        assert_eq!(gyro.conf_value(), 0x4048);
        assert_eq!(GyroConfig::from_conf(0x4048), Ok(gyro));
    }

    #[test]
    fn reset_value_decodes_as_disabled() {
        let accel = AccelConfig::from_conf(0x0028).expect("decode");
        assert_eq!(accel.mode, SensorMode::Disabled);
        assert_eq!(accel.range, AccelRange::G8);
        assert_eq!(accel.odr, OutputDataRate::Hz100);
    }

    #[test]
    fn from_conf_rejects_reserved_codes() {
        assert_eq!(AccelConfig::from_conf(0x0000), Err(Error::InvalidData));
        assert_eq!(GyroConfig::from_conf(0x0058), Err(Error::InvalidData));
    }

    #[test]
    fn validate_odr_limits() {
        let low_power = AccelConfig::DEFAULT.with_mode(SensorMode::LowPower);
        assert_eq!(low_power.with_odr(OutputDataRate::Hz400).validate(), Ok(()));
        assert_eq!(
            low_power.with_odr(OutputDataRate::Hz800).validate(),
            Err(Error::InvalidArgument)
        );

        let normal = GyroConfig::DEFAULT.with_odr(OutputDataRate::Hz6_25);
        assert_eq!(normal.validate(), Err(Error::InvalidArgument));
        assert_eq!(normal.with_mode(SensorMode::Disabled).validate(), Ok(()));
    }
}
