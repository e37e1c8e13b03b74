//! BMI3 driver implementation.
//!
//! `Bmi3` owns the bus adapter and the optional INT1/INT2 pins and forwards
//! register-level work to the device core.

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::digital::Wait;
use embedded_hal_async::i2c::I2c;
use embedded_hal_async::spi::SpiDevice;

use crate::calibration::{AccelOffsetGain, AxisRemap, GyroOffsetGain};
use crate::config::{AccelConfig, AltConfigControl, AltSensorConfig, AltStatus, Config, GyroConfig};
use crate::data::{AccelRaw, GyroRaw, RawBlock, Sample, TemperatureRaw, Timestamp};
use crate::data::{FifoBuffer, FifoConfig, FifoLayout, FifoReadout, FifoStatus};
use crate::device::DeviceCore;
use crate::error::Error;
use crate::feature::{
    AltAutoConfig, FeatureEnable, FeatureEngineState, FeatureEvent, MotionConfig,
    StepCounterConfig, TapConfig,
};
use crate::interface::Interface;
use crate::interface::{I2cConfig, I2cInterface};
use crate::interface::{SpiConfig, SpiInterface};
use crate::interrupt::{
    IntPinConfig, InterruptMap, InterruptPin, InterruptStatus, InterruptWaitError,
};
use crate::self_test::{GyroCalibration, GyroCalibrationReport, SelfTestReport, SelfTestSelection};
use crate::status::{Bmi3Variant, ErrorStatus, SensorStatus};

/// BMI3-family 6-axis IMU driver (BMI323, BMI330).
pub struct Bmi3<I, INT1 = (), INT2 = ()> {
    core: DeviceCore<I>,
    int1: Option<INT1>,
    int2: Option<INT2>,
}

/// I2C type alias for the BMI3 driver.
pub type Bmi3I2c<I2C, INT1 = (), INT2 = ()> = Bmi3<I2cInterface<I2C>, INT1, INT2>;
/// SPI type alias for the BMI3 driver.
pub type Bmi3Spi<SPI, INT1 = (), INT2 = ()> = Bmi3<SpiInterface<SPI>, INT1, INT2>;

impl<I2C, INT1, INT2> Bmi3<I2cInterface<I2C>, INT1, INT2>
where
    I2C: I2c,
{
    /// Creates a new I2C-based driver with default settings.
    pub fn new_i2c(i2c: I2C, int1: Option<INT1>, int2: Option<INT2>) -> Self {
        Self::with_i2c_config(i2c, int1, int2, Config::default(), I2cConfig::default())
    }

    /// Creates a new I2C-based driver with a custom configuration.
    pub fn with_i2c_config(
        i2c: I2C,
        int1: Option<INT1>,
        int2: Option<INT2>,
        config: Config,
        i2c_config: I2cConfig,
    ) -> Self {
        let interface = I2cInterface::new(i2c, i2c_config.address);
        let core = DeviceCore::new(interface, config, i2c_config.interface_settings());
        Self { core, int1, int2 }
    }

    /// Updates the I2C address used by the interface.
    pub fn set_i2c_address(&mut self, address: u8) {
        self.core.set_i2c_address(address);
    }

    /// Attempts initialization at each address in turn and returns the one that answered.
    ///
    /// A foreign chip id stops the search. If no address answers the bus,
    /// the result is `NotPresent`.
    pub async fn init_with_addresses<D: DelayNs>(
        &mut self,
        delay: &mut D,
        addresses: &[u8],
    ) -> Result<u8, Error> {
        let mut last_err = None;
        for &address in addresses {
            self.set_i2c_address(address);
            match self.init(delay).await {
                Ok(()) => return Ok(address),
                Err(Error::WrongDevice) => return Err(Error::WrongDevice),
                Err(err) => {
                    #[cfg(feature = "defmt")]
                    defmt::debug!("init at {=u8:#x} failed: {}", address, err);
                    last_err = Some(err);
                }
            }
        }
        Err(match last_err {
            None | Some(Error::Bus) => Error::NotPresent,
            Some(err) => err,
        })
    }

    /// Releases the I2C bus, consuming the driver.
    pub fn release(self) -> I2C {
        self.core.release().release()
    }

    /// Releases the I2C bus and interrupt pins, consuming the driver.
    pub fn release_with_ints(self) -> (I2C, Option<INT1>, Option<INT2>) {
        let interface = self.core.release();
        (interface.release(), self.int1, self.int2)
    }
}

impl<SPI, INT1, INT2> Bmi3<SpiInterface<SPI>, INT1, INT2>
where
    SPI: SpiDevice,
{
    /// Creates a new SPI-based driver.
    pub fn new_spi(spi: SPI, int1: Option<INT1>, int2: Option<INT2>) -> Self {
        Self::with_spi_config(spi, int1, int2, Config::default(), SpiConfig::default())
    }

    /// Creates a new SPI-based driver with a custom configuration.
    pub fn with_spi_config(
        spi: SPI,
        int1: Option<INT1>,
        int2: Option<INT2>,
        config: Config,
        spi_config: SpiConfig,
    ) -> Self {
        let interface = SpiInterface::new(spi);
        let core = DeviceCore::new(interface, config, spi_config.interface_settings());
        Self { core, int1, int2 }
    }

    /// Releases the SPI bus, consuming the driver.
    pub fn release(self) -> SPI {
        self.core.release().release()
    }

    /// Releases the SPI bus and interrupt pins, consuming the driver.
    pub fn release_with_ints(self) -> (SPI, Option<INT1>, Option<INT2>) {
        let interface = self.core.release();
        (interface.release(), self.int1, self.int2)
    }
}

macro_rules! pin_waits {
    ($pin:ident, $ty:ident: $($(#[$doc:meta])* $name:ident => $wait:ident;)*) => {
        $(
            $(#[$doc])*
            pub async fn $name(&mut self) -> Result<(), InterruptWaitError<$ty::Error>>
            where
                $ty: Wait,
            {
                match self.$pin.as_mut() {
                    Some(pin) => pin.$wait().await.map_err(InterruptWaitError::Pin),
                    None => Err(InterruptWaitError::Missing),
                }
            }
        )*
    };
}

impl<I, INT1, INT2> Bmi3<I, INT1, INT2>
where
    I: Interface,
{
    /// Returns the current sensor configuration.
    pub const fn config(&self) -> Config {
        self.core.config()
    }

    /// Updates the stored sensor configuration (call `apply_config` to write it).
    pub fn set_config(&mut self, config: Config) {
        self.core.set_config(config);
    }

    /// Returns the FIFO layout recorded by the last `apply_fifo_config` or
    /// `read_fifo_config`.
    pub const fn fifo_layout(&self) -> FifoLayout {
        self.core.fifo_layout()
    }

    /// Returns the part detected during initialization.
    pub const fn chip_variant(&self) -> Option<Bmi3Variant> {
        self.core.variant()
    }

    /// Initializes the device (soft reset, chip id, feature engine, config).
    pub async fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        self.core.init(delay).await
    }

    /// Performs a software reset.
    pub async fn soft_reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        self.core.soft_reset(delay).await
    }

    /// Reads CHIP_ID and returns the detected part.
    pub async fn verify_device(&mut self) -> Result<Bmi3Variant, Error> {
        self.core.verify_device().await
    }

    /// Starts the feature engine and waits for it to activate.
    pub async fn enable_feature_engine<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        self.core.enable_feature_engine(delay).await
    }

    /// Reads the feature engine state from FEATURE_IO1.
    pub async fn feature_engine_state(&mut self) -> Result<FeatureEngineState, Error> {
        self.core.feature_engine_state().await
    }

    /// Applies the current sensor configuration (ACC_CONF, then GYR_CONF).
    pub async fn apply_config(&mut self) -> Result<(), Error> {
        self.core.apply_config().await
    }

    /// Reads back ACC_CONF.
    pub async fn read_accel_config(&mut self) -> Result<AccelConfig, Error> {
        self.core.read_accel_config().await
    }

    /// Reads back GYR_CONF.
    pub async fn read_gyro_config(&mut self) -> Result<GyroConfig, Error> {
        self.core.read_gyro_config().await
    }

    /// Reads and decodes ERR_REG.
    pub async fn read_error_status(&mut self) -> Result<ErrorStatus, Error> {
        self.core.read_error_status().await
    }

    /// Reads and decodes STATUS.
    ///
    /// Note: reading clears the power-on flag.
    pub async fn read_sensor_status(&mut self) -> Result<SensorStatus, Error> {
        self.core.read_sensor_status().await
    }

    /// Reads the 32-bit sensor time.
    pub async fn read_sensor_time(&mut self) -> Result<Timestamp, Error> {
        self.core.read_sensor_time().await
    }

    /// Reads accelerometer, gyroscope, temperature and sensor time in one burst.
    pub async fn read_raw_block(&mut self) -> Result<RawBlock, Error> {
        self.core.read_raw_block().await
    }

    /// Reads raw accelerometer data (X, Y, Z) with the sensor time.
    pub async fn read_accel_raw(&mut self) -> Result<Sample<AccelRaw>, Error> {
        self.core.read_accel_raw().await
    }

    /// Reads raw gyroscope data (X, Y, Z) with the sensor time.
    pub async fn read_gyro_raw(&mut self) -> Result<Sample<GyroRaw>, Error> {
        self.core.read_gyro_raw().await
    }

    /// Reads raw temperature data with the sensor time.
    pub async fn read_temperature_raw(&mut self) -> Result<Sample<TemperatureRaw>, Error> {
        self.core.read_temperature_raw().await
    }

    /// Applies FIFO configuration and records the frame layout for extraction.
    pub async fn apply_fifo_config(&mut self, config: FifoConfig) -> Result<(), Error> {
        self.core.apply_fifo_config(config).await
    }

    /// Reads the FIFO configuration back from the device and adopts its
    /// frame layout for extraction.
    pub async fn read_fifo_config(&mut self) -> Result<FifoConfig, Error> {
        self.core.read_fifo_config().await
    }

    /// Discards all queued FIFO data.
    pub async fn flush_fifo(&mut self) -> Result<(), Error> {
        self.core.flush_fifo().await
    }

    /// Reads FIFO_FILL_LEVEL.
    pub async fn fifo_fill_level(&mut self) -> Result<FifoStatus, Error> {
        self.core.fifo_fill_level().await
    }

    /// Reads queued FIFO data into `buffer`.
    ///
    /// The read is clamped to the buffer capacity and split into transfers no
    /// larger than the bus `max_read_len`. Decode the result with
    /// `FifoBuffer::extract_*` and [`Self::fifo_layout`]. The device must not
    /// be in auto power save while the FIFO is read.
    pub async fn read_fifo<const N: usize>(
        &mut self,
        buffer: &mut FifoBuffer<N>,
    ) -> Result<FifoReadout, Error> {
        self.core.read_fifo(buffer).await
    }

    /// Enables or disables feature-engine features (FEATURE_IO0).
    pub async fn set_feature_enable(&mut self, enable: FeatureEnable) -> Result<(), Error> {
        self.core.set_feature_enable(enable).await
    }

    /// Reads the enabled feature set (FEATURE_IO0).
    pub async fn get_feature_enable(&mut self) -> Result<FeatureEnable, Error> {
        self.core.get_feature_enable().await
    }

    /// Reads up to 12 words of feature-engine extended memory at `addr`.
    pub async fn read_feature_words(&mut self, addr: u8, words: &mut [u16]) -> Result<(), Error> {
        self.core.read_feature_words(addr, words).await
    }

    /// Writes up to 12 words of feature-engine extended memory at `addr`.
    pub async fn write_feature_words(&mut self, addr: u8, words: &[u16]) -> Result<(), Error> {
        self.core.write_feature_words(addr, words).await
    }

    /// Writes the any-motion parameters.
    pub async fn set_any_motion_config(&mut self, config: MotionConfig) -> Result<(), Error> {
        self.core.set_any_motion_config(config).await
    }

    /// Reads the any-motion parameters.
    pub async fn get_any_motion_config(&mut self) -> Result<MotionConfig, Error> {
        self.core.get_any_motion_config().await
    }

    /// Writes the no-motion parameters.
    pub async fn set_no_motion_config(&mut self, config: MotionConfig) -> Result<(), Error> {
        self.core.set_no_motion_config(config).await
    }

    /// Reads the no-motion parameters.
    pub async fn get_no_motion_config(&mut self) -> Result<MotionConfig, Error> {
        self.core.get_no_motion_config().await
    }

    /// Writes the tap detector parameters.
    pub async fn set_tap_config(&mut self, config: TapConfig) -> Result<(), Error> {
        self.core.set_tap_config(config).await
    }

    /// Reads the tap detector parameters.
    pub async fn get_tap_config(&mut self) -> Result<TapConfig, Error> {
        self.core.get_tap_config().await
    }

    /// Reads the step counter block.
    pub async fn get_step_counter_config(&mut self) -> Result<StepCounterConfig, Error> {
        self.core.get_step_counter_config().await
    }

    /// Writes a step counter block obtained from `get_step_counter_config`.
    pub async fn set_step_counter_config(
        &mut self,
        config: &StepCounterConfig,
    ) -> Result<(), Error> {
        self.core.set_step_counter_config(config).await
    }

    /// Reads the accumulated step count.
    pub async fn read_step_count(&mut self) -> Result<u32, Error> {
        self.core.read_step_count().await
    }

    /// Resets the accumulated step count.
    pub async fn reset_step_counter(&mut self) -> Result<(), Error> {
        self.core.reset_step_counter().await
    }

    /// Selects which features switch between user and alternate configuration.
    pub async fn set_alt_auto_config(&mut self, config: AltAutoConfig) -> Result<(), Error> {
        self.core.set_alt_auto_config(config).await
    }

    /// Reads the alternate switching sources.
    pub async fn get_alt_auto_config(&mut self) -> Result<AltAutoConfig, Error> {
        self.core.get_alt_auto_config().await
    }

    /// Writes an axis remap and waits until the feature engine applies it.
    ///
    /// Returns `InvalidData` if the engine rejects the remap and `NotReady`
    /// if it is not applied in time.
    pub async fn set_axis_remap<D: DelayNs>(
        &mut self,
        delay: &mut D,
        remap: AxisRemap,
    ) -> Result<(), Error> {
        self.core.set_axis_remap(delay, remap).await
    }

    /// Reads the current axis remap.
    pub async fn get_axis_remap(&mut self) -> Result<AxisRemap, Error> {
        self.core.get_axis_remap().await
    }

    /// Reads the accelerometer data-path offset and gain.
    pub async fn get_accel_offset_gain(&mut self) -> Result<AccelOffsetGain, Error> {
        self.core.get_accel_offset_gain().await
    }

    /// Writes the accelerometer data-path offset and gain.
    pub async fn set_accel_offset_gain(&mut self, value: AccelOffsetGain) -> Result<(), Error> {
        self.core.set_accel_offset_gain(value).await
    }

    /// Reads the gyroscope data-path offset and gain.
    pub async fn get_gyro_offset_gain(&mut self) -> Result<GyroOffsetGain, Error> {
        self.core.get_gyro_offset_gain().await
    }

    /// Writes the gyroscope data-path offset and gain.
    pub async fn set_gyro_offset_gain(&mut self, value: GyroOffsetGain) -> Result<(), Error> {
        self.core.set_gyro_offset_gain(value).await
    }

    /// Reads FEATURE_EVENT_EXT (orientation and tap detail).
    pub async fn read_feature_event(&mut self) -> Result<FeatureEvent, Error> {
        self.core.read_feature_event().await
    }

    /// Writes the alternate accelerometer/gyroscope configuration and ALT_CONF.
    pub async fn apply_alt_config(
        &mut self,
        accel: AltSensorConfig,
        gyro: AltSensorConfig,
        control: AltConfigControl,
    ) -> Result<(), Error> {
        self.core.apply_alt_config(accel, gyro, control).await
    }

    /// Reports which sensors currently run on the alternate configuration.
    pub async fn read_alt_status(&mut self) -> Result<AltStatus, Error> {
        self.core.read_alt_status().await
    }

    /// Configures the electrical behaviour of INT1 and INT2 (IO_INT_CTRL).
    pub async fn apply_int_pin_config(
        &mut self,
        int1: IntPinConfig,
        int2: IntPinConfig,
    ) -> Result<(), Error> {
        self.core.apply_int_pin_config(int1, int2).await
    }

    /// Selects latched (`true`) or pulsed interrupts (INT_CONF).
    pub async fn set_interrupt_latch(&mut self, latched: bool) -> Result<(), Error> {
        self.core.set_interrupt_latch(latched).await
    }

    /// Routes interrupt sources to pins (INT_MAP1/INT_MAP2).
    pub async fn apply_interrupt_map(&mut self, map: InterruptMap) -> Result<(), Error> {
        self.core.apply_interrupt_map(map).await
    }

    /// Reads and decodes the interrupt status for one destination.
    ///
    /// Note: reading clears latched bits.
    pub async fn read_interrupt_status(
        &mut self,
        pin: InterruptPin,
    ) -> Result<InterruptStatus, Error> {
        self.core.read_interrupt_status(pin).await
    }

    /// Runs the built-in self-test.
    ///
    /// ACC_CONF is switched to high-performance 200 Hz for the test and
    /// restored afterwards, also on failure. The caller keeps the device
    /// still and the gyroscope idle as the datasheet requires.
    pub async fn run_self_test<D: DelayNs>(
        &mut self,
        delay: &mut D,
        selection: SelfTestSelection,
    ) -> Result<SelfTestReport, Error> {
        self.core.run_self_test(delay, selection).await
    }

    /// Runs gyroscope self-calibration, optionally applying the correction.
    pub async fn run_gyro_self_calibration<D: DelayNs>(
        &mut self,
        delay: &mut D,
        calibration: GyroCalibration,
        apply: bool,
    ) -> Result<GyroCalibrationReport, Error> {
        self.core
            .run_gyro_self_calibration(delay, calibration, apply)
            .await
    }

    pin_waits! { int1, INT1:
        /// Waits for INT1 to go high.
        wait_int1_high => wait_for_high;
        /// Waits for INT1 to go low.
        wait_int1_low => wait_for_low;
        /// Waits for a rising edge on INT1.
        wait_int1_rising_edge => wait_for_rising_edge;
        /// Waits for a falling edge on INT1.
        wait_int1_falling_edge => wait_for_falling_edge;
        /// Waits for any edge on INT1.
        wait_int1_any_edge => wait_for_any_edge;
    }

    pin_waits! { int2, INT2:
        /// Waits for INT2 to go high.
        wait_int2_high => wait_for_high;
        /// Waits for INT2 to go low.
        wait_int2_low => wait_for_low;
        /// Waits for a rising edge on INT2.
        wait_int2_rising_edge => wait_for_rising_edge;
        /// Waits for a falling edge on INT2.
        wait_int2_falling_edge => wait_for_falling_edge;
        /// Waits for any edge on INT2.
        wait_int2_any_edge => wait_for_any_edge;
    }

    /// Returns a reference to the INT1 pin, if provided.
    pub fn int1(&self) -> Option<&INT1> {
        self.int1.as_ref()
    }

    /// Returns a mutable reference to the INT1 pin, if provided.
    pub fn int1_mut(&mut self) -> Option<&mut INT1> {
        self.int1.as_mut()
    }

    /// Returns a reference to the INT2 pin, if provided.
    pub fn int2(&self) -> Option<&INT2> {
        self.int2.as_ref()
    }

    /// Returns a mutable reference to the INT2 pin, if provided.
    pub fn int2_mut(&mut self) -> Option<&mut INT2> {
        self.int2.as_mut()
    }

    /// Takes the INT1 pin out of the driver, leaving None.
    pub fn take_int1(&mut self) -> Option<INT1> {
        self.int1.take()
    }

    /// Takes the INT2 pin out of the driver, leaving None.
    pub fn take_int2(&mut self) -> Option<INT2> {
        self.int2.take()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::convert::Infallible;
    use std::vec::Vec;

    use embedded_hal::digital::ErrorType as PinErrorType;
    use embedded_hal_async::i2c::{ErrorKind, ErrorType, NoAcknowledgeSource, Operation};

    use super::*;
    use crate::data::FifoCursor;
    use crate::interface::InterfaceSettings;
    use crate::register::{Register, chip_id, fifo_header};
    use crate::testing::{MockDelay, MockInterface};
    use futures::executor::block_on;

    /// I2C bus with one device that answers CHIP_ID and FEATURE_IO1 reads.
    struct FakeI2c {
        present: u8,
        chip_id: u16,
        addressed: Vec<u8>,
    }

    impl FakeI2c {
        fn new(present: u8, chip_id: u16) -> Self {
            Self {
                present,
                chip_id,
                addressed: Vec::new(),
            }
        }
    }

    impl ErrorType for FakeI2c {
        type Error = ErrorKind;
    }

    impl I2c for FakeI2c {
        async fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.addressed.last() != Some(&address) {
                self.addressed.push(address);
            }
            if address != self.present {
                return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
            }

            let mut reg = None;
            let mut reads = 0;
            for operation in operations.iter_mut() {
                match operation {
                    Operation::Write(bytes) => {
                        if reg.is_none() {
                            reg = bytes.first().copied();
                        }
                    }
                    Operation::Read(buffer) => {
                        reads += 1;
                        let value = match reg {
                            Some(r) if reads > 1 && r == Register::ChipId.addr() => self.chip_id,
                            Some(r) if reads > 1 && r == Register::FeatureIo1.addr() => 0x0001,
                            _ => 0,
                        };
                        for (slot, byte) in buffer.iter_mut().zip(value.to_le_bytes()) {
                            *slot = byte;
                        }
                    }
                }
            }
            Ok(())
        }
    }

    struct FakePin;

    impl PinErrorType for FakePin {
        type Error = Infallible;
    }

    impl Wait for FakePin {
        async fn wait_for_high(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn wait_for_low(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn wait_for_rising_edge(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn wait_for_falling_edge(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn wait_for_any_edge(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn mock_driver(interface: MockInterface) -> Bmi3<MockInterface, FakePin, FakePin> {
        let core = DeviceCore::new(interface, Config::new(), InterfaceSettings::default());
        Bmi3 {
            core,
            int1: Some(FakePin),
            int2: None,
        }
    }

    #[test]
    fn init_with_addresses_skips_silent_address() {
        let i2c = FakeI2c::new(0x69, u16::from(chip_id::BMI330));
        let mut driver: Bmi3I2c<FakeI2c> = Bmi3::new_i2c(i2c, None, None);
        let mut delay = MockDelay::default();

        let address = block_on(driver.init_with_addresses(&mut delay, &[0x68, 0x69]));

        assert_eq!(address, Ok(0x69));
        assert_eq!(driver.chip_variant(), Some(Bmi3Variant::Bmi330));
        assert_eq!(driver.release().addressed, [0x68, 0x69]);
    }

    #[test]
    fn init_with_addresses_stops_on_foreign_chip() {
        let i2c = FakeI2c::new(0x68, 0x00D1);
        let mut driver: Bmi3I2c<FakeI2c> = Bmi3::new_i2c(i2c, None, None);
        let mut delay = MockDelay::default();

        let result = block_on(driver.init_with_addresses(&mut delay, &[0x68, 0x69]));

        assert_eq!(result, Err(Error::WrongDevice));
        assert_eq!(driver.release().addressed, [0x68]);
    }

    #[test]
    fn init_with_addresses_reports_not_present() {
        let i2c = FakeI2c::new(0x10, u16::from(chip_id::BMI323));
        let mut driver: Bmi3I2c<FakeI2c> = Bmi3::new_i2c(i2c, None, None);
        let mut delay = MockDelay::default();

        let result = block_on(driver.init_with_addresses(&mut delay, &[0x68, 0x69]));

        assert_eq!(result, Err(Error::NotPresent));
    }

    #[test]
    fn fifo_cycle_through_driver() {
        let mut data = Vec::new();
        data.push(fifo_header::ACCEL);
        data.extend_from_slice(&[1, 0, 2, 0, 3, 0, 0x10, 0x00]);
        data.push(fifo_header::TEMPERATURE);
        data.extend_from_slice(&[0x00, 0x80, 0x11, 0x00]);
        data.push(fifo_header::ACCEL);
        data.extend_from_slice(&[4, 0, 5, 0, 6, 0, 0x12, 0x00]);
        data.push(fifo_header::EMPTY);
        let mut driver = mock_driver(MockInterface::default().with_fifo(&data));
        let fifo = FifoConfig::new(true, false, true).with_sensor_time(true);

        block_on(driver.apply_fifo_config(fifo)).expect("fifo config");
        let mut buffer = FifoBuffer::<64>::new();
        let readout = block_on(driver.read_fifo(&mut buffer)).expect("fifo read");
        assert_eq!(readout.bytes_read, data.len());

        let layout = driver.fifo_layout();
        let mut cursor = FifoCursor::new();
        let mut accel = [Sample::default(); 1];
        let first = buffer.extract_accel_from(layout, &mut cursor, &mut accel);
        assert_eq!(first.samples[0].data, AccelRaw { x: 1, y: 2, z: 3 });
        assert_eq!(first.samples[0].timestamp, Some(Timestamp { ticks: 0x10 }));

        let mut temperature = [Sample::default(); 4];
        let temperature = buffer.extract_temperature(layout, &mut temperature);
        assert_eq!(temperature.len(), 1);
        assert!(temperature.samples[0].data.is_invalid());

        let mut accel = [Sample::default(); 4];
        let rest = buffer.extract_accel_from(layout, &mut cursor, &mut accel);
        assert_eq!(rest.samples.len(), 1);
        assert_eq!(rest.samples[0].data, AccelRaw { x: 4, y: 5, z: 6 });
    }

    #[test]
    fn pin_waits_report_missing_pin() {
        let mut driver = mock_driver(MockInterface::default());

        assert!(block_on(driver.wait_int1_rising_edge()).is_ok());
        assert!(matches!(
            block_on(driver.wait_int2_high()),
            Err(InterruptWaitError::Missing)
        ));
        assert!(driver.take_int1().is_some());
        assert!(matches!(
            block_on(driver.wait_int1_low()),
            Err(InterruptWaitError::Missing)
        ));
    }

    #[test]
    fn apply_int_pin_config_writes_io_int_ctrl() {
        let mut driver = mock_driver(MockInterface::default());
        let int1 = IntPinConfig::DEFAULT;
        let int2 = IntPinConfig::DISABLED;

        block_on(driver.apply_int_pin_config(int1, int2)).expect("pins");

        let interface = driver.core.release();
        assert_eq!(
            interface.writes(),
            [(
                Register::IoIntCtrl.addr(),
                IntPinConfig::io_int_ctrl_value(int1, int2)
            )]
        );
    }
}
