//! Device core operations for the BMI3 family.

use embedded_hal_async::delay::DelayNs;

use crate::calibration::{AccelOffsetGain, AxisRemap, GyroOffsetGain};
use crate::config::{AccelConfig, AltConfigControl, AltSensorConfig, AltStatus, Config, GyroConfig};
use crate::config::{OutputDataRate, SensorMode};
use crate::data::{AccelRaw, GyroRaw, RawBlock, Sample, TemperatureRaw, Timestamp, decode_raw_block};
use crate::data::{FifoBuffer, FifoConfig, FifoLayout, FifoReadout, FifoStatus, fifo_read_len};
use crate::error::Error;
use crate::feature::{
    AltAutoConfig, FeatureEnable, FeatureEngineState, FeatureEvent, MotionConfig,
    STEP_COUNTER_WORDS, StepCounterConfig, TapConfig,
};
use crate::interface::I2cInterface;
use crate::interface::{Interface, InterfaceSettings};
use crate::interrupt::{IntPinConfig, InterruptMap, InterruptPin, InterruptStatus};
use crate::register::{
    FEATURE_ENGINE_STARTUP, FeatureAddr, Register, cmd, feature_ctrl, feature_data_status,
    feature_io_status, feature_io1, fifo_ctrl, int_conf,
};
use crate::self_test::{GyroCalibration, GyroCalibrationReport, SelfTestReport, SelfTestSelection};
use crate::status::{Bmi3Variant, ErrorStatus, SensorStatus};

/// Largest extended-memory block transferred in one call.
const MAX_FEATURE_WORDS: usize = STEP_COUNTER_WORDS;

pub(crate) struct DeviceCore<I> {
    interface: I,
    config: Config,
    settings: InterfaceSettings,
    fifo_layout: FifoLayout,
    variant: Option<Bmi3Variant>,
}

impl<I> DeviceCore<I>
where
    I: Interface,
{
    pub(crate) fn new(interface: I, config: Config, settings: InterfaceSettings) -> Self {
        Self {
            interface,
            config,
            settings,
            fifo_layout: FifoLayout::NONE,
            variant: None,
        }
    }

    pub(crate) const fn config(&self) -> Config {
        self.config
    }

    pub(crate) fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    pub(crate) const fn fifo_layout(&self) -> FifoLayout {
        self.fifo_layout
    }

    pub(crate) const fn variant(&self) -> Option<Bmi3Variant> {
        self.variant
    }

    pub(crate) async fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        self.settings.word_aligned_read_len()?;
        self.soft_reset(delay).await?;
        self.verify_device().await?;
        self.enable_feature_engine(delay).await?;
        self.apply_config().await
    }

    pub(crate) async fn soft_reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        self.write_reg(Register::Cmd, cmd::SOFT_RESET).await?;
        delay.delay_ns(1_500_000).await;
        if self.settings.spi {
            // First read after reset switches the interface to SPI.
            self.read_reg(Register::ChipId).await?;
        }
        self.fifo_layout = FifoLayout::NONE;
        Ok(())
    }

    pub(crate) async fn verify_device(&mut self) -> Result<Bmi3Variant, Error> {
        let id = self.read_reg(Register::ChipId).await?;
        let variant = Bmi3Variant::from_chip_id(id).ok_or(Error::WrongDevice)?;
        self.variant = Some(variant);
        Ok(variant)
    }

    /// Starts the feature engine and waits for it to report activation.
    pub(crate) async fn enable_feature_engine<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<(), Error> {
        const POLL_RETRIES: u8 = 10;
        const POLL_DELAY_NS: u32 = 10_000_000;

        self.write_reg(Register::FeatureIo2, FEATURE_ENGINE_STARTUP)
            .await?;
        self.write_reg(Register::FeatureIoStatus, feature_io_status::SYNC)
            .await?;
        self.write_reg(Register::FeatureCtrl, feature_ctrl::ENGINE_EN)
            .await?;

        for _ in 0..POLL_RETRIES {
            delay.delay_ns(POLL_DELAY_NS).await;
            let state = self.feature_engine_state().await?;
            if state.is_running() {
                return Ok(());
            }
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("feature engine did not activate");
        Err(Error::NotReady)
    }

    pub(crate) async fn feature_engine_state(&mut self) -> Result<FeatureEngineState, Error> {
        let io1 = self.read_reg(Register::FeatureIo1).await?;
        Ok(FeatureEngineState::from_io1(io1))
    }

    pub(crate) async fn apply_config(&mut self) -> Result<(), Error> {
        self.config.validate()?;
        self.write_reg(Register::AccConf, self.config.accel.conf_value())
            .await?;
        self.write_reg(Register::GyrConf, self.config.gyro.conf_value())
            .await
    }

    pub(crate) async fn read_accel_config(&mut self) -> Result<AccelConfig, Error> {
        let value = self.read_reg(Register::AccConf).await?;
        AccelConfig::from_conf(value)
    }

    pub(crate) async fn read_gyro_config(&mut self) -> Result<GyroConfig, Error> {
        let value = self.read_reg(Register::GyrConf).await?;
        GyroConfig::from_conf(value)
    }

    pub(crate) async fn read_error_status(&mut self) -> Result<ErrorStatus, Error> {
        let value = self.read_reg(Register::ErrReg).await?;
        Ok(ErrorStatus::from_reg(value))
    }

    pub(crate) async fn read_sensor_status(&mut self) -> Result<SensorStatus, Error> {
        let value = self.read_reg(Register::Status).await?;
        Ok(SensorStatus::from_reg(value))
    }

    /// Reads the 32-bit sensor time.
    pub(crate) async fn read_sensor_time(&mut self) -> Result<Timestamp, Error> {
        let mut buffer = [0u8; 4];
        self.read_regs(Register::SensorTime0, &mut buffer).await?;
        Ok(Timestamp::from_bytes(buffer))
    }

    /// Reads accelerometer, gyroscope, temperature and sensor time in one burst.
    pub(crate) async fn read_raw_block(&mut self) -> Result<RawBlock, Error> {
        let mut buffer = [0u8; crate::data::RAW_BLOCK_LEN];
        self.read_regs(crate::data::RAW_BLOCK_START, &mut buffer)
            .await?;
        Ok(decode_raw_block(
            &buffer,
            self.config.accel_enabled(),
            self.config.gyro_enabled(),
        ))
    }

    /// Reads raw accelerometer data (X, Y, Z) with the sensor time.
    pub(crate) async fn read_accel_raw(&mut self) -> Result<Sample<AccelRaw>, Error> {
        let mut buffer = [0u8; 6];
        self.read_regs(Register::AccDataX, &mut buffer).await?;
        let timestamp = self.read_sensor_time().await?;
        Ok(Sample {
            timestamp: Some(timestamp),
            data: AccelRaw::from_bytes(buffer),
        })
    }

    /// Reads raw gyroscope data (X, Y, Z) with the sensor time.
    pub(crate) async fn read_gyro_raw(&mut self) -> Result<Sample<GyroRaw>, Error> {
        let mut buffer = [0u8; 6];
        self.read_regs(Register::GyrDataX, &mut buffer).await?;
        let timestamp = self.read_sensor_time().await?;
        Ok(Sample {
            timestamp: Some(timestamp),
            data: GyroRaw::from_bytes(buffer),
        })
    }

    /// Reads raw temperature data with the sensor time.
    pub(crate) async fn read_temperature_raw(&mut self) -> Result<Sample<TemperatureRaw>, Error> {
        let mut buffer = [0u8; 2];
        self.read_regs(Register::TempData, &mut buffer).await?;
        let timestamp = self.read_sensor_time().await?;
        Ok(Sample {
            timestamp: Some(timestamp),
            data: TemperatureRaw::from_bytes(buffer),
        })
    }

    /// Applies FIFO configuration (watermark, stored frames) and records the layout.
    pub(crate) async fn apply_fifo_config(&mut self, config: FifoConfig) -> Result<(), Error> {
        config.validate()?;
        self.write_reg(Register::FifoWatermark, config.watermark_value())
            .await?;
        self.write_reg(Register::FifoConf, config.conf_value())
            .await?;
        self.fifo_layout = config.layout();
        Ok(())
    }

    /// Reads FIFO_CONF and FIFO_WATERMARK back and adopts the frame layout
    /// they describe.
    pub(crate) async fn read_fifo_config(&mut self) -> Result<FifoConfig, Error> {
        let watermark = self.read_reg(Register::FifoWatermark).await?;
        let conf = self.read_reg(Register::FifoConf).await?;
        let config = FifoConfig::from_regs(conf, watermark);
        self.fifo_layout = config.layout();
        Ok(config)
    }

    /// Discards all queued FIFO data.
    pub(crate) async fn flush_fifo(&mut self) -> Result<(), Error> {
        self.write_reg(Register::FifoCtrl, fifo_ctrl::FLUSH).await
    }

    /// Returns the queued FIFO data in words.
    pub(crate) async fn fifo_fill_level(&mut self) -> Result<FifoStatus, Error> {
        let value = self.read_reg(Register::FifoFillLevel).await?;
        Ok(FifoStatus::from_reg(value))
    }

    /// Reads queued FIFO data into `buffer`, chunked to the transfer limit.
    ///
    /// On error the buffer is left empty.
    pub(crate) async fn read_fifo<const N: usize>(
        &mut self,
        buffer: &mut FifoBuffer<N>,
    ) -> Result<FifoReadout, Error> {
        buffer.clear();
        if N == 0 {
            return Err(Error::InvalidArgument);
        }

        let chunk = self.settings.word_aligned_read_len()?;
        let status = self.fifo_fill_level().await?;
        let len = fifo_read_len(status, N);
        let clamped = status.bytes() > len;
        #[cfg(feature = "defmt")]
        if clamped {
            defmt::warn!("FIFO read clamped to {} of {} bytes", len, status.bytes());
        }

        for part in buffer.storage_mut(len).chunks_mut(chunk) {
            self.read_regs(Register::FifoData, part).await?;
        }
        buffer.set_len(len);

        Ok(FifoReadout {
            status,
            bytes_read: len,
            clamped,
        })
    }

    pub(crate) async fn set_feature_enable(&mut self, enable: FeatureEnable) -> Result<(), Error> {
        self.write_reg(Register::FeatureIo0, enable.io0_value())
            .await?;
        self.write_reg(Register::FeatureIoStatus, feature_io_status::SYNC)
            .await
    }

    pub(crate) async fn get_feature_enable(&mut self) -> Result<FeatureEnable, Error> {
        let value = self.read_reg(Register::FeatureIo0).await?;
        Ok(FeatureEnable::from_io0(value))
    }

    /// Waits until the extended-memory port accepts a transfer.
    async fn wait_feature_data_ready(&mut self) -> Result<(), Error> {
        const POLL_RETRIES: u8 = 10;

        for _ in 0..POLL_RETRIES {
            let status = self.read_reg(Register::FeatureDataStatus).await?;
            if (status & feature_data_status::DATA_TX_READY) != 0 {
                return Ok(());
            }
        }
        Err(Error::NotReady)
    }

    /// Reads consecutive words from feature-engine extended memory.
    pub(crate) async fn read_feature_words(
        &mut self,
        addr: u8,
        words: &mut [u16],
    ) -> Result<(), Error> {
        if words.is_empty() || words.len() > MAX_FEATURE_WORDS {
            return Err(Error::InvalidArgument);
        }
        let chunk = self.settings.word_aligned_read_len()?;
        self.wait_feature_data_ready().await?;
        self.write_reg(Register::FeatureDataAddr, u16::from(addr))
            .await?;

        let mut bytes = [0u8; MAX_FEATURE_WORDS * 2];
        let bytes = &mut bytes[..words.len() * 2];
        for part in bytes.chunks_mut(chunk) {
            self.read_regs(Register::FeatureDataTx, part).await?;
        }
        for (word, pair) in words.iter_mut().zip(bytes.chunks_exact(2)) {
            *word = u16::from_le_bytes([pair[0], pair[1]]);
        }
        Ok(())
    }

    /// Writes consecutive words to feature-engine extended memory.
    pub(crate) async fn write_feature_words(&mut self, addr: u8, words: &[u16]) -> Result<(), Error> {
        if words.is_empty() || words.len() > MAX_FEATURE_WORDS {
            return Err(Error::InvalidArgument);
        }
        self.wait_feature_data_ready().await?;
        self.write_reg(Register::FeatureDataAddr, u16::from(addr))
            .await?;

        let mut bytes = [0u8; MAX_FEATURE_WORDS * 2];
        for (pair, word) in bytes.chunks_exact_mut(2).zip(words) {
            pair.copy_from_slice(&word.to_le_bytes());
        }
        self.write_regs(Register::FeatureDataTx, &bytes[..words.len() * 2])
            .await
    }

    async fn read_feature_block<const W: usize>(
        &mut self,
        addr: FeatureAddr,
    ) -> Result<[u16; W], Error> {
        let mut words = [0u16; W];
        self.read_feature_words(addr.addr(), &mut words).await?;
        Ok(words)
    }

    pub(crate) async fn set_any_motion_config(&mut self, config: MotionConfig) -> Result<(), Error> {
        config.validate()?;
        self.write_feature_words(FeatureAddr::AnyMotion.addr(), &config.words())
            .await
    }

    pub(crate) async fn get_any_motion_config(&mut self) -> Result<MotionConfig, Error> {
        let words = self.read_feature_block(FeatureAddr::AnyMotion).await?;
        Ok(MotionConfig::from_words(words))
    }

    pub(crate) async fn set_no_motion_config(&mut self, config: MotionConfig) -> Result<(), Error> {
        config.validate()?;
        self.write_feature_words(FeatureAddr::NoMotion.addr(), &config.words())
            .await
    }

    pub(crate) async fn get_no_motion_config(&mut self) -> Result<MotionConfig, Error> {
        let words = self.read_feature_block(FeatureAddr::NoMotion).await?;
        Ok(MotionConfig::from_words(words))
    }

    pub(crate) async fn set_tap_config(&mut self, config: TapConfig) -> Result<(), Error> {
        config.validate()?;
        self.write_feature_words(FeatureAddr::Tap.addr(), &config.words())
            .await
    }

    pub(crate) async fn get_tap_config(&mut self) -> Result<TapConfig, Error> {
        let words = self.read_feature_block(FeatureAddr::Tap).await?;
        TapConfig::from_words(words)
    }

    pub(crate) async fn get_step_counter_config(&mut self) -> Result<StepCounterConfig, Error> {
        let words = self.read_feature_block(FeatureAddr::StepCounter).await?;
        Ok(StepCounterConfig::from_words(words))
    }

    pub(crate) async fn set_step_counter_config(
        &mut self,
        config: &StepCounterConfig,
    ) -> Result<(), Error> {
        config.validate()?;
        self.write_feature_words(FeatureAddr::StepCounter.addr(), &config.words())
            .await
    }

    /// Reads the accumulated step count (FEATURE_IO2 low, FEATURE_IO3 high).
    pub(crate) async fn read_step_count(&mut self) -> Result<u32, Error> {
        let mut buffer = [0u8; 4];
        self.read_regs(Register::FeatureIo2, &mut buffer).await?;
        Ok(u32::from_le_bytes(buffer))
    }

    pub(crate) async fn reset_step_counter(&mut self) -> Result<(), Error> {
        let config = self.get_step_counter_config().await?.with_reset_counter(true);
        self.set_step_counter_config(&config).await
    }

    pub(crate) async fn set_alt_auto_config(&mut self, config: AltAutoConfig) -> Result<(), Error> {
        self.write_feature_words(FeatureAddr::AltAutoConfig.addr(), &[config.word()])
            .await
    }

    pub(crate) async fn get_alt_auto_config(&mut self) -> Result<AltAutoConfig, Error> {
        let words: [u16; 1] = self.read_feature_block(FeatureAddr::AltAutoConfig).await?;
        AltAutoConfig::from_word(words[0])
    }

    /// Writes the axis remap and waits for the engine to apply it.
    pub(crate) async fn set_axis_remap<D: DelayNs>(
        &mut self,
        delay: &mut D,
        remap: AxisRemap,
    ) -> Result<(), Error> {
        const POLL_RETRIES: u8 = 10;
        const POLL_DELAY_NS: u32 = 1_000_000;

        self.write_feature_words(FeatureAddr::AxisRemap.addr(), &[remap.word()])
            .await?;
        self.write_reg(Register::Cmd, cmd::AXIS_MAP_UPDATE).await?;

        for _ in 0..POLL_RETRIES {
            delay.delay_ns(POLL_DELAY_NS).await;
            let io1 = self.read_reg(Register::FeatureIo1).await?;
            if FeatureEngineState::from_io1(io1) == FeatureEngineState::AxisMapError {
                return Err(Error::InvalidData);
            }
            if (io1 & feature_io1::AXIS_MAP_COMPLETE) != 0 {
                return Ok(());
            }
        }
        Err(Error::NotReady)
    }

    pub(crate) async fn get_axis_remap(&mut self) -> Result<AxisRemap, Error> {
        let words: [u16; 1] = self.read_feature_block(FeatureAddr::AxisRemap).await?;
        AxisRemap::from_word(words[0])
    }

    async fn read_dp_words(&mut self, first: Register) -> Result<[u16; 6], Error> {
        let mut buffer = [0u8; 12];
        self.read_regs(first, &mut buffer).await?;
        let mut words = [0u16; 6];
        for (word, pair) in words.iter_mut().zip(buffer.chunks_exact(2)) {
            *word = u16::from_le_bytes([pair[0], pair[1]]);
        }
        Ok(words)
    }

    async fn write_dp_words(&mut self, first: Register, words: [u16; 6]) -> Result<(), Error> {
        let mut buffer = [0u8; 12];
        for (pair, word) in buffer.chunks_exact_mut(2).zip(words) {
            pair.copy_from_slice(&word.to_le_bytes());
        }
        self.write_regs(first, &buffer).await
    }

    pub(crate) async fn get_accel_offset_gain(&mut self) -> Result<AccelOffsetGain, Error> {
        let words = self.read_dp_words(Register::AccDpOffX).await?;
        Ok(AccelOffsetGain::from_words(words))
    }

    pub(crate) async fn set_accel_offset_gain(&mut self, value: AccelOffsetGain) -> Result<(), Error> {
        value.validate()?;
        self.write_dp_words(Register::AccDpOffX, value.words()).await
    }

    pub(crate) async fn get_gyro_offset_gain(&mut self) -> Result<GyroOffsetGain, Error> {
        let words = self.read_dp_words(Register::GyrDpOffX).await?;
        Ok(GyroOffsetGain::from_words(words))
    }

    pub(crate) async fn set_gyro_offset_gain(&mut self, value: GyroOffsetGain) -> Result<(), Error> {
        value.validate()?;
        self.write_dp_words(Register::GyrDpOffX, value.words()).await
    }

    pub(crate) async fn read_feature_event(&mut self) -> Result<FeatureEvent, Error> {
        let value = self.read_reg(Register::FeatureEventExt).await?;
        Ok(FeatureEvent::from_reg(value))
    }

    /// Writes the alternate sensor configurations, then ALT_CONF.
    pub(crate) async fn apply_alt_config(
        &mut self,
        accel: AltSensorConfig,
        gyro: AltSensorConfig,
        control: AltConfigControl,
    ) -> Result<(), Error> {
        accel.validate()?;
        gyro.validate()?;
        self.write_reg(Register::AltAccConf, accel.conf_value())
            .await?;
        self.write_reg(Register::AltGyrConf, gyro.conf_value())
            .await?;
        self.write_reg(Register::AltConf, control.alt_conf_value())
            .await
    }

    pub(crate) async fn read_alt_status(&mut self) -> Result<AltStatus, Error> {
        let value = self.read_reg(Register::AltStatus).await?;
        Ok(AltStatus::from_reg(value))
    }

    pub(crate) async fn apply_int_pin_config(
        &mut self,
        int1: IntPinConfig,
        int2: IntPinConfig,
    ) -> Result<(), Error> {
        self.write_reg(
            Register::IoIntCtrl,
            IntPinConfig::io_int_ctrl_value(int1, int2),
        )
        .await
    }

    pub(crate) async fn set_interrupt_latch(&mut self, latched: bool) -> Result<(), Error> {
        let value = if latched { int_conf::LATCHED } else { 0 };
        self.write_reg(Register::IntConf, value).await
    }

    pub(crate) async fn apply_interrupt_map(&mut self, map: InterruptMap) -> Result<(), Error> {
        self.write_reg(Register::IntMap1, map.map1_value()).await?;
        self.write_reg(Register::IntMap2, map.map2_value()).await
    }

    /// Reads and decodes the interrupt status for one destination.
    ///
    /// Note: reading clears latched bits.
    pub(crate) async fn read_interrupt_status(
        &mut self,
        pin: InterruptPin,
    ) -> Result<InterruptStatus, Error> {
        let reg = match pin {
            InterruptPin::Int1 => Register::IntStatusInt1,
            InterruptPin::Int2 => Register::IntStatusInt2,
            InterruptPin::Ibi => Register::IntStatusIbi,
        };
        let value = self.read_reg(reg).await?;
        Ok(InterruptStatus::from_reg(value))
    }

    /// Runs the built-in self-test and restores ACC_CONF afterwards.
    pub(crate) async fn run_self_test<D: DelayNs>(
        &mut self,
        delay: &mut D,
        selection: SelfTestSelection,
    ) -> Result<SelfTestReport, Error> {
        let saved = self.read_reg(Register::AccConf).await?;
        let result = self.self_test_sequence(delay, selection).await;
        let restored = self.write_reg(Register::AccConf, saved).await;
        let report = result?;
        restored?;
        Ok(report)
    }

    async fn self_test_sequence<D: DelayNs>(
        &mut self,
        delay: &mut D,
        selection: SelfTestSelection,
    ) -> Result<SelfTestReport, Error> {
        let accel = AccelConfig::DEFAULT
            .with_mode(SensorMode::HighPerformance)
            .with_odr(OutputDataRate::Hz200);
        self.write_reg(Register::AccConf, accel.conf_value())
            .await?;
        self.write_feature_words(
            FeatureAddr::SelfTestSelect.addr(),
            &[selection.select_value()],
        )
        .await?;
        self.write_reg(Register::Cmd, cmd::SELF_TEST).await?;

        let io1 = self.wait_self_test_complete(delay).await?;
        let result: [u16; 1] = self.read_feature_block(FeatureAddr::SelfTestResult).await?;
        Ok(SelfTestReport::from_result(
            (io1 & feature_io1::ST_RESULT) != 0,
            result[0],
        ))
    }

    /// Runs gyroscope self-calibration.
    pub(crate) async fn run_gyro_self_calibration<D: DelayNs>(
        &mut self,
        delay: &mut D,
        calibration: GyroCalibration,
        apply: bool,
    ) -> Result<GyroCalibrationReport, Error> {
        self.write_feature_words(
            FeatureAddr::GyroScSelect.addr(),
            &[calibration.select_value(apply)],
        )
        .await?;
        self.write_reg(Register::Cmd, cmd::SELF_CALIBRATION).await?;

        let io1 = self.wait_self_test_complete(delay).await?;
        Ok(GyroCalibrationReport {
            passed: (io1 & feature_io1::GYRO_SC_RESULT) != 0,
        })
    }

    /// Polls FEATURE_IO1 until self-test or self-calibration completes.
    async fn wait_self_test_complete<D: DelayNs>(&mut self, delay: &mut D) -> Result<u16, Error> {
        const POLL_RETRIES: u8 = 50;
        const POLL_DELAY_NS: u32 = 10_000_000;

        for _ in 0..POLL_RETRIES {
            delay.delay_ns(POLL_DELAY_NS).await;
            let io1 = self.read_reg(Register::FeatureIo1).await?;
            match FeatureEngineState::from_io1(io1) {
                FeatureEngineState::ScStAborted
                | FeatureEngineState::ScIgnored
                | FeatureEngineState::StIgnored
                | FeatureEngineState::ScStPreconditionError
                | FeatureEngineState::ModeChangeWhileScSt => return Err(Error::InvalidData),
                _ => {}
            }
            if (io1 & feature_io1::SC_ST_COMPLETE) != 0 {
                return Ok(io1);
            }
        }
        Err(Error::NotReady)
    }

    pub(crate) fn release(self) -> I {
        self.interface
    }

    pub(crate) async fn read_reg(&mut self, reg: Register) -> Result<u16, Error> {
        self.interface.read_reg(reg.addr()).await
    }

    pub(crate) async fn read_regs(
        &mut self,
        reg: Register,
        buffer: &mut [u8],
    ) -> Result<(), Error> {
        self.interface.read_regs(reg.addr(), buffer).await
    }

    pub(crate) async fn write_reg(&mut self, reg: Register, value: u16) -> Result<(), Error> {
        self.interface.write_reg(reg.addr(), value).await
    }

    pub(crate) async fn write_regs(&mut self, reg: Register, data: &[u8]) -> Result<(), Error> {
        self.interface.write_regs(reg.addr(), data).await
    }
}

impl<I2C> DeviceCore<I2cInterface<I2C>> {
    pub(crate) fn set_i2c_address(&mut self, address: u8) {
        self.interface.set_address(address);
    }
}
