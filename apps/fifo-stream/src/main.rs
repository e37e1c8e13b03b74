#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
#![deny(clippy::large_stack_frames)]
//! FIFO streaming example for the BMI323 IMU.
//!
//! This app targets the ESP32-S3 Matrix Board and demonstrates:
//! - IMU bring-up with retry on `Error::NotReady`.
//! - Accelerometer, gyroscope and temperature frames in the FIFO with sensor time.
//! - Per-sensor extraction from one FIFO snapshot, with anomaly reporting.

use defmt::{error, info, warn};
use embassy_executor::Spawner;
use embassy_time::{Delay, Duration, Timer};
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Input, InputConfig, Pull};
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::time::Rate;
use esp_hal::timer::timg::TimerGroup;
use ph_bmi3::{
    AccelConfig,
    AccelRange,
    AccelRaw,
    Bmi3Address,
    Bmi3I2c,
    Config,
    Error as ImuError,
    FifoBuffer,
    FifoConfig,
    GyroConfig,
    GyroRange,
    GyroRaw,
    IntPinConfig,
    InterruptMap,
    InterruptPin,
    OutputDataRate,
    Sample,
    TemperatureRaw,
    accel_mg_per_lsb,
    bmi3_init_sequence,
    gyro_mdps_per_lsb,
};
use {esp_backtrace as _, esp_println as _};

esp_bootloader_esp_idf::esp_app_desc!();

type ImuI2c = I2c<'static, esp_hal::Async>;
type ImuPin = Input<'static>;
type ImuDriver = Bmi3I2c<ImuI2c, ImuPin, ImuPin>;

defmt::timestamp!("{=u64:ms}", 0u64);

#[used]
static APP_DESC_REF: &esp_bootloader_esp_idf::EspAppDesc = &ESP_APP_DESC;

/// Friendly hardware identifier for logs.
const BOARD_NAME: &str = "ESP32-S3 Matrix Board";

/// FIFO snapshot size; about 50 ms of accel + gyro at 800 Hz.
const FIFO_BUFFER_LEN: usize = 1024;
/// FIFO watermark in words (routed to INT1 for a logic analyzer).
const FIFO_WATERMARK_WORDS: u16 = 256;
/// Output slots per sensor and cycle.
const MAX_SAMPLES: usize = 96;
/// Delay between FIFO reads.
const FIFO_POLL_DELAY_MS: u64 = 50;
/// Delay between init retries when the IMU reports `NotReady`.
const INIT_RETRY_DELAY_MS: u64 = 100;

const ACCEL_RANGE: AccelRange = AccelRange::G4;
const GYRO_RANGE: GyroRange = GyroRange::Dps500;

/// Retry helper for operations that can return `Error::NotReady`.
///
/// Any other error is surfaced immediately to the caller.
macro_rules! retry_not_ready {
    ($label:literal, $delay_ms:expr, $body:expr) => {{
        loop {
            match $body {
                Ok(value) => break Ok(value),
                Err(ImuError::NotReady) => {
                    warn!("{} not ready, retrying...", $label);
                    Timer::after(Duration::from_millis($delay_ms)).await;
                }
                Err(err) => break Err(err),
            }
        }
    }};
}

async fn configure_imu(imu: &mut ImuDriver, delay: &mut Delay) -> Result<u8, ImuError> {
    let config = Config::new()
        .with_accel_config(AccelConfig::new(ACCEL_RANGE, OutputDataRate::Hz800))
        .with_gyro_config(GyroConfig::new(GYRO_RANGE, OutputDataRate::Hz800));
    let map = InterruptMap::new().with_fifo_watermark(Some(InterruptPin::Int1));
    let fifo = FifoConfig::new(true, true, true)
        .with_sensor_time(true)
        .with_watermark_words(FIFO_WATERMARK_WORDS);

    retry_not_ready!(
        "IMU init",
        INIT_RETRY_DELAY_MS,
        async {
            bmi3_init_sequence!(
                imu: imu,
                delay: delay,
                addresses: &[Bmi3Address::Primary.addr(), Bmi3Address::Secondary.addr()],
                pins: (IntPinConfig::DEFAULT, IntPinConfig::DISABLED),
                interrupts: map,
                config: config,
                fifo: fifo,
            )
        }
        .await
    )
}

#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let int1 = Input::new(peripherals.GPIO10, InputConfig::default().with_pull(Pull::Up));
    let int2 = Input::new(peripherals.GPIO13, InputConfig::default().with_pull(Pull::Up));

    // 400 kHz keeps a full-buffer read around 25 ms.
    let i2c_config = I2cConfig::default().with_frequency(Rate::from_khz(400));
    let i2c = I2c::new(peripherals.I2C0, i2c_config)
        .unwrap()
        .with_sda(peripherals.GPIO11)
        .with_scl(peripherals.GPIO12)
        .into_async();

    let bus_config = ph_bmi3::I2cConfig::new(Bmi3Address::Primary.addr()).with_max_read_len(256);
    let mut imu = Bmi3I2c::with_i2c_config(i2c, Some(int1), Some(int2), Config::new(), bus_config);

    let mut delay = Delay;
    let address = match configure_imu(&mut imu, &mut delay).await {
        Ok(address) => address,
        Err(err) => {
            error!("IMU init failed: {}", err);
            loop {
                Timer::after(Duration::from_secs(1)).await;
            }
        }
    };
    info!(
        "IMU init ok @0x{:02x} ({}) on {}",
        address,
        imu.chip_variant(),
        BOARD_NAME
    );

    let mut buffer = FifoBuffer::<FIFO_BUFFER_LEN>::new();
    let mut accel = [Sample::<AccelRaw>::default(); MAX_SAMPLES];
    let mut gyro = [Sample::<GyroRaw>::default(); MAX_SAMPLES];
    let mut temperature = [Sample::<TemperatureRaw>::default(); MAX_SAMPLES];
    let accel_scale = accel_mg_per_lsb(ACCEL_RANGE);
    let gyro_scale = gyro_mdps_per_lsb(GYRO_RANGE);

    loop {
        Timer::after(Duration::from_millis(FIFO_POLL_DELAY_MS)).await;

        let readout = match imu.read_fifo(&mut buffer).await {
            Ok(readout) => readout,
            Err(err) => {
                warn!("FIFO read failed: {}", err);
                continue;
            }
        };
        if readout.bytes_read == 0 {
            continue;
        }
        if readout.clamped {
            warn!(
                "FIFO backlog {} bytes, read {}",
                readout.status.bytes(),
                readout.bytes_read
            );
        }

        let layout = imu.fifo_layout();
        let accel = buffer.extract_accel(layout, &mut accel);
        let gyro = buffer.extract_gyro(layout, &mut gyro);
        let temperature = buffer.extract_temperature(layout, &mut temperature);

        info!(
            "fifo: {} bytes, accel={} gyro={} temp={} anomalies={} unparsed={}",
            readout.bytes_read,
            accel.len(),
            gyro.len(),
            temperature.len(),
            accel.anomalies,
            accel.unparsed_bytes
        );

        if let Some(first) = accel.samples.first() {
            info!(
                "accel[0] x={}mg y={}mg z={}mg t={}",
                accel_scale.apply(first.data.x),
                accel_scale.apply(first.data.y),
                accel_scale.apply(first.data.z),
                first.timestamp
            );
        }
        if let Some(first) = gyro.samples.first() {
            info!(
                "gyro[0] x={}mdps y={}mdps z={}mdps t={}",
                gyro_scale.apply(first.data.x),
                gyro_scale.apply(first.data.y),
                gyro_scale.apply(first.data.z),
                first.timestamp
            );
        }
        if let Some(first) = temperature.samples.first() {
            match first.data.millicelsius() {
                Some(mdeg) => info!("temp[0] {}mC", mdeg),
                None => info!("temp[0] not available"),
            }
        }
    }
}
