#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
#![deny(clippy::large_stack_frames)]
//! Any-motion / no-motion example for the BMI323 IMU.
//!
//! Any-motion is routed to INT1 and no-motion to INT2. The app polls both
//! interrupt status registers and logs the transitions, so the pins stay
//! free for a logic analyzer.

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
    Bmi3Address,
    Bmi3I2c,
    Config,
    Error as ImuError,
    FeatureEnable,
    IntPinConfig,
    InterruptMap,
    InterruptPin,
    MotionConfig,
    OutputDataRate,
    ReferenceUpdate,
    bmi3_init_sequence,
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

/// Delay between init retries when the IMU reports `NotReady`.
const INIT_RETRY_DELAY_MS: u64 = 100;
/// Interrupt status poll interval.
const POLL_DELAY_MS: u64 = 20;

/// About 80 mg slope, held for 100 ms.
const ANY_MOTION: MotionConfig = MotionConfig::new(40, 5);
/// About 20 mg slope, held for 2 s.
const NO_MOTION: MotionConfig = MotionConfig::new(10, 100);

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
        .with_accel_config(AccelConfig::new(AccelRange::G4, OutputDataRate::Hz100))
        .without_gyro();
    let map = InterruptMap::new()
        .with_any_motion(Some(InterruptPin::Int1))
        .with_no_motion(Some(InterruptPin::Int2));

    let address = retry_not_ready!(
        "IMU init",
        INIT_RETRY_DELAY_MS,
        async {
            bmi3_init_sequence!(
                imu: imu,
                delay: delay,
                addresses: &[Bmi3Address::Primary.addr(), Bmi3Address::Secondary.addr()],
                pins: (IntPinConfig::DEFAULT, IntPinConfig::DEFAULT),
                interrupts: map,
                config: config,
            )
        }
        .await
    )?;

    imu.set_any_motion_config(ANY_MOTION).await?;
    imu.set_no_motion_config(NO_MOTION.with_reference_update(ReferenceUpdate::EverySample))
        .await?;
    imu.set_feature_enable(
        FeatureEnable::new()
            .with_any_motion(true, true, true)
            .with_no_motion(true, true, true),
    )
    .await?;

    Ok(address)
}

#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let int1 = Input::new(peripherals.GPIO10, InputConfig::default().with_pull(Pull::Up));
    let int2 = Input::new(peripherals.GPIO13, InputConfig::default().with_pull(Pull::Up));

    let i2c_config = I2cConfig::default().with_frequency(Rate::from_khz(400));
    let i2c = I2c::new(peripherals.I2C0, i2c_config)
        .unwrap()
        .with_sda(peripherals.GPIO11)
        .with_scl(peripherals.GPIO12)
        .into_async();

    let mut imu = Bmi3I2c::new_i2c(i2c, Some(int1), Some(int2));

    let mut delay = Delay;
    match configure_imu(&mut imu, &mut delay).await {
        Ok(address) => info!("IMU init ok @0x{:02x} on {}", address, BOARD_NAME),
        Err(err) => {
            error!("IMU init failed: {}", err);
            loop {
                Timer::after(Duration::from_secs(1)).await;
            }
        }
    }

    let mut moving = false;
    loop {
        Timer::after(Duration::from_millis(POLL_DELAY_MS)).await;

        let int1 = imu.read_interrupt_status(InterruptPin::Int1).await;
        let int2 = imu.read_interrupt_status(InterruptPin::Int2).await;
        let (int1, int2) = match (int1, int2) {
            (Ok(int1), Ok(int2)) => (int1, int2),
            (Err(err), _) | (_, Err(err)) => {
                warn!("interrupt status read failed: {}", err);
                continue;
            }
        };

        if int1.any_motion && !moving {
            moving = true;
            info!("motion detected (INT1)");
        }
        if int2.no_motion && moving {
            moving = false;
            info!("device at rest (INT2)");
        }
    }
}
