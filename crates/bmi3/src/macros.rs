//! Convenience macros for common driver sequences.

/// Initialize a BMI3 instance with a common configuration sequence.
///
/// This macro runs the typical bring-up flow:
/// 1. `init_with_addresses`
/// 2. `apply_int_pin_config` + `apply_interrupt_map`
/// 3. `set_config` + `apply_config`
/// 4. Optional `apply_fifo_config` + `flush_fifo`
///
/// The macro expands to a `Result<u8, Error>` expression, returning the
/// detected I2C address on success. It must be invoked from an async context.
///
/// Example without FIFO:
/// ```rust,no_run
/// # use ph_bmi3::{Bmi3Address, Config, IntPinConfig, InterruptMap, InterruptPin, bmi3_init_sequence};
/// # async fn example(imu: &mut ph_bmi3::Bmi3I2c<impl embedded_hal_async::i2c::I2c>, delay: &mut impl embedded_hal_async::delay::DelayNs)
/// # -> Result<(), ph_bmi3::Error> {
/// let map = InterruptMap::new().with_any_motion(Some(InterruptPin::Int1));
/// let address = bmi3_init_sequence!(
///     imu: imu,
///     delay: delay,
///     addresses: &[Bmi3Address::Primary.addr(), Bmi3Address::Secondary.addr()],
///     pins: (IntPinConfig::DEFAULT, IntPinConfig::DISABLED),
///     interrupts: map,
///     config: Config::new(),
/// )?;
/// # Ok(())
/// # }
/// ```
///
/// Example with FIFO:
/// ```rust,no_run
/// # use ph_bmi3::{Bmi3Address, Config, FifoConfig, IntPinConfig, InterruptMap, InterruptPin, bmi3_init_sequence};
/// # async fn example(imu: &mut ph_bmi3::Bmi3I2c<impl embedded_hal_async::i2c::I2c>, delay: &mut impl embedded_hal_async::delay::DelayNs)
/// # -> Result<(), ph_bmi3::Error> {
/// let map = InterruptMap::new().with_fifo_watermark(Some(InterruptPin::Int1));
/// let fifo = FifoConfig::new(true, true, false).with_watermark_words(256);
/// let address = bmi3_init_sequence!(
///     imu: imu,
///     delay: delay,
///     addresses: &[Bmi3Address::Primary.addr()],
///     pins: (IntPinConfig::DEFAULT, IntPinConfig::DISABLED),
///     interrupts: map,
///     config: Config::new(),
///     fifo: fifo,
/// )?;
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! bmi3_init_sequence {
    (
        imu: $imu:expr,
        delay: $delay:expr,
        addresses: $addresses:expr,
        pins: ($int1:expr, $int2:expr),
        interrupts: $map:expr,
        config: $config:expr,
        fifo: $fifo:expr $(,)?
    ) => {{
        let address = $crate::bmi3_init_sequence!(
            imu: $imu,
            delay: $delay,
            addresses: $addresses,
            pins: ($int1, $int2),
            interrupts: $map,
            config: $config,
        )?;
        $imu.apply_fifo_config($fifo).await?;
        $imu.flush_fifo().await?;
        Ok::<u8, $crate::Error>(address)
    }};
    (
        imu: $imu:expr,
        delay: $delay:expr,
        addresses: $addresses:expr,
        pins: ($int1:expr, $int2:expr),
        interrupts: $map:expr,
        config: $config:expr $(,)?
    ) => {{
        let address = $imu.init_with_addresses($delay, $addresses).await?;
        $imu.apply_int_pin_config($int1, $int2).await?;
        $imu.apply_interrupt_map($map).await?;
        $imu.set_config($config);
        $imu.apply_config().await?;
        Ok::<u8, $crate::Error>(address)
    }};
}
