use crate::MathError;
use ssl_types::{Rounding, MAX_SQRT_RATIO, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK};
use soroban_sdk::{Env, U256};

// Q128 constant: 2^128 represented as U256
fn q128(env: &Env) -> U256 {
    U256::from_u128(env, 1u128 << 64).mul(&U256::from_u128(env, 1u128 << 64))
}

/// Calculate sqrt(1.0001^tick) * 2^96
///
/// Bit-for-bit the canonical concentrated-liquidity curve: the Q128 ratio is
/// built from the binary expansion of |tick|, inverted for positive ticks and
/// shifted down to Q96 rounding up.
pub fn get_sqrt_ratio_at_tick(env: &Env, tick: i32) -> Result<u128, MathError> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(MathError::TickOutOfBounds);
    }

    let abs_tick = tick.unsigned_abs();

    // Constants for sqrt(1.0001^-(2^i)) in Q128 format
    const SQRT_1_0001_1: u128 = 0xfffcb933bd6fad37aa2d162d1a594001;
    const SQRT_1_0001_2: u128 = 0xfff97272373d413259a46990580e213a;
    const SQRT_1_0001_4: u128 = 0xfff2e50f5f656932ef12357cf3c7fdcc;
    const SQRT_1_0001_8: u128 = 0xffe5caca7e10e4e61c3624eaa0941cd0;
    const SQRT_1_0001_16: u128 = 0xffcb9843d60f6159c9db58835c926644;
    const SQRT_1_0001_32: u128 = 0xff973b41fa98c081472e6896dfb254c0;
    const SQRT_1_0001_64: u128 = 0xff2ea16466c96a3843ec78b326b52861;
    const SQRT_1_0001_128: u128 = 0xfe5dee046a99a2a811c461f1969c3053;
    const SQRT_1_0001_256: u128 = 0xfcbe86c7900a88aedcffc83b479aa3a4;
    const SQRT_1_0001_512: u128 = 0xf987a7253ac413176f2b074cf7815e54;
    const SQRT_1_0001_1024: u128 = 0xf3392b0822b70005940c7a398e4b70f3;
    const SQRT_1_0001_2048: u128 = 0xe7159475a2c29b7443b29c7fa6e889d9;
    const SQRT_1_0001_4096: u128 = 0xd097f3bdfd2022b8845ad8f792aa5825;
    const SQRT_1_0001_8192: u128 = 0xa9f746462d870fdf8a65dc1f90e061e5;
    const SQRT_1_0001_16384: u128 = 0x70d869a156d2a1b890bb3df62baf32f7;
    const SQRT_1_0001_32768: u128 = 0x31be135f97d08fd981231505542fcfa6;
    const SQRT_1_0001_65536: u128 = 0x9aa508b5b7a84e1c677de54f3e99bc9;
    const SQRT_1_0001_131072: u128 = 0x5d6af8dedb81196699c329225ee604;
    const SQRT_1_0001_262144: u128 = 0x2216e584f5fa1ea926041bedfe98;

    const FACTORS: [u128; 19] = [
        SQRT_1_0001_1,
        SQRT_1_0001_2,
        SQRT_1_0001_4,
        SQRT_1_0001_8,
        SQRT_1_0001_16,
        SQRT_1_0001_32,
        SQRT_1_0001_64,
        SQRT_1_0001_128,
        SQRT_1_0001_256,
        SQRT_1_0001_512,
        SQRT_1_0001_1024,
        SQRT_1_0001_2048,
        SQRT_1_0001_4096,
        SQRT_1_0001_8192,
        SQRT_1_0001_16384,
        SQRT_1_0001_32768,
        SQRT_1_0001_65536,
        SQRT_1_0001_131072,
        SQRT_1_0001_262144,
    ];

    let mut ratio = q128(env);
    for (bit, factor) in FACTORS.iter().enumerate() {
        if abs_tick & (1u32 << bit) != 0 {
            ratio = mul_shift_128(env, &ratio, *factor);
        }
    }

    // Invert if tick is positive (we computed for negative tick)
    if tick > 0 {
        ratio = u256_max(env).div(&ratio);
    }

    // Q128 -> Q96, rounding up so the result never undershoots the tick's price
    let shift_32 = U256::from_u128(env, 1u128 << 32);
    let mut result = ratio.div(&shift_32);
    if ratio.rem_euclid(&shift_32) > U256::from_u32(env, 0) {
        result = result.add(&U256::from_u32(env, 1));
    }

    result.to_u128().ok_or(MathError::Overflow)
}

/// Greatest tick whose sqrt ratio is <= `sqrt_price_x96` (floor semantics)
pub fn get_tick_at_sqrt_ratio(env: &Env, sqrt_price_x96: u128) -> Result<i32, MathError> {
    if !(MIN_SQRT_RATIO..MAX_SQRT_RATIO).contains(&sqrt_price_x96) {
        return Err(MathError::SqrtPriceOutOfBounds);
    }

    // Binary search for the tick
    let mut low = MIN_TICK;
    let mut high = MAX_TICK;

    while low < high {
        let mid = low + (high - low + 1) / 2;
        let sqrt_at_mid = get_sqrt_ratio_at_tick(env, mid)?;

        if sqrt_at_mid <= sqrt_price_x96 {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    Ok(low)
}

/// Snap a tick onto the spacing grid in the given direction
pub fn round_to_spacing(
    tick: i32,
    tick_spacing: i32,
    rounding: Rounding,
) -> Result<i32, MathError> {
    if tick_spacing <= 0 {
        return Err(MathError::InvalidTickSpacing);
    }

    let floor = tick
        .div_euclid(tick_spacing)
        .checked_mul(tick_spacing)
        .ok_or(MathError::Overflow)?;

    match rounding {
        Rounding::Down => Ok(floor),
        Rounding::Up if floor == tick => Ok(floor),
        Rounding::Up => floor.checked_add(tick_spacing).ok_or(MathError::Overflow),
    }
}

/// Helper: multiply by u128 and right shift by 128 bits
fn mul_shift_128(env: &Env, x: &U256, y: u128) -> U256 {
    let y_256 = U256::from_u128(env, y);
    x.mul(&y_256).div(&q128(env))
}

/// Helper: get U256 max value
fn u256_max(env: &Env) -> U256 {
    // U256 max = 2^256 - 1
    let high = U256::from_u128(env, u128::MAX);
    high.mul(&q128(env)).add(&U256::from_u128(env, u128::MAX))
}
