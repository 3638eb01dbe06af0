use crate::MathError;
use ssl_types::Q96;
use soroban_sdk::{Env, U256};

/// Multiply and divide with 256-bit intermediate precision (rounds down)
/// Returns (a * b) / denominator
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> Result<u128, MathError> {
    let (quotient, _) = mul_div_rem(env, a, b, denominator)?;
    u128_from_u256(env, &quotient)
}

/// Multiply and divide with 256-bit intermediate precision (rounds up)
/// Returns ceil((a * b) / denominator)
pub fn mul_div_rounding_up(
    env: &Env,
    a: u128,
    b: u128,
    denominator: u128,
) -> Result<u128, MathError> {
    let (quotient, remainder) = mul_div_rem(env, a, b, denominator)?;
    let result = u128_from_u256(env, &quotient)?;
    if remainder > U256::from_u32(env, 0) {
        result.checked_add(1).ok_or(MathError::Overflow)
    } else {
        Ok(result)
    }
}

/// floor(a * b / denominator) where `b` may be wider than 128 bits.
///
/// Splits `b = q * denominator + r` so that no intermediate exceeds 256 bits:
/// a * b / d = a * q + a * r / d, exact because r < d.
pub fn mul_div_wide(env: &Env, a: u128, b: &U256, denominator: u128) -> Result<u128, MathError> {
    if denominator == 0 {
        return Err(MathError::DivisionByZero);
    }

    let denom_256 = U256::from_u128(env, denominator);
    let q = b.div(&denom_256);
    let r = b.rem_euclid(&denom_256);
    let a_256 = U256::from_u128(env, a);

    let high = if a == 0 {
        U256::from_u32(env, 0)
    } else {
        // q beyond 128 bits means a * q cannot fit a u128 result either
        let q_128 = u128_from_u256(env, &q)?;
        a_256.mul(&U256::from_u128(env, q_128))
    };
    let high_128 = u128_from_u256(env, &high)?;

    let low = a_256.mul(&r).div(&denom_256);
    let low_128 = u128_from_u256(env, &low)?;

    high_128.checked_add(low_128).ok_or(MathError::Overflow)
}

/// (a * b * 2^96) / denominator as a 256-bit value, for `a * b / denominator < 2^128`.
///
/// The 352-bit numerator is never materialised: with P = a * b = q * d + r,
/// P * 2^96 / d = q * 2^96 + r * 2^96 / d.
pub fn mul_q96_div(
    env: &Env,
    a: u128,
    b: u128,
    denominator: u128,
    round_up: bool,
) -> Result<U256, MathError> {
    let (q, r) = mul_div_rem(env, a, b, denominator)?;
    // Keeps q * 2^96 below 2^224
    u128_from_u256(env, &q)?;

    let q96 = U256::from_u128(env, Q96);
    let denom_256 = U256::from_u128(env, denominator);
    let shifted_rem = r.mul(&q96);

    let mut result = q.mul(&q96).add(&shifted_rem.div(&denom_256));
    if round_up && shifted_rem.rem_euclid(&denom_256) > U256::from_u32(env, 0) {
        result = result.add(&U256::from_u32(env, 1));
    }
    Ok(result)
}

/// Convert U256 to u128, failing on overflow
pub fn u128_from_u256(env: &Env, value: &U256) -> Result<u128, MathError> {
    let max_u128 = U256::from_u128(env, u128::MAX);
    if value.gt(&max_u128) {
        return Err(MathError::Overflow);
    }
    value.to_u128().ok_or(MathError::Overflow)
}

/// Full 256-bit quotient and remainder of a * b / denominator
fn mul_div_rem(
    env: &Env,
    a: u128,
    b: u128,
    denominator: u128,
) -> Result<(U256, U256), MathError> {
    if denominator == 0 {
        return Err(MathError::DivisionByZero);
    }

    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let denom_256 = U256::from_u128(env, denominator);
    Ok((product.div(&denom_256), product.rem_euclid(&denom_256)))
}
