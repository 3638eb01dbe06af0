use crate::full_math::{mul_div, mul_div_rounding_up, mul_div_wide, mul_q96_div, u128_from_u256};
use crate::MathError;
use ssl_types::Q96;
use soroban_sdk::{Env, U256};

/// Liquidity provided by `amount0` of token0 across [sqrt_ratio_lower, sqrt_ratio_upper]
/// L = amount0 * sqrt_pa * sqrt_pb / (sqrt_pb - sqrt_pa)
///
/// Only valid when the current price is at or below the range.
pub fn get_liquidity_for_amount0(
    env: &Env,
    sqrt_ratio_lower_x96: u128,
    sqrt_ratio_upper_x96: u128,
    amount0: u128,
) -> Result<u128, MathError> {
    check_single_sided_inputs(sqrt_ratio_lower_x96, sqrt_ratio_upper_x96, amount0)?;

    // sqrt_pa * sqrt_pb / Q96 can reach 160 bits, so it stays in U256
    let intermediate = U256::from_u128(env, sqrt_ratio_lower_x96)
        .mul(&U256::from_u128(env, sqrt_ratio_upper_x96))
        .div(&U256::from_u128(env, Q96));

    mul_div_wide(
        env,
        amount0,
        &intermediate,
        sqrt_ratio_upper_x96 - sqrt_ratio_lower_x96,
    )
}

/// Liquidity provided by `amount1` of token1 across [sqrt_ratio_lower, sqrt_ratio_upper]
/// L = amount1 / (sqrt_pb - sqrt_pa)
///
/// Only valid when the current price is at or above the range.
pub fn get_liquidity_for_amount1(
    env: &Env,
    sqrt_ratio_lower_x96: u128,
    sqrt_ratio_upper_x96: u128,
    amount1: u128,
) -> Result<u128, MathError> {
    check_single_sided_inputs(sqrt_ratio_lower_x96, sqrt_ratio_upper_x96, amount1)?;

    mul_div(
        env,
        amount1,
        Q96,
        sqrt_ratio_upper_x96 - sqrt_ratio_lower_x96,
    )
}

/// Calculate amount0 delta for a price move from sqrt_ratio_a to sqrt_ratio_b
/// delta_x = L * (sqrt_pb - sqrt_pa) / (sqrt_pa * sqrt_pb)
pub fn get_amount0_delta(
    env: &Env,
    sqrt_ratio_a_x96: u128,
    sqrt_ratio_b_x96: u128,
    liquidity: u128,
    round_up: bool,
) -> Result<u128, MathError> {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = sort(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    if sqrt_ratio_lower == 0 {
        return Err(MathError::DivisionByZero);
    }

    // (L << 96) * (sqrt_pb - sqrt_pa) / sqrt_pb, then / sqrt_pa
    let numerator = mul_q96_div(
        env,
        liquidity,
        sqrt_ratio_upper - sqrt_ratio_lower,
        sqrt_ratio_upper,
        round_up,
    )?;

    let lower_256 = U256::from_u128(env, sqrt_ratio_lower);
    let mut amount = numerator.div(&lower_256);
    if round_up && numerator.rem_euclid(&lower_256) > U256::from_u32(env, 0) {
        amount = amount.add(&U256::from_u32(env, 1));
    }

    u128_from_u256(env, &amount)
}

/// Calculate amount1 delta for a price move from sqrt_ratio_a to sqrt_ratio_b
/// delta_y = L * (sqrt_pb - sqrt_pa)
pub fn get_amount1_delta(
    env: &Env,
    sqrt_ratio_a_x96: u128,
    sqrt_ratio_b_x96: u128,
    liquidity: u128,
    round_up: bool,
) -> Result<u128, MathError> {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = sort(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    if round_up {
        mul_div_rounding_up(env, liquidity, sqrt_ratio_upper - sqrt_ratio_lower, Q96)
    } else {
        mul_div(env, liquidity, sqrt_ratio_upper - sqrt_ratio_lower, Q96)
    }
}

/// Token amounts represented by `liquidity` over a range at the current price.
/// Round up when charging a depositor, down when paying out.
pub fn get_amounts_for_liquidity(
    env: &Env,
    sqrt_ratio_x96: u128,
    sqrt_ratio_a_x96: u128,
    sqrt_ratio_b_x96: u128,
    liquidity: u128,
    round_up: bool,
) -> Result<(u128, u128), MathError> {
    let (sqrt_ratio_lower, sqrt_ratio_upper) = sort(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    if sqrt_ratio_x96 <= sqrt_ratio_lower {
        // Below range - all token0
        let amount0 =
            get_amount0_delta(env, sqrt_ratio_lower, sqrt_ratio_upper, liquidity, round_up)?;
        Ok((amount0, 0))
    } else if sqrt_ratio_x96 < sqrt_ratio_upper {
        // In range - both tokens
        let amount0 =
            get_amount0_delta(env, sqrt_ratio_x96, sqrt_ratio_upper, liquidity, round_up)?;
        let amount1 =
            get_amount1_delta(env, sqrt_ratio_lower, sqrt_ratio_x96, liquidity, round_up)?;
        Ok((amount0, amount1))
    } else {
        // Above range - all token1
        let amount1 =
            get_amount1_delta(env, sqrt_ratio_lower, sqrt_ratio_upper, liquidity, round_up)?;
        Ok((0, amount1))
    }
}

/// Add signed liquidity delta to unsigned liquidity
pub fn add_delta(liquidity: u128, delta: i128) -> Result<u128, MathError> {
    if delta < 0 {
        liquidity
            .checked_sub(delta.unsigned_abs())
            .ok_or(MathError::Overflow)
    } else {
        liquidity
            .checked_add(delta as u128)
            .ok_or(MathError::Overflow)
    }
}

fn check_single_sided_inputs(
    sqrt_ratio_lower_x96: u128,
    sqrt_ratio_upper_x96: u128,
    amount: u128,
) -> Result<(), MathError> {
    if sqrt_ratio_lower_x96 >= sqrt_ratio_upper_x96 {
        return Err(MathError::InvalidPriceRange);
    }
    if amount == 0 {
        return Err(MathError::ZeroAmount);
    }
    Ok(())
}

fn sort(a: u128, b: u128) -> (u128, u128) {
    if a > b {
        (b, a)
    } else {
        (a, b)
    }
}
