// ============================================================================
// RANGE SELECTION SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. Selected ranges are ordered and aligned to the tick spacing
// 2. Token0 ranges start at or above the live tick
// 3. Token1 ranges end at or below the live tick
//
// ============================================================================

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

#[cfg(feature = "certora")]
use crate::range::range_bounds;

#[cfg(feature = "certora")]
use ssl_types::{FundedSide, Rounding, MAX_TICK, MIN_TICK};

#[cfg(feature = "certora")]
fn side(token0: bool) -> FundedSide {
    if token0 {
        FundedSide::Token0
    } else {
        FundedSide::Token1
    }
}

/// RULE: Sanity - a range can be selected
#[cfg(feature = "certora")]
#[rule]
pub fn sanity_range_selected(base: i32, width: i32, token0: bool) {
    cvlr_assume!(base % 60 == 0 && width > 0);
    let selected = range_bounds(base, 60, width, side(token0), false);
    cvlr_satisfy!(selected.is_ok());
}

/// RULE: Selected range is ordered and spacing-aligned
#[cfg(feature = "certora")]
#[rule]
pub fn range_ordered_and_aligned(
    tick: i32,
    spacing: i32,
    width: i32,
    token0: bool,
    on_boundary: bool,
) {
    cvlr_assume!(tick >= MIN_TICK && tick <= MAX_TICK);
    cvlr_assume!(spacing == 10 || spacing == 60 || spacing == 200);
    cvlr_assume!(width > 0);

    let Ok(base) = ssl_math::round_to_spacing(tick, spacing, Rounding::Down) else {
        return;
    };
    if let Ok(range) = range_bounds(base, spacing, width, side(token0), on_boundary) {
        cvlr_assert!(range.tick_lower < range.tick_upper);
        cvlr_assert!(range.tick_lower % spacing == 0);
        cvlr_assert!(range.tick_upper % spacing == 0);
    }
}

/// RULE: Token0 range never starts below the live tick, and sits strictly
/// above it unless the price is exactly on the boundary
#[cfg(feature = "certora")]
#[rule]
pub fn token0_range_above_tick(tick: i32, spacing: i32, width: i32, on_boundary: bool) {
    cvlr_assume!(tick >= MIN_TICK && tick <= MAX_TICK);
    cvlr_assume!(spacing == 10 || spacing == 60 || spacing == 200);
    cvlr_assume!(width > 0);
    // price can only equal a boundary price when the tick is on the boundary
    cvlr_assume!(!on_boundary || tick % spacing == 0);

    let Ok(base) = ssl_math::round_to_spacing(tick, spacing, Rounding::Down) else {
        return;
    };
    if let Ok(range) = range_bounds(base, spacing, width, FundedSide::Token0, on_boundary) {
        cvlr_assert!(range.tick_lower >= tick);
        if !on_boundary {
            cvlr_assert!(range.tick_lower > tick);
        }
    }
}

/// RULE: Token1 range never ends above the live tick
#[cfg(feature = "certora")]
#[rule]
pub fn token1_range_below_tick(tick: i32, spacing: i32, width: i32) {
    cvlr_assume!(tick >= MIN_TICK && tick <= MAX_TICK);
    cvlr_assume!(spacing == 10 || spacing == 60 || spacing == 200);
    cvlr_assume!(width > 0);

    let Ok(base) = ssl_math::round_to_spacing(tick, spacing, Rounding::Down) else {
        return;
    };
    if let Ok(range) = range_bounds(base, spacing, width, FundedSide::Token1, false) {
        cvlr_assert!(range.tick_upper <= tick);
        cvlr_assert!(tick - range.tick_upper < spacing);
    }
}
