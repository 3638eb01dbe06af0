use crate::error::Error;
use soroban_sdk::Env;
use ssl_math::{get_sqrt_ratio_at_tick, round_to_spacing};
use ssl_types::{
    max_usable_tick, min_usable_tick, FundedSide, PoolSnapshot, Rounding, TickRange, MIN_TICK,
};

/// Pick a range of `width` tick-spacing steps on the funded side of the live price.
///
/// Token1 ranges end at the current tick rounded down. Token0 ranges start at the
/// current tick rounded down only when the price sits exactly on that boundary,
/// otherwise one spacing step higher, so the range never straddles the price.
pub fn select_range(
    env: &Env,
    snapshot: &PoolSnapshot,
    width: i32,
    side: FundedSide,
) -> Result<TickRange, Error> {
    if width <= 0 {
        return Err(Error::InvalidWidth);
    }
    let spacing = snapshot.tick_spacing;
    if spacing <= 0 {
        return Err(Error::InvalidTickSpacing);
    }
    let base = round_to_spacing(snapshot.tick, spacing, Rounding::Down)?;
    // A base below MIN_TICK has no price and the live price is always above it
    let on_boundary = match side {
        FundedSide::Token0 if base >= MIN_TICK => {
            get_sqrt_ratio_at_tick(env, base)? == snapshot.sqrt_price_x96
        }
        _ => false,
    };

    range_bounds(base, spacing, width, side, on_boundary)
}

/// Bounds around a spacing-aligned `base` tick.
/// `on_boundary` means the live price equals the price of `base`.
pub fn range_bounds(
    base: i32,
    spacing: i32,
    width: i32,
    side: FundedSide,
    on_boundary: bool,
) -> Result<TickRange, Error> {
    let span = width.checked_mul(spacing).ok_or(Error::InvalidWidth)?;

    let (tick_lower, tick_upper) = match side {
        FundedSide::Token0 => {
            let lower = if on_boundary {
                base
            } else {
                base.checked_add(spacing).ok_or(Error::TickOutOfBounds)?
            };
            (lower, lower.checked_add(span).ok_or(Error::TickOutOfBounds)?)
        }
        FundedSide::Token1 => (base.checked_sub(span).ok_or(Error::TickOutOfBounds)?, base),
    };

    if tick_lower < min_usable_tick(spacing) || tick_upper > max_usable_tick(spacing) {
        return Err(Error::TickOutOfBounds);
    }

    Ok(TickRange {
        tick_lower,
        tick_upper,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::Address;
    use ssl_types::Q96;

    fn snapshot(env: &Env, sqrt_price_x96: u128, tick: i32, tick_spacing: i32) -> PoolSnapshot {
        PoolSnapshot {
            pool: Address::generate(env),
            sqrt_price_x96,
            tick,
            tick_spacing,
            fee: 500,
        }
    }

    fn range(tick_lower: i32, tick_upper: i32) -> TickRange {
        TickRange {
            tick_lower,
            tick_upper,
        }
    }

    #[test]
    fn test_ranges_sit_on_opposite_sides_of_price() {
        let env = Env::default();
        let sqrt_price = get_sqrt_ratio_at_tick(&env, -276324).unwrap() + 12345;
        let snap = snapshot(&env, sqrt_price, -276324, 10);

        assert_eq!(
            select_range(&env, &snap, 10, FundedSide::Token0),
            Ok(range(-276320, -276220))
        );
        assert_eq!(
            select_range(&env, &snap, 10, FundedSide::Token1),
            Ok(range(-276430, -276330))
        );
    }

    #[test]
    fn test_price_on_boundary_starts_range_at_price() {
        let env = Env::default();
        let snap = snapshot(&env, Q96, 0, 60);

        assert_eq!(
            select_range(&env, &snap, 10, FundedSide::Token0),
            Ok(range(0, 600))
        );
        assert_eq!(
            select_range(&env, &snap, 10, FundedSide::Token1),
            Ok(range(-600, 0))
        );
    }

    #[test]
    fn test_price_on_unaligned_tick_moves_token0_range_up() {
        let env = Env::default();
        // exactly on tick 30 but not on the 60 grid
        let sqrt_price = get_sqrt_ratio_at_tick(&env, 30).unwrap();
        let snap = snapshot(&env, sqrt_price, 30, 60);

        assert_eq!(
            select_range(&env, &snap, 1, FundedSide::Token0),
            Ok(range(60, 120))
        );
        assert_eq!(
            select_range(&env, &snap, 1, FundedSide::Token1),
            Ok(range(-60, 0))
        );
    }

    #[test]
    fn test_negative_ticks_round_toward_negative_infinity() {
        let env = Env::default();
        let sqrt_price = get_sqrt_ratio_at_tick(&env, -1).unwrap() + 1;
        let snap = snapshot(&env, sqrt_price, -1, 10);

        assert_eq!(
            select_range(&env, &snap, 2, FundedSide::Token1),
            Ok(range(-30, -10))
        );
        assert_eq!(
            select_range(&env, &snap, 2, FundedSide::Token0),
            Ok(range(0, 20))
        );
    }

    #[test]
    fn test_invalid_width() {
        let env = Env::default();
        let snap = snapshot(&env, Q96, 0, 10);

        assert_eq!(
            select_range(&env, &snap, 0, FundedSide::Token0),
            Err(Error::InvalidWidth)
        );
        assert_eq!(
            select_range(&env, &snap, -5, FundedSide::Token1),
            Err(Error::InvalidWidth)
        );
        assert_eq!(
            select_range(&env, &snap, i32::MAX, FundedSide::Token0),
            Err(Error::InvalidWidth)
        );
    }

    #[test]
    fn test_range_past_usable_ticks() {
        let env = Env::default();
        let snap = snapshot(&env, Q96, 0, 10);
        assert_eq!(
            select_range(&env, &snap, 100_000, FundedSide::Token0),
            Err(Error::TickOutOfBounds)
        );

        let near_top = max_usable_tick(10) - 10;
        let sqrt_price = get_sqrt_ratio_at_tick(&env, near_top).unwrap();
        let snap = snapshot(&env, sqrt_price, near_top, 10);
        assert_eq!(
            select_range(&env, &snap, 2, FundedSide::Token0),
            Err(Error::TickOutOfBounds)
        );
    }

    #[test]
    fn test_token0_range_near_min_tick() {
        let env = Env::default();
        // rounds down to -443640, below MIN_TICK
        let tick = MIN_TICK + 1;
        let sqrt_price = get_sqrt_ratio_at_tick(&env, tick).unwrap();
        let snap = snapshot(&env, sqrt_price, tick, 10);

        assert_eq!(
            select_range(&env, &snap, 2, FundedSide::Token0),
            Ok(range(min_usable_tick(10), min_usable_tick(10) + 20))
        );
        assert_eq!(
            select_range(&env, &snap, 2, FundedSide::Token1),
            Err(Error::TickOutOfBounds)
        );
    }
}
