#![no_std]

mod pool;
mod position;
mod range;

pub use pool::*;
pub use position::*;
pub use range::*;

/// Q96 constant (2^96) for fixed-point math
pub const Q96: u128 = 1 << 96;

/// Minimum tick index
/// Bounded so that sqrt prices fit a u128 (a uint160 curve reaches -887272)
pub const MIN_TICK: i32 = -443636;

/// Maximum tick index
/// Bounded so that sqrt prices fit a u128 (a uint160 curve reaches 887272)
pub const MAX_TICK: i32 = 443636;

/// Minimum sqrt price (at MIN_TICK)
/// sqrt(1.0001^-443636) * 2^96, rounded up
pub const MIN_SQRT_RATIO: u128 = 18447090764788882728;

/// Maximum sqrt price (at MAX_TICK)
/// sqrt(1.0001^443636) * 2^96, bounded by u128::MAX
pub const MAX_SQRT_RATIO: u128 = 340275971719517849884101479065584693834;

/// Fee amount in hundredths of a basis point (1e-6)
/// 500 = 0.05%, 3000 = 0.3%, 10000 = 1%
pub type Fee = u32;

/// Default fee tiers enabled on a fresh pool registry: (fee, tick spacing)
pub const DEFAULT_FEE_TIERS: [(Fee, i32); 3] = [(500, 10), (3000, 60), (10000, 200)];

/// Get tick spacing for one of the default fee tiers
pub fn fee_to_tick_spacing(fee: Fee) -> Option<i32> {
    DEFAULT_FEE_TIERS
        .iter()
        .find(|(tier, _)| *tier == fee)
        .map(|(_, spacing)| *spacing)
}

/// Lowest tick usable as a range boundary for a tick spacing
pub fn min_usable_tick(tick_spacing: i32) -> i32 {
    -(MAX_TICK / tick_spacing) * tick_spacing
}

/// Highest tick usable as a range boundary for a tick spacing
pub fn max_usable_tick(tick_spacing: i32) -> i32 {
    (MAX_TICK / tick_spacing) * tick_spacing
}
