use soroban_sdk::{contracttype, Address};

/// Identifies a pool: ordered token pair plus fee tier
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolKey {
    /// Token0 address (lower address)
    pub token0: Address,
    /// Token1 address (higher address)
    pub token1: Address,
    /// Fee tier in hundredths of bps
    pub fee: u32,
}

impl PoolKey {
    /// Build a key from an unordered pair.
    /// The flag is true when `token_a` and `token_b` were swapped to sort them.
    pub fn sorted(token_a: Address, token_b: Address, fee: u32) -> (Self, bool) {
        if token_a <= token_b {
            (
                Self {
                    token0: token_a,
                    token1: token_b,
                    fee,
                },
                false,
            )
        } else {
            (
                Self {
                    token0: token_b,
                    token1: token_a,
                    fee,
                },
                true,
            )
        }
    }
}

/// Live pool state as exposed by the pool contract
#[contracttype]
#[derive(Clone, Debug)]
pub struct PoolState {
    /// Current sqrt(price) as Q64.96
    pub sqrt_price_x96: u128,
    /// Current tick index
    pub tick: i32,
    /// Total liquidity currently in range
    pub liquidity: u128,
}

impl PoolState {
    pub fn new(sqrt_price_x96: u128, tick: i32) -> Self {
        Self {
            sqrt_price_x96,
            tick,
            liquidity: 0,
        }
    }
}

/// Pool configuration - immutable after creation
#[contracttype]
#[derive(Clone, Debug)]
pub struct PoolConfig {
    pub token0: Address,
    pub token1: Address,
    /// Fee tier in hundredths of bps
    pub fee: u32,
    /// Tick spacing for this pool
    pub tick_spacing: i32,
}

/// Point-in-time view of a pool, read fresh on every call
#[derive(Clone, Debug)]
pub struct PoolSnapshot {
    /// Pool contract address
    pub pool: Address,
    pub sqrt_price_x96: u128,
    pub tick: i32,
    pub tick_spacing: i32,
    pub fee: u32,
}
