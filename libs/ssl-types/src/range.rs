use soroban_sdk::contracttype;

/// Tick bounds of a liquidity position
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TickRange {
    pub tick_lower: i32,
    pub tick_upper: i32,
}

/// Which pool token a single-sided deposit provides
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FundedSide {
    Token0,
    Token1,
}

/// Direction used when snapping a tick to the spacing grid
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rounding {
    /// Toward negative infinity
    Down,
    /// Toward positive infinity
    Up,
}
