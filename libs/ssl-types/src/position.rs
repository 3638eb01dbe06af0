use soroban_sdk::contracttype;

use crate::TickRange;

/// The single liquidity position held by a contract instance.
/// An empty record (id 0) means no position is open.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Position {
    /// Handle in the pool adapter's position registry, 0 if none
    pub position_id: u32,
    /// Lower tick boundary
    pub tick_lower: i32,
    /// Upper tick boundary
    pub tick_upper: i32,
    /// Liquidity in pool units
    pub liquidity: u128,
    /// Uncollected token0 owed by the pool
    pub tokens_owed_0: u128,
    /// Uncollected token1 owed by the pool
    pub tokens_owed_1: u128,
}

impl Position {
    pub fn is_empty(&self) -> bool {
        self.position_id == 0
    }

    pub fn range(&self) -> TickRange {
        TickRange {
            tick_lower: self.tick_lower,
            tick_upper: self.tick_upper,
        }
    }
}

/// Position info stored in pool contract
#[contracttype]
#[derive(Clone, Debug, Default)]
pub struct PositionInfo {
    /// Liquidity in this position
    pub liquidity: u128,
    /// Uncollected token0 (burned principal plus fees)
    pub tokens_owed_0: u128,
    /// Uncollected token1 (burned principal plus fees)
    pub tokens_owed_1: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_position_is_empty() {
        let position = Position::default();
        assert!(position.is_empty());
        assert_eq!(position.liquidity, 0);
        assert_eq!(position.range(), TickRange { tick_lower: 0, tick_upper: 0 });
    }
}
