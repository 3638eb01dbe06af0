use crate::error::Error;
use crate::pool_adapter::PoolAdapter;
use crate::storage::Ledger;
use soroban_sdk::Address;

fn ensure_owner(ledger: &Ledger, caller: &Address) -> Result<u32, Error> {
    if ledger.position.is_empty() {
        return Err(Error::NoActivePosition);
    }
    if ledger.owner.as_ref() != Some(caller) {
        return Err(Error::Unauthorized);
    }
    Ok(ledger.position.position_id)
}

/// Close the position: burn all liquidity, send principal and fees to `caller`,
/// and reset the ledger.
pub fn withdraw<P: PoolAdapter>(
    pool: &mut P,
    ledger: &mut Ledger,
    caller: &Address,
) -> Result<(u128, u128), Error> {
    let position_id = ensure_owner(ledger, caller)?;

    if ledger.position.liquidity > 0 {
        pool.decrease_liquidity(position_id, ledger.position.liquidity)?;
    }
    let collected = pool.collect(position_id, caller)?;
    pool.burn_position(position_id)?;

    *ledger = Ledger::default();
    Ok(collected)
}

/// Send accrued fees to the owner without touching liquidity
pub fn collect<P: PoolAdapter>(
    pool: &mut P,
    ledger: &mut Ledger,
    caller: &Address,
) -> Result<(u128, u128), Error> {
    let position_id = ensure_owner(ledger, caller)?;

    let collected = pool.collect(position_id, caller)?;
    let (owed0, owed1) = pool.tokens_owed(position_id)?;
    ledger.position.tokens_owed_0 = owed0;
    ledger.position.tokens_owed_1 = owed1;

    Ok(collected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool_adapter::{IncreaseOutcome, MintOutcome};
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::Env;
    use ssl_types::{PoolKey, PoolSnapshot, Position};

    /// Records the order of pool calls as digits: 1 decrease, 2 collect, 3 burn
    #[derive(Default)]
    struct RecordingPool {
        calls: u32,
        owed: (u128, u128),
        burned_liquidity: u128,
    }

    impl RecordingPool {
        fn record(&mut self, call: u32) {
            self.calls = self.calls * 10 + call;
        }
    }

    impl PoolAdapter for RecordingPool {
        fn fee_tick_spacing(&self, _fee: u32) -> Option<i32> {
            Some(10)
        }

        fn get_pool_state(&self, _key: &PoolKey) -> Result<PoolSnapshot, Error> {
            Err(Error::PoolNotFound)
        }

        fn mint_position(
            &mut self,
            _key: &PoolKey,
            _tick_lower: i32,
            _tick_upper: i32,
            _amount0_desired: u128,
            _amount1_desired: u128,
        ) -> Result<MintOutcome, Error> {
            Err(Error::PoolNotFound)
        }

        fn increase_liquidity(
            &mut self,
            _position_id: u32,
            _amount0_desired: u128,
            _amount1_desired: u128,
        ) -> Result<IncreaseOutcome, Error> {
            Err(Error::PositionNotFound)
        }

        fn decrease_liquidity(
            &mut self,
            _position_id: u32,
            liquidity: u128,
        ) -> Result<(u128, u128), Error> {
            self.record(1);
            self.burned_liquidity = liquidity;
            self.owed = (self.owed.0 + 40, self.owed.1);
            Ok((40, 0))
        }

        fn collect(
            &mut self,
            _position_id: u32,
            _recipient: &Address,
        ) -> Result<(u128, u128), Error> {
            self.record(2);
            let owed = self.owed;
            self.owed = (0, 0);
            Ok(owed)
        }

        fn burn_position(&mut self, _position_id: u32) -> Result<(), Error> {
            self.record(3);
            Ok(())
        }

        fn tokens_owed(&self, _position_id: u32) -> Result<(u128, u128), Error> {
            Ok(self.owed)
        }
    }

    fn open_ledger(env: &Env, owner: &Address) -> Ledger {
        Ledger {
            position: Position {
                position_id: 7,
                tick_lower: -100,
                tick_upper: 0,
                liquidity: 1_000,
                tokens_owed_0: 0,
                tokens_owed_1: 5,
            },
            pool: Some(PoolKey {
                token0: Address::generate(env),
                token1: Address::generate(env),
                fee: 500,
            }),
            owner: Some(owner.clone()),
        }
    }

    #[test]
    fn test_withdraw_burns_collects_and_resets() {
        let env = Env::default();
        let owner = Address::generate(&env);
        let mut ledger = open_ledger(&env, &owner);
        let mut pool = RecordingPool {
            owed: (0, 5),
            ..Default::default()
        };

        assert_eq!(withdraw(&mut pool, &mut ledger, &owner), Ok((40, 5)));
        assert_eq!(pool.calls, 123);
        assert_eq!(pool.burned_liquidity, 1_000);
        assert_eq!(ledger, Ledger::default());
    }

    #[test]
    fn test_withdraw_requires_open_position_and_owner() {
        let env = Env::default();
        let owner = Address::generate(&env);
        let stranger = Address::generate(&env);
        let mut pool = RecordingPool::default();

        let mut empty = Ledger::default();
        assert_eq!(
            withdraw(&mut pool, &mut empty, &owner),
            Err(Error::NoActivePosition)
        );

        let mut ledger = open_ledger(&env, &owner);
        let before = ledger.clone();
        assert_eq!(
            withdraw(&mut pool, &mut ledger, &stranger),
            Err(Error::Unauthorized)
        );
        assert_eq!(ledger, before);
        assert_eq!(pool.calls, 0);
    }

    #[test]
    fn test_collect_keeps_liquidity() {
        let env = Env::default();
        let owner = Address::generate(&env);
        let mut ledger = open_ledger(&env, &owner);
        let mut pool = RecordingPool {
            owed: (3, 5),
            ..Default::default()
        };

        assert_eq!(collect(&mut pool, &mut ledger, &owner), Ok((3, 5)));
        assert_eq!(pool.calls, 2);
        assert_eq!(ledger.position.liquidity, 1_000);
        assert_eq!(ledger.position.tokens_owed_0, 0);
        assert_eq!(ledger.position.tokens_owed_1, 0);
        assert_eq!(ledger.owner, Some(owner));
    }
}
