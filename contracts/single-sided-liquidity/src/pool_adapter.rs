use crate::custody::to_token_amount;
use crate::error::Error;
use crate::storage::{self, PositionHandle};
use soroban_sdk::{token, Address, Env, IntoVal, Symbol};
use ssl_math::{
    get_amounts_for_liquidity, get_liquidity_for_amount0, get_liquidity_for_amount1,
    get_sqrt_ratio_at_tick,
};
use ssl_types::{PoolConfig, PoolKey, PoolSnapshot, PoolState, PositionInfo};

/// Result of opening a new pool position
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintOutcome {
    pub position_id: u32,
    pub liquidity: u128,
    pub amount0: u128,
    pub amount1: u128,
}

/// Result of adding liquidity to an existing pool position
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IncreaseOutcome {
    pub liquidity: u128,
    pub amount0: u128,
    pub amount1: u128,
}

/// View and write access to the external pool registry.
///
/// Liquidity calls expect the contract to already hold the desired amounts.
/// Amounts the pool does not consume stay with the contract.
pub trait PoolAdapter {
    /// Tick spacing of an enabled fee tier
    fn fee_tick_spacing(&self, fee: u32) -> Option<i32>;

    fn get_pool_state(&self, key: &PoolKey) -> Result<PoolSnapshot, Error>;

    fn mint_position(
        &mut self,
        key: &PoolKey,
        tick_lower: i32,
        tick_upper: i32,
        amount0_desired: u128,
        amount1_desired: u128,
    ) -> Result<MintOutcome, Error>;

    fn increase_liquidity(
        &mut self,
        position_id: u32,
        amount0_desired: u128,
        amount1_desired: u128,
    ) -> Result<IncreaseOutcome, Error>;

    /// Remove liquidity; the released amounts become owed to the position
    fn decrease_liquidity(&mut self, position_id: u32, liquidity: u128)
        -> Result<(u128, u128), Error>;

    /// Send everything owed to the position to `recipient`
    fn collect(&mut self, position_id: u32, recipient: &Address) -> Result<(u128, u128), Error>;

    /// Release the handle of a drained position.
    /// Fails with `InsufficientLiquidity` while the pool still holds liquidity or owed tokens.
    fn burn_position(&mut self, position_id: u32) -> Result<(), Error>;

    fn tokens_owed(&self, position_id: u32) -> Result<(u128, u128), Error>;
}

/// Adapter over deployed factory and pool contracts.
/// The contract itself owns every pool position it opens.
pub struct ContractPoolAdapter<'a> {
    env: &'a Env,
    factory: Address,
    native_token: Address,
}

impl<'a> ContractPoolAdapter<'a> {
    pub fn new(env: &'a Env, factory: Address, native_token: Address) -> Self {
        Self {
            env,
            factory,
            native_token,
        }
    }

    /// Adapter over the registry and native token stored at construction
    pub fn from_config(env: &'a Env) -> Self {
        Self::new(
            env,
            storage::get_factory(env),
            storage::get_native_token(env),
        )
    }

    pub fn factory(&self) -> &Address {
        &self.factory
    }

    /// Wrapped native token, as configured
    pub fn native_token(&self) -> &Address {
        &self.native_token
    }

    fn handle(&self, position_id: u32) -> Result<PositionHandle, Error> {
        storage::get_handle(self.env, position_id).ok_or(Error::PositionNotFound)
    }

    /// Charge the pool for single-sided liquidity on a range.
    /// Returns (liquidity, amount0, amount1).
    fn provide(
        &self,
        pool: &Address,
        tick_lower: i32,
        tick_upper: i32,
        amount0_desired: u128,
        amount1_desired: u128,
    ) -> Result<(u128, u128, u128), Error> {
        let env = self.env;
        let state = get_pool_state(env, pool);
        let config = get_pool_config(env, pool);

        let sqrt_ratio_lower = get_sqrt_ratio_at_tick(env, tick_lower)?;
        let sqrt_ratio_upper = get_sqrt_ratio_at_tick(env, tick_upper)?;

        let liquidity = match (amount0_desired, amount1_desired) {
            (0, 0) => return Err(Error::InsufficientLiquidity),
            (amount0, 0) => {
                get_liquidity_for_amount0(env, sqrt_ratio_lower, sqrt_ratio_upper, amount0)?
            }
            (0, amount1) => {
                get_liquidity_for_amount1(env, sqrt_ratio_lower, sqrt_ratio_upper, amount1)?
            }
            _ => return Err(Error::DualSidedDeposit),
        };
        if liquidity == 0 {
            return Err(Error::InsufficientLiquidity);
        }

        // What the pool will charge, rounded in its favour
        let (amount0, amount1) = get_amounts_for_liquidity(
            env,
            state.sqrt_price_x96,
            sqrt_ratio_lower,
            sqrt_ratio_upper,
            liquidity,
            true,
        )?;
        if amount0 > amount0_desired || amount1 > amount1_desired {
            return Err(Error::SlippageExceeded);
        }

        let this = env.current_contract_address();
        if amount0 > 0 {
            token::Client::new(env, &config.token0).transfer(
                &this,
                pool,
                &to_token_amount(amount0)?,
            );
        }
        if amount1 > 0 {
            token::Client::new(env, &config.token1).transfer(
                &this,
                pool,
                &to_token_amount(amount1)?,
            );
        }

        let (used0, used1) = invoke_pool_mint(env, pool, &this, tick_lower, tick_upper, liquidity);
        if used0 != amount0 || used1 != amount1 {
            return Err(Error::SlippageExceeded);
        }

        Ok((liquidity, amount0, amount1))
    }
}

impl PoolAdapter for ContractPoolAdapter<'_> {
    fn fee_tick_spacing(&self, fee: u32) -> Option<i32> {
        let spacing: i32 = self.env.invoke_contract(
            &self.factory,
            &Symbol::new(self.env, "fee_amount_tick_spacing"),
            (fee,).into_val(self.env),
        );
        if spacing > 0 {
            Some(spacing)
        } else {
            None
        }
    }

    fn get_pool_state(&self, key: &PoolKey) -> Result<PoolSnapshot, Error> {
        let env = self.env;
        let pool: Option<Address> = env.invoke_contract(
            &self.factory,
            &Symbol::new(env, "get_pool"),
            (&key.token0, &key.token1, key.fee).into_val(env),
        );
        let pool = pool.ok_or(Error::PoolNotFound)?;

        let state = get_pool_state(env, &pool);
        let config = get_pool_config(env, &pool);

        Ok(PoolSnapshot {
            pool,
            sqrt_price_x96: state.sqrt_price_x96,
            tick: state.tick,
            tick_spacing: config.tick_spacing,
            fee: config.fee,
        })
    }

    fn mint_position(
        &mut self,
        key: &PoolKey,
        tick_lower: i32,
        tick_upper: i32,
        amount0_desired: u128,
        amount1_desired: u128,
    ) -> Result<MintOutcome, Error> {
        let snapshot = self.get_pool_state(key)?;
        let (liquidity, amount0, amount1) = self.provide(
            &snapshot.pool,
            tick_lower,
            tick_upper,
            amount0_desired,
            amount1_desired,
        )?;

        let position_id = storage::next_position_id(self.env);
        storage::set_handle(
            self.env,
            position_id,
            &PositionHandle {
                pool: snapshot.pool,
                tick_lower,
                tick_upper,
            },
        );

        Ok(MintOutcome {
            position_id,
            liquidity,
            amount0,
            amount1,
        })
    }

    fn increase_liquidity(
        &mut self,
        position_id: u32,
        amount0_desired: u128,
        amount1_desired: u128,
    ) -> Result<IncreaseOutcome, Error> {
        let handle = self.handle(position_id)?;
        let (liquidity, amount0, amount1) = self.provide(
            &handle.pool,
            handle.tick_lower,
            handle.tick_upper,
            amount0_desired,
            amount1_desired,
        )?;

        Ok(IncreaseOutcome {
            liquidity,
            amount0,
            amount1,
        })
    }

    fn decrease_liquidity(
        &mut self,
        position_id: u32,
        liquidity: u128,
    ) -> Result<(u128, u128), Error> {
        let handle = self.handle(position_id)?;
        let info = invoke_pool_get_position(self.env, &handle);
        if liquidity > info.liquidity {
            return Err(Error::InsufficientLiquidity);
        }
        Ok(invoke_pool_burn(self.env, &handle, liquidity))
    }

    fn collect(&mut self, position_id: u32, recipient: &Address) -> Result<(u128, u128), Error> {
        let handle = self.handle(position_id)?;
        Ok(invoke_pool_collect(
            self.env,
            &handle,
            recipient,
            u128::MAX,
            u128::MAX,
        ))
    }

    fn burn_position(&mut self, position_id: u32) -> Result<(), Error> {
        let handle = self.handle(position_id)?;
        let info = invoke_pool_get_position(self.env, &handle);
        if info.liquidity != 0 || info.tokens_owed_0 != 0 || info.tokens_owed_1 != 0 {
            return Err(Error::InsufficientLiquidity);
        }
        storage::remove_handle(self.env, position_id);
        Ok(())
    }

    fn tokens_owed(&self, position_id: u32) -> Result<(u128, u128), Error> {
        let handle = self.handle(position_id)?;
        let info = invoke_pool_get_position(self.env, &handle);
        Ok((info.tokens_owed_0, info.tokens_owed_1))
    }
}

// === Pool calls ===

fn get_pool_state(env: &Env, pool: &Address) -> PoolState {
    env.invoke_contract(pool, &Symbol::new(env, "get_state"), ().into_val(env))
}

fn get_pool_config(env: &Env, pool: &Address) -> PoolConfig {
    env.invoke_contract(pool, &Symbol::new(env, "get_config"), ().into_val(env))
}

fn invoke_pool_get_position(env: &Env, handle: &PositionHandle) -> PositionInfo {
    env.invoke_contract(
        &handle.pool,
        &Symbol::new(env, "get_position"),
        (
            env.current_contract_address(),
            handle.tick_lower,
            handle.tick_upper,
        )
            .into_val(env),
    )
}

fn invoke_pool_mint(
    env: &Env,
    pool: &Address,
    owner: &Address,
    tick_lower: i32,
    tick_upper: i32,
    amount: u128,
) -> (u128, u128) {
    env.invoke_contract(
        pool,
        &Symbol::new(env, "mint"),
        (owner, tick_lower, tick_upper, amount).into_val(env),
    )
}

fn invoke_pool_burn(env: &Env, handle: &PositionHandle, amount: u128) -> (u128, u128) {
    env.invoke_contract(
        &handle.pool,
        &Symbol::new(env, "burn"),
        (
            env.current_contract_address(),
            handle.tick_lower,
            handle.tick_upper,
            amount,
        )
            .into_val(env),
    )
}

fn invoke_pool_collect(
    env: &Env,
    handle: &PositionHandle,
    recipient: &Address,
    amount0_requested: u128,
    amount1_requested: u128,
) -> (u128, u128) {
    env.invoke_contract(
        &handle.pool,
        &Symbol::new(env, "collect"),
        (
            env.current_contract_address(),
            recipient.clone(),
            handle.tick_lower,
            handle.tick_upper,
            amount0_requested,
            amount1_requested,
        )
            .into_val(env),
    )
}
