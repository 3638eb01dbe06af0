//! Contract events

use soroban_sdk::{Address, Env, Symbol};
use ssl_types::{PoolKey, Position};

/// Emitted after every successful deposit
pub fn emit_deposit(
    env: &Env,
    caller: &Address,
    key: &PoolKey,
    amount0: u128,
    amount1: u128,
    liquidity: u128,
) {
    env.events().publish(
        (Symbol::new(env, "deposit"), caller.clone()),
        (key.clone(), amount0, amount1, liquidity),
    );
}

/// Emitted when a deposit opens a new pool position
pub fn emit_position_minted(env: &Env, position: &Position) {
    env.events().publish(
        (Symbol::new(env, "position_minted"),),
        (
            position.position_id,
            position.tick_lower,
            position.tick_upper,
            position.liquidity,
        ),
    );
}

/// Emitted when a deposit adds to the open range
pub fn emit_liquidity_increased(env: &Env, position_id: u32, delta: u128, total: u128) {
    env.events().publish(
        (Symbol::new(env, "liquidity_increased"),),
        (position_id, delta, total),
    );
}

pub fn emit_withdraw(env: &Env, caller: &Address, position_id: u32, amount0: u128, amount1: u128) {
    env.events().publish(
        (Symbol::new(env, "withdraw"), caller.clone()),
        (position_id, amount0, amount1),
    );
}

pub fn emit_collect(env: &Env, caller: &Address, position_id: u32, amount0: u128, amount1: u128) {
    env.events().publish(
        (Symbol::new(env, "collect"), caller.clone()),
        (position_id, amount0, amount1),
    );
}
