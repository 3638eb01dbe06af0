use soroban_sdk::{contracttype, Address, Env};
use ssl_types::{PoolKey, Position};

/// Storage keys for the single-sided liquidity contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Pool registry address (Instance storage)
    Factory,
    /// Wrapped native token address (Instance storage)
    NativeToken,
    /// Position owner, set by the first deposit (Instance storage)
    Owner,
    /// The single position record (Instance storage)
    Position,
    /// Pool of the open position (Instance storage)
    PositionPool,
    /// Next pool position handle (Instance storage)
    NextPositionId,
    /// Handle id -> PositionHandle (Persistent storage)
    Handle(u32),
}

/// Where a position handle lives in the external pool
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionHandle {
    pub pool: Address,
    pub tick_lower: i32,
    pub tick_upper: i32,
}

/// In-memory copy of everything a deposit or withdrawal may change.
/// Mutations happen on a clone that is written back only on success.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Ledger {
    pub position: Position,
    pub pool: Option<PoolKey>,
    pub owner: Option<Address>,
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === Config ===

pub fn set_config(env: &Env, factory: &Address, native_token: &Address) {
    env.storage().instance().set(&DataKey::Factory, factory);
    env.storage().instance().set(&DataKey::NativeToken, native_token);
    extend_instance_ttl(env);
}

pub fn get_factory(env: &Env) -> Address {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Factory)
        .expect("Not initialized")
}

pub fn get_native_token(env: &Env) -> Address {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::NativeToken)
        .expect("Not initialized")
}

// === Ledger ===

pub fn get_position(env: &Env) -> Position {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Position)
        .unwrap_or_default()
}

pub fn get_owner(env: &Env) -> Option<Address> {
    extend_instance_ttl(env);
    env.storage().instance().get(&DataKey::Owner)
}

pub fn load_ledger(env: &Env) -> Ledger {
    Ledger {
        position: get_position(env),
        pool: env.storage().instance().get(&DataKey::PositionPool),
        owner: get_owner(env),
    }
}

/// Write the ledger back, removing entries for an empty position
pub fn save_ledger(env: &Env, ledger: &Ledger) {
    let instance = env.storage().instance();
    if ledger.position.is_empty() {
        instance.remove(&DataKey::Position);
    } else {
        instance.set(&DataKey::Position, &ledger.position);
    }
    match &ledger.pool {
        Some(pool) => instance.set(&DataKey::PositionPool, pool),
        None => instance.remove(&DataKey::PositionPool),
    }
    match &ledger.owner {
        Some(owner) => instance.set(&DataKey::Owner, owner),
        None => instance.remove(&DataKey::Owner),
    }
    extend_instance_ttl(env);
}

// === Position handles ===

pub fn next_position_id(env: &Env) -> u32 {
    let id: u32 = env
        .storage()
        .instance()
        .get(&DataKey::NextPositionId)
        .unwrap_or(1);
    env.storage()
        .instance()
        .set(&DataKey::NextPositionId, &(id + 1));
    id
}

pub fn get_handle(env: &Env, position_id: u32) -> Option<PositionHandle> {
    let key = DataKey::Handle(position_id);
    let handle = env.storage().persistent().get(&key);
    if handle.is_some() {
        extend_persistent_ttl(env, &key);
    }
    handle
}

pub fn set_handle(env: &Env, position_id: u32, handle: &PositionHandle) {
    let key = DataKey::Handle(position_id);
    env.storage().persistent().set(&key, handle);
    extend_persistent_ttl(env, &key);
}

pub fn remove_handle(env: &Env, position_id: u32) {
    env.storage()
        .persistent()
        .remove(&DataKey::Handle(position_id));
}
