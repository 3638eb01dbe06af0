#![no_std]

mod custody;
mod deposit;
mod error;
mod events;
mod pool_adapter;
mod range;
mod storage;
mod withdraw;

#[cfg(feature = "certora")]
pub mod certora_specs;


pub use custody::{Custody, TokenCustody};
pub use deposit::{DepositReceipt, DepositRequest, DepositStage};
pub use error::{Error, ErrorKind};
pub use pool_adapter::{ContractPoolAdapter, IncreaseOutcome, MintOutcome, PoolAdapter};
pub use range::select_range;
pub use storage::Ledger;

use soroban_sdk::{contract, contractimpl, Address, Env};
use ssl_types::Position;

/// Holds one single-sided concentrated liquidity position in an external pool.
#[contract]
pub struct SingleSidedLiquidity;

#[contractimpl]
impl SingleSidedLiquidity {
    /// Store the pool registry and the wrapped native token
    pub fn __constructor(env: Env, factory: Address, native_token: Address) {
        storage::set_config(&env, &factory, &native_token);
    }

    /// Provide one token of a pair as liquidity on the funded side of the live price.
    ///
    /// Exactly one of `amount_a`, `amount_b` must be non-zero. `width` is the range
    /// breadth in tick-spacing steps. Unused dust is returned to `caller`.
    /// Once a position is open only its owner may add to it.
    ///
    /// # Returns
    /// The position after the deposit
    pub fn deposit(
        env: Env,
        caller: Address,
        token_a: Address,
        token_b: Address,
        fee: u32,
        amount_a: i128,
        amount_b: i128,
        width: i32,
    ) -> Result<Position, Error> {
        caller.require_auth();

        let request =
            DepositRequest::new(caller, token_a, token_b, fee, amount_a, amount_b, width)?;
        let mut ledger = storage::load_ledger(&env);
        let mut pool = ContractPoolAdapter::from_config(&env);
        let mut custody = TokenCustody::new(&env);

        let receipt = deposit::execute(&env, &mut pool, &mut custody, &mut ledger, &request)?;
        storage::save_ledger(&env, &ledger);

        let position = receipt.position;
        if receipt.minted {
            events::emit_position_minted(&env, &position);
        } else {
            events::emit_liquidity_increased(
                &env,
                position.position_id,
                receipt.liquidity,
                position.liquidity,
            );
        }
        events::emit_deposit(
            &env,
            &request.caller,
            &request.key,
            receipt.amount0,
            receipt.amount1,
            receipt.liquidity,
        );

        Ok(position)
    }

    /// Burn the whole position and send principal plus fees to the owner
    ///
    /// # Returns
    /// (amount0, amount1) - Token amounts sent to `caller`
    pub fn withdraw(env: Env, caller: Address) -> Result<(u128, u128), Error> {
        caller.require_auth();

        let mut ledger = storage::load_ledger(&env);
        let position_id = ledger.position.position_id;
        let mut pool = ContractPoolAdapter::from_config(&env);

        let (amount0, amount1) = withdraw::withdraw(&mut pool, &mut ledger, &caller)?;
        storage::save_ledger(&env, &ledger);

        events::emit_withdraw(&env, &caller, position_id, amount0, amount1);
        Ok((amount0, amount1))
    }

    /// Send accrued fees to the owner
    ///
    /// # Returns
    /// (amount0, amount1) - Fee amounts sent to `caller`
    pub fn collect(env: Env, caller: Address) -> Result<(u128, u128), Error> {
        caller.require_auth();

        let mut ledger = storage::load_ledger(&env);
        let mut pool = ContractPoolAdapter::from_config(&env);

        let (amount0, amount1) = withdraw::collect(&mut pool, &mut ledger, &caller)?;
        storage::save_ledger(&env, &ledger);

        events::emit_collect(
            &env,
            &caller,
            ledger.position.position_id,
            amount0,
            amount1,
        );
        Ok((amount0, amount1))
    }

    // === View Functions ===

    /// Current position; empty (id 0) when none is open
    pub fn get_position(env: Env) -> Position {
        storage::get_position(&env)
    }

    pub fn owner(env: Env) -> Option<Address> {
        storage::get_owner(&env)
    }

    pub fn factory(env: Env) -> Address {
        ContractPoolAdapter::from_config(&env).factory().clone()
    }

    pub fn native_token(env: Env) -> Address {
        ContractPoolAdapter::from_config(&env).native_token().clone()
    }
}
