use crate::custody::Custody;
use crate::error::Error;
use crate::pool_adapter::PoolAdapter;
use crate::range::select_range;
use crate::storage::Ledger;
use soroban_sdk::{log, Address, Env};
use ssl_types::{FundedSide, PoolKey, Position};

/// Last state a deposit reached
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum DepositStage {
    Validating = 0,
    FundsPulled = 1,
    RangeComputed = 2,
    PoolCallSubmitted = 3,
    LedgerUpdated = 4,
    Done = 5,
}

/// A deposit with its token pair sorted and amounts attached to their tokens
#[derive(Clone, Debug)]
pub struct DepositRequest {
    pub caller: Address,
    pub key: PoolKey,
    pub amount0: u128,
    pub amount1: u128,
    pub width: i32,
}

impl DepositRequest {
    pub fn new(
        caller: Address,
        token_a: Address,
        token_b: Address,
        fee: u32,
        amount_a: i128,
        amount_b: i128,
        width: i32,
    ) -> Result<Self, Error> {
        if token_a == token_b {
            return Err(Error::IdenticalTokens);
        }
        if amount_a < 0 || amount_b < 0 {
            return Err(Error::NegativeAmount);
        }

        let (key, swapped) = PoolKey::sorted(token_a, token_b, fee);
        let (amount0, amount1) = if swapped {
            (amount_b, amount_a)
        } else {
            (amount_a, amount_b)
        };

        Ok(Self {
            caller,
            key,
            amount0: amount0 as u128,
            amount1: amount1 as u128,
            width,
        })
    }

    /// The single token this deposit provides
    pub fn funded_side(&self) -> Result<FundedSide, Error> {
        match (self.amount0, self.amount1) {
            (0, 0) => Err(Error::NoFundsProvided),
            (_, 0) => Ok(FundedSide::Token0),
            (0, _) => Ok(FundedSide::Token1),
            _ => Err(Error::DualSidedDeposit),
        }
    }
}

/// Outcome of a successful deposit
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositReceipt {
    /// Position after the deposit
    pub position: Position,
    /// True when the deposit opened the position
    pub minted: bool,
    /// Liquidity added by this deposit
    pub liquidity: u128,
    /// Amounts consumed by the pool
    pub amount0: u128,
    pub amount1: u128,
    /// Amounts returned to the caller
    pub refund0: u128,
    pub refund1: u128,
}

/// Run one deposit against the ledger.
///
/// `ledger` is only replaced when every step succeeds.
pub fn execute<P: PoolAdapter, C: Custody>(
    env: &Env,
    pool: &mut P,
    custody: &mut C,
    ledger: &mut Ledger,
    request: &DepositRequest,
) -> Result<DepositReceipt, Error> {
    let mut stage = DepositStage::Validating;
    let result = run(env, pool, custody, ledger, request, &mut stage);
    if let Err(err) = &result {
        log!(env, "deposit failed", stage as u32, *err as u32);
    }
    result
}

fn run<P: PoolAdapter, C: Custody>(
    env: &Env,
    pool: &mut P,
    custody: &mut C,
    ledger: &mut Ledger,
    request: &DepositRequest,
    stage: &mut DepositStage,
) -> Result<DepositReceipt, Error> {
    let side = request.funded_side()?;
    if request.width <= 0 {
        return Err(Error::InvalidWidth);
    }
    if pool.fee_tick_spacing(request.key.fee).is_none() {
        return Err(Error::UnknownFeeTier);
    }
    // Only the owner can withdraw, so only the owner may add to an open position
    if !ledger.position.is_empty() && ledger.owner.as_ref() != Some(&request.caller) {
        return Err(Error::Unauthorized);
    }
    if !ledger.position.is_empty() && ledger.pool.as_ref() != Some(&request.key) {
        return Err(Error::PoolMismatch);
    }

    let (token, amount) = match side {
        FundedSide::Token0 => (&request.key.token0, request.amount0),
        FundedSide::Token1 => (&request.key.token1, request.amount1),
    };
    custody.pull(token, &request.caller, amount)?;
    *stage = DepositStage::FundsPulled;

    let snapshot = pool.get_pool_state(&request.key)?;
    let range = select_range(env, &snapshot, request.width, side)?;
    *stage = DepositStage::RangeComputed;

    let mut next = ledger.clone();
    let minted = next.position.is_empty();
    let (liquidity, amount0, amount1) = if minted {
        let outcome = pool.mint_position(
            &request.key,
            range.tick_lower,
            range.tick_upper,
            request.amount0,
            request.amount1,
        )?;
        next.position = Position {
            position_id: outcome.position_id,
            tick_lower: range.tick_lower,
            tick_upper: range.tick_upper,
            ..Position::default()
        };
        next.pool = Some(request.key.clone());
        (outcome.liquidity, outcome.amount0, outcome.amount1)
    } else if next.position.range() == range {
        let outcome = pool.increase_liquidity(
            next.position.position_id,
            request.amount0,
            request.amount1,
        )?;
        (outcome.liquidity, outcome.amount0, outcome.amount1)
    } else {
        return Err(Error::RangeConflict);
    };
    if liquidity == 0 {
        return Err(Error::InsufficientLiquidity);
    }
    *stage = DepositStage::PoolCallSubmitted;

    next.position.liquidity = next
        .position
        .liquidity
        .checked_add(liquidity)
        .ok_or(Error::Overflow)?;
    let (owed0, owed1) = pool.tokens_owed(next.position.position_id)?;
    next.position.tokens_owed_0 = owed0;
    next.position.tokens_owed_1 = owed1;
    if next.owner.is_none() {
        next.owner = Some(request.caller.clone());
    }
    *stage = DepositStage::LedgerUpdated;

    // Liquidity rounds down, so the pool can leave dust behind
    let refund0 = request
        .amount0
        .checked_sub(amount0)
        .ok_or(Error::SlippageExceeded)?;
    let refund1 = request
        .amount1
        .checked_sub(amount1)
        .ok_or(Error::SlippageExceeded)?;
    if refund0 > 0 {
        custody.push(&request.key.token0, &request.caller, refund0)?;
    }
    if refund1 > 0 {
        custody.push(&request.key.token1, &request.caller, refund1)?;
    }

    *ledger = next;
    *stage = DepositStage::Done;

    Ok(DepositReceipt {
        position: ledger.position.clone(),
        minted,
        liquidity,
        amount0,
        amount1,
        refund0,
        refund1,
    })
}
