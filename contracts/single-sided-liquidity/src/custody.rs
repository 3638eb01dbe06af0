use crate::error::Error;
use soroban_sdk::{token, Address, Env};

/// Token movement in and out of the contract
pub trait Custody {
    /// Move `amount` of `token` from `from` into the contract.
    /// Fails with `TransferFailed` unless the contract balance grows by exactly `amount`.
    fn pull(&mut self, token: &Address, from: &Address, amount: u128) -> Result<(), Error>;

    /// Move `amount` of `token` from the contract to `to`
    fn push(&mut self, token: &Address, to: &Address, amount: u128) -> Result<(), Error>;
}

/// Custody over the standard token interface
pub struct TokenCustody<'a> {
    env: &'a Env,
}

impl<'a> TokenCustody<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }
}

impl Custody for TokenCustody<'_> {
    fn pull(&mut self, token: &Address, from: &Address, amount: u128) -> Result<(), Error> {
        let amount = to_token_amount(amount)?;
        let client = token::Client::new(self.env, token);
        let this = self.env.current_contract_address();

        let before = client.balance(&this);
        client.transfer(from, &this, &amount);
        let after = client.balance(&this);

        if after.checked_sub(before) != Some(amount) {
            return Err(Error::TransferFailed);
        }
        Ok(())
    }

    fn push(&mut self, token: &Address, to: &Address, amount: u128) -> Result<(), Error> {
        if amount == 0 {
            return Ok(());
        }
        let amount = to_token_amount(amount)?;
        token::Client::new(self.env, token).transfer(
            &self.env.current_contract_address(),
            to,
            &amount,
        );
        Ok(())
    }
}

/// Token interface amounts are signed
pub fn to_token_amount(amount: u128) -> Result<i128, Error> {
    i128::try_from(amount).map_err(|_| Error::Overflow)
}
