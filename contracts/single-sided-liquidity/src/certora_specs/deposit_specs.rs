// ============================================================================
// DEPOSIT ERROR SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. Input errors are classified as validation errors
// 2. Range conflicts are never reported as validation errors
//
// ============================================================================

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::cvlr_assert;

#[cfg(feature = "certora")]
use crate::error::{Error, ErrorKind};

/// RULE: Caller input errors are validation errors
#[cfg(feature = "certora")]
#[rule]
pub fn input_errors_are_validation() {
    cvlr_assert!(Error::DualSidedDeposit.kind() == ErrorKind::Validation);
    cvlr_assert!(Error::NoFundsProvided.kind() == ErrorKind::Validation);
    cvlr_assert!(Error::UnknownFeeTier.kind() == ErrorKind::Validation);
    cvlr_assert!(Error::InvalidWidth.kind() == ErrorKind::Validation);
}

/// RULE: Conflicts with the open position are their own class
#[cfg(feature = "certora")]
#[rule]
pub fn conflicts_are_not_validation() {
    cvlr_assert!(Error::RangeConflict.kind() == ErrorKind::Conflict);
    cvlr_assert!(Error::PoolMismatch.kind() == ErrorKind::Conflict);
}
