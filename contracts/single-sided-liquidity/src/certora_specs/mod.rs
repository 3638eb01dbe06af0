// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Rules for the single-sided liquidity contract.
//
// - range_specs.rs   : range selection never straddles the live tick
// - deposit_specs.rs : error classification of rejected deposits
//
// USAGE:
// - Certora build: cargo build --features certora -p single-sided-liquidity
//
// ============================================================================

pub mod deposit_specs;
pub mod range_specs;
