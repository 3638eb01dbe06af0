use soroban_sdk::contracterror;
use ssl_math::MathError;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // Validation errors (100-199)
    DualSidedDeposit = 100,
    NoFundsProvided = 101,
    UnknownFeeTier = 102,
    InvalidWidth = 103,
    IdenticalTokens = 104,
    NegativeAmount = 105,
    TickOutOfBounds = 106,

    // External call errors (200-299)
    PoolNotFound = 200,
    PositionNotFound = 201,
    TransferFailed = 202,
    SlippageExceeded = 203,
    InsufficientLiquidity = 204,

    // Conflict errors (300-399)
    RangeConflict = 300,
    PoolMismatch = 301,

    // Lifecycle errors (400-499)
    NoActivePosition = 400,
    Unauthorized = 401,

    // Math errors (500-599)
    DivisionByZero = 500,
    Overflow = 501,
    InvalidPriceRange = 502,
    ZeroAmount = 503,
    SqrtPriceOutOfBounds = 504,
    InvalidTickSpacing = 505,
}

/// Coarse classification of [`Error`] by who is at fault
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Bad caller input, rejected before any state change
    Validation,
    /// A pool, registry or token call did not behave as required
    ExternalCall,
    /// The request does not fit the open position
    Conflict,
    /// The position is not in a state that allows the operation
    Lifecycle,
    Math,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match *self as u32 {
            100..=199 => ErrorKind::Validation,
            200..=299 => ErrorKind::ExternalCall,
            300..=399 => ErrorKind::Conflict,
            400..=499 => ErrorKind::Lifecycle,
            _ => ErrorKind::Math,
        }
    }
}

impl From<MathError> for Error {
    fn from(err: MathError) -> Self {
        match err {
            MathError::DivisionByZero => Error::DivisionByZero,
            MathError::Overflow => Error::Overflow,
            MathError::TickOutOfBounds => Error::TickOutOfBounds,
            MathError::SqrtPriceOutOfBounds => Error::SqrtPriceOutOfBounds,
            MathError::InvalidPriceRange => Error::InvalidPriceRange,
            MathError::ZeroAmount => Error::ZeroAmount,
            MathError::InvalidTickSpacing => Error::InvalidTickSpacing,
        }
    }
}
