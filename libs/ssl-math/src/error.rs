/// Failure modes of the fixed-point math library
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MathError {
    /// Denominator was zero
    DivisionByZero,
    /// Result does not fit the target width
    Overflow,
    /// Tick outside [MIN_TICK, MAX_TICK]
    TickOutOfBounds,
    /// Sqrt price outside [MIN_SQRT_RATIO, MAX_SQRT_RATIO)
    SqrtPriceOutOfBounds,
    /// Lower sqrt price is not strictly below the upper one
    InvalidPriceRange,
    /// Token amount for the side being computed is zero
    ZeroAmount,
    /// Tick spacing is not positive
    InvalidTickSpacing,
}
