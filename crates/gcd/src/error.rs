use thiserror::Error;

pub type GcdResult<T> = Result<T, GcdError>;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum GcdError {
    /// The operand has no `i64` absolute value, or the divisor it implies
    /// (`2^63`) cannot be returned as `i64`.
    #[error("operand {operand} overflows when its absolute value is taken")]
    Overflow { operand: i64 },

    #[error("recursion depth exceeded the limit of {limit} steps")]
    RecursionLimit { limit: usize },
}
