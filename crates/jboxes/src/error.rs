//! Error taxonomy shared by constructors, mutable boxes and algorithms.

use thiserror::Error;

use crate::bounds::Bound;

/// Errors raised by box construction and box arithmetic.
///
/// All of these are contract violations on the caller's side; no operation
/// returns a partial result alongside one.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoxError {
    /// A bound ordering or non-negativity precondition does not hold.
    #[error("invariant violated: {reason}")]
    InvariantViolation { reason: String },
    /// Computing a bound left the `i32` range.
    #[error("arithmetic overflow in {op}")]
    ArithmeticOverflow { op: &'static str },
    /// A bound was read, or a box finalized, before the bound was set.
    #[error("bound {bound} has not been set")]
    IllegalState { bound: Bound },
}

impl BoxError {
    pub(crate) fn invariant(reason: impl Into<String>) -> Self {
        Self::InvariantViolation {
            reason: reason.into(),
        }
    }

    pub(crate) fn overflow(op: &'static str) -> Self {
        Self::ArithmeticOverflow { op }
    }

    pub(crate) fn unset(bound: Bound) -> Self {
        Self::IllegalState { bound }
    }
}

/// Overflow-checked `a + b`.
#[inline]
pub(crate) fn add(a: i32, b: i32) -> Result<i32, BoxError> {
    a.checked_add(b).ok_or_else(|| BoxError::overflow("add"))
}

/// Overflow-checked `a - b`.
#[inline]
pub(crate) fn sub(a: i32, b: i32) -> Result<i32, BoxError> {
    a.checked_sub(b).ok_or_else(|| BoxError::overflow("sub"))
}

/// Fails with `InvariantViolation` unless `value >= 0`.
#[inline]
pub(crate) fn require_non_negative(value: i32, what: &str) -> Result<(), BoxError> {
    if value < 0 {
        return Err(BoxError::invariant(format!("{what} must be >= 0, not {value}")));
    }
    Ok(())
}
