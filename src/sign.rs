//! Polarity of a big integer.

use core::ops::{Mul, Neg};

/// The sign of a [`BigInt`].
///
/// Zero is always represented with a `Positive` sign. The [`BigInt`]
/// constructor enforces this, so within the crate `Negative` always means
/// strictly below zero.
///
/// [`BigInt`]: crate::BigInt
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Zero or above.
    Positive,
    /// Strictly below zero.
    Negative,
}

impl Sign {
    /// The sign of a native signed integer. Zero maps to `Positive`.
    #[inline]
    pub fn of(value: i128) -> Sign {
        if value < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    /// The opposite sign. Involutive: `s.negate().negate() == s`.
    #[inline]
    #[must_use]
    pub fn negate(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }

    /// Whether this is `Sign::Positive`.
    #[inline]
    pub fn is_positive(self) -> bool {
        self == Sign::Positive
    }

    /// Whether this is `Sign::Negative`.
    #[inline]
    pub fn is_negative(self) -> bool {
        self == Sign::Negative
    }
}

impl Neg for Sign {
    type Output = Sign;

    #[inline]
    fn neg(self) -> Sign {
        self.negate()
    }
}

/// Multiplying equal signs gives `Positive`, opposite signs `Negative`.
impl Mul for Sign {
    type Output = Sign;

    #[inline]
    fn mul(self, rhs: Sign) -> Sign {
        if self == rhs {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}
