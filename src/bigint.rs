//! The signed arbitrary-precision integer type.

use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::{self, Debug, Display};
use core::str::FromStr;

use crate::digit::{Digit, DIGITS};
use crate::error::{Error, ErrorCode, Result};
use crate::math::{self, DigitVec};
use crate::sign::Sign;

/// A signed integer of unbounded magnitude.
///
/// The magnitude is an ordered sequence of decimal [`Digit`]s, least
/// significant first, paired with a [`Sign`]. Values are immutable: every
/// arithmetic operation returns a new `BigInt` and never mutates its
/// operands.
///
/// ```
/// use digitwise::BigInt;
///
/// let a = BigInt::from(247);
/// let b = BigInt::from(58);
/// assert_eq!(&a + &b, BigInt::from(305));
/// assert_eq!((&a * &b).to_string(), "14326");
/// ```
///
/// The representation is canonical: no leading zero digits, and zero is
/// always the single digit `0` with positive sign. `PartialEq` and `Hash`
/// are therefore plain structural derives.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    /// Digit storage, least significant first. Never empty, no leading
    /// zeros except for canonical zero `[Zero]`.
    digits: DigitVec,
    /// Polarity. Always `Positive` when the magnitude is zero.
    sign: Sign,
}

impl BigInt {
    /// The canonical zero: digit sequence `[0]`, positive sign.
    pub fn zero() -> BigInt {
        BigInt {
            digits: vec![Digit::Zero],
            sign: Sign::Positive,
        }
    }

    /// Assemble a value from a sign and raw little-endian digits.
    ///
    /// This is the single normalization point: leading zeros are trimmed,
    /// an empty buffer becomes zero, and a zero magnitude is forced
    /// positive. Every construction path in the crate funnels through here
    /// so divergent zero representations cannot arise.
    pub(crate) fn from_parts(sign: Sign, mut digits: DigitVec) -> BigInt {
        if digits.is_empty() {
            digits.push(Digit::Zero);
        }
        math::normalize(&mut digits);
        let sign = if digits.len() == 1 && digits[0] == Digit::Zero {
            Sign::Positive
        } else {
            sign
        };
        BigInt { digits, sign }
    }

    /// Convert a native integer by repeated division, least significant
    /// digit first.
    ///
    /// This is a boundary adapter: native arithmetic is fine here, the
    /// digit engine proper never sees it.
    pub fn from_i128(value: i128) -> BigInt {
        if value == 0 {
            return BigInt::zero();
        }
        let sign = Sign::of(value);
        let mut magnitude = value.unsigned_abs();
        let mut digits = Vec::new();
        while magnitude != 0 {
            digits.push(DIGITS[(magnitude % 10) as usize]);
            magnitude /= 10;
        }
        BigInt { digits, sign }
    }

    /// Reconstruct the native value, or `None` if it does not fit in
    /// `i128`.
    ///
    /// Inverse of [`from_i128`](BigInt::from_i128): round-trips for every
    /// constructible input, including `i128::MIN`.
    pub fn to_i128(&self) -> Option<i128> {
        let mut value: i128 = 0;
        for &digit in self.digits.iter().rev() {
            let digit = digit.to_u8() as i128;
            value = value.checked_mul(10)?;
            value = if self.sign.is_negative() {
                value.checked_sub(digit)?
            } else {
                value.checked_add(digit)?
            };
        }
        Some(value)
    }

    /// Whether this is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == Digit::Zero
    }

    /// The sign. Positive for zero.
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Number of decimal digits in the magnitude; at least one.
    #[inline]
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// The absolute value.
    #[must_use]
    pub fn abs(&self) -> BigInt {
        BigInt {
            digits: self.digits.clone(),
            sign: Sign::Positive,
        }
    }

    /// The value with the opposite sign. Negating zero yields the canonical
    /// zero, positive sign included.
    #[must_use]
    pub fn negate(&self) -> BigInt {
        if self.is_zero() {
            return self.clone();
        }
        BigInt {
            digits: self.digits.clone(),
            sign: self.sign.negate(),
        }
    }

    /// Sign-aware addition. Zero identities short-circuit, opposite signs
    /// reduce to subtraction, and a same-sign pair delegates to the
    /// unsigned magnitude engine.
    pub(crate) fn add_impl(&self, other: &BigInt) -> BigInt {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Positive) => {
                BigInt::from_parts(Sign::Positive, math::add(&self.digits, &other.digits))
            }
            // (-a) + (-b) = -(a + b)
            (Sign::Negative, Sign::Negative) => {
                self.negate().add_impl(&other.negate()).negate()
            }
            // (-a) + b = b - a
            (Sign::Negative, Sign::Positive) => other.sub_impl(&self.negate()),
            // a + (-b) = a - b
            (Sign::Positive, Sign::Negative) => self.sub_impl(&other.negate()),
        }
    }

    /// Sign-aware subtraction, mirroring the addition dispatch. The
    /// non-negative case picks the larger magnitude so the engine's
    /// `x >= y` precondition always holds, negating when the operands were
    /// swapped.
    pub(crate) fn sub_impl(&self, other: &BigInt) -> BigInt {
        if other.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return other.negate();
        }
        if self == other {
            return BigInt::zero();
        }
        match (self.sign, other.sign) {
            // (-a) - (-b) = b - a
            (Sign::Negative, Sign::Negative) => other.negate().sub_impl(&self.negate()),
            // a - (-b) = a + b
            (Sign::Positive, Sign::Negative) => self.add_impl(&other.negate()),
            // (-a) - b = -(a + b)
            (Sign::Negative, Sign::Positive) => self.negate().add_impl(other).negate(),
            (Sign::Positive, Sign::Positive) => {
                match math::compare(&self.digits, &other.digits) {
                    Ordering::Less => {
                        BigInt::from_parts(Sign::Negative, math::sub(&other.digits, &self.digits))
                    }
                    _ => BigInt::from_parts(Sign::Positive, math::sub(&self.digits, &other.digits)),
                }
            }
        }
    }

    /// Multiplication: the sign is the product of the operand signs, the
    /// magnitude comes from schoolbook long multiplication. Either operand
    /// being zero absorbs to canonical zero.
    pub(crate) fn mul_impl(&self, other: &BigInt) -> BigInt {
        if self.is_zero() || other.is_zero() {
            return BigInt::zero();
        }
        BigInt::from_parts(self.sign * other.sign, math::mul(&self.digits, &other.digits))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            // Canonical zero is positive, so mixed signs decide outright.
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => math::compare(&self.digits, &other.digits),
            // Both negative: larger magnitude means smaller value.
            (Sign::Negative, Sign::Negative) => math::compare(&other.digits, &self.digits),
        }
    }
}

impl PartialOrd for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Default for BigInt {
    /// The canonical zero.
    fn default() -> BigInt {
        BigInt::zero()
    }
}

impl Display for BigInt {
    /// Digits rendered most significant first, with a `-` prefix for
    /// negative values. Canonical zero renders as `0`, never `-0`.
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        if self.sign.is_negative() {
            formatter.write_str("-")?;
        }
        for &digit in self.digits.iter().rev() {
            formatter.write_str(digit.as_str())?;
        }
        Ok(())
    }
}

impl Debug for BigInt {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "BigInt({})", self)
    }
}

impl FromStr for BigInt {
    type Err = Error;

    /// Parse `[+|-]digits`. Leading zeros are accepted and trimmed; `-0`
    /// parses to canonical (positive) zero.
    fn from_str(input: &str) -> Result<BigInt> {
        let (sign, magnitude) = match input.as_bytes().first() {
            Some(b'-') => (Sign::Negative, &input[1..]),
            Some(b'+') => (Sign::Positive, &input[1..]),
            _ => (Sign::Positive, input),
        };
        if magnitude.is_empty() {
            return Err(Error::new(ErrorCode::EmptyInput));
        }
        let mut digits = Vec::with_capacity(magnitude.len());
        for ch in magnitude.chars() {
            match ch {
                '0'..='9' => digits.push(DIGITS[(ch as u8 - b'0') as usize]),
                _ => return Err(Error::new(ErrorCode::InvalidDigit(ch))),
            }
        }
        // Text reads most significant first; storage is the other way.
        digits.reverse();
        Ok(BigInt::from_parts(sign, digits))
    }
}

impl TryFrom<&BigInt> for i128 {
    type Error = Error;

    fn try_from(value: &BigInt) -> Result<i128> {
        value
            .to_i128()
            .ok_or_else(|| Error::new(ErrorCode::ValueOutOfRange))
    }
}

// Every native integer type whose full range fits in i128.
macro_rules! impl_from_native {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for BigInt {
                #[inline]
                fn from(value: $ty) -> BigInt {
                    BigInt::from_i128(value as i128)
                }
            }
        )*
    };
}

impl_from_native!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 usize);
