//! The ten decimal digits and the carry/borrow primitives built on them.
//!
//! Everything in this module steps through the digit cycle one successor or
//! predecessor at a time. [`add`] and [`sub`] are defined in terms of
//! [`Digit::overflowing_increment`] and [`Digit::overflowing_decrement`]
//! rather than native integer arithmetic, so a carry or borrow is observed
//! exactly where it is produced and the engine never leans on a wider type.

use core::cmp::Ordering;
use core::fmt::{self, Display};

use crate::error::{Error, ErrorCode};

/// One decimal digit, the atomic unit of magnitude.
///
/// Digits are plain values: `Copy`, compared by value, totally ordered by
/// numeric value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit `0`.
    Zero = 0,
    /// The digit `1`.
    One = 1,
    /// The digit `2`.
    Two = 2,
    /// The digit `3`.
    Three = 3,
    /// The digit `4`.
    Four = 4,
    /// The digit `5`.
    Five = 5,
    /// The digit `6`.
    Six = 6,
    /// The digit `7`.
    Seven = 7,
    /// The digit `8`.
    Eight = 8,
    /// The digit `9`.
    Nine = 9,
}

/// All ten digits in numeric order; the lookup table behind
/// [`Digit::from_u8`].
pub(crate) const DIGITS: [Digit; 10] = [
    Digit::Zero,
    Digit::One,
    Digit::Two,
    Digit::Three,
    Digit::Four,
    Digit::Five,
    Digit::Six,
    Digit::Seven,
    Digit::Eight,
    Digit::Nine,
];

impl Digit {
    /// The numeric successor, or `None` for `Nine`.
    ///
    /// ```
    /// use digitwise::Digit;
    ///
    /// assert_eq!(Digit::Three.checked_increment(), Some(Digit::Four));
    /// assert_eq!(Digit::Nine.checked_increment(), None);
    /// ```
    #[inline]
    pub fn checked_increment(self) -> Option<Digit> {
        match self {
            Digit::Zero => Some(Digit::One),
            Digit::One => Some(Digit::Two),
            Digit::Two => Some(Digit::Three),
            Digit::Three => Some(Digit::Four),
            Digit::Four => Some(Digit::Five),
            Digit::Five => Some(Digit::Six),
            Digit::Six => Some(Digit::Seven),
            Digit::Seven => Some(Digit::Eight),
            Digit::Eight => Some(Digit::Nine),
            Digit::Nine => None,
        }
    }

    /// The numeric predecessor, or `None` for `Zero`.
    #[inline]
    pub fn checked_decrement(self) -> Option<Digit> {
        match self {
            Digit::Zero => None,
            Digit::One => Some(Digit::Zero),
            Digit::Two => Some(Digit::One),
            Digit::Three => Some(Digit::Two),
            Digit::Four => Some(Digit::Three),
            Digit::Five => Some(Digit::Four),
            Digit::Six => Some(Digit::Five),
            Digit::Seven => Some(Digit::Six),
            Digit::Eight => Some(Digit::Seven),
            Digit::Nine => Some(Digit::Eight),
        }
    }

    /// Total increment: wraps `Nine` around to `Zero` and reports the carry.
    #[inline]
    pub fn overflowing_increment(self) -> (Digit, bool) {
        match self.checked_increment() {
            Some(next) => (next, false),
            None => (Digit::Zero, true),
        }
    }

    /// Total decrement: wraps `Zero` around to `Nine` and reports the borrow.
    #[inline]
    pub fn overflowing_decrement(self) -> (Digit, bool) {
        match self.checked_decrement() {
            Some(next) => (next, false),
            None => (Digit::Nine, true),
        }
    }

    /// Convert a native value in `[0, 9]`.
    ///
    /// # Errors
    ///
    /// Values above nine are rejected with a [`Category::Range`] error.
    ///
    /// [`Category::Range`]: crate::Category::Range
    pub fn from_u8(value: u8) -> Result<Digit, Error> {
        match DIGITS.get(value as usize) {
            Some(&digit) => Ok(digit),
            None => Err(Error::new(ErrorCode::DigitOutOfRange(value))),
        }
    }

    /// The digit's numeric value.
    #[inline]
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// The digit as a one-character string.
    pub fn as_str(self) -> &'static str {
        match self {
            Digit::Zero => "0",
            Digit::One => "1",
            Digit::Two => "2",
            Digit::Three => "3",
            Digit::Four => "4",
            Digit::Five => "5",
            Digit::Six => "6",
            Digit::Seven => "7",
            Digit::Eight => "8",
            Digit::Nine => "9",
        }
    }
}

impl Ord for Digit {
    /// Walk both digits down together; whichever is still standing when the
    /// other reaches zero is the greater. Bounded by nine steps.
    fn cmp(&self, other: &Self) -> Ordering {
        let mut left = *self;
        let mut right = *other;
        while left != Digit::Zero && right != Digit::Zero {
            left = left.overflowing_decrement().0;
            right = right.overflowing_decrement().0;
        }
        match (left, right) {
            (Digit::Zero, Digit::Zero) => Ordering::Equal,
            (Digit::Zero, _) => Ordering::Less,
            (_, _) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Digit {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl TryFrom<u8> for Digit {
    type Error = Error;

    #[inline]
    fn try_from(value: u8) -> Result<Digit, Error> {
        Digit::from_u8(value)
    }
}

impl From<Digit> for u8 {
    #[inline]
    fn from(digit: Digit) -> u8 {
        digit.to_u8()
    }
}

impl Display for Digit {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Add two digits, producing the sum digit and whether a one carries out.
///
/// The sum is computed by stepping `rhs` forward once for every unit in
/// `lhs`. Two digits sum to at most 18, so at most one wrap can occur and a
/// single carry flag is enough.
///
/// ```
/// use digitwise::{digit, Digit};
///
/// assert_eq!(digit::add(Digit::Four, Digit::Three), (Digit::Seven, false));
/// assert_eq!(digit::add(Digit::Seven, Digit::Eight), (Digit::Five, true));
/// ```
#[inline]
pub fn add(lhs: Digit, rhs: Digit) -> (Digit, bool) {
    let mut steps = lhs;
    let mut sum = rhs;
    let mut carried = false;
    while steps != Digit::Zero {
        steps = steps.overflowing_decrement().0;
        let (next, carry) = sum.overflowing_increment();
        sum = next;
        carried |= carry;
    }
    (sum, carried)
}

/// Subtract `rhs` from `lhs`, producing the difference digit and whether a
/// one is borrowed.
///
/// When `lhs < rhs` the chain wraps past zero once, so the returned digit is
/// `lhs - rhs + 10` and the borrow flag is set.
///
/// ```
/// use digitwise::{digit, Digit};
///
/// assert_eq!(digit::sub(Digit::Seven, Digit::Two), (Digit::Five, false));
/// assert_eq!(digit::sub(Digit::Two, Digit::Seven), (Digit::Five, true));
/// ```
#[inline]
pub fn sub(lhs: Digit, rhs: Digit) -> (Digit, bool) {
    let mut steps = rhs;
    let mut difference = lhs;
    let mut borrowed = false;
    while steps != Digit::Zero {
        steps = steps.overflowing_decrement().0;
        let (next, borrow) = difference.overflowing_decrement();
        difference = next;
        borrowed |= borrow;
    }
    (difference, borrowed)
}
