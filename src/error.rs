//! When conversion at the crate boundary goes wrong.
//!
//! The digit engine itself signals overflow through `Option` (the
//! `checked_*` / `overflowing_*` digit primitives); this module covers the
//! boundary surfaces where invalid native input can arrive: digit and
//! integer conversion, and string parsing.

use core::fmt::{self, Debug, Display};
use core::result;

/// This type represents all possible errors that can occur when converting
/// values into or out of the digit representation.
pub struct Error {
    code: ErrorCode,
}

/// Alias for a `Result` with the error type `digitwise::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    pub(crate) fn new(code: ErrorCode) -> Error {
        Error { code }
    }

    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Range` - a native value outside the representable range
    /// - `Category::Syntax` - text that is not a decimal integer
    pub fn classify(&self) -> Category {
        match self.code {
            ErrorCode::DigitOutOfRange(_) | ErrorCode::ValueOutOfRange => Category::Range,
            ErrorCode::InvalidDigit(_) | ErrorCode::EmptyInput => Category::Syntax,
        }
    }

    /// Returns true if this error was caused by a native value outside the
    /// representable range.
    pub fn is_range(&self) -> bool {
        self.classify() == Category::Range
    }

    /// Returns true if this error was caused by text that does not spell a
    /// decimal integer.
    pub fn is_syntax(&self) -> bool {
        self.classify() == Category::Syntax
    }
}

/// Categorizes the cause of a `digitwise::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by a native value outside the representable
    /// range, in either direction: a digit above nine going in, or a
    /// magnitude too large for the requested native type coming out.
    Range,

    /// The error was caused by input text that is not a decimal integer.
    Syntax,
}

/// The specific failure behind a `digitwise::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ErrorCode {
    /// A native value outside `[0, 9]` was given to `Digit::from_u8`.
    DigitOutOfRange(u8),

    /// The value does not fit in the requested native integer type.
    ValueOutOfRange,

    /// A character other than an ASCII digit occurred while parsing.
    InvalidDigit(char),

    /// The parsed text contained no digits.
    EmptyInput,
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::DigitOutOfRange(value) => {
                write!(f, "value {} is outside the digit range [0, 9]", value)
            }
            ErrorCode::ValueOutOfRange => {
                f.write_str("value does not fit in the requested integer type")
            }
            ErrorCode::InvalidDigit(ch) => {
                write!(f, "invalid digit character {:?}", ch)
            }
            ErrorCode::EmptyInput => f.write_str("no digits to parse"),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.code, f)
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error({:?})", self.code)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
