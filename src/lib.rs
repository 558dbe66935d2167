//! Arbitrary-precision signed decimal integers, built one digit at a time.
//!
//! A [`BigInt`] is an ordered sequence of base-10 [`Digit`]s (least
//! significant first) plus a [`Sign`]. Addition, subtraction,
//! multiplication, and ordering are computed by explicit digit-level carry
//! and borrow propagation; no native wide-integer type is involved in the
//! arithmetic itself. Native integers appear only at the boundary, for
//! construction and extraction.
//!
//! ```
//! use digitwise::BigInt;
//!
//! let a: BigInt = "123".parse().unwrap();
//! let b = BigInt::from(9091);
//! assert_eq!((&a * &b).to_string(), "1118193");
//!
//! let x = BigInt::from(247);
//! let y = BigInt::from(58);
//! assert_eq!(&x + &y, BigInt::from(305));
//! assert!(x > y);
//! ```
//!
//! Values are immutable: every operation returns a new `BigInt`. The
//! representation is canonical (no leading zeros, zero is always positive),
//! which keeps equality and hashing structural.
//!
//! # No-std support
//!
//! As long as there is a memory allocator, it is possible to use this crate
//! without the rest of the Rust standard library. Disable the default `std`
//! feature and enable the `alloc` feature.
//!
//! # Feature flags
//!
//! - `std` (default): implementations of [`std::error::Error`] and friends.
//! - `alloc`: heap collections without the rest of the standard library.
//! - `serde`: `Serialize`/`Deserialize` for [`BigInt`], as decimal text or
//!   native integers.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

extern crate alloc;

#[cfg(not(any(feature = "std", feature = "alloc")))]
compile_error! {
    "digitwise requires that either the `std` (default) or `alloc` feature is enabled"
}

mod bigint;
pub mod digit;
mod error;
mod math;
mod ops;
#[cfg(feature = "serde")]
mod serde;
mod sign;

pub use crate::bigint::BigInt;
pub use crate::digit::Digit;
pub use crate::error::{Category, Error, ErrorCode, Result};
pub use crate::sign::Sign;
