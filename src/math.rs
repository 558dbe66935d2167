//! Unsigned magnitude arithmetic over little-endian digit buffers.
//!
//! These algorithms assume least-significant-first order, so for a buffer
//! `[Seven, Four, Two]` the `Two` is the most significant digit and the
//! value is 247. Every routine here is built from the primitives in
//! [`crate::digit`] and none of them consult a sign; the sign-aware dispatch
//! lives on [`BigInt`](crate::BigInt).

use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::digit::{self, Digit};

/// Storage for a magnitude, least significant digit first.
pub(crate) type DigitVec = Vec<Digit>;

/// Trim leading (most-significant) zeros, keeping at least one digit.
pub(crate) fn normalize(digits: &mut DigitVec) {
    while digits.len() > 1 && digits.last() == Some(&Digit::Zero) {
        digits.pop();
    }
}

/// Compare two normalized magnitudes.
///
/// A shorter buffer is a smaller value; equal lengths compare digit by digit
/// from the most significant end, first mismatch deciding.
pub(crate) fn compare(x: &[Digit], y: &[Digit]) -> Ordering {
    if x.len() != y.len() {
        return x.len().cmp(&y.len());
    }
    for (xi, yi) in x.iter().rev().zip(y.iter().rev()) {
        let ordering = xi.cmp(yi);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Add two magnitudes position by position.
///
/// A pending carry is applied to the left digit before the column sum. The
/// increment can itself carry only when that digit was nine, and a wrapped
/// column of zero can never carry again out of `digit::add`, so the two
/// flags are exclusive and one carry bit per position suffices. A carry left
/// over after the last position appends `One`; this is the only way the
/// result grows a digit.
pub(crate) fn add(x: &[Digit], y: &[Digit]) -> DigitVec {
    let len = x.len().max(y.len());
    let mut sum = Vec::with_capacity(len + 1);
    let mut carry = false;
    for i in 0..len {
        let mut left = x.get(i).copied().unwrap_or(Digit::Zero);
        let right = y.get(i).copied().unwrap_or(Digit::Zero);
        let mut wrapped = false;
        if carry {
            let (next, wrap) = left.overflowing_increment();
            left = next;
            wrapped = wrap;
        }
        let (column, carried) = digit::add(left, right);
        sum.push(column);
        carry = wrapped | carried;
    }
    if carry {
        sum.push(Digit::One);
    }
    sum
}

/// Subtract `y` from `x`, borrow propagating toward the most significant
/// position. Requires `x >= y`; the final borrow must come out clear.
pub(crate) fn sub(x: &[Digit], y: &[Digit]) -> DigitVec {
    debug_assert!(compare(x, y) != Ordering::Less);

    let mut difference = Vec::with_capacity(x.len());
    let mut borrow = false;
    for (i, &left) in x.iter().enumerate() {
        let right = y.get(i).copied().unwrap_or(Digit::Zero);
        let mut left = left;
        let mut wrapped = false;
        if borrow {
            let (next, wrap) = left.overflowing_decrement();
            left = next;
            wrapped = wrap;
        }
        let (column, borrowed) = digit::sub(left, right);
        difference.push(column);
        borrow = wrapped | borrowed;
    }
    debug_assert!(!borrow);

    // The top positions may have cancelled out.
    normalize(&mut difference);
    difference
}

/// Shift a magnitude left by `places` decimal positions by prepending zeros
/// at the least-significant end.
pub(crate) fn shift_left(x: &[Digit], places: usize) -> DigitVec {
    let mut shifted = Vec::with_capacity(x.len() + places);
    shifted.extend(core::iter::repeat(Digit::Zero).take(places));
    shifted.extend_from_slice(x);
    shifted
}

/// Schoolbook long multiplication.
///
/// The ten multiples `d * x` are precomputed by repeated addition, so every
/// partial product is a table lookup. Each digit of `y` then contributes its
/// multiple shifted left by its place; zero digits contribute nothing and
/// are skipped.
pub(crate) fn mul(x: &[Digit], y: &[Digit]) -> DigitVec {
    let mut multiples: Vec<DigitVec> = Vec::with_capacity(10);
    let mut multiple: DigitVec = vec![Digit::Zero];
    for _ in 0..10 {
        multiples.push(multiple.clone());
        multiple = add(&multiple, x);
    }

    let mut product: DigitVec = vec![Digit::Zero];
    for (place, &digit) in y.iter().enumerate() {
        if digit == Digit::Zero {
            continue;
        }
        let partial = shift_left(&multiples[digit.to_u8() as usize], place);
        product = add(&product, &partial);
    }
    normalize(&mut product);
    product
}
