//! Operator overloads for [`BigInt`].
//!
//! The borrowing impls (`&BigInt op &BigInt`) hold the real dispatch; the
//! owned and mixed forms forward to them so arithmetic reads naturally
//! whether or not the operands are being kept. Mixed-type operands are not
//! accepted: there is no `BigInt + i64`, convert first.

use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::BigInt;

/// ```
/// use digitwise::BigInt;
///
/// let a = BigInt::from(-7);
/// let b = BigInt::from(3);
/// assert_eq!(&a + &b, BigInt::from(-4));
/// assert_eq!(&b + &a, BigInt::from(-4));
/// ```
impl Add for &BigInt {
    type Output = BigInt;

    #[inline]
    fn add(self, rhs: &BigInt) -> BigInt {
        self.add_impl(rhs)
    }
}

/// ```
/// use digitwise::BigInt;
///
/// let a = BigInt::from(1000);
/// let b = BigInt::from(1);
/// assert_eq!(&a - &b, BigInt::from(999));
/// assert_eq!(&b - &a, BigInt::from(-999));
/// ```
impl Sub for &BigInt {
    type Output = BigInt;

    #[inline]
    fn sub(self, rhs: &BigInt) -> BigInt {
        self.sub_impl(rhs)
    }
}

/// ```
/// use digitwise::BigInt;
///
/// let a = BigInt::from(123);
/// let b = BigInt::from(9091);
/// assert_eq!(&a * &b, BigInt::from(1118193));
/// ```
impl Mul for &BigInt {
    type Output = BigInt;

    #[inline]
    fn mul(self, rhs: &BigInt) -> BigInt {
        self.mul_impl(rhs)
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: BigInt) -> BigInt {
                $imp::$method(&self, &rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: &BigInt) -> BigInt {
                $imp::$method(&self, rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: BigInt) -> BigInt {
                $imp::$method(self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

macro_rules! forward_assign {
    ($imp:ident, $method:ident, $binop:ident, $binmethod:ident) => {
        impl $imp<&BigInt> for BigInt {
            #[inline]
            fn $method(&mut self, rhs: &BigInt) {
                *self = $binop::$binmethod(&*self, rhs);
            }
        }

        impl $imp<BigInt> for BigInt {
            #[inline]
            fn $method(&mut self, rhs: BigInt) {
                *self = $binop::$binmethod(&*self, &rhs);
            }
        }
    };
}

forward_assign!(AddAssign, add_assign, Add, add);
forward_assign!(SubAssign, sub_assign, Sub, sub);
forward_assign!(MulAssign, mul_assign, Mul, mul);

/// ```
/// use digitwise::BigInt;
///
/// assert_eq!(-BigInt::from(5), BigInt::from(-5));
/// assert_eq!(-BigInt::zero(), BigInt::zero());
/// ```
impl Neg for &BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        self.negate()
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        self.negate()
    }
}
