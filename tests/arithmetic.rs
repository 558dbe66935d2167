use digitwise::{BigInt, Sign};

#[test]
fn carry_propagates_across_positions() {
    // 247 + 58: the units column carries into the tens, which carries into
    // the hundreds.
    assert_eq!(BigInt::from(247) + BigInt::from(58), BigInt::from(305));
}

#[test]
fn sum_can_grow_one_digit() {
    assert_eq!(BigInt::from(999) + BigInt::from(1), BigInt::from(1000));
    assert_eq!(BigInt::from(5) + BigInt::from(5), BigInt::from(10));
}

#[test]
fn borrow_propagates_across_positions() {
    // 1000 - 1: the borrow walks across three zero positions.
    assert_eq!(BigInt::from(1000) - BigInt::from(1), BigInt::from(999));
}

#[test]
fn sign_reduction_is_symmetric() {
    assert_eq!(BigInt::from(-7) + BigInt::from(3), BigInt::from(-4));
    assert_eq!(BigInt::from(3) + BigInt::from(-7), BigInt::from(-4));
    assert_eq!(BigInt::from(-7) + BigInt::from(-3), BigInt::from(-10));
    assert_eq!(BigInt::from(7) - BigInt::from(-3), BigInt::from(10));
    assert_eq!(BigInt::from(-7) - BigInt::from(3), BigInt::from(-10));
    assert_eq!(BigInt::from(-7) - BigInt::from(-3), BigInt::from(-4));
}

#[test]
fn subtraction_below_zero_flips_sign() {
    assert_eq!(BigInt::from(0) - BigInt::from(5), BigInt::from(-5));
    assert_eq!(BigInt::from(3) - BigInt::from(8), BigInt::from(-5));
}

#[test]
fn zero_identities() {
    let x = BigInt::from(123456789);
    let zero = BigInt::zero();
    assert_eq!(&x + &zero, x);
    assert_eq!(&zero + &x, x);
    assert_eq!(&x - &zero, x);
    assert_eq!(&zero - &x, -&x);
    assert_eq!(&x - &x, zero);
    assert_eq!(&x * &zero, zero);
    assert_eq!(&x * &BigInt::from(1), x);
}

#[test]
fn results_that_cancel_are_canonical_zero() {
    // Any operation producing zero magnitude must come out positive.
    let difference = BigInt::from(5) - BigInt::from(5);
    assert!(difference.is_zero());
    assert_eq!(difference.sign(), Sign::Positive);

    let negated_cancel = BigInt::from(-5) + BigInt::from(5);
    assert_eq!(negated_cancel.sign(), Sign::Positive);

    let product = BigInt::from(-17) * BigInt::zero();
    assert!(product.is_zero());
    assert_eq!(product.sign(), Sign::Positive);
}

#[test]
fn long_multiplication() {
    assert_eq!(BigInt::from(123) * BigInt::from(9091), BigInt::from(1118193));
    assert_eq!(BigInt::from(9091) * BigInt::from(123), BigInt::from(1118193));
    assert_eq!(BigInt::from(-123) * BigInt::from(9091), BigInt::from(-1118193));
    assert_eq!(BigInt::from(-123) * BigInt::from(-9091), BigInt::from(1118193));
}

#[test]
fn multiplication_past_native_width() {
    // (2^127 - 1)^2 has no i128 representation; check it through text.
    let max = BigInt::from(i128::MAX);
    let square = &max * &max;
    assert_eq!(square.to_i128(), None);
    assert_eq!(
        square.to_string(),
        "28948022309329048855892746252171976962977213799489202546401021394546514198529",
    );
    // And it still behaves algebraically: x^2 - x = x * (x - 1).
    let x_minus_one = &max - &BigInt::from(1);
    assert_eq!(&square - &max, &max * &x_minus_one);
}

#[test]
fn assign_operators_match_binary_forms() {
    let mut value = BigInt::from(247);
    value += BigInt::from(58);
    assert_eq!(value, BigInt::from(305));
    value -= &BigInt::from(305);
    assert!(value.is_zero());
    value += &BigInt::from(12);
    value *= BigInt::from(-12);
    assert_eq!(value, BigInt::from(-144));
}
