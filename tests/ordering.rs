use core::cmp::Ordering;

use digitwise::BigInt;

#[test]
fn mixed_signs_decide_outright() {
    assert!(BigInt::from(1) > BigInt::from(-1000));
    assert!(BigInt::from(-1) < BigInt::from(1000));
    // Zero is positive by convention and still beats every negative.
    assert!(BigInt::zero() > BigInt::from(-1));
    assert!(BigInt::zero() < BigInt::from(1));
}

#[test]
fn magnitude_length_decides_first() {
    assert!(BigInt::from(100) > BigInt::from(99));
    assert!(BigInt::from(99) < BigInt::from(100));
    // Among negatives the sense reverses.
    assert!(BigInt::from(-99) > BigInt::from(-100));
    assert!(BigInt::from(-100) < BigInt::from(-99));
}

#[test]
fn equal_length_compares_most_significant_first() {
    assert!(BigInt::from(321) > BigInt::from(123));
    assert!(BigInt::from(129) < BigInt::from(131));
    assert!(BigInt::from(-321) < BigInt::from(-123));
}

#[test]
fn equal_values_are_not_greater() {
    let a = BigInt::from(12345);
    assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
    assert!(!(a > a.clone()));
    assert_eq!(BigInt::zero().cmp(&BigInt::from(0)), Ordering::Equal);
}

#[test]
fn ordering_is_total_over_a_window() {
    // Exhaustive window around zero: ordering must agree with the native
    // ordering on every pair.
    let window: Vec<i64> = (-25..=25).collect();
    for &x in &window {
        for &y in &window {
            assert_eq!(
                BigInt::from(x).cmp(&BigInt::from(y)),
                x.cmp(&y),
                "{} vs {}",
                x,
                y,
            );
        }
    }
}

#[test]
fn sorting_uses_the_total_order() {
    let mut values = vec![
        BigInt::from(10),
        BigInt::from(-3),
        BigInt::zero(),
        BigInt::from(7),
        BigInt::from(-100),
    ];
    values.sort();
    let sorted: Vec<_> = values.iter().map(|v| v.to_i128().unwrap()).collect();
    assert_eq!(sorted, [-100, -3, 0, 7, 10]);
}
