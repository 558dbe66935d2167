#![cfg(feature = "serde")]

use digitwise::BigInt;

#[test]
fn serializes_as_decimal_string() {
    assert_eq!(serde_json::to_string(&BigInt::from(1118193)).unwrap(), "\"1118193\"");
    assert_eq!(serde_json::to_string(&BigInt::from(-305)).unwrap(), "\"-305\"");
    assert_eq!(serde_json::to_string(&BigInt::zero()).unwrap(), "\"0\"");
}

#[test]
fn deserializes_from_string_or_number() {
    let from_string: BigInt = serde_json::from_str("\"-305\"").unwrap();
    assert_eq!(from_string, BigInt::from(-305));

    let from_number: BigInt = serde_json::from_str("-305").unwrap();
    assert_eq!(from_number, BigInt::from(-305));

    let from_unsigned: BigInt = serde_json::from_str("18446744073709551615").unwrap();
    assert_eq!(from_unsigned, BigInt::from(u64::MAX));
}

#[test]
fn round_trips_past_native_width() {
    let square = BigInt::from(i128::MAX) * BigInt::from(i128::MAX);
    let encoded = serde_json::to_string(&square).unwrap();
    let decoded: BigInt = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, square);
}

#[test]
fn rejects_non_numeric_strings() {
    assert!(serde_json::from_str::<BigInt>("\"12x\"").is_err());
    assert!(serde_json::from_str::<BigInt>("\"\"").is_err());
    assert!(serde_json::from_str::<BigInt>("true").is_err());
}
