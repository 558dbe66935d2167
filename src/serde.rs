//! Serde integration for [`BigInt`], enabled by the `serde` feature.
//!
//! Values serialize as their decimal string form, which survives any
//! magnitude; deserialization also accepts native integers so plain JSON
//! numbers load without quoting.

use core::fmt;

use serde_core::de::{Deserialize, Deserializer, Error, Unexpected, Visitor};
use serde_core::ser::{Serialize, Serializer};

use crate::BigInt;

impl Serialize for BigInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D>(deserializer: D) -> Result<BigInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BigIntVisitor;

        impl<'de> Visitor<'de> for BigIntVisitor {
            type Value = BigInt;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a decimal integer, as a string or a native integer")
            }

            fn visit_i64<E>(self, value: i64) -> Result<BigInt, E>
            where
                E: Error,
            {
                Ok(BigInt::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<BigInt, E>
            where
                E: Error,
            {
                Ok(BigInt::from(value))
            }

            fn visit_i128<E>(self, value: i128) -> Result<BigInt, E>
            where
                E: Error,
            {
                Ok(BigInt::from(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<BigInt, E>
            where
                E: Error,
            {
                value
                    .parse()
                    .map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
            }
        }

        deserializer.deserialize_any(BigIntVisitor)
    }
}
