use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::ops::Add;

/// Signed balance amount. Fractional credits are carried as-is; negative
/// balances are a valid state, overdraft is allowed by design.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Balance(f64);

impl Balance {
    pub fn from_i64(value: i64) -> Self {
        Balance(value as f64)
    }

    pub fn from_f64(value: f64) -> Self {
        Balance(value)
    }

    pub fn zero() -> Self {
        Balance(0.0)
    }
}

impl Add for Balance {
    type Output = Balance;
    fn add(self, other: Balance) -> Balance {
        Balance(self.0 + other.0)
    }
}

/// Whole amounts serialize as JSON integers, so a credit of 100 reads back
/// as `100`, not `100.0`.
impl Serialize for Balance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.fract() == 0.0 && self.0 >= i64::MIN as f64 && self.0 <= i64::MAX as f64 {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Balance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Balance)
    }
}
