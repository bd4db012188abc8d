use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id_type {
    ($name:ident) => {
        #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                $name(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                $name(value.to_string())
            }
        }
    };
}

define_id_type!(AccountId);
define_id_type!(UserId);
define_id_type!(ProductId);

impl AccountId {
    /// Ids are allocated from a per-ledger monotonic sequence; they are
    /// process-unique and never reused.
    pub fn from_sequence(seq: u64) -> Self {
        AccountId(format!("acct-{}", seq))
    }
}
