use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::ids::{AccountId, UserId};

/// Account record. Identity fields are never mutated after creation; the
/// balance lives in the ledger's balance map, not in the record itself.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: AccountId,
    pub user_id: UserId,
    #[serde(rename = "type")]
    pub account_type: String,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn new(id: AccountId, user_id: UserId, account_type: impl Into<String>) -> Self {
        Account {
            id,
            user_id,
            account_type: account_type.into(),
            created_at: Utc::now(),
        }
    }
}
