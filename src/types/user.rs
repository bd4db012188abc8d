use serde::{Deserialize, Serialize};

use crate::types::ids::{AccountId, ProductId, UserId};

/// User record owned by the identity service; only relayed here.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// Product assignment owned by the catalog service; relayed in the
/// onboarding response, never stored.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: String,
    pub product_id: ProductId,
    pub account_id: AccountId,
}
