use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::downstream::{CatalogClient, IdentityClient};
use crate::error::{Error, Result};
use crate::ledger::AccountLedger;
use crate::types::account::Account;
use crate::types::balance::Balance;
use crate::types::ids::ProductId;
use crate::types::user::{Assignment, User};
use crate::DEFAULT_ACCOUNT_TYPE;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub product_id: Option<String>,
    /// Kept as raw JSON: a non-numeric value is silently ignored rather
    /// than rejected.
    #[serde(default)]
    pub initial_credit: Option<Value>,
}

#[derive(Clone, Debug, Serialize)]
pub struct OnboardOutcome {
    pub user: User,
    pub account: Account,
    pub assignment: Assignment,
    pub balance: Balance,
}

/// Sequences user creation, account opening, optional credit, and product
/// assignment into one client-facing operation.
pub struct Onboarder {
    ledger: Arc<RwLock<AccountLedger>>,
    identity: IdentityClient,
    catalog: CatalogClient,
}

impl Onboarder {
    pub fn new(
        ledger: Arc<RwLock<AccountLedger>>,
        identity: IdentityClient,
        catalog: CatalogClient,
    ) -> Self {
        Onboarder {
            ledger,
            identity,
            catalog,
        }
    }

    /// Strict sequential flow:
    /// create user -> open account -> [credit] -> assign product.
    ///
    /// If assignment fails, the account and any credited balance REMAIN in
    /// the ledger and the catalog's status propagates to the caller. There
    /// is no transaction spanning the three services; the system keeps
    /// "account exists but unassigned" over attempting a distributed
    /// rollback. This is the documented failure policy, not an oversight.
    pub async fn onboard(&self, request: OnboardRequest) -> Result<OnboardOutcome> {
        let name = require(request.name, "name")?;
        let email = require(request.email, "email")?;
        let product_id = ProductId::new(require(request.product_id, "productId")?);
        let credit = request.initial_credit.as_ref().and_then(numeric_credit);

        // Nothing local exists yet; an identity failure aborts cleanly.
        let user = self.identity.create_user(&name, &email).await?;
        info!(user_id = %user.id, "user created");

        // Local steps only under the write lock. The lock is released
        // before the catalog call goes on the wire.
        let account = {
            let mut ledger = self.ledger.write().await;
            let account = ledger.create_account(user.id.clone(), DEFAULT_ACCOUNT_TYPE);
            if let Some(amount) = credit {
                ledger.credit(&account.id, amount)?;
            }
            account
        };
        info!(account_id = %account.id, "account opened");

        let assignment = match self.catalog.assign_product(&product_id, &account.id).await {
            Ok(assignment) => assignment,
            Err(err) => {
                warn!(
                    account_id = %account.id,
                    product_id = %product_id,
                    error = %err,
                    "product assignment failed; account retained unassigned"
                );
                return Err(err);
            }
        };

        let balance = self.ledger.read().await.balance(&account.id)?;
        Ok(OnboardOutcome {
            user,
            account,
            assignment,
            balance,
        })
    }
}

fn require(value: Option<String>, field: &'static str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::MissingField(field)),
    }
}

/// A credit is applied only when the request carried a finite JSON number;
/// anything else (string, bool, null, object) is treated as absent.
fn numeric_credit(value: &Value) -> Option<Balance> {
    value
        .as_f64()
        .filter(|v| v.is_finite())
        .map(Balance::from_f64)
}
