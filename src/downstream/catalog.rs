use reqwest::Client;
use serde_json::json;

use crate::downstream::{decode_envelope, normalize_base_url, read_json, unreachable};
use crate::error::Result;
use crate::types::ids::{AccountId, ProductId};
use crate::types::user::Assignment;

/// JSON client for the catalog service.
#[derive(Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: &str, http: Client) -> Self {
        CatalogClient {
            http,
            base_url: normalize_base_url(base_url),
        }
    }

    pub async fn assign_product(
        &self,
        product_id: &ProductId,
        account_id: &AccountId,
    ) -> Result<Assignment> {
        let url = format!("{}/products/{}/assign", self.base_url, product_id);
        let response = self
            .http
            .post(&url)
            .json(&json!({ "accountId": account_id }))
            .send()
            .await
            .map_err(unreachable)?;
        decode_envelope(read_json(response).await?, "assignment")
    }
}
