use reqwest::Client;
use serde_json::json;

use crate::downstream::{decode_envelope, normalize_base_url, read_json, unreachable};
use crate::error::Result;
use crate::types::ids::UserId;
use crate::types::user::User;

/// JSON client for the identity service.
#[derive(Clone)]
pub struct IdentityClient {
    http: Client,
    base_url: String,
}

impl IdentityClient {
    pub fn new(base_url: &str, http: Client) -> Self {
        IdentityClient {
            http,
            base_url: normalize_base_url(base_url),
        }
    }

    /// Look up an existing user; the identity service answers 404 for
    /// unknown ids, which propagates as `Upstream { status: 404, .. }`.
    pub async fn fetch_user(&self, user_id: &UserId) -> Result<User> {
        let url = format!("{}/users/{}", self.base_url, user_id);
        let response = self.http.get(&url).send().await.map_err(unreachable)?;
        decode_envelope(read_json(response).await?, "user")
    }

    pub async fn create_user(&self, name: &str, email: &str) -> Result<User> {
        let url = format!("{}/users", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&json!({ "name": name, "email": email }))
            .send()
            .await
            .map_err(unreachable)?;
        decode_envelope(read_json(response).await?, "user")
    }
}
