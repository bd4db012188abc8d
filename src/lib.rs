pub mod api;
pub mod config;
pub mod downstream;
pub mod error;
pub mod ledger;
pub mod observability;
pub mod onboarding;
pub mod types;

/// Account type used when a create request does not specify one.
pub const DEFAULT_ACCOUNT_TYPE: &str = "standard";

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "accounts";
