use tracing::Span;
use tracing_subscriber::EnvFilter;

use crate::types::ids::AccountId;

/// Install the global subscriber. `RUST_LOG` overrides the default level.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
}

pub fn trace_onboarding() -> Span {
    tracing::info_span!("onboarding")
}

pub fn trace_credit(account_id: &AccountId) -> Span {
    tracing::info_span!(
        "credit",
        account_id = %account_id,
    )
}
