use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;
use tracing::info;

use accounts_core::api::rest::{ApiState, create_router};
use accounts_core::config::AppConfig;
use accounts_core::downstream::{CatalogClient, IdentityClient, build_http_client};
use accounts_core::ledger::AccountLedger;
use accounts_core::observability;
use accounts_core::onboarding::Onboarder;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    observability::tracing::init();

    let config = AppConfig::load().context("loading configuration")?;

    let http = build_http_client(config.downstream.timeout())?;
    let identity = IdentityClient::new(&config.identity.base_url, http.clone());
    let catalog = CatalogClient::new(&config.catalog.base_url, http);

    let ledger = Arc::new(RwLock::new(AccountLedger::new()));
    let onboarder = Onboarder::new(ledger.clone(), identity.clone(), catalog);

    let state = Arc::new(ApiState {
        ledger,
        identity,
        onboarder,
    });
    let app = create_router(state).layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!(%addr, "accounts service listening");

    axum::serve(listener, app).await.context("serving")?;
    Ok(())
}
