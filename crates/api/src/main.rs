use std::sync::Arc;

use anyhow::Context;

use stocklist_api::config::ApiConfig;
use stocklist_api::sessions::{InMemorySessionStore, SessionStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env()?;
    stocklist_observability::init(config.log_format);

    let sessions: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let app = stocklist_api::app::build_app(sessions);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
