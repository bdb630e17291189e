use std::sync::Arc;

use anyhow::Context;

use cropguide_api::app::{AppServices, build_app};
use cropguide_infra::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cropguide_observability::init();

    let config = AppConfig::from_env().context("invalid configuration")?;

    let services = match AppServices::from_config(&config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(path = %e.path().display(), "required artifact unavailable: {e}");
            return Err(e).context("refusing to start without a complete artifact set");
        }
    };

    let app = build_app(Arc::new(services));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
