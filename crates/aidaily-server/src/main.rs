mod api;
mod middleware;
mod pipeline;
mod render;

use std::sync::Arc;

use aidaily_extract::{Extractor, NerClient};
use aidaily_feed::{FeedCache, FeedClient};
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = aidaily_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!(
        env = %config.env,
        feed_url = %config.feed_url,
        investor_strategy = %config.investor_strategy,
        company_strategy = %config.company_strategy,
        "starting aidaily-server"
    );

    let state = AppState {
        feed: Arc::new(FeedClient::from_config(&config)?),
        cache: Arc::new(Mutex::new(FeedCache::new(config.cache_ttl_secs))),
        snapshot: Arc::default(),
        extractor: Extractor::from_config(&config),
        recognizer: NerClient::from_config(&config)?.map(Arc::new),
        top_deals: config.top_deals,
    };
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
