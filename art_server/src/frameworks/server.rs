// Framework bootstrap for the art server runtime.

use crate::frameworks::config::{AppConfig, StrategyKind};
use crate::interface_adapters::clients::GeminiClient;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use crate::use_cases::{AnalyzeThenGenerate, SingleCallEdit, VisualizationStrategy};
use axum::Router;
use std::io::Result;
use std::sync::Arc;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn build_strategy(config: &AppConfig) -> Arc<dyn VisualizationStrategy> {
    match config.strategy {
        StrategyKind::SingleCall => Arc::new(SingleCallEdit {
            edit_model: config.edit_model.clone(),
        }),
        StrategyKind::Pipeline => Arc::new(AnalyzeThenGenerate {
            analysis_model: config.text_model.clone(),
            text_model: config.text_model.clone(),
            image_model: config.image_model.clone(),
        }),
    }
}

pub fn build_state(config: &AppConfig) -> Result<Arc<AppState>> {
    let gemini = GeminiClient::new(
        config.gemini_base_url.clone(),
        config.gemini_api_key.clone(),
        config.upstream_timeout,
    )
    .map_err(|e| std::io::Error::other(format!("failed to initialize gemini client: {e}")))?;

    // A missing key is reported per request, not at startup.
    if config.gemini_api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; generation requests will fail.");
    }

    let strategy = build_strategy(config);
    tracing::debug!(
        base_url = %config.gemini_base_url,
        strategy = strategy.name(),
        timeout_ms = config.upstream_timeout.map(|t| t.as_millis() as u64),
        "gemini client configured."
    );

    Ok(Arc::new(AppState {
        model: Arc::new(gemini),
        strategy,
    }))
}

pub fn build_app(config: &AppConfig) -> Result<Router> {
    let state = build_state(config)?;
    Ok(routes::app(state, config.max_body_bytes))
}

pub async fn run(listener: tokio::net::TcpListener, config: AppConfig) -> Result<()> {
    let address = listener.local_addr()?;
    let app = build_app(&config)?;

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking.
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
        std::io::Error::other(e)
    })?;
    let address = config.socket_addr();

    // Bind TCP listener with error handling.
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, config).await
}
