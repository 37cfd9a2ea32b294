use crate::app_config::AppConfig;
use crate::error::OiError;
use crate::narrative::{OpenAiClient, TextGenerator};
use crate::nse::{NSEClient, OptionChainSource};
use crate::oi_commands::OiCommands;
use anyhow::Result;
use axum::{
    extract::State,
    response::Html,
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub const LIVENESS_MESSAGE: &str = "Intraday OI Automation Running";

// -----------------------------------------------
// APPLICATION STATE
// -----------------------------------------------

#[derive(Clone)]
pub struct AppState {
    source: Arc<dyn OptionChainSource>,
    generator: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(source: Arc<dyn OptionChainSource>, generator: Arc<dyn TextGenerator>) -> Self {
        Self { source, generator }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Ok(Self::new(
            Arc::new(NSEClient::with_base_url(&config.nse_base_url)),
            Arc::new(OpenAiClient::new(&config.openai_api_key, &config.openai_base_url)?),
        ))
    }
}

// -----------------------------------------------
// API HANDLERS
// -----------------------------------------------

/// GET / - Liveness check
async fn home() -> &'static str {
    LIVENESS_MESSAGE
}

/// GET /run - Fetch, compute and generate the intraday posts
async fn run_analysis(State(app_state): State<AppState>) -> Result<Html<String>, OiError> {
    let start_time = Instant::now();

    let report = OiCommands::run_analysis(app_state.source.as_ref(), app_state.generator.as_ref()).await?;

    info!(elapsed = ?start_time.elapsed(), "run completed");
    Ok(Html(format!("<pre>{}</pre>", escape_html(&report.post))))
}

// -----------------------------------------------
// HELPER FUNCTIONS
// -----------------------------------------------

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

// -----------------------------------------------
// SERVER SETUP
// -----------------------------------------------

pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/run", get(run_analysis))
        .with_state(app_state)
}

pub async fn start_server(config: &AppConfig) -> Result<()> {
    let app_state = AppState::from_config(config)?;

    let app = build_router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(%addr, "OI narrator server running");
    info!("endpoints: GET /  GET /run");

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("PCR < 1 & rising > 0"), "PCR &lt; 1 &amp; rising &gt; 0");
        assert_eq!(escape_html("plain"), "plain");
    }
}
