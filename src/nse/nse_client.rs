use super::config;
use super::models::OptionChain;
use crate::error::{body_preview, OiError, OiResult};
use async_trait::async_trait;
use rand::{seq::SliceRandom, thread_rng};
use reqwest::{header, Client};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Anything that can produce an option chain for an index symbol
#[async_trait]
pub trait OptionChainSource: Send + Sync {
    async fn fetch_option_chain(&self, symbol: &str) -> OiResult<OptionChain>;
}

// -----------------------------------------------
// SESSION: ONE COOKIE JAR PER FETCH
// -----------------------------------------------
pub struct NseSession {
    client: Client,
    base_url: String,
}

impl NseSession {
    pub fn open(base_url: &str, timeout: Duration) -> OiResult<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Visit the site root so the provider sets its session cookies.
    /// The status is not checked; the API call reports any rejection.
    pub async fn bootstrap(&self) -> OiResult<()> {
        let res = self
            .client
            .get(&self.base_url)
            .header(header::ACCEPT, config::HEADER_ACCEPT_HTML)
            .send()
            .await
            .map_err(|e| OiError::UpstreamUnavailable(format!("session bootstrap failed: {}", e)))?;

        if !res.status().is_success() {
            warn!(status = %res.status(), "NSE bootstrap returned non-success status");
        }
        Ok(())
    }

    pub async fn get_option_chain(&self, symbol: &str) -> OiResult<OptionChain> {
        let url = config::nse_option_chain_url(&self.base_url, symbol);
        debug!(%url, "fetching option chain");

        let res = self
            .client
            .get(&url)
            .header(header::ACCEPT, config::HEADER_ACCEPT_JSON)
            .header(header::REFERER, config::nse_referer(&self.base_url))
            .send()
            .await
            .map_err(|e| OiError::UpstreamUnavailable(format!("request for {} failed: {}", symbol, e)))?;

        let status = res.status();
        if !status.is_success() {
            return Err(OiError::UpstreamUnavailable(format!(
                "NSE API blocked or failed for {}: HTTP {}",
                symbol,
                status.as_u16()
            )));
        }

        let text = res
            .text()
            .await
            .map_err(|e| OiError::UpstreamUnavailable(format!("failed to read body for {}: {}", symbol, e)))?;

        parse_option_chain(&text)
    }
}

/// Decode a provider body, rejecting block pages and payloads without `records`
pub fn parse_option_chain(text: &str) -> OiResult<OptionChain> {
    let trimmed = text.trim();
    if !trimmed.starts_with('{') {
        return Err(OiError::UpstreamMalformed(format!(
            "non-JSON response: {}",
            body_preview(trimmed)
        )));
    }

    let value: Value = serde_json::from_str(trimmed)
        .map_err(|e| OiError::UpstreamMalformed(format!("invalid JSON: {}", e)))?;

    if value.get("records").is_none() {
        return Err(OiError::UpstreamMalformed(
            "response has no records, possibly blocked".to_string(),
        ));
    }

    serde_json::from_value(value)
        .map_err(|e| OiError::UpstreamMalformed(format!("failed to parse option chain: {}", e)))
}

// -----------------------------------------------
// CLIENT
// -----------------------------------------------
pub struct NSEClient {
    base_url: String,
    timeout: Duration,
}

impl NSEClient {
    pub fn new() -> Self {
        Self::with_base_url(config::NSE_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, config::HTTP_TIMEOUT)
    }

    /// Timeout applies to the bootstrap and the API request separately
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self { base_url: base_url.into(), timeout }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for NSEClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OptionChainSource for NSEClient {
    async fn fetch_option_chain(&self, symbol: &str) -> OiResult<OptionChain> {
        let session = NseSession::open(&self.base_url, self.timeout)?;
        session.bootstrap().await?;
        let chain = session.get_option_chain(symbol).await?;

        info!(
            symbol,
            strikes = chain.records.data.len(),
            underlying = chain.records.underlying_value,
            provider_timestamp = chain.records.timestamp.as_deref().unwrap_or("unknown"),
            "option chain fetched"
        );
        Ok(chain)
    }
}

// -----------------------------------------------
// HTTP CLIENT BUILDER
// -----------------------------------------------
fn build_client(timeout: Duration) -> OiResult<Client> {
    let mut headers = header::HeaderMap::new();

    let lang = config::ACCEPT_LANGUAGES
        .choose(&mut thread_rng())
        .copied()
        .unwrap_or("en-US,en;q=0.9");
    headers.insert(header::ACCEPT_LANGUAGE, header::HeaderValue::from_static(lang));

    Client::builder()
        .default_headers(headers)
        .cookie_store(true)
        .user_agent(config::USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(|e| OiError::UpstreamUnavailable(format!("failed to build HTTP client: {}", e)))
}
