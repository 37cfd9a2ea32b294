use crate::app_config::AppConfig;
use crate::error::OiResult;
use crate::narrative::{self, OpenAiClient, TextGenerator};
use crate::nse::{compute_metrics, config, NSEClient, OptionChainSource, SymbolMetrics};

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::info;

/// Outcome of one full pipeline run
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub nifty: SymbolMetrics,
    pub banknifty: SymbolMetrics,
    pub post: String,
}

/// OI Command Handler - sequences fetch, compute and generate
pub struct OiCommands;

impl OiCommands {
    /// Fetch both indices, reduce them to metrics and generate the post.
    /// Stops at the first failure; nothing is generated from partial data.
    pub async fn run_analysis(
        source: &dyn OptionChainSource,
        generator: &dyn TextGenerator,
    ) -> OiResult<AnalysisReport> {
        let nifty_raw = source.fetch_option_chain(config::NIFTY).await?;
        let banknifty_raw = source.fetch_option_chain(config::BANKNIFTY).await?;

        let nifty = compute_metrics(&nifty_raw)?;
        info!(symbol = config::NIFTY, spot = nifty.spot, pcr = nifty.pcr,
              resistance = nifty.resistance, support = nifty.support, "metrics computed");

        let banknifty = compute_metrics(&banknifty_raw)?;
        info!(symbol = config::BANKNIFTY, spot = banknifty.spot, pcr = banknifty.pcr,
              resistance = banknifty.resistance, support = banknifty.support, "metrics computed");

        let post = narrative::generate_post(generator, &nifty, &banknifty).await?;

        Ok(AnalysisReport { nifty, banknifty, post })
    }

    /// Run the pipeline once against the live services and print the result
    pub async fn run_once(app_config: &AppConfig) -> Result<()> {
        println!("{}", "=".repeat(60).blue());
        println!("{}", "Intraday OI Post Generator".green().bold());
        println!("{}", "=".repeat(60).blue());
        println!();

        let source = NSEClient::with_base_url(&app_config.nse_base_url);
        let generator = OpenAiClient::new(&app_config.openai_api_key, &app_config.openai_base_url)?;

        println!("{} Fetching {} and {} option chains...", "→".cyan(), config::NIFTY.yellow(), config::BANKNIFTY.yellow());
        let report = Self::run_analysis(&source, &generator)
            .await
            .context("Analysis run failed")?;

        println!("{} Generated at {}", "✓".green(), chrono::Local::now().format("%d-%b-%Y %H:%M:%S"));
        println!();
        Self::print_metrics(config::NIFTY, &report.nifty);
        Self::print_metrics(config::BANKNIFTY, &report.banknifty);

        println!("{}", "=".repeat(60).blue());
        println!("{}", "Post".cyan().bold());
        println!("{}", "=".repeat(60).blue());
        println!("{}", report.post);
        println!("{}", "=".repeat(60).blue());

        Ok(())
    }

    fn print_metrics(symbol: &str, metrics: &SymbolMetrics) {
        println!("{} {}", "ℹ".blue(), symbol.yellow().bold());
        println!("  Spot: {}", metrics.spot);
        println!("  PCR: {}", metrics.pcr);
        println!("  Resistance: {}", metrics.resistance);
        println!("  Support: {}", metrics.support);
        println!();
    }
}
