pub mod api_server_axum;
pub mod app_config;
pub mod error;
pub mod logging;
pub mod narrative;
pub mod nse;
pub mod oi_commands;

// Re-exports for convenience
pub use app_config::{AppConfig, RunMode};
pub use error::{OiError, OiResult, OptionSide};
pub use narrative::{generate_post, OpenAiClient, TextGenerator};
pub use nse::{compute_metrics, NSEClient, OptionChain, OptionChainSource, SymbolMetrics};
pub use oi_commands::{AnalysisReport, OiCommands};
