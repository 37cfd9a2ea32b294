pub mod config;
pub mod models;
pub mod nse_client;
pub mod processor;

// Re-exports (public API)
pub use models::{OptionChain, OptionData, OptionDetail, Records};
pub use nse_client::{parse_option_chain, NSEClient, NseSession, OptionChainSource};
pub use processor::{build_oi_maps, compute_metrics, round_ratio, StrikeOiMap, SymbolMetrics};
