pub mod openai_client;
pub mod prompt;

pub use openai_client::{OpenAiClient, TextGenerator, OPENAI_MODEL};
pub use prompt::{build_prompt, X_POST_CHAR_LIMIT};

use crate::error::OiResult;
use crate::nse::SymbolMetrics;
use tracing::info;

/// Ask the generator for the post drafts; its text is returned unmodified
pub async fn generate_post(
    generator: &dyn TextGenerator,
    nifty: &SymbolMetrics,
    banknifty: &SymbolMetrics,
) -> OiResult<String> {
    let prompt = build_prompt(nifty, banknifty);
    let post = generator.complete(&prompt).await?;
    info!(chars = post.len(), "post generated");
    Ok(post)
}
