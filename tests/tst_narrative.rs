use async_trait::async_trait;
use nse_oi_narrator::narrative::{build_prompt, generate_post, TextGenerator};
use nse_oi_narrator::{OiError, OiResult, SymbolMetrics};
use std::sync::Mutex;

/// Records every prompt and answers with a canned reply
struct RecordingGenerator {
    prompts: Mutex<Vec<String>>,
    reply: OiResult<String>,
}

impl RecordingGenerator {
    fn replying(reply: &str) -> Self {
        Self { prompts: Mutex::new(Vec::new()), reply: Ok(reply.to_string()) }
    }

    fn failing() -> Self {
        Self {
            prompts: Mutex::new(Vec::new()),
            reply: Err(OiError::GenerationService("no completion returned".to_string())),
        }
    }
}

#[async_trait]
impl TextGenerator for RecordingGenerator {
    async fn complete(&self, prompt: &str) -> OiResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(e) => Err(OiError::GenerationService(e.to_string())),
        }
    }
}

fn nifty() -> SymbolMetrics {
    SymbolMetrics { spot: 24812.35, pcr: 0.87, resistance: 25000.0, support: 24500.0 }
}

fn banknifty() -> SymbolMetrics {
    SymbolMetrics { spot: 51234.5, pcr: 1.21, resistance: 52000.0, support: 50500.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_prompt_sent_contains_both_metric_sets() {
        let generator = RecordingGenerator::replying("1) WhatsApp ...");
        let post = generate_post(&generator, &nifty(), &banknifty()).await.unwrap();
        assert_eq!(post, "1) WhatsApp ...");

        let prompts = generator.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        let prompt = &prompts[0];

        for needle in [
            "NIFTY:", "Spot: 24812.35", "PCR: 0.87", "Resistance: 25000", "Support: 24500",
            "BANKNIFTY:", "Spot: 51234.5", "PCR: 1.21", "Resistance: 52000", "Support: 50500",
            "WhatsApp", "LinkedIn", "under 280 characters",
        ] {
            assert!(prompt.contains(needle), "prompt is missing {needle:?}");
        }
        assert!(prompt.find("NIFTY:").unwrap() < prompt.find("BANKNIFTY:").unwrap());
    }

    #[tokio::test]
    async fn test_generated_text_returned_verbatim() {
        let reply = "  *Market Update*\n\n<b>NIFTY</b> & co  \n";
        let generator = RecordingGenerator::replying(reply);
        let post = generate_post(&generator, &nifty(), &banknifty()).await.unwrap();
        assert_eq!(post, reply);
    }

    #[tokio::test]
    async fn test_generation_failure_propagates() {
        let generator = RecordingGenerator::failing();
        let err = generate_post(&generator, &nifty(), &banknifty()).await.unwrap_err();
        assert!(matches!(err, OiError::GenerationService(_)));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let first = build_prompt(&nifty(), &banknifty());
        let second = build_prompt(&nifty(), &banknifty());
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_prompt_depends_on_argument_order() {
        assert_ne!(build_prompt(&nifty(), &banknifty()), build_prompt(&banknifty(), &nifty()));
    }
}
