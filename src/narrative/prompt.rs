use crate::nse::SymbolMetrics;
use std::fmt::Write;

/// Character budget requested for the short-form (X) post
pub const X_POST_CHAR_LIMIT: usize = 280;

fn push_symbol_block(out: &mut String, name: &str, m: &SymbolMetrics) {
    // Writing into a String never fails
    let _ = write!(
        out,
        "{name}:\nSpot: {}\nPCR: {}\nResistance: {}\nSupport: {}\n",
        m.spot, m.pcr, m.resistance, m.support
    );
}

/// Build the post-generation prompt for both indices.
///
/// Output depends only on the two metric sets, so the same inputs always
/// produce the same prompt text.
pub fn build_prompt(nifty: &SymbolMetrics, banknifty: &SymbolMetrics) -> String {
    let mut prompt = String::from("\nGenerate intraday posts using:\n\n");
    push_symbol_block(&mut prompt, "NIFTY", nifty);
    prompt.push('\n');
    push_symbol_block(&mut prompt, "BANKNIFTY", banknifty);

    let _ = write!(
        prompt,
        "\nOutput:\n\
         1) WhatsApp Version\n\
         2) LinkedIn Version\n\
         3) X Version (under {X_POST_CHAR_LIMIT} characters)\n\
         Professional structured tone.\n"
    );
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_layout() {
        let nifty = SymbolMetrics { spot: 24812.35, pcr: 0.87, resistance: 25000.0, support: 24500.0 };
        let bank = SymbolMetrics { spot: 51234.5, pcr: 1.2, resistance: 52000.0, support: 51000.0 };

        let expected = "\nGenerate intraday posts using:\n\n\
NIFTY:\nSpot: 24812.35\nPCR: 0.87\nResistance: 25000\nSupport: 24500\n\n\
BANKNIFTY:\nSpot: 51234.5\nPCR: 1.2\nResistance: 52000\nSupport: 51000\n\n\
Output:\n1) WhatsApp Version\n2) LinkedIn Version\n3) X Version (under 280 characters)\n\
Professional structured tone.\n";

        assert_eq!(build_prompt(&nifty, &bank), expected);
    }
}
