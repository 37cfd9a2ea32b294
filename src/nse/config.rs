use std::time::Duration;

// -----------------------------------------------
// NSE API ENDPOINTS
// -----------------------------------------------
pub const NSE_BASE_URL: &str = "https://www.nseindia.com";

pub fn nse_option_chain_url(base_url: &str, symbol: &str) -> String {
    format!(
        "{}/api/option-chain-indices?symbol={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(symbol)
    )
}

pub fn nse_referer(base_url: &str) -> String {
    format!("{}/", base_url.trim_end_matches('/'))
}

// -----------------------------------------------
// INDICES COVERED BY A RUN
// -----------------------------------------------
pub const NIFTY: &str = "NIFTY";
pub const BANKNIFTY: &str = "BANKNIFTY";

// -----------------------------------------------
// HTTP CLIENT CONFIG
// -----------------------------------------------
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
                               AppleWebKit/537.36 (KHTML, like Gecko) \
                               Chrome/115.0 Safari/537.36";

pub const ACCEPT_LANGUAGES: &[&str] = &[
    "en-US,en;q=0.9",
    "en-GB,en;q=0.8",
    "en-IN,en;q=0.9",
];

// Applies to the bootstrap and the API request separately
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

// -----------------------------------------------
// HTTP HEADERS
// -----------------------------------------------
pub const HEADER_ACCEPT_HTML: &str = "text/html";
pub const HEADER_ACCEPT_JSON: &str = "application/json";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_chain_url() {
        assert_eq!(
            nse_option_chain_url(NSE_BASE_URL, "NIFTY"),
            "https://www.nseindia.com/api/option-chain-indices?symbol=NIFTY"
        );
        assert_eq!(
            nse_option_chain_url("http://127.0.0.1:9000/", "M&M"),
            "http://127.0.0.1:9000/api/option-chain-indices?symbol=M%26M"
        );
    }

    #[test]
    fn test_referer_has_trailing_slash() {
        assert_eq!(nse_referer(NSE_BASE_URL), "https://www.nseindia.com/");
        assert_eq!(nse_referer("http://localhost:1/"), "http://localhost:1/");
    }
}
