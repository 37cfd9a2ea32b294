use serde::{Deserialize, Serialize};

/// Response structure from the NSE option-chain-indices API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionChain {
    pub records: Records,
}

/// Records section containing the underlying value and all strike data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Records {
    #[serde(default)]
    pub timestamp: Option<String>,

    #[serde(rename = "underlyingValue")]
    pub underlying_value: f64,

    #[serde(default)]
    pub data: Vec<OptionData>,
}

/// Option data for each strike price
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionData {
    #[serde(rename = "strikePrice")]
    pub strike_price: f64,

    #[serde(rename = "CE", default)]
    pub call: Option<OptionDetail>,

    #[serde(rename = "PE", default)]
    pub put: Option<OptionDetail>,
}

/// Per-side detail (CE or PE); other provider fields are ignored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionDetail {
    #[serde(rename = "openInterest")]
    pub open_interest: f64,
}

impl OptionData {
    pub fn new(strike_price: f64, call_oi: Option<f64>, put_oi: Option<f64>) -> Self {
        Self {
            strike_price,
            call: call_oi.map(|open_interest| OptionDetail { open_interest }),
            put: put_oi.map(|open_interest| OptionDetail { open_interest }),
        }
    }
}
