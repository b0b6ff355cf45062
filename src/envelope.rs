use serde::{Deserialize, Serialize};

/// Uniform envelope returned by every prediction operation.
///
/// `error` is only present when `success` is false; on failure `result` and
/// `confidence` carry no meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub result: String,
    pub confidence: f64,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PredictionResult {
    pub fn ok(result: impl Into<String>, confidence: f64) -> Self {
        Self {
            result: result.into(),
            confidence,
            success: true,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            result: String::new(),
            confidence: 0.0,
            success: false,
            error: Some(error.into()),
        }
    }
}
