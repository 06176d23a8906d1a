use serde::{Deserialize, Serialize};

/// Body of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub passage: String,
    /// Reference summary for ROUGE evaluation. Sent as `""` when not provided.
    pub reference: String,
}

/// Response of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizeResponse {
    #[serde(default)]
    pub summary: String,
    /// Absent or `null` when no reference was submitted.
    #[serde(default)]
    pub rouge_scores: Option<ScoreSet>,
}

/// ROUGE F-measures for a summary against its reference.
///
/// Values are expected in `[0, 1]` but are displayed as received.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSet {
    pub rouge1: f64,
    pub rouge2: f64,
    #[serde(rename = "rougeL")]
    pub rouge_l: f64,
}

impl ScoreSet {
    /// Labelled scores in display order, formatted to three decimals.
    pub fn rows(&self) -> [(&'static str, String); 3] {
        [
            ("ROUGE-1", format_score(self.rouge1)),
            ("ROUGE-2", format_score(self.rouge2)),
            ("ROUGE-L", format_score(self.rouge_l)),
        ]
    }
}

pub fn format_score(value: f64) -> String {
    format!("{:.3}", value)
}
