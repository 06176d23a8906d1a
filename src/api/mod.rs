//! HTTP client for the summarization service.
//!
//! The service exposes a single `POST /predict` endpoint that accepts a
//! passage and an optional reference summary, and answers with the
//! generated summary plus ROUGE scores when a reference was supplied.

mod client;
mod error;
mod types;

pub use client::PredictClient;
pub use error::PredictError;
pub use types::{format_score, ScoreSet, SummarizeRequest, SummarizeResponse};
