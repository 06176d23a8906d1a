//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_predict;

use std::net::TcpListener;
use std::path::PathBuf;
use summariser::api::{PredictClient, ScoreSet};
use summariser::config::ApiConfig;
use summariser::ui::app::App;
use summariser::ui::form::FormIntent;
use tempfile::TempDir;

pub use mock_predict::{CapturedRequest, MockPredict, MockResponse};

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Create a temporary config file with the given contents.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn api_config(endpoint: &str) -> ApiConfig {
    ApiConfig {
        endpoint: endpoint.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    }
}

pub fn client_for(endpoint: &str) -> PredictClient {
    PredictClient::new(&api_config(endpoint)).expect("Failed to build client")
}

pub fn sample_scores() -> ScoreSet {
    ScoreSet {
        rouge1: 0.5,
        rouge2: 0.25,
        rouge_l: 0.333,
    }
}

// -- App helpers --------------------------------------------------------------

pub fn make_app() -> App {
    App::new("http://127.0.0.1:5000/predict")
}

/// Type `text` into the focused field one key at a time.
pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        app.dispatch_form(FormIntent::Insert(ch));
    }
}
