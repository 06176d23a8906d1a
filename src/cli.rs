//! Command-line arguments and the headless one-shot mode.

use clap::Parser;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::api::{PredictClient, PredictError, SummarizeRequest, SummarizeResponse};
use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(name = "summariser", version)]
#[command(about = "Summarize text with a remote service and show ROUGE scores", long_about = None)]
pub struct Cli {
    /// Config file (default: <config dir>/summariser/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Predict endpoint URL, overrides the config file
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds, overrides the config file
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Summarize this file and print the result instead of starting the UI ("-" reads stdin)
    #[arg(long, value_name = "PATH")]
    pub passage: Option<PathBuf>,

    /// Reference summary file used for ROUGE evaluation
    #[arg(long, value_name = "PATH", requires = "passage")]
    pub reference: Option<PathBuf>,
}

impl Cli {
    /// True when a passage was given on the command line.
    pub fn is_headless(&self) -> bool {
        self.passage.is_some()
    }

    /// Load the config file and apply command-line overrides.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.api.endpoint = endpoint.clone();
        }
        if let Some(timeout) = self.timeout {
            config.api.timeout_seconds = timeout;
        }
    }

    /// Build the request from the `--passage` and `--reference` files.
    pub fn read_request(&self) -> anyhow::Result<SummarizeRequest> {
        let Some(passage_path) = &self.passage else {
            anyhow::bail!("--passage is required in headless mode");
        };
        if is_stdin(passage_path) && self.reference.as_deref().is_some_and(is_stdin) {
            anyhow::bail!("Only one of --passage and --reference can read from stdin");
        }
        let passage = read_input(passage_path)?;
        if passage.trim().is_empty() {
            anyhow::bail!("Passage is required");
        }
        let reference = match &self.reference {
            Some(path) => read_input(path)?,
            None => String::new(),
        };
        Ok(SummarizeRequest { passage, reference })
    }
}

/// Read a file, or stdin when `path` is `-`.
pub fn read_input(path: &Path) -> io::Result<String> {
    if is_stdin(path) {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    std::fs::read_to_string(path)
}

fn is_stdin(path: &Path) -> bool {
    path == Path::new("-")
}

/// Send one request and return the printable report.
pub async fn summarize_once(
    client: &PredictClient,
    request: &SummarizeRequest,
) -> Result<String, PredictError> {
    let response = client.predict(request).await?;
    Ok(format_report(&response))
}

/// Plain-text rendering of a response, mirroring the result panel.
pub fn format_report(response: &SummarizeResponse) -> String {
    let mut report = format!("Summary\n{}\n", response.summary);
    if let Some(scores) = &response.rouge_scores {
        report.push_str("\nROUGE Scores\n");
        for (label, value) in scores.rows() {
            report.push_str(&format!("{}: {}\n", label, value));
        }
    }
    report
}
