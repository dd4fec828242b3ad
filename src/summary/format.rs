//! Output format selection

use super::Summary;

/// How the summary is written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `key=value` lines for CI output variables
    #[default]
    KeyValue,
    /// Single JSON object
    Json,
    /// Human-readable text
    Human,
}

impl OutputFormat {
    /// Render the complete output; nothing is written until this succeeds
    pub fn render(&self, summary: &Summary) -> Result<String, serde_json::Error> {
        match self {
            OutputFormat::KeyValue => Ok(summary.to_key_value()),
            OutputFormat::Json => summary.to_json().map(|json| json + "\n"),
            OutputFormat::Human => Ok(summary.to_human()),
        }
    }
}
