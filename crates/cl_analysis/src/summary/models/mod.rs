use std::sync::Arc;
use cl_core::{Error, Result, Summarizer};

pub mod lead;
pub mod ollama;
#[cfg(feature = "bart")]
pub mod bart;

pub use lead::LeadModel;
pub use ollama::OllamaModel;
#[cfg(feature = "bart")]
pub use bart::BartModel;

pub const AVAILABLE_MODELS: &[&str] = &["bart", "ollama", "lead"];

#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    /// One of `AVAILABLE_MODELS`
    pub model_name: String,
    /// Endpoint for HTTP-backed models, e.g. `http://localhost:11434/llama3`
    pub model_url: Option<String>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            model_name: "bart".to_string(),
            model_url: None,
        }
    }
}

/// Build and warm up the configured summarization model.
pub async fn create_summarizer(config: &SummarizerConfig) -> Result<Arc<dyn Summarizer>> {
    match config.model_name.to_lowercase().as_str() {
        "lead" => Ok(Arc::new(LeadModel::new())),
        "ollama" => {
            let model = OllamaModel::new(config.model_url.as_deref()).await?;
            Ok(Arc::new(model))
        }
        #[cfg(feature = "bart")]
        "bart" => {
            let model = BartModel::new().await?;
            Ok(Arc::new(model))
        }
        #[cfg(not(feature = "bart"))]
        "bart" => Err(Error::Config(
            "the bart summarizer requires building with `--features bart`".to_string(),
        )),
        other => Err(Error::Config(format!(
            "Unknown summarizer '{}'. Available models: {}",
            other,
            AVAILABLE_MODELS.join(", ")
        ))),
    }
}
