use std::fmt;
use std::sync::Arc;
use cl_core::{Summarizer, SummaryOptions};

pub mod models;

pub use models::{create_summarizer, SummarizerConfig};

pub const SUMMARY_UNAVAILABLE: &str = "Summary not available.";
pub const NOT_ENOUGH_TEXT: &str = "Not enough text to generate a meaningful summary.";
pub const SUMMARY_FAILED: &str = "Could not generate a summary due to an internal error.";

/// Corpora shorter than this many words are not sent to the model.
pub const MIN_SUMMARY_WORDS: usize = 30;

/// Wraps an optional model and never fails: every problem turns into one
/// of the fixed placeholder strings.
pub struct SummaryService {
    model: Option<Arc<dyn Summarizer>>,
    options: SummaryOptions,
    min_words: usize,
}

impl fmt::Debug for SummaryService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SummaryService")
            .field("model", &self.model.as_ref().map(|m| m.name()))
            .field("options", &self.options)
            .field("min_words", &self.min_words)
            .finish()
    }
}

impl SummaryService {
    pub fn new(model: Option<Arc<dyn Summarizer>>) -> Self {
        Self {
            model,
            options: SummaryOptions::default(),
            min_words: MIN_SUMMARY_WORDS,
        }
    }

    pub fn with_options(mut self, options: SummaryOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_min_words(mut self, min_words: usize) -> Self {
        self.min_words = min_words;
        self
    }

    pub fn model_name(&self) -> Option<&str> {
        self.model.as_ref().map(|m| m.name())
    }

    pub async fn summarize(&self, text: &str) -> String {
        let model = match &self.model {
            Some(model) if !text.trim().is_empty() => model,
            _ => return SUMMARY_UNAVAILABLE.to_string(),
        };

        let word_count = text.split_whitespace().count();
        if word_count < self.min_words {
            tracing::debug!("Skipping summary, corpus has only {} words", word_count);
            return NOT_ENOUGH_TEXT.to_string();
        }

        match model.summarize(text, &self.options).await {
            Ok(summary) => summary,
            Err(e) => {
                tracing::warn!("Summarizer {} failed: {}", model.name(), e);
                SUMMARY_FAILED.to_string()
            }
        }
    }
}
