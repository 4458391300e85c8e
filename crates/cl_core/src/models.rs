use std::fmt;
use async_trait::async_trait;
use crate::types::SummaryOptions;
use crate::Result;

#[async_trait]
pub trait Summarizer: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Summarize a block of text within the given length bounds
    async fn summarize(&self, text: &str, options: &SummaryOptions) -> Result<String>;
}

pub trait PolarityScorer: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Sentiment valence of a piece of text, in [-1, 1]
    fn polarity(&self, text: &str) -> Result<f64>;
}
