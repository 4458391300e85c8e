pub mod error;
pub mod models;
pub mod types;

pub use error::{Error, Result};
pub use models::{PolarityScorer, Summarizer};
pub use types::{
    AnalysisReport, OverallDistribution, Sentiment, SentimentResult, SummaryOptions,
    WordFrequencyTable,
};
