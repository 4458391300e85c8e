use std::fmt;
use std::sync::Arc;
use cl_core::{AnalysisReport, OverallDistribution, PolarityScorer, Result, Summarizer};
use crate::sentiment::SentimentClassifier;
use crate::summary::SummaryService;
use crate::wordfreq::{word_frequencies, DEFAULT_TOP_WORDS};

/// Runs every analysis step over one request's comments.
pub struct Analyzer {
    classifier: SentimentClassifier,
    summaries: SummaryService,
    top_words: usize,
}

impl fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analyzer")
            .field("classifier", &self.classifier)
            .field("summaries", &self.summaries)
            .field("top_words", &self.top_words)
            .finish()
    }
}

impl Analyzer {
    pub fn new(summarizer: Option<Arc<dyn Summarizer>>) -> Self {
        Self {
            classifier: SentimentClassifier::default(),
            summaries: SummaryService::new(summarizer),
            top_words: DEFAULT_TOP_WORDS,
        }
    }

    pub fn with_scorer(mut self, scorer: Arc<dyn PolarityScorer>) -> Self {
        self.classifier = SentimentClassifier::new(scorer);
        self
    }

    pub fn with_summary_service(mut self, summaries: SummaryService) -> Self {
        self.summaries = summaries;
        self
    }

    pub fn summary_model(&self) -> Option<&str> {
        self.summaries.model_name()
    }

    pub async fn analyze(&self, comments: &[String]) -> Result<AnalysisReport> {
        let individual_results = self.classifier.classify_all(comments)?;
        let overall_distribution = OverallDistribution::from_results(&individual_results);

        let corpus = comments.join(" ");
        let summary = self.summaries.summarize(&corpus).await;
        let wordcloud_data = word_frequencies(&corpus, self.top_words);

        tracing::debug!(
            "Analyzed {} comments ({} positive, {} negative, {} neutral)",
            comments.len(),
            overall_distribution.positive,
            overall_distribution.negative,
            overall_distribution.neutral
        );

        Ok(AnalysisReport {
            individual_results,
            overall_distribution,
            summary,
            wordcloud_data,
        })
    }
}
