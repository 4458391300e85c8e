use std::fmt;
use std::sync::Arc;
use cl_core::{PolarityScorer, Result, Sentiment, SentimentResult};
use vader_sentiment::SentimentIntensityAnalyzer;

/// Lexicon and rule based scorer; polarity is VADER's compound score.
pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for VaderScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VaderScorer").finish()
    }
}

impl PolarityScorer for VaderScorer {
    fn name(&self) -> &str {
        "VADER"
    }

    fn polarity(&self, text: &str) -> Result<f64> {
        let scores = self.analyzer.polarity_scores(text);
        Ok(scores.get("compound").copied().unwrap_or(0.0))
    }
}

pub struct SentimentClassifier {
    scorer: Arc<dyn PolarityScorer>,
}

impl fmt::Debug for SentimentClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentimentClassifier")
            .field("scorer", &self.scorer.name())
            .finish()
    }
}

impl SentimentClassifier {
    pub fn new(scorer: Arc<dyn PolarityScorer>) -> Self {
        Self { scorer }
    }

    pub fn classify(&self, comment: &str) -> Result<Sentiment> {
        let polarity = self.scorer.polarity(comment)?;
        Ok(Sentiment::from_polarity(polarity))
    }

    /// Classify every comment, keeping input order.
    pub fn classify_all(&self, comments: &[String]) -> Result<Vec<SentimentResult>> {
        comments
            .iter()
            .map(|comment| {
                Ok(SentimentResult {
                    comment: comment.clone(),
                    sentiment: self.classify(comment)?,
                })
            })
            .collect()
    }
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new(Arc::new(VaderScorer::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct FixedScorer(f64);

    impl PolarityScorer for FixedScorer {
        fn name(&self) -> &str {
            "Fixed"
        }

        fn polarity(&self, _text: &str) -> Result<f64> {
            Ok(self.0)
        }
    }

    #[derive(Debug)]
    struct FailingScorer;

    impl PolarityScorer for FailingScorer {
        fn name(&self) -> &str {
            "Failing"
        }

        fn polarity(&self, _text: &str) -> Result<f64> {
            Err(cl_core::Error::Sentiment("lexicon unavailable".to_string()))
        }
    }

    #[test]
    fn test_vader_polarity() {
        let classifier = SentimentClassifier::default();
        assert_eq!(classifier.classify("I love this, it is great!").unwrap(), Sentiment::Positive);
        assert_eq!(classifier.classify("This is terrible and awful.").unwrap(), Sentiment::Negative);
        assert_eq!(classifier.classify("The meeting is on Tuesday.").unwrap(), Sentiment::Neutral);
    }

    #[test]
    fn test_boundaries_go_through_thresholds() {
        let at_threshold = SentimentClassifier::new(Arc::new(FixedScorer(0.1)));
        assert_eq!(at_threshold.classify("anything").unwrap(), Sentiment::Neutral);

        let above = SentimentClassifier::new(Arc::new(FixedScorer(0.1001)));
        assert_eq!(above.classify("anything").unwrap(), Sentiment::Positive);

        let below = SentimentClassifier::new(Arc::new(FixedScorer(-0.1001)));
        assert_eq!(below.classify("anything").unwrap(), Sentiment::Negative);
    }

    #[test]
    fn test_classify_all_keeps_order() {
        let classifier = SentimentClassifier::default();
        let comments = vec!["Excellent work".to_string(), "Horrible experience".to_string()];
        let results = classifier.classify_all(&comments).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].comment, "Excellent work");
        assert_eq!(results[0].sentiment, Sentiment::Positive);
        assert_eq!(results[1].sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_scorer_errors_propagate() {
        let classifier = SentimentClassifier::new(Arc::new(FailingScorer));
        assert!(classifier.classify_all(&["hello".to_string()]).is_err());
    }
}
