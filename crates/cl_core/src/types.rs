use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Polarity above this is positive, below its negation negative.
pub const POLARITY_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > POLARITY_THRESHOLD {
            Sentiment::Positive
        } else if polarity < -POLARITY_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub comment: String,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallDistribution {
    #[serde(rename = "Positive")]
    pub positive: usize,
    #[serde(rename = "Negative")]
    pub negative: usize,
    #[serde(rename = "Neutral")]
    pub neutral: usize,
}

impl OverallDistribution {
    pub fn from_results(results: &[SentimentResult]) -> Self {
        let mut distribution = Self::default();
        for result in results {
            distribution.record(result.sentiment);
        }
        distribution
    }

    pub fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

/// Word counts in ranking order. Serializes as a JSON object whose keys
/// appear in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencyTable(Vec<(String, usize)>);

impl WordFrequencyTable {
    pub fn new(entries: Vec<(String, usize)>) -> Self {
        Self(entries)
    }

    pub fn entries(&self) -> &[(String, usize)] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.0.iter().find(|(w, _)| w == word).map(|(_, count)| *count)
    }
}

impl Serialize for WordFrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (word, count) in &self.0 {
            map.serialize_entry(word, count)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryOptions {
    pub max_length: usize,
    pub min_length: usize,
    pub do_sample: bool,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            max_length: 150,
            min_length: 30,
            do_sample: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub individual_results: Vec<SentimentResult>,
    pub overall_distribution: OverallDistribution,
    pub summary: String,
    pub wordcloud_data: WordFrequencyTable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polarity_thresholds_are_exclusive() {
        assert_eq!(Sentiment::from_polarity(0.1), Sentiment::Neutral);
        assert_eq!(Sentiment::from_polarity(-0.1), Sentiment::Neutral);
        assert_eq!(Sentiment::from_polarity(0.0), Sentiment::Neutral);
        assert_eq!(Sentiment::from_polarity(0.1001), Sentiment::Positive);
        assert_eq!(Sentiment::from_polarity(-0.1001), Sentiment::Negative);
        assert_eq!(Sentiment::from_polarity(1.0), Sentiment::Positive);
        assert_eq!(Sentiment::from_polarity(-1.0), Sentiment::Negative);
    }

    #[test]
    fn test_distribution_counts_every_result() {
        let results: Vec<SentimentResult> = [
            Sentiment::Positive,
            Sentiment::Positive,
            Sentiment::Negative,
            Sentiment::Neutral,
        ]
        .into_iter()
        .enumerate()
        .map(|(i, sentiment)| SentimentResult { comment: format!("comment {}", i), sentiment })
        .collect();

        let distribution = OverallDistribution::from_results(&results);
        assert_eq!(distribution.positive, 2);
        assert_eq!(distribution.negative, 1);
        assert_eq!(distribution.neutral, 1);
        assert_eq!(distribution.total(), results.len());
    }

    #[test]
    fn test_distribution_serializes_all_labels() {
        let json = serde_json::to_value(OverallDistribution::default()).unwrap();
        assert_eq!(json, serde_json::json!({"Positive": 0, "Negative": 0, "Neutral": 0}));
    }

    #[test]
    fn test_word_table_keeps_ranking_order() {
        let table = WordFrequencyTable::new(vec![
            ("zebra".to_string(), 5),
            ("apple".to_string(), 3),
            ("mango".to_string(), 3),
        ]);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"zebra":5,"apple":3,"mango":3}"#);
        assert_eq!(table.get("apple"), Some(3));
        assert_eq!(table.get("pear"), None);
    }

    #[test]
    fn test_sentiment_result_shape() {
        let result = SentimentResult {
            comment: "Great service".to_string(),
            sentiment: Sentiment::Positive,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, serde_json::json!({"comment": "Great service", "sentiment": "Positive"}));
    }
}
