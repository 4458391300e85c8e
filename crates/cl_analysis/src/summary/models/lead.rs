use std::fmt;
use cl_core::{Result, Summarizer, SummaryOptions};

/// Extractive model: keeps whole leading sentences until the length budget
/// is spent. Length bounds are counted in words.
pub struct LeadModel;

impl fmt::Debug for LeadModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeadModel").finish()
    }
}

impl LeadModel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LeadModel {
    fn default() -> Self {
        Self::new()
    }
}

fn sentences(text: &str) -> Vec<&str> {
    text.split_inclusive(|c| c == '.' || c == '!' || c == '?')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[async_trait::async_trait]
impl Summarizer for LeadModel {
    fn name(&self) -> &str {
        "Lead"
    }

    async fn summarize(&self, text: &str, options: &SummaryOptions) -> Result<String> {
        let mut picked: Vec<&str> = Vec::new();
        let mut used = 0;

        for sentence in sentences(text) {
            let words: Vec<&str> = sentence.split_whitespace().collect();
            if used >= options.min_length && used + words.len() > options.max_length {
                break;
            }
            let room = options.max_length - used;
            if words.len() > room {
                picked.extend(&words[..room]);
                used += room;
                break;
            }
            picked.extend(words);
            used = picked.len();
        }

        Ok(picked.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lead_keeps_leading_sentences() {
        let model = LeadModel::new();
        let options = SummaryOptions {
            max_length: 8,
            min_length: 3,
            do_sample: false,
        };
        let summary = model
            .summarize("Food was great. Staff were friendly and fast. Parking was a nightmare.", &options)
            .await
            .unwrap();
        assert_eq!(summary, "Food was great. Staff were friendly and fast.");
    }

    #[tokio::test]
    async fn test_lead_truncates_a_long_first_sentence() {
        let model = LeadModel::new();
        let text = (0..200).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ");
        let summary = model.summarize(&text, &SummaryOptions::default()).await.unwrap();
        assert_eq!(summary.split_whitespace().count(), 150);
        assert!(summary.starts_with("w0 w1 w2"));
    }
}
