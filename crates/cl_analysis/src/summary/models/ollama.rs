use std::fmt;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;
use cl_core::{Error, Result, Summarizer, SummaryOptions};

const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434/llama3";
const DEFAULT_OLLAMA_MODEL: &str = "llama3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OllamaModelConfig {
    base_url: String,
    model_name: String,
}

impl OllamaModelConfig {
    /// Parse `scheme://host:port/model`; the path names the model.
    pub fn from_url(url: Option<&str>) -> Result<Self> {
        let raw = url.unwrap_or(DEFAULT_OLLAMA_URL);
        let parsed = Url::parse(raw).map_err(|e| Error::Config(format!("Invalid model URL '{}': {}", raw, e)))?;
        let host = parsed
            .host_str()
            .ok_or_else(|| Error::Config(format!("Model URL '{}' has no host", raw)))?;

        let model_name = parsed.path().trim_start_matches('/').to_string();
        Ok(Self {
            base_url: format!("{}://{}:{}", parsed.scheme(), host, parsed.port().unwrap_or(11434)),
            model_name: if model_name.is_empty() { DEFAULT_OLLAMA_MODEL.to_string() } else { model_name },
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    num_predict: usize,
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

pub struct OllamaModel {
    client: Client,
    config: OllamaModelConfig,
}

impl fmt::Debug for OllamaModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OllamaModel")
            .field("client", &"<reqwest::Client>")
            .field("config", &self.config)
            .finish()
    }
}

impl OllamaModel {
    /// Connects to the Ollama server and checks it is reachable.
    pub async fn new(url: Option<&str>) -> Result<Self> {
        let config = OllamaModelConfig::from_url(url)?;
        let client = Client::new();

        let probe = client
            .get(format!("{}/api/tags", config.base_url()))
            .send()
            .await
            .and_then(|response| response.error_for_status());
        if let Err(e) = probe {
            return Err(Error::Inference(format!(
                "Ollama is not available at {}: {}. Please ensure Ollama is running and the model '{}' is installed.",
                config.base_url(),
                e,
                config.model_name()
            )));
        }

        Ok(Self { client, config })
    }

    fn prompt(text: &str, options: &SummaryOptions) -> String {
        format!(
            "Summarize the following customer comments in {} to {} words. Reply with the summary only.\n\n{}",
            options.min_length, options.max_length, text
        )
    }
}

#[async_trait::async_trait]
impl Summarizer for OllamaModel {
    fn name(&self) -> &str {
        "Ollama"
    }

    async fn summarize(&self, text: &str, options: &SummaryOptions) -> Result<String> {
        let request = GenerateRequest {
            model: self.config.model_name(),
            prompt: Self::prompt(text, options),
            stream: false,
            options: GenerateOptions {
                num_predict: options.max_length,
                temperature: if options.do_sample { 0.8 } else { 0.0 },
            },
        };

        let response = self
            .client
            .post(format!("{}/api/generate", self.config.base_url()))
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<GenerateResponse>()
            .await?;

        Ok(response.response.trim().to_string())
    }
}
