use std::fmt;
use std::sync::mpsc;
use std::thread;
use rust_bert::pipelines::summarization::{SummarizationConfig, SummarizationModel};
use tokio::sync::oneshot;
use cl_core::{Error, Result, Summarizer, SummaryOptions};

type Reply = oneshot::Sender<Result<String>>;

struct Job {
    text: String,
    options: SummaryOptions,
    reply: Reply,
}

/// Pretrained BART (CNN/DailyMail) summarizer.
///
/// The model is built and run on a dedicated thread; requests reach it
/// through a channel.
pub struct BartModel {
    sender: mpsc::Sender<Job>,
}

impl fmt::Debug for BartModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BartModel")
            .field("worker", &"<rust-bert thread>")
            .finish()
    }
}

fn build_model(options: &SummaryOptions) -> Result<SummarizationModel> {
    let config = SummarizationConfig {
        max_length: Some(options.max_length as i64),
        min_length: options.min_length as i64,
        do_sample: options.do_sample,
        ..Default::default()
    };
    SummarizationModel::new(config).map_err(|e| Error::Inference(format!("Failed to load BART model: {}", e)))
}

fn run_worker(receiver: mpsc::Receiver<Job>, ready: oneshot::Sender<Result<()>>) {
    let base = SummaryOptions::default();
    let mut model = match build_model(&base) {
        Ok(model) => {
            let _ = ready.send(Ok(()));
            model
        }
        Err(e) => {
            let _ = ready.send(Err(e));
            return;
        }
    };
    let mut loaded = base;

    for job in receiver {
        // generation bounds are fixed at load time, so reload when they change
        if job.options != loaded {
            match build_model(&job.options) {
                Ok(rebuilt) => {
                    model = rebuilt;
                    loaded = job.options;
                }
                Err(e) => {
                    let _ = job.reply.send(Err(e));
                    continue;
                }
            }
        }

        let result = model
            .summarize(&[job.text.as_str()])
            .map_err(|e| Error::Inference(e.to_string()))
            .and_then(|mut output| {
                output
                    .pop()
                    .ok_or_else(|| Error::Inference("BART returned no summary".to_string()))
            });
        let _ = job.reply.send(result);
    }
    tracing::debug!("BART worker shutting down");
}

impl BartModel {
    /// Spawns the worker and waits until the weights are loaded.
    pub async fn new() -> Result<Self> {
        let (sender, receiver) = mpsc::channel();
        let (ready_tx, ready_rx) = oneshot::channel();

        thread::Builder::new()
            .name("bart-summarizer".to_string())
            .spawn(move || run_worker(receiver, ready_tx))?;

        ready_rx
            .await
            .map_err(|_| Error::Inference("BART worker exited during startup".to_string()))??;

        Ok(Self { sender })
    }
}

#[async_trait::async_trait]
impl Summarizer for BartModel {
    fn name(&self) -> &str {
        "BART"
    }

    async fn summarize(&self, text: &str, options: &SummaryOptions) -> Result<String> {
        let (reply, response) = oneshot::channel();
        self.sender
            .send(Job {
                text: text.to_string(),
                options: *options,
                reply,
            })
            .map_err(|_| Error::Inference("BART worker is not running".to_string()))?;

        response
            .await
            .map_err(|_| Error::Inference("BART worker dropped the request".to_string()))?
    }
}
