use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use cl_analysis::summary::models::AVAILABLE_MODELS;
use cl_analysis::{create_summarizer, extract_comments, Analyzer, CommentInput, SummarizerConfig};
use cl_core::{Error, Result, Summarizer};
use cl_web::state::DEFAULT_MAX_UPLOAD_BYTES;
use cl_web::{create_analysis_app, create_greeting_app, serve, AppState};

#[derive(Parser, Debug)]
#[command(author, version, about = "Greeting and comment analysis services", long_about = None)]
pub struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, global = true)]
    debug: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Debug, Clone)]
struct ServerArgs {
    #[arg(long, env = "COMMENTLENS_HOST", default_value = "0.0.0.0")]
    host: IpAddr,
    #[arg(long, env = "COMMENTLENS_PORT", default_value_t = 5000)]
    port: u16,
}

impl ServerArgs {
    fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[derive(clap::Args, Debug, Clone)]
struct SummarizerArgs {
    #[arg(
        long,
        env = "COMMENTLENS_SUMMARIZER",
        default_value = "bart",
        help = "Summarization model. Available models: bart (default, needs --features bart), ollama, lead"
    )]
    summarizer: String,
    /// Endpoint for HTTP-backed models, e.g. http://localhost:11434/llama3
    #[arg(long, env = "COMMENTLENS_MODEL_URL")]
    model_url: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the welcome page, /time and /greet
    GreetApi {
        #[command(flatten)]
        server: ServerArgs,
    },
    /// Serve the comment analysis API
    AnalyzeApi {
        #[command(flatten)]
        server: ServerArgs,
        #[command(flatten)]
        summarizer: SummarizerArgs,
        #[arg(long, env = "COMMENTLENS_MAX_UPLOAD_BYTES", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
        max_upload_bytes: usize,
    },
    /// Analyze a file or a block of text and print the JSON report
    Analyze {
        /// A .txt, .csv, .xls or .xlsx file
        #[arg(required_unless_present = "text", conflicts_with = "text")]
        path: Option<PathBuf>,
        /// Newline separated comments
        #[arg(long)]
        text: Option<String>,
        #[command(flatten)]
        summarizer: SummarizerArgs,
    },
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the summarizer once. A failure is reported and leaves the service
/// running with placeholder summaries.
async fn init_summarizer(args: &SummarizerArgs) -> Option<Arc<dyn Summarizer>> {
    let config = SummarizerConfig {
        model_name: args.summarizer.clone(),
        model_url: args.model_url.clone(),
    };

    info!("🧠 Loading summarizer '{}'...", config.model_name);
    match create_summarizer(&config).await {
        Ok(model) => {
            info!("🧠 Summarizer initialized successfully (using {})", model.name());
            Some(model)
        }
        Err(e) => {
            warn!("⚠️ Summarizer unavailable, summaries will be placeholders: {}", e);
            warn!("Available models: {}", AVAILABLE_MODELS.join(", "));
            None
        }
    }
}

fn read_input(path: Option<PathBuf>, text: Option<String>) -> Result<Option<CommentInput>> {
    if let Some(path) = path {
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| Error::InvalidRequest(format!("Not a file path: {}", path.display())))?
            .to_string();
        let bytes = std::fs::read(&path)?;
        return Ok(Some(CommentInput::File { filename, bytes }));
    }
    Ok(text.map(CommentInput::Text))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match cli.command {
        Commands::GreetApi { server } => {
            info!("👋 Starting greeting service");
            serve(create_greeting_app(), server.addr()).await?;
        }
        Commands::AnalyzeApi { server, summarizer, max_upload_bytes } => {
            info!("💬 Starting comment analysis service");
            let analyzer = Analyzer::new(init_summarizer(&summarizer).await);
            let state = AppState::new(Arc::new(analyzer)).with_max_upload_bytes(max_upload_bytes);
            serve(create_analysis_app(state), server.addr()).await?;
        }
        Commands::Analyze { path, text, summarizer } => {
            let comments = extract_comments(read_input(path, text)?)?;
            info!("📝 Analyzing {} comments", comments.len());
            let analyzer = Analyzer::new(init_summarizer(&summarizer).await);
            let report = analyzer.analyze(&comments).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
