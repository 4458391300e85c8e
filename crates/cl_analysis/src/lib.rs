pub mod input;
pub mod pipeline;
pub mod sentiment;
pub mod summary;
pub mod wordfreq;

pub use input::{extract_comments, CommentInput, FileKind};
pub use pipeline::Analyzer;
pub use summary::{create_summarizer, SummarizerConfig, SummaryService};

pub mod prelude {
    pub use super::{create_summarizer, extract_comments, Analyzer, CommentInput, SummarizerConfig};
    pub use cl_core::{AnalysisReport, Error, Result};
}
