use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid file type '{0}'. Please upload a .txt, .csv, .xls or .xlsx file.")]
    UnsupportedFileType(String),

    #[error("No comments found. Upload a file or provide comments_text.")]
    NoInput,

    #[error("No comments found in the provided input.")]
    NoComments,

    #[error("Unable to parse the uploaded {kind} file: {reason}")]
    Unparseable { kind: String, reason: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Upload is too large: {0}")]
    TooLarge(String),

    #[error("Sentiment error: {0}")]
    Sentiment(String),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

impl Error {
    /// Errors caused by what the caller sent rather than by the server.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::UnsupportedFileType(_)
                | Error::NoInput
                | Error::NoComments
                | Error::Unparseable { .. }
                | Error::InvalidRequest(_)
                | Error::TooLarge(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors() {
        assert!(Error::NoInput.is_client_error());
        assert!(Error::UnsupportedFileType("pdf".to_string()).is_client_error());
        assert!(Error::Unparseable { kind: "xlsx".to_string(), reason: "bad zip".to_string() }.is_client_error());
        assert!(Error::TooLarge("limit is 64 bytes".to_string()).is_client_error());
        assert!(!Error::Sentiment("boom".to_string()).is_client_error());
        assert!(!Error::Inference("boom".to_string()).is_client_error());
    }

    #[test]
    fn test_messages_keep_their_prefixes() {
        assert!(Error::UnsupportedFileType("pdf".to_string()).to_string().starts_with("Invalid file type"));
        assert!(Error::NoInput.to_string().starts_with("No comments found"));
        assert!(Error::NoComments.to_string().starts_with("No comments found"));
    }
}
