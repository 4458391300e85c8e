use std::sync::Arc;
use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    response::Html,
    Json,
};
use tracing::{debug, info};
use cl_analysis::{extract_comments, CommentInput};
use cl_core::{AnalysisReport, Error, Result};
use crate::{ApiError, AppState};

pub const FILE_FIELD: &str = "file";
pub const TEXT_FIELD: &str = "comments_text";

pub async fn index() -> Html<&'static str> {
    Html("<h1>Comment Analysis Backend</h1><p>POST a file or comments_text to /analyze.</p>")
}

pub async fn analyze(
    State(state): State<Arc<AppState>>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> std::result::Result<Json<AnalysisReport>, ApiError> {
    let input = match multipart {
        Ok(multipart) => read_comment_input(multipart).await?,
        Err(rejection) => {
            debug!("Request is not multipart: {}", rejection);
            None
        }
    };

    let comments = extract_comments(input)?;
    info!("📝 Analyzing {} comments", comments.len());

    let report = state.analyzer.analyze(&comments).await?;
    Ok(Json(report))
}

/// Pull the upload or the text block out of the form. A file part with an
/// empty filename counts as no file.
async fn read_comment_input(mut multipart: Multipart) -> Result<Option<CommentInput>> {
    let mut file = None;
    let mut text = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(multipart_error)?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(FILE_FIELD) => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(multipart_error)?;
                if !filename.is_empty() {
                    debug!("Received upload {} ({} bytes)", filename, bytes.len());
                    file = Some(CommentInput::File {
                        filename,
                        bytes: bytes.to_vec(),
                    });
                }
            }
            Some(TEXT_FIELD) => {
                let value = field
                    .text()
                    .await
                    .map_err(multipart_error)?;
                text = Some(CommentInput::Text(value));
            }
            _ => {}
        }
    }

    Ok(file.or(text))
}

fn multipart_error(err: MultipartError) -> Error {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        Error::TooLarge(err.body_text())
    } else {
        Error::InvalidRequest(err.body_text())
    }
}
