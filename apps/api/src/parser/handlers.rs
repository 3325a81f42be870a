use anyhow::Context;
use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::extract::{extract_text, DocumentKind};
use crate::parser::{parse_resume, ParseOutcome};
use crate::state::AppState;
use crate::upload::StagedUpload;

/// Multipart field carrying the document.
const FILE_FIELD: &str = "file";

/// POST /parse_resume/
///
/// Stages the upload in a temp file, extracts its text and asks the model for
/// structured fields. The temp file is removed when `staged` drops, whichever
/// way this function returns.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParseOutcome>, AppError> {
    let (filename, kind, bytes) = read_upload(&mut multipart).await?;
    info!("Parsing {filename} ({kind:?}, {} bytes)", bytes.len());

    let staged = StagedUpload::write(&state.config.upload_dir, kind, &bytes)?;
    drop(bytes);

    let (path, kind) = (staged.path().to_path_buf(), staged.kind());
    let text = tokio::task::spawn_blocking(move || extract_text(kind, &path))
        .await
        .context("Extraction task panicked")??;
    info!("Extracted {} bytes of text from {filename}", text.len());

    let outcome = parse_resume(state.model.as_ref(), &text).await?;
    if let ParseOutcome::Failure { .. } = &outcome {
        info!("Returning parse failure for {filename}");
    }
    Ok(Json(outcome))
}

/// Finds the `file` field and checks its extension before reading the body.
async fn read_upload(
    multipart: &mut Multipart,
) -> Result<(String, DocumentKind, Vec<u8>), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(multipart_error)?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let kind = DocumentKind::from_filename(&filename).ok_or(AppError::UnsupportedFormat)?;
        let bytes = field
            .bytes()
            .await
            .map_err(multipart_error)?;
        return Ok((filename, kind, bytes.to_vec()));
    }

    Err(AppError::Validation(format!(
        "Missing multipart field '{FILE_FIELD}'"
    )))
}

/// Keeps the body-limit rejection (413) distinct from malformed multipart.
fn multipart_error(e: MultipartError) -> AppError {
    match e.status() {
        StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(e.body_text()),
        _ => AppError::Validation(e.body_text()),
    }
}
