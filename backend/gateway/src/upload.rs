//! Menu upload endpoint.

use axum::{
    Json,
    extract::{
        Multipart, State,
        multipart::{MultipartError, MultipartRejection},
    },
    http::StatusCode,
};
use tracing::info;

use menulens_core::{MenuError, MenuResponse};
use menulens_understanding::{mime::DEFAULT_IMAGE_MIME, sniff_image_mime};

use crate::error::ApiError;
use crate::server::GatewayState;

/// The uploaded menu photo.
#[derive(Debug)]
pub struct MenuUpload {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// Handler for `POST /api/upload`.
pub async fn upload_menu(
    State(state): State<GatewayState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<MenuResponse>, ApiError> {
    let multipart = multipart.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let upload = read_upload(multipart, &state.upload_field, state.max_upload_bytes).await?;

    info!(bytes = upload.bytes.len(), mime = %upload.mime_type, "Received menu upload");
    let response = state.pipeline.process(&upload.bytes, &upload.mime_type).await;
    Ok(Json(response))
}

/// Pull the image field out of the multipart body, ignoring any other fields.
pub async fn read_upload(
    mut multipart: Multipart,
    field_name: &str,
    max_bytes: usize,
) -> Result<MenuUpload, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| read_error(e, "Malformed multipart body", max_bytes))?
    {
        if field.name() != Some(field_name) {
            continue;
        }

        let declared = field
            .content_type()
            .filter(|ct| ct.starts_with("image/"))
            .map(str::to_string);

        let bytes = field
            .bytes()
            .await
            .map_err(|e| read_error(e, "Failed to read upload", max_bytes))?;

        if bytes.is_empty() {
            return Err(MenuError::InvalidUpload("Uploaded file is empty".into()).into());
        }
        if bytes.len() > max_bytes {
            return Err(too_large(max_bytes));
        }

        let mime_type = declared
            .or_else(|| sniff_image_mime(&bytes).map(str::to_string))
            .unwrap_or_else(|| DEFAULT_IMAGE_MIME.to_string());

        return Ok(MenuUpload {
            bytes: bytes.to_vec(),
            mime_type,
        });
    }

    Err(MenuError::InvalidUpload("No file uploaded".into()).into())
}

fn too_large(max_bytes: usize) -> ApiError {
    ApiError::PayloadTooLarge(format!("Uploaded file exceeds {max_bytes} bytes"))
}

/// Body-limit overruns surface as multipart errors; keep their 413.
fn read_error(err: MultipartError, context: &str, max_bytes: usize) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        too_large(max_bytes)
    } else {
        MenuError::InvalidUpload(format!("{context}: {}", err.body_text())).into()
    }
}
