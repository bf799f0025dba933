use actix_multipart::Multipart;
use actix_web::{post, web, Responder};
use futures::StreamExt;
use serde::Serialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedPrincipal;
use crate::files::adapter::outgoing::image_file_name;
use crate::files::application::policy::{check_image_upload, UploadPolicyError, MAX_UPLOAD_BYTES};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
struct UploadResponse {
    message: String,
    filename: String,
}

/// Generic upload: image MIME whitelist and the 5 MB ceiling apply here.
#[post("/api/files/upload")]
pub async fn upload_file_handler(
    _principal: AuthenticatedPrincipal,
    mut payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    while let Some(item) = payload.next().await {
        let mut field = match item {
            Ok(field) => field,
            Err(_) => {
                return ApiResponse::bad_request(
                    "INVALID_MULTIPART",
                    "Malformed multipart payload",
                );
            }
        };

        if field.name() != Some("file") {
            // Drain the part so the stream can move on to the next one
            while let Some(chunk) = field.next().await {
                if chunk.is_err() {
                    return ApiResponse::bad_request(
                        "INVALID_MULTIPART",
                        "Malformed multipart payload",
                    );
                }
            }
            continue;
        }

        let mime = field
            .content_type()
            .map(|m| m.essence_str().to_string())
            .unwrap_or_default();

        let original_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(|name| name.to_string())
            .unwrap_or_else(|| "upload".to_string());

        let mut bytes: Vec<u8> = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = match chunk {
                Ok(chunk) => chunk,
                Err(_) => {
                    return ApiResponse::bad_request(
                        "INVALID_MULTIPART",
                        "Malformed multipart payload",
                    );
                }
            };
            if bytes.len() + chunk.len() > MAX_UPLOAD_BYTES {
                return ApiResponse::payload_too_large(
                    "FILE_TOO_LARGE",
                    "File exceeds the 5MB limit",
                );
            }
            bytes.extend_from_slice(&chunk);
        }

        match check_image_upload(&mime, bytes.len()) {
            Ok(()) => {}
            Err(UploadPolicyError::TooLarge) => {
                return ApiResponse::payload_too_large(
                    "FILE_TOO_LARGE",
                    "File exceeds the 5MB limit",
                );
            }
            Err(UploadPolicyError::UnsupportedMediaType(mime)) => {
                return ApiResponse::bad_request(
                    "UNSUPPORTED_MEDIA_TYPE",
                    &format!("Files of type {mime} are not accepted"),
                );
            }
        }

        let file_name = image_file_name(&original_name);
        return match data.file_store.store("", &file_name, &bytes).await {
            Ok(_) => ApiResponse::success(UploadResponse {
                message: format!("File {original_name} uploaded successfully"),
                filename: file_name,
            }),
            Err(e) => {
                error!("Failed to store uploaded file: {}", e);
                ApiResponse::internal_error()
            }
        };
    }

    ApiResponse::bad_request("FILE_REQUIRED", "A file part is required")
}
