use actix_multipart::Multipart;
use actix_web::{post, web, Responder};
use futures::StreamExt;
use serde_json::Value;
use tracing::error;

use super::create_cv::CreateCvRequest;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedPrincipal;
use crate::cv::application::use_cases::create_cv::CreateCvError;
use crate::files::adapter::outgoing::cv_file_name;
use crate::shared::api::ApiResponse;
use crate::shared::validation::to_field_messages;
use crate::AppState;

/// Multipart CV creation: the file lands on disk first, its stored path
/// becomes `Cv.path`, and the remaining form fields build the CV. Any file
/// type is accepted here, unlike the generic image upload.
#[post("/api/cvs/upload")]
pub async fn upload_cv_handler(
    principal: AuthenticatedPrincipal,
    mut payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut form_fields = serde_json::Map::new();

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

        let field_name = field.name().unwrap_or("").to_string();
        let original_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(|name| name.to_string());

        let mut bytes: Vec<u8> = Vec::new();
        while let Some(chunk) = field.next().await {
            match chunk {
                Ok(chunk) => bytes.extend_from_slice(&chunk),
                Err(_) => {
                    return ApiResponse::bad_request(
                        "INVALID_MULTIPART",
                        "Malformed multipart payload",
                    );
                }
            }
        }

        if field_name == "file" {
            let original = original_name.unwrap_or_else(|| "upload".to_string());
            file = Some((original, bytes));
        } else {
            form_fields.insert(
                field_name,
                Value::String(String::from_utf8_lossy(&bytes).into_owned()),
            );
        }
    }

    let Some((original_name, bytes)) = file else {
        return ApiResponse::bad_request("FILE_REQUIRED", "A file part is required");
    };

    let stored_name = cv_file_name(&original_name);
    let stored_path = match data.file_store.store("cvs", &stored_name, &bytes).await {
        Ok(path) => path,
        Err(e) => {
            error!("Failed to store uploaded CV file: {}", e);
            return ApiResponse::internal_error();
        }
    };

    let request: CreateCvRequest = match serde_json::from_value(Value::Object(form_fields)) {
        Ok(request) => request,
        Err(e) => {
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    let cv_data = match request.into_data(Some(stored_path)) {
        Ok(data) => data,
        Err(errors) => return ApiResponse::validation_error(to_field_messages(errors)),
    };

    match data
        .create_cv_use_case
        .execute(&principal.0, cv_data)
        .await
    {
        Ok(cv) => ApiResponse::created(cv),
        Err(CreateCvError::UserNotFound(id)) => {
            ApiResponse::not_found("USER_NOT_FOUND", &format!("User with ID {id} not found"))
        }
        Err(CreateCvError::RepositoryError(e)) => {
            error!("Repository error creating uploaded CV: {}", e);
            ApiResponse::internal_error()
        }
    }
}
