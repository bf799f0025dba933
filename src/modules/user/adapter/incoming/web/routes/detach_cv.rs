use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedPrincipal;
use crate::shared::api::ApiResponse;
use crate::user::application::use_cases::detach_cv::DetachCvError;
use crate::AppState;

#[derive(Serialize)]
struct DetachedResponse {
    success: bool,
}

#[delete("/api/users/{id}/cvs/{cvId}")]
pub async fn detach_cv_handler(
    _principal: AuthenticatedPrincipal,
    path: web::Path<(i32, i32)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (user_id, cv_id) = path.into_inner();

    match data.detach_cv_use_case.execute(user_id, cv_id).await {
        Ok(()) => ApiResponse::success(DetachedResponse { success: true }),
        Err(DetachCvError::NotFound(message)) => {
            ApiResponse::not_found("NOT_FOUND", &message)
        }
        Err(DetachCvError::RepositoryError(e)) => {
            error!("Repository error detaching CV: {}", e);
            ApiResponse::internal_error()
        }
    }
}
