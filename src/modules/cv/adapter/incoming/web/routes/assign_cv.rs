use actix_web::{patch, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedPrincipal;
use crate::cv::application::use_cases::assign_cv::AssignCvError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[patch("/api/cvs/{id}/user/{userId}")]
pub async fn assign_cv_handler(
    _principal: AuthenticatedPrincipal,
    path: web::Path<(i32, i32)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (cv_id, user_id) = path.into_inner();

    match data.assign_cv_use_case.execute(cv_id, user_id).await {
        Ok(cv) => ApiResponse::success(cv),
        Err(AssignCvError::CvNotFound(id)) => {
            ApiResponse::not_found("CV_NOT_FOUND", &format!("CV with ID {id} not found"))
        }
        Err(AssignCvError::UserNotFound(id)) => {
            ApiResponse::not_found("USER_NOT_FOUND", &format!("User with ID {id} not found"))
        }
        Err(AssignCvError::RepositoryError(e)) => {
            error!("Repository error assigning CV: {}", e);
            ApiResponse::internal_error()
        }
    }
}
