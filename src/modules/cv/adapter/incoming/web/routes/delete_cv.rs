use actix_web::{delete, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedPrincipal;
use crate::cv::application::use_cases::delete_cv::DeleteCvError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/cvs/{id}")]
pub async fn delete_cv_handler(
    _principal: AuthenticatedPrincipal,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.delete_cv_use_case.execute(id).await {
        Ok(confirmation) => ApiResponse::success(confirmation),
        Err(DeleteCvError::CvNotFound(id)) => {
            ApiResponse::not_found("CV_NOT_FOUND", &format!("CV with ID {id} not found"))
        }
        Err(DeleteCvError::RepositoryError(e)) => {
            error!("Repository error deleting CV: {}", e);
            ApiResponse::internal_error()
        }
    }
}
