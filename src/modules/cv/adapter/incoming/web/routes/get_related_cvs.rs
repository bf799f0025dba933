use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedPrincipal;
use crate::cv::application::use_cases::fetch_related_cvs::FetchRelatedCvsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/cvs/user/{userId}")]
pub async fn get_cvs_by_user_handler(
    _principal: AuthenticatedPrincipal,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.fetch_related_cvs_use_case.by_user(user_id).await {
        Ok(cvs) => ApiResponse::success(cvs),
        Err(FetchRelatedCvsError::UserNotFound(id)) => {
            ApiResponse::not_found("USER_NOT_FOUND", &format!("User with ID {id} not found"))
        }
        Err(e) => {
            error!("Repository error fetching CVs by user: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/cvs/skills/{skillId}")]
pub async fn get_cvs_by_skill_handler(
    _principal: AuthenticatedPrincipal,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let skill_id = path.into_inner();

    match data.fetch_related_cvs_use_case.by_skill(skill_id).await {
        Ok(cvs) => ApiResponse::success(cvs),
        Err(FetchRelatedCvsError::SkillNotFound(id)) => {
            ApiResponse::not_found("SKILL_NOT_FOUND", &format!("Skill with ID {id} not found"))
        }
        Err(e) => {
            error!("Repository error fetching CVs by skill: {}", e);
            ApiResponse::internal_error()
        }
    }
}
