use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedPrincipal;
use crate::shared::api::ApiResponse;
use crate::skill::application::use_cases::fetch_skills::FetchSkillsError;
use crate::AppState;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WithCvsQuery {
    #[serde(rename = "withCvs")]
    pub with_cvs: Option<bool>,
}

#[get("/api/skills")]
pub async fn get_skills_handler(
    _principal: AuthenticatedPrincipal,
    query: web::Query<WithCvsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .fetch_skills_use_case
        .all(query.with_cvs.unwrap_or(false))
        .await
    {
        Ok(skills) => ApiResponse::success(skills),
        Err(e) => {
            error!("Repository error listing skills: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/skills/{id}")]
pub async fn get_skill_by_id_handler(
    _principal: AuthenticatedPrincipal,
    path: web::Path<i32>,
    query: web::Query<WithCvsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data
        .fetch_skills_use_case
        .one(id, query.with_cvs.unwrap_or(false))
        .await
    {
        Ok(skill) => ApiResponse::success(skill),
        Err(FetchSkillsError::SkillNotFound(id)) => {
            ApiResponse::not_found("SKILL_NOT_FOUND", &format!("Skill with ID {id} not found"))
        }
        Err(e) => {
            error!("Repository error fetching skill: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/skills/cv/{cvId}")]
pub async fn get_skills_by_cv_handler(
    _principal: AuthenticatedPrincipal,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let cv_id = path.into_inner();

    match data.fetch_skills_use_case.by_cv(cv_id).await {
        Ok(skills) => ApiResponse::success(skills),
        Err(FetchSkillsError::CvNotFound(id)) => {
            ApiResponse::not_found("CV_NOT_FOUND", &format!("CV with ID {id} not found"))
        }
        Err(e) => {
            error!("Repository error fetching skills by CV: {}", e);
            ApiResponse::internal_error()
        }
    }
}
