use actix_web::{delete, patch, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedPrincipal;
use crate::cv::application::use_cases::manage_cv_skills::ManageCvSkillsError;
use crate::shared::api::ApiResponse;
use crate::shared::validation::deserialize_id_list;
use crate::AppState;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateCvSkillsRequest {
    #[serde(rename = "skillIds", deserialize_with = "deserialize_id_list")]
    pub skill_ids: Option<Vec<i32>>,
}

/// Wholesale replacement of the CV's skill set. An empty list clears it.
#[patch("/api/cvs/{id}/skills")]
pub async fn update_cv_skills_handler(
    _principal: AuthenticatedPrincipal,
    path: web::Path<i32>,
    req: web::Json<UpdateCvSkillsRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    let Some(skill_ids) = req.into_inner().skill_ids else {
        return ApiResponse::bad_request("SKILL_IDS_REQUIRED", "skillIds must be provided");
    };

    match data.manage_cv_skills_use_case.replace(id, skill_ids).await {
        Ok(cv) => ApiResponse::success(cv),
        Err(ManageCvSkillsError::CvNotFound(id)) => {
            ApiResponse::not_found("CV_NOT_FOUND", &format!("CV with ID {id} not found"))
        }
        Err(ManageCvSkillsError::RepositoryError(e)) => {
            error!("Repository error replacing CV skills: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Drops one membership; removing an absent skill is a no-op, not an error.
#[delete("/api/cvs/{id}/skills/{skillId}")]
pub async fn remove_cv_skill_handler(
    _principal: AuthenticatedPrincipal,
    path: web::Path<(i32, i32)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (cv_id, skill_id) = path.into_inner();

    match data.manage_cv_skills_use_case.remove(cv_id, skill_id).await {
        Ok(cv) => ApiResponse::success(cv),
        Err(ManageCvSkillsError::CvNotFound(id)) => {
            ApiResponse::not_found("CV_NOT_FOUND", &format!("CV with ID {id} not found"))
        }
        Err(ManageCvSkillsError::RepositoryError(e)) => {
            error!("Repository error removing CV skill: {}", e);
            ApiResponse::internal_error()
        }
    }
}
