use actix_web::{delete, patch, post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedPrincipal;
use crate::shared::api::ApiResponse;
use crate::shared::validation::{collect, require_length, to_field_messages, FieldError};
use crate::skill::application::ports::outgoing::{CreateSkillData, UpdateSkillData};
use crate::skill::application::use_cases::manage_skills::ManageSkillsError;
use crate::AppState;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SkillRequest {
    pub designation: Option<String>,
}

fn validate_designation(designation: &str) -> Result<String, Vec<FieldError>> {
    let trimmed = designation.trim().to_string();
    collect(vec![require_length("designation", &trimmed, 2, 50)])?;
    Ok(trimmed)
}

#[derive(Serialize)]
struct DeletedResponse {
    deleted: bool,
}

#[post("/api/skills")]
pub async fn create_skill_handler(
    _principal: AuthenticatedPrincipal,
    req: web::Json<SkillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let designation = match validate_designation(req.designation.as_deref().unwrap_or("")) {
        Ok(designation) => designation,
        Err(errors) => return ApiResponse::validation_error(to_field_messages(errors)),
    };

    match data
        .manage_skills_use_case
        .create(CreateSkillData { designation })
        .await
    {
        Ok(skill) => ApiResponse::created(skill),
        Err(e) => {
            error!("Repository error creating skill: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[patch("/api/skills/{id}")]
pub async fn update_skill_handler(
    _principal: AuthenticatedPrincipal,
    path: web::Path<i32>,
    req: web::Json<SkillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    let designation = match req.into_inner().designation {
        None => None,
        Some(designation) => match validate_designation(&designation) {
            Ok(designation) => Some(designation),
            Err(errors) => return ApiResponse::validation_error(to_field_messages(errors)),
        },
    };

    match data
        .manage_skills_use_case
        .update(id, UpdateSkillData { designation })
        .await
    {
        Ok(skill) => ApiResponse::success(skill),
        Err(ManageSkillsError::SkillNotFound(id)) => {
            ApiResponse::not_found("SKILL_NOT_FOUND", &format!("Skill with ID {id} not found"))
        }
        Err(ManageSkillsError::RepositoryError(e)) => {
            error!("Repository error updating skill: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/skills/{id}")]
pub async fn delete_skill_handler(
    _principal: AuthenticatedPrincipal,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.manage_skills_use_case.remove(id).await {
        Ok(()) => ApiResponse::success(DeletedResponse { deleted: true }),
        Err(ManageSkillsError::SkillNotFound(id)) => {
            ApiResponse::not_found("SKILL_NOT_FOUND", &format!("Skill with ID {id} not found"))
        }
        Err(ManageSkillsError::RepositoryError(e)) => {
            error!("Repository error deleting skill: {}", e);
            ApiResponse::internal_error()
        }
    }
}
