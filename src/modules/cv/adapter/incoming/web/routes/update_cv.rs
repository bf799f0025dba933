use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedPrincipal;
use crate::cv::application::ports::outgoing::UpdateCvData;
use crate::cv::application::use_cases::update_cv::UpdateCvError;
use crate::shared::api::ApiResponse;
use crate::shared::validation::{
    deserialize_id_list, deserialize_lenient_i32, deserialize_patch_owner,
};
use crate::AppState;

/// Sparse patch: absent fields stay untouched. `userId: null` clears the
/// owner, which is different from leaving `userId` out.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateCvRequest {
    pub name: Option<String>,
    pub firstname: Option<String>,
    #[serde(deserialize_with = "deserialize_lenient_i32")]
    pub age: Option<i32>,
    pub cin: Option<String>,
    pub job: Option<String>,
    pub path: Option<String>,
    #[serde(deserialize_with = "deserialize_id_list")]
    pub skills: Option<Vec<i32>>,
    #[serde(rename = "userId", deserialize_with = "deserialize_patch_owner")]
    pub user_id: Option<Option<i32>>,
}

impl From<UpdateCvRequest> for UpdateCvData {
    fn from(req: UpdateCvRequest) -> Self {
        UpdateCvData {
            name: req.name,
            firstname: req.firstname,
            age: req.age,
            cin: req.cin,
            job: req.job,
            path: req.path,
            skills: req.skills,
            user: req.user_id,
        }
    }
}

#[patch("/api/cvs/{id}")]
pub async fn update_cv_handler(
    _principal: AuthenticatedPrincipal,
    path: web::Path<i32>,
    req: web::Json<UpdateCvRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let patch: UpdateCvData = req.into_inner().into();

    match data.update_cv_use_case.execute(id, patch).await {
        Ok(cv) => ApiResponse::success(cv),
        Err(UpdateCvError::CvNotFound(id)) => {
            ApiResponse::not_found("CV_NOT_FOUND", &format!("CV with ID {id} not found"))
        }
        Err(UpdateCvError::UserNotFound(id)) => {
            ApiResponse::not_found("USER_NOT_FOUND", &format!("User with ID {id} not found"))
        }
        Err(UpdateCvError::RepositoryError(e)) => {
            error!("Repository error patching CV: {}", e);
            ApiResponse::internal_error()
        }
    }
}
