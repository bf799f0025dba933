use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedPrincipal;
use crate::cv::application::use_cases::fetch_single_cv::FetchSingleCvError;
use crate::cv::domain::entities::CvRelations;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RelationsQuery {
    #[serde(rename = "withSkills")]
    pub with_skills: Option<bool>,
    #[serde(rename = "withUser")]
    pub with_user: Option<bool>,
}

#[get("/api/cvs/{id}")]
pub async fn get_cv_by_id_handler(
    _principal: AuthenticatedPrincipal,
    path: web::Path<i32>,
    query: web::Query<RelationsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let relations = CvRelations::from_toggles(query.with_skills, query.with_user);

    match data.fetch_single_cv_use_case.execute(id, relations).await {
        Ok(Some(cv)) => ApiResponse::success(cv),
        Ok(None) => {
            ApiResponse::not_found("CV_NOT_FOUND", &format!("CV with ID {id} not found"))
        }
        Err(FetchSingleCvError::RepositoryError(e)) => {
            error!("Repository error fetching CV: {}", e);
            ApiResponse::internal_error()
        }
    }
}
