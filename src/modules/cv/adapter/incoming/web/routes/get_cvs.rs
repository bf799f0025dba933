use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedPrincipal;
use crate::cv::application::use_cases::fetch_cvs::FetchCvsError;
use crate::cv::domain::entities::CvRelations;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageRequest;
use crate::AppState;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListCvsQuery {
    #[serde(rename = "withSkills")]
    pub with_skills: Option<bool>,
    #[serde(rename = "withUser")]
    pub with_user: Option<bool>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl ListCvsQuery {
    fn page_request(&self) -> Option<PageRequest> {
        if self.page.is_none() && self.limit.is_none() {
            return None;
        }
        Some(PageRequest {
            page: self.page.unwrap_or(1).max(1),
            limit: self.limit.unwrap_or(10),
        })
    }
}

#[get("/api/cvs")]
pub async fn get_cvs_handler(
    principal: AuthenticatedPrincipal,
    query: web::Query<ListCvsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let relations = CvRelations::from_toggles(query.with_skills, query.with_user);
    let page = query.page_request();

    match data
        .fetch_cvs_use_case
        .all(&principal.0, relations, page)
        .await
    {
        Ok(cvs) => ApiResponse::success(cvs),
        Err(FetchCvsError::RepositoryError(e)) => {
            error!("Repository error listing CVs: {}", e);
            ApiResponse::internal_error()
        }
    }
}
