use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedPrincipal;
use crate::cv::application::ports::outgoing::CvFilter;
use crate::cv::application::use_cases::fetch_cvs::FetchCvsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchCvsQuery {
    #[serde(rename = "searchValue")]
    pub search_value: Option<String>,
    pub age: Option<i32>,
}

#[get("/api/cvs/search")]
pub async fn search_cvs_handler(
    principal: AuthenticatedPrincipal,
    query: web::Query<SearchCvsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = CvFilter {
        age: query.age,
        search_value: query
            .search_value
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    };

    match data.fetch_cvs_use_case.search(&principal.0, filter).await {
        Ok(cvs) => ApiResponse::success(cvs),
        Err(FetchCvsError::RepositoryError(e)) => {
            error!("Repository error searching CVs: {}", e);
            ApiResponse::internal_error()
        }
    }
}
