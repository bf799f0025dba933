use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedPrincipal;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<u64>,
}

/// Popularity ranking by CV references. Skills no CV uses never appear.
#[get("/api/skills/popular/top")]
pub async fn popular_skills_handler(
    _principal: AuthenticatedPrincipal,
    query: web::Query<LimitQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .fetch_skills_use_case
        .popular(query.limit.unwrap_or(5))
        .await
    {
        Ok(ranking) => ApiResponse::success(ranking),
        Err(e) => {
            error!("Repository error ranking skills: {}", e);
            ApiResponse::internal_error()
        }
    }
}
