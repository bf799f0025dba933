use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<u64>,
}

/// Most-CVs ranking. Admin-only: it exposes activity across every account.
#[get("/api/users/stats/most-cvs")]
pub async fn top_users_handler(
    _admin: AdminUser,
    query: web::Query<LimitQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .top_users_use_case
        .execute(query.limit.unwrap_or(5))
        .await
    {
        Ok(ranking) => ApiResponse::success(ranking),
        Err(e) => {
            error!("Repository error ranking users: {}", e);
            ApiResponse::internal_error()
        }
    }
}
