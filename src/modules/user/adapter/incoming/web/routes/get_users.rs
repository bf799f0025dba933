use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedPrincipal;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WithCvsQuery {
    #[serde(rename = "withCvs")]
    pub with_cvs: Option<bool>,
}

#[get("/api/users")]
pub async fn get_users_handler(
    _principal: AuthenticatedPrincipal,
    query: web::Query<WithCvsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .fetch_users_use_case
        .all(query.with_cvs.unwrap_or(false))
        .await
    {
        Ok(users) => ApiResponse::success(users),
        Err(e) => {
            error!("Repository error listing users: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/users/{id}")]
pub async fn get_user_by_id_handler(
    _principal: AuthenticatedPrincipal,
    path: web::Path<i32>,
    query: web::Query<WithCvsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data
        .fetch_users_use_case
        .one(id, query.with_cvs.unwrap_or(false))
        .await
    {
        Ok(Some(user)) => ApiResponse::success(user),
        Ok(None) => {
            ApiResponse::not_found("USER_NOT_FOUND", &format!("User with ID {id} not found"))
        }
        Err(e) => {
            error!("Repository error fetching user: {}", e);
            ApiResponse::internal_error()
        }
    }
}
