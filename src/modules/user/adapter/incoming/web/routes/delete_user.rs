use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::user::application::use_cases::delete_user::DeleteUserError;
use crate::AppState;

#[derive(Serialize)]
struct DeletedResponse {
    deleted: bool,
}

/// Admin-only. The schema cascade takes the user's CVs with it.
#[delete("/api/users/{id}")]
pub async fn delete_user_handler(
    _admin: AdminUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.delete_user_use_case.execute(id).await {
        Ok(()) => ApiResponse::success(DeletedResponse { deleted: true }),
        Err(DeleteUserError::UserNotFound(id)) => {
            ApiResponse::not_found("USER_NOT_FOUND", &format!("User with ID {id} not found"))
        }
        Err(DeleteUserError::RepositoryError(e)) => {
            error!("Repository error deleting user: {}", e);
            ApiResponse::internal_error()
        }
    }
}
