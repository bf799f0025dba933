use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedPrincipal;
use crate::shared::api::ApiResponse;
use crate::user::application::use_cases::fetch_user_cvs::FetchUserCvsError;
use crate::AppState;

#[get("/api/users/{id}/cvs")]
pub async fn get_user_cvs_handler(
    _principal: AuthenticatedPrincipal,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.fetch_user_cvs_use_case.execute(user_id).await {
        Ok(cvs) => ApiResponse::success(cvs),
        Err(FetchUserCvsError::UserNotFound(id)) => {
            ApiResponse::not_found("USER_NOT_FOUND", &format!("User with ID {id} not found"))
        }
        Err(FetchUserCvsError::RepositoryError(e)) => {
            error!("Repository error fetching user CVs: {}", e);
            ApiResponse::internal_error()
        }
    }
}
