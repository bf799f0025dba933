use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedPrincipal;
use crate::shared::api::ApiResponse;
use crate::shared::validation::{
    collect, deserialize_id_list, require_email, require_min_length, to_field_messages,
    FieldError,
};
use crate::user::application::ports::outgoing::UpdateUserData;
use crate::user::application::use_cases::update_user::UpdateUserError;
use crate::AppState;

/// Sparse user patch. The `cvs` list attaches the named CVs to this user
/// without detaching anything else.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(deserialize_with = "deserialize_id_list")]
    pub cvs: Option<Vec<i32>>,
}

impl UpdateUserRequest {
    fn into_data(self) -> Result<UpdateUserData, Vec<FieldError>> {
        collect(vec![
            self.email
                .as_deref()
                .and_then(|email| require_email("email", email)),
            self.password
                .as_deref()
                .and_then(|password| require_min_length("password", password, 8)),
        ])?;

        Ok(UpdateUserData {
            username: self.username,
            email: self.email.map(|e| e.trim().to_lowercase()),
            password: self.password,
            cvs: self.cvs,
        })
    }
}

#[patch("/api/users/{id}")]
pub async fn update_user_handler(
    _principal: AuthenticatedPrincipal,
    path: web::Path<i32>,
    req: web::Json<UpdateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    let patch = match req.into_inner().into_data() {
        Ok(patch) => patch,
        Err(errors) => return ApiResponse::validation_error(to_field_messages(errors)),
    };

    match data.update_user_use_case.execute(id, patch).await {
        Ok(user) => ApiResponse::success(user),
        Err(UpdateUserError::UserNotFound(id)) => {
            ApiResponse::not_found("USER_NOT_FOUND", &format!("User with ID {id} not found"))
        }
        Err(UpdateUserError::RepositoryError(e)) => {
            error!("Repository error updating user: {}", e);
            ApiResponse::internal_error()
        }
    }
}
