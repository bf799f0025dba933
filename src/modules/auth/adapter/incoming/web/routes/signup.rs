use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::application::use_cases::signup_user::{SignupData, SignupError};
use crate::shared::api::ApiResponse;
use crate::shared::validation::{
    collect, require_email, require_min_length, require_non_empty, to_field_messages,
    FieldError,
};
use crate::AppState;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SignupRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

impl SignupRequest {
    fn into_data(self) -> Result<SignupData, Vec<FieldError>> {
        let username = self.username.unwrap_or_default();
        let email = self.email.unwrap_or_default();
        let password = self.password.unwrap_or_default();
        let role = self.role.unwrap_or_default();

        collect(vec![
            require_non_empty("username", &username),
            require_non_empty("email", &email),
            if email.trim().is_empty() {
                None
            } else {
                require_email("email", &email)
            },
            require_non_empty("password", &password),
            if password.is_empty() {
                None
            } else {
                require_min_length("password", &password, 8)
            },
            require_non_empty("role", &role),
        ])?;

        Ok(SignupData {
            username: username.trim().to_string(),
            email: email.trim().to_lowercase(),
            password,
            role: role.trim().to_string(),
        })
    }
}

#[post("/api/auth/signup")]
pub async fn signup_handler(
    req: web::Json<SignupRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let signup_data = match req.into_inner().into_data() {
        Ok(data) => data,
        Err(errors) => return ApiResponse::validation_error(to_field_messages(errors)),
    };

    match data.signup_use_case.execute(signup_data).await {
        Ok(user) => ApiResponse::created(user),
        Err(SignupError::UsernameTaken) => {
            ApiResponse::conflict("USERNAME_TAKEN", "Username is already taken")
        }
        Err(SignupError::EmailTaken) => {
            ApiResponse::conflict("EMAIL_TAKEN", "Email is already registered")
        }
        Err(e) => {
            error!("Signup failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
