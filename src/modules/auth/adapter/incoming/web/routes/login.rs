use actix_web::{post, web, Responder};
use tracing::error;

use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/auth/login")]
pub async fn login_handler(
    req: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.login_use_case.execute(req.into_inner()).await {
        Ok(response) => ApiResponse::success(response),
        Err(LoginError::InvalidCredentials) => {
            // One message for unknown email and wrong password alike
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid credentials")
        }
        Err(e) => {
            error!("Login failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
