use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenError {
    #[error("Token generation failed: {0}")]
    GenerationFailed(String),
    #[error("Invalid or expired token")]
    Invalid,
}

/// Claims carried by an access token: enough to rebuild the principal
/// without touching the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    pub sub: i32,
    pub username: String,
    pub role: String,
    pub exp: i64,
}

pub trait TokenProvider: Send + Sync {
    fn issue_token(&self, user_id: i32, username: &str, role: &str)
        -> Result<String, TokenError>;

    fn verify_token(&self, token: &str) -> Result<AccessClaims, TokenError>;
}
