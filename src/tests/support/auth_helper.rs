use std::sync::Arc;

use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::services::jwt::{JwtConfig, JwtTokenService};

pub fn test_token_service() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_for_testing_only".to_string(),
        expiry_secs: 3600,
    }))
}

pub fn bearer_for(
    tokens: &Arc<dyn TokenProvider + Send + Sync>,
    user_id: i32,
    role: &str,
) -> String {
    let token = tokens
        .issue_token(user_id, &format!("user{user_id}"), role)
        .expect("test token");
    format!("Bearer {token}")
}
