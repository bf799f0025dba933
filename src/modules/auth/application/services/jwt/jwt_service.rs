use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use super::jwt_config::JwtConfig;
use crate::auth::application::ports::outgoing::{AccessClaims, TokenError, TokenProvider};

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl TokenProvider for JwtTokenService {
    fn issue_token(
        &self,
        user_id: i32,
        username: &str,
        role: &str,
    ) -> Result<String, TokenError> {
        let expiration = Utc::now() + Duration::seconds(self.config.expiry_secs);
        let claims = AccessClaims {
            sub: user_id,
            username: username.to_string(),
            role: role.to_string(),
            exp: expiration.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::GenerationFailed(e.to_string()))
    }

    fn verify_token(&self, token: &str) -> Result<AccessClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false; // enforced manually below

        let decoded = decode::<AccessClaims>(token, &self.decoding_key, &validation)
            .map_err(|_| TokenError::Invalid)?;

        let now = Utc::now().timestamp();
        if decoded.claims.exp < now {
            return Err(TokenError::Invalid);
        }

        Ok(decoded.claims)
    }
}
