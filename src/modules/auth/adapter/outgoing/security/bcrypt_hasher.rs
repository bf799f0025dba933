use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use rand::RngCore;

use crate::auth::application::ports::outgoing::{HashError, PasswordHasher as HasherTrait};

const SALT_LEN: usize = 16;

#[derive(Clone)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Environment-based configuration
    pub fn from_env() -> Self {
        let cost: u32 = std::env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(bcrypt::DEFAULT_COST);

        Self::with_cost(cost)
    }

    fn decode_salt(salt: &str) -> Result<[u8; SALT_LEN], HashError> {
        let bytes = BASE64.decode(salt).map_err(|_| HashError::BadSalt)?;
        bytes.try_into().map_err(|_| HashError::BadSalt)
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HasherTrait for BcryptHasher {
    fn generate_salt(&self) -> String {
        let mut bytes = [0u8; SALT_LEN];
        rand::thread_rng().fill_bytes(&mut bytes);
        BASE64.encode(bytes)
    }

    async fn hash_password(&self, password: &str, salt: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let salt = Self::decode_salt(salt)?;
        let cost = self.cost;

        tokio::task::spawn_blocking(move || {
            bcrypt::hash_with_salt(password.as_bytes(), cost, salt)
                .map(|parts| parts.to_string())
                .map_err(|_| HashError::HashFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hash = hash.to_string();

        // The bcrypt hash string embeds the salt, so verification needs no
        // separate salt lookup
        tokio::task::spawn_blocking(move || {
            bcrypt::verify(password.as_bytes(), &hash).map_err(|_| HashError::HashFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // bcrypt's minimum cost keeps these tests fast
    fn fast_hasher() -> BcryptHasher {
        BcryptHasher::with_cost(4)
    }

    #[tokio::test]
    async fn test_hash_then_verify_round_trip() {
        let hasher = fast_hasher();
        let salt = hasher.generate_salt();

        let hash = hasher.hash_password("Admin#1234", &salt).await.unwrap();
        assert!(hasher.verify_password("Admin#1234", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_wrong_password_does_not_verify() {
        let hasher = fast_hasher();
        let salt = hasher.generate_salt();

        let hash = hasher.hash_password("Admin#1234", &salt).await.unwrap();
        assert!(!hasher.verify_password("wrong", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_same_salt_same_hash() {
        let hasher = fast_hasher();
        let salt = hasher.generate_salt();

        let first = hasher.hash_password("Admin#1234", &salt).await.unwrap();
        let second = hasher.hash_password("Admin#1234", &salt).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_malformed_salt_is_rejected() {
        let hasher = fast_hasher();

        let result = hasher.hash_password("Admin#1234", "not base64!!").await;
        assert!(matches!(result, Err(HashError::BadSalt)));
    }

    #[test]
    fn test_generated_salts_differ() {
        let hasher = fast_hasher();
        assert_ne!(hasher.generate_salt(), hasher.generate_salt());
    }
}
