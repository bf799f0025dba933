use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HashError {
    #[error("Password hashing failed")]
    HashFailed,
    #[error("Hashing task failed")]
    TaskFailed,
    #[error("Stored salt is malformed")]
    BadSalt,
}

/// Salted password hashing. The salt is generated once at signup, stored
/// next to the hash, and reused to recompute the hash at verification.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    fn generate_salt(&self) -> String;

    async fn hash_password(&self, password: &str, salt: &str) -> Result<String, HashError>;

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
