use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::ports::outgoing::{HashError, PasswordHasher};
use crate::user::application::ports::outgoing::{
    CreateUserData, UserRepository, UserRepositoryError,
};
use crate::user::domain::entities::UserInfo;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SignupError {
    #[error("Username is already taken")]
    UsernameTaken,
    #[error("Email is already registered")]
    EmailTaken,
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<HashError> for SignupError {
    fn from(e: HashError) -> Self {
        SignupError::HashingFailed(e.to_string())
    }
}

impl From<UserRepositoryError> for SignupError {
    fn from(e: UserRepositoryError) -> Self {
        SignupError::RepositoryError(e.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct SignupData {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

#[async_trait]
pub trait ISignupUseCase: Send + Sync {
    async fn execute(&self, data: SignupData) -> Result<UserInfo, SignupError>;
}

pub struct SignupUseCase<R>
where
    R: UserRepository,
{
    user_repo: R,
    hasher: Arc<dyn PasswordHasher>,
}

impl<R> SignupUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: R, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { user_repo, hasher }
    }
}

#[async_trait]
impl<R> ISignupUseCase for SignupUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, data: SignupData) -> Result<UserInfo, SignupError> {
        if self
            .user_repo
            .find_by_username(&data.username)
            .await?
            .is_some()
        {
            return Err(SignupError::UsernameTaken);
        }

        if self.user_repo.find_by_email(&data.email).await?.is_some() {
            return Err(SignupError::EmailTaken);
        }

        let salt = self.hasher.generate_salt();
        let hashed = self.hasher.hash_password(&data.password, &salt).await?;

        let created = self
            .user_repo
            .create(CreateUserData {
                username: data.username,
                email: data.email,
                password: hashed,
                salt,
                role: data.role,
            })
            .await?;

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::application::test_support::MockUserRepository;

    fn user_info(id: i32, username: &str) -> UserInfo {
        UserInfo {
            id,
            username: username.to_string(),
            email: format!("{username}@example.com"),
            role: "user".to_string(),
            is_admin: false,
            cvs: None,
        }
    }

    fn signup_data() -> SignupData {
        SignupData {
            username: "jane".to_string(),
            email: "jane@example.com".to_string(),
            password: "Admin#1234".to_string(),
            role: "user".to_string(),
        }
    }

    #[tokio::test]
    async fn test_signup_hashes_before_persisting() {
        let repo = MockUserRepository::new();
        repo.set_created_user(user_info(1, "jane"));

        let hasher = Arc::new(crate::auth::adapter::outgoing::security::BcryptHasher::with_cost(4));
        let use_case = SignupUseCase::new(repo.clone(), hasher);

        let created = use_case.execute(signup_data()).await.unwrap();
        assert_eq!(created.username, "jane");

        let persisted = repo.last_created().unwrap();
        assert_ne!(persisted.password, "Admin#1234");
        assert!(!persisted.salt.is_empty());
        assert_eq!(persisted.role, "user");
    }

    #[tokio::test]
    async fn test_signup_rejects_taken_username() {
        let repo = MockUserRepository::new();
        repo.insert_user_lookup("jane", user_info(1, "jane"));

        let hasher = Arc::new(crate::auth::adapter::outgoing::security::BcryptHasher::with_cost(4));
        let use_case = SignupUseCase::new(repo, hasher);

        let err = use_case.execute(signup_data()).await.unwrap_err();
        assert!(matches!(err, SignupError::UsernameTaken));
    }

    #[tokio::test]
    async fn test_signup_rejects_registered_email() {
        let repo = MockUserRepository::new();
        repo.insert_credentials(crate::user::domain::entities::UserCredentials {
            id: 1,
            username: "someone".to_string(),
            email: "jane@example.com".to_string(),
            password: "hash".to_string(),
            salt: "salt".to_string(),
            role: "user".to_string(),
            is_admin: false,
        });

        let hasher = Arc::new(crate::auth::adapter::outgoing::security::BcryptHasher::with_cost(4));
        let use_case = SignupUseCase::new(repo, hasher);

        let err = use_case.execute(signup_data()).await.unwrap_err();
        assert!(matches!(err, SignupError::EmailTaken));
    }
}
