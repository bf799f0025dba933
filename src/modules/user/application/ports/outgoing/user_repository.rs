use async_trait::async_trait;

use crate::cv::domain::entities::CvInfo;
use crate::user::domain::entities::{UserCredentials, UserCvCount, UserInfo};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User with id {0} not found")]
    UserNotFound(i32),
    #[error("CV with id {0} not found")]
    CvNotFound(i32),
    #[error("CV with id {cv_id} does not belong to User with id {user_id}")]
    CvNotOwned { user_id: i32, cv_id: i32 },
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Pre-hashed credentials: the authenticator hashes before this layer is
/// called, this layer never sees a cleartext password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserData {
    pub username: String,
    pub email: String,
    pub password: String,
    pub salt: String,
    pub role: String,
}

/// Scalar patch plus the optional CV attach list. The list is additive:
/// each resolved CV is reassigned to this user, unlisted CVs stay put.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUserData {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub cvs: Option<Vec<i32>>,
}

impl UpdateUserData {
    pub fn has_scalar_fields(&self) -> bool {
        self.username.is_some() || self.email.is_some() || self.password.is_some()
    }
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, data: CreateUserData) -> Result<UserInfo, UserRepositoryError>;

    async fn find_all(&self, with_cvs: bool) -> Result<Vec<UserInfo>, UserRepositoryError>;

    async fn find_one(
        &self,
        id: i32,
        with_cvs: bool,
    ) -> Result<Option<UserInfo>, UserRepositoryError>;

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserInfo>, UserRepositoryError>;

    /// Credential lookup for the authenticator: the only read that exposes
    /// password and salt.
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, UserRepositoryError>;

    async fn find_user_cvs(&self, user_id: i32) -> Result<Vec<CvInfo>, UserRepositoryError>;

    async fn find_users_with_most_cvs(
        &self,
        limit: u64,
    ) -> Result<Vec<UserCvCount>, UserRepositoryError>;

    async fn update(&self, id: i32, patch: UpdateUserData)
        -> Result<UserInfo, UserRepositoryError>;

    async fn remove(&self, id: i32) -> Result<(), UserRepositoryError>;

    async fn remove_cv_from_user(
        &self,
        user_id: i32,
        cv_id: i32,
    ) -> Result<(), UserRepositoryError>;
}
