use async_trait::async_trait;

use crate::user::application::ports::outgoing::{UserRepository, UserRepositoryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteUserError {
    #[error("User with id {0} not found")]
    UserNotFound(i32),
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserRepositoryError> for DeleteUserError {
    fn from(e: UserRepositoryError) -> Self {
        match e {
            UserRepositoryError::UserNotFound(id) => DeleteUserError::UserNotFound(id),
            other => DeleteUserError::RepositoryError(other.to_string()),
        }
    }
}

/// Owned CVs disappear with the user via the schema's cascade rule; there
/// is no application-level cleanup to do here.
#[async_trait]
pub trait IDeleteUserUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<(), DeleteUserError>;
}

pub struct DeleteUserUseCase<R>
where
    R: UserRepository,
{
    user_repo: R,
}

impl<R> DeleteUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: R) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<R> IDeleteUserUseCase for DeleteUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, id: i32) -> Result<(), DeleteUserError> {
        Ok(self.user_repo.remove(id).await?)
    }
}
