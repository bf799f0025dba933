use async_trait::async_trait;

use crate::user::application::ports::outgoing::{UserRepository, UserRepositoryError};
use crate::user::domain::entities::UserCvCount;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopUsersError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserRepositoryError> for TopUsersError {
    fn from(e: UserRepositoryError) -> Self {
        TopUsersError::RepositoryError(e.to_string())
    }
}

#[async_trait]
pub trait ITopUsersUseCase: Send + Sync {
    async fn execute(&self, limit: u64) -> Result<Vec<UserCvCount>, TopUsersError>;
}

pub struct TopUsersUseCase<R>
where
    R: UserRepository,
{
    user_repo: R,
}

impl<R> TopUsersUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: R) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<R> ITopUsersUseCase for TopUsersUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, limit: u64) -> Result<Vec<UserCvCount>, TopUsersError> {
        Ok(self.user_repo.find_users_with_most_cvs(limit).await?)
    }
}
