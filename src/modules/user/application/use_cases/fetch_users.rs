use async_trait::async_trait;

use crate::user::application::ports::outgoing::{UserRepository, UserRepositoryError};
use crate::user::domain::entities::UserInfo;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchUsersError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserRepositoryError> for FetchUsersError {
    fn from(e: UserRepositoryError) -> Self {
        FetchUsersError::RepositoryError(e.to_string())
    }
}

/// User listings. Relation inclusion is a boolean toggle, stricter than
/// the CV layer's relation set.
#[async_trait]
pub trait IFetchUsersUseCase: Send + Sync {
    async fn all(&self, with_cvs: bool) -> Result<Vec<UserInfo>, FetchUsersError>;

    async fn one(&self, id: i32, with_cvs: bool)
        -> Result<Option<UserInfo>, FetchUsersError>;
}

pub struct FetchUsersUseCase<R>
where
    R: UserRepository,
{
    user_repo: R,
}

impl<R> FetchUsersUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: R) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<R> IFetchUsersUseCase for FetchUsersUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn all(&self, with_cvs: bool) -> Result<Vec<UserInfo>, FetchUsersError> {
        Ok(self.user_repo.find_all(with_cvs).await?)
    }

    async fn one(
        &self,
        id: i32,
        with_cvs: bool,
    ) -> Result<Option<UserInfo>, FetchUsersError> {
        Ok(self.user_repo.find_one(id, with_cvs).await?)
    }
}
