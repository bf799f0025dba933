use async_trait::async_trait;

use crate::cv::domain::entities::CvInfo;
use crate::user::application::ports::outgoing::{UserRepository, UserRepositoryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchUserCvsError {
    #[error("User with id {0} not found")]
    UserNotFound(i32),
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserRepositoryError> for FetchUserCvsError {
    fn from(e: UserRepositoryError) -> Self {
        match e {
            UserRepositoryError::UserNotFound(id) => FetchUserCvsError::UserNotFound(id),
            other => FetchUserCvsError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait IFetchUserCvsUseCase: Send + Sync {
    async fn execute(&self, user_id: i32) -> Result<Vec<CvInfo>, FetchUserCvsError>;
}

pub struct FetchUserCvsUseCase<R>
where
    R: UserRepository,
{
    user_repo: R,
}

impl<R> FetchUserCvsUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: R) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<R> IFetchUserCvsUseCase for FetchUserCvsUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: i32) -> Result<Vec<CvInfo>, FetchUserCvsError> {
        Ok(self.user_repo.find_user_cvs(user_id).await?)
    }
}
