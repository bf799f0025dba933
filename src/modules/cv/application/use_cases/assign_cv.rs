use async_trait::async_trait;

use crate::cv::application::ports::outgoing::{CvRepository, CvRepositoryError};
use crate::cv::domain::entities::CvInfo;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AssignCvError {
    #[error("CV with id {0} not found")]
    CvNotFound(i32),
    #[error("User with id {0} not found")]
    UserNotFound(i32),
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<CvRepositoryError> for AssignCvError {
    fn from(e: CvRepositoryError) -> Self {
        match e {
            CvRepositoryError::CvNotFound(id) => AssignCvError::CvNotFound(id),
            CvRepositoryError::UserNotFound(id) => AssignCvError::UserNotFound(id),
            other => AssignCvError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait IAssignCvUseCase: Send + Sync {
    async fn execute(&self, cv_id: i32, user_id: i32) -> Result<CvInfo, AssignCvError>;
}

pub struct AssignCvUseCase<R>
where
    R: CvRepository,
{
    cv_repo: R,
}

impl<R> AssignCvUseCase<R>
where
    R: CvRepository,
{
    pub fn new(cv_repo: R) -> Self {
        Self { cv_repo }
    }
}

#[async_trait]
impl<R> IAssignCvUseCase for AssignCvUseCase<R>
where
    R: CvRepository + Send + Sync,
{
    async fn execute(&self, cv_id: i32, user_id: i32) -> Result<CvInfo, AssignCvError> {
        Ok(self.cv_repo.assign_to_user(cv_id, user_id).await?)
    }
}
