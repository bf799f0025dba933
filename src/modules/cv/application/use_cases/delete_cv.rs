use async_trait::async_trait;

use crate::cv::application::ports::outgoing::{
    CvRepository, CvRepositoryError, DeleteConfirmation,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCvError {
    #[error("CV with id {0} not found")]
    CvNotFound(i32),
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<CvRepositoryError> for DeleteCvError {
    fn from(e: CvRepositoryError) -> Self {
        match e {
            CvRepositoryError::CvNotFound(id) => DeleteCvError::CvNotFound(id),
            other => DeleteCvError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait IDeleteCvUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<DeleteConfirmation, DeleteCvError>;
}

pub struct DeleteCvUseCase<R>
where
    R: CvRepository,
{
    cv_repo: R,
}

impl<R> DeleteCvUseCase<R>
where
    R: CvRepository,
{
    pub fn new(cv_repo: R) -> Self {
        Self { cv_repo }
    }
}

#[async_trait]
impl<R> IDeleteCvUseCase for DeleteCvUseCase<R>
where
    R: CvRepository + Send + Sync,
{
    async fn execute(&self, id: i32) -> Result<DeleteConfirmation, DeleteCvError> {
        Ok(self.cv_repo.remove(id).await?)
    }
}
