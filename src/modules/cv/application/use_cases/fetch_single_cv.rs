use async_trait::async_trait;

use crate::cv::application::ports::outgoing::{CvRepository, CvRepositoryError};
use crate::cv::domain::entities::{CvInfo, CvRelations};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchSingleCvError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<CvRepositoryError> for FetchSingleCvError {
    fn from(e: CvRepositoryError) -> Self {
        FetchSingleCvError::RepositoryError(e.to_string())
    }
}

#[async_trait]
pub trait IFetchSingleCvUseCase: Send + Sync {
    /// `None` when the id has no row; the HTTP layer decides how to word it.
    async fn execute(
        &self,
        id: i32,
        relations: CvRelations,
    ) -> Result<Option<CvInfo>, FetchSingleCvError>;
}

pub struct FetchSingleCvUseCase<R>
where
    R: CvRepository,
{
    cv_repo: R,
}

impl<R> FetchSingleCvUseCase<R>
where
    R: CvRepository,
{
    pub fn new(cv_repo: R) -> Self {
        Self { cv_repo }
    }
}

#[async_trait]
impl<R> IFetchSingleCvUseCase for FetchSingleCvUseCase<R>
where
    R: CvRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: i32,
        relations: CvRelations,
    ) -> Result<Option<CvInfo>, FetchSingleCvError> {
        Ok(self.cv_repo.find_one(id, relations).await?)
    }
}
