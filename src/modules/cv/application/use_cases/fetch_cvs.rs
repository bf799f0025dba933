use async_trait::async_trait;

use crate::cv::application::ports::outgoing::{CvFilter, CvRepository, CvRepositoryError};
use crate::cv::domain::entities::{CvInfo, CvRelations};
use crate::shared::pagination::PageRequest;
use crate::shared::policy::Principal;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchCvsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<CvRepositoryError> for FetchCvsError {
    fn from(e: CvRepositoryError) -> Self {
        FetchCvsError::RepositoryError(e.to_string())
    }
}

/// Listing and search. The repository applies the caller's visibility
/// scope; this layer only shapes the request.
#[async_trait]
pub trait IFetchCvsUseCase: Send + Sync {
    async fn all(
        &self,
        principal: &Principal,
        relations: CvRelations,
        page: Option<PageRequest>,
    ) -> Result<Vec<CvInfo>, FetchCvsError>;

    async fn search(
        &self,
        principal: &Principal,
        filter: CvFilter,
    ) -> Result<Vec<CvInfo>, FetchCvsError>;
}

pub struct FetchCvsUseCase<R>
where
    R: CvRepository,
{
    cv_repo: R,
}

impl<R> FetchCvsUseCase<R>
where
    R: CvRepository,
{
    pub fn new(cv_repo: R) -> Self {
        Self { cv_repo }
    }
}

#[async_trait]
impl<R> IFetchCvsUseCase for FetchCvsUseCase<R>
where
    R: CvRepository + Send + Sync,
{
    async fn all(
        &self,
        principal: &Principal,
        relations: CvRelations,
        page: Option<PageRequest>,
    ) -> Result<Vec<CvInfo>, FetchCvsError> {
        Ok(self.cv_repo.find_all(principal, relations, page).await?)
    }

    async fn search(
        &self,
        principal: &Principal,
        filter: CvFilter,
    ) -> Result<Vec<CvInfo>, FetchCvsError> {
        Ok(self.cv_repo.find_with_filters(principal, filter).await?)
    }
}
