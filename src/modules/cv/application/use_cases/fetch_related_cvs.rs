use async_trait::async_trait;

use crate::cv::application::ports::outgoing::{CvRepository, CvRepositoryError};
use crate::cv::domain::entities::CvInfo;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchRelatedCvsError {
    #[error("User with id {0} not found")]
    UserNotFound(i32),
    #[error("Skill with id {0} not found")]
    SkillNotFound(i32),
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<CvRepositoryError> for FetchRelatedCvsError {
    fn from(e: CvRepositoryError) -> Self {
        match e {
            CvRepositoryError::UserNotFound(id) => FetchRelatedCvsError::UserNotFound(id),
            CvRepositoryError::SkillNotFound(id) => FetchRelatedCvsError::SkillNotFound(id),
            other => FetchRelatedCvsError::RepositoryError(other.to_string()),
        }
    }
}

/// CVs reached through a referenced entity: a user's CVs, or every CV
/// carrying a given skill. The referenced entity must exist.
#[async_trait]
pub trait IFetchRelatedCvsUseCase: Send + Sync {
    async fn by_user(&self, user_id: i32) -> Result<Vec<CvInfo>, FetchRelatedCvsError>;

    async fn by_skill(&self, skill_id: i32) -> Result<Vec<CvInfo>, FetchRelatedCvsError>;
}

pub struct FetchRelatedCvsUseCase<R>
where
    R: CvRepository,
{
    cv_repo: R,
}

impl<R> FetchRelatedCvsUseCase<R>
where
    R: CvRepository,
{
    pub fn new(cv_repo: R) -> Self {
        Self { cv_repo }
    }
}

#[async_trait]
impl<R> IFetchRelatedCvsUseCase for FetchRelatedCvsUseCase<R>
where
    R: CvRepository + Send + Sync,
{
    async fn by_user(&self, user_id: i32) -> Result<Vec<CvInfo>, FetchRelatedCvsError> {
        Ok(self.cv_repo.find_by_user(user_id).await?)
    }

    async fn by_skill(&self, skill_id: i32) -> Result<Vec<CvInfo>, FetchRelatedCvsError> {
        Ok(self.cv_repo.find_by_skill(skill_id).await?)
    }
}
