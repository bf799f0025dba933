use async_trait::async_trait;

use crate::cv::application::ports::outgoing::{CvRepository, CvRepositoryError};
use crate::cv::domain::entities::CvInfo;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ManageCvSkillsError {
    #[error("CV with id {0} not found")]
    CvNotFound(i32),
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<CvRepositoryError> for ManageCvSkillsError {
    fn from(e: CvRepositoryError) -> Self {
        match e {
            CvRepositoryError::CvNotFound(id) => ManageCvSkillsError::CvNotFound(id),
            other => ManageCvSkillsError::RepositoryError(other.to_string()),
        }
    }
}

/// Skill-set mutation on one CV: wholesale replacement or removal of a
/// single membership.
#[async_trait]
pub trait IManageCvSkillsUseCase: Send + Sync {
    async fn replace(
        &self,
        cv_id: i32,
        skill_ids: Vec<i32>,
    ) -> Result<CvInfo, ManageCvSkillsError>;

    async fn remove(&self, cv_id: i32, skill_id: i32) -> Result<CvInfo, ManageCvSkillsError>;
}

pub struct ManageCvSkillsUseCase<R>
where
    R: CvRepository,
{
    cv_repo: R,
}

impl<R> ManageCvSkillsUseCase<R>
where
    R: CvRepository,
{
    pub fn new(cv_repo: R) -> Self {
        Self { cv_repo }
    }
}

#[async_trait]
impl<R> IManageCvSkillsUseCase for ManageCvSkillsUseCase<R>
where
    R: CvRepository + Send + Sync,
{
    async fn replace(
        &self,
        cv_id: i32,
        skill_ids: Vec<i32>,
    ) -> Result<CvInfo, ManageCvSkillsError> {
        Ok(self.cv_repo.update_skills(cv_id, skill_ids).await?)
    }

    async fn remove(&self, cv_id: i32, skill_id: i32) -> Result<CvInfo, ManageCvSkillsError> {
        Ok(self.cv_repo.remove_skill(cv_id, skill_id).await?)
    }
}
