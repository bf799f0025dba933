use async_trait::async_trait;

use crate::skill::application::ports::outgoing::{
    SkillRepository, SkillRepositoryError, SkillWithCvs,
};
use crate::skill::domain::entities::{SkillInfo, SkillPopularity};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchSkillsError {
    #[error("Skill with id {0} not found")]
    SkillNotFound(i32),
    #[error("CV with id {0} not found")]
    CvNotFound(i32),
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<SkillRepositoryError> for FetchSkillsError {
    fn from(e: SkillRepositoryError) -> Self {
        match e {
            SkillRepositoryError::SkillNotFound(id) => FetchSkillsError::SkillNotFound(id),
            SkillRepositoryError::CvNotFound(id) => FetchSkillsError::CvNotFound(id),
            other => FetchSkillsError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait IFetchSkillsUseCase: Send + Sync {
    async fn all(&self, with_cvs: bool) -> Result<Vec<SkillWithCvs>, FetchSkillsError>;

    async fn one(&self, id: i32, with_cvs: bool)
        -> Result<SkillWithCvs, FetchSkillsError>;

    async fn popular(&self, limit: u64) -> Result<Vec<SkillPopularity>, FetchSkillsError>;

    async fn by_cv(&self, cv_id: i32) -> Result<Vec<SkillInfo>, FetchSkillsError>;
}

pub struct FetchSkillsUseCase<R>
where
    R: SkillRepository,
{
    skill_repo: R,
}

impl<R> FetchSkillsUseCase<R>
where
    R: SkillRepository,
{
    pub fn new(skill_repo: R) -> Self {
        Self { skill_repo }
    }
}

#[async_trait]
impl<R> IFetchSkillsUseCase for FetchSkillsUseCase<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn all(&self, with_cvs: bool) -> Result<Vec<SkillWithCvs>, FetchSkillsError> {
        Ok(self.skill_repo.find_all(with_cvs).await?)
    }

    async fn one(
        &self,
        id: i32,
        with_cvs: bool,
    ) -> Result<SkillWithCvs, FetchSkillsError> {
        Ok(self.skill_repo.find_one(id, with_cvs).await?)
    }

    async fn popular(&self, limit: u64) -> Result<Vec<SkillPopularity>, FetchSkillsError> {
        Ok(self.skill_repo.find_popular(limit).await?)
    }

    async fn by_cv(&self, cv_id: i32) -> Result<Vec<SkillInfo>, FetchSkillsError> {
        Ok(self.skill_repo.find_by_cv(cv_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::application::test_support::MockSkillRepository;

    #[tokio::test]
    async fn test_popular_caps_at_limit() {
        let repo = MockSkillRepository::new();
        repo.set_popular(vec![
            SkillPopularity {
                id: 1,
                designation: "rust".to_string(),
                cv_count: 3,
            },
            SkillPopularity {
                id: 2,
                designation: "sql".to_string(),
                cv_count: 1,
            },
            SkillPopularity {
                id: 3,
                designation: "go".to_string(),
                cv_count: 1,
            },
        ]);
        let use_case = FetchSkillsUseCase::new(repo);

        let ranking = use_case.popular(2).await.unwrap();
        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].cv_count, 3);
    }

    #[tokio::test]
    async fn test_one_missing_skill() {
        let repo = MockSkillRepository::new();
        let use_case = FetchSkillsUseCase::new(repo);

        let err = use_case.one(404, false).await.unwrap_err();
        assert!(matches!(err, FetchSkillsError::SkillNotFound(404)));
    }

    #[tokio::test]
    async fn test_by_cv_missing_cv() {
        let repo = MockSkillRepository::new();
        let use_case = FetchSkillsUseCase::new(repo);

        let err = use_case.by_cv(404).await.unwrap_err();
        assert!(matches!(err, FetchSkillsError::CvNotFound(404)));
    }
}
