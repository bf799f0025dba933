use async_trait::async_trait;

use crate::skill::application::ports::outgoing::{
    CreateSkillData, SkillRepository, SkillRepositoryError, UpdateSkillData,
};
use crate::skill::domain::entities::SkillInfo;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ManageSkillsError {
    #[error("Skill with id {0} not found")]
    SkillNotFound(i32),
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<SkillRepositoryError> for ManageSkillsError {
    fn from(e: SkillRepositoryError) -> Self {
        match e {
            SkillRepositoryError::SkillNotFound(id) => ManageSkillsError::SkillNotFound(id),
            other => ManageSkillsError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait IManageSkillsUseCase: Send + Sync {
    async fn create(&self, data: CreateSkillData) -> Result<SkillInfo, ManageSkillsError>;

    async fn update(
        &self,
        id: i32,
        patch: UpdateSkillData,
    ) -> Result<SkillInfo, ManageSkillsError>;

    async fn remove(&self, id: i32) -> Result<(), ManageSkillsError>;
}

pub struct ManageSkillsUseCase<R>
where
    R: SkillRepository,
{
    skill_repo: R,
}

impl<R> ManageSkillsUseCase<R>
where
    R: SkillRepository,
{
    pub fn new(skill_repo: R) -> Self {
        Self { skill_repo }
    }
}

#[async_trait]
impl<R> IManageSkillsUseCase for ManageSkillsUseCase<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn create(&self, data: CreateSkillData) -> Result<SkillInfo, ManageSkillsError> {
        Ok(self.skill_repo.create(data).await?)
    }

    async fn update(
        &self,
        id: i32,
        patch: UpdateSkillData,
    ) -> Result<SkillInfo, ManageSkillsError> {
        Ok(self.skill_repo.update(id, patch).await?)
    }

    async fn remove(&self, id: i32) -> Result<(), ManageSkillsError> {
        Ok(self.skill_repo.remove(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::application::test_support::MockSkillRepository;

    #[tokio::test]
    async fn test_create_forwards_designation() {
        let repo = MockSkillRepository::new();
        let use_case = ManageSkillsUseCase::new(repo.clone());

        let skill = use_case
            .create(CreateSkillData {
                designation: "rust".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(skill.designation, "rust");
        assert_eq!(repo.last_created().unwrap().designation, "rust");
    }

    #[tokio::test]
    async fn test_update_missing_skill() {
        let repo = MockSkillRepository::new();
        let use_case = ManageSkillsUseCase::new(repo);

        let err = use_case
            .update(
                404,
                UpdateSkillData {
                    designation: Some("go".to_string()),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ManageSkillsError::SkillNotFound(404)));
    }

    #[tokio::test]
    async fn test_remove_missing_skill() {
        let repo = MockSkillRepository::new();
        let use_case = ManageSkillsUseCase::new(repo);

        let err = use_case.remove(404).await.unwrap_err();
        assert!(matches!(err, ManageSkillsError::SkillNotFound(404)));
    }
}
