use async_trait::async_trait;

use crate::cv::application::ports::outgoing::{CvRepository, CvRepositoryError, UpdateCvData};
use crate::cv::domain::entities::CvInfo;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateCvError {
    #[error("CV with id {0} not found")]
    CvNotFound(i32),
    #[error("User with id {0} not found")]
    UserNotFound(i32),
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<CvRepositoryError> for UpdateCvError {
    fn from(e: CvRepositoryError) -> Self {
        match e {
            CvRepositoryError::CvNotFound(id) => UpdateCvError::CvNotFound(id),
            CvRepositoryError::UserNotFound(id) => UpdateCvError::UserNotFound(id),
            other => UpdateCvError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait IUpdateCvUseCase: Send + Sync {
    async fn execute(&self, id: i32, patch: UpdateCvData) -> Result<CvInfo, UpdateCvError>;
}

pub struct UpdateCvUseCase<R>
where
    R: CvRepository,
{
    cv_repo: R,
}

impl<R> UpdateCvUseCase<R>
where
    R: CvRepository,
{
    pub fn new(cv_repo: R) -> Self {
        Self { cv_repo }
    }
}

#[async_trait]
impl<R> IUpdateCvUseCase for UpdateCvUseCase<R>
where
    R: CvRepository + Send + Sync,
{
    async fn execute(&self, id: i32, patch: UpdateCvData) -> Result<CvInfo, UpdateCvError> {
        Ok(self.cv_repo.update(id, patch).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cv::application::test_support::MockCvRepository;
    use crate::cv::domain::entities::CvInfo;

    fn cv_info(id: i32) -> CvInfo {
        CvInfo {
            id,
            name: "Doe".to_string(),
            firstname: "Jane".to_string(),
            age: 30,
            cin: "AB123456".to_string(),
            job: "Engineer".to_string(),
            path: "uploads/cvs/jane.pdf".to_string(),
            user_id: None,
            skills: None,
            user: None,
        }
    }

    #[tokio::test]
    async fn test_sparse_patch_reaches_repository_intact() {
        let repo = MockCvRepository::new();
        repo.insert_cv(cv_info(1));
        let use_case = UpdateCvUseCase::new(repo.clone());

        let patch = UpdateCvData {
            name: Some("Smith".to_string()),
            user: Some(None),
            ..Default::default()
        };

        use_case.execute(1, patch.clone()).await.unwrap();
        assert_eq!(repo.updates(), vec![(1, patch)]);
    }

    #[tokio::test]
    async fn test_missing_cv_maps_to_not_found() {
        let repo = MockCvRepository::new();
        let use_case = UpdateCvUseCase::new(repo);

        let err = use_case
            .execute(404, UpdateCvData::default())
            .await
            .unwrap_err();
        assert!(matches!(err, UpdateCvError::CvNotFound(404)));
    }
}
