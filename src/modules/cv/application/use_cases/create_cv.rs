use async_trait::async_trait;

use crate::cv::application::ports::outgoing::{CreateCvData, CvRepository, CvRepositoryError};
use crate::cv::domain::entities::CvInfo;
use crate::shared::policy::Principal;
use crate::user::application::ports::outgoing::UserRepository;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCvError {
    #[error("User with id {0} not found")]
    UserNotFound(i32),
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// An interface for the create CV use case
#[async_trait]
pub trait ICreateCvUseCase: Send + Sync {
    async fn execute(
        &self,
        principal: &Principal,
        data: CreateCvData,
    ) -> Result<CvInfo, CreateCvError>;
}

pub struct CreateCvUseCase<R, U>
where
    R: CvRepository,
    U: UserRepository,
{
    cv_repo: R,
    user_repo: U,
}

impl<R, U> CreateCvUseCase<R, U>
where
    R: CvRepository,
    U: UserRepository,
{
    pub fn new(cv_repo: R, user_repo: U) -> Self {
        Self { cv_repo, user_repo }
    }
}

#[async_trait]
impl<R, U> ICreateCvUseCase for CreateCvUseCase<R, U>
where
    R: CvRepository + Send + Sync,
    U: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        principal: &Principal,
        data: CreateCvData,
    ) -> Result<CvInfo, CreateCvError> {
        // The principal is trusted for identity, not for existence: a token
        // can outlive its user row.
        let owner = self
            .user_repo
            .find_one(principal.id, false)
            .await
            .map_err(|e| CreateCvError::RepositoryError(e.to_string()))?;

        if owner.is_none() {
            return Err(CreateCvError::UserNotFound(principal.id));
        }

        self.cv_repo
            .create(principal.id, data)
            .await
            .map_err(|e| match e {
                CvRepositoryError::UserNotFound(id) => CreateCvError::UserNotFound(id),
                other => CreateCvError::RepositoryError(other.to_string()),
            })
    }
}
