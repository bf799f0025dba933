use async_trait::async_trait;

use crate::user::application::ports::outgoing::{UserRepository, UserRepositoryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DetachCvError {
    /// Covers a missing user, a missing CV, and a CV owned by someone
    /// else - the caller cannot distinguish the three.
    #[error("{0}")]
    NotFound(String),
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserRepositoryError> for DetachCvError {
    fn from(e: UserRepositoryError) -> Self {
        match e {
            UserRepositoryError::UserNotFound(_)
            | UserRepositoryError::CvNotFound(_)
            | UserRepositoryError::CvNotOwned { .. } => DetachCvError::NotFound(e.to_string()),
            other => DetachCvError::RepositoryError(other.to_string()),
        }
    }
}

/// Clears the CV's owner reference; never deletes the CV itself.
#[async_trait]
pub trait IDetachCvUseCase: Send + Sync {
    async fn execute(&self, user_id: i32, cv_id: i32) -> Result<(), DetachCvError>;
}

pub struct DetachCvUseCase<R>
where
    R: UserRepository,
{
    user_repo: R,
}

impl<R> DetachCvUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: R) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<R> IDetachCvUseCase for DetachCvUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: i32, cv_id: i32) -> Result<(), DetachCvError> {
        Ok(self.user_repo.remove_cv_from_user(user_id, cv_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::application::test_support::MockUserRepository;

    #[tokio::test]
    async fn test_ownership_mismatch_reads_as_not_found() {
        let repo = MockUserRepository::new();
        repo.set_error(UserRepositoryError::CvNotOwned {
            user_id: 7,
            cv_id: 1,
        });
        let use_case = DetachCvUseCase::new(repo);

        let err = use_case.execute(7, 1).await.unwrap_err();
        assert!(matches!(err, DetachCvError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_detach_forwards_both_ids() {
        let repo = MockUserRepository::new();
        let use_case = DetachCvUseCase::new(repo.clone());

        use_case.execute(7, 1).await.unwrap();
        assert_eq!(repo.detachments(), vec![(7, 1)]);
    }
}
