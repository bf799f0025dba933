use async_trait::async_trait;

use crate::user::application::ports::outgoing::{
    UpdateUserData, UserRepository, UserRepositoryError,
};
use crate::user::domain::entities::UserInfo;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateUserError {
    #[error("User with id {0} not found")]
    UserNotFound(i32),
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserRepositoryError> for UpdateUserError {
    fn from(e: UserRepositoryError) -> Self {
        match e {
            UserRepositoryError::UserNotFound(id) => UpdateUserError::UserNotFound(id),
            other => UpdateUserError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait IUpdateUserUseCase: Send + Sync {
    async fn execute(&self, id: i32, patch: UpdateUserData)
        -> Result<UserInfo, UpdateUserError>;
}

pub struct UpdateUserUseCase<R>
where
    R: UserRepository,
{
    user_repo: R,
}

impl<R> UpdateUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: R) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<R> IUpdateUserUseCase for UpdateUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: i32,
        patch: UpdateUserData,
    ) -> Result<UserInfo, UpdateUserError> {
        Ok(self.user_repo.update(id, patch).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::application::test_support::MockUserRepository;
    use crate::user::domain::entities::UserInfo;

    #[tokio::test]
    async fn test_attach_list_reaches_repository() {
        let repo = MockUserRepository::new();
        repo.insert_user(UserInfo {
            id: 7,
            username: "jane".to_string(),
            email: "jane@example.com".to_string(),
            role: "user".to_string(),
            is_admin: false,
            cvs: None,
        });
        let use_case = UpdateUserUseCase::new(repo.clone());

        let patch = UpdateUserData {
            cvs: Some(vec![1, 2]),
            ..Default::default()
        };

        use_case.execute(7, patch.clone()).await.unwrap();
        assert_eq!(repo.updates(), vec![(7, patch)]);
    }

    #[tokio::test]
    async fn test_missing_user_maps_to_not_found() {
        let repo = MockUserRepository::new();
        let use_case = UpdateUserUseCase::new(repo);

        let err = use_case
            .execute(404, UpdateUserData::default())
            .await
            .unwrap_err();
        assert!(matches!(err, UpdateUserError::UserNotFound(404)));
    }
}
