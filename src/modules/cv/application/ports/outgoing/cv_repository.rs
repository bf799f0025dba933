use async_trait::async_trait;
use serde::Serialize;

use crate::cv::domain::entities::{CvInfo, CvRelations};
use crate::shared::pagination::PageRequest;
use crate::shared::policy::Principal;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CvRepositoryError {
    #[error("CV with id {0} not found")]
    CvNotFound(i32),
    #[error("User with id {0} not found")]
    UserNotFound(i32),
    #[error("Skill with id {0} not found")]
    SkillNotFound(i32),
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Scalar CV fields for creation. The owner comes from the principal, an
/// optional skill-id list resolves with silent-drop semantics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateCvData {
    pub name: String,
    pub firstname: String,
    pub age: i32,
    pub cin: String,
    pub job: String,
    pub path: String,
    pub skills: Option<Vec<i32>>,
}

/// Sparse patch. Scalars: `None` leaves the column alone. `skills` replaces
/// the whole association set, but only when present and non-empty. `user`
/// distinguishes absent (`None`: keep owner) from explicit null
/// (`Some(None)`: clear owner) from reassignment (`Some(Some(id))`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCvData {
    pub name: Option<String>,
    pub firstname: Option<String>,
    pub age: Option<i32>,
    pub cin: Option<String>,
    pub job: Option<String>,
    pub path: Option<String>,
    pub skills: Option<Vec<i32>>,
    pub user: Option<Option<i32>>,
}

impl UpdateCvData {
    pub fn has_scalar_fields(&self) -> bool {
        self.name.is_some()
            || self.firstname.is_some()
            || self.age.is_some()
            || self.cin.is_some()
            || self.job.is_some()
            || self.path.is_some()
    }
}

/// Filter for the search listing. `age` matches exactly; `search_value`
/// OR-matches as a substring over name/firstname/job. Both combine with
/// the caller's visibility scope by AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CvFilter {
    pub age: Option<i32>,
    pub search_value: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeleteConfirmation {
    pub deleted: bool,
}

#[async_trait]
pub trait CvRepository: Send + Sync {
    async fn create(&self, owner_id: i32, data: CreateCvData)
        -> Result<CvInfo, CvRepositoryError>;

    async fn find_all(
        &self,
        principal: &Principal,
        relations: CvRelations,
        page: Option<PageRequest>,
    ) -> Result<Vec<CvInfo>, CvRepositoryError>;

    async fn find_with_filters(
        &self,
        principal: &Principal,
        filter: CvFilter,
    ) -> Result<Vec<CvInfo>, CvRepositoryError>;

    async fn find_one(
        &self,
        id: i32,
        relations: CvRelations,
    ) -> Result<Option<CvInfo>, CvRepositoryError>;

    async fn find_by_user(&self, user_id: i32) -> Result<Vec<CvInfo>, CvRepositoryError>;

    async fn find_by_skill(&self, skill_id: i32) -> Result<Vec<CvInfo>, CvRepositoryError>;

    async fn update(&self, id: i32, patch: UpdateCvData) -> Result<CvInfo, CvRepositoryError>;

    async fn update_skills(
        &self,
        id: i32,
        skill_ids: Vec<i32>,
    ) -> Result<CvInfo, CvRepositoryError>;

    async fn assign_to_user(&self, cv_id: i32, user_id: i32)
        -> Result<CvInfo, CvRepositoryError>;

    async fn remove_skill(
        &self,
        cv_id: i32,
        skill_id: i32,
    ) -> Result<CvInfo, CvRepositoryError>;

    async fn remove(&self, id: i32) -> Result<DeleteConfirmation, CvRepositoryError>;
}
