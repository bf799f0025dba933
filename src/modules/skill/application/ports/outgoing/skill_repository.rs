use async_trait::async_trait;
use serde::Serialize;

use crate::cv::domain::entities::CvInfo;
use crate::skill::domain::entities::{SkillInfo, SkillPopularity};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillRepositoryError {
    #[error("Skill with id {0} not found")]
    SkillNotFound(i32),
    #[error("CV with id {0} not found")]
    CvNotFound(i32),
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSkillData {
    pub designation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateSkillData {
    pub designation: Option<String>,
}

/// A skill with its referencing CVs attached when the caller asked for
/// the relation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillWithCvs {
    pub id: i32,
    pub designation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvs: Option<Vec<CvInfo>>,
}

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn create(&self, data: CreateSkillData) -> Result<SkillInfo, SkillRepositoryError>;

    async fn find_all(&self, with_cvs: bool) -> Result<Vec<SkillWithCvs>, SkillRepositoryError>;

    async fn find_one(
        &self,
        id: i32,
        with_cvs: bool,
    ) -> Result<SkillWithCvs, SkillRepositoryError>;

    async fn find_popular(
        &self,
        limit: u64,
    ) -> Result<Vec<SkillPopularity>, SkillRepositoryError>;

    async fn find_by_cv(&self, cv_id: i32) -> Result<Vec<SkillInfo>, SkillRepositoryError>;

    async fn update(
        &self,
        id: i32,
        patch: UpdateSkillData,
    ) -> Result<SkillInfo, SkillRepositoryError>;

    async fn remove(&self, id: i32) -> Result<(), SkillRepositoryError>;
}
