//! In-memory `SkillRepository` stub shared by use-case tests.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::skill::application::ports::outgoing::{
    CreateSkillData, SkillRepository, SkillRepositoryError, SkillWithCvs, UpdateSkillData,
};
use crate::skill::domain::entities::{SkillInfo, SkillPopularity};

#[derive(Default)]
struct State {
    skills: BTreeMap<i32, SkillWithCvs>,
    by_cv: BTreeMap<i32, Vec<SkillInfo>>,
    popular: Vec<SkillPopularity>,
    created: Option<CreateSkillData>,
    updates: Vec<(i32, UpdateSkillData)>,
    removed: Vec<i32>,
    error: Option<SkillRepositoryError>,
}

#[derive(Clone, Default)]
pub struct MockSkillRepository {
    state: Arc<Mutex<State>>,
}

impl MockSkillRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_skill(&self, skill: SkillWithCvs) {
        self.state.lock().unwrap().skills.insert(skill.id, skill);
    }

    pub fn set_skills_by_cv(&self, cv_id: i32, skills: Vec<SkillInfo>) {
        self.state.lock().unwrap().by_cv.insert(cv_id, skills);
    }

    pub fn set_popular(&self, ranking: Vec<SkillPopularity>) {
        self.state.lock().unwrap().popular = ranking;
    }

    pub fn set_error(&self, error: SkillRepositoryError) {
        self.state.lock().unwrap().error = Some(error);
    }

    pub fn last_created(&self) -> Option<CreateSkillData> {
        self.state.lock().unwrap().created.clone()
    }

    pub fn updates(&self) -> Vec<(i32, UpdateSkillData)> {
        self.state.lock().unwrap().updates.clone()
    }

    pub fn removed(&self) -> Vec<i32> {
        self.state.lock().unwrap().removed.clone()
    }

    fn take_error(&self) -> Option<SkillRepositoryError> {
        self.state.lock().unwrap().error.take()
    }
}

#[async_trait]
impl SkillRepository for MockSkillRepository {
    async fn create(&self, data: CreateSkillData) -> Result<SkillInfo, SkillRepositoryError> {
        if let Some(err) = self.take_error() {
            return Err(err);
        }
        let mut state = self.state.lock().unwrap();
        let skill = SkillInfo {
            id: 1,
            designation: data.designation.clone(),
        };
        state.created = Some(data);
        Ok(skill)
    }

    async fn find_all(&self, with_cvs: bool) -> Result<Vec<SkillWithCvs>, SkillRepositoryError> {
        if let Some(err) = self.take_error() {
            return Err(err);
        }
        let state = self.state.lock().unwrap();
        let mut skills: Vec<SkillWithCvs> = state.skills.values().cloned().collect();
        if !with_cvs {
            for skill in skills.iter_mut() {
                skill.cvs = None;
            }
        }
        Ok(skills)
    }

    async fn find_one(
        &self,
        id: i32,
        with_cvs: bool,
    ) -> Result<SkillWithCvs, SkillRepositoryError> {
        if let Some(err) = self.take_error() {
            return Err(err);
        }
        let state = self.state.lock().unwrap();
        let mut skill = state
            .skills
            .get(&id)
            .cloned()
            .ok_or(SkillRepositoryError::SkillNotFound(id))?;
        if !with_cvs {
            skill.cvs = None;
        }
        Ok(skill)
    }

    async fn find_popular(
        &self,
        limit: u64,
    ) -> Result<Vec<SkillPopularity>, SkillRepositoryError> {
        if let Some(err) = self.take_error() {
            return Err(err);
        }
        let mut ranking = self.state.lock().unwrap().popular.clone();
        ranking.truncate(limit as usize);
        Ok(ranking)
    }

    async fn find_by_cv(&self, cv_id: i32) -> Result<Vec<SkillInfo>, SkillRepositoryError> {
        if let Some(err) = self.take_error() {
            return Err(err);
        }
        self.state
            .lock()
            .unwrap()
            .by_cv
            .get(&cv_id)
            .cloned()
            .ok_or(SkillRepositoryError::CvNotFound(cv_id))
    }

    async fn update(
        &self,
        id: i32,
        patch: UpdateSkillData,
    ) -> Result<SkillInfo, SkillRepositoryError> {
        if let Some(err) = self.take_error() {
            return Err(err);
        }
        let mut state = self.state.lock().unwrap();
        state.updates.push((id, patch.clone()));
        let skill = state
            .skills
            .get(&id)
            .cloned()
            .ok_or(SkillRepositoryError::SkillNotFound(id))?;
        Ok(SkillInfo {
            id: skill.id,
            designation: patch.designation.unwrap_or(skill.designation),
        })
    }

    async fn remove(&self, id: i32) -> Result<(), SkillRepositoryError> {
        if let Some(err) = self.take_error() {
            return Err(err);
        }
        let mut state = self.state.lock().unwrap();
        if state.skills.remove(&id).is_none() {
            return Err(SkillRepositoryError::SkillNotFound(id));
        }
        state.removed.push(id);
        Ok(())
    }
}
