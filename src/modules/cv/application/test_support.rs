//! In-memory `CvRepository` stub shared by use-case tests.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::cv::application::ports::outgoing::{
    CreateCvData, CvFilter, CvRepository, CvRepositoryError, DeleteConfirmation, UpdateCvData,
};
use crate::cv::domain::entities::{CvInfo, CvRelations};
use crate::shared::pagination::PageRequest;
use crate::shared::policy::Principal;

#[derive(Debug, Clone, PartialEq)]
pub struct ListCall {
    pub principal_id: i32,
    pub is_admin: bool,
    pub relations: CvRelations,
    pub page: Option<(u64, u64)>,
}

#[derive(Default)]
struct State {
    cvs: BTreeMap<i32, CvInfo>,
    by_user: HashMap<i32, Vec<CvInfo>>,
    by_skill: HashMap<i32, Vec<CvInfo>>,
    list_result: Vec<CvInfo>,
    list_calls: Vec<ListCall>,
    filter_calls: Vec<CvFilter>,
    created: Option<(i32, CreateCvData)>,
    create_result: Option<CvInfo>,
    updates: Vec<(i32, UpdateCvData)>,
    skill_updates: Vec<(i32, Vec<i32>)>,
    assignments: Vec<(i32, i32)>,
    skill_removals: Vec<(i32, i32)>,
    removed: Vec<i32>,
    error: Option<CvRepositoryError>,
}

#[derive(Clone, Default)]
pub struct MockCvRepository {
    state: Arc<Mutex<State>>,
}

impl MockCvRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_cv(&self, cv: CvInfo) {
        self.state.lock().unwrap().cvs.insert(cv.id, cv);
    }

    pub fn set_list_result(&self, cvs: Vec<CvInfo>) {
        self.state.lock().unwrap().list_result = cvs;
    }

    pub fn set_cvs_by_user(&self, user_id: i32, cvs: Vec<CvInfo>) {
        self.state.lock().unwrap().by_user.insert(user_id, cvs);
    }

    pub fn set_cvs_by_skill(&self, skill_id: i32, cvs: Vec<CvInfo>) {
        self.state.lock().unwrap().by_skill.insert(skill_id, cvs);
    }

    pub fn set_create_result(&self, cv: CvInfo) {
        self.state.lock().unwrap().create_result = Some(cv);
    }

    pub fn set_error(&self, error: CvRepositoryError) {
        self.state.lock().unwrap().error = Some(error);
    }

    pub fn last_created(&self) -> Option<(i32, CreateCvData)> {
        self.state.lock().unwrap().created.clone()
    }

    pub fn list_calls(&self) -> Vec<ListCall> {
        self.state.lock().unwrap().list_calls.clone()
    }

    pub fn filter_calls(&self) -> Vec<CvFilter> {
        self.state.lock().unwrap().filter_calls.clone()
    }

    pub fn updates(&self) -> Vec<(i32, UpdateCvData)> {
        self.state.lock().unwrap().updates.clone()
    }

    pub fn skill_updates(&self) -> Vec<(i32, Vec<i32>)> {
        self.state.lock().unwrap().skill_updates.clone()
    }

    pub fn assignments(&self) -> Vec<(i32, i32)> {
        self.state.lock().unwrap().assignments.clone()
    }

    pub fn skill_removals(&self) -> Vec<(i32, i32)> {
        self.state.lock().unwrap().skill_removals.clone()
    }

    pub fn removed(&self) -> Vec<i32> {
        self.state.lock().unwrap().removed.clone()
    }

    fn take_error(&self) -> Option<CvRepositoryError> {
        self.state.lock().unwrap().error.take()
    }
}

#[async_trait]
impl CvRepository for MockCvRepository {
    async fn create(
        &self,
        owner_id: i32,
        data: CreateCvData,
    ) -> Result<CvInfo, CvRepositoryError> {
        if let Some(err) = self.take_error() {
            return Err(err);
        }
        let mut state = self.state.lock().unwrap();
        let result = state.create_result.clone().unwrap_or(CvInfo {
            id: 1,
            name: data.name.clone(),
            firstname: data.firstname.clone(),
            age: data.age,
            cin: data.cin.clone(),
            job: data.job.clone(),
            path: data.path.clone(),
            user_id: Some(owner_id),
            skills: None,
            user: None,
        });
        state.created = Some((owner_id, data));
        Ok(result)
    }

    async fn find_all(
        &self,
        principal: &Principal,
        relations: CvRelations,
        page: Option<PageRequest>,
    ) -> Result<Vec<CvInfo>, CvRepositoryError> {
        if let Some(err) = self.take_error() {
            return Err(err);
        }
        let mut state = self.state.lock().unwrap();
        state.list_calls.push(ListCall {
            principal_id: principal.id,
            is_admin: principal.is_admin,
            relations,
            page: page.map(|p| (p.page, p.limit)),
        });
        Ok(state.list_result.clone())
    }

    async fn find_with_filters(
        &self,
        _principal: &Principal,
        filter: CvFilter,
    ) -> Result<Vec<CvInfo>, CvRepositoryError> {
        if let Some(err) = self.take_error() {
            return Err(err);
        }
        let mut state = self.state.lock().unwrap();
        state.filter_calls.push(filter);
        Ok(state.list_result.clone())
    }

    async fn find_one(
        &self,
        id: i32,
        _relations: CvRelations,
    ) -> Result<Option<CvInfo>, CvRepositoryError> {
        if let Some(err) = self.take_error() {
            return Err(err);
        }
        Ok(self.state.lock().unwrap().cvs.get(&id).cloned())
    }

    async fn find_by_user(&self, user_id: i32) -> Result<Vec<CvInfo>, CvRepositoryError> {
        if let Some(err) = self.take_error() {
            return Err(err);
        }
        self.state
            .lock()
            .unwrap()
            .by_user
            .get(&user_id)
            .cloned()
            .ok_or(CvRepositoryError::UserNotFound(user_id))
    }

    async fn find_by_skill(&self, skill_id: i32) -> Result<Vec<CvInfo>, CvRepositoryError> {
        if let Some(err) = self.take_error() {
            return Err(err);
        }
        self.state
            .lock()
            .unwrap()
            .by_skill
            .get(&skill_id)
            .cloned()
            .ok_or(CvRepositoryError::SkillNotFound(skill_id))
    }

    async fn update(&self, id: i32, patch: UpdateCvData) -> Result<CvInfo, CvRepositoryError> {
        if let Some(err) = self.take_error() {
            return Err(err);
        }
        let mut state = self.state.lock().unwrap();
        state.updates.push((id, patch));
        state
            .cvs
            .get(&id)
            .cloned()
            .ok_or(CvRepositoryError::CvNotFound(id))
    }

    async fn update_skills(
        &self,
        id: i32,
        skill_ids: Vec<i32>,
    ) -> Result<CvInfo, CvRepositoryError> {
        if let Some(err) = self.take_error() {
            return Err(err);
        }
        let mut state = self.state.lock().unwrap();
        state.skill_updates.push((id, skill_ids));
        state
            .cvs
            .get(&id)
            .cloned()
            .ok_or(CvRepositoryError::CvNotFound(id))
    }

    async fn assign_to_user(
        &self,
        cv_id: i32,
        user_id: i32,
    ) -> Result<CvInfo, CvRepositoryError> {
        if let Some(err) = self.take_error() {
            return Err(err);
        }
        let mut state = self.state.lock().unwrap();
        state.assignments.push((cv_id, user_id));
        state
            .cvs
            .get(&cv_id)
            .cloned()
            .ok_or(CvRepositoryError::CvNotFound(cv_id))
    }

    async fn remove_skill(
        &self,
        cv_id: i32,
        skill_id: i32,
    ) -> Result<CvInfo, CvRepositoryError> {
        if let Some(err) = self.take_error() {
            return Err(err);
        }
        let mut state = self.state.lock().unwrap();
        state.skill_removals.push((cv_id, skill_id));
        state
            .cvs
            .get(&cv_id)
            .cloned()
            .ok_or(CvRepositoryError::CvNotFound(cv_id))
    }

    async fn remove(&self, id: i32) -> Result<DeleteConfirmation, CvRepositoryError> {
        if let Some(err) = self.take_error() {
            return Err(err);
        }
        let mut state = self.state.lock().unwrap();
        if state.cvs.remove(&id).is_none() {
            return Err(CvRepositoryError::CvNotFound(id));
        }
        state.removed.push(id);
        Ok(DeleteConfirmation { deleted: true })
    }
}
