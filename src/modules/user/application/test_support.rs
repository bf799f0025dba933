//! In-memory `UserRepository` stub shared by use-case tests.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::cv::domain::entities::CvInfo;
use crate::user::application::ports::outgoing::{
    CreateUserData, UpdateUserData, UserRepository, UserRepositoryError,
};
use crate::user::domain::entities::{UserCredentials, UserCvCount, UserInfo};

#[derive(Default)]
struct State {
    users: BTreeMap<i32, UserInfo>,
    by_username: HashMap<String, UserInfo>,
    credentials: HashMap<String, UserCredentials>,
    user_cvs: HashMap<i32, Vec<CvInfo>>,
    most_cvs: Vec<UserCvCount>,
    created: Option<CreateUserData>,
    created_user: Option<UserInfo>,
    updates: Vec<(i32, UpdateUserData)>,
    update_result: Option<UserInfo>,
    removed: Vec<i32>,
    detachments: Vec<(i32, i32)>,
    error: Option<UserRepositoryError>,
}

#[derive(Clone, Default)]
pub struct MockUserRepository {
    state: Arc<Mutex<State>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_user(&self, user: UserInfo) {
        let mut state = self.state.lock().unwrap();
        state.by_username.insert(user.username.clone(), user.clone());
        state.users.insert(user.id, user);
    }

    pub fn insert_user_lookup(&self, username: &str, user: UserInfo) {
        self.state
            .lock()
            .unwrap()
            .by_username
            .insert(username.to_string(), user);
    }

    pub fn insert_credentials(&self, credentials: UserCredentials) {
        self.state
            .lock()
            .unwrap()
            .credentials
            .insert(credentials.email.clone(), credentials);
    }

    pub fn set_user_cvs(&self, user_id: i32, cvs: Vec<CvInfo>) {
        self.state.lock().unwrap().user_cvs.insert(user_id, cvs);
    }

    pub fn set_most_cvs(&self, ranking: Vec<UserCvCount>) {
        self.state.lock().unwrap().most_cvs = ranking;
    }

    pub fn set_created_user(&self, user: UserInfo) {
        self.state.lock().unwrap().created_user = Some(user);
    }

    pub fn set_update_result(&self, user: UserInfo) {
        self.state.lock().unwrap().update_result = Some(user);
    }

    pub fn set_error(&self, error: UserRepositoryError) {
        self.state.lock().unwrap().error = Some(error);
    }

    pub fn last_created(&self) -> Option<CreateUserData> {
        self.state.lock().unwrap().created.clone()
    }

    pub fn updates(&self) -> Vec<(i32, UpdateUserData)> {
        self.state.lock().unwrap().updates.clone()
    }

    pub fn removed(&self) -> Vec<i32> {
        self.state.lock().unwrap().removed.clone()
    }

    pub fn detachments(&self) -> Vec<(i32, i32)> {
        self.state.lock().unwrap().detachments.clone()
    }

    fn take_error(&self) -> Option<UserRepositoryError> {
        self.state.lock().unwrap().error.take()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create(&self, data: CreateUserData) -> Result<UserInfo, UserRepositoryError> {
        if let Some(err) = self.take_error() {
            return Err(err);
        }
        let mut state = self.state.lock().unwrap();
        let result = state.created_user.clone().unwrap_or(UserInfo {
            id: 1,
            username: data.username.clone(),
            email: data.email.clone(),
            role: data.role.clone(),
            is_admin: false,
            cvs: None,
        });
        state.created = Some(data);
        Ok(result)
    }

    async fn find_all(&self, with_cvs: bool) -> Result<Vec<UserInfo>, UserRepositoryError> {
        if let Some(err) = self.take_error() {
            return Err(err);
        }
        let state = self.state.lock().unwrap();
        let mut users: Vec<UserInfo> = state.users.values().cloned().collect();
        if with_cvs {
            for user in users.iter_mut() {
                user.cvs = Some(state.user_cvs.get(&user.id).cloned().unwrap_or_default());
            }
        }
        Ok(users)
    }

    async fn find_one(
        &self,
        id: i32,
        with_cvs: bool,
    ) -> Result<Option<UserInfo>, UserRepositoryError> {
        if let Some(err) = self.take_error() {
            return Err(err);
        }
        let state = self.state.lock().unwrap();
        let mut user = state.users.get(&id).cloned();
        if with_cvs {
            if let Some(user) = user.as_mut() {
                user.cvs = Some(state.user_cvs.get(&id).cloned().unwrap_or_default());
            }
        }
        Ok(user)
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserInfo>, UserRepositoryError> {
        if let Some(err) = self.take_error() {
            return Err(err);
        }
        Ok(self.state.lock().unwrap().by_username.get(username).cloned())
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, UserRepositoryError> {
        if let Some(err) = self.take_error() {
            return Err(err);
        }
        Ok(self.state.lock().unwrap().credentials.get(email).cloned())
    }

    async fn find_user_cvs(&self, user_id: i32) -> Result<Vec<CvInfo>, UserRepositoryError> {
        if let Some(err) = self.take_error() {
            return Err(err);
        }
        let state = self.state.lock().unwrap();
        if !state.users.contains_key(&user_id) && !state.user_cvs.contains_key(&user_id) {
            return Err(UserRepositoryError::UserNotFound(user_id));
        }
        Ok(state.user_cvs.get(&user_id).cloned().unwrap_or_default())
    }

    async fn find_users_with_most_cvs(
        &self,
        limit: u64,
    ) -> Result<Vec<UserCvCount>, UserRepositoryError> {
        if let Some(err) = self.take_error() {
            return Err(err);
        }
        let mut ranking = self.state.lock().unwrap().most_cvs.clone();
        ranking.truncate(limit as usize);
        Ok(ranking)
    }

    async fn update(
        &self,
        id: i32,
        patch: UpdateUserData,
    ) -> Result<UserInfo, UserRepositoryError> {
        if let Some(err) = self.take_error() {
            return Err(err);
        }
        let mut state = self.state.lock().unwrap();
        state.updates.push((id, patch));
        if let Some(result) = state.update_result.clone() {
            return Ok(result);
        }
        state
            .users
            .get(&id)
            .cloned()
            .ok_or(UserRepositoryError::UserNotFound(id))
    }

    async fn remove(&self, id: i32) -> Result<(), UserRepositoryError> {
        if let Some(err) = self.take_error() {
            return Err(err);
        }
        let mut state = self.state.lock().unwrap();
        if state.users.remove(&id).is_none() {
            return Err(UserRepositoryError::UserNotFound(id));
        }
        state.removed.push(id);
        Ok(())
    }

    async fn remove_cv_from_user(
        &self,
        user_id: i32,
        cv_id: i32,
    ) -> Result<(), UserRepositoryError> {
        if let Some(err) = self.take_error() {
            return Err(err);
        }
        self.state.lock().unwrap().detachments.push((user_id, cv_id));
        Ok(())
    }
}
