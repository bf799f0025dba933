//! Placeholder use-case implementations for route tests. Each one fails
//! loudly if a handler under test reaches a collaborator the test did not
//! wire explicitly.

use async_trait::async_trait;

use crate::auth::application::use_cases::login_user::{
    ILoginUseCase, LoginError, LoginRequest, LoginResponse,
};
use crate::auth::application::use_cases::signup_user::{ISignupUseCase, SignupData, SignupError};
use crate::cv::application::ports::outgoing::{
    CreateCvData, CvFilter, DeleteConfirmation, UpdateCvData,
};
use crate::cv::application::use_cases::assign_cv::{AssignCvError, IAssignCvUseCase};
use crate::cv::application::use_cases::create_cv::{CreateCvError, ICreateCvUseCase};
use crate::cv::application::use_cases::delete_cv::{DeleteCvError, IDeleteCvUseCase};
use crate::cv::application::use_cases::fetch_cvs::{FetchCvsError, IFetchCvsUseCase};
use crate::cv::application::use_cases::fetch_related_cvs::{
    FetchRelatedCvsError, IFetchRelatedCvsUseCase,
};
use crate::cv::application::use_cases::fetch_single_cv::{
    FetchSingleCvError, IFetchSingleCvUseCase,
};
use crate::cv::application::use_cases::manage_cv_skills::{
    IManageCvSkillsUseCase, ManageCvSkillsError,
};
use crate::cv::application::use_cases::update_cv::{IUpdateCvUseCase, UpdateCvError};
use crate::cv::domain::entities::{CvInfo, CvRelations};
use crate::files::application::ports::outgoing::{FileStore, FileStoreError};
use crate::shared::pagination::PageRequest;
use crate::shared::policy::Principal;
use crate::skill::application::ports::outgoing::{
    CreateSkillData, SkillWithCvs, UpdateSkillData,
};
use crate::skill::application::use_cases::fetch_skills::{FetchSkillsError, IFetchSkillsUseCase};
use crate::skill::application::use_cases::manage_skills::{
    IManageSkillsUseCase, ManageSkillsError,
};
use crate::skill::domain::entities::{SkillInfo, SkillPopularity};
use crate::user::application::ports::outgoing::UpdateUserData;
use crate::user::application::use_cases::delete_user::{DeleteUserError, IDeleteUserUseCase};
use crate::user::application::use_cases::detach_cv::{DetachCvError, IDetachCvUseCase};
use crate::user::application::use_cases::fetch_user_cvs::{
    FetchUserCvsError, IFetchUserCvsUseCase,
};
use crate::user::application::use_cases::fetch_users::{FetchUsersError, IFetchUsersUseCase};
use crate::user::application::use_cases::top_users::{ITopUsersUseCase, TopUsersError};
use crate::user::application::use_cases::update_user::{IUpdateUserUseCase, UpdateUserError};
use crate::user::domain::entities::{UserCvCount, UserInfo};

const UNWIRED: &str = "use case not wired in this test";

pub struct Unwired;

#[async_trait]
impl ICreateCvUseCase for Unwired {
    async fn execute(
        &self,
        _principal: &Principal,
        _data: CreateCvData,
    ) -> Result<CvInfo, CreateCvError> {
        Err(CreateCvError::RepositoryError(UNWIRED.to_string()))
    }
}

#[async_trait]
impl IFetchCvsUseCase for Unwired {
    async fn all(
        &self,
        _principal: &Principal,
        _relations: CvRelations,
        _page: Option<PageRequest>,
    ) -> Result<Vec<CvInfo>, FetchCvsError> {
        Err(FetchCvsError::RepositoryError(UNWIRED.to_string()))
    }

    async fn search(
        &self,
        _principal: &Principal,
        _filter: CvFilter,
    ) -> Result<Vec<CvInfo>, FetchCvsError> {
        Err(FetchCvsError::RepositoryError(UNWIRED.to_string()))
    }
}

#[async_trait]
impl IFetchSingleCvUseCase for Unwired {
    async fn execute(
        &self,
        _id: i32,
        _relations: CvRelations,
    ) -> Result<Option<CvInfo>, FetchSingleCvError> {
        Err(FetchSingleCvError::RepositoryError(UNWIRED.to_string()))
    }
}

#[async_trait]
impl IFetchRelatedCvsUseCase for Unwired {
    async fn by_user(&self, _user_id: i32) -> Result<Vec<CvInfo>, FetchRelatedCvsError> {
        Err(FetchRelatedCvsError::RepositoryError(UNWIRED.to_string()))
    }

    async fn by_skill(&self, _skill_id: i32) -> Result<Vec<CvInfo>, FetchRelatedCvsError> {
        Err(FetchRelatedCvsError::RepositoryError(UNWIRED.to_string()))
    }
}

#[async_trait]
impl IUpdateCvUseCase for Unwired {
    async fn execute(&self, _id: i32, _patch: UpdateCvData) -> Result<CvInfo, UpdateCvError> {
        Err(UpdateCvError::RepositoryError(UNWIRED.to_string()))
    }
}

#[async_trait]
impl IManageCvSkillsUseCase for Unwired {
    async fn replace(
        &self,
        _cv_id: i32,
        _skill_ids: Vec<i32>,
    ) -> Result<CvInfo, ManageCvSkillsError> {
        Err(ManageCvSkillsError::RepositoryError(UNWIRED.to_string()))
    }

    async fn remove(&self, _cv_id: i32, _skill_id: i32) -> Result<CvInfo, ManageCvSkillsError> {
        Err(ManageCvSkillsError::RepositoryError(UNWIRED.to_string()))
    }
}

#[async_trait]
impl IAssignCvUseCase for Unwired {
    async fn execute(&self, _cv_id: i32, _user_id: i32) -> Result<CvInfo, AssignCvError> {
        Err(AssignCvError::RepositoryError(UNWIRED.to_string()))
    }
}

#[async_trait]
impl IDeleteCvUseCase for Unwired {
    async fn execute(&self, _id: i32) -> Result<DeleteConfirmation, DeleteCvError> {
        Err(DeleteCvError::RepositoryError(UNWIRED.to_string()))
    }
}

#[async_trait]
impl IFetchUsersUseCase for Unwired {
    async fn all(&self, _with_cvs: bool) -> Result<Vec<UserInfo>, FetchUsersError> {
        Err(FetchUsersError::RepositoryError(UNWIRED.to_string()))
    }

    async fn one(
        &self,
        _id: i32,
        _with_cvs: bool,
    ) -> Result<Option<UserInfo>, FetchUsersError> {
        Err(FetchUsersError::RepositoryError(UNWIRED.to_string()))
    }
}

#[async_trait]
impl IFetchUserCvsUseCase for Unwired {
    async fn execute(&self, _user_id: i32) -> Result<Vec<CvInfo>, FetchUserCvsError> {
        Err(FetchUserCvsError::RepositoryError(UNWIRED.to_string()))
    }
}

#[async_trait]
impl ITopUsersUseCase for Unwired {
    async fn execute(&self, _limit: u64) -> Result<Vec<UserCvCount>, TopUsersError> {
        Err(TopUsersError::RepositoryError(UNWIRED.to_string()))
    }
}

#[async_trait]
impl IUpdateUserUseCase for Unwired {
    async fn execute(
        &self,
        _id: i32,
        _patch: UpdateUserData,
    ) -> Result<UserInfo, UpdateUserError> {
        Err(UpdateUserError::RepositoryError(UNWIRED.to_string()))
    }
}

#[async_trait]
impl IDeleteUserUseCase for Unwired {
    async fn execute(&self, _id: i32) -> Result<(), DeleteUserError> {
        Err(DeleteUserError::RepositoryError(UNWIRED.to_string()))
    }
}

#[async_trait]
impl IDetachCvUseCase for Unwired {
    async fn execute(&self, _user_id: i32, _cv_id: i32) -> Result<(), DetachCvError> {
        Err(DetachCvError::RepositoryError(UNWIRED.to_string()))
    }
}

#[async_trait]
impl IFetchSkillsUseCase for Unwired {
    async fn all(&self, _with_cvs: bool) -> Result<Vec<SkillWithCvs>, FetchSkillsError> {
        Err(FetchSkillsError::RepositoryError(UNWIRED.to_string()))
    }

    async fn one(&self, _id: i32, _with_cvs: bool) -> Result<SkillWithCvs, FetchSkillsError> {
        Err(FetchSkillsError::RepositoryError(UNWIRED.to_string()))
    }

    async fn popular(&self, _limit: u64) -> Result<Vec<SkillPopularity>, FetchSkillsError> {
        Err(FetchSkillsError::RepositoryError(UNWIRED.to_string()))
    }

    async fn by_cv(&self, _cv_id: i32) -> Result<Vec<SkillInfo>, FetchSkillsError> {
        Err(FetchSkillsError::RepositoryError(UNWIRED.to_string()))
    }
}

#[async_trait]
impl IManageSkillsUseCase for Unwired {
    async fn create(&self, _data: CreateSkillData) -> Result<SkillInfo, ManageSkillsError> {
        Err(ManageSkillsError::RepositoryError(UNWIRED.to_string()))
    }

    async fn update(
        &self,
        _id: i32,
        _patch: UpdateSkillData,
    ) -> Result<SkillInfo, ManageSkillsError> {
        Err(ManageSkillsError::RepositoryError(UNWIRED.to_string()))
    }

    async fn remove(&self, _id: i32) -> Result<(), ManageSkillsError> {
        Err(ManageSkillsError::RepositoryError(UNWIRED.to_string()))
    }
}

#[async_trait]
impl ISignupUseCase for Unwired {
    async fn execute(&self, _data: SignupData) -> Result<UserInfo, SignupError> {
        Err(SignupError::RepositoryError(UNWIRED.to_string()))
    }
}

#[async_trait]
impl ILoginUseCase for Unwired {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginResponse, LoginError> {
        Err(LoginError::QueryError(UNWIRED.to_string()))
    }
}

#[async_trait]
impl FileStore for Unwired {
    async fn store(
        &self,
        _subdir: &str,
        _file_name: &str,
        _bytes: &[u8],
    ) -> Result<String, FileStoreError> {
        Err(FileStoreError::Io(UNWIRED.to_string()))
    }
}
