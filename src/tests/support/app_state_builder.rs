use std::sync::Arc;

use super::stubs::Unwired;
use crate::auth::application::use_cases::login_user::ILoginUseCase;
use crate::auth::application::use_cases::signup_user::ISignupUseCase;
use crate::cv::application::use_cases::assign_cv::IAssignCvUseCase;
use crate::cv::application::use_cases::create_cv::ICreateCvUseCase;
use crate::cv::application::use_cases::delete_cv::IDeleteCvUseCase;
use crate::cv::application::use_cases::fetch_cvs::IFetchCvsUseCase;
use crate::cv::application::use_cases::fetch_related_cvs::IFetchRelatedCvsUseCase;
use crate::cv::application::use_cases::fetch_single_cv::IFetchSingleCvUseCase;
use crate::cv::application::use_cases::manage_cv_skills::IManageCvSkillsUseCase;
use crate::cv::application::use_cases::update_cv::IUpdateCvUseCase;
use crate::files::application::ports::outgoing::FileStore;
use crate::skill::application::use_cases::fetch_skills::IFetchSkillsUseCase;
use crate::skill::application::use_cases::manage_skills::IManageSkillsUseCase;
use crate::user::application::use_cases::delete_user::IDeleteUserUseCase;
use crate::user::application::use_cases::detach_cv::IDetachCvUseCase;
use crate::user::application::use_cases::fetch_user_cvs::IFetchUserCvsUseCase;
use crate::user::application::use_cases::fetch_users::IFetchUsersUseCase;
use crate::user::application::use_cases::top_users::ITopUsersUseCase;
use crate::user::application::use_cases::update_user::IUpdateUserUseCase;
use crate::AppState;

/// Builds an `AppState` where every collaborator is an `Unwired` stub
/// unless a test overrides it.
pub struct TestAppStateBuilder {
    state: AppState,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        let unwired = Arc::new(Unwired);
        Self {
            state: AppState {
                create_cv_use_case: unwired.clone(),
                fetch_cvs_use_case: unwired.clone(),
                fetch_single_cv_use_case: unwired.clone(),
                fetch_related_cvs_use_case: unwired.clone(),
                update_cv_use_case: unwired.clone(),
                manage_cv_skills_use_case: unwired.clone(),
                assign_cv_use_case: unwired.clone(),
                delete_cv_use_case: unwired.clone(),
                fetch_users_use_case: unwired.clone(),
                fetch_user_cvs_use_case: unwired.clone(),
                top_users_use_case: unwired.clone(),
                update_user_use_case: unwired.clone(),
                delete_user_use_case: unwired.clone(),
                detach_cv_use_case: unwired.clone(),
                fetch_skills_use_case: unwired.clone(),
                manage_skills_use_case: unwired.clone(),
                signup_use_case: unwired.clone(),
                login_use_case: unwired.clone(),
                file_store: unwired,
            },
        }
    }

    pub fn with_create_cv(mut self, use_case: Arc<dyn ICreateCvUseCase>) -> Self {
        self.state.create_cv_use_case = use_case;
        self
    }

    pub fn with_fetch_cvs(mut self, use_case: Arc<dyn IFetchCvsUseCase>) -> Self {
        self.state.fetch_cvs_use_case = use_case;
        self
    }

    pub fn with_fetch_single_cv(mut self, use_case: Arc<dyn IFetchSingleCvUseCase>) -> Self {
        self.state.fetch_single_cv_use_case = use_case;
        self
    }

    pub fn with_fetch_related_cvs(
        mut self,
        use_case: Arc<dyn IFetchRelatedCvsUseCase>,
    ) -> Self {
        self.state.fetch_related_cvs_use_case = use_case;
        self
    }

    pub fn with_update_cv(mut self, use_case: Arc<dyn IUpdateCvUseCase>) -> Self {
        self.state.update_cv_use_case = use_case;
        self
    }

    pub fn with_manage_cv_skills(mut self, use_case: Arc<dyn IManageCvSkillsUseCase>) -> Self {
        self.state.manage_cv_skills_use_case = use_case;
        self
    }

    pub fn with_assign_cv(mut self, use_case: Arc<dyn IAssignCvUseCase>) -> Self {
        self.state.assign_cv_use_case = use_case;
        self
    }

    pub fn with_delete_cv(mut self, use_case: Arc<dyn IDeleteCvUseCase>) -> Self {
        self.state.delete_cv_use_case = use_case;
        self
    }

    pub fn with_fetch_users(mut self, use_case: Arc<dyn IFetchUsersUseCase>) -> Self {
        self.state.fetch_users_use_case = use_case;
        self
    }

    pub fn with_fetch_user_cvs(mut self, use_case: Arc<dyn IFetchUserCvsUseCase>) -> Self {
        self.state.fetch_user_cvs_use_case = use_case;
        self
    }

    pub fn with_top_users(mut self, use_case: Arc<dyn ITopUsersUseCase>) -> Self {
        self.state.top_users_use_case = use_case;
        self
    }

    pub fn with_update_user(mut self, use_case: Arc<dyn IUpdateUserUseCase>) -> Self {
        self.state.update_user_use_case = use_case;
        self
    }

    pub fn with_delete_user(mut self, use_case: Arc<dyn IDeleteUserUseCase>) -> Self {
        self.state.delete_user_use_case = use_case;
        self
    }

    pub fn with_detach_cv(mut self, use_case: Arc<dyn IDetachCvUseCase>) -> Self {
        self.state.detach_cv_use_case = use_case;
        self
    }

    pub fn with_fetch_skills(mut self, use_case: Arc<dyn IFetchSkillsUseCase>) -> Self {
        self.state.fetch_skills_use_case = use_case;
        self
    }

    pub fn with_manage_skills(mut self, use_case: Arc<dyn IManageSkillsUseCase>) -> Self {
        self.state.manage_skills_use_case = use_case;
        self
    }

    pub fn with_signup(mut self, use_case: Arc<dyn ISignupUseCase>) -> Self {
        self.state.signup_use_case = use_case;
        self
    }

    pub fn with_login(mut self, use_case: Arc<dyn ILoginUseCase>) -> Self {
        self.state.login_use_case = use_case;
        self
    }

    pub fn with_file_store(mut self, store: Arc<dyn FileStore>) -> Self {
        self.state.file_store = store;
        self
    }

    pub fn build(self) -> AppState {
        self.state
    }
}
