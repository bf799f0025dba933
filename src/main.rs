pub mod modules;
pub use modules::auth;
pub use modules::cv;
pub use modules::files;
pub use modules::skill;
pub use modules::user;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::security::BcryptHasher;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::services::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::use_cases::{
    login_user::{ILoginUseCase, LoginUseCase},
    signup_user::{ISignupUseCase, SignupUseCase},
};

use crate::cv::adapter::outgoing::cv_repo_postgres::CvRepoPostgres;
use crate::cv::application::use_cases::assign_cv::{AssignCvUseCase, IAssignCvUseCase};
use crate::cv::application::use_cases::create_cv::{CreateCvUseCase, ICreateCvUseCase};
use crate::cv::application::use_cases::delete_cv::{DeleteCvUseCase, IDeleteCvUseCase};
use crate::cv::application::use_cases::fetch_cvs::{FetchCvsUseCase, IFetchCvsUseCase};
use crate::cv::application::use_cases::fetch_related_cvs::{
    FetchRelatedCvsUseCase, IFetchRelatedCvsUseCase,
};
use crate::cv::application::use_cases::fetch_single_cv::{
    FetchSingleCvUseCase, IFetchSingleCvUseCase,
};
use crate::cv::application::use_cases::manage_cv_skills::{
    IManageCvSkillsUseCase, ManageCvSkillsUseCase,
};
use crate::cv::application::use_cases::update_cv::{IUpdateCvUseCase, UpdateCvUseCase};

use crate::files::adapter::outgoing::DiskFileStore;
use crate::files::application::ports::outgoing::FileStore;

use crate::skill::adapter::outgoing::skill_repo_postgres::SkillRepoPostgres;
use crate::skill::application::use_cases::fetch_skills::{
    FetchSkillsUseCase, IFetchSkillsUseCase,
};
use crate::skill::application::use_cases::manage_skills::{
    IManageSkillsUseCase, ManageSkillsUseCase,
};

use crate::user::adapter::outgoing::user_repo_postgres::UserRepoPostgres;
use crate::user::application::use_cases::delete_user::{DeleteUserUseCase, IDeleteUserUseCase};
use crate::user::application::use_cases::detach_cv::{DetachCvUseCase, IDetachCvUseCase};
use crate::user::application::use_cases::fetch_user_cvs::{
    FetchUserCvsUseCase, IFetchUserCvsUseCase,
};
use crate::user::application::use_cases::fetch_users::{FetchUsersUseCase, IFetchUsersUseCase};
use crate::user::application::use_cases::top_users::{ITopUsersUseCase, TopUsersUseCase};
use crate::user::application::use_cases::update_user::{IUpdateUserUseCase, UpdateUserUseCase};

use actix_web::{web, App, HttpServer};

use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub create_cv_use_case: Arc<dyn ICreateCvUseCase>,
    pub fetch_cvs_use_case: Arc<dyn IFetchCvsUseCase>,
    pub fetch_single_cv_use_case: Arc<dyn IFetchSingleCvUseCase>,
    pub fetch_related_cvs_use_case: Arc<dyn IFetchRelatedCvsUseCase>,
    pub update_cv_use_case: Arc<dyn IUpdateCvUseCase>,
    pub manage_cv_skills_use_case: Arc<dyn IManageCvSkillsUseCase>,
    pub assign_cv_use_case: Arc<dyn IAssignCvUseCase>,
    pub delete_cv_use_case: Arc<dyn IDeleteCvUseCase>,
    pub fetch_users_use_case: Arc<dyn IFetchUsersUseCase>,
    pub fetch_user_cvs_use_case: Arc<dyn IFetchUserCvsUseCase>,
    pub top_users_use_case: Arc<dyn ITopUsersUseCase>,
    pub update_user_use_case: Arc<dyn IUpdateUserUseCase>,
    pub delete_user_use_case: Arc<dyn IDeleteUserUseCase>,
    pub detach_cv_use_case: Arc<dyn IDetachCvUseCase>,
    pub fetch_skills_use_case: Arc<dyn IFetchSkillsUseCase>,
    pub manage_skills_use_case: Arc<dyn IManageSkillsUseCase>,
    pub signup_use_case: Arc<dyn ISignupUseCase>,
    pub login_use_case: Arc<dyn ILoginUseCase>,
    pub file_store: Arc<dyn FileStore>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Repositories
    let cv_repo = CvRepoPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepoPostgres::new(Arc::clone(&db_arc));
    let skill_repo = SkillRepoPostgres::new(Arc::clone(&db_arc));

    // Auth components
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let hasher = Arc::new(BcryptHasher::from_env());

    let signup_use_case = SignupUseCase::new(user_repo.clone(), hasher.clone());
    let login_use_case = LoginUseCase::new(
        user_repo.clone(),
        hasher,
        Arc::new(jwt_service.clone()),
    );

    // CV use cases
    let create_cv_use_case = CreateCvUseCase::new(cv_repo.clone(), user_repo.clone());
    let fetch_cvs_use_case = FetchCvsUseCase::new(cv_repo.clone());
    let fetch_single_cv_use_case = FetchSingleCvUseCase::new(cv_repo.clone());
    let fetch_related_cvs_use_case = FetchRelatedCvsUseCase::new(cv_repo.clone());
    let update_cv_use_case = UpdateCvUseCase::new(cv_repo.clone());
    let manage_cv_skills_use_case = ManageCvSkillsUseCase::new(cv_repo.clone());
    let assign_cv_use_case = AssignCvUseCase::new(cv_repo.clone());
    let delete_cv_use_case = DeleteCvUseCase::new(cv_repo);

    // User use cases
    let fetch_users_use_case = FetchUsersUseCase::new(user_repo.clone());
    let fetch_user_cvs_use_case = FetchUserCvsUseCase::new(user_repo.clone());
    let top_users_use_case = TopUsersUseCase::new(user_repo.clone());
    let update_user_use_case = UpdateUserUseCase::new(user_repo.clone());
    let delete_user_use_case = DeleteUserUseCase::new(user_repo.clone());
    let detach_cv_use_case = DetachCvUseCase::new(user_repo);

    // Skill use cases
    let fetch_skills_use_case = FetchSkillsUseCase::new(skill_repo.clone());
    let manage_skills_use_case = ManageSkillsUseCase::new(skill_repo);

    let state = AppState {
        create_cv_use_case: Arc::new(create_cv_use_case),
        fetch_cvs_use_case: Arc::new(fetch_cvs_use_case),
        fetch_single_cv_use_case: Arc::new(fetch_single_cv_use_case),
        fetch_related_cvs_use_case: Arc::new(fetch_related_cvs_use_case),
        update_cv_use_case: Arc::new(update_cv_use_case),
        manage_cv_skills_use_case: Arc::new(manage_cv_skills_use_case),
        assign_cv_use_case: Arc::new(assign_cv_use_case),
        delete_cv_use_case: Arc::new(delete_cv_use_case),
        fetch_users_use_case: Arc::new(fetch_users_use_case),
        fetch_user_cvs_use_case: Arc::new(fetch_user_cvs_use_case),
        top_users_use_case: Arc::new(top_users_use_case),
        update_user_use_case: Arc::new(update_user_use_case),
        delete_user_use_case: Arc::new(delete_user_use_case),
        detach_cv_use_case: Arc::new(detach_cv_use_case),
        fetch_skills_use_case: Arc::new(fetch_skills_use_case),
        manage_skills_use_case: Arc::new(manage_skills_use_case),
        signup_use_case: Arc::new(signup_use_case),
        login_use_case: Arc::new(login_use_case),
        file_store: Arc::new(DiskFileStore::from_env()),
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(crate::shared::api::json_config::custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::signup_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_handler);
    // CV: fixed segments before `{id}` so `search`/`upload` never parse as ids
    cfg.service(crate::cv::adapter::incoming::web::routes::search_cvs_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::upload_cv_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::get_cvs_by_user_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::get_cvs_by_skill_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::get_cvs_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::get_cv_by_id_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::create_cv_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::update_cv_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::update_cv_skills_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::assign_cv_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::remove_cv_skill_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::delete_cv_handler);
    // Users
    cfg.service(crate::user::adapter::incoming::web::routes::top_users_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::get_users_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::get_user_cvs_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::get_user_by_id_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::update_user_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::detach_cv_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::delete_user_handler);
    // Skills
    cfg.service(crate::skill::adapter::incoming::web::routes::popular_skills_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::get_skills_by_cv_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::get_skill_by_id_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::create_skill_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::update_skill_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::delete_skill_handler);
    // Files
    cfg.service(crate::files::adapter::incoming::web::routes::upload_file_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
