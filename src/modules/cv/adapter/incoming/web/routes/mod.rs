pub mod assign_cv;
pub mod create_cv;
pub mod cv_skills;
pub mod delete_cv;
pub mod get_cvs;
pub mod get_related_cvs;
pub mod get_single_cv;
pub mod search_cvs;
pub mod update_cv;
pub mod upload_cv;

pub use assign_cv::assign_cv_handler;
pub use create_cv::create_cv_handler;
pub use cv_skills::{remove_cv_skill_handler, update_cv_skills_handler};
pub use delete_cv::delete_cv_handler;
pub use get_cvs::get_cvs_handler;
pub use get_related_cvs::{get_cvs_by_skill_handler, get_cvs_by_user_handler};
pub use get_single_cv::get_cv_by_id_handler;
pub use search_cvs::search_cvs_handler;
pub use update_cv::update_cv_handler;
pub use upload_cv::upload_cv_handler;
