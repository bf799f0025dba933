pub mod delete_user;
pub mod detach_cv;
pub mod get_user_cvs;
pub mod get_users;
pub mod top_users;
pub mod update_user;

pub use delete_user::delete_user_handler;
pub use detach_cv::detach_cv_handler;
pub use get_user_cvs::get_user_cvs_handler;
pub use get_users::{get_user_by_id_handler, get_users_handler};
pub use top_users::top_users_handler;
pub use update_user::update_user_handler;
