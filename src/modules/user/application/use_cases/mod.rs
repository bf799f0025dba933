pub mod delete_user;
pub mod detach_cv;
pub mod fetch_user_cvs;
pub mod fetch_users;
pub mod top_users;
pub mod update_user;
