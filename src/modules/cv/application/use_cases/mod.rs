pub mod assign_cv;
pub mod create_cv;
pub mod delete_cv;
pub mod fetch_cvs;
pub mod fetch_related_cvs;
pub mod fetch_single_cv;
pub mod manage_cv_skills;
pub mod update_cv;
