pub mod get_skills;
pub mod manage_skills;
pub mod popular_skills;

pub use get_skills::{get_skill_by_id_handler, get_skills_by_cv_handler, get_skills_handler};
pub use manage_skills::{create_skill_handler, delete_skill_handler, update_skill_handler};
pub use popular_skills::popular_skills_handler;
