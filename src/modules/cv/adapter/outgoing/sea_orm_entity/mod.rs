pub mod cv_skills;
pub mod cvs;
