pub mod cv_repo_postgres;
pub mod sea_orm_entity;
