pub mod sea_orm_entity;
pub mod skill_repo_postgres;
