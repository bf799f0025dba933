pub mod auth;
pub mod cv;
pub mod files;
pub mod skill;
pub mod user;
