pub mod user_repository;

pub use user_repository::{
    CreateUserData, UpdateUserData, UserRepository, UserRepositoryError,
};
