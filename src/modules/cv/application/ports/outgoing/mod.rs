pub mod cv_repository;

pub use cv_repository::{
    CreateCvData, CvFilter, CvRepository, CvRepositoryError, DeleteConfirmation, UpdateCvData,
};
