pub mod disk_store;

pub use disk_store::{cv_file_name, image_file_name, DiskFileStore};
