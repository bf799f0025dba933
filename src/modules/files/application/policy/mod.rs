pub mod upload_policy;

pub use upload_policy::{check_image_upload, UploadPolicyError, MAX_UPLOAD_BYTES};
