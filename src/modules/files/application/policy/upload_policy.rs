pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Whitelist for the generic upload endpoint. CV uploads are not
/// filtered: a résumé can be a PDF, a docx, anything.
const ALLOWED_IMAGE_TYPES: [&str; 3] = ["image/png", "image/jpg", "image/jpeg"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadPolicyError {
    #[error("File exceeds the {MAX_UPLOAD_BYTES} byte limit")]
    TooLarge,
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),
}

pub fn check_image_upload(mime: &str, size: usize) -> Result<(), UploadPolicyError> {
    if !ALLOWED_IMAGE_TYPES.contains(&mime) {
        return Err(UploadPolicyError::UnsupportedMediaType(mime.to_string()));
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(UploadPolicyError::TooLarge);
    }
    Ok(())
}
