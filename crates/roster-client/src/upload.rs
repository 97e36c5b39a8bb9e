use roster_types::photo::validate_photo;

pub use roster_types::photo::{ALLOWED_PHOTO_TYPES, MAX_PHOTO_BYTES};

use crate::error::ApiError;

/// A photo picked for upload. Validated before any network I/O happens.
#[derive(Clone, Debug)]
pub struct PhotoUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl PhotoUpload {
    pub fn validate(&self) -> Result<(), ApiError> {
        validate_photo(&self.content_type, self.bytes.len() as u64)
            .map_err(|reason| ApiError::InvalidUpload { reason })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_type_maps_to_invalid_upload() {
        let photo = PhotoUpload {
            file_name: "notes.txt".into(),
            content_type: "text/plain".into(),
            bytes: vec![1, 2, 3],
        };
        let err = photo.validate().expect_err("must reject");
        assert!(matches!(err, ApiError::InvalidUpload { .. }));
        assert!(err.message().contains("text/plain"));
    }

    #[test]
    fn oversize_maps_to_invalid_upload() {
        let photo = PhotoUpload {
            file_name: "huge.png".into(),
            content_type: "image/png".into(),
            bytes: vec![0; MAX_PHOTO_BYTES as usize + 1],
        };
        assert!(photo.validate().is_err());
    }

    #[test]
    fn small_image_passes() {
        let photo = PhotoUpload {
            file_name: "avatar.jpg".into(),
            content_type: "image/jpeg".into(),
            bytes: vec![0; 64],
        };
        assert!(photo.validate().is_ok());
    }
}
