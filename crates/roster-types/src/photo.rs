/// Hard cap for member photos.
pub const MAX_PHOTO_BYTES: u64 = 5 * 1024 * 1024;

/// Declared content types accepted for member photos.
pub const ALLOWED_PHOTO_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "image/webp"];

/// Checks a picked file's declared type and size. Runs in the browser when a
/// file is selected and again at the upload choke point, so an invalid file
/// never produces a network call.
pub fn validate_photo(content_type: &str, size: u64) -> Result<(), String> {
    let declared = content_type.trim().to_ascii_lowercase();
    if !ALLOWED_PHOTO_TYPES.contains(&declared.as_str()) {
        return Err(format!(
            "Unsupported file type {declared}. Use a JPEG, PNG, GIF or WebP image."
        ));
    }
    if size > MAX_PHOTO_BYTES {
        return Err("Photo is larger than 5 MB.".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_images_up_to_the_cap() {
        assert!(validate_photo("image/jpeg", 1024).is_ok());
        assert!(validate_photo("image/png", MAX_PHOTO_BYTES).is_ok());
        assert!(validate_photo(" IMAGE/WEBP ", 1).is_ok());
    }

    #[test]
    fn rejects_non_image_types() {
        let reason = validate_photo("text/plain", 10).expect_err("must reject");
        assert!(reason.contains("text/plain"));
    }

    #[test]
    fn rejects_oversized_files() {
        assert!(validate_photo("image/png", MAX_PHOTO_BYTES + 1).is_err());
    }
}
