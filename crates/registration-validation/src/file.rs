//! File name validation

use once_cell::sync::Lazy;
use regex::Regex;

/// Image extensions accepted for uploads
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];

static IMAGE_FILE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.(jpg|jpeg|png|gif)$").unwrap());

/// Checks that a file name ends with an image extension (case-insensitive).
///
/// Only the name is inspected; content and MIME type are not.
pub fn has_image_extension(filename: &str) -> bool {
    IMAGE_FILE_REGEX.is_match(filename)
}

/// Text after the last '.', if any
pub fn file_extension(filename: &str) -> Option<&str> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
}
