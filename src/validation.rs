//! Upload Validation - Ordered Rules, First Failure Wins
//!
//! Rules produce a diagnostic message or nothing.
//! The validator runs them in order and reports the first failure only.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::SupportedImageType;
use crate::svg::format_tenths;

pub const MAX_FILE_SIZE_MB: u64 = 10;
pub const MAX_FILE_SIZE_BYTES: u64 = MAX_FILE_SIZE_MB * 1024 * 1024;

const DEFAULT_BASE_NAME: &str = "converted";

/// `error` is `Some` exactly when `valid` is false.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn success() -> Self {
        Self { valid: true, error: None }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(error.into()),
        }
    }
}

/// A file the user picked, before upload.
#[derive(Debug, Clone, Copy)]
pub struct UploadCandidate<'a> {
    pub mime_type: &'a str,
    /// Signed so that bogus negative sizes from the host can be rejected.
    pub file_size: i64,
}

/// Upload rule trait - returns a user-facing message on failure
pub trait UploadRule {
    fn name(&self) -> &'static str;
    fn check(&self, input: &UploadCandidate<'_>) -> Option<String>;
}

// --- Concrete Rules ---

pub struct ImageTypeRule;

impl UploadRule for ImageTypeRule {
    fn name(&self) -> &'static str { "image_type" }

    fn check(&self, input: &UploadCandidate<'_>) -> Option<String> {
        if is_valid_image_type(input.mime_type) {
            return None;
        }

        let type_name = if input.mime_type.contains('/') {
            input.mime_type.split('/').nth(1).unwrap_or_default().to_uppercase()
        } else if input.mime_type.is_empty() {
            "empty".to_string()
        } else {
            input.mime_type.to_string()
        };

        Some(format!(
            "Unsupported file format \"{}\". Supported formats: {}.",
            type_name,
            supported_formats_display()
        ))
    }
}

pub struct EmptyFileRule;

impl UploadRule for EmptyFileRule {
    fn name(&self) -> &'static str { "empty_file" }

    fn check(&self, input: &UploadCandidate<'_>) -> Option<String> {
        (input.file_size <= 0).then(|| "File is empty.".to_string())
    }
}

pub struct MaxSizeRule;

impl UploadRule for MaxSizeRule {
    fn name(&self) -> &'static str { "max_size" }

    fn check(&self, input: &UploadCandidate<'_>) -> Option<String> {
        if input.file_size <= 0 || input.file_size as u64 <= MAX_FILE_SIZE_BYTES {
            return None;
        }
        let size_mb = input.file_size as f64 / (1024.0 * 1024.0);
        Some(format!(
            "File size ({} MB) exceeds the maximum allowed size of {} MB.",
            format_tenths(size_mb),
            MAX_FILE_SIZE_MB
        ))
    }
}

/// Runs the upload rules in declaration order
pub struct UploadValidator {
    rules: Vec<Box<dyn UploadRule + Send + Sync>>,
}

impl UploadValidator {
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(ImageTypeRule),
                Box::new(EmptyFileRule),
                Box::new(MaxSizeRule),
            ],
        }
    }

    pub fn validate(&self, input: &UploadCandidate<'_>) -> ValidationResult {
        for rule in &self.rules {
            if let Some(message) = rule.check(input) {
                debug!("upload rejected by {}: {}", rule.name(), message);
                return ValidationResult::failure(message);
            }
        }
        ValidationResult::success()
    }
}

impl Default for UploadValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks type, then emptiness, then the size cap (inclusive).
pub fn validate_image_file(mime_type: &str, file_size: i64) -> ValidationResult {
    UploadValidator::new().validate(&UploadCandidate { mime_type, file_size })
}

/// Exact, case-sensitive membership in `SUPPORTED_IMAGE_TYPES`.
pub fn is_valid_image_type(mime_type: &str) -> bool {
    SupportedImageType::from_mime(mime_type).is_some()
}

pub fn image_type_display_name(mime_type: &str) -> String {
    SupportedImageType::from_mime(mime_type)
        .map(SupportedImageType::display_name)
        .unwrap_or_else(|| "Unknown".to_string())
}

/// e.g. `"PNG, JPEG, WEBP, BMP, GIF"`
pub fn supported_formats_display() -> String {
    SupportedImageType::ALL
        .iter()
        .map(|t| t.display_name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Accept string for file pickers, e.g. `".png,.jpg,.jpeg,.webp,.bmp,.gif"`.
pub fn accepted_file_extensions() -> String {
    SupportedImageType::ALL
        .iter()
        .flat_map(|t| t.extensions().iter().copied())
        .collect::<Vec<_>>()
        .join(",")
}

/// Strips the final `.ext`; `"converted"` when no name is given.
pub fn base_name(filename: Option<&str>) -> String {
    match filename {
        None | Some("") => DEFAULT_BASE_NAME.to_string(),
        Some(name) => match name.rfind('.') {
            Some(dot) if dot + 1 < name.len() => name[..dot].to_string(),
            _ => name.to_string(),
        },
    }
}
