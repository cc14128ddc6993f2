//! Application Constants - Branding, Quality Bounds, Image Types

use serde::{Deserialize, Serialize};

pub const APP_NAME: &str = "SVGR";
pub const APP_DOMAIN: &str = "svgr.app";
pub const COMPANY_NAME: &str = "Sudobility Inc.";
pub const DEFAULT_API_URL: &str = "https://api.svgr.app";

/// Lowest conversion quality (1 = fastest, roughest trace)
pub const QUALITY_MIN: u8 = 1;
/// Highest conversion quality
pub const QUALITY_MAX: u8 = 10;
pub const QUALITY_DEFAULT: u8 = 5;

/// MIME types accepted for conversion, in display order.
pub const SUPPORTED_IMAGE_TYPES: [&str; 5] = [
    "image/png",
    "image/jpeg",
    "image/webp",
    "image/bmp",
    "image/gif",
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SupportedImageType {
    #[serde(rename = "image/png")]
    Png,
    #[serde(rename = "image/jpeg")]
    Jpeg,
    #[serde(rename = "image/webp")]
    Webp,
    #[serde(rename = "image/bmp")]
    Bmp,
    #[serde(rename = "image/gif")]
    Gif,
}

impl SupportedImageType {
    /// Every supported type, matching the order of `SUPPORTED_IMAGE_TYPES`.
    pub const ALL: [SupportedImageType; 5] = [
        SupportedImageType::Png,
        SupportedImageType::Jpeg,
        SupportedImageType::Webp,
        SupportedImageType::Bmp,
        SupportedImageType::Gif,
    ];

    pub fn mime_type(self) -> &'static str {
        match self {
            SupportedImageType::Png => "image/png",
            SupportedImageType::Jpeg => "image/jpeg",
            SupportedImageType::Webp => "image/webp",
            SupportedImageType::Bmp => "image/bmp",
            SupportedImageType::Gif => "image/gif",
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn from_mime(mime_type: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.mime_type() == mime_type)
    }

    pub fn subtype(self) -> &'static str {
        let mime = self.mime_type();
        &mime[mime.find('/').map_or(0, |i| i + 1)..]
    }

    pub fn display_name(self) -> String {
        self.subtype().to_uppercase()
    }

    /// File extensions (with leading dot) an upload picker should accept.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            SupportedImageType::Png => &[".png"],
            SupportedImageType::Jpeg => &[".jpg", ".jpeg"],
            SupportedImageType::Webp => &[".webp"],
            SupportedImageType::Bmp => &[".bmp"],
            SupportedImageType::Gif => &[".gif"],
        }
    }
}
