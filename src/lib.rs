//! SVGR Core - Shared Library for the SVGR Web and Mobile Apps
//!
//! Static tables (image types, presets, languages), upload validation,
//! SVG introspection, and the conversion state coordinator. Everything is
//! re-exported flat so the apps import straight from the crate root.

pub mod config;
pub mod constants;
pub mod converter;
pub mod i18n;
pub mod presets;
pub mod svg;
pub mod validation;

pub use config::{ConfigError, FirebaseConfig, RevenueCatConfig, SvgrAppConfig};
pub use constants::{
    SupportedImageType, APP_DOMAIN, APP_NAME, COMPANY_NAME, DEFAULT_API_URL, QUALITY_DEFAULT,
    QUALITY_MAX, QUALITY_MIN, SUPPORTED_IMAGE_TYPES,
};
pub use converter::{
    ClientError, ConversionClient, ConversionPhase, ConvertData, ConvertOutcome, ConvertRequest,
    ConvertResponse, ImageConverter, ImageConverterState, CONVERSION_FAILED,
};
pub use i18n::{
    hreflang_for, language_by_code, language_hreflang_map, supported_language_codes,
    LanguageInfo, DEFAULT_LANGUAGE, DEFAULT_NAMESPACE, I18N_NAMESPACES, SUPPORTED_LANGUAGES,
};
pub use presets::{default_preset, preset_by_id, ConversionPreset, CONVERSION_PRESETS, DEFAULT_PRESET_ID};
pub use svg::{svg_dimensions, svg_file_size, svg_file_size_kb, SvgDimensions, DEFAULT_SVG_DIMENSIONS};
pub use validation::{
    accepted_file_extensions, base_name, image_type_display_name, is_valid_image_type,
    supported_formats_display, validate_image_file, ValidationResult, MAX_FILE_SIZE_BYTES,
    MAX_FILE_SIZE_MB,
};

pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");
