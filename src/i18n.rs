//! Localization Tables - Supported Languages and SEO Tags
//!
//! `code` is the key used for routing and translation lookups. `hreflang`
//! is what goes into SEO metadata; the two only differ for the Chinese
//! script variants.

use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LanguageInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
    pub hreflang: &'static str,
}

const fn lang(
    code: &'static str,
    name: &'static str,
    native_name: &'static str,
    hreflang: &'static str,
) -> LanguageInfo {
    LanguageInfo { code, name, native_name, hreflang }
}

pub static SUPPORTED_LANGUAGES: [LanguageInfo; 16] = [
    lang("en", "English", "English", "en"),
    lang("zh", "Chinese (Simplified)", "中文(简体)", "zh-Hans"),
    lang("zh-hant", "Chinese (Traditional)", "中文(繁體)", "zh-Hant"),
    lang("ja", "Japanese", "日本語", "ja"),
    lang("ko", "Korean", "한국어", "ko"),
    lang("es", "Spanish", "Español", "es"),
    lang("fr", "French", "Français", "fr"),
    lang("de", "German", "Deutsch", "de"),
    lang("it", "Italian", "Italiano", "it"),
    lang("pt", "Portuguese", "Português", "pt"),
    lang("ru", "Russian", "Русский", "ru"),
    lang("ar", "Arabic", "العربية", "ar"),
    lang("sv", "Swedish", "Svenska", "sv"),
    lang("th", "Thai", "ไทย", "th"),
    lang("uk", "Ukrainian", "Українська", "uk"),
    lang("vi", "Vietnamese", "Tiếng Việt", "vi"),
];

pub const DEFAULT_LANGUAGE: &str = "en";

pub const I18N_NAMESPACES: [&str; 2] = ["svgr", "auth"];

pub const DEFAULT_NAMESPACE: &str = "svgr";

/// Language codes in table order.
pub fn supported_language_codes() -> Vec<&'static str> {
    SUPPORTED_LANGUAGES.iter().map(|l| l.code).collect()
}

pub fn language_by_code(code: &str) -> Option<&'static LanguageInfo> {
    SUPPORTED_LANGUAGES.iter().find(|l| l.code == code)
}

pub fn hreflang_for(code: &str) -> Option<&'static str> {
    language_by_code(code).map(|l| l.hreflang)
}

/// Internal language code -> hreflang value.
pub fn language_hreflang_map() -> HashMap<&'static str, &'static str> {
    SUPPORTED_LANGUAGES.iter().map(|l| (l.code, l.hreflang)).collect()
}
