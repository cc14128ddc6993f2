//! Conversion Presets - Named Quality/Background Bundles

use serde::Serialize;

use crate::constants::{QUALITY_DEFAULT, QUALITY_MAX, QUALITY_MIN};

pub type PresetId = &'static str;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConversionPreset {
    pub id: PresetId,
    pub name: &'static str,
    pub description: &'static str,
    pub quality: u8,
    pub transparent_bg: bool,
}

pub const DEFAULT_PRESET_ID: PresetId = "balanced";

pub static CONVERSION_PRESETS: [ConversionPreset; 4] = [
    ConversionPreset {
        id: "fast",
        name: "Fast",
        description: "Low quality for quick previews",
        quality: QUALITY_MIN + 1,
        transparent_bg: false,
    },
    ConversionPreset {
        id: "balanced",
        name: "Balanced",
        description: "Default settings for general use",
        quality: QUALITY_DEFAULT,
        transparent_bg: false,
    },
    ConversionPreset {
        id: "quality",
        name: "Quality",
        description: "High quality for final output",
        quality: QUALITY_MAX - 1,
        transparent_bg: false,
    },
    ConversionPreset {
        id: "transparent",
        name: "Transparent",
        description: "High quality with transparent background",
        quality: QUALITY_MAX - 1,
        transparent_bg: true,
    },
];

pub fn preset_by_id(id: &str) -> Option<&'static ConversionPreset> {
    CONVERSION_PRESETS.iter().find(|p| p.id == id)
}

/// The balanced preset.
pub fn default_preset() -> &'static ConversionPreset {
    // DEFAULT_PRESET_ID is the second table entry
    preset_by_id(DEFAULT_PRESET_ID).unwrap_or(&CONVERSION_PRESETS[1])
}
