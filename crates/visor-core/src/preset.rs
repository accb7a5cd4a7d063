//! Preset table mapping device categories to display configuration.

use thiserror::Error;

use crate::platform::{classify, DeviceCategory, EnvSignals};

/// Fixed bundle of display/interaction configuration for one device
/// category. Never mutated after resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct PresetConfig {
    pub inject_styles: bool,
    pub framebuffer_scale: f32,
    pub cursor_style: String,
    pub disable_text_selection: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PresetError {
    #[error("unknown preset: {0:?}")]
    UnknownPreset(String),
}

/// How the caller selects a preset: by probed category, by table name, or
/// by supplying a config directly (bypassing the table).
#[derive(Clone, Debug)]
pub enum PresetChoice {
    Category(DeviceCategory),
    Named(String),
    Custom(PresetConfig),
}

/// Built-in preset for a device category.
pub fn preset_for(category: DeviceCategory) -> PresetConfig {
    match category {
        DeviceCategory::VisionPro => PresetConfig {
            inject_styles: true,
            framebuffer_scale: 0.9,
            cursor_style: "crosshair".to_string(),
            disable_text_selection: true,
        },
        DeviceCategory::Tablet => PresetConfig {
            inject_styles: true,
            framebuffer_scale: 0.8,
            cursor_style: "auto".to_string(),
            disable_text_selection: true,
        },
        DeviceCategory::Desktop => PresetConfig {
            inject_styles: false,
            framebuffer_scale: 1.0,
            cursor_style: "auto".to_string(),
            disable_text_selection: false,
        },
    }
}

/// Resolve a preset selection to a concrete config.
///
/// Unknown names are an explicit error; fallback policy belongs to the
/// caller, not to this table.
pub fn resolve(choice: PresetChoice) -> Result<PresetConfig, PresetError> {
    match choice {
        PresetChoice::Category(category) => Ok(preset_for(category)),
        PresetChoice::Named(name) => match category_by_name(&name) {
            Some(category) => Ok(preset_for(category)),
            None => Err(PresetError::UnknownPreset(name)),
        },
        PresetChoice::Custom(config) => Ok(config),
    }
}

fn category_by_name(name: &str) -> Option<DeviceCategory> {
    match name {
        "visionPro" => Some(DeviceCategory::VisionPro),
        "iPad" => Some(DeviceCategory::Tablet),
        "desktop" => Some(DeviceCategory::Desktop),
        _ => None,
    }
}

/// Recommended framebuffer scale for the probed hardware tier, finer-grained
/// than the three-entry preset table: high-end tablets can afford a larger
/// target than standard ones.
pub fn optimal_framebuffer_scale(signals: &EnvSignals) -> f32 {
    match classify(signals) {
        DeviceCategory::VisionPro => 0.9,
        DeviceCategory::Tablet => {
            if signals.is_high_end_tablet() {
                0.85
            } else {
                0.75
            }
        }
        DeviceCategory::Desktop => 1.0,
    }
}
