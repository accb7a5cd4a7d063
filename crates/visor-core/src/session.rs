//! One-shot startup resolution: probe, resolve, apply styles.

use crate::platform::{classify, DeviceCategory, EnvSignals};
use crate::preset::{resolve, PresetChoice, PresetConfig, PresetError};
use crate::style::{apply_style_once, spatial_stylesheet, StyleSink, SPATIAL_STYLE_ID};

/// Everything the host needs from startup: the probed category and the
/// resolved preset. The framebuffer scale travels from here into renderer
/// and XR session setup as an explicit value; nothing is published as
/// ambient global state.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub category: DeviceCategory,
    pub preset: PresetConfig,
}

/// Resolve the session configuration. Called once by the host at startup;
/// repeated calls are safe since style application is idempotent.
///
/// An explicit `choice` wins over the probed category. When the resolved
/// preset asks for style injection, the spatial stylesheet is applied
/// through `sink`.
pub fn initialize(
    signals: &EnvSignals,
    choice: Option<PresetChoice>,
    sink: &mut dyn StyleSink,
) -> Result<SessionConfig, PresetError> {
    let category = classify(signals);
    let preset = match choice {
        Some(c) => resolve(c)?,
        None => resolve(PresetChoice::Category(category))?,
    };
    if preset.inject_styles && apply_style_once(sink, SPATIAL_STYLE_ID, spatial_stylesheet()) {
        log::info!("applied spatial stylesheet for {category:?}");
    }
    Ok(SessionConfig { category, preset })
}
