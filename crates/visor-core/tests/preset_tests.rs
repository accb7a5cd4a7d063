// Preset table and framebuffer-scale resolution tests.

use visor_core::{
    optimal_framebuffer_scale, preset_for, resolve, DeviceCategory, EnvSignals, PresetChoice,
    PresetConfig, PresetError,
};

#[test]
fn builtin_table_framebuffer_scales() {
    assert_eq!(
        resolve(PresetChoice::Named("visionPro".into()))
            .unwrap()
            .framebuffer_scale,
        0.9
    );
    assert_eq!(
        resolve(PresetChoice::Named("iPad".into()))
            .unwrap()
            .framebuffer_scale,
        0.8
    );
    assert_eq!(
        resolve(PresetChoice::Named("desktop".into()))
            .unwrap()
            .framebuffer_scale,
        1.0
    );
}

#[test]
fn vision_pro_preset_fields() {
    let preset = preset_for(DeviceCategory::VisionPro);
    assert!(preset.inject_styles);
    assert_eq!(preset.cursor_style, "crosshair");
    assert!(preset.disable_text_selection);
}

#[test]
fn desktop_preset_is_minimal() {
    let preset = preset_for(DeviceCategory::Desktop);
    assert!(!preset.inject_styles);
    assert_eq!(preset.cursor_style, "auto");
    assert!(!preset.disable_text_selection);
}

#[test]
fn unknown_name_is_an_error_not_a_default() {
    let err = resolve(PresetChoice::Named("bogus".into())).unwrap_err();
    assert_eq!(err, PresetError::UnknownPreset("bogus".into()));
}

#[test]
fn name_lookup_is_case_sensitive() {
    assert!(resolve(PresetChoice::Named("VisionPro".into())).is_err());
}

#[test]
fn custom_config_bypasses_the_table() {
    let custom = PresetConfig {
        inject_styles: true,
        framebuffer_scale: 0.5,
        cursor_style: "pointer".to_string(),
        disable_text_selection: false,
    };
    let resolved = resolve(PresetChoice::Custom(custom.clone())).unwrap();
    assert_eq!(resolved, custom);
}

#[test]
fn category_choice_matches_table() {
    let by_category = resolve(PresetChoice::Category(DeviceCategory::Tablet)).unwrap();
    assert_eq!(by_category, preset_for(DeviceCategory::Tablet));
}

#[test]
fn optimal_scale_per_hardware_tier() {
    let vision = EnvSignals::from_user_agent("Mozilla/5.0 (VisionOS) AppleWebKit Safari");
    assert_eq!(optimal_framebuffer_scale(&vision), 0.9);

    let ipad_pro = EnvSignals::from_user_agent("Mozilla/5.0 (iPad Pro; CPU OS 17_0) AppleWebKit");
    assert_eq!(optimal_framebuffer_scale(&ipad_pro), 0.85);

    let ipad = EnvSignals::from_user_agent("Mozilla/5.0 (iPad; CPU OS 17_0) AppleWebKit");
    assert_eq!(optimal_framebuffer_scale(&ipad), 0.75);

    let desktop = EnvSignals::from_user_agent("Mozilla/5.0 (Windows NT 10.0) Chrome/120.0");
    assert_eq!(optimal_framebuffer_scale(&desktop), 1.0);
}
