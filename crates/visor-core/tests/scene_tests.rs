// Scene builder determinism and key-stability tests.

use visor_core::{
    build_scene, default_params, ColorSpec, DeviceCategory, NodeKind, ParamValue, SceneNode,
};

fn keys(nodes: &[SceneNode]) -> Vec<&str> {
    nodes.iter().map(|n| n.key.as_str()).collect()
}

fn find<'a>(nodes: &'a [SceneNode], key: &str) -> &'a SceneNode {
    nodes.iter().find(|n| n.key == key).expect("node present")
}

#[test]
fn root_and_group_key_layout() {
    let snap = default_params().snapshot();
    let roots = build_scene(&snap, DeviceCategory::Desktop);
    assert_eq!(
        keys(&roots),
        ["ambient", "keyLight", "fillLight", "group", "config"]
    );
    let group = find(&roots, "group");
    assert_eq!(
        keys(&group.children),
        ["sphere1", "sphere2", "sphere3", "sphere4", "centerSphere"]
    );
}

#[test]
fn rebuild_with_identical_inputs_is_structurally_identical() {
    let snap = default_params().snapshot();
    let a = build_scene(&snap, DeviceCategory::VisionPro);
    let b = build_scene(&snap, DeviceCategory::VisionPro);
    assert_eq!(a, b);
}

#[test]
fn color_change_touches_only_attribute_values() {
    let mut store = default_params();
    let before = build_scene(&store.snapshot(), DeviceCategory::Desktop);
    store.set(&[("color1", ParamValue::Color(ColorSpec::Hex("#123456".into())))]);
    let after = build_scene(&store.snapshot(), DeviceCategory::Desktop);

    // Same keys and ordering at every level.
    assert_eq!(keys(&before), keys(&after));
    assert_eq!(
        keys(&find(&before, "group").children),
        keys(&find(&after, "group").children)
    );
    // Only the recolored sphere's material differs.
    assert_eq!(find(&find(&after, "group").children, "sphere1").material.color, 0x123456);
    assert_eq!(
        find(&find(&before, "group").children, "sphere2"),
        find(&find(&after, "group").children, "sphere2")
    );
}

#[test]
fn hex_and_packed_color_params_build_the_same_tree() {
    let mut hex_store = default_params();
    hex_store.set(&[("color2", ParamValue::Color(ColorSpec::Hex("#4ecdc4".into())))]);
    let mut packed_store = default_params();
    packed_store.set(&[("color2", ParamValue::Color(ColorSpec::Packed(0x4ecdc4)))]);
    assert_eq!(
        build_scene(&hex_store.snapshot(), DeviceCategory::Tablet),
        build_scene(&packed_store.snapshot(), DeviceCategory::Tablet)
    );
}

#[test]
fn group_transform_follows_rotation_and_scale_params() {
    let mut store = default_params();
    store.set(&[
        ("rotateX", ParamValue::Number(0.25)),
        ("rotateY", ParamValue::Number(-1.5)),
        ("scale", ParamValue::Number(1.8)),
    ]);
    let roots = build_scene(&store.snapshot(), DeviceCategory::Desktop);
    let group = find(&roots, "group");
    assert_eq!(group.transform.rotation.x, 0.25);
    assert_eq!(group.transform.rotation.y, -1.5);
    assert_eq!(group.transform.scale, glam::Vec3::splat(1.8));
}

#[test]
fn wireframe_toggles_every_sphere_material() {
    let mut store = default_params();
    store.set(&[("wireframe", ParamValue::Bool(true))]);
    let roots = build_scene(&store.snapshot(), DeviceCategory::Desktop);
    let group = find(&roots, "group");
    assert!(group
        .children
        .iter()
        .all(|sphere| sphere.material.wireframe));
}

#[test]
fn center_sphere_is_smaller_and_white() {
    let snap = default_params().snapshot();
    let roots = build_scene(&snap, DeviceCategory::Desktop);
    let group = find(&roots, "group");
    let center = find(&group.children, "centerSphere");
    match center.kind {
        NodeKind::Sphere { radius } => assert!((radius - 0.8 * 0.6).abs() < 1e-6),
        _ => panic!("centerSphere must be a sphere"),
    }
    assert_eq!(center.material.color, 0xffffff);
}

#[test]
fn control_panel_carries_the_platform_label() {
    let snap = default_params().snapshot();
    let roots = build_scene(&snap, DeviceCategory::VisionPro);
    match find(&roots, "config").kind {
        NodeKind::ControlPanel { platform } => assert_eq!(platform, "Vision Pro"),
        _ => panic!("config must be a control panel"),
    }
}

#[test]
fn missing_params_fall_back_to_defaults() {
    // A snapshot with none of the scene keys still yields the full tree.
    let empty = visor_core::ParamStore::new(Vec::<(String, ParamValue)>::new()).snapshot();
    let roots = build_scene(&empty, DeviceCategory::Desktop);
    assert_eq!(
        keys(&roots),
        ["ambient", "keyLight", "fillLight", "group", "config"]
    );
    let group = find(&roots, "group");
    assert_eq!(group.transform.rotation.y, 0.5); // default rotateY
    assert_eq!(
        find(&group.children, "sphere1").material.color,
        0xff6b6b
    );
}
