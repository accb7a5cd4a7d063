//! Declarative scene description handed to the external renderer.
//!
//! Trees are rebuilt from scratch on every parameter change and carry no
//! identity-affecting state outside the node `key`: the renderer matches
//! keys across rebuilds to reuse its underlying objects, so a node keeps the
//! same key whenever it still means the same thing.

use glam::Vec3;

use crate::constants::{
    AMBIENT_INTENSITY, CENTER_METALNESS, CENTER_ROUGHNESS, CENTER_SPHERE_RATIO, DEFAULT_COLORS,
    DEFAULT_ROTATE_Y, DEFAULT_SCALE, DEFAULT_SPACING, DEFAULT_SPHERE_SIZE, FILL_LIGHT_INTENSITY,
    KEY_LIGHT_INTENSITY, SPHERE_METALNESS, SPHERE_ROUGHNESS,
};
use crate::params::ParamSnapshot;
use crate::platform::{platform_label, DeviceCategory};

#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    Group,
    Sphere { radius: f32 },
    AmbientLight { intensity: f32 },
    DirectionalLight { direction: Vec3, intensity: f32 },
    ControlPanel { platform: &'static str },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: u32,
    pub metalness: f32,
    pub roughness: f32,
    pub wireframe: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: 0xffffff,
            metalness: 0.0,
            roughness: 1.0,
            wireframe: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
    /// Stable identity token, unique among siblings.
    pub key: String,
    pub kind: NodeKind,
    pub transform: Transform,
    pub material: Material,
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    pub fn new(key: &str, kind: NodeKind) -> Self {
        Self {
            key: key.to_string(),
            kind,
            transform: Transform::default(),
            material: Material::default(),
            children: Vec::new(),
        }
    }
}

/// Build the ordered root-level node sequence for the current parameters.
///
/// Pure: identical inputs produce trees with identical key sets and
/// ordering, differing only in leaf attribute values. Missing or mistyped
/// parameters fall back to the scene defaults rather than failing.
pub fn build_scene(params: &ParamSnapshot, category: DeviceCategory) -> Vec<SceneNode> {
    let rotation = Vec3::new(
        params.number("rotateX").unwrap_or(0.0),
        params.number("rotateY").unwrap_or(DEFAULT_ROTATE_Y),
        params.number("rotateZ").unwrap_or(0.0),
    );
    let scale = params.number("scale").unwrap_or(DEFAULT_SCALE);
    let spacing = params.number("spacing").unwrap_or(DEFAULT_SPACING);
    let radius = params.number("sphereSize").unwrap_or(DEFAULT_SPHERE_SIZE);
    let wireframe = params.boolean("wireframe").unwrap_or(false);

    let corner = |key: &str, x: f32, y: f32, color_key: &str, default_color: u32| {
        let mut node = SceneNode::new(key, NodeKind::Sphere { radius });
        node.transform.position = Vec3::new(x, y, 0.0);
        node.material = Material {
            color: params.color(color_key).unwrap_or(default_color),
            metalness: SPHERE_METALNESS,
            roughness: SPHERE_ROUGHNESS,
            wireframe,
        };
        node
    };

    let mut group = SceneNode::new("group", NodeKind::Group);
    group.transform.rotation = rotation;
    group.transform.scale = Vec3::splat(scale);
    group.children = vec![
        corner("sphere1", spacing, spacing, "color1", DEFAULT_COLORS[0]),
        corner("sphere2", -spacing, spacing, "color2", DEFAULT_COLORS[1]),
        corner("sphere3", spacing, -spacing, "color3", DEFAULT_COLORS[2]),
        corner("sphere4", -spacing, -spacing, "color4", DEFAULT_COLORS[3]),
        center_sphere(radius, wireframe),
    ];

    vec![
        SceneNode::new(
            "ambient",
            NodeKind::AmbientLight {
                intensity: AMBIENT_INTENSITY,
            },
        ),
        SceneNode::new(
            "keyLight",
            NodeKind::DirectionalLight {
                direction: Vec3::new(1.0, 1.0, 1.0),
                intensity: KEY_LIGHT_INTENSITY,
            },
        ),
        SceneNode::new(
            "fillLight",
            NodeKind::DirectionalLight {
                direction: Vec3::new(-1.0, -1.0, -1.0),
                intensity: FILL_LIGHT_INTENSITY,
            },
        ),
        group,
        SceneNode::new(
            "config",
            NodeKind::ControlPanel {
                platform: platform_label(category),
            },
        ),
    ]
}

fn center_sphere(radius: f32, wireframe: bool) -> SceneNode {
    let mut node = SceneNode::new(
        "centerSphere",
        NodeKind::Sphere {
            radius: radius * CENTER_SPHERE_RATIO,
        },
    );
    node.material = Material {
        color: 0xffffff,
        metalness: CENTER_METALNESS,
        roughness: CENTER_ROUGHNESS,
        wireframe,
    };
    node
}
