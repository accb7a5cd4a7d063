//! Declarative descriptors for the generic control-panel collaborator.
//!
//! The panel renders one input per descriptor and writes edits back through
//! `ParamStore::set`. Descriptors whose key is missing from the store are
//! skipped by consumers, not treated as an error.

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlKind {
    Range { min: f32, max: f32, step: f32 },
    Color,
    Boolean,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlDesc {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: ControlKind,
}

/// Control set matching [`default_params`](crate::params::default_params).
pub fn default_controls() -> Vec<ControlDesc> {
    use std::f32::consts::PI;
    let range = |min, max, step| ControlKind::Range { min, max, step };
    vec![
        ControlDesc { key: "rotateX", label: "Rotation X", kind: range(-PI, PI, 0.01) },
        ControlDesc { key: "rotateY", label: "Rotation Y", kind: range(-PI, PI, 0.01) },
        ControlDesc { key: "rotateZ", label: "Rotation Z", kind: range(-PI, PI, 0.01) },
        ControlDesc { key: "scale", label: "Scale", kind: range(0.5, 2.0, 0.1) },
        ControlDesc { key: "spacing", label: "Spacing", kind: range(0.5, 3.0, 0.1) },
        ControlDesc { key: "sphereSize", label: "Sphere Size", kind: range(0.3, 1.5, 0.1) },
        ControlDesc { key: "color1", label: "Color 1", kind: ControlKind::Color },
        ControlDesc { key: "color2", label: "Color 2", kind: ControlKind::Color },
        ControlDesc { key: "color3", label: "Color 3", kind: ControlKind::Color },
        ControlDesc { key: "color4", label: "Color 4", kind: ControlKind::Color },
        ControlDesc { key: "wireframe", label: "Wireframe", kind: ControlKind::Boolean },
    ]
}
