use std::f32::consts::FRAC_PI_3;

// Shared tuning constants for the interactive sphere scene.

// Interaction
pub const TILT_RANGE: f32 = FRAC_PI_3; // max X tilt from pointer position, radians

// Default parameter values
pub const DEFAULT_ROTATE_Y: f32 = 0.5;
pub const DEFAULT_SCALE: f32 = 1.5;
pub const DEFAULT_SPACING: f32 = 1.2;
pub const DEFAULT_SPHERE_SIZE: f32 = 0.8;

// Default sphere palette, packed 0xRRGGBB
pub const DEFAULT_COLORS: [u32; 4] = [
    0xff6b6b, // coral
    0x4ecdc4, // teal
    0x45b7d1, // sky blue
    0xf7b731, // amber
];

// Materials
pub const SPHERE_METALNESS: f32 = 0.3;
pub const SPHERE_ROUGHNESS: f32 = 0.4;
pub const CENTER_METALNESS: f32 = 0.6;
pub const CENTER_ROUGHNESS: f32 = 0.2;
pub const CENTER_SPHERE_RATIO: f32 = 0.6; // center sphere radius relative to the corners

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.6;
pub const KEY_LIGHT_INTENSITY: f32 = 0.8;
pub const FILL_LIGHT_INTENSITY: f32 = 0.3;

// Camera placement expected by the external renderer
pub const CAMERA_Z: f32 = 5.0;
