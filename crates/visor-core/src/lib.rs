//! Platform-adaptive configuration and scene description for spatial web
//! apps. Pure decision logic only; the rendering pipeline and the host
//! document live in the companion web crate and beyond.

pub mod color;
pub mod constants;
pub mod controls;
pub mod interaction;
pub mod params;
pub mod platform;
pub mod preset;
pub mod scene;
pub mod session;
pub mod style;

pub use color::*;
pub use controls::*;
pub use interaction::*;
pub use params::*;
pub use platform::*;
pub use preset::*;
pub use scene::*;
pub use session::*;
pub use style::*;
