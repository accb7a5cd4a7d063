//! Environment classification for spatial-computing browsers.
//!
//! Signals are injected as a plain record rather than read from a live
//! global, so every classification branch is unit-testable. The web crate
//! fills the record from `navigator.userAgent` once at startup.

/// Device category a session runs under. Derived once at startup and held
/// immutable for the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceCategory {
    VisionPro,
    Tablet,
    Desktop,
}

/// Ambient environment signals used for classification.
#[derive(Clone, Debug, Default)]
pub struct EnvSignals {
    pub user_agent: String,
}

impl EnvSignals {
    pub fn from_user_agent(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
        }
    }

    /// True for an explicit visionOS marker, or for the desktop-Safari UA
    /// shape visionOS Safari shares with macOS Safari (see [`classify`]).
    pub fn has_vision_marker(&self) -> bool {
        self.user_agent.contains("VisionOS")
            || (self.has_desktop_safari_shape() && !self.has_tablet_marker())
    }

    /// `Macintosh`, `AppleWebKit`, `Safari` appearing in that order.
    pub fn has_desktop_safari_shape(&self) -> bool {
        find_after(&self.user_agent, "Macintosh", 0)
            .and_then(|i| find_after(&self.user_agent, "AppleWebKit", i))
            .and_then(|i| find_after(&self.user_agent, "Safari", i))
            .is_some()
    }

    pub fn has_tablet_marker(&self) -> bool {
        let ua = &self.user_agent;
        ua.contains("iPad") || ua.contains("iPhone") || ua.contains("iPod")
    }

    /// High-end tablet tier, used only to pick a framebuffer scale.
    pub fn is_high_end_tablet(&self) -> bool {
        self.user_agent.contains("iPad Pro")
    }
}

fn find_after(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    haystack
        .get(from..)
        .and_then(|s| s.find(needle))
        .map(|i| from + i + needle.len())
}

/// Classify the ambient environment into a device category.
///
/// Pure and infallible; ambiguous signals fall through to `Desktop`.
/// Known imprecision: visionOS Safari reports a desktop-Safari-shaped user
/// agent, so a macOS Safari with no mobile markers also classifies as
/// `VisionPro`. Callers that need a hard guarantee should pass an explicit
/// preset instead of relying on the probe.
pub fn classify(signals: &EnvSignals) -> DeviceCategory {
    if signals.has_vision_marker() {
        DeviceCategory::VisionPro
    } else if signals.has_tablet_marker() {
        DeviceCategory::Tablet
    } else {
        DeviceCategory::Desktop
    }
}

/// Human-readable platform name for info panels.
pub fn platform_label(category: DeviceCategory) -> &'static str {
    match category {
        DeviceCategory::VisionPro => "Vision Pro",
        DeviceCategory::Tablet => "iPadOS",
        DeviceCategory::Desktop => "Desktop WebXR",
    }
}
