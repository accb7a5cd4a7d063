//! Color parameter normalization.

/// A color as supplied by a caller: either a `#rrggbb` string (the form
/// control-panel color inputs produce) or an already-packed `0xRRGGBB`
/// integer. Both normalize to the packed form via [`ColorSpec::packed`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorSpec {
    Hex(String),
    Packed(u32),
}

impl ColorSpec {
    /// Normalized `0xRRGGBB` value used by node materials. Unparseable hex
    /// degrades to white.
    pub fn packed(&self) -> u32 {
        match self {
            ColorSpec::Packed(color) => color & 0x00ff_ffff,
            ColorSpec::Hex(s) => parse_hex(s).unwrap_or(0xffffff),
        }
    }
}

impl From<&str> for ColorSpec {
    fn from(s: &str) -> Self {
        ColorSpec::Hex(s.to_string())
    }
}

impl From<u32> for ColorSpec {
    fn from(color: u32) -> Self {
        ColorSpec::Packed(color)
    }
}

/// Parse `#rrggbb` (leading `#` optional) into a packed RGB value.
pub fn parse_hex(s: &str) -> Option<u32> {
    let digits = s.trim().trim_start_matches('#');
    if digits.len() != 6 {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Format a packed RGB value as `#rrggbb`, the form color inputs expect.
pub fn format_hex(color: u32) -> String {
    format!("#{:06x}", color & 0x00ff_ffff)
}
