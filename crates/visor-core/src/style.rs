//! Idempotent stylesheet application and safe-area probing.

/// Destination for injected style blocks. The web crate implements this
/// against `document.head`; tests use [`MemoryStyleSink`].
pub trait StyleSink {
    fn contains(&self, id: &str) -> bool;
    fn insert(&mut self, id: &str, css: &str);
}

/// Insert `css` under `id` unless a block with that id is already present.
/// Returns true when the block was inserted.
pub fn apply_style_once(sink: &mut dyn StyleSink, id: &str, css: &str) -> bool {
    if sink.contains(id) {
        log::debug!("style {id:?} already present; skipping");
        return false;
    }
    sink.insert(id, css);
    true
}

/// In-memory sink preserving insertion order.
#[derive(Debug, Default)]
pub struct MemoryStyleSink {
    pub blocks: Vec<(String, String)>,
}

impl StyleSink for MemoryStyleSink {
    fn contains(&self, id: &str) -> bool {
        self.blocks.iter().any(|(block_id, _)| block_id == id)
    }

    fn insert(&mut self, id: &str, css: &str) {
        self.blocks.push((id.to_string(), css.to_string()));
    }
}

/// Element id under which the spatial stylesheet is injected.
pub const SPATIAL_STYLE_ID: &str = "visor-spatial-styles";

/// The spatial-browser stylesheet: safe-area padding so system chrome never
/// clips the UI, overscroll and text-size locks, gaze-cursor feedback, and
/// selection suppression during interactions.
pub fn spatial_stylesheet() -> &'static str {
    r#"
    /* Safe area insets: keep content clear of system chrome */
    html, body {
      padding: env(safe-area-inset-top) env(safe-area-inset-right)
               env(safe-area-inset-bottom) env(safe-area-inset-left);
      margin: 0;
      width: 100%;
      height: 100%;
    }

    /* No rubber-banding on canvas interactions */
    body {
      overscroll-behavior: none;
    }

    canvas {
      overscroll-behavior: none;
      display: block;
      width: 100%;
      height: 100%;
      -webkit-touch-callout: none;
    }

    /* Lock text size; spatial Safari auto-inflates it on window resize */
    html {
      -webkit-text-size-adjust: 100%;
    }

    /* Visual feedback for eye-gaze interaction */
    canvas:hover {
      cursor: crosshair;
    }

    /* No text selection during interactions */
    body {
      -webkit-user-select: none;
      user-select: none;
    }
    "#
}

/// Platform-reserved screen margins, pixels. Read-only snapshot; goes stale
/// if the viewport changes and is not revalidated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SafeAreaInsets {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

/// Parse a computed `"<n>px"` style value. Anything unparseable is 0, which
/// matches how the safe-area variables degrade on unsupporting browsers.
pub fn parse_px(value: &str) -> u32 {
    value
        .trim()
        .strip_suffix("px")
        .and_then(|n| n.trim().parse::<u32>().ok())
        .unwrap_or(0)
}
