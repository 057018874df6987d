use serde::{Deserialize, Serialize};

/// A display target on the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    /// The main tip text target.
    Tip,
    /// The bulleted rationale target.
    Rationale,
}

/// Capability the host page hands to the session for pushing display
/// updates. The session only calls into it; the surface's lifecycle belongs
/// to the host.
pub trait RenderSurface {
    /// Replace the text content of `zone`.
    fn set_text(&mut self, zone: Zone, text: &str);
    /// Remove every child element of `zone`.
    fn clear_children(&mut self, zone: Zone);
    /// Render `items` as a bulleted list under `zone`.
    fn render_list(&mut self, zone: Zone, items: &[String]);
}
