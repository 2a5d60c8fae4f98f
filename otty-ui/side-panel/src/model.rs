use std::fmt;

use cursor_icon::CursorIcon;
use uuid::Uuid;

use crate::config::ResizableSide;

/// Stable identity of one mounted panel.
///
/// Minted once by the composition root that creates the panel and kept for
/// the panel's whole lifetime. Reconfiguring a panel never changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PanelId(Uuid);

impl PanelId {
    /// Mint a fresh random identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PanelId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Cursor feedback shown over the affordance strip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CursorHint {
    #[default]
    Neutral,
    /// Width is pinned at `min_width`; only growing is possible.
    AtMin,
    /// Width is pinned at `max_width`; only shrinking is possible.
    AtMax,
}

impl CursorHint {
    /// Derive the hint for `width` against the configured bounds.
    ///
    /// `AtMin` wins when both bounds coincide.
    pub fn for_width(width: f32, min_width: f32, max_width: f32) -> Self {
        if width == min_width {
            CursorHint::AtMin
        } else if width == max_width {
            CursorHint::AtMax
        } else {
            CursorHint::Neutral
        }
    }

    /// Platform cursor for a strip placed on `side`.
    ///
    /// At a bound the arrow points in the only direction the drag can
    /// still move the edge.
    pub fn cursor_icon(self, side: ResizableSide) -> CursorIcon {
        match (self, side) {
            (CursorHint::Neutral, _) => CursorIcon::ColResize,
            (CursorHint::AtMin, ResizableSide::Right)
            | (CursorHint::AtMax, ResizableSide::Left) => CursorIcon::EResize,
            (CursorHint::AtMin, ResizableSide::Left)
            | (CursorHint::AtMax, ResizableSide::Right) => CursorIcon::WResize,
        }
    }
}

/// Breakpoint gate outcome for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Collapsed,
}

/// Mutable resize state owned by a single controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeState {
    pub current_width: f32,
    pub cursor_hint: CursorHint,
}

/// Geometry reported back to the layout engine after a layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    pub visibility: Visibility,
    /// Rendered width; `0.0` when collapsed.
    pub width: f32,
    /// Always the available viewport height.
    pub height: f32,
    pub cursor_hint: CursorHint,
}

impl PanelLayout {
    pub fn is_collapsed(&self) -> bool {
        self.visibility == Visibility::Collapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_ids_are_unique_per_mint() {
        let first = PanelId::new();
        let second = PanelId::new();
        assert_ne!(first, second);
        assert_eq!(first.to_string().len(), 36);
    }

    #[test]
    fn cursor_hint_prefers_min_when_bounds_coincide() {
        assert_eq!(CursorHint::for_width(200.0, 200.0, 200.0), CursorHint::AtMin);
        assert_eq!(CursorHint::for_width(500.0, 200.0, 500.0), CursorHint::AtMax);
        assert_eq!(
            CursorHint::for_width(300.0, 200.0, 500.0),
            CursorHint::Neutral
        );
    }

    #[test]
    fn boundary_cursor_points_towards_remaining_direction() {
        use ResizableSide::{Left, Right};

        assert_eq!(CursorHint::Neutral.cursor_icon(Right), CursorIcon::ColResize);
        assert_eq!(CursorHint::AtMin.cursor_icon(Right), CursorIcon::EResize);
        assert_eq!(CursorHint::AtMax.cursor_icon(Right), CursorIcon::WResize);
        assert_eq!(CursorHint::AtMin.cursor_icon(Left), CursorIcon::WResize);
        assert_eq!(CursorHint::AtMax.cursor_icon(Left), CursorIcon::EResize);
    }
}
