use iced::{Point, Size};

use crate::config::PanelConfig;
use crate::model::{PanelId, Visibility};

/// Intent events handled by the side panel reducer.
#[derive(Debug, Clone)]
pub enum PanelIntent {
    /// Cursor position in host window coordinates.
    CursorMoved { position: Point },
    /// Pointer pressed on the affordance strip.
    DragStarted,
    /// Pointer released anywhere; the last applied delta stands.
    DragEnded,
    /// Layout pass with the viewport available to the panel.
    ViewportChanged(Size),
    /// Replace the live config (bounds, breakpoint, side).
    Reconfigure(PanelConfig),
    /// Deferred work scheduled by a reconfiguration.
    FlushDeferred,
}

/// Effect events produced by the side panel reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelEffect {
    WidthChanged { id: PanelId, width: f32 },
    VisibilityChanged { id: PanelId, visibility: Visibility },
}

/// Side panel event stream routed through the host update loop.
#[derive(Debug, Clone)]
pub enum PanelEvent {
    /// Intent event reduced by the panel.
    Intent(PanelIntent),
    /// External effect for the host to orchestrate.
    Effect(PanelEffect),
}

impl From<PanelIntent> for PanelEvent {
    fn from(intent: PanelIntent) -> Self {
        PanelEvent::Intent(intent)
    }
}
