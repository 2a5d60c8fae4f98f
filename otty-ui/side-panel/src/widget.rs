use cursor_icon::CursorIcon;
use iced::{Element, Size, Task};

use crate::config::{PanelConfig, ResizableSide};
use crate::errors::PanelConfigError;
use crate::event::{PanelEvent, PanelIntent};
use crate::model::{CursorHint, PanelId, PanelLayout, ResizeState, Visibility};
use crate::notifier::WidthNotifier;
use crate::reducer;
use crate::state::PanelState;
use crate::view::PanelView;

/// Read-only snapshot consumed by [`PanelView`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelViewModel {
    pub id: PanelId,
    pub layout: PanelLayout,
    pub side: ResizableSide,
    pub is_resizable: bool,
    pub is_dragging: bool,
}

impl PanelViewModel {
    /// Native cursor matching the current boundary hint.
    pub fn cursor_icon(&self) -> CursorIcon {
        self.layout.cursor_hint.cursor_icon(self.side)
    }
}

/// Resizable side panel owning its private state.
///
/// Dropping the panel removes its entry from the shared notifier.
#[derive(Debug)]
pub struct SidePanel {
    state: PanelState,
}

impl SidePanel {
    /// Mount a panel under an identity minted by the caller.
    pub fn new(id: PanelId, config: PanelConfig, notifier: WidthNotifier) -> Self {
        Self {
            state: PanelState::new(id, config, notifier),
        }
    }

    /// Mount a panel from a JSON config, failing before anything is built.
    pub fn from_json(
        id: PanelId,
        config: &str,
        notifier: WidthNotifier,
    ) -> Result<Self, PanelConfigError> {
        let config = PanelConfig::from_json(config)?;
        Ok(Self::new(id, config, notifier))
    }

    /// Reduce an intent event into state updates and effect events.
    pub fn reduce(&mut self, intent: PanelIntent) -> Task<PanelEvent> {
        reducer::reduce(&mut self.state, intent)
    }

    /// Run a layout pass outside the event loop.
    pub fn layout(&mut self, viewport: Size) -> PanelLayout {
        self.state.layout(viewport)
    }

    /// Observe every width or cursor hint change.
    pub fn on_redraw(&mut self, redraw: impl FnMut(&ResizeState) + 'static) {
        self.state.set_redraw(redraw);
    }

    /// Build a read-only view model for the presentation layer.
    pub fn vm(&self) -> PanelViewModel {
        let config = self.state.controller().config();
        PanelViewModel {
            id: self.state.id(),
            layout: self.state.current_layout(),
            side: config.resizable_side(),
            is_resizable: config.is_resizable(),
            is_dragging: self.state.is_dragging(),
        }
    }

    /// Render the panel around `content`, mapping strip presses via `map`.
    pub fn view<'a, Message: Clone + 'a>(
        &self,
        content: impl Into<Element<'a, Message>>,
        map: impl Fn(PanelIntent) -> Message,
    ) -> Element<'a, Message> {
        PanelView::new(self.vm(), content)
            .on_drag_start(map(PanelIntent::DragStarted))
            .on_drag_end(map(PanelIntent::DragEnded))
            .view()
    }

    pub fn id(&self) -> PanelId {
        self.state.id()
    }

    pub fn config(&self) -> &PanelConfig {
        self.state.controller().config()
    }

    pub fn current_width(&self) -> f32 {
        self.state.controller().current_width()
    }

    pub fn cursor_hint(&self) -> CursorHint {
        self.state.controller().cursor_hint()
    }

    pub fn visibility(&self) -> Visibility {
        self.state.visibility()
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn notifier(&self) -> &WidthNotifier {
        self.state.notifier()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_invalid_json_when_mounting_then_no_panel_is_built() {
        let notifier = WidthNotifier::new();
        let result = SidePanel::from_json(
            PanelId::new(),
            r#"{ "min_width": 300, "max_width": 200 }"#,
            notifier.clone(),
        );

        assert!(matches!(result, Err(PanelConfigError::MaxBelowMin { .. })));
        assert!(notifier.is_empty());
    }

    #[test]
    fn given_left_panel_at_min_when_vm_built_then_cursor_points_west() {
        let mut panel = SidePanel::new(
            PanelId::new(),
            PanelConfig::builder(200.0, 500.0)
                .resizable_side(ResizableSide::Left)
                .build()
                .unwrap(),
            WidthNotifier::new(),
        );
        panel.layout(Size::new(900.0, 700.0));

        let vm = panel.vm();
        assert_eq!(vm.layout.cursor_hint, CursorHint::AtMin);
        assert_eq!(vm.cursor_icon(), CursorIcon::WResize);
        assert_eq!(vm.layout.width, 200.0);
        assert_eq!(vm.layout.height, 700.0);
        assert!(vm.is_resizable);
    }
}
