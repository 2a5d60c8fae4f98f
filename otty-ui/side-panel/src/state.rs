use iced::{Point, Size};

use crate::config::PanelConfig;
use crate::controller::ResizeController;
use crate::gate::BreakpointGate;
use crate::model::{PanelId, PanelLayout, ResizeState, Visibility};
use crate::notifier::WidthNotifier;

/// Internal runtime state for one mounted side panel.
#[derive(Debug)]
pub(crate) struct PanelState {
    controller: ResizeController,
    notifier: WidthNotifier,
    drag: DragState,
    cursor: Option<Point>,
    viewport: Option<Size>,
    visibility: Visibility,
}

#[derive(Debug, Default, Clone, Copy)]
struct DragState {
    active: bool,
    last_x: Option<f32>,
}

impl PanelState {
    pub(crate) fn new(
        id: PanelId,
        config: PanelConfig,
        notifier: WidthNotifier,
    ) -> Self {
        Self {
            controller: ResizeController::new(id, config),
            notifier,
            drag: DragState::default(),
            cursor: None,
            viewport: None,
            visibility: Visibility::Visible,
        }
    }

    pub(crate) fn id(&self) -> PanelId {
        self.controller.id()
    }

    pub(crate) fn controller(&self) -> &ResizeController {
        &self.controller
    }

    pub(crate) fn notifier(&self) -> &WidthNotifier {
        &self.notifier
    }

    pub(crate) fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub(crate) fn is_dragging(&self) -> bool {
        self.drag.active
    }

    pub(crate) fn set_redraw(
        &mut self,
        redraw: impl FnMut(&ResizeState) + 'static,
    ) {
        self.controller.set_redraw(redraw);
    }

    /// Geometry from the last layout pass.
    pub(crate) fn current_layout(&self) -> PanelLayout {
        let height = self.viewport.map(|size| size.height).unwrap_or(0.0);
        let width = match self.visibility {
            Visibility::Visible => self.controller.current_width(),
            Visibility::Collapsed => 0.0,
        };

        PanelLayout {
            visibility: self.visibility,
            width,
            height,
            cursor_hint: self.controller.cursor_hint(),
        }
    }

    /// Run one layout pass against `viewport`.
    pub(crate) fn layout(&mut self, viewport: Size) -> PanelLayout {
        self.viewport = Some(viewport);
        let visibility = self.gate(viewport);

        BreakpointGate::sync(
            visibility,
            self.controller.id(),
            self.controller.current_width(),
            &self.notifier,
        );

        self.current_layout()
    }

    /// Evaluate the breakpoint against `viewport` and adopt the outcome.
    ///
    /// Notifier publication is left to the caller.
    fn gate(&mut self, viewport: Size) -> Visibility {
        let breakpoint = self.controller.config().scaffold_breakpoint();
        let visibility = BreakpointGate::evaluate(viewport.width, breakpoint);

        match visibility {
            Visibility::Collapsed => {
                self.drag = DragState::default();
                self.controller.discard_deferred();
            },
            Visibility::Visible => {
                self.controller.fit_viewport(viewport.width);
            },
        }

        if visibility != self.visibility {
            log::debug!("panel {} is now {visibility:?}", self.id());
        }
        self.visibility = visibility;
        visibility
    }

    /// Record a cursor position, applying a drag delta when armed.
    ///
    /// Returns whether the width changed.
    pub(crate) fn update_cursor(&mut self, position: Point) -> bool {
        self.cursor = Some(position);
        if !self.drag.active {
            return false;
        }

        let previous = self.drag.last_x.replace(position.x);
        match previous {
            Some(last_x) => self.drag_by(position.x - last_x),
            None => false,
        }
    }

    /// Arm drag tracking. Returns `false` when resizing is not possible.
    pub(crate) fn begin_drag(&mut self) -> bool {
        if !self.controller.config().is_resizable()
            || self.visibility == Visibility::Collapsed
        {
            return false;
        }

        self.drag = DragState {
            active: true,
            last_x: self.cursor.map(|cursor| cursor.x),
        };
        true
    }

    pub(crate) fn end_drag(&mut self) {
        self.drag = DragState::default();
    }

    /// Apply a delta directly, bypassing cursor tracking.
    pub(crate) fn drag_by(&mut self, delta_x: f32) -> bool {
        if !self.controller.config().is_resizable()
            || self.visibility == Visibility::Collapsed
        {
            return false;
        }

        let side = self.controller.config().resizable_side();
        let available = self
            .viewport
            .map(|size| size.width)
            .unwrap_or(f32::INFINITY);
        self.controller
            .apply_delta(delta_x, side, available, &self.notifier)
    }

    /// Adopt a new config; returns whether a deferred flush is needed.
    ///
    /// The gate is re-run against the last viewport so a moved breakpoint
    /// takes effect at once. A panel collapsing here leaves the notifier
    /// silently; a visible one is republished by the flush.
    pub(crate) fn reconcile(&mut self, config: PanelConfig) -> bool {
        self.controller.reconcile(config);
        if !self.controller.config().is_resizable() {
            self.end_drag();
        }

        let Some(viewport) = self.viewport else {
            return self.controller.has_deferred();
        };
        if self.gate(viewport) == Visibility::Collapsed {
            self.notifier.remove(self.controller.id(), false);
        }
        self.controller.has_deferred()
    }

    /// Run deferred work. Returns whether anything was republished.
    pub(crate) fn flush_deferred(&mut self) -> bool {
        if self.visibility == Visibility::Collapsed {
            self.controller.discard_deferred();
            return false;
        }
        self.controller.flush_deferred(&self.notifier)
    }
}

impl Drop for PanelState {
    fn drop(&mut self) {
        self.notifier.remove(self.controller.id(), true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResizableSide;

    fn state(config: PanelConfig) -> PanelState {
        PanelState::new(PanelId::new(), config, WidthNotifier::new())
    }

    fn right_panel() -> PanelState {
        state(
            PanelConfig::builder(200.0, 500.0)
                .start_width(300.0)
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn given_new_state_when_not_laid_out_then_notifier_has_no_entry() {
        let state = right_panel();
        assert!(!state.notifier().contains(state.id()));
    }

    #[test]
    fn given_armed_drag_when_cursor_moves_then_deltas_accumulate() {
        let mut state = right_panel();
        state.layout(Size::new(1200.0, 800.0));
        state.update_cursor(Point::new(300.0, 10.0));

        assert!(state.begin_drag());
        assert!(state.update_cursor(Point::new(340.0, 10.0)));
        assert!(state.update_cursor(Point::new(360.0, 12.0)));
        state.end_drag();
        assert!(!state.update_cursor(Point::new(500.0, 12.0)));

        assert_eq!(state.controller().current_width(), 360.0);
        assert_eq!(state.notifier().width(state.id()), Some(360.0));
    }

    #[test]
    fn given_unknown_cursor_when_drag_starts_then_first_move_only_anchors() {
        let mut state = right_panel();
        state.layout(Size::new(1200.0, 800.0));

        assert!(state.begin_drag());
        assert!(!state.update_cursor(Point::new(900.0, 0.0)));
        assert!(state.update_cursor(Point::new(910.0, 0.0)));
        assert_eq!(state.controller().current_width(), 310.0);
    }

    #[test]
    fn given_left_side_when_cursor_moves_left_then_panel_grows() {
        let mut state = state(
            PanelConfig::builder(200.0, 500.0)
                .start_width(300.0)
                .resizable_side(ResizableSide::Left)
                .build()
                .unwrap(),
        );
        state.layout(Size::new(1200.0, 800.0));
        state.update_cursor(Point::new(900.0, 0.0));

        state.begin_drag();
        state.update_cursor(Point::new(850.0, 0.0));
        assert_eq!(state.controller().current_width(), 350.0);
    }

    #[test]
    fn given_non_resizable_config_when_drag_starts_then_it_is_refused() {
        let mut state = state(
            PanelConfig::builder(200.0, 500.0)
                .resizable(false)
                .build()
                .unwrap(),
        );
        state.layout(Size::new(1200.0, 800.0));

        assert!(!state.begin_drag());
        assert!(!state.is_dragging());
    }

    #[test]
    fn given_collapse_during_drag_when_laid_out_then_drag_is_cancelled() {
        let mut state = state(
            PanelConfig::builder(200.0, 500.0)
                .scaffold_breakpoint(300.0)
                .build()
                .unwrap(),
        );
        state.layout(Size::new(800.0, 600.0));
        assert!(state.begin_drag());

        let layout = state.layout(Size::new(250.0, 600.0));
        assert!(layout.is_collapsed());
        assert_eq!(layout.width, 0.0);
        assert_eq!(layout.height, 600.0);
        assert!(!state.is_dragging());
        assert!(!state.drag_by(50.0));
    }

    #[test]
    fn given_shrinking_viewport_when_laid_out_then_width_is_refit() {
        let mut state = right_panel();
        state.layout(Size::new(1200.0, 800.0));
        state.drag_by(150.0);

        let layout = state.layout(Size::new(380.0, 800.0));
        assert_eq!(layout.width, 380.0);
        assert_eq!(state.notifier().width(state.id()), Some(380.0));
    }

    #[test]
    fn given_collapsed_panel_when_flushing_then_deferred_work_is_dropped() {
        let mut state = state(
            PanelConfig::builder(200.0, 500.0)
                .start_width(450.0)
                .scaffold_breakpoint(300.0)
                .build()
                .unwrap(),
        );
        state.layout(Size::new(250.0, 600.0));

        let config = PanelConfig::builder(200.0, 400.0)
            .scaffold_breakpoint(300.0)
            .build()
            .unwrap();
        assert!(state.reconcile(config));
        assert!(!state.flush_deferred());
        assert!(!state.notifier().contains(state.id()));
    }

    #[test]
    fn given_raised_breakpoint_when_reconciled_then_panel_collapses_silently()
    {
        let mut state = right_panel();
        state.layout(Size::new(800.0, 600.0));
        assert_eq!(state.notifier().width(state.id()), Some(300.0));

        let config = PanelConfig::builder(200.0, 500.0)
            .start_width(300.0)
            .scaffold_breakpoint(1000.0)
            .build()
            .unwrap();
        assert!(!state.reconcile(config));
        assert!(!state.flush_deferred());

        let layout = state.current_layout();
        assert_eq!(state.visibility(), Visibility::Collapsed);
        assert_eq!(layout.width, 0.0);
        assert_eq!(layout.height, 600.0);
        assert!(!state.notifier().contains(state.id()));
    }

    #[test]
    fn given_lowered_breakpoint_when_reconciled_then_flush_republishes() {
        let mut state = state(
            PanelConfig::builder(200.0, 500.0)
                .start_width(300.0)
                .scaffold_breakpoint(1000.0)
                .build()
                .unwrap(),
        );
        state.layout(Size::new(800.0, 600.0));
        assert!(!state.notifier().contains(state.id()));

        let config = PanelConfig::builder(200.0, 500.0)
            .start_width(300.0)
            .scaffold_breakpoint(600.0)
            .build()
            .unwrap();
        assert!(state.reconcile(config));
        assert_eq!(state.visibility(), Visibility::Visible);
        assert!(!state.notifier().contains(state.id()));

        assert!(state.flush_deferred());
        assert_eq!(state.notifier().width(state.id()), Some(300.0));
    }

    #[test]
    fn given_active_drag_when_resizing_disabled_then_drag_is_disarmed() {
        let mut state = right_panel();
        state.layout(Size::new(1200.0, 800.0));
        state.update_cursor(Point::new(300.0, 10.0));
        assert!(state.begin_drag());

        let config = PanelConfig::builder(200.0, 500.0)
            .start_width(300.0)
            .resizable(false)
            .build()
            .unwrap();
        assert!(!state.reconcile(config));

        assert!(!state.is_dragging());
        assert!(!state.update_cursor(Point::new(400.0, 10.0)));
        assert!(!state.drag_by(100.0));
        assert_eq!(state.controller().current_width(), 300.0);
        assert_eq!(state.notifier().width(state.id()), Some(300.0));
    }

    #[test]
    fn given_dropped_state_when_unmounted_then_entry_is_removed() {
        let notifier = WidthNotifier::new();
        let mut state = PanelState::new(
            PanelId::new(),
            PanelConfig::builder(200.0, 500.0).build().unwrap(),
            notifier.clone(),
        );
        state.layout(Size::new(1000.0, 700.0));
        assert_eq!(notifier.len(), 1);

        drop(state);
        assert!(notifier.is_empty());
    }
}
