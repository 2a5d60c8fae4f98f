use std::fmt;

use crate::config::{PanelConfig, ResizableSide};
use crate::model::{CursorHint, PanelId, ResizeState};
use crate::notifier::WidthNotifier;

type RedrawHook = dyn FnMut(&ResizeState);

/// Owns the live width of one panel and keeps it inside its bounds.
///
/// The width always satisfies
/// `min_width <= width <= min(max_width, viewport_width)`; when the viewport
/// is narrower than `min_width` the lower bound wins.
pub struct ResizeController {
    id: PanelId,
    config: PanelConfig,
    state: ResizeState,
    /// A reconciled width waits to be republished on the next turn.
    republish_pending: bool,
    redraw: Option<Box<RedrawHook>>,
}

impl ResizeController {
    /// Create a controller at the config's initial width.
    ///
    /// The config type is validated on construction, so an inverted range
    /// or out-of-range start width never reaches this point.
    pub fn new(id: PanelId, config: PanelConfig) -> Self {
        let width = config.initial_width();
        let cursor_hint = CursorHint::for_width(
            width,
            config.min_width(),
            config.max_width(),
        );

        Self {
            id,
            config,
            state: ResizeState {
                current_width: width,
                cursor_hint,
            },
            republish_pending: false,
            redraw: None,
        }
    }

    /// Install the observer notified after every state change.
    pub fn set_redraw(&mut self, redraw: impl FnMut(&ResizeState) + 'static) {
        self.redraw = Some(Box::new(redraw));
    }

    pub fn id(&self) -> PanelId {
        self.id
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn state(&self) -> ResizeState {
        self.state
    }

    pub fn current_width(&self) -> f32 {
        self.state.current_width
    }

    pub fn cursor_hint(&self) -> CursorHint {
        self.state.cursor_hint
    }

    /// Integrate one drag delta and publish the width if it changed.
    ///
    /// Returns whether the width changed. Deltas pinned at a bound do not
    /// change the width and are not republished.
    pub fn apply_delta(
        &mut self,
        delta_x: f32,
        side: ResizableSide,
        available_width: f32,
        notifier: &WidthNotifier,
    ) -> bool {
        if !delta_x.is_finite() {
            log::warn!("panel {} ignored non-finite drag delta", self.id);
            return false;
        }

        let candidate = side.apply(self.state.current_width, delta_x);
        let upper = self.config.max_width().min(available_width);
        let width = clamp_width(candidate, self.config.min_width(), upper);

        let changed = self.commit(width);
        if changed {
            notifier.update(self.id, width, true);
        }
        changed
    }

    /// Pull the width back inside a viewport that shrank below it.
    ///
    /// Publication is left to the layout pass that follows.
    pub fn fit_viewport(&mut self, available_width: f32) -> bool {
        let upper = self.config.max_width().min(available_width);
        let width = clamp_width(
            self.state.current_width,
            self.config.min_width(),
            upper,
        );
        self.commit(width)
    }

    /// Adopt a new config on a live panel.
    ///
    /// When the bounds or breakpoint changed, the width is snapped into the
    /// new range and a republish is queued for [`Self::flush_deferred`].
    /// Returns whether a republish was queued.
    pub fn reconcile(&mut self, config: PanelConfig) -> bool {
        let bounds_changed = self.config.bounds_differ(&config);
        self.config = config;
        if !bounds_changed {
            return false;
        }

        let width = self.state.current_width;
        let snapped = if width < self.config.min_width() {
            self.config.min_width()
        } else if width > self.config.max_width() {
            self.config.max_width()
        } else {
            width
        };

        log::debug!(
            "panel {} reconciled to [{}, {}], width {width} -> {snapped}",
            self.id,
            self.config.min_width(),
            self.config.max_width(),
        );

        // Bounds moved, so the hint may change even with the same width.
        self.commit_forced(snapped);
        self.republish_pending = true;
        true
    }

    /// Whether a republish is waiting for the next turn.
    pub fn has_deferred(&self) -> bool {
        self.republish_pending
    }

    /// Republish the width reconciled by [`Self::reconcile`].
    ///
    /// The stale entry is dropped silently first, so listeners see exactly
    /// one broadcast carrying one entry for this panel. Returns whether
    /// anything was pending.
    pub fn flush_deferred(&mut self, notifier: &WidthNotifier) -> bool {
        if !std::mem::take(&mut self.republish_pending) {
            return false;
        }
        notifier.remove(self.id, false);
        notifier.update(self.id, self.state.current_width, true);
        true
    }

    /// Drop the pending republish, e.g. when the panel collapsed first.
    pub fn discard_deferred(&mut self) {
        self.republish_pending = false;
    }

    fn commit(&mut self, width: f32) -> bool {
        if width == self.state.current_width {
            return false;
        }
        self.commit_forced(width);
        true
    }

    fn commit_forced(&mut self, width: f32) {
        let next = ResizeState {
            current_width: width,
            cursor_hint: CursorHint::for_width(
                width,
                self.config.min_width(),
                self.config.max_width(),
            ),
        };
        if next == self.state {
            return;
        }

        self.state = next;
        if let Some(redraw) = self.redraw.as_mut() {
            redraw(&self.state);
        }
    }
}

impl fmt::Debug for ResizeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeController")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("state", &self.state)
            .field("republish_pending", &self.republish_pending)
            .finish_non_exhaustive()
    }
}

fn clamp_width(candidate: f32, min_width: f32, upper: f32) -> f32 {
    // `f32::clamp` panics on inverted bounds; a narrow viewport must not.
    candidate.min(upper).max(min_width)
}
