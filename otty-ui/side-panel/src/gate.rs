use crate::model::{PanelId, Visibility};
use crate::notifier::WidthNotifier;

/// Collapses a panel when the viewport is at or below its breakpoint.
///
/// Stateless: each layout pass decides from its own inputs, so a viewport
/// resting exactly on the breakpoint may oscillate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreakpointGate;

impl BreakpointGate {
    pub fn evaluate(available_width: f32, breakpoint: Option<f32>) -> Visibility {
        match breakpoint {
            Some(breakpoint) if available_width <= breakpoint => {
                Visibility::Collapsed
            },
            _ => Visibility::Visible,
        }
    }

    /// Bring the notifier entry for `id` in line with `visibility`.
    ///
    /// A collapsing panel disappears silently. A visible panel broadcasts
    /// only when its entry is new or its width moved.
    pub fn sync(
        visibility: Visibility,
        id: PanelId,
        width: f32,
        notifier: &WidthNotifier,
    ) {
        match visibility {
            Visibility::Collapsed => notifier.remove(id, false),
            Visibility::Visible => {
                let changed = notifier.width(id) != Some(width);
                if changed {
                    notifier.update(id, width, true);
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn given_no_breakpoint_when_evaluated_then_always_visible() {
        assert_eq!(BreakpointGate::evaluate(0.0, None), Visibility::Visible);
        assert_eq!(BreakpointGate::evaluate(1e6, None), Visibility::Visible);
    }

    #[test]
    fn given_breakpoint_when_evaluated_then_boundary_collapses() {
        let breakpoint = Some(300.0);
        assert_eq!(
            BreakpointGate::evaluate(250.0, breakpoint),
            Visibility::Collapsed
        );
        assert_eq!(
            BreakpointGate::evaluate(300.0, breakpoint),
            Visibility::Collapsed
        );
        assert_eq!(
            BreakpointGate::evaluate(300.5, breakpoint),
            Visibility::Visible
        );
    }

    #[test]
    fn given_collapse_when_synced_then_entry_vanishes_without_broadcast() {
        let notifier = WidthNotifier::new();
        let id = PanelId::new();
        notifier.update(id, 240.0, false);
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let _subscription =
            notifier.subscribe(move |_| counter.set(counter.get() + 1));

        BreakpointGate::sync(Visibility::Collapsed, id, 240.0, &notifier);

        assert!(!notifier.contains(id));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn given_visible_when_synced_repeatedly_then_broadcasts_once() {
        let notifier = WidthNotifier::new();
        let id = PanelId::new();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let _subscription =
            notifier.subscribe(move |_| counter.set(counter.get() + 1));

        for _ in 0..3 {
            BreakpointGate::sync(Visibility::Visible, id, 240.0, &notifier);
        }

        assert_eq!(notifier.width(id), Some(240.0));
        assert_eq!(calls.get(), 1);
    }
}
