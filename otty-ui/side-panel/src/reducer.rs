use iced::Task;

use crate::event::{PanelEffect, PanelEvent, PanelIntent};
use crate::state::PanelState;

/// Reduce a side panel intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut PanelState,
    intent: PanelIntent,
) -> Task<PanelEvent> {
    match intent {
        PanelIntent::CursorMoved { position } => {
            if state.update_cursor(position) {
                width_changed(state)
            } else {
                Task::none()
            }
        },
        PanelIntent::DragStarted => {
            let _ = state.begin_drag();
            Task::none()
        },
        PanelIntent::DragEnded => {
            state.end_drag();
            Task::none()
        },
        PanelIntent::ViewportChanged(viewport) => {
            let before = state.current_layout();
            let after = state.layout(viewport);

            let mut tasks = Vec::new();
            if before.visibility != after.visibility {
                tasks.push(visibility_changed(state));
            }
            if !after.is_collapsed() && before.width != after.width {
                tasks.push(width_changed(state));
            }
            Task::batch(tasks)
        },
        PanelIntent::Reconfigure(config) => {
            let before = state.visibility();
            let republish = state.reconcile(config);

            let mut tasks = Vec::new();
            if before != state.visibility() {
                tasks.push(visibility_changed(state));
            }
            if republish {
                // Republish on a later turn, never inside this layout pass.
                tasks.push(Task::done(PanelEvent::Intent(
                    PanelIntent::FlushDeferred,
                )));
            }
            Task::batch(tasks)
        },
        PanelIntent::FlushDeferred => {
            if state.flush_deferred() {
                width_changed(state)
            } else {
                Task::none()
            }
        },
    }
}

fn visibility_changed(state: &PanelState) -> Task<PanelEvent> {
    Task::done(PanelEvent::Effect(PanelEffect::VisibilityChanged {
        id: state.id(),
        visibility: state.visibility(),
    }))
}

fn width_changed(state: &PanelState) -> Task<PanelEvent> {
    Task::done(PanelEvent::Effect(PanelEffect::WidthChanged {
        id: state.id(),
        width: state.controller().current_width(),
    }))
}
