use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use crate::model::PanelId;

/// Snapshot of every published panel width keyed by panel identity.
pub type PanelWidths = BTreeMap<PanelId, f32>;

type Listener = dyn Fn(&PanelWidths);

/// Shared registry broadcasting panel widths to layout listeners.
///
/// One notifier lives per layout root and is shared by cloning the handle.
/// Each panel writes only its own key. Broadcasts are synchronous and hand
/// every listener the full mapping, in no particular listener order.
#[derive(Clone, Default)]
pub struct WidthNotifier {
    inner: Rc<RefCell<NotifierInner>>,
}

#[derive(Default)]
struct NotifierInner {
    widths: PanelWidths,
    listeners: Vec<(u64, Rc<Listener>)>,
    next_listener_id: u64,
}

impl WidthNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the width for `id`, broadcasting when `notify`.
    pub fn update(&self, id: PanelId, width: f32, notify: bool) {
        let previous = self.inner.borrow_mut().widths.insert(id, width);
        match previous {
            None => log::debug!("panel {id} registered at width {width}"),
            Some(_) => log::trace!("panel {id} width -> {width}"),
        }
        if notify {
            self.broadcast();
        }
    }

    /// Remove the entry for `id` if present, broadcasting when `notify`.
    pub fn remove(&self, id: PanelId, notify: bool) {
        let removed = self.inner.borrow_mut().widths.remove(&id);
        if removed.is_some() {
            log::debug!("panel {id} unregistered");
        }
        if notify {
            self.broadcast();
        }
    }

    /// Register a listener invoked on every broadcast.
    ///
    /// The listener stays registered for as long as the returned handle
    /// lives.
    pub fn subscribe(
        &self,
        listener: impl Fn(&PanelWidths) + 'static,
    ) -> WidthSubscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_listener_id;
        inner.next_listener_id += 1;
        let listener: Rc<Listener> = Rc::new(listener);
        inner.listeners.push((id, listener));

        WidthSubscription {
            id,
            notifier: Rc::downgrade(&self.inner),
        }
    }

    /// Current width published for `id`.
    pub fn width(&self, id: PanelId) -> Option<f32> {
        self.inner.borrow().widths.get(&id).copied()
    }

    pub fn contains(&self, id: PanelId) -> bool {
        self.inner.borrow().widths.contains_key(&id)
    }

    /// Copy of the current mapping.
    pub fn widths(&self) -> PanelWidths {
        self.inner.borrow().widths.clone()
    }

    /// Sum of all published widths, the space sidebars take from a scaffold.
    pub fn total_width(&self) -> f32 {
        self.inner.borrow().widths.values().sum()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().widths.is_empty()
    }

    fn broadcast(&self) {
        // Release the borrow before calling out so listeners may read back.
        let (snapshot, listeners) = {
            let inner = self.inner.borrow();
            let listeners: Vec<Rc<Listener>> = inner
                .listeners
                .iter()
                .map(|(_, listener)| Rc::clone(listener))
                .collect();
            (inner.widths.clone(), listeners)
        };

        for listener in listeners {
            listener(&snapshot);
        }
    }
}

impl std::fmt::Debug for WidthNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("WidthNotifier")
            .field("widths", &inner.widths)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

/// Handle returned by [`WidthNotifier::subscribe`].
///
/// Dropping the handle unregisters its listener.
#[derive(Debug)]
#[must_use = "dropping the subscription unregisters the listener"]
pub struct WidthSubscription {
    id: u64,
    notifier: Weak<RefCell<NotifierInner>>,
}

impl WidthSubscription {
    /// Stop receiving broadcasts. No-op if the notifier is already gone.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for WidthSubscription {
    fn drop(&mut self) {
        let Some(inner) = self.notifier.upgrade() else {
            return;
        };
        let removed = {
            let mut inner = inner.borrow_mut();
            let index = inner
                .listeners
                .iter()
                .position(|(listener_id, _)| *listener_id == self.id);
            index.map(|index| inner.listeners.remove(index))
        };
        // The listener may own other subscriptions; release it unborrowed.
        drop(removed);
    }
}
