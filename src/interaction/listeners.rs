use std::cell::RefCell;
use std::rc::{Rc, Weak};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

/// Document/window-level events a drag gesture listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListenerKind {
    PointerMove,
    PointerUp,
    PointerCancel,
    WindowBlur,
}

/// Listeners a drag gesture holds for its whole lifetime.
pub const DRAG_GESTURE_LISTENERS: [ListenerKind; 4] = [
    ListenerKind::PointerMove,
    ListenerKind::PointerUp,
    ListenerKind::PointerCancel,
    ListenerKind::WindowBlur,
];

#[derive(Debug, Default)]
struct RegistryState {
    next_id: u64,
    active: IndexMap<u64, ListenerKind>,
}

/// Handle to the document-level listener table shared by every surface in a
/// page. Cloning yields another handle to the same table.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    state: Rc<RefCell<RegistryState>>,
}

impl ListenerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `kinds` and returns a guard that unregisters them on drop.
    #[must_use]
    pub fn acquire(&self, kinds: &[ListenerKind]) -> ListenerGuard {
        let mut state = self.state.borrow_mut();
        let mut ids = SmallVec::new();
        for kind in kinds {
            let id = state.next_id;
            state.next_id += 1;
            state.active.insert(id, *kind);
            ids.push(id);
        }
        trace!(
            acquired = ids.len(),
            active = state.active.len(),
            "acquire document listeners"
        );
        ListenerGuard {
            registry: Rc::downgrade(&self.state),
            ids,
        }
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.state.borrow().active.len()
    }

    #[must_use]
    pub fn count_of(&self, kind: ListenerKind) -> usize {
        self.state
            .borrow()
            .active
            .values()
            .filter(|active| **active == kind)
            .count()
    }
}

/// Scoped ownership of registered listeners.
#[derive(Debug)]
pub struct ListenerGuard {
    registry: Weak<RefCell<RegistryState>>,
    ids: SmallVec<[u64; 4]>,
}

impl ListenerGuard {
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let Some(shared) = self.registry.upgrade() else {
            return;
        };
        let mut state = shared.borrow_mut();
        for id in &self.ids {
            state.active.shift_remove(id);
        }
        trace!(
            released = self.ids.len(),
            active = state.active.len(),
            "release document listeners"
        );
    }
}
