//! Typed signals for change notification.
//!
//! A [`Signal`] holds any number of slots (closures). [`Signal::emit`] calls
//! every slot synchronously, in connection order, before returning. Widgets
//! emit from inside their own event and tick handlers, so observers see
//! notifications in the same order as the state changes that caused them.
//!
//! # Example
//!
//! ```
//! use pietimer_core::Signal;
//!
//! let finished = Signal::<()>::new();
//! let id = finished.connect(|_| println!("cycle finished"));
//! finished.emit(());
//! assert!(finished.disconnect(id));
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// Identifies one connection so it can be removed again.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A notification channel carrying values of type `Args`.
///
/// Use `()` for signals without a payload.
pub struct Signal<Args> {
    slots: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
}

impl<Args: 'static> Signal<Args> {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Add a slot. It is called on every later [`emit`](Self::emit).
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.slots.lock().insert(Arc::new(slot))
    }

    /// Remove a slot. Returns `false` if it was already gone.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.slots.lock().remove(id).is_some()
    }

    pub fn connection_count(&self) -> usize {
        self.slots.lock().len()
    }

    /// Call every connected slot with `args`.
    ///
    /// Slots run against a snapshot of the connection list, so a slot may
    /// connect or disconnect on this same signal. Changes it makes apply from
    /// the next emission.
    pub fn emit(&self, args: Args) {
        let snapshot: Vec<Slot<Args>> = self.slots.lock().values().cloned().collect();
        if snapshot.is_empty() {
            return;
        }
        tracing::trace!(target: targets::SIGNAL, slots = snapshot.len(), "emit");
        for slot in &snapshot {
            slot(&args);
        }
    }
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.slots.lock().len())
            .finish()
    }
}
