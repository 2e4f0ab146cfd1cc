//! Signal/slot notification for roster-view.
//!
//! Models emit signals when their contents change; views and tests connect
//! slots (closures) to stay synchronized. All delivery is direct: a slot runs
//! on the emitting thread, immediately, before `emit` returns. There is no
//! event loop to defer to in this library.
//!
//! # Example
//!
//! ```
//! use roster_view::signal::Signal;
//!
//! let rows_inserted = Signal::<(usize, usize)>::new();
//!
//! let id = rows_inserted.connect(|(first, last)| {
//!     println!("rows {first}..={last} inserted");
//! });
//!
//! rows_inserted.emit((0, 3));
//! rows_inserted.disconnect(id);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via
    /// [`Signal::disconnect`]. The ID remains valid until the connection is
    /// explicitly disconnected or the signal is dropped.
    pub struct ConnectionId;
}

/// Internal storage for a single connection.
struct Connection<Args> {
    /// The slot function to invoke. Arc-wrapped so emission can run slots
    /// without holding the connection lock.
    slot: Arc<dyn Fn(&Args) + Send + Sync>,
}

/// A type-safe signal that can have multiple connected slots.
///
/// When a signal is emitted, all connected slots are invoked in connection
/// order with a reference to the provided arguments.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for
///   signals with no arguments, or a tuple like `(usize, usize)` for
///   multiple arguments.
pub struct Signal<Args> {
    /// All active connections.
    connections: Mutex<SlotMap<ConnectionId, Connection<Args>>>,
    /// Whether signal emission is temporarily blocked.
    blocked: AtomicBool,
}

impl<Args> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Connection {
            slot: Arc::new(slot),
        })
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Block signal emission temporarily.
    ///
    /// While blocked, calls to `emit()` do nothing. Useful during batch
    /// updates to prevent cascading notifications.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if signal emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots.
    ///
    /// Slots are cloned out of the connection table before invocation, so a
    /// slot may connect or disconnect on this same signal without
    /// deadlocking.
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "signal blocked, skipping emit");
            return;
        }

        let slots: Vec<_> = self
            .connections
            .lock()
            .values()
            .map(|conn| conn.slot.clone())
            .collect();

        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");

        for slot in slots {
            slot(&args);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_and_emit() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let recv = received.clone();
        signal.connect(move |n| recv.lock().push(*n));

        signal.emit(1);
        signal.emit(2);

        assert_eq!(*received.lock(), vec![1, 2]);
    }

    #[test]
    fn test_multiple_slots() {
        let signal = Signal::<()>::new();
        let counter = Arc::new(Mutex::new(0));

        let c1 = counter.clone();
        signal.connect(move |_| *c1.lock() += 1);

        let c2 = counter.clone();
        signal.connect(move |_| *c2.lock() += 10);

        signal.emit(());
        assert_eq!(*counter.lock(), 11);
    }

    #[test]
    fn test_disconnect() {
        let signal = Signal::<()>::new();
        let counter = Arc::new(Mutex::new(0));

        let recv = counter.clone();
        let id = signal.connect(move |_| *recv.lock() += 1);
        assert_eq!(signal.connection_count(), 1);

        assert!(signal.disconnect(id));
        assert!(!signal.disconnect(id));
        assert_eq!(signal.connection_count(), 0);

        signal.emit(());
        assert_eq!(*counter.lock(), 0);
    }

    #[test]
    fn test_blocked_emit() {
        let signal = Signal::<()>::new();
        let counter = Arc::new(Mutex::new(0));

        let recv = counter.clone();
        signal.connect(move |_| *recv.lock() += 1);

        signal.set_blocked(true);
        assert!(signal.is_blocked());
        signal.emit(());
        assert_eq!(*counter.lock(), 0);

        signal.set_blocked(false);
        signal.emit(());
        assert_eq!(*counter.lock(), 1);
    }

    #[test]
    fn test_slot_can_disconnect_during_emit() {
        let signal = Arc::new(Signal::<()>::new());
        let counter = Arc::new(Mutex::new(0));

        let sig = signal.clone();
        let recv = counter.clone();
        let id = Arc::new(Mutex::new(None));
        let id_slot = id.clone();
        let conn = signal.connect(move |_| {
            *recv.lock() += 1;
            if let Some(own_id) = id_slot.lock().take() {
                sig.disconnect(own_id);
            }
        });
        *id.lock() = Some(conn);

        signal.emit(());
        signal.emit(());
        assert_eq!(*counter.lock(), 1);
    }
}
