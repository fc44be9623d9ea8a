//! Change notification for connected clients.
//!
//! After any successful mutating operation the server broadcasts a single
//! payload-free `data_changed` event to every connected client, which is
//! expected to refetch whatever state it caches. Delivery is best-effort
//! and unordered: there is no acknowledgment, no delivery guarantee, and
//! no replay for clients that connect after the event.

use tokio::sync::broadcast;

/// Text frame sent to every connected client when server data changed.
pub static DATA_CHANGED: &str = "data_changed";

const CHANNEL_CAPACITY: usize = 64;

/// Fan-out handle for the `data_changed` broadcast.
///
/// Cloning is cheap; every clone notifies the same set of subscribers.
/// Sending when no client is connected is a silent no-op.
#[derive(Clone)]
pub struct ChangeNotifier {
    tx: broadcast::Sender<()>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);

        Self { tx }
    }

    /// Broadcast a `data_changed` event to all currently connected clients.
    pub fn notify(&self) {
        // An Err here only means there are no subscribers right now.
        let _ = self.tx.send(());
    }

    /// Subscribe to change events. Each connected client holds one receiver.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Number of currently connected subscribers.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}
