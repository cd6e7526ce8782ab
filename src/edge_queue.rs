//! Raw button edges on their way from the per-button watchers to the panel.
//!
//! Each button has its own watcher that only timestamps edges and queues them, so an edge on
//! one button is never missed while the panel is busy rendering for the other. The panel drains
//! the queue from a single task and stays the only writer of the counter and the pixel buffer.

use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, channel::Channel};

use crate::panel::RawEdge;

/// Edges that can wait while the panel renders.
pub const EDGE_QUEUE_DEPTH: usize = 8;

/// Notifier type carrying raw edges from the button watchers to the panel.
pub type EdgeNotifier = Channel<CriticalSectionRawMutex, RawEdge, EDGE_QUEUE_DEPTH>;

/// Creates an empty [`EdgeNotifier`], typically for a `static`.
#[must_use]
pub const fn edge_notifier() -> EdgeNotifier {
    Channel::new()
}
