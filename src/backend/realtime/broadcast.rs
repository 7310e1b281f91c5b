/**
 * Real-time Event Broadcasting
 *
 * This module provides the broadcast channel type and the fan-out helper
 * called by every mutating handler after its store write.
 *
 * # Broadcasting
 *
 * Events are broadcast using `tokio::sync::broadcast`, a multi-producer,
 * multi-consumer channel. Every open event stream holds one receiver, so
 * the channel's receiver count is the number of live connections.
 *
 * Delivery is fire-and-forget: no acknowledgement, no replay. A receiver
 * that falls more than the channel capacity behind skips the oldest events.
 */

use tokio::sync::broadcast;

use crate::shared::TodoEvent;

/// Sender half of the event channel, cloned into every handler that mutates
pub type RealtimeEventBroadcast = broadcast::Sender<TodoEvent>;

/// Create the event channel
///
/// The initial receiver is dropped so the receiver count only reflects
/// open event streams.
pub fn event_channel(capacity: usize) -> RealtimeEventBroadcast {
    let (tx, _) = broadcast::channel(capacity);
    tx
}

/// Broadcast an event to all subscribers
///
/// # Returns
///
/// Number of subscribers that received the event (0 if no subscribers)
pub fn broadcast_event(broadcast_tx: &RealtimeEventBroadcast, event: TodoEvent) -> usize {
    let name = event.event_name();
    let item_id = event.item_id();

    match broadcast_tx.send(event) {
        Ok(subscriber_count) => {
            tracing::debug!(
                "[Realtime] {} for {} sent to {} subscribers",
                name,
                item_id,
                subscriber_count
            );
            subscriber_count
        }
        Err(_) => {
            // No subscribers, that's okay
            tracing::debug!("[Realtime] No subscribers for {} ({})", name, item_id);
            0
        }
    }
}

/// Number of live event-stream connections
pub fn connection_count(broadcast_tx: &RealtimeEventBroadcast) -> usize {
    broadcast_tx.receiver_count()
}
