/**
 * Real-time Subscription Handler
 *
 * This module implements the Server-Sent Events handler for
 * `GET /api/events`, the persistent connection each client keeps open to
 * receive mutations made by everyone.
 *
 * # Stream Format
 *
 * The stream opens with a `connected` event, then carries one SSE event per
 * broadcast, named after the event type:
 *
 * ```text
 * event: connected
 * data: {"clientId":"k3j2h1","serverTime":"2024-06-01T12:00:00Z"}
 *
 * event: item_added
 * data: {"type":"item_added","item":{...},"originId":"k3j2h1"}
 * ```
 *
 * # Connection Management
 *
 * - Keep-alive comments are injected by axum on its default interval
 * - Lagged receivers skip missed events and keep the connection
 * - Dropping the stream (client gone) drops its receiver, which lowers the
 *   connection count reported by `/api/health`
 */

use std::convert::Infallible;

use axum::{
    extract::{Query, State},
    response::sse::{Event, KeepAlive, Sse},
};
use futures_util::{future, stream, StreamExt};
use serde::Deserialize;
use tokio::sync::broadcast::error::RecvError;

use crate::backend::realtime::broadcast::{connection_count, RealtimeEventBroadcast};

/// SSE event name of the greeting sent when a stream opens
pub const CONNECTED_EVENT: &str = "connected";

/// Query string of `GET /api/events`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionParams {
    /// Origin token of the subscribing client, used for logging
    pub client_id: Option<String>,
}

/// Logs the disconnect when the stream holding it is dropped
struct ConnectionGuard {
    client_id: String,
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        tracing::info!("[Realtime] Client {} disconnected", self.client_id);
    }
}

/// Handle real-time subscription (`GET /api/events?clientId=`)
///
/// The receiver is created before the response is returned, so any mutation
/// committed after the `connected` event arrives is guaranteed to be
/// delivered on this stream.
pub async fn handle_event_subscription(
    State(broadcast_tx): State<RealtimeEventBroadcast>,
    Query(params): Query<SubscriptionParams>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, Infallible>>> {
    let client_id = params.client_id.unwrap_or_else(|| "anonymous".to_string());
    let broadcast_rx = broadcast_tx.subscribe();

    tracing::info!(
        "[Realtime] Client {} connected ({} live connections)",
        client_id,
        connection_count(&broadcast_tx)
    );

    let greeting = Event::default().event(CONNECTED_EVENT).data(
        serde_json::json!({
            "clientId": client_id,
            "serverTime": chrono::Utc::now(),
        })
        .to_string(),
    );

    let guard = ConnectionGuard { client_id };

    let updates = stream::unfold((broadcast_rx, guard), |(mut rx, guard)| async move {
        // Loop until there is an event worth sending
        loop {
            match rx.recv().await {
                Ok(event) => {
                    let data = match serde_json::to_string(&event) {
                        Ok(data) => data,
                        Err(e) => {
                            tracing::error!("[Realtime] Failed to serialize event: {:?}", e);
                            continue;
                        }
                    };

                    tracing::debug!(
                        "[Realtime] Sending {} to {}",
                        event.event_name(),
                        guard.client_id
                    );

                    let sse_event = Event::default().event(event.event_name()).data(data);
                    return Some((Ok::<_, Infallible>(sse_event), (rx, guard)));
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(
                        "[Realtime] Client {} lagged, skipped {} events",
                        guard.client_id,
                        skipped
                    );
                    continue;
                }
                Err(RecvError::Closed) => {
                    tracing::warn!("[Realtime] Broadcast channel closed, ending stream");
                    return None;
                }
            }
        }
    });

    let stream = stream::once(future::ready(Ok::<_, Infallible>(greeting))).chain(updates);

    Sse::new(stream).keep_alive(KeepAlive::default())
}
