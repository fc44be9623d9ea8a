use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use tokio::sync::broadcast::error::RecvError;

use crate::server::{
    model::app::AppState,
    notify::{ChangeNotifier, DATA_CHANGED},
};

pub static EVENTS_TAG: &str = "events";

/// Subscribe to change events
///
/// Upgrades to a WebSocket on which the server pushes a `data_changed`
/// text frame after every successful mutating operation. Delivery is
/// best-effort with no replay; clients refetch their own state on receipt.
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENTS_TAG,
    responses(
        (status = 101, description = "Switching to the WebSocket protocol"),
    ),
)]
pub async fn subscribe(
    State(state): State<AppState>,
    ws: WebSocketUpgrade,
) -> impl IntoResponse {
    let notifier = state.notifier.clone();

    ws.on_upgrade(move |socket| forward_events(socket, notifier))
}

async fn forward_events(mut socket: WebSocket, notifier: ChangeNotifier) {
    let mut events = notifier.subscribe();

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(()) => {
                    if socket.send(Message::Text(DATA_CHANGED.into())).await.is_err() {
                        break;
                    }
                }
                // A lagged receiver collapses the missed events into the
                // next refetch, which is all the client would do anyway.
                Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => break,
            },
            message = socket.recv() => match message {
                Some(Ok(_)) => continue,
                // Client closed the connection or errored
                _ => break,
            },
        }
    }
}
