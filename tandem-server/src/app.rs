use crate::config::ServerConfig;
use crate::room::{RoomHandle, RoomRegistry};
use crate::signaling::{SignalingService, ws_handler};
use crate::state::AppState;
use axum::Router;
use axum::response::Html;
use axum::routing::get;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Spawns the room and wires it to the HTTP routes. Must run inside a tokio
/// runtime.
pub fn build_app(config: &ServerConfig) -> (Router, RoomHandle) {
    let signaling = SignalingService::new(config.ice_servers.clone());
    let room = RoomHandle::spawn(
        RoomRegistry::new(),
        Arc::new(signaling.clone()),
        config.command_buffer,
    );

    let state = Arc::new(AppState {
        signaling,
        room_tx: room.sender(),
    });

    (router(state), room)
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/ws", get(ws_handler))
        .layer(cors)
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
