use crate::room::RoomCommand;
use crate::signaling::SignalingService;
use tokio::sync::mpsc;

pub struct AppState {
    pub signaling: SignalingService,
    pub room_tx: mpsc::Sender<RoomCommand>,
}
