use crate::room::{RoomCommand, RoomRegistry, SignalingRelay};
use crate::signaling::SignalingOutput;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Owns the running room task and the sending half of its command stream.
pub struct RoomHandle {
    command_tx: mpsc::Sender<RoomCommand>,
    task: JoinHandle<()>,
}

impl RoomHandle {
    pub fn spawn(
        registry: RoomRegistry,
        signaling: Arc<dyn SignalingOutput>,
        command_buffer: usize,
    ) -> Self {
        info!(
            "Creating room with {} seats (command buffer {})",
            registry.capacity(),
            command_buffer
        );
        let (command_tx, command_rx) = mpsc::channel(command_buffer.max(1));

        let relay = SignalingRelay::new(registry, signaling);
        let task = tokio::spawn(relay.run(command_rx));

        Self { command_tx, task }
    }

    pub fn sender(&self) -> mpsc::Sender<RoomCommand> {
        self.command_tx.clone()
    }

    /// Drops this handle's sender and waits for the room task to drain.
    /// Completes once every other sender is gone too.
    pub async fn shutdown(self) {
        drop(self.command_tx);
        if let Err(e) = self.task.await {
            error!("Room task ended abnormally: {}", e);
        }
    }
}
