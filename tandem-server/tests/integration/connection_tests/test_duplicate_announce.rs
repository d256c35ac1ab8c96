use tandem_core::{ConnectionId, SignalMessage};
use tandem_server::RoomCommand;

use crate::integration::{create_test_relay, init_tracing};

#[tokio::test]
async fn test_duplicate_announce_is_ignored() {
    init_tracing();

    let (mut relay, signaling) = create_test_relay();
    let a = ConnectionId::new();
    let b = ConnectionId::new();

    relay
        .handle_command(RoomCommand::Announce { connection_id: a })
        .await;
    relay
        .handle_command(RoomCommand::Announce { connection_id: a })
        .await;

    assert_eq!(relay.registry().len(), 1);
    assert!(signaling.all().await.is_empty());

    relay
        .handle_command(RoomCommand::Announce { connection_id: b })
        .await;
    relay
        .handle_command(RoomCommand::Announce { connection_id: b })
        .await;

    assert_eq!(relay.registry().occupants(), vec![a, b]);
    assert_eq!(
        signaling.messages_for(&b).await,
        vec![SignalMessage::Initiate]
    );
}
