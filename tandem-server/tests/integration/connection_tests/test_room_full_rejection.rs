use serde_json::json;
use tandem_core::{ConnectionId, Negotiation, Role, SignalMessage};
use tandem_server::{ROOM_FULL_REASON, RoomCommand};

use crate::integration::{create_test_relay, create_test_room, init_tracing};
use crate::utils::{announce, assert_quiet, next_signal, relay};

#[tokio::test]
async fn test_third_join_receives_full() {
    init_tracing();

    let (room_tx, mut signal_rx, _room) = create_test_room();
    let a = ConnectionId::new();
    let b = ConnectionId::new();
    let c = ConnectionId::new();

    announce(&room_tx, a).await;
    announce(&room_tx, b).await;
    assert_eq!(next_signal(&mut signal_rx).await.unwrap().to, b);

    announce(&room_tx, c).await;
    let rejected = next_signal(&mut signal_rx).await.expect("No full signal");
    assert_eq!(rejected.to, c);
    assert_eq!(rejected.msg, SignalMessage::Full(ROOM_FULL_REASON.to_string()));

    // The rejected connection is not a relay source.
    relay(&room_tx, c, Negotiation::Offer(json!({ "sdp": "intruder" }))).await;
    assert_quiet(&mut signal_rx).await;
}

#[tokio::test]
async fn test_rejection_leaves_seats_and_roles_untouched() {
    init_tracing();

    let (mut relay, signaling) = create_test_relay();
    let a = ConnectionId::new();
    let b = ConnectionId::new();
    let c = ConnectionId::new();

    for connection_id in [a, b, c] {
        relay
            .handle_command(RoomCommand::Announce { connection_id })
            .await;
    }

    assert_eq!(relay.registry().occupants(), vec![a, b]);
    assert_eq!(relay.registry().role_of(&a), Some(Role::Responder));
    assert_eq!(relay.registry().role_of(&b), Some(Role::Initiator));
    assert!(signaling.messages_for(&a).await.is_empty());
    assert_eq!(
        signaling.messages_for(&c).await,
        vec![SignalMessage::Full(ROOM_FULL_REASON.to_string())]
    );

    // The turned-away socket closes right after.
    relay
        .handle_command(RoomCommand::Disconnect { connection_id: c })
        .await;

    assert_eq!(relay.registry().occupants(), vec![a, b]);
    assert_eq!(relay.registry().role_of(&a), Some(Role::Responder));
    assert_eq!(relay.registry().role_of(&b), Some(Role::Initiator));
    assert!(
        !signaling
            .all()
            .await
            .iter()
            .any(|out| matches!(out.msg, SignalMessage::Connected(_)))
    );
    assert_eq!(signaling.messages_for(&b).await, vec![SignalMessage::Initiate]);
}
