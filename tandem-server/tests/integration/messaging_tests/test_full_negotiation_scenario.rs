use serde_json::json;
use tandem_core::{ConnectionId, Negotiation, SignalMessage};

use crate::integration::{create_test_room, init_tracing};
use crate::utils::{announce, assert_quiet, disconnect, next_signal, relay};

#[tokio::test]
async fn test_full_negotiation_scenario() {
    init_tracing();

    let (room_tx, mut signal_rx, _room) = create_test_room();
    let x = ConnectionId::new();
    let y = ConnectionId::new();
    let z = ConnectionId::new();

    announce(&room_tx, x).await;
    assert_quiet(&mut signal_rx).await;

    announce(&room_tx, y).await;
    let signal = next_signal(&mut signal_rx).await.unwrap();
    assert_eq!((signal.to, signal.msg), (y, SignalMessage::Initiate));
    assert_quiet(&mut signal_rx).await;

    let d1 = json!({ "type": "offer", "sdp": "offer-from-y" });
    relay(&room_tx, y, Negotiation::Offer(d1.clone())).await;
    let signal = next_signal(&mut signal_rx).await.unwrap();
    assert_eq!((signal.to, signal.msg), (x, SignalMessage::Offer(d1)));

    let d2 = json!({ "type": "answer", "sdp": "answer-from-x" });
    relay(&room_tx, x, Negotiation::Answer(d2.clone())).await;
    let signal = next_signal(&mut signal_rx).await.unwrap();
    assert_eq!((signal.to, signal.msg), (y, SignalMessage::Answer(d2)));

    let c1 = json!({ "candidate": "candidate:1 1 udp 2122260223 10.0.0.1 50000 typ host" });
    let c2 = json!({ "candidate": "candidate:2 1 udp 2122260223 10.0.0.2 50001 typ host" });
    relay(&room_tx, x, Negotiation::Candidate(c1.clone())).await;
    relay(&room_tx, y, Negotiation::Candidate(c2.clone())).await;
    let first = next_signal(&mut signal_rx).await.unwrap();
    let second = next_signal(&mut signal_rx).await.unwrap();
    assert_eq!((first.to, first.msg), (y, SignalMessage::Candidate(c1)));
    assert_eq!((second.to, second.msg), (x, SignalMessage::Candidate(c2)));

    disconnect(&room_tx, x).await;
    let signal = next_signal(&mut signal_rx).await.unwrap();
    assert_eq!((signal.to, signal.msg), (y, SignalMessage::Connected(1)));

    // Re-election after vacancy: the newcomer initiates.
    announce(&room_tx, z).await;
    let signal = next_signal(&mut signal_rx).await.unwrap();
    assert_eq!((signal.to, signal.msg), (z, SignalMessage::Initiate));
    assert_quiet(&mut signal_rx).await;
}
