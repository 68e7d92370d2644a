mod common;

use std::time::Duration;
use tokio::net::TcpListener;
use mcpingme::{Address, StatusClient};
use mcpingme::error::{PingError, ProtocolError};
use mcpingme::net::Protocol;
use common::{Behavior, FakeServer, VANILLA_STATUS};

fn client() -> StatusClient {
    StatusClient {
        read_timeout: Duration::from_secs(2),
        ..StatusClient::default()
    }
}

#[actix_rt::test]
async fn fetches_status_and_latency() {
    let server = FakeServer::spawn(Behavior::Answer {
        json: VANILLA_STATUS.to_string(),
        pong_delay: Duration::from_millis(50),
    }).await;

    let result = client().fetch_status(&server.address).await.unwrap();

    assert!(!result.latency_is_estimate);
    assert!(result.latency >= 49 && result.latency < 250, "latency was {}", result.latency);
    assert_eq!(result.status.version.name, "1.20.4");
    assert_eq!(result.status.version.protocol, 765);
    assert_eq!(result.status.players.max, 20);
    assert_eq!(result.status.players.online, 0);
    assert!(result.status.players.sample.is_empty());
    assert_eq!(result.status.description.text(), "A Minecraft Server");
    assert_eq!(result.status.favicon, "");
}

#[actix_rt::test]
async fn flattens_array_description() {
    let status = r#"{"version":{"name":"1.8.9","protocol":47},"players":{"max":100,"online":7},
        "description":["§aWelcome ",{"text":"to ","extra":[{"text":"the"}]}," server"]}"#;
    let server = FakeServer::spawn(Behavior::answer(status)).await;

    let result = client().fetch_status(&server.address).await.unwrap();

    assert_eq!(result.status.description.text(), "§aWelcome to the server");
    assert_eq!(result.status.players.online, 7);
}

#[actix_rt::test]
async fn handshake_announces_requested_address() {
    let server = FakeServer::spawn(Behavior::answer(VANILLA_STATUS)).await;
    let address = Address::new("localhost", server.address.port);

    client().fetch_status(&address).await.unwrap();

    let handshakes = server.handshakes();
    assert_eq!(handshakes.len(), 1);
    assert_eq!(handshakes[0].protocol_version, -1);
    assert_eq!(handshakes[0].server_address, "localhost");
    assert_eq!(handshakes[0].server_port, server.address.port);
    assert_eq!(handshakes[0].next_protocol, Protocol::Status);
}

#[actix_rt::test]
async fn estimates_latency_when_server_closes_before_pong() {
    let server = FakeServer::spawn(Behavior::CloseBeforePong { json: VANILLA_STATUS.to_string() }).await;

    let result = client().fetch_status(&server.address).await.unwrap();

    assert!(result.latency_is_estimate);
    assert!(result.latency < 2000);
    assert_eq!(result.status.description.text(), "A Minecraft Server");
}

#[actix_rt::test]
async fn estimates_latency_when_pong_times_out() {
    let server = FakeServer::spawn(Behavior::IgnorePing { json: VANILLA_STATUS.to_string() }).await;
    let client = StatusClient { read_timeout: Duration::from_millis(200), ..client() };

    let result = client.fetch_status(&server.address).await.unwrap();

    assert!(result.latency_is_estimate);
    assert_eq!(result.status.players.max, 20);
}

#[actix_rt::test]
async fn rejects_unexpected_packet_id() {
    let server = FakeServer::spawn(Behavior::Raw(common::raw_string_packet(0x07, VANILLA_STATUS))).await;

    let result = client().fetch_status(&server.address).await;

    assert!(matches!(result, Err(PingError::Protocol(ProtocolError::UnexpectedPacket { id: 0x07, .. }))),
        "got {:?}", result);
}

#[actix_rt::test]
async fn rejects_oversized_status() {
    let favicon = format!("data:image/png;base64,{}", "A".repeat(3 * 1024 * 1024));
    let packet = common::raw_string_packet(0x00, &common::status_with_favicon(&favicon));
    let server = FakeServer::spawn(Behavior::Raw(packet)).await;

    let result = client().fetch_status(&server.address).await;

    assert!(matches!(result, Err(PingError::Protocol(ProtocolError::PacketTooLarge { max: 2097152, .. }))),
        "got {:?}", result);
}

#[actix_rt::test]
async fn rejects_mismatched_pong() {
    let server = FakeServer::spawn(Behavior::WrongPong { json: VANILLA_STATUS.to_string() }).await;

    let result = client().fetch_status(&server.address).await;

    assert!(matches!(result, Err(PingError::Protocol(ProtocolError::PongMismatch { .. }))), "got {:?}", result);
}

#[actix_rt::test]
async fn rejects_invalid_status_json() {
    let server = FakeServer::spawn(Behavior::answer("[1, 2, 3]")).await;

    let result = client().fetch_status(&server.address).await;

    assert!(matches!(result, Err(PingError::BadStatusJson(_))), "got {:?}", result);
}

#[actix_rt::test]
async fn reports_truncated_status_frame() {
    let mut packet = common::raw_string_packet(0x00, VANILLA_STATUS);
    packet.truncate(packet.len() / 2);
    let server = FakeServer::spawn(Behavior::Raw(packet)).await;

    let result = client().fetch_status(&server.address).await;

    assert!(matches!(result, Err(PingError::Protocol(ProtocolError::Truncated))), "got {:?}", result);
}

#[actix_rt::test]
async fn reports_unreachable_server() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let result = client().fetch_status(&Address::new("127.0.0.1", port)).await;

    assert!(matches!(result, Err(PingError::Unreachable(_))), "got {:?}", result);
}
