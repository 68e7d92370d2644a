//! A scriptable minecraft server answering status pings on loopback.

#![allow(dead_code)]

use std::io::Cursor;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use bytes::BytesMut;
use futures::{SinkExt, StreamExt};
use image::{ImageBuffer, ImageOutputFormat, Rgba, RgbaImage};
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpStream};
use mcpingme::Address;
use mcpingme::error::ProtocolError;
use mcpingme::net::{Client, PacketClientEnum, PacketServerEnum, Protocol};
use mcpingme::net::buffer::BufferMut;
use mcpingme::net::handshake::HandshakePacket;
use mcpingme::net::pipeline::{new_pipeline, FrameCodec};
use mcpingme::net::status::{PongPacket, StatusResponsePacket};

pub const VANILLA_STATUS: &str = r#"{"version":{"name":"1.20.4","protocol":765},"players":{"max":20,"online":0},"description":"A Minecraft Server"}"#;

/// What the server does after receiving the handshake and the status request.
#[derive(Debug, Clone)]
pub enum Behavior {
    /// Answer the status and echo the ping after `pong_delay`
    Answer { json: String, pong_delay: Duration },
    /// Answer the status and hang up instead of answering the ping
    CloseBeforePong { json: String },
    /// Answer the status and never answer the ping
    IgnorePing { json: String },
    /// Answer the ping with a different payload
    WrongPong { json: String },
    /// Write these bytes instead of a status response
    Raw(Vec<u8>),
}

impl Behavior {
    pub fn answer(json: &str) -> Behavior {
        Behavior::Answer { json: json.to_string(), pong_delay: Duration::ZERO }
    }
}

pub struct FakeServer {
    pub address: Address,
    handshakes: Arc<Mutex<Vec<HandshakePacket>>>,
}

impl FakeServer {
    /// Listen on a free loopback port, serving every connection with `behavior`.
    pub async fn spawn(behavior: Behavior) -> FakeServer {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let handshakes = Arc::new(Mutex::new(Vec::new()));

        let seen = handshakes.clone();
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let behavior = behavior.clone();
                let seen = seen.clone();
                tokio::spawn(async move {
                    // The client hanging up early is part of several scenarios
                    let _ = serve(stream, behavior, seen).await;
                });
            }
        });

        FakeServer {
            address: Address::new("127.0.0.1", port),
            handshakes,
        }
    }

    pub fn handshakes(&self) -> Vec<HandshakePacket> {
        self.handshakes.lock().unwrap().clone()
    }
}

async fn serve(stream: TcpStream, behavior: Behavior, seen: Arc<Mutex<Vec<HandshakePacket>>>) -> Result<(), ProtocolError> {
    let mut pipeline = new_pipeline::<_, Client>(stream, 8 * 1024 * 1024);

    match pipeline.next().await {
        Some(Ok(PacketClientEnum::Handshake(handshake))) => seen.lock().unwrap().push(handshake),
        _ => return Ok(()),
    }
    pipeline.codec_mut().set_protocol(Protocol::Status);
    match pipeline.next().await {
        Some(Ok(PacketClientEnum::StatusRequest(_))) => {}
        _ => return Ok(()),
    }

    let json = match behavior {
        Behavior::Raw(ref bytes) => {
            pipeline.get_mut().write_all(bytes).await?;
            pipeline.get_mut().flush().await?;
            return Ok(());
        }
        Behavior::Answer { ref json, .. } | Behavior::CloseBeforePong { ref json }
            | Behavior::IgnorePing { ref json } | Behavior::WrongPong { ref json } => json.clone(),
    };
    pipeline.send(PacketServerEnum::StatusResponse(StatusResponsePacket { json })).await?;

    let payload = match pipeline.next().await {
        Some(Ok(PacketClientEnum::Ping(ping))) => ping.payload,
        _ => return Ok(()),
    };
    match behavior {
        Behavior::Answer { pong_delay, .. } => {
            tokio::time::sleep(pong_delay).await;
            pipeline.send(PacketServerEnum::Pong(PongPacket { payload })).await?;
        }
        Behavior::WrongPong { .. } => {
            pipeline.send(PacketServerEnum::Pong(PongPacket { payload: payload.wrapping_add(1) })).await?;
        }
        Behavior::IgnorePing { .. } => {
            tokio::time::sleep(Duration::from_secs(30)).await;
        }
        Behavior::CloseBeforePong { .. } | Behavior::Raw(_) => {}
    }
    Ok(())
}

/// A framed packet with an arbitrary id and a single string field.
pub fn raw_string_packet(packet_id: i32, body: &str) -> Vec<u8> {
    let mut payload = BytesMut::new();
    payload.write_var_int(packet_id);
    payload.write_string(body);

    let mut frame = BytesMut::new();
    FrameCodec::new(usize::MAX).encode(&payload, &mut frame).unwrap();
    frame.to_vec()
}

/// A 64x64 png with a gradient, so pixels can be compared.
pub fn sample_icon() -> RgbaImage {
    ImageBuffer::from_fn(64, 64, |x, y| Rgba([x as u8 * 4, 255 - y as u8 * 4, 90, 255]))
}

pub fn sample_icon_data_url() -> String {
    let mut png = Cursor::new(Vec::new());
    sample_icon().write_to(&mut png, ImageOutputFormat::Png).unwrap();
    mcpingme::favicon::to_data_url(&png.into_inner())
}

/// A status document announcing `favicon`.
pub fn status_with_favicon(favicon: &str) -> String {
    serde_json::json!({
        "version": {"name": "1.20.4", "protocol": 765},
        "players": {"max": 20, "online": 0},
        "description": "A Minecraft Server",
        "favicon": favicon,
    }).to_string()
}
