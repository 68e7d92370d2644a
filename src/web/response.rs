use serde::Serialize;
use crate::net::PingResult;

/// The json document returned by `/api/{address}` and `/api/java/{address}`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub latency: u64,
    pub players: Players,
    pub motd: String,
    pub icon: Icon,
    pub version: Version,
    pub chat: Chat,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Players {
    pub online: i64,
    pub maximum: i64,
    pub sample: Vec<PlayerSample>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PlayerSample {
    pub uuid: String,
    #[serde(rename = "playername")]
    pub name: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Icon {
    pub url: String,
    pub base64: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Version {
    pub protocol: i32,
    pub broadcast: String,
}

/// Chat settings announced by 1.19+ servers, `null` when not announced.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Chat {
    pub signing: Option<bool>,
    pub preview: Option<bool>,
}

impl ApiResponse {
    /// Build the response for a ping.
    ///
    /// `icon_url` is only reported if the server has a favicon.
    pub fn new(result: PingResult, icon_url: String) -> ApiResponse {
        let status = result.status;
        let icon = if status.favicon.is_empty() {
            Icon { url: String::new(), base64: String::new() }
        } else {
            Icon { url: icon_url, base64: status.favicon }
        };

        ApiResponse {
            latency: result.latency,
            players: Players {
                online: status.players.online,
                maximum: status.players.max,
                sample: status.players.sample.iter()
                    .map(|player| PlayerSample {
                        uuid: player.hyphenated_id(),
                        name: player.name.clone(),
                    })
                    .collect(),
            },
            motd: status.description.text(),
            icon,
            version: Version {
                protocol: status.version.protocol,
                broadcast: status.version.name,
            },
            chat: Chat {
                signing: status.enforces_secure_chat,
                preview: status.previews_chat,
            },
        }
    }
}
