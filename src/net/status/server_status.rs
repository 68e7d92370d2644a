//! Tolerant decoding of the json status document.
//!
//! Servers in the wild omit fields, send `null`s and use every form of chat
//! component for the description. Missing pieces fall back to defaults
//! instead of failing the whole ping.

use serde::{Deserialize, Deserializer, Serialize};
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ServerInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: Version,
    #[serde(default, deserialize_with = "null_as_default")]
    pub players: Players,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: Description,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub favicon: String,
    #[serde(rename = "enforcesSecureChat", default, skip_serializing_if = "Option::is_none")]
    pub enforces_secure_chat: Option<bool>,
    #[serde(rename = "previewsChat", default, skip_serializing_if = "Option::is_none")]
    pub previews_chat: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Version {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub protocol: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Players {
    #[serde(default, deserialize_with = "null_as_default")]
    pub max: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub online: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sample: Vec<Player>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Player {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

impl Player {
    /// The player id in hyphenated form.
    ///
    /// Ids that are no uuid (advertising lines in the sample are common)
    /// are returned unchanged.
    pub fn hyphenated_id(&self) -> String {
        match Uuid::parse_str(&self.id) {
            Ok(uuid) => uuid.hyphenated().to_string(),
            Err(_) => self.id.clone(),
        }
    }
}

/// The server description (MOTD), either a plain string or a chat component.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Description(pub Value);

impl Description {
    /// Flatten the description into its plain text.
    ///
    /// Component trees are walked depth-first, `text` before `extra`.
    /// Formatting codes are kept.
    pub fn text(&self) -> String {
        let mut text = String::new();
        flatten_component(&self.0, &mut text);
        text
    }
}

fn flatten_component(component: &Value, out: &mut String) {
    match component {
        Value::String(text) => out.push_str(text),
        Value::Array(components) => {
            for component in components {
                flatten_component(component, out);
            }
        }
        Value::Object(fields) => {
            if let Some(Value::String(text)) = fields.get("text") {
                out.push_str(text);
            }
            if let Some(Value::Array(extra)) = fields.get("extra") {
                for component in extra {
                    flatten_component(component, out);
                }
            }
        }
        _ => {}
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where D: Deserializer<'de>, T: DeserializeOwned + Default
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse a status document.
///
/// Anything but a json object is rejected.
pub fn parse(json: &str) -> Result<ServerInfo, serde_json::Error> {
    let document: Value = serde_json::from_str(json)?;
    if !document.is_object() {
        return Err(serde::de::Error::custom("status document is not a json object"));
    }
    serde_json::from_value(document)
}
