use serde::{Deserialize, Serialize};
use url::Url;

use crate::TokenPlacement;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum TargetConfig {
    #[serde(rename = "websocket")]
    WebSocket(WebSocketTarget),
    #[serde(rename = "http")]
    Http(HttpTarget),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WebSocketTarget {
    #[serde(default = "default::websocket_name")]
    pub name: String,
    pub url: Url,
    #[serde(default = "default::token")]
    pub token: String,
    #[serde(default = "default::websocket_token_placement")]
    pub token_placement: TokenPlacement,
    #[serde(default = "default::message")]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HttpTarget {
    #[serde(default = "default::http_name")]
    pub name: String,
    pub url: Url,
    #[serde(default = "default::token")]
    pub token: String,
    #[serde(default = "default::http_token_placement")]
    pub token_placement: TokenPlacement,
}

impl TargetConfig {
    pub fn name(&self) -> &str {
        match self {
            Self::WebSocket(target) => &target.name,
            Self::Http(target) => &target.name,
        }
    }
}

impl Default for WebSocketTarget {
    fn default() -> Self {
        Self {
            name: default::websocket_name(),
            url: default::websocket_url(),
            token: default::token(),
            token_placement: default::websocket_token_placement(),
            message: default::message(),
        }
    }
}

impl Default for HttpTarget {
    fn default() -> Self {
        Self {
            name: default::http_name(),
            url: default::http_url(),
            token: default::token(),
            token_placement: default::http_token_placement(),
        }
    }
}

pub(crate) mod default {
    use url::Url;

    use crate::TokenPlacement;

    pub(crate) fn websocket_name() -> String {
        "websocket".to_string()
    }
    pub(crate) fn http_name() -> String {
        "httpapi".to_string()
    }
    pub(crate) fn websocket_url() -> Url {
        Url::parse("wss://3heeykqcg9.execute-api.us-east-1.amazonaws.com/v1").unwrap()
    }
    pub(crate) fn http_url() -> Url {
        Url::parse("https://g6p6yapybd.execute-api.us-east-1.amazonaws.com/hello").unwrap()
    }
    pub(crate) fn token() -> String {
        "1234".to_string()
    }
    pub(crate) fn websocket_token_placement() -> TokenPlacement {
        TokenPlacement::Query("token".to_string())
    }
    pub(crate) fn http_token_placement() -> TokenPlacement {
        TokenPlacement::Header("Authorization".to_string())
    }
    pub(crate) fn message() -> String {
        "Test".to_string()
    }
}
