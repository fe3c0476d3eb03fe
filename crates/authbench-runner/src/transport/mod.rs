mod http;
mod websocket;

pub use self::http::HttpTransport;
pub use self::websocket::WebSocketTransport;

use authbench_core::{Error, GeneralTransport, TargetConfig};

pub enum Transport {
    WebSocket(WebSocketTransport),
    Http(HttpTransport),
}

impl Transport {
    pub fn from_target(target: &TargetConfig, client: &reqwest::Client) -> Result<Self, Error> {
        match target {
            TargetConfig::WebSocket(ws) => Ok(Transport::WebSocket(WebSocketTransport::new(ws)?)),
            TargetConfig::Http(http) => Ok(Transport::Http(HttpTransport::new(http, client.clone())?)),
        }
    }
}

impl GeneralTransport for Transport {
    fn name(&self) -> &str {
        match self {
            Transport::WebSocket(ws) => ws.name(),
            Transport::Http(http) => http.name(),
        }
    }

    fn has_handshake(&self) -> bool {
        match self {
            Transport::WebSocket(ws) => ws.has_handshake(),
            Transport::Http(http) => http.has_handshake(),
        }
    }

    async fn connect(&mut self) -> Result<(), Error> {
        match self {
            Transport::WebSocket(ws) => ws.connect().await,
            Transport::Http(http) => http.connect().await,
        }
    }

    async fn round_trip(&mut self) -> Result<(), Error> {
        match self {
            Transport::WebSocket(ws) => ws.round_trip().await,
            Transport::Http(http) => http.round_trip().await,
        }
    }
}
