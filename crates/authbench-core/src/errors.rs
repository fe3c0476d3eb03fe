use tokio_tungstenite::tungstenite;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Empty sample: no successful call was recorded")]
    EmptySample,

    #[error("Invalid token placement: {0}")]
    InvalidTokenPlacement(String),

    #[error("Invalid header name: {0}")]
    InvalidHeaderName(#[from] http::header::InvalidHeaderName),

    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),

    #[error("Url error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Json error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Io error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Reqwest error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("WebSocket error: {0}")]
    WebSocket(#[from] Box<tungstenite::Error>),

    #[error("Not connected")]
    NotConnected,

    #[error("Connection closed before a response was received")]
    ConnectionClosed,

    #[error("Unexpected {0} message")]
    UnexpectedMessage(&'static str),
}

impl Error {
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(TransportError::Http(error))
    }
}

impl From<tungstenite::Error> for Error {
    fn from(error: tungstenite::Error) -> Self {
        Self::Transport(TransportError::WebSocket(Box::new(error)))
    }
}
