use authbench_core::{Error, GeneralTransport, TransportError, WebSocketTarget};
use futures_util::{SinkExt, StreamExt};
use http::HeaderMap;
use tokio::net::TcpStream;
use tokio_tungstenite::{
    connect_async,
    tungstenite::{client::IntoClientRequest, Message},
    MaybeTlsStream, WebSocketStream,
};
use url::Url;

type Stream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// A single connection reused for every round trip. The gateway runs the
/// authorizer during the upgrade, so `connect` covers connect + auth.
pub struct WebSocketTransport {
    name: String,
    url: Url,
    headers: HeaderMap,
    message: String,
    stream: Option<Stream>,
}

impl WebSocketTransport {
    pub fn new(target: &WebSocketTarget) -> Result<Self, Error> {
        let mut url = target.url.clone();
        let mut headers = HeaderMap::new();
        target
            .token_placement
            .apply(&mut url, &mut headers, &target.token)?;
        Ok(Self {
            name: target.name.clone(),
            url,
            headers,
            message: target.message.clone(),
            stream: None,
        })
    }
}

impl GeneralTransport for WebSocketTransport {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_handshake(&self) -> bool {
        true
    }

    async fn connect(&mut self) -> Result<(), Error> {
        let mut request = self.url.as_str().into_client_request()?;
        request.headers_mut().extend(self.headers.clone());
        let (stream, response) = connect_async(request).await?;
        tracing::debug!(status = %response.status(), url = %self.url, "websocket connected");
        self.stream = Some(stream);
        Ok(())
    }

    async fn round_trip(&mut self) -> Result<(), Error> {
        let stream = self.stream.as_mut().ok_or(TransportError::NotConnected)?;
        stream.send(Message::Text(self.message.clone())).await?;
        loop {
            match stream.next().await {
                Some(Ok(Message::Text(_))) => return Ok(()),
                Some(Ok(Message::Binary(_))) => {
                    return Err(TransportError::UnexpectedMessage("binary").into())
                }
                Some(Ok(Message::Close(_))) | None => {
                    return Err(TransportError::ConnectionClosed.into())
                }
                // ping, pong and raw frames are not replies
                Some(Ok(_)) => continue,
                Some(Err(err)) => return Err(err.into()),
            }
        }
    }
}
