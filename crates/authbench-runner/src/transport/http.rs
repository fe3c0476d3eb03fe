use authbench_core::{Error, GeneralTransport, HttpTarget};
use http::HeaderMap;
use url::Url;

/// One GET per round trip; no separate handshake to time.
pub struct HttpTransport {
    name: String,
    client: reqwest::Client,
    url: Url,
    headers: HeaderMap,
}

impl HttpTransport {
    pub fn new(target: &HttpTarget, client: reqwest::Client) -> Result<Self, Error> {
        let mut url = target.url.clone();
        let mut headers = HeaderMap::new();
        target
            .token_placement
            .apply(&mut url, &mut headers, &target.token)?;
        Ok(Self {
            name: target.name.clone(),
            client,
            url,
            headers,
        })
    }
}

impl GeneralTransport for HttpTransport {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_handshake(&self) -> bool {
        false
    }

    async fn connect(&mut self) -> Result<(), Error> {
        Ok(())
    }

    async fn round_trip(&mut self) -> Result<(), Error> {
        let response = self
            .client
            .get(self.url.clone())
            .headers(self.headers.clone())
            .send()
            .await?;
        let status = response.status();
        // drain the body so the connection goes back to the pool
        response.bytes().await?;
        tracing::trace!(%status, "http round trip");
        Ok(())
    }
}
