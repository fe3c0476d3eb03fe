use std::future::Future;

use crate::Error;

pub trait GeneralAuthorizer {
    type Request;
    type Response;

    /// Always produces a response; the stub authorizers have no failure path.
    fn authorize(
        &self,
        request: Self::Request,
    ) -> impl Future<Output = Self::Response> + Send;
}

pub trait GeneralTransport {
    fn name(&self) -> &str;

    /// Whether `connect` performs a real handshake worth timing.
    fn has_handshake(&self) -> bool;

    fn connect(&mut self) -> impl Future<Output = Result<(), Error>> + Send;

    fn round_trip(&mut self) -> impl Future<Output = Result<(), Error>> + Send;
}
