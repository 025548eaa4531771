//! The one outbound HTTP call.
//!
//! A single blocking PUT, no retries. The transport sits behind a trait so
//! tests can record calls without opening sockets.

use tracing::debug;

use crate::config::Credentials;
use crate::error::{QubooError, Result};
use crate::score::ScoreRequest;

pub const HEADER_ACCESS_KEY: &str = "x-quboo-access-key";
pub const HEADER_SECRET_KEY: &str = "x-quboo-secret-key";

/// Raw status and body of the server's answer.
#[derive(Debug, Clone)]
pub struct WireResponse {
    pub status: u16,
    pub body: String,
}

/// Delivers one score payload to the server.
pub trait Transport {
    fn put_score(
        &self,
        url: &str,
        credentials: &Credentials,
        payload: &ScoreRequest,
    ) -> Result<WireResponse>;
}

/// Production transport over a blocking reqwest client.
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder().build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn put_score(
        &self,
        url: &str,
        credentials: &Credentials,
        payload: &ScoreRequest,
    ) -> Result<WireResponse> {
        debug!(url, "sending score");

        let response = self
            .client
            .put(url)
            .header(HEADER_ACCESS_KEY, &credentials.access_key)
            .header(HEADER_SECRET_KEY, &credentials.secret_key)
            .json(payload)
            .send()?;

        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(WireResponse { status, body })
    }
}

/// Map the server's answer to the run outcome.
pub fn handle_response(response: WireResponse) -> Result<String> {
    match response.status {
        200 => Ok(response.body),
        403 => Err(QubooError::Forbidden),
        status => Err(QubooError::ServerRejected {
            status,
            body: response.body,
        }),
    }
}
