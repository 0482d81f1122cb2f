//! HTTP/1.1 Fetch Client
//!
//! One-shot HTTP client built on hyper. Each fetch opens a connection,
//! performs a single request and collects the body; the SIM Manager
//! endpoints are request/response only, so no connection is kept alive.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::{Method, Request, Uri};
use hyper_util::rt::TokioIo;
use tokio::net::TcpStream;

use crate::error::{FetchError, FetchResult};
use crate::message::{FetchRequest, FetchResponse};

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT: u64 = 5;
/// Default request timeout in seconds
const DEFAULT_REQUEST_TIMEOUT: u64 = 30;

/// Transport collaborator seam: anything that can perform a fetch.
///
/// Card backends depend on this trait rather than on [`FetchClient`]
/// directly, so tests can script responses without a network.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Perform the request and return the response, whatever its status.
    /// `Err` means the transport itself failed (connect, timeout, protocol).
    async fn fetch(&self, request: FetchRequest) -> FetchResult<FetchResponse>;
}

/// Fetch client configuration
#[derive(Debug, Clone)]
pub struct FetchClientConfig {
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Request timeout
    pub request_timeout: Duration,
}

impl Default for FetchClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT),
        }
    }
}

impl FetchClientConfig {
    /// Set connection timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// HTTP/1.1 fetch client
#[derive(Debug, Clone, Default)]
pub struct FetchClient {
    config: FetchClientConfig,
}

impl FetchClient {
    /// Create a new fetch client
    pub fn new(config: FetchClientConfig) -> Self {
        Self { config }
    }

    /// Get the client configuration
    pub fn config(&self) -> &FetchClientConfig {
        &self.config
    }
}

/// Split an absolute URL into authority parts hyper needs
fn parse_url(url: &str) -> FetchResult<(Uri, String, String, u16)> {
    let uri: Uri = url
        .parse()
        .map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))?;

    match uri.scheme_str() {
        Some("http") => {}
        Some(other) => {
            return Err(FetchError::InvalidUrl(format!(
                "unsupported scheme {other:?} in {url}"
            )))
        }
        None => return Err(FetchError::InvalidUrl(format!("{url}: missing scheme"))),
    }

    let host = uri
        .host()
        .ok_or_else(|| FetchError::InvalidUrl(format!("{url}: missing host")))?
        .to_string();
    let port = uri.port_u16().unwrap_or(80);
    let authority = uri
        .authority()
        .map(|a| a.to_string())
        .unwrap_or_else(|| host.clone());

    Ok((uri, authority, host, port))
}

#[async_trait]
impl Fetcher for FetchClient {
    async fn fetch(&self, request: FetchRequest) -> FetchResult<FetchResponse> {
        let (uri, authority, host, port) = parse_url(&request.url)?;

        let addr = format!("{host}:{port}");
        let stream = tokio::time::timeout(self.config.connect_timeout, TcpStream::connect(&addr))
            .await
            .map_err(|_| FetchError::Timeout)?
            .map_err(|e| FetchError::ConnectionError(format!("{addr}: {e}")))?;

        let io = TokioIo::new(stream);
        let (mut sender, conn) = hyper::client::conn::http1::handshake(io)
            .await
            .map_err(|e| FetchError::ConnectionError(e.to_string()))?;

        tokio::spawn(async move {
            if let Err(e) = conn.await {
                log::debug!("HTTP connection error: {e}");
            }
        });

        let method: Method = request
            .method
            .parse()
            .map_err(|_| FetchError::HttpError(format!("invalid method {:?}", request.method)))?;

        let body = request
            .content
            .map(|c| Full::new(Bytes::from(c)))
            .unwrap_or_else(|| Full::new(Bytes::new()));

        // Origin-form request target; the authority goes into the Host header
        let target = uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/")
            .to_string();

        let mut req_builder = Request::builder()
            .method(method)
            .uri(target)
            .header(hyper::header::HOST, authority);

        for (key, value) in &request.headers {
            req_builder = req_builder.header(key.as_str(), value.as_str());
        }

        let http_request = req_builder
            .body(body)
            .map_err(|e| FetchError::HttpError(e.to_string()))?;

        let response = tokio::time::timeout(
            self.config.request_timeout,
            sender.send_request(http_request),
        )
        .await
        .map_err(|_| FetchError::Timeout)?
        .map_err(|e| FetchError::HttpError(e.to_string()))?;

        let status = response.status().as_u16();

        let mut headers = std::collections::HashMap::new();
        for (key, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(key.to_string(), v.to_string());
            }
        }

        let body_bytes = response
            .into_body()
            .collect()
            .await
            .map_err(|e| FetchError::InvalidResponse(e.to_string()))?
            .to_bytes();

        let body = if body_bytes.is_empty() {
            None
        } else {
            Some(String::from_utf8_lossy(&body_bytes).to_string())
        };

        Ok(FetchResponse {
            status,
            headers,
            body,
        })
    }
}
