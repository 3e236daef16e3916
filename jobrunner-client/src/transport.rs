//! HTTP transport
//!
//! The runner only shapes and sequences requests; executing them is delegated
//! to a [`Transport`]. [`HttpTransport`] is the reqwest-backed implementation
//! used outside of tests.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{trace, warn};

use crate::error::Result;
use crate::request::HttpRequest;

/// Status, content type and body of an HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

/// Executes HTTP requests for the job runner
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request` and returns the complete response
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Transport backed by a reqwest [`Client`]
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport with standard certificate validation, or one that
    /// trusts every certificate and hostname when `insecure_tls` is set
    pub fn new(insecure_tls: bool) -> Result<Self> {
        let mut builder = Client::builder();

        if insecure_tls {
            warn!("TLS verification disabled: accepting any certificate and hostname");
            builder = builder
                .danger_accept_invalid_certs(true)
                .danger_accept_invalid_hostnames(true);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Wraps an already configured reqwest client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        trace!("{} {}", request.method, request.url);

        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.text().await?;

        Ok(HttpResponse {
            status,
            content_type,
            body,
        })
    }
}
