//! HTTP transport implementation using reqwest.

use std::time::Duration;

use async_trait::async_trait;
use emlak_application::{HttpTransport, TransportError};
use emlak_domain::{ApiRequest, HttpMethod, RawResponse, RequestBody};
use reqwest::{Client, Method};
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;

/// HTTP transport backed by `reqwest::Client`.
///
/// Resolves request paths against the configured base URL (including its
/// path prefix), applies the fixed request timeout and the
/// `Accept-Language` header. Authentication headers are not handled here;
/// they arrive per attempt from the client core.
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
    timeout_ms: u64,
    accept_language: String,
}

impl ReqwestTransport {
    /// Creates a transport from the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(concat!("emlak-client/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_ms: config.timeout_ms,
            accept_language: config.accept_language.clone(),
        })
    }

    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// Appends the request path to the base URL. Plain concatenation: a
    /// base of `…/api/v1` plus `/auth/login` must keep the prefix, which
    /// `Url::join` would strip.
    fn resolve_url(&self, path: &str) -> Result<Url, TransportError> {
        let full = format!("{}{path}", self.base_url);
        Url::parse(&full).map_err(|e| TransportError::InvalidUrl(format!("{e}: {full}")))
    }

    fn build_body(
        builder: reqwest::RequestBuilder,
        body: &RequestBody,
    ) -> reqwest::RequestBuilder {
        match body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Multipart {
                field,
                file_name,
                content,
            } => {
                let part = reqwest::multipart::Part::bytes(content.clone())
                    .file_name(file_name.clone());
                let form = reqwest::multipart::Form::new().part(field.clone(), part);
                builder.multipart(form)
            }
        }
    }

    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout { timeout_ms };
        }
        if error.is_connect() {
            return TransportError::Connection(error.to_string());
        }
        TransportError::Other(error.to_string())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(
        &self,
        request: &ApiRequest,
        headers: &[(String, String)],
    ) -> Result<RawResponse, TransportError> {
        let url = self.resolve_url(&request.path)?;

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), url)
            .timeout(Duration::from_millis(self.timeout_ms))
            .header("Accept-Language", &self.accept_language);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in headers {
            builder = builder.header(name, value);
        }
        builder = Self::build_body(builder, &request.body);

        let response = builder
            .send()
            .await
            .map_err(|e| Self::map_error(&e, self.timeout_ms))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Other(format!("failed to read body: {e}")))?
            .to_vec();

        debug!(method = request.method.as_str(), path = %request.path, status, "request completed");
        Ok(RawResponse::new(status, body))
    }
}
