//! Access-layer service: one typed request operation over injected ports.
//!
//! Per-request orchestration: resolve the path against the single configured
//! base URL, attach the stored bearer credential, execute on the primary
//! transport, then surface the response. Responses with status 401 trigger
//! the cross-cutting side effect (credential wipe plus login redirect) before
//! erroring. A request that fails without any response is retried exactly
//! once on the fallback transport, and only when the method is GET.

mod error;
mod request;


pub use error::ApiError;
pub use request::{Method, MultipartField, RequestBody, RequestOptions};

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;

use crate::domain::ports::{
    FallbackTransport, HttpTransport, Navigator, SessionStore, WireRequest, WireResponse,
};

/// Injected capabilities the access layer operates through.
pub struct AccessPorts {
    /// Primary HTTP client.
    pub transport: Arc<dyn HttpTransport>,
    /// Lower-level transport for GET retries.
    pub fallback: Arc<dyn FallbackTransport>,
    /// Credential store, read per request.
    pub session: Arc<dyn SessionStore>,
    /// Shell navigation for the 401 redirect.
    pub navigator: Arc<dyn Navigator>,
}

/// Shared entry point for all backend calls.
pub struct ApiClient {
    base_url: Url,
    ports: AccessPorts,
}

impl ApiClient {
    /// Build a client over explicit ports.
    ///
    /// `base_url` is the single configured host; both transports resolve
    /// request paths against it.
    #[must_use]
    pub fn new(base_url: Url, ports: AccessPorts) -> Self {
        Self { base_url, ports }
    }

    /// Issue one request and decode the success payload as `T`.
    ///
    /// The response body is returned as the backend sent it, structurally
    /// decoded as JSON and nothing more; an empty success body decodes as
    /// JSON `null` so `()` and `Option<T>` callers work.
    ///
    /// # Errors
    ///
    /// See [`ApiError`] for the taxonomy. Non-success statuses surface the
    /// server payload verbatim; 401 additionally wipes the session store and
    /// redirects to login before surfacing.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let url = self.resolve(path)?;
        let headers = self.request_headers(&options).await?;
        let correlation_id = Uuid::new_v4();
        debug!(%correlation_id, %method, path, "issuing backend request");

        let wire = WireRequest {
            method,
            url: url.clone(),
            headers: headers.clone(),
            body,
        };
        match self.ports.transport.execute(wire).await {
            Ok(response) => self.accept(response, correlation_id).await,
            Err(error) => {
                if error.is_timeout() {
                    warn!(%correlation_id, %method, path, error = %error, "backend request timed out");
                } else {
                    debug!(%correlation_id, %method, path, error = %error, "primary transport failed");
                }
                if !method.supports_fallback() {
                    return Err(error.into());
                }
                warn!(%correlation_id, path, "retrying GET on fallback transport");
                match self.ports.fallback.get(&url, &headers).await {
                    Ok(response) => self.accept(response, correlation_id).await,
                    Err(fallback_error) => {
                        warn!(%correlation_id, path, error = %fallback_error, "fallback transport failed");
                        Err(fallback_error.into())
                    }
                }
            }
        }
    }

    /// GET `path` and decode the payload.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from [`Self::request`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::Get, path, None, RequestOptions::default())
            .await
    }

    /// POST `body` to `path` and decode the payload.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from [`Self::request`].
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: RequestBody,
    ) -> Result<T, ApiError> {
        self.request(Method::Post, path, Some(body), RequestOptions::default())
            .await
    }

    /// PUT `body` to `path` and decode the payload.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from [`Self::request`].
    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: RequestBody,
    ) -> Result<T, ApiError> {
        self.request(Method::Put, path, Some(body), RequestOptions::default())
            .await
    }

    /// PATCH `body` to `path` and decode the payload.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from [`Self::request`].
    pub async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        body: RequestBody,
    ) -> Result<T, ApiError> {
        self.request(Method::Patch, path, Some(body), RequestOptions::default())
            .await
    }

    /// DELETE `path` and decode the payload.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from [`Self::request`].
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::Delete, path, None, RequestOptions::default())
            .await
    }

    /// Drop the stored credential without contacting the backend.
    ///
    /// Supports the explicit logout flow; the 401 path clears the store on
    /// its own.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Session`] when the store rejects the write.
    pub async fn clear_session(&self) -> Result<(), ApiError> {
        self.ports.session.clear().await?;
        Ok(())
    }

    fn resolve(&self, path: &str) -> Result<Url, ApiError> {
        if !path.starts_with('/') {
            return Err(ApiError::invalid_request(format!(
                "path must be server-relative, got {path:?}"
            )));
        }
        self.base_url.join(path).map_err(|error| {
            ApiError::invalid_request(format!("cannot resolve {path:?}: {error}"))
        })
    }

    async fn request_headers(
        &self,
        options: &RequestOptions,
    ) -> Result<Vec<(String, String)>, ApiError> {
        let mut headers = Vec::with_capacity(options.headers.len() + 3);
        headers.push(("accept".to_owned(), "application/json".to_owned()));
        if let Some(token) = self.ports.session.access_token().await? {
            headers.push((
                "authorization".to_owned(),
                format!("Bearer {}", token.expose()),
            ));
        }
        headers.extend(options.headers.iter().cloned());
        if let Some(content_type) = &options.content_type {
            headers.push(("content-type".to_owned(), content_type.clone()));
        }
        Ok(headers)
    }

    async fn accept<T: DeserializeOwned>(
        &self,
        response: WireResponse,
        correlation_id: Uuid,
    ) -> Result<T, ApiError> {
        if response.status == 401 {
            warn!(%correlation_id, "session rejected; clearing credentials and redirecting to login");
            if let Err(error) = self.ports.session.clear().await {
                warn!(%correlation_id, error = %error, "failed to clear rejected session");
            }
            self.ports.navigator.redirect_to_login().await;
            return Err(ApiError::Unauthorized {
                body: decode_error_body(&response.body),
            });
        }
        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                body: decode_error_body(&response.body),
            });
        }
        decode_payload(&response.body)
    }
}

fn decode_error_body(body: &[u8]) -> Value {
    if body.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}

fn decode_payload<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    let effective: &[u8] = if body.is_empty() { b"null" } else { body };
    serde_json::from_slice(effective).map_err(|error| ApiError::decode(error.to_string()))
}
