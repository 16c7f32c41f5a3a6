//! Reqwest-backed primary transport adapter.
//!
//! This adapter owns transport details only: request assembly, the request
//! timeout, and mapping pre-response failures into the domain transport
//! error taxonomy. Response interpretation stays in the access layer.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::domain::access::{MultipartField, RequestBody};
use crate::domain::ports::{HttpTransport, TransportError, WireRequest, WireResponse};

/// Primary transport executing requests through a shared reqwest client.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build an adapter with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: WireRequest) -> Result<WireResponse, TransportError> {
        let method = reqwest::Method::from_bytes(request.method.as_str().as_bytes())
            .map_err(|error| TransportError::invalid_request(error.to_string()))?;
        let mut builder = self.client.request(method, request.url.clone());
        if let Some(body) = request.body {
            builder = match body {
                RequestBody::Json(value) => builder.json(&value),
                RequestBody::Multipart(fields) => builder.multipart(build_form(fields)?),
            };
        }
        // Headers go on last with insert semantics so per-request overrides
        // (content-type included) win over whatever the body setter chose.
        builder = builder.headers(build_headers(&request.headers)?);

        let response = builder.send().await.map_err(map_transport_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(map_transport_error)?;
        Ok(WireResponse {
            status,
            body: body.to_vec(),
        })
    }
}

fn build_headers(headers: &[(String, String)]) -> Result<HeaderMap, TransportError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(|error| {
            TransportError::invalid_request(format!("invalid header name {name:?}: {error}"))
        })?;
        let value = HeaderValue::from_str(value).map_err(|error| {
            TransportError::invalid_request(format!("invalid value for header {name}: {error}"))
        })?;
        map.insert(name, value);
    }
    Ok(map)
}

fn build_form(fields: Vec<MultipartField>) -> Result<reqwest::multipart::Form, TransportError> {
    let mut form = reqwest::multipart::Form::new();
    for field in fields {
        let mut part = reqwest::multipart::Part::bytes(field.bytes);
        if let Some(filename) = field.filename {
            part = part.file_name(filename);
        }
        if let Some(content_type) = field.content_type {
            part = part.mime_str(&content_type).map_err(|error| {
                TransportError::invalid_request(format!(
                    "invalid part content type {content_type:?}: {error}"
                ))
            })?;
        }
        form = form.part(field.name, part);
    }
    Ok(form)
}

fn map_transport_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::timeout(error.to_string())
    } else if error.is_connect() {
        TransportError::connect(error.to_string())
    } else {
        TransportError::protocol(error.to_string())
    }
}
