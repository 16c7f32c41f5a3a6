//! Raw-socket fallback transport.
//!
//! A deliberately small HTTP/1.1 GET that bypasses the primary client stack:
//! one TCP connection, `Connection: close`, response read to EOF and split at
//! the first blank line. Plaintext only; TLS stays the primary client's job,
//! so an `https` base URL surfaces a protocol error from this path.

use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use url::Url;

use crate::domain::ports::{FallbackTransport, TransportError, WireResponse};

/// Fallback transport issuing bare GET requests over a fresh TCP connection.
pub struct TcpFallbackTransport {
    timeout: Duration,
}

impl TcpFallbackTransport {
    /// Build a fallback transport bounded by `timeout` per exchange.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl FallbackTransport for TcpFallbackTransport {
    async fn get(
        &self,
        url: &Url,
        headers: &[(String, String)],
    ) -> Result<WireResponse, TransportError> {
        tokio::time::timeout(self.timeout, exchange(url, headers))
            .await
            .map_err(|_| {
                TransportError::timeout(format!(
                    "fallback GET {url} exceeded {}s",
                    self.timeout.as_secs()
                ))
            })?
    }
}

async fn exchange(
    url: &Url,
    headers: &[(String, String)],
) -> Result<WireResponse, TransportError> {
    if url.scheme() != "http" {
        return Err(TransportError::protocol(format!(
            "fallback transport only speaks plain http, got {:?}",
            url.scheme()
        )));
    }
    let host = url
        .host_str()
        .ok_or_else(|| TransportError::invalid_request("fallback URL has no host"))?;
    let port = url.port_or_known_default().unwrap_or(80);
    let mut stream = TcpStream::connect((host, port))
        .await
        .map_err(|error| TransportError::connect(error.to_string()))?;

    let mut target = url.path().to_owned();
    if let Some(query) = url.query() {
        target.push('?');
        target.push_str(query);
    }
    let host_header = match url.port() {
        Some(explicit) => format!("{host}:{explicit}"),
        None => host.to_owned(),
    };

    let mut request = format!("GET {target} HTTP/1.1\r\nHost: {host_header}\r\nConnection: close\r\n");
    for (name, value) in headers {
        request.push_str(&format!("{name}: {value}\r\n"));
    }
    request.push_str("\r\n");

    stream
        .write_all(request.as_bytes())
        .await
        .map_err(|error| TransportError::connect(error.to_string()))?;
    let mut raw = Vec::new();
    stream
        .read_to_end(&mut raw)
        .await
        .map_err(|error| TransportError::connect(error.to_string()))?;

    parse_response(&raw)
}

fn parse_response(raw: &[u8]) -> Result<WireResponse, TransportError> {
    let boundary = find_blank_line(raw)
        .ok_or_else(|| TransportError::protocol("response missing header terminator"))?;
    let head = String::from_utf8_lossy(&raw[..boundary]);
    let body = &raw[boundary + 4..];

    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|code| code.parse::<u16>().ok())
        .ok_or_else(|| TransportError::protocol("response has no parsable status line"))?;

    let body = if is_chunked(&head) {
        dechunk(body)?
    } else {
        body.to_vec()
    };
    Ok(WireResponse { status, body })
}

fn find_blank_line(raw: &[u8]) -> Option<usize> {
    raw.windows(4).position(|window| window == b"\r\n\r\n")
}

fn is_chunked(head: &str) -> bool {
    head.lines().skip(1).any(|line| {
        line.split_once(':').is_some_and(|(name, value)| {
            name.trim().eq_ignore_ascii_case("transfer-encoding")
                && value.trim().eq_ignore_ascii_case("chunked")
        })
    })
}

// Servers are free to chunk even on a connection they intend to close, so the
// fallback understands the framing rather than hoping for content-length.
fn dechunk(mut body: &[u8]) -> Result<Vec<u8>, TransportError> {
    let mut decoded = Vec::new();
    loop {
        let line_end = find_crlf(body)
            .ok_or_else(|| TransportError::protocol("chunked body missing size line"))?;
        let size_text = String::from_utf8_lossy(&body[..line_end]);
        let size_field = size_text
            .split(';')
            .next()
            .unwrap_or_default()
            .trim();
        let size = usize::from_str_radix(size_field, 16).map_err(|error| {
            TransportError::protocol(format!("invalid chunk size {size_field:?}: {error}"))
        })?;
        body = body
            .get(line_end + 2..)
            .ok_or_else(|| TransportError::protocol("chunked body truncated after size"))?;
        if size == 0 {
            return Ok(decoded);
        }
        let chunk = body
            .get(..size)
            .ok_or_else(|| TransportError::protocol("chunked body shorter than declared"))?;
        decoded.extend_from_slice(chunk);
        body = body
            .get(size + 2..)
            .ok_or_else(|| TransportError::protocol("chunk missing trailing CRLF"))?;
    }
}

fn find_crlf(raw: &[u8]) -> Option<usize> {
    raw.windows(2).position(|window| window == b"\r\n")
}
