//! Request reading and parsing.
//!
//! # Responsibilities
//! - Read the byte stream one byte at a time until `\r\n\r\n`
//! - Parse the request line (method, URI) and header lines
//! - Tolerate truncated or malformed input without failing
//!
//! # Design Decisions
//! - No body is ever read; reading stops at the header terminator
//! - A stream that closes early yields whatever was accumulated;
//!   truncation is not an error, callers must cope with an empty request
//! - Malformed header lines are silently dropped; duplicate names keep
//!   the last value
//! - The raw header text is retained for substring route matching

use std::collections::HashMap;

use tokio::io::{AsyncRead, AsyncReadExt};

/// Terminator between the header section and the (never-read) body.
const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";

/// A parsed request: request line plus headers. Immutable once parsed.
#[derive(Debug, Clone, Default)]
pub struct Request {
    method: String,
    uri: String,
    headers: HashMap<String, String>,
    raw: String,
}

impl Request {
    /// Parse accumulated request text. Never fails; missing pieces stay
    /// empty.
    pub fn parse(raw: &str) -> Self {
        let mut method = String::new();
        let mut uri = String::new();
        let mut headers = HashMap::new();

        let mut lines = raw.split("\r\n");
        if let Some(request_line) = lines.next() {
            let mut tokens = request_line.split(' ');
            if let Some(m) = tokens.next() {
                method = m.to_string();
            }
            if let Some(u) = tokens.next() {
                uri = u.to_string();
            }
        }

        for line in lines {
            if line.is_empty() {
                break;
            }
            match line.split_once(": ") {
                Some((name, value)) => {
                    headers.insert(name.to_string(), value.to_string());
                }
                None => {
                    tracing::debug!(line, "Dropping malformed header line");
                }
            }
        }

        Self {
            method,
            uri,
            headers,
            raw: raw.to_string(),
        }
    }

    /// Request method; empty if the request line was unparsable.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Request URI; empty if absent.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// URI path component: the URI up to any query string.
    pub fn path(&self) -> &str {
        self.uri
            .split_once('?')
            .map(|(path, _)| path)
            .unwrap_or(&self.uri)
    }

    /// Header value by exact name, if present.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// The matching target: the full raw request text when any bytes
    /// arrived, otherwise the (empty) URI.
    pub fn target(&self) -> &str {
        if self.raw.is_empty() {
            &self.uri
        } else {
            &self.raw
        }
    }
}

/// Read a request from `reader`, one byte at a time, stopping at the
/// header terminator.
///
/// EOF before the terminator is not an error: whatever accumulated is
/// parsed and returned. I/O failures propagate.
pub async fn read_request<R>(reader: &mut R) -> std::io::Result<Request>
where
    R: AsyncRead + Unpin,
{
    let mut buf: Vec<u8> = Vec::new();
    let mut byte = [0u8; 1];

    loop {
        let n = reader.read(&mut byte).await?;
        if n == 0 {
            break;
        }
        buf.push(byte[0]);
        if buf.ends_with(HEADER_TERMINATOR) {
            break;
        }
    }

    Ok(Request::parse(&String::from_utf8_lossy(&buf)))
}
