//! Response serialization.
//!
//! # Responsibilities
//! - Write the chosen dispatch outcome to the connection
//! - Keep every wire format byte-exact
//!
//! # Design Decisions
//! - Service pages and the listing page are raw HTML bytes with no
//!   status line; only the 404 path is a conformant status response
//! - The run/poll result keeps its legacy preamble line verbatim;
//!   existing polling clients match on those exact bytes

use std::sync::Arc;

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::service::{PageService, Service, Value};

/// Exact not-found bytes.
pub const NOT_FOUND: &[u8] = b"HTTP/1.1 404 Not Found\r\n\r\n";

/// Preamble written before a run/poll result.
pub const RESULT_PREAMBLE: &[u8] = b"POST /rendered-image HTTP/1.1\r\n\r\n";

/// Write the not-found response.
pub async fn send_not_found<W>(writer: &mut W) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(NOT_FOUND).await
}

/// Write a full HTML document as-is.
pub async fn send_page<W>(writer: &mut W, html: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(html.as_bytes()).await
}

/// Write a run/poll result: the literal preamble line followed by the
/// output's textual form.
pub async fn send_result<W>(writer: &mut W, output: &Value) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(RESULT_PREAMBLE).await?;
    writer.write_all(output.to_string().as_bytes()).await
}

/// Build the fallback page enumerating every registered service's
/// metadata.
pub fn listing_page(services: &[Arc<PageService>]) -> String {
    let mut page = String::from("<html><body>");
    for service in services {
        page.push_str(&format!("<h1>{}</h1>", service.title()));
        page.push_str(&format!("<p>{}</p>", service.description()));
        page.push_str(&format!("<p>{}</p>", service.version()));
        page.push_str(&format!("<p>{}</p>", service.author()));
        page.push_str(&format!("<p>{}</p>", service.license()));
    }
    page.push_str("</body></html>");
    page
}
