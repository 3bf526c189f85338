//! HTTP layer.
//!
//! # Data Flow
//! ```text
//! Accepted TCP stream
//!     → request.rs (byte-by-byte read up to CRLFCRLF, parse)
//!     → server.rs (dispatch via routing, using the ServerContext)
//!     → response.rs (page / listing / raw result / 404 bytes)
//!     → connection closed
//! ```
//!
//! # Design Decisions
//! - Deliberately partial HTTP/1.1: request bodies are never read, and
//!   only the 404 response carries a status line
//! - One connection is handled to completion before the next accept

pub mod request;
pub mod response;
pub mod server;

pub use server::{HttpServer, ServerContext};
