//! Coda: a minimal, hand-rolled HTTP server exposing named page
//! services.
//!
//! A page service bundles presentation metadata (title, description,
//! author, version, license) with up to three operations: input
//! extraction, computation, and rendering. The server parses requests
//! straight off the byte stream, matches them against each service's
//! derived endpoint slug, and answers with the service's self-contained
//! HTML page, a listing of every service, or a raw computation result.
//!
//! ```text
//!     Connection accepted
//!         → http::request (byte-by-byte parse up to CRLFCRLF)
//!         → routing::dispatcher (pseudo-endpoints, then MatchStrategy)
//!         → service (render, or parse_input + run_service)
//!         → http::response (page / listing / raw result / 404)
//!         → connection closed
//!
//!     jobs::render runs detached; results land in the shared slot and
//!     are discovered by polling.
//! ```

pub mod app;
pub mod config;
pub mod http;
pub mod jobs;
pub mod net;
pub mod routing;
pub mod service;

pub use config::ServerConfig;
pub use http::{HttpServer, ServerContext};
pub use service::{PageService, Service, Value};
