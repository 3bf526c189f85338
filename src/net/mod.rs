//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming TCP connection
//!     → listener.rs (bind, accept loop entry point)
//!     → Hand off to the HTTP layer
//! ```
//!
//! # Design Decisions
//! - No accept or read timeouts; a silent client stalls the server, by
//!   the documented single-client-at-a-time model
//! - Bind failures are fatal at startup; accept failures end the server

pub mod listener;

pub use listener::{Listener, ListenerError};
