//! Background jobs.
//!
//! # Data Flow
//! ```text
//! run_service(File input)
//!     → render.rs: synchronous validation (abort + log on failure)
//!     → detached tokio task (slow external render)
//!     → RenderSlot (single shared cell, last writer wins)
//!     ← observers poll the slot via a later run/poll request
//! ```
//!
//! # Design Decisions
//! - Fire-and-forget: the triggering call returns before the job runs,
//!   and background failures are logged, never surfaced
//! - No job ids, no queue, no cancellation; a new result overwrites the
//!   slot unconditionally

pub mod render;

pub use render::{check_blend_file, render_frame, RenderSlot, ValidateError};
