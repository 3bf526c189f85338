//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Parsed Request
//!     → dispatcher.rs (pseudo-endpoints first, then generic matching)
//!     → matcher.rs (evaluate the configured MatchStrategy per service)
//!     → Dispatch outcome: Page | Listing | Result | NotFound
//! ```
//!
//! # Design Decisions
//! - The matching strategy is explicit and selectable at construction,
//!   never hidden inside string operations
//! - Ambiguity (more than one match) is a hard failure, never pick-first
//! - Zero matches fall back to the listing page, not an error

pub mod dispatcher;
pub mod matcher;

pub use dispatcher::{Dispatch, Dispatcher};
pub use matcher::MatchStrategy;
