//! Request dispatch.
//!
//! # Responsibilities
//! - Check the run/poll pseudo-endpoints before generic matching
//! - Collect matching services and apply the ambiguity policy
//! - Update the last-selected service on a unique match
//!
//! # Design Decisions
//! - Pseudo-endpoints are matched by exact path equality (query string
//!   excluded) regardless of the configured strategy
//! - Every failure on the run/poll path degrades to not-found; the wire
//!   never distinguishes dispatch failures from each other
//! - The outcome is a plain enum; serialization is the response
//!   writer's job

use std::sync::Arc;

use crate::http::request::Request;
use crate::http::server::ServerContext;
use crate::routing::matcher::MatchStrategy;
use crate::service::{PageService, Service, Value};

/// Pseudo-endpoint that executes the last-selected service.
pub const RUN_ENDPOINT: &str = "/runService";

/// Pseudo-endpoint that polls for the most recent render result.
pub const POLL_ENDPOINT: &str = "/rendered-image";

/// Outcome of dispatching one request.
#[derive(Debug)]
pub enum Dispatch {
    /// Exactly one service matched; render its full page.
    Page(Arc<PageService>),
    /// Nothing matched; list every registered service.
    Listing,
    /// The run/poll path produced an output.
    Result(Value),
    /// Missing selection, ambiguous match, or a failed run.
    NotFound,
}

/// Matches requests against the registry under a fixed strategy.
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher {
    strategy: MatchStrategy,
}

impl Dispatcher {
    pub fn new(strategy: MatchStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    /// Resolve a request to a dispatch outcome, updating the context's
    /// last-selected service on a unique match.
    pub fn dispatch(&self, request: &Request, ctx: &ServerContext) -> Dispatch {
        if request.path() == RUN_ENDPOINT || request.path() == POLL_ENDPOINT {
            return self.dispatch_run(request, ctx);
        }

        let matches: Vec<Arc<PageService>> = ctx
            .registry()
            .services()
            .iter()
            .filter(|service| self.strategy.matches(request, &service.endpoint()))
            .cloned()
            .collect();

        if matches.len() > 1 {
            tracing::warn!(
                uri = %request.uri(),
                matches = matches.len(),
                "Ambiguous match"
            );
            return Dispatch::NotFound;
        }

        match matches.into_iter().next() {
            Some(service) => {
                ctx.set_last_selected(Arc::clone(&service));
                Dispatch::Page(service)
            }
            None => Dispatch::Listing,
        }
    }

    /// The run/poll path: execute the last-selected service against
    /// input extracted from this request.
    fn dispatch_run(&self, request: &Request, ctx: &ServerContext) -> Dispatch {
        let Some(service) = ctx.last_selected() else {
            tracing::warn!(uri = %request.uri(), "Run requested with no service selected");
            return Dispatch::NotFound;
        };

        let input = service.parse_input(request);
        tracing::info!(input = %input, endpoint = %service.endpoint(), "Running service");

        let output = service.run_service(input);
        if output.is_null() {
            // A null result has no payload form; clients expect 404
            // here, not an empty body.
            tracing::warn!(endpoint = %service.endpoint(), "Service produced no output");
            return Dispatch::NotFound;
        }

        Dispatch::Result(output)
    }
}
