//! Page-service subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     PageServiceBuilder (metadata + operations)
//!     → PageService (immutable)
//!     → Registry (ordered, append-only)
//!
//! Per request:
//!     dispatcher selects a PageService
//!     → render() for page requests
//!     → parse_input() + run_service() for the run/poll path
//! ```
//!
//! # Design Decisions
//! - Services are immutable after construction; the registry is frozen
//!   after startup, so concurrent reads need no locking
//! - Operations are plain function values (`Arc<dyn Fn>`), assembled by
//!   the builder from configuration-like parts
//! - The narrow `Service` trait and the concrete `PageService` expose
//!   identical behavior; callers may hold either view

pub mod builder;
pub mod html;
pub mod registry;

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::http::request::Request;

/// Value passed into and out of service computations.
///
/// The wire layer only ever sees the `Display` form; `Null` renders as
/// the literal `null`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// No value.
    Null,
    /// An integer.
    Int(i64),
    /// Free-form text.
    Text(String),
    /// Reference to a file on disk.
    File(PathBuf),
}

impl Value {
    /// Returns true for `Value::Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Int(i) => write!(f, "{}", i),
            Value::Text(s) => write!(f, "{}", s),
            Value::File(p) => write!(f, "{}", p.display()),
        }
    }
}

/// Presentation metadata carried by every page service.
///
/// Fields never set through the builder stay empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceInfo {
    pub title: String,
    pub description: String,
    pub version: String,
    pub author: String,
    pub license: String,
}

/// The narrow service contract: identity accessors plus the compute
/// operation.
pub trait Service {
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    fn version(&self) -> &str;
    fn author(&self) -> &str;
    fn license(&self) -> &str;

    /// Endpoint slug derived from the title: lowercased, spaces replaced
    /// by hyphens. Not guaranteed unique across services.
    fn endpoint(&self) -> String {
        self.title().to_lowercase().replace(' ', "-")
    }

    /// Run the service's computation.
    ///
    /// Input of a shape the service does not handle passes through
    /// unchanged; services with no compute operation return `Null`.
    fn run_service(&self, input: Value) -> Value;
}

/// Compute operation: business logic, `Value` in, `Value` out.
pub type RunFn = dyn Fn(Value) -> Value + Send + Sync;

/// Input extraction: pulls a domain value out of the wire-level request.
pub type ParseInputFn = dyn Fn(&Request, &PageService) -> Value + Send + Sync;

/// Render operation: produces the service's full HTML document.
pub type RenderFn = dyn Fn(&PageService) -> String + Send + Sync;

/// A page service: presentation metadata plus up to three operations.
///
/// Built once at startup via [`builder::PageServiceBuilder`], then shared
/// read-only across requests.
pub struct PageService {
    info: ServiceInfo,
    run: Option<Arc<RunFn>>,
    parse_input: Option<Arc<ParseInputFn>>,
    render: Option<Arc<RenderFn>>,
}

impl PageService {
    pub(crate) fn from_parts(
        info: ServiceInfo,
        run: Option<Arc<RunFn>>,
        parse_input: Option<Arc<ParseInputFn>>,
        render: Option<Arc<RenderFn>>,
    ) -> Self {
        Self {
            info,
            run,
            parse_input,
            render,
        }
    }

    /// Presentation metadata.
    pub fn info(&self) -> &ServiceInfo {
        &self.info
    }

    /// Extract this service's input from a parsed request.
    ///
    /// Services without an input-extraction operation return `Null`.
    pub fn parse_input(&self, request: &Request) -> Value {
        match &self.parse_input {
            Some(f) => f(request, self),
            None => Value::Null,
        }
    }

    /// Render the service's full page.
    ///
    /// Services without a render operation produce an empty document.
    pub fn render(&self) -> String {
        match &self.render {
            Some(f) => f(self),
            None => String::new(),
        }
    }

    /// Compose the full HTML document around `inner` content.
    ///
    /// The exact markup is a wire-format contract: doctype and
    /// `<html lang="en">` wrapper, the fixed head, the description
    /// followed by two line breaks and `inner` in a `container` div, and
    /// the author/license/version footer.
    pub fn get_page(&self, inner: &str) -> String {
        let head = html::head(&self.info.title);
        let body = html::body(
            &format!("{}<br><br>{}", self.info.description, inner),
            &["container"],
        );
        let footer = html::footer(
            &self.info.author,
            &self.info.license,
            &self.info.version,
            &["container"],
        );
        html::wrapper(&format!("{}{}{}", head, body, footer))
    }
}

impl Service for PageService {
    fn title(&self) -> &str {
        &self.info.title
    }

    fn description(&self) -> &str {
        &self.info.description
    }

    fn version(&self) -> &str {
        &self.info.version
    }

    fn author(&self) -> &str {
        &self.info.author
    }

    fn license(&self) -> &str {
        &self.info.license
    }

    fn run_service(&self, input: Value) -> Value {
        match &self.run {
            Some(f) => f(input),
            None => Value::Null,
        }
    }
}

impl fmt::Debug for PageService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageService")
            .field("info", &self.info)
            .field("run", &self.run.is_some())
            .field("parse_input", &self.parse_input.is_some())
            .field("render", &self.render.is_some())
            .finish()
    }
}
