//! Builder for page services.
//!
//! Assembles the static metadata and the three optional operations into
//! an immutable [`PageService`]. Metadata left unset stays an empty
//! string rather than a sentinel value.

use std::sync::Arc;

use super::{PageService, ParseInputFn, RenderFn, RunFn, ServiceInfo, Value};
use crate::http::request::Request;

/// Builder for a [`PageService`].
#[derive(Default)]
pub struct PageServiceBuilder {
    info: ServiceInfo,
    run: Option<Arc<RunFn>>,
    parse_input: Option<Arc<ParseInputFn>>,
    render: Option<Arc<RenderFn>>,
}

impl PageServiceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.info.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.info.description = description.into();
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.info.version = version.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.info.author = author.into();
        self
    }

    pub fn license(mut self, license: impl Into<String>) -> Self {
        self.info.license = license.into();
        self
    }

    /// Set the compute operation.
    pub fn run(mut self, f: impl Fn(Value) -> Value + Send + Sync + 'static) -> Self {
        self.run = Some(Arc::new(f));
        self
    }

    /// Set the input-extraction operation.
    pub fn parse_input(
        mut self,
        f: impl Fn(&Request, &PageService) -> Value + Send + Sync + 'static,
    ) -> Self {
        self.parse_input = Some(Arc::new(f));
        self
    }

    /// Set the render operation.
    pub fn render(mut self, f: impl Fn(&PageService) -> String + Send + Sync + 'static) -> Self {
        self.render = Some(Arc::new(f));
        self
    }

    pub fn build(self) -> PageService {
        PageService::from_parts(self.info, self.run, self.parse_input, self.render)
    }
}
