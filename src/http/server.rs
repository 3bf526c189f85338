//! Server context and accept loop.
//!
//! # Responsibilities
//! - Hold the shared state every request handler needs
//! - Accept connections and handle them one at a time
//! - Isolate per-connection failures from the accept loop
//!
//! # Design Decisions
//! - Connections are served serially, in acceptance order; background
//!   render jobs are the only true concurrency
//! - `last_selected` and the render slot are single process-wide cells
//!   behind mutexes: racing writers are well-defined last-writer-wins,
//!   with no session or correlation identity
//! - Transport errors are logged and the connection abandoned; only an
//!   accept error stops the server

use std::sync::{Arc, Mutex};

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::config::ServerConfig;
use crate::http::{request, response};
use crate::jobs::render::RenderSlot;
use crate::net::listener::{Listener, ListenerError};
use crate::routing::{Dispatch, Dispatcher};
use crate::service::registry::Registry;
use crate::service::PageService;

/// Shared state passed to every request handler.
pub struct ServerContext {
    registry: Registry,
    last_selected: Mutex<Option<Arc<PageService>>>,
    render_slot: RenderSlot,
}

impl ServerContext {
    pub fn new(registry: Registry, render_slot: RenderSlot) -> Self {
        Self {
            registry,
            last_selected: Mutex::new(None),
            render_slot,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The most recently matched service, if any.
    pub fn last_selected(&self) -> Option<Arc<PageService>> {
        self.last_selected
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Record the most recently matched service. Last writer wins.
    pub fn set_last_selected(&self, service: Arc<PageService>) {
        *self
            .last_selected
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(service);
    }

    pub fn render_slot(&self) -> &RenderSlot {
        &self.render_slot
    }
}

/// The hand-rolled HTTP server.
pub struct HttpServer {
    context: Arc<ServerContext>,
    dispatcher: Dispatcher,
    config: ServerConfig,
}

impl HttpServer {
    pub fn new(config: ServerConfig, registry: Registry, render_slot: RenderSlot) -> Self {
        let dispatcher = Dispatcher::new(config.routing.strategy);
        Self {
            context: Arc::new(ServerContext::new(registry, render_slot)),
            dispatcher,
            config,
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn context(&self) -> &Arc<ServerContext> {
        &self.context
    }

    /// Run the accept loop until the listening socket errors.
    ///
    /// Each connection is handled to completion before the next accept,
    /// so requests are served in acceptance order and a slow client
    /// stalls the server.
    pub async fn run(self, listener: Listener) -> Result<(), ListenerError> {
        loop {
            let (stream, addr) = match listener.accept().await {
                Ok(conn) => conn,
                Err(e) => {
                    tracing::error!(error = %e, "Server error");
                    return Err(e);
                }
            };

            tracing::info!(peer = %addr, "Client connected");
            if let Err(e) = self.handle_client(stream).await {
                tracing::error!(peer = %addr, error = %e, "Connection error");
            }
        }
    }

    /// Read one request, dispatch it, write the outcome, close.
    async fn handle_client(&self, mut stream: TcpStream) -> std::io::Result<()> {
        let request = request::read_request(&mut stream).await?;
        tracing::info!(method = %request.method(), uri = %request.uri(), "Request received");

        match self.dispatcher.dispatch(&request, &self.context) {
            Dispatch::Page(service) => {
                response::send_page(&mut stream, &service.render()).await?
            }
            Dispatch::Listing => {
                let page = response::listing_page(self.context.registry().services());
                response::send_page(&mut stream, &page).await?
            }
            Dispatch::Result(output) => response::send_result(&mut stream, &output).await?,
            Dispatch::NotFound => response::send_not_found(&mut stream).await?,
        }

        stream.shutdown().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::builder::PageServiceBuilder;
    use crate::service::Service;

    #[test]
    fn last_selected_is_last_writer_wins() {
        let mut registry = Registry::new();
        registry.register(PageServiceBuilder::new().title("One").build());
        let ctx = ServerContext::new(registry, RenderSlot::new());
        assert!(ctx.last_selected().is_none());

        let a = Arc::new(PageServiceBuilder::new().title("A").build());
        let b = Arc::new(PageServiceBuilder::new().title("B").build());
        ctx.set_last_selected(a);
        ctx.set_last_selected(Arc::clone(&b));

        assert_eq!(ctx.last_selected().unwrap().endpoint(), b.endpoint());
    }
}
