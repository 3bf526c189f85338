//! End-to-end dispatch tests over a real localhost socket.
//!
//! The wire format is deliberately non-conformant HTTP, so these tests
//! talk raw bytes over a `TcpStream` instead of using an HTTP client.

use std::path::PathBuf;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use coda::app;
use coda::config::{ListenerConfig, ServerConfig};
use coda::http::HttpServer;
use coda::jobs::render::RenderSlot;
use coda::net::Listener;
use coda::routing::MatchStrategy;
use coda::service::builder::PageServiceBuilder;
use coda::service::registry::Registry;
use coda::service::Value;
use coda::Service;

/// Spawn a server on an ephemeral port and return its address.
async fn start_server(registry: Registry, render_slot: RenderSlot) -> std::net::SocketAddr {
    let mut config = ServerConfig::default();
    config.listener = ListenerConfig {
        bind_address: "127.0.0.1:0".into(),
    };
    config.routing.strategy = MatchStrategy::Substring;

    let listener = Listener::bind(&config.listener).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config, registry, render_slot);
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}

/// Send raw request bytes and collect the full response.
async fn roundtrip(addr: std::net::SocketAddr, request: &str) -> Vec<u8> {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    response
}

fn demo_registry() -> (Registry, RenderSlot) {
    let slot = RenderSlot::new();
    let registry = app::build_registry(&slot);
    (registry, slot)
}

#[tokio::test]
async fn unique_match_returns_the_rendered_page() {
    let (registry, slot) = demo_registry();
    let addr = start_server(registry, slot).await;

    let response = roundtrip(addr, "GET /adder HTTP/1.1\r\n\r\n").await;
    let body = String::from_utf8(response).unwrap();

    assert!(body.starts_with("<!DOCTYPE html>\n<html lang=\"en\">\n"));
    assert!(body.contains("<title>Adder</title>"));
    assert!(body.contains("Adds one to a number<br><br>"));
    assert!(body.contains("Made by Coda\nLicense: MIT\nVersion: 0.0.1\n"));
}

#[tokio::test]
async fn zero_matches_return_the_listing_page() {
    let (registry, slot) = demo_registry();
    let addr = start_server(registry, slot).await;

    let response = roundtrip(addr, "GET /nothing-registered-here HTTP/1.1\r\n\r\n").await;
    let body = String::from_utf8(response).unwrap();

    assert!(body.starts_with("<html><body>"));
    assert!(body.contains("<h1>Blender Farm</h1>"));
    assert!(body.contains("<p>A simple blender farm</p>"));
    assert!(body.contains("<h1>Adder</h1>"));
    assert!(body.ends_with("</body></html>"));
}

#[tokio::test]
async fn ambiguous_match_returns_404_bytes() {
    let mut registry = Registry::new();
    registry.register(PageServiceBuilder::new().title("Blender Farm").build());
    registry.register(PageServiceBuilder::new().title("Farm").build());
    let addr = start_server(registry, RenderSlot::new()).await;

    // "farm" is a substring of "blender-farm": both services match.
    let response = roundtrip(addr, "GET /blender-farm HTTP/1.1\r\n\r\n").await;
    assert_eq!(response, b"HTTP/1.1 404 Not Found\r\n\r\n");
}

#[tokio::test]
async fn run_without_prior_selection_returns_404() {
    let (registry, slot) = demo_registry();
    let addr = start_server(registry, slot).await;

    let response = roundtrip(addr, "GET /runService HTTP/1.1\r\n\r\n").await;
    assert_eq!(response, b"HTTP/1.1 404 Not Found\r\n\r\n");
}

#[tokio::test]
async fn run_after_selection_returns_the_raw_result() {
    let (registry, slot) = demo_registry();
    let addr = start_server(registry, slot).await;

    // Select the adder, then run it with an input from the query.
    let page = roundtrip(addr, "GET /adder HTTP/1.1\r\n\r\n").await;
    assert!(String::from_utf8(page).unwrap().contains("<title>Adder</title>"));

    let response = roundtrip(addr, "GET /runService?n=1 HTTP/1.1\r\n\r\n").await;
    assert_eq!(response, b"POST /rendered-image HTTP/1.1\r\n\r\n2");
}

#[tokio::test]
async fn selection_is_shared_state_with_no_session_identity() {
    let (registry, slot) = demo_registry();
    let addr = start_server(registry, slot).await;

    // "First client" selects the adder; a second client then selects
    // the blender farm, silently redirecting the first client's run.
    roundtrip(addr, "GET /adder HTTP/1.1\r\n\r\n").await;
    roundtrip(addr, "GET /blender-farm HTTP/1.1\r\n\r\n").await;

    // The adder would have answered with "2"; the blender farm has no
    // file input here, so the run degrades to 404.
    let response = roundtrip(addr, "GET /runService?n=1 HTTP/1.1\r\n\r\n").await;
    assert_eq!(response, b"HTTP/1.1 404 Not Found\r\n\r\n");
}

#[tokio::test]
async fn render_trigger_is_fire_and_forget() {
    let dir = tempfile::tempdir().unwrap();
    let blend = dir.path().join("scene.blend");
    std::fs::write(&blend, b"BLENDER").unwrap();

    let (registry, slot) = demo_registry();
    let addr = start_server(registry, slot.clone()).await;

    roundtrip(addr, "GET /blender-farm HTTP/1.1\r\n\r\n").await;

    // Triggering a render returns immediately with no payload; the job
    // has not completed, so the slot is still empty.
    let trigger = format!("GET /runService?file={} HTTP/1.1\r\n\r\n", blend.display());
    let response = roundtrip(addr, &trigger).await;
    assert_eq!(response, b"HTTP/1.1 404 Not Found\r\n\r\n");
    assert!(slot.current().is_none());

    // Polling before completion also answers 404.
    let poll = roundtrip(addr, "GET /rendered-image HTTP/1.1\r\n\r\n").await;
    assert_eq!(poll, b"HTTP/1.1 404 Not Found\r\n\r\n");
}

#[tokio::test]
async fn poll_returns_the_slot_contents_once_present() {
    let (registry, slot) = demo_registry();
    let addr = start_server(registry, slot.clone()).await;

    roundtrip(addr, "GET /blender-farm HTTP/1.1\r\n\r\n").await;

    // Simulate a completed background job writing into the slot.
    slot.store(PathBuf::from("scene.png"));

    let response = roundtrip(addr, "GET /rendered-image HTTP/1.1\r\n\r\n").await;
    assert_eq!(response, b"POST /rendered-image HTTP/1.1\r\n\r\nscene.png");
}

#[tokio::test]
async fn truncated_request_gets_the_listing_fallback() {
    let (registry, slot) = demo_registry();
    let addr = start_server(registry, slot).await;

    // Close the write side before the header terminator: the server
    // parses what it got and dispatches it (zero matches → listing).
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(b"GET /unknown").await.unwrap();
    stream.shutdown().await.unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    let body = String::from_utf8(response).unwrap();
    assert!(body.contains("<h1>Adder</h1>"));
}

#[tokio::test]
async fn trait_and_struct_views_agree() {
    let adder = app::adder();
    let via_struct = adder.run_service(Value::Int(1));
    let via_trait = {
        let service: &dyn Service = &adder;
        service.run_service(Value::Int(1))
    };
    assert_eq!(via_struct, via_trait);
    assert_eq!(via_struct, Value::Int(2));
}
