//! Built-in service assembly.
//!
//! Wires the demo services to the shared render slot and builds the
//! startup registry.

use std::path::PathBuf;

use crate::http::request::Request;
use crate::jobs::render::{render_frame, RenderSlot};
use crate::service::builder::PageServiceBuilder;
use crate::service::registry::Registry;
use crate::service::{PageService, Value};

/// Build the registry of built-in services.
pub fn build_registry(render_slot: &RenderSlot) -> Registry {
    let mut registry = Registry::new();
    registry.register(blender_farm(render_slot));
    registry.register(adder());
    registry
}

/// The blender farm service.
///
/// A `File` input triggers a detached render (the triggering request
/// itself gets no payload back); a `Null` input polls the slot for the
/// most recent completed frame.
pub fn blender_farm(render_slot: &RenderSlot) -> PageService {
    let run_slot = render_slot.clone();
    PageServiceBuilder::new()
        .title("Blender Farm")
        .description("A simple blender farm")
        .version("0.0.1")
        .author("Coda")
        .license("MIT")
        .parse_input(|request, _service| parse_blend_reference(request))
        .run(move |input| match input {
            Value::Null => run_slot.current().map(Value::File).unwrap_or(Value::Null),
            other => render_frame(&other, &run_slot),
        })
        .render(|service| {
            service.get_page("<button onclick=\"renderFrame()\">Render Frame</button>\n")
        })
        .build()
}

/// The adder service: adds one to an integer, passes anything else
/// through unchanged.
pub fn adder() -> PageService {
    PageServiceBuilder::new()
        .title("Adder")
        .description("Adds one to a number")
        .version("0.0.1")
        .author("Coda")
        .license("MIT")
        .parse_input(|request, _service| parse_int_argument(request))
        .run(|input| match input {
            Value::Int(i) => Value::Int(i + 1),
            other => other,
        })
        .render(|service| service.get_page("<p>GET /runService?n=1</p>\n"))
        .build()
}

/// Extract a `file=` query parameter from the request URI as a file
/// reference.
fn parse_blend_reference(request: &Request) -> Value {
    query_param(request, "file")
        .map(|v| Value::File(PathBuf::from(v)))
        .unwrap_or(Value::Null)
}

/// Extract an `n=` query parameter from the request URI as an integer.
fn parse_int_argument(request: &Request) -> Value {
    query_param(request, "n")
        .and_then(|v| v.parse().ok())
        .map(Value::Int)
        .unwrap_or(Value::Null)
}

fn query_param<'a>(request: &'a Request, name: &str) -> Option<&'a str> {
    let (_, query) = request.uri().split_once('?')?;
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then_some(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::Service;

    #[test]
    fn registry_holds_both_demo_services() {
        let registry = build_registry(&RenderSlot::new());
        let endpoints: Vec<String> =
            registry.services().iter().map(|s| s.endpoint()).collect();
        assert_eq!(endpoints, vec!["blender-farm", "adder"]);
    }

    #[test]
    fn adder_adds_one() {
        let service = adder();
        assert_eq!(service.run_service(Value::Int(1)), Value::Int(2));
        assert_eq!(
            service.run_service(Value::Text("x".into())),
            Value::Text("x".into())
        );
    }

    #[test]
    fn adder_parses_n_query_parameter() {
        let service = adder();
        let request = Request::parse("GET /runService?n=41 HTTP/1.1\r\n\r\n");
        assert_eq!(service.parse_input(&request), Value::Int(41));

        let bare = Request::parse("GET /runService HTTP/1.1\r\n\r\n");
        assert_eq!(service.parse_input(&bare), Value::Null);
    }

    #[test]
    fn blender_farm_parses_file_query_parameter() {
        let service = blender_farm(&RenderSlot::new());
        let request =
            Request::parse("GET /runService?file=scene.blend HTTP/1.1\r\n\r\n");
        assert_eq!(
            service.parse_input(&request),
            Value::File(PathBuf::from("scene.blend"))
        );
    }

    #[tokio::test]
    async fn blender_farm_poll_reads_the_slot() {
        let slot = RenderSlot::new();
        let service = blender_farm(&slot);

        assert_eq!(service.run_service(Value::Null), Value::Null);

        slot.store(PathBuf::from("test.png"));
        assert_eq!(
            service.run_service(Value::Null),
            Value::File(PathBuf::from("test.png"))
        );
    }

    #[test]
    fn blender_farm_page_has_render_button() {
        let service = blender_farm(&RenderSlot::new());
        let page = service.render();
        assert!(page.contains("<title>Blender Farm</title>"));
        assert!(page.contains("<button onclick=\"renderFrame()\">Render Frame</button>"));
    }
}
