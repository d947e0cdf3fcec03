mod common;

use common::StubApi;
use famulor_mcp::app::App;
use famulor_mcp::errors::ToolErrorKind;
use famulor_mcp::mcp::catalog;
use famulor_mcp::services::credentials::{CallContext, SessionConfig};
use famulor_mcp::services::dispatcher::{Domain, ToolId};
use serde_json::json;
use std::collections::HashMap;

fn authed_ctx() -> CallContext {
    CallContext::new(SessionConfig::with_api_key("test-key"), SessionConfig::default())
}

#[test]
fn every_catalog_tool_routes_to_exactly_one_domain() {
    let catalog_names = catalog::tool_names();
    assert_eq!(catalog_names.len(), ToolId::ALL.len());

    let mut domains: HashMap<&str, Domain> = HashMap::new();
    for name in &catalog_names {
        let tool = ToolId::from_name(name)
            .unwrap_or_else(|| panic!("catalog tool {} is unrouted", name));
        // from_name is a function, so a double route is impossible; record
        // the owning domain to make the membership explicit.
        let previous = domains.insert(tool.name(), tool.domain());
        assert!(previous.is_none(), "catalog lists {} twice", name);
    }
    assert_eq!(domains.len(), ToolId::ALL.len());
}

#[test]
fn every_routed_tool_is_published_in_the_catalog() {
    for tool in ToolId::ALL {
        assert!(
            catalog::tool_by_name(tool.name()).is_some(),
            "{} is routed but not published",
            tool.name()
        );
    }
}

#[tokio::test]
async fn dispatch_routes_a_call_end_to_end() {
    let stub = StubApi::start().await;
    let app = App::with_base_url(&stub.base_url()).unwrap();

    let args = json!({"assistant_id": "a1", "phone_number": "+15550001111"});
    let result = app
        .dispatcher
        .dispatch(&authed_ctx(), "make_call", &args)
        .await
        .unwrap();

    assert!(!result.is_failure());
    let request = stub.last_request();
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/api/user/make_call");
    assert_eq!(request.header("authorization"), Some("Bearer test-key"));
}

#[tokio::test]
async fn unknown_tool_name_fails_with_a_named_error() {
    let stub = StubApi::start().await;
    let app = App::with_base_url(&stub.base_url()).unwrap();

    let err = app
        .dispatcher
        .dispatch(&authed_ctx(), "make_cal", &json!({}))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ToolErrorKind::UnknownTool);
    assert!(err.message.contains("make_cal"));
    assert!(err.hint.unwrap().contains("make_call"));
    assert_eq!(stub.request_count(), 0);
}

#[tokio::test]
async fn handler_failures_stay_inside_the_envelope() {
    let stub = StubApi::start().await;
    stub.enqueue(500, r#"{"error":"upstream broke"}"#);
    let app = App::with_base_url(&stub.base_url()).unwrap();

    let result = app
        .dispatcher
        .dispatch(&authed_ctx(), "list_campaigns", &json!({}))
        .await
        .unwrap();

    assert!(result.is_failure());
    assert!(result.content[0].text.contains("500"));
    assert!(result.content[0].text.contains("upstream broke"));
}
