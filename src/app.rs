use crate::constants::api;
use crate::errors::ToolError;
use crate::mcp::catalog::{tool_by_name, tool_catalog};
use crate::services::dispatcher::{Dispatcher, ToolId};
use crate::services::logger::Logger;

pub struct App {
    pub logger: Logger,
    pub dispatcher: Dispatcher,
}

impl App {
    pub fn initialize() -> Result<Self, ToolError> {
        Self::with_base_url(api::DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self, ToolError> {
        Self::validate_tool_wiring()?;
        let logger = Logger::new("famulor-mcp");
        let dispatcher = Dispatcher::new(&logger, base_url);
        Ok(Self { logger, dispatcher })
    }

    /// The published catalog and the routing table must be a bijection:
    /// every catalog name routes, every routed tool is published.
    fn validate_tool_wiring() -> Result<(), ToolError> {
        let mut unrouted: Vec<String> = tool_catalog()
            .iter()
            .filter(|tool| ToolId::from_name(&tool.name).is_none())
            .map(|tool| tool.name.clone())
            .collect();
        let mut unpublished: Vec<String> = ToolId::ALL
            .iter()
            .filter(|tool| tool_by_name(tool.name()).is_none())
            .map(|tool| tool.name().to_string())
            .collect();
        if unrouted.is_empty() && unpublished.is_empty() {
            return Ok(());
        }
        unrouted.sort();
        unpublished.sort();
        Err(ToolError::internal("Tool wiring is incomplete")
            .with_hint(
                "This is a server wiring bug: every tool in tool_catalog.json must have a route and every routed tool must be published.",
            )
            .with_details(serde_json::json!({
                "unrouted": unrouted,
                "unpublished": unpublished,
            })))
    }
}
