use crate::constants::api;
use crate::errors::ToolError;
use crate::managers::unknown_domain_tool;
use crate::mcp::envelope::CallToolResult;
use crate::services::dispatcher::{Domain, ToolId};
use crate::services::famulor::FamulorClient;
use crate::utils::args::{optional_object, optional_str, optional_u64, require_str};
use crate::utils::query::QueryString;
use serde_json::{json, Value};

pub async fn handle(tool: ToolId, args: &Value, client: &FamulorClient) -> CallToolResult {
    match run(tool, args, client).await {
        Ok(result) => CallToolResult::success(&result),
        Err(err) => CallToolResult::error(&err),
    }
}

async fn run(tool: ToolId, args: &Value, client: &FamulorClient) -> Result<Value, ToolError> {
    match tool {
        ToolId::MakeCall => {
            let assistant_id = require_str(args, "assistant_id")?;
            let phone_number = require_str(args, "phone_number")?;
            let variables = optional_object(args, "variables").unwrap_or_else(|| json!({}));
            client
                .post(
                    "/api/user/make_call",
                    Some(json!({
                        "assistant_id": assistant_id,
                        "phone_number": phone_number,
                        "variables": variables,
                    })),
                )
                .await
        }
        ToolId::GetCall => {
            let call_id = require_str(args, "call_id")?;
            client.get(&format!("/api/user/calls/{}", call_id)).await
        }
        ToolId::ListCalls => {
            let limit = optional_u64(args, "limit").unwrap_or(api::DEFAULT_CALL_LIST_LIMIT);
            let mut query = QueryString::new();
            query.push("limit", limit);
            query.push_opt("assistant_id", optional_str(args, "assistant_id"));
            client.get(&query.append_to("/api/user/calls")?).await
        }
        other => Err(unknown_domain_tool(Domain::Calls, other)),
    }
}
