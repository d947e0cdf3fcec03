use crate::errors::ToolError;
use crate::managers::unknown_domain_tool;
use crate::mcp::envelope::CallToolResult;
use crate::services::dispatcher::{Domain, ToolId};
use crate::services::famulor::FamulorClient;
use crate::utils::args::require_i64;
use crate::utils::patch::PatchBody;
use serde_json::Value;

const UPDATE_FIELDS: &[&str] = &[
    "name",
    "description",
    "endpoint",
    "method",
    "timeout",
    "headers",
    "schema",
];

pub async fn handle(tool: ToolId, args: &Value, client: &FamulorClient) -> CallToolResult {
    match run(tool, args, client).await {
        Ok(result) => CallToolResult::success(&result),
        Err(err) => CallToolResult::error(&err),
    }
}

async fn run(tool: ToolId, args: &Value, client: &FamulorClient) -> Result<Value, ToolError> {
    match tool {
        ToolId::ListMidCallTools => client.get("/api/user/tools").await,
        ToolId::GetMidCallTool => {
            let id = require_i64(args, "id")?;
            client.get(&format!("/api/user/tools/{}", id)).await
        }
        ToolId::UpdateMidCallTool => {
            let id = require_i64(args, "id")?;
            let body = PatchBody::from_args(args, UPDATE_FIELDS);
            client
                .put(&format!("/api/user/tools/{}", id), Some(body.into_value()))
                .await
        }
        other => Err(unknown_domain_tool(Domain::MidCallTools, other)),
    }
}
