use crate::errors::ToolError;
use crate::managers::unknown_domain_tool;
use crate::mcp::envelope::CallToolResult;
use crate::services::dispatcher::{Domain, ToolId};
use crate::services::famulor::FamulorClient;
use crate::utils::args::{require_i64, require_str};
use serde_json::{json, Value};

pub async fn handle(tool: ToolId, args: &Value, client: &FamulorClient) -> CallToolResult {
    match run(tool, args, client).await {
        Ok(result) => CallToolResult::success(&result),
        Err(err) => CallToolResult::error(&err),
    }
}

async fn run(tool: ToolId, args: &Value, client: &FamulorClient) -> Result<Value, ToolError> {
    match tool {
        ToolId::SendSms => {
            let from = require_i64(args, "from")?;
            let to = require_str(args, "to")?;
            let body = require_str(args, "body")?;
            client
                .post(
                    "/api/user/sms",
                    Some(json!({
                        "from": from,
                        "to": to,
                        "body": body,
                    })),
                )
                .await
        }
        other => Err(unknown_domain_tool(Domain::Sms, other)),
    }
}
