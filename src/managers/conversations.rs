use crate::errors::ToolError;
use crate::managers::unknown_domain_tool;
use crate::mcp::envelope::CallToolResult;
use crate::services::dispatcher::{Domain, ToolId};
use crate::services::famulor::FamulorClient;
use crate::utils::args::require_str;
use crate::utils::patch::PatchBody;
use serde_json::{json, Map, Value};

pub async fn handle(tool: ToolId, args: &Value, client: &FamulorClient) -> CallToolResult {
    match run(tool, args, client).await {
        Ok(result) => CallToolResult::success(&result),
        Err(err) => CallToolResult::error(&err),
    }
}

async fn run(tool: ToolId, args: &Value, client: &FamulorClient) -> Result<Value, ToolError> {
    match tool {
        ToolId::GetConversation => {
            let uuid = require_str(args, "uuid")?;
            client.get(&format!("/api/conversations/{}", uuid)).await
        }
        ToolId::CreateConversation => {
            let assistant_id = require_str(args, "assistant_id")?;
            let mut body = Map::new();
            body.insert("assistant_id".to_string(), json!(assistant_id));
            // type and variables go out only when the caller supplied them
            if let Value::Object(optional) =
                PatchBody::from_args(args, &["type", "variables"]).into_value()
            {
                body.extend(optional);
            }
            client
                .post("/api/conversations", Some(Value::Object(body)))
                .await
        }
        ToolId::SendMessage => {
            let uuid = require_str(args, "uuid")?;
            let message = require_str(args, "message")?;
            client
                .post(
                    &format!("/api/conversations/{}/messages", uuid),
                    Some(json!({ "message": message })),
                )
                .await
        }
        other => Err(unknown_domain_tool(Domain::Conversations, other)),
    }
}
