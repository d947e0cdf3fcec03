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
        ToolId::ListCampaigns => client.get("/api/user/campaigns").await,
        ToolId::UpdateCampaignStatus => {
            let campaign_id = require_i64(args, "campaign_id")?;
            let action = require_str(args, "action")?;
            client
                .post(
                    "/api/user/campaigns/update-status",
                    Some(json!({
                        "campaign_id": campaign_id,
                        "action": action,
                    })),
                )
                .await
        }
        other => Err(unknown_domain_tool(Domain::Campaigns, other)),
    }
}
