use crate::errors::ToolError;
use crate::managers::unknown_domain_tool;
use crate::mcp::envelope::CallToolResult;
use crate::services::dispatcher::{Domain, ToolId};
use crate::services::famulor::FamulorClient;
use crate::utils::args::{optional_array, optional_bool, require_i64, require_str};
use crate::utils::patch::PatchBody;
use serde_json::{json, Value};

const UPDATE_FIELDS: &[&str] = &["campaign_id", "phone_number", "status", "variables"];

pub async fn handle(tool: ToolId, args: &Value, client: &FamulorClient) -> CallToolResult {
    match run(tool, args, client).await {
        Ok(result) => CallToolResult::success(&result),
        Err(err) => CallToolResult::error(&err),
    }
}

async fn run(tool: ToolId, args: &Value, client: &FamulorClient) -> Result<Value, ToolError> {
    match tool {
        ToolId::ListLeads => client.get("/api/user/leads").await,
        ToolId::CreateLead => {
            let phone_number = require_str(args, "phone_number")?;
            let campaign_id = require_i64(args, "campaign_id")?;
            let variables = optional_array(args, "variables").unwrap_or_else(|| json!([]));
            // the upstream field is spelled "dupplicate"
            let allow_dupplicate = optional_bool(args, "allow_dupplicate").unwrap_or(false);
            client
                .post(
                    "/api/user/lead",
                    Some(json!({
                        "phone_number": phone_number,
                        "campaign_id": campaign_id,
                        "variables": variables,
                        "allow_dupplicate": allow_dupplicate,
                    })),
                )
                .await
        }
        ToolId::UpdateLead => {
            let id = require_i64(args, "id")?;
            let body = PatchBody::from_args(args, UPDATE_FIELDS);
            client
                .put(&format!("/api/leads/{}", id), Some(body.into_value()))
                .await
        }
        other => Err(unknown_domain_tool(Domain::Leads, other)),
    }
}
