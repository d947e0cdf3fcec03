use crate::errors::ToolError;
use crate::managers::unknown_domain_tool;
use crate::mcp::envelope::CallToolResult;
use crate::services::dispatcher::{Domain, ToolId};
use crate::services::famulor::FamulorClient;
use crate::utils::args::{optional_u64, require_i64, require_str};
use crate::utils::patch::PatchBody;
use crate::utils::query::QueryString;
use serde_json::Value;

/// Assistant settings accepted by `update_assistant`. The outgoing body
/// carries only the fields the caller supplied; explicit null clears a
/// nullable field server-side.
const UPDATE_FIELDS: &[&str] = &[
    "name",
    "prompt",
    "first_message",
    "voice_id",
    "language",
    "model",
    "temperature",
    "max_tokens",
    "phone_number_id",
    "webhook_url",
    "webhook_method",
    "end_call_message",
    "end_call_phrases",
    "voicemail_message",
    "voicemail_detection",
    "transfer_phone_number",
    "transfer_message",
    "max_duration",
    "silence_timeout",
    "interruption_threshold",
    "speech_speed",
    "voice_stability",
    "voice_similarity_boost",
    "background_sound",
    "recording_enabled",
    "transcriber",
    "transcriber_language",
    "knowledge_base_id",
    "calendar_id",
    "timezone",
    "filler_words_enabled",
    "backchanneling_enabled",
    "summary_prompt",
    "success_evaluation_prompt",
    "structured_data_schema",
];

pub async fn handle(tool: ToolId, args: &Value, client: &FamulorClient) -> CallToolResult {
    match run(tool, args, client).await {
        Ok(result) => CallToolResult::success(&result),
        Err(err) => CallToolResult::error(&err),
    }
}

async fn run(tool: ToolId, args: &Value, client: &FamulorClient) -> Result<Value, ToolError> {
    match tool {
        ToolId::GetAssistants => {
            let mut query = QueryString::new();
            query.push_opt("page", optional_u64(args, "page"));
            query.push_opt("per_page", optional_u64(args, "per_page"));
            client
                .get(&query.append_to("/api/user/assistants/get")?)
                .await
        }
        ToolId::GetAssistantDetails => {
            let assistant_id = require_str(args, "assistant_id")?;
            client
                .get(&format!("/api/user/assistants/{}", assistant_id))
                .await
        }
        ToolId::GetPhoneNumbers => client.get("/api/user/phone_numbers").await,
        ToolId::GetModels => client.get("/api/user/models").await,
        ToolId::GetVoices => client.get("/api/user/voices").await,
        ToolId::GetLanguages => client.get("/api/user/languages").await,
        ToolId::UpdateAssistant => {
            let id = require_i64(args, "id")?;
            let body = PatchBody::from_args(args, UPDATE_FIELDS);
            client
                .put(&format!("/api/user/assistant/{}", id), Some(body.into_value()))
                .await
        }
        other => Err(unknown_domain_tool(Domain::Assistants, other)),
    }
}
