//! Tool-call routing.
//!
//! Tool identifiers are a closed enumeration: every name the catalog
//! publishes maps to exactly one [`ToolId`], every id belongs to exactly one
//! [`Domain`], and the dispatch match is exhaustive. The startup wiring check
//! in `app.rs` holds the catalog and this table to a bijection.

use crate::constants::suggestions;
use crate::errors::ToolError;
use crate::managers;
use crate::mcp::catalog;
use crate::mcp::envelope::CallToolResult;
use crate::services::credentials::{resolve_api_key, CallContext};
use crate::services::famulor::FamulorClient;
use crate::services::logger::Logger;
use crate::utils::suggest::suggest;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolId {
    MakeCall,
    GetCall,
    ListCalls,
    GetAssistants,
    GetAssistantDetails,
    GetPhoneNumbers,
    GetModels,
    GetVoices,
    GetLanguages,
    UpdateAssistant,
    GetConversation,
    CreateConversation,
    SendMessage,
    ListCampaigns,
    UpdateCampaignStatus,
    ListLeads,
    CreateLead,
    UpdateLead,
    ListMidCallTools,
    GetMidCallTool,
    UpdateMidCallTool,
    SendSms,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Calls,
    Assistants,
    Conversations,
    Campaigns,
    Leads,
    MidCallTools,
    Sms,
}

impl Domain {
    /// Label used in "Unknown <domain> tool" contract-violation messages.
    pub fn label(self) -> &'static str {
        match self {
            Domain::Calls => "call",
            Domain::Assistants => "assistant",
            Domain::Conversations => "conversation",
            Domain::Campaigns => "campaign",
            Domain::Leads => "lead",
            Domain::MidCallTools => "mid-call",
            Domain::Sms => "SMS",
        }
    }
}

impl ToolId {
    pub const ALL: [ToolId; 22] = [
        ToolId::MakeCall,
        ToolId::GetCall,
        ToolId::ListCalls,
        ToolId::GetAssistants,
        ToolId::GetAssistantDetails,
        ToolId::GetPhoneNumbers,
        ToolId::GetModels,
        ToolId::GetVoices,
        ToolId::GetLanguages,
        ToolId::UpdateAssistant,
        ToolId::GetConversation,
        ToolId::CreateConversation,
        ToolId::SendMessage,
        ToolId::ListCampaigns,
        ToolId::UpdateCampaignStatus,
        ToolId::ListLeads,
        ToolId::CreateLead,
        ToolId::UpdateLead,
        ToolId::ListMidCallTools,
        ToolId::GetMidCallTool,
        ToolId::UpdateMidCallTool,
        ToolId::SendSms,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ToolId::MakeCall => "make_call",
            ToolId::GetCall => "get_call",
            ToolId::ListCalls => "list_calls",
            ToolId::GetAssistants => "get_assistants",
            ToolId::GetAssistantDetails => "get_assistant_details",
            ToolId::GetPhoneNumbers => "get_phone_numbers",
            ToolId::GetModels => "get_models",
            ToolId::GetVoices => "get_voices",
            ToolId::GetLanguages => "get_languages",
            ToolId::UpdateAssistant => "update_assistant",
            ToolId::GetConversation => "get_conversation",
            ToolId::CreateConversation => "create_conversation",
            ToolId::SendMessage => "send_message",
            ToolId::ListCampaigns => "list_campaigns",
            ToolId::UpdateCampaignStatus => "update_campaign_status",
            ToolId::ListLeads => "list_leads",
            ToolId::CreateLead => "create_lead",
            ToolId::UpdateLead => "update_lead",
            ToolId::ListMidCallTools => "list_mid_call_tools",
            ToolId::GetMidCallTool => "get_mid_call_tool",
            ToolId::UpdateMidCallTool => "update_mid_call_tool",
            ToolId::SendSms => "send_sms",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|tool| tool.name() == name)
    }

    pub fn domain(self) -> Domain {
        match self {
            ToolId::MakeCall | ToolId::GetCall | ToolId::ListCalls => Domain::Calls,
            ToolId::GetAssistants
            | ToolId::GetAssistantDetails
            | ToolId::GetPhoneNumbers
            | ToolId::GetModels
            | ToolId::GetVoices
            | ToolId::GetLanguages
            | ToolId::UpdateAssistant => Domain::Assistants,
            ToolId::GetConversation | ToolId::CreateConversation | ToolId::SendMessage => {
                Domain::Conversations
            }
            ToolId::ListCampaigns | ToolId::UpdateCampaignStatus => Domain::Campaigns,
            ToolId::ListLeads | ToolId::CreateLead | ToolId::UpdateLead => Domain::Leads,
            ToolId::ListMidCallTools | ToolId::GetMidCallTool | ToolId::UpdateMidCallTool => {
                Domain::MidCallTools
            }
            ToolId::SendSms => Domain::Sms,
        }
    }
}

pub struct Dispatcher {
    logger: Logger,
    base_url: String,
}

impl Dispatcher {
    pub fn new(logger: &Logger, base_url: impl Into<String>) -> Self {
        Self {
            logger: logger.child("dispatch"),
            base_url: base_url.into(),
        }
    }

    /// Resolve credentials, build one request-scoped client, route to the
    /// owning domain handler, and return its envelope verbatim. Credential
    /// failures and unknown names error out before any handler runs.
    pub async fn dispatch(
        &self,
        ctx: &CallContext,
        name: &str,
        args: &Value,
    ) -> Result<CallToolResult, ToolError> {
        let Some(tool) = ToolId::from_name(name) else {
            return Err(self.unknown_tool_error(name));
        };

        let api_key = resolve_api_key(ctx)?;
        let client = FamulorClient::new(&api_key, &self.base_url)?;

        let request_id = uuid::Uuid::new_v4();
        let started_at = chrono::Utc::now().timestamp_millis();
        let result = match tool.domain() {
            Domain::Calls => managers::calls::handle(tool, args, &client).await,
            Domain::Assistants => managers::assistants::handle(tool, args, &client).await,
            Domain::Conversations => managers::conversations::handle(tool, args, &client).await,
            Domain::Campaigns => managers::campaigns::handle(tool, args, &client).await,
            Domain::Leads => managers::leads::handle(tool, args, &client).await,
            Domain::MidCallTools => managers::midcall::handle(tool, args, &client).await,
            Domain::Sms => managers::sms::handle(tool, args, &client).await,
        };

        self.logger.debug(
            name,
            Some(&serde_json::json!({
                "request_id": request_id,
                "duration_ms": chrono::Utc::now().timestamp_millis() - started_at,
                "is_error": result.is_failure(),
            })),
        );
        Ok(result)
    }

    fn unknown_tool_error(&self, name: &str) -> ToolError {
        let close = suggest(
            name,
            &catalog::tool_names(),
            suggestions::MAX_TOOL_SUGGESTIONS,
        );
        let mut err = ToolError::unknown_tool(format!("Unknown tool: {}", name));
        if !close.is_empty() {
            err = err.with_hint(format!("Did you mean: {}?", close.join(", ")));
        }
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tool_name_round_trips() {
        for tool in ToolId::ALL {
            assert_eq!(ToolId::from_name(tool.name()), Some(tool));
        }
    }

    #[test]
    fn unknown_names_do_not_resolve() {
        assert_eq!(ToolId::from_name("delete_everything"), None);
        assert_eq!(ToolId::from_name(""), None);
    }

    #[test]
    fn routing_table_matches_the_published_catalog() {
        let catalog_names: Vec<String> = catalog::tool_names();
        assert_eq!(catalog_names.len(), ToolId::ALL.len());
        for name in &catalog_names {
            assert!(
                ToolId::from_name(name).is_some(),
                "catalog tool {} has no route",
                name
            );
        }
    }
}
