//! Domain handlers: one module per tool domain. Each handler extracts the
//! documented argument fields, performs exactly one upstream request, and
//! folds any failure into the error envelope instead of re-throwing.

pub mod assistants;
pub mod calls;
pub mod campaigns;
pub mod conversations;
pub mod leads;
pub mod midcall;
pub mod sms;

use crate::errors::ToolError;
use crate::services::dispatcher::{Domain, ToolId};

/// A tool routed to a handler that does not own it. This is a wiring bug,
/// not a steady-state condition.
pub(crate) fn unknown_domain_tool(domain: Domain, tool: ToolId) -> ToolError {
    ToolError::internal(format!(
        "Unknown {} tool: {}",
        domain.label(),
        tool.name()
    ))
}
