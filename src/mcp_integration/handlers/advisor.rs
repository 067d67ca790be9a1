//! AI Advisor handler.

use crate::advisor::AdvisorOutcome;
use crate::contexts::ContextStore;
use crate::gateway::ApiGateway;
use crate::mcp_integration::core::{KentikMcpServer, ToolResult};
use crate::mcp_integration::handlers::{optional_str, require_str};
use serde_json::Value;

/// Handle an AI Advisor question: submit, poll to a terminal outcome, and
/// render it for the agent. Timeouts name the session id so the caller can
/// resume the same conversation with a follow-up call.
pub async fn handle_ask_advisor<G, S>(server: &KentikMcpServer<G, S>, arguments: Value) -> ToolResult
where
    G: ApiGateway + 'static,
    S: ContextStore + 'static,
{
    let question = match require_str(&arguments, "question") {
        Ok(question) => question,
        Err(result) => return result,
    };
    let session_id = optional_str(&arguments, "session_id");

    match server.advisor.ask(question, session_id).await {
        Ok(AdvisorOutcome::Answer { session_id, text }) => ToolResult::text(format!(
            "**AI Advisor Response** (session: {session_id})\n\n{text}"
        )),
        Ok(AdvisorOutcome::Failure { message }) => {
            ToolResult::error(format!("AI Advisor failed: {message}"))
        }
        Ok(AdvisorOutcome::TimedOut { session_id, waited }) => ToolResult::error(format!(
            "AI Advisor timed out after {}s. Session ID: {session_id} — you can retry by passing this session_id.",
            waited.as_secs()
        )),
        Err(err) => ToolResult::error(format!("AI Advisor request failed: {err}")),
    }
}
