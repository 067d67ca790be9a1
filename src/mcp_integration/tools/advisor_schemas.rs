//! AI Advisor tool schema.

use serde_json::{Value, json};

/// Schema definition for the AI Advisor tool.
pub fn ai_advisor_tool() -> Value {
    json!({
        "name": "kentik_ai_advisor",
        "description": "Ask Kentik's AI Advisor a natural language question about your network. The AI analyzes your Kentik data and returns insights. Examples: 'How are my devices doing?', 'Show me top talkers in the last hour', 'What about interface utilization?'. This is an async operation — the tool polls for completion automatically.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "question": {
                    "type": "string",
                    "description": "Natural language question about your network to ask the AI Advisor"
                },
                "session_id": {
                    "type": "string",
                    "description": "Optional existing session ID for follow-up questions. If provided, the question is added as a follow-up to the existing conversation."
                }
            },
            "required": ["question"]
        }
    })
}
