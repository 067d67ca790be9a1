//! Polling client for Kentik's AI Advisor sessions.
//!
//! The advisor runs server-side analysis that takes a variable amount of
//! time, so a chat submission returns an operation handle rather than an
//! answer. [`AdvisorPoller`] submits the question, then polls the session at
//! a fixed interval until it reaches a terminal state or a wall-clock
//! deadline elapses. A timeout is not a failure: it carries the session id so
//! the caller can resume the same conversation in a later invocation instead
//! of blocking indefinitely.

use crate::error::GatewayError;
use crate::gateway::{ApiGateway, Method};
use log::debug;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;

const CHAT_PATH: &str = "/ai_advisor/v202511/chat";

const STATUS_COMPLETED: &str = "SESSION_STATUS_COMPLETED";
const STATUS_FAILED: &str = "SESSION_STATUS_FAILED";

/// Default pause between status polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);
/// Default wall-clock budget before giving up with a resumable timeout.
pub const DEFAULT_POLL_DEADLINE: Duration = Duration::from_secs(90);

/// Terminal outcome of one advisor invocation.
///
/// Transport failures during submission or polling are reported separately
/// as [`GatewayError`]; these three variants are the outcomes of a session
/// that was successfully submitted and tracked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvisorOutcome {
    /// The session completed; `text` is the advisor's final answer.
    Answer {
        /// Session the answer belongs to, usable for follow-up questions.
        session_id: String,
        /// Final answer text (or the raw payload when the session completed
        /// without messages).
        text: String,
    },
    /// The session reached the failed state.
    Failure {
        /// Upstream error text, or "unknown error" when none was given.
        message: String,
    },
    /// The deadline elapsed before a terminal state was observed. The
    /// session keeps running server-side; re-asking with `session_id`
    /// resumes it.
    TimedOut {
        /// Session to resume.
        session_id: String,
        /// Total time slept waiting for a terminal state.
        waited: Duration,
    },
}

#[derive(Debug, Deserialize)]
struct ChatSession {
    #[serde(default)]
    id: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default, rename = "finalAnswer")]
    final_answer: String,
    #[serde(default, rename = "errorMessage")]
    error_message: String,
}

/// Submit-then-poll client for advisor chat sessions.
///
/// One invocation polls one session sequentially; there is never more than
/// one poll in flight for a given handle. Separate invocations (for separate
/// sessions) are independent and may run concurrently.
pub struct AdvisorPoller<G> {
    gateway: Arc<G>,
    interval: Duration,
    deadline: Duration,
}

impl<G: ApiGateway> AdvisorPoller<G> {
    /// Create a poller with the default cadence (2s interval, 90s deadline).
    pub fn new(gateway: Arc<G>) -> Self {
        Self::with_timing(gateway, DEFAULT_POLL_INTERVAL, DEFAULT_POLL_DEADLINE)
    }

    /// Create a poller with an explicit interval and deadline.
    pub fn with_timing(gateway: Arc<G>, interval: Duration, deadline: Duration) -> Self {
        Self {
            gateway,
            interval,
            deadline,
        }
    }

    /// Ask the advisor a question and wait for the outcome.
    ///
    /// With `session_id` set, the question is appended as a follow-up to the
    /// existing conversation (`PUT`); otherwise a new session is created
    /// (`POST`). Submission failure is terminal and reported immediately,
    /// with no retry. Poll transport failures are likewise terminal.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] for submission or poll transport failures and
    /// for submission payloads that do not parse.
    pub async fn ask(
        &self,
        question: &str,
        session_id: Option<&str>,
    ) -> Result<AdvisorOutcome, GatewayError> {
        let session = self.submit(question, session_id).await?;
        self.poll_until_terminal(session.id).await
    }

    async fn submit(
        &self,
        question: &str,
        session_id: Option<&str>,
    ) -> Result<ChatSession, GatewayError> {
        let payload = match session_id {
            Some(id) => {
                self.gateway
                    .v6(
                        Method::PUT,
                        CHAT_PATH,
                        Some(json!({"id": id, "prompt": question})),
                    )
                    .await?
            }
            None => {
                self.gateway
                    .v6(Method::POST, CHAT_PATH, Some(json!({"prompt": question})))
                    .await?
            }
        };
        Ok(serde_json::from_value(payload)?)
    }

    async fn poll_until_terminal(
        &self,
        session_id: String,
    ) -> Result<AdvisorOutcome, GatewayError> {
        let path = format!("{CHAT_PATH}/{session_id}");
        // Elapsed time is accumulated in interval steps rather than sampled
        // from a clock: the deadline bounds slept time, not poll round-trips.
        let mut elapsed = Duration::ZERO;

        while elapsed < self.deadline {
            tokio::time::sleep(self.interval).await;
            elapsed += self.interval;

            let payload = self.gateway.v6(Method::GET, &path, None).await?;
            let session: ChatSession = serde_json::from_value(payload.clone())?;

            match session.status.as_str() {
                STATUS_COMPLETED => return Ok(completed(session_id, session, payload)),
                STATUS_FAILED => return Ok(failed(session)),
                // Unknown statuses count as still pending so upstream schema
                // drift degrades to a resumable timeout, not a hard error.
                _ => debug!(
                    "advisor session {session_id} not terminal after {}s",
                    elapsed.as_secs()
                ),
            }
        }

        Ok(AdvisorOutcome::TimedOut {
            session_id,
            waited: elapsed,
        })
    }
}

fn completed(session_id: String, session: ChatSession, raw: Value) -> AdvisorOutcome {
    let text = match session.messages.last() {
        Some(last) => last.final_answer.clone(),
        // Completed but message-less: surface the raw payload rather than
        // failing on an unexpected shape.
        None => serde_json::to_string_pretty(&raw).unwrap_or_else(|_| raw.to_string()),
    };
    AdvisorOutcome::Answer { session_id, text }
}

fn failed(session: ChatSession) -> AdvisorOutcome {
    let message = session
        .messages
        .last()
        .map(|m| m.error_message.clone())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| "unknown error".to_string());
    AdvisorOutcome::Failure { message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Gateway that answers v6 calls from a script and records what was
    /// called.
    struct ScriptedGateway {
        responses: Mutex<VecDeque<Result<Value, GatewayError>>>,
        calls: Mutex<Vec<(Method, String)>>,
    }

    impl ScriptedGateway {
        fn new(responses: Vec<Result<Value, GatewayError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<(Method, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl ApiGateway for ScriptedGateway {
        async fn v5(
            &self,
            _method: Method,
            _path: &str,
            _body: Option<Value>,
        ) -> Result<Value, GatewayError> {
            panic!("advisor never touches the v5 API")
        }

        async fn v6(
            &self,
            method: Method,
            path: &str,
            _body: Option<Value>,
        ) -> Result<Value, GatewayError> {
            self.calls.lock().unwrap().push((method, path.to_string()));
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("script exhausted")
        }
    }

    fn submitted(id: &str) -> Result<Value, GatewayError> {
        Ok(json!({"id": id, "status": "SESSION_STATUS_RUNNING"}))
    }

    fn pending(id: &str) -> Result<Value, GatewayError> {
        Ok(json!({"id": id, "status": "SESSION_STATUS_RUNNING", "messages": []}))
    }

    #[tokio::test(start_paused = true)]
    async fn answer_after_three_polls() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            submitted("s-1"),
            pending("s-1"),
            pending("s-1"),
            Ok(json!({
                "id": "s-1",
                "status": "SESSION_STATUS_COMPLETED",
                "messages": [{"finalAnswer": "all links healthy"}],
            })),
        ]));
        let poller = AdvisorPoller::new(Arc::clone(&gateway));

        let outcome = poller.ask("how are my devices?", None).await.unwrap();

        assert_eq!(
            outcome,
            AdvisorOutcome::Answer {
                session_id: "s-1".to_string(),
                text: "all links healthy".to_string(),
            }
        );
        // One submission plus exactly three polls; terminal states stop the
        // loop immediately.
        assert_eq!(gateway.calls().len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn failure_carries_upstream_message() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            submitted("s-2"),
            Ok(json!({
                "id": "s-2",
                "status": "SESSION_STATUS_FAILED",
                "messages": [{"errorMessage": "rate limited"}],
            })),
        ]));
        let poller = AdvisorPoller::new(gateway);

        let outcome = poller.ask("anything", None).await.unwrap();
        assert_eq!(
            outcome,
            AdvisorOutcome::Failure {
                message: "rate limited".to_string()
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn failure_without_messages_is_unknown_error() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            submitted("s-3"),
            Ok(json!({"id": "s-3", "status": "SESSION_STATUS_FAILED"})),
        ]));
        let poller = AdvisorPoller::new(gateway);

        let outcome = poller.ask("anything", None).await.unwrap();
        assert_eq!(
            outcome,
            AdvisorOutcome::Failure {
                message: "unknown error".to_string()
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn deadline_yields_resumable_timeout() {
        let mut script = vec![submitted("s-4")];
        script.extend((0..5).map(|_| pending("s-4")));
        let gateway = Arc::new(ScriptedGateway::new(script));
        let poller = AdvisorPoller::with_timing(
            Arc::clone(&gateway),
            Duration::from_secs(2),
            Duration::from_secs(10),
        );

        let outcome = poller.ask("slow question", None).await.unwrap();

        assert_eq!(
            outcome,
            AdvisorOutcome::TimedOut {
                session_id: "s-4".to_string(),
                waited: Duration::from_secs(10),
            }
        );
        // Submission + exactly five polls for a 10s deadline at 2s cadence.
        assert_eq!(gateway.calls().len(), 6);
    }

    #[tokio::test(start_paused = true)]
    async fn follow_up_updates_the_existing_session() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            submitted("s-5"),
            Ok(json!({
                "id": "s-5",
                "status": "SESSION_STATUS_COMPLETED",
                "messages": [{"finalAnswer": "done"}],
            })),
        ]));
        let poller = AdvisorPoller::new(Arc::clone(&gateway));

        poller.ask("and the interfaces?", Some("s-5")).await.unwrap();

        let calls = gateway.calls();
        assert_eq!(calls[0], (Method::PUT, CHAT_PATH.to_string()));
        assert_eq!(calls[1], (Method::GET, format!("{CHAT_PATH}/s-5")));
    }

    #[tokio::test(start_paused = true)]
    async fn new_session_posts() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            submitted("s-6"),
            Ok(json!({
                "id": "s-6",
                "status": "SESSION_STATUS_COMPLETED",
                "messages": [{"finalAnswer": "done"}],
            })),
        ]));
        let poller = AdvisorPoller::new(Arc::clone(&gateway));

        poller.ask("fresh question", None).await.unwrap();
        assert_eq!(gateway.calls()[0], (Method::POST, CHAT_PATH.to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn submission_failure_is_terminal() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Err(GatewayError::Api {
            status: 401,
            body: "bad token".to_string(),
        })]));
        let poller = AdvisorPoller::new(Arc::clone(&gateway));

        let err = poller.ask("anything", None).await.unwrap_err();
        assert!(err.to_string().contains("401"));
        assert_eq!(gateway.calls().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn completed_without_messages_falls_back_to_raw_payload() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            submitted("s-7"),
            Ok(json!({"id": "s-7", "status": "SESSION_STATUS_COMPLETED"})),
        ]));
        let poller = AdvisorPoller::new(gateway);

        match poller.ask("anything", None).await.unwrap() {
            AdvisorOutcome::Answer { text, .. } => {
                assert!(text.contains("SESSION_STATUS_COMPLETED"))
            }
            other => panic!("expected Answer, got {other:?}"),
        }
    }
}
