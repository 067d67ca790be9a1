//! Integration tests for the advisor poller through the public API: terminal
//! detection, timeout resumability, and failure reporting against a scripted
//! gateway.

use kentik_mcp_server::error::GatewayError;
use kentik_mcp_server::{AdvisorOutcome, AdvisorPoller, ApiGateway, Method};
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

struct ScriptedGateway {
    responses: Mutex<VecDeque<Value>>,
    polls: Mutex<usize>,
}

impl ScriptedGateway {
    fn new(responses: Vec<Value>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            polls: Mutex::new(0),
        }
    }

    fn poll_count(&self) -> usize {
        *self.polls.lock().unwrap()
    }
}

impl ApiGateway for ScriptedGateway {
    async fn v5(
        &self,
        _method: Method,
        path: &str,
        _body: Option<Value>,
    ) -> Result<Value, GatewayError> {
        panic!("unexpected v5 call to {path}")
    }

    async fn v6(
        &self,
        method: Method,
        _path: &str,
        _body: Option<Value>,
    ) -> Result<Value, GatewayError> {
        if method == Method::GET {
            *self.polls.lock().unwrap() += 1;
        }
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("script exhausted"))
    }
}

fn pending(id: &str) -> Value {
    json!({"id": id, "status": "SESSION_STATUS_RUNNING", "messages": []})
}

#[tokio::test(start_paused = true)]
async fn answer_arrives_after_exactly_three_polls() {
    let gateway = Arc::new(ScriptedGateway::new(vec![
        pending("s-1"),
        pending("s-1"),
        pending("s-1"),
        json!({
            "id": "s-1",
            "status": "SESSION_STATUS_COMPLETED",
            "messages": [{"finalAnswer": "everything is fine"}],
        }),
    ]));
    let poller = AdvisorPoller::with_timing(
        Arc::clone(&gateway),
        Duration::from_secs(2),
        Duration::from_secs(90),
    );

    let started = tokio::time::Instant::now();
    let outcome = poller.ask("how are my devices?", None).await.unwrap();

    assert_eq!(
        outcome,
        AdvisorOutcome::Answer {
            session_id: "s-1".to_string(),
            text: "everything is fine".to_string(),
        }
    );
    assert_eq!(gateway.poll_count(), 3);
    // Three two-second waits before the terminal poll.
    assert_eq!(started.elapsed(), Duration::from_secs(6));
}

#[tokio::test(start_paused = true)]
async fn never_terminal_times_out_after_five_polls() {
    let mut responses = vec![pending("s-2")];
    responses.extend((0..5).map(|_| pending("s-2")));
    let gateway = Arc::new(ScriptedGateway::new(responses));
    let poller = AdvisorPoller::with_timing(
        Arc::clone(&gateway),
        Duration::from_secs(2),
        Duration::from_secs(10),
    );

    let outcome = poller.ask("never finishes", None).await.unwrap();

    assert_eq!(
        outcome,
        AdvisorOutcome::TimedOut {
            session_id: "s-2".to_string(),
            waited: Duration::from_secs(10),
        }
    );
    assert_eq!(gateway.poll_count(), 5);
}

#[tokio::test(start_paused = true)]
async fn failed_session_reports_the_upstream_error() {
    let gateway = Arc::new(ScriptedGateway::new(vec![
        pending("s-3"),
        json!({
            "id": "s-3",
            "status": "SESSION_STATUS_FAILED",
            "messages": [{"errorMessage": "rate limited"}],
        }),
    ]));
    let poller = AdvisorPoller::with_timing(
        gateway,
        Duration::from_secs(2),
        Duration::from_secs(90),
    );

    let outcome = poller.ask("anything", None).await.unwrap();
    assert_eq!(
        outcome,
        AdvisorOutcome::Failure {
            message: "rate limited".to_string(),
        }
    );
}
