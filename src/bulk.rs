//! Bounded-concurrency bulk fetch with per-item error isolation.
//!
//! The `kentik_list_all_interfaces` tool has to issue one sub-resource
//! request per managed device, potentially hundreds, without tripping
//! Kentik's rate limits and without letting one broken device abort the
//! sweep. This module is that engine: a task-per-item fan-out behind a
//! counting admission gate, collecting results back into input order.
//!
//! # Guarantees
//!
//! * Exactly one [`FetchResult`] per input [`WorkItem`], at the item's
//!   original index, regardless of completion order.
//! * At most `limit` fetches in flight at any instant; gate permits are
//!   released on every exit path, including fetch failures.
//! * A failed fetch fills that item's `error` field and never cancels,
//!   delays, or otherwise affects sibling items. No retries.
//! * The call is a full barrier: it returns only after every item has been
//!   attempted exactly once. Dropping the future aborts in-flight tasks.

use crate::error::GatewayError;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// One unit of bulk work: an opaque identifier plus a human-readable label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    /// Identifier resolved via the gateway (e.g. a device id).
    pub id: String,
    /// Label carried through to the result for readability (e.g. a device
    /// name).
    pub label: String,
}

impl WorkItem {
    /// Create a work item.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Per-item outcome of a bulk fetch. Exactly one of `payload`/`error` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResult {
    /// Identifier of the originating work item.
    pub id: String,
    /// Label of the originating work item.
    pub label: String,
    /// Successful fetch payload.
    pub payload: Option<Value>,
    /// Failure message when the fetch did not succeed.
    pub error: Option<String>,
}

impl FetchResult {
    fn success(item: WorkItem, payload: Value) -> Self {
        Self {
            id: item.id,
            label: item.label,
            payload: Some(payload),
            error: None,
        }
    }

    fn failure(item: WorkItem, message: impl Into<String>) -> Self {
        Self {
            id: item.id,
            label: item.label,
            payload: None,
            error: Some(message.into()),
        }
    }

    /// Whether the fetch for this item succeeded.
    pub fn is_success(&self) -> bool {
        self.payload.is_some()
    }
}

/// Fetch a sub-resource for every item, at most `limit` requests in flight.
///
/// Each task waits for an admission-gate slot, optionally observes `pacing`
/// (a fixed inter-request delay to stay under external rate limits, counted
/// while holding the slot), invokes `fetch`, and writes its result at the
/// item's original index. The output therefore has the same length and order
/// as `items`; consumers correlate results back to identifiers positionally.
///
/// `fetch` must be safe to invoke concurrently; it is shared across tasks.
///
/// An empty `items` returns an empty vector without invoking `fetch`.
///
/// # Panics
///
/// Panics if `limit` is zero. That is a programming error in the caller, not
/// a runtime condition.
pub async fn fetch_all<F, Fut>(
    items: Vec<WorkItem>,
    limit: usize,
    pacing: Duration,
    fetch: F,
) -> Vec<FetchResult>
where
    F: Fn(WorkItem) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Value, GatewayError>> + Send + 'static,
{
    assert!(limit >= 1, "bulk fetch concurrency limit must be >= 1");

    if items.is_empty() {
        return Vec::new();
    }

    let fetch = Arc::new(fetch);
    let gate = Arc::new(Semaphore::new(limit));
    let mut tasks = JoinSet::new();

    for (index, item) in items.iter().cloned().enumerate() {
        let fetch = Arc::clone(&fetch);
        let gate = Arc::clone(&gate);

        tasks.spawn(async move {
            // acquire_owned ties the permit to this task; it is released when
            // the task finishes, whether the fetch succeeded or not.
            let _permit = match gate.acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => return (index, FetchResult::failure(item, "admission gate closed")),
            };

            if !pacing.is_zero() {
                tokio::time::sleep(pacing).await;
            }

            let result = match fetch(item.clone()).await {
                Ok(payload) => FetchResult::success(item, payload),
                Err(err) => FetchResult::failure(item, err.to_string()),
            };
            (index, result)
        });
    }

    let mut slots: Vec<Option<FetchResult>> = items.iter().map(|_| None).collect();
    while let Some(joined) = tasks.join_next().await {
        // A panicked task loses its index; its slot is backfilled below so
        // the one-result-per-item invariant holds on every path.
        if let Ok((index, result)) = joined {
            slots[index] = Some(result);
        }
    }

    items
        .into_iter()
        .zip(slots)
        .map(|(item, slot)| slot.unwrap_or_else(|| FetchResult::failure(item, "fetch task failed")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn empty_input_returns_empty_without_fetching() {
        let results = fetch_all(Vec::new(), 4, Duration::ZERO, |_item| async {
            panic!("fetch must not be invoked for an empty batch")
        })
        .await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    #[should_panic(expected = "concurrency limit must be >= 1")]
    async fn zero_limit_is_a_programming_error() {
        let items = vec![WorkItem::new("1", "a")];
        fetch_all(items, 0, Duration::ZERO, |_item| async { Ok(json!({})) }).await;
    }

    #[tokio::test]
    async fn single_failure_is_isolated() {
        let items = vec![
            WorkItem::new("1", "a"),
            WorkItem::new("2", "b"),
            WorkItem::new("3", "c"),
        ];
        let results = fetch_all(items, 2, Duration::ZERO, |item| async move {
            if item.id == "2" {
                Err(GatewayError::Api {
                    status: 500,
                    body: "boom".to_string(),
                })
            } else {
                Ok(json!({"device": item.id}))
            }
        })
        .await;

        assert_eq!(results.len(), 3);
        assert!(results[0].is_success());
        assert!(!results[1].is_success());
        assert!(results[1].error.as_deref().unwrap().contains("boom"));
        assert!(results[2].is_success());
    }

    #[tokio::test]
    async fn results_align_with_input_ids() {
        let items: Vec<WorkItem> = (0..16)
            .map(|i| WorkItem::new(i.to_string(), format!("device-{i}")))
            .collect();
        let results = fetch_all(items.clone(), 4, Duration::ZERO, |item| async move {
            Ok(json!({"id": item.id}))
        })
        .await;

        for (item, result) in items.iter().zip(&results) {
            assert_eq!(item.id, result.id);
            assert_eq!(item.label, result.label);
            assert_eq!(result.payload.as_ref().unwrap()["id"], item.id.as_str());
        }
    }
}
