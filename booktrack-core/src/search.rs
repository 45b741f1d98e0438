//! Tri-state search adapter over a catalog source

use crate::catalog::CatalogSource;
use crate::types::CatalogEntry;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

/// The result of one asynchronous fetch: exactly one of loading, ready, or
/// failed. A fresh call always restarts at `Loading`; the other two variants
/// are terminal for that call.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState<T> {
    /// Request issued, response not yet in
    Loading,

    /// Well-formed response received (zero results is still a success)
    Ready(T),

    /// Transport or decode failure; never transitions to `Ready`
    Failed(String),
}

impl<T> SearchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, SearchState::Ready(_))
    }
}

type Holder<T> = Arc<RwLock<Option<SearchState<T>>>>;

/// One caller's search session.
///
/// Holds the tri-state result of the most recent search and detail fetch.
/// Starting a new request supersedes the previous one: the prior in-flight
/// task is aborted, and a stale task that still manages to complete checks a
/// generation counter before writing, so a newer call's state is never
/// overwritten by an older response.
pub struct SearchSession {
    source: Arc<dyn CatalogSource>,
    results: Holder<Vec<CatalogEntry>>,
    detail: Holder<CatalogEntry>,
    generation: Arc<AtomicU64>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl SearchSession {
    /// Create a session over the given catalog source
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            results: Arc::new(RwLock::new(None)),
            detail: Arc::new(RwLock::new(None)),
            generation: Arc::new(AtomicU64::new(0)),
            task: Mutex::new(None),
        }
    }

    /// Current search result state, if a search has been issued
    pub async fn results(&self) -> Option<SearchState<Vec<CatalogEntry>>> {
        self.results.read().await.clone()
    }

    /// Current detail fetch state, if a fetch has been issued
    pub async fn detail(&self) -> Option<SearchState<CatalogEntry>> {
        self.detail.read().await.clone()
    }

    /// Issue a catalog search.
    ///
    /// An empty query is a defined no-op: no request goes out and the held
    /// state stays exactly as it was.
    pub async fn search(&self, query: &str) {
        if query.is_empty() {
            return;
        }

        let generation = self.begin();
        *self.results.write().await = Some(SearchState::Loading);

        let source = Arc::clone(&self.source);
        let holder = Arc::clone(&self.results);
        let counter = Arc::clone(&self.generation);
        let query = query.to_string();

        let handle = tokio::spawn(async move {
            let outcome = match source.search(&query).await {
                Ok(entries) => SearchState::Ready(entries),
                Err(e) => {
                    tracing::warn!(query, error = %e, "catalog search failed");
                    SearchState::Failed(e.to_string())
                }
            };
            // A newer call owns the holder now; drop the stale outcome
            if counter.load(Ordering::SeqCst) == generation {
                *holder.write().await = Some(outcome);
            }
        });
        self.replace_task(handle);
    }

    /// Fetch a single volume's detail under the same tri-state contract
    pub async fn fetch_detail(&self, volume_id: &str) {
        if volume_id.is_empty() {
            return;
        }

        let generation = self.begin();
        *self.detail.write().await = Some(SearchState::Loading);

        let source = Arc::clone(&self.source);
        let holder = Arc::clone(&self.detail);
        let counter = Arc::clone(&self.generation);
        let volume_id = volume_id.to_string();

        let handle = tokio::spawn(async move {
            let outcome = match source.fetch(&volume_id).await {
                Ok(entry) => SearchState::Ready(entry),
                Err(e) => {
                    tracing::warn!(volume_id, error = %e, "catalog fetch failed");
                    SearchState::Failed(e.to_string())
                }
            };
            if counter.load(Ordering::SeqCst) == generation {
                *holder.write().await = Some(outcome);
            }
        });
        self.replace_task(handle);
    }

    /// Wait for the most recently issued request to settle (test support)
    pub async fn settled(&self) {
        let handle = self.task.lock().expect("task lock poisoned").take();
        if let Some(handle) = handle {
            let _ = handle.await;
        }
    }

    /// Bump the generation, invalidating any in-flight request
    fn begin(&self) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(previous) = self.task.lock().expect("task lock poisoned").take() {
            previous.abort();
        }
        generation
    }

    fn replace_task(&self, handle: JoinHandle<()>) {
        let mut slot = self.task.lock().expect("task lock poisoned");
        *slot = Some(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogResult;
    use crate::error::CatalogError;
    use async_trait::async_trait;
    use std::time::Duration;

    /// Scripted catalog source: each query maps to a delayed canned reply
    #[derive(Default)]
    struct StubSource {
        replies: std::collections::HashMap<String, (Duration, Option<Vec<CatalogEntry>>)>,
    }

    impl StubSource {
        fn ok(entries: Vec<CatalogEntry>) -> Self {
            let mut source = Self::default();
            source.replies.insert(
                String::new(),
                (Duration::ZERO, Some(entries)),
            );
            source
        }

        fn failing() -> Self {
            Self::default()
        }

        fn reply(mut self, query: &str, delay: Duration, entries: Vec<CatalogEntry>) -> Self {
            self.replies
                .insert(query.to_string(), (delay, Some(entries)));
            self
        }

        fn lookup(&self, query: &str) -> (Duration, Option<Vec<CatalogEntry>>) {
            self.replies
                .get(query)
                .or_else(|| self.replies.get(""))
                .cloned()
                .unwrap_or((Duration::ZERO, None))
        }
    }

    #[async_trait]
    impl CatalogSource for StubSource {
        async fn search(&self, query: &str) -> CatalogResult<Vec<CatalogEntry>> {
            let (delay, entries) = self.lookup(query);
            tokio::time::sleep(delay).await;
            entries.ok_or_else(|| CatalogError::Transport("connection refused".to_string()))
        }

        async fn fetch(&self, volume_id: &str) -> CatalogResult<CatalogEntry> {
            let (delay, entries) = self.lookup("");
            tokio::time::sleep(delay).await;
            entries
                .unwrap_or_default()
                .into_iter()
                .find(|e| e.id == volume_id)
                .ok_or_else(|| CatalogError::NotFound(volume_id.to_string()))
        }
    }

    fn entry(id: &str, title: &str) -> CatalogEntry {
        CatalogEntry {
            id: id.to_string(),
            title: title.to_string(),
            authors: Vec::new(),
            description: None,
            categories: Vec::new(),
            published_date: None,
            page_count: None,
            thumbnail: None,
        }
    }

    #[tokio::test]
    async fn test_empty_query_is_a_no_op() {
        let session = SearchSession::new(Arc::new(StubSource::ok(vec![entry("a", "A")])));
        session.search("").await;
        session.settled().await;
        assert!(session.results().await.is_none());
    }

    #[tokio::test]
    async fn test_search_success() {
        let source = StubSource::ok(vec![entry("a", "A"), entry("b", "B")]);
        let session = SearchSession::new(Arc::new(source));

        session.search("flutter").await;
        session.settled().await;

        match session.results().await {
            Some(SearchState::Ready(entries)) => assert_eq!(entries.len(), 2),
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_search_failure_never_becomes_ready() {
        let session = SearchSession::new(Arc::new(StubSource::failing()));

        session.search("flutter").await;
        session.settled().await;

        match session.results().await {
            Some(SearchState::Failed(cause)) => {
                assert!(cause.contains("connection refused"))
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_new_search_supersedes_in_flight_one() {
        let source = StubSource::failing()
            .reply("first", Duration::from_millis(50), vec![entry("slow", "Slow")])
            .reply("second", Duration::ZERO, vec![entry("fast", "Fast")]);
        let session = SearchSession::new(Arc::new(source));

        session.search("first").await;
        session.search("second").await;
        session.settled().await;

        match session.results().await {
            Some(SearchState::Ready(entries)) => assert_eq!(entries[0].id, "fast"),
            other => panic!("expected Ready, got {other:?}"),
        }

        // Give the superseded search time to have completed; the newer
        // result must still be in place
        tokio::time::sleep(Duration::from_millis(100)).await;
        match session.results().await {
            Some(SearchState::Ready(entries)) => assert_eq!(entries[0].id, "fast"),
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_detail_fetch() {
        let source = StubSource::ok(vec![entry("vol-9", "Nine")]);
        let session = SearchSession::new(Arc::new(source));

        session.fetch_detail("vol-9").await;
        session.settled().await;

        match session.detail().await {
            Some(SearchState::Ready(entry)) => assert_eq!(entry.title, "Nine"),
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_detail_fetch_missing_volume_fails() {
        let session = SearchSession::new(Arc::new(StubSource::ok(Vec::new())));

        session.fetch_detail("ghost").await;
        session.settled().await;

        assert!(matches!(
            session.detail().await,
            Some(SearchState::Failed(_))
        ));
    }
}
