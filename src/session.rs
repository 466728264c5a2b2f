//! Client session: current page, displayed contents, and submission echo.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::client::{ClientResult, PageBackend};
use crate::models::SubmissionState;
use crate::paging::PageIndex;
use crate::storage::KeyValueStore;
use crate::store::{Lifecycle, PageIndexStore, PageRequest};
use crate::views::text;

/// Numbers currently on display, tagged with the request that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContents {
    pub page: PageIndex,
    pub sequence: u64,
    pub numbers: Vec<u32>,
}

/// A search result paired with the request it answers.
#[derive(Debug, Clone)]
pub struct PageResponse {
    pub request: PageRequest,
    pub numbers: Vec<u32>,
}

/// One visitor's view of the paginated range.
pub struct PageSession<B> {
    store: PageIndexStore,
    backend: B,
    contents: Option<PageContents>,
    submission: SubmissionState,
}

impl<B: PageBackend> PageSession<B> {
    pub fn new(storage: Arc<dyn KeyValueStore>, backend: B) -> Self {
        Self {
            store: PageIndexStore::new(storage),
            backend,
            contents: None,
            submission: SubmissionState::NotSubmitted,
        }
    }

    pub fn store(&self) -> &PageIndexStore {
        &self.store
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Contents on display; may belong to an earlier page while a fetch is pending.
    pub fn contents(&self) -> Option<&PageContents> {
        self.contents.as_ref()
    }

    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    /// Resolves the persisted page and loads its contents.
    pub async fn start(&mut self) -> ClientResult<()> {
        let request = self.store.initialize().await;
        self.load(request).await
    }

    pub async fn go_to(&mut self, requested: i64) -> ClientResult<()> {
        let request = self.navigate(requested).await;
        self.load(request).await
    }

    /// Moves forward one page. Ignored until [`start`](Self::start) has run.
    pub async fn next(&mut self) -> ClientResult<()> {
        match self.store.next_page().await {
            Some(request) => self.load(request).await,
            None => Ok(()),
        }
    }

    /// Moves back one page. Ignored until [`start`](Self::start) has run.
    pub async fn previous(&mut self) -> ClientResult<()> {
        match self.store.previous_page().await {
            Some(request) => self.load(request).await,
            None => Ok(()),
        }
    }

    /// Changes the page without fetching. The caller dispatches the returned
    /// request through [`fetch`](Self::fetch) and hands the result to
    /// [`apply`](Self::apply).
    pub async fn navigate(&mut self, requested: i64) -> PageRequest {
        self.store.set_page_index(requested).await
    }

    /// Runs the search for `request`.
    pub async fn fetch(&self, request: PageRequest) -> ClientResult<PageResponse> {
        let numbers = self.backend.search(request.page).await?;
        Ok(PageResponse { request, numbers })
    }

    /// Installs `response` if it answers the latest request for the current page.
    ///
    /// Returns whether the response was applied. Stale responses are dropped
    /// and the previous contents stay on display.
    pub fn apply(&mut self, response: PageResponse) -> bool {
        let PageResponse { request, numbers } = response;
        let current = self.store.current();

        if request.sequence != self.store.latest_sequence() || Some(request.page) != current {
            debug!(
                page = request.page.get(),
                sequence = request.sequence,
                latest = self.store.latest_sequence(),
                "Discarding stale page response"
            );
            return false;
        }

        self.contents = Some(PageContents {
            page: request.page,
            sequence: request.sequence,
            numbers,
        });
        true
    }

    async fn load(&mut self, request: PageRequest) -> ClientResult<()> {
        match self.fetch(request).await {
            Ok(response) => {
                self.apply(response);
                Ok(())
            }
            Err(e) if e.is_page_validation() => {
                warn!("Page {} rejected, returning to the first page: {}", request.page, e);
                let retry = self.store.set_page_index(1).await;
                let response = self.fetch(retry).await?;
                self.apply(response);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Submits a selection and records the echoed result.
    pub async fn submit(&mut self, selected: Option<i64>) -> ClientResult<SubmissionState> {
        let response = self.backend.submit(selected).await?;
        self.submission = SubmissionState::from(response);
        Ok(self.submission)
    }

    /// Renders the session for a terminal.
    pub fn render_text(&self) -> String {
        let page = match self.store.lifecycle() {
            Lifecycle::Loading => return text::loading_view(),
            Lifecycle::Ready(page) => page,
        };
        let numbers = self
            .contents
            .as_ref()
            .map(|c| c.numbers.as_slice())
            .unwrap_or(&[]);

        [
            text::pager_view(page, self.store.can_go_previous(), self.store.can_go_next()),
            "Selectable options".to_string(),
            text::list_view(numbers),
            text::selection_view(numbers),
            text::submission_view(&self.submission),
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientError;
    use crate::error::ErrorCode;
    use crate::models::SubmitResponse;
    use crate::paging::PAGE_SIZE;
    use crate::storage::{MemoryKeyValueStore, CURRENT_PAGE_KEY};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use reqwest::StatusCode;

    /// Computes pages locally; pages listed in `reject` fail validation.
    #[derive(Default)]
    struct LocalBackend {
        reject: Vec<u32>,
        searches: Mutex<Vec<u32>>,
    }

    #[async_trait]
    impl PageBackend for LocalBackend {
        async fn search(&self, page: PageIndex) -> ClientResult<Vec<u32>> {
            self.searches.lock().push(page.get());
            if self.reject.contains(&page.get()) {
                return Err(ClientError::Rejected {
                    status: StatusCode::BAD_REQUEST,
                    code: ErrorCode::PageOutOfRange,
                    message: "rejected".to_string(),
                });
            }
            Ok(crate::paging::page_range(page.get(), PAGE_SIZE))
        }

        async fn submit(&self, selected: Option<i64>) -> ClientResult<SubmitResponse> {
            Ok(SubmitResponse { num: selected })
        }
    }

    fn session(entries: &[(&str, &str)]) -> PageSession<LocalBackend> {
        let storage = Arc::new(MemoryKeyValueStore::with_entries(entries.iter().copied()));
        PageSession::new(storage, LocalBackend::default())
    }

    #[tokio::test]
    async fn test_start_without_key_shows_first_page() {
        let mut session = session(&[]);
        assert_eq!(session.render_text(), "Loading page number...");

        session.start().await.unwrap();
        let contents = session.contents().unwrap();
        assert_eq!(contents.page, PageIndex::FIRST);
        assert_eq!(contents.numbers, (1..=8).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_start_resumes_persisted_page() {
        let mut session = session(&[(CURRENT_PAGE_KEY, "3")]);
        session.start().await.unwrap();
        assert_eq!(
            session.contents().unwrap().numbers,
            vec![17, 18, 19, 20, 21, 22, 23, 24]
        );
    }

    #[tokio::test]
    async fn test_navigation_before_start_keeps_persisted_page() {
        let storage = Arc::new(MemoryKeyValueStore::with_entries([(CURRENT_PAGE_KEY, "7")]));
        let mut session = PageSession::new(storage.clone(), LocalBackend::default());

        session.next().await.unwrap();
        session.previous().await.unwrap();
        assert!(session.contents().is_none());
        assert!(session.backend().searches.lock().is_empty());
        assert_eq!(storage.snapshot(CURRENT_PAGE_KEY).as_deref(), Some("7"));

        session.start().await.unwrap();
        assert_eq!(session.contents().unwrap().page.get(), 7);
    }

    #[tokio::test]
    async fn test_navigation_clamps_at_boundaries() {
        let mut session = session(&[]);
        session.start().await.unwrap();
        session.previous().await.unwrap();
        assert_eq!(session.contents().unwrap().page, PageIndex::FIRST);

        session.go_to(99).await.unwrap();
        assert_eq!(session.contents().unwrap().page, PageIndex::LAST);
        session.next().await.unwrap();
        assert_eq!(session.contents().unwrap().numbers.last(), Some(&80));
        assert!(session.render_text().contains("<prev  10 / 10  ---- "));
    }

    #[tokio::test]
    async fn test_out_of_order_responses_are_discarded() {
        let mut session = session(&[]);
        session.start().await.unwrap();

        let to_two = session.navigate(2).await;
        let to_three = session.navigate(3).await;
        let late = session.fetch(to_two).await.unwrap();
        let fresh = session.fetch(to_three).await.unwrap();

        assert!(session.apply(fresh));
        assert!(!session.apply(late));
        assert_eq!(session.contents().unwrap().page.get(), 3);
    }

    #[tokio::test]
    async fn test_stale_contents_stay_until_response_arrives() {
        let mut session = session(&[]);
        session.start().await.unwrap();

        let to_five = session.navigate(5).await;
        assert_eq!(session.contents().unwrap().page, PageIndex::FIRST);

        let response = session.fetch(to_five).await.unwrap();
        assert!(session.apply(response));
        assert_eq!(session.contents().unwrap().numbers[0], 33);
    }

    #[tokio::test]
    async fn test_rejected_page_falls_back_to_first() {
        let storage = Arc::new(MemoryKeyValueStore::new());
        let backend = LocalBackend {
            reject: vec![4],
            ..LocalBackend::default()
        };
        let mut session = PageSession::new(storage.clone(), backend);
        session.start().await.unwrap();
        session.go_to(4).await.unwrap();

        assert_eq!(session.contents().unwrap().page, PageIndex::FIRST);
        assert_eq!(storage.snapshot(CURRENT_PAGE_KEY).as_deref(), Some("1"));
        assert_eq!(*session.backend().searches.lock(), vec![1, 4, 1]);
    }

    #[tokio::test]
    async fn test_submission_states() {
        let mut session = session(&[]);
        session.start().await.unwrap();
        assert!(session.render_text().ends_with("You did not select."));

        assert_eq!(session.submit(None).await.unwrap(), SubmissionState::Empty);
        assert!(session.render_text().ends_with("You sent empty option!"));

        assert_eq!(session.submit(Some(5)).await.unwrap(), SubmissionState::Sent(5));
        assert!(session.render_text().ends_with("You sent: 5"));
    }
}
