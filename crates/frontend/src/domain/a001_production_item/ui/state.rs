//! Detail retrieval flow of a summary card.
//!
//! The modal is either closed, waiting for the detail request, or open with
//! the loaded record. A record can only be held while open, so an open modal
//! without data cannot be represented.

use crate::domain::a001_production_item::api::{FetchError, ItemSource};
use crate::shared::toast::Notify;
use contracts::domain::a001_production_item::aggregate::{ItemId, ProductionItem};
use leptos::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailState {
    #[default]
    Closed,
    Loading,
    Open(ProductionItem),
}

impl DetailState {
    pub fn is_loading(&self) -> bool {
        matches!(self, DetailState::Loading)
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DetailState::Open(_))
    }

    pub fn item(&self) -> Option<&ProductionItem> {
        match self {
            DetailState::Open(item) => Some(item),
            _ => None,
        }
    }
}

/// Where the flow keeps its state
pub trait DetailStore {
    fn current(&self) -> DetailState;
    fn replace(&self, state: DetailState);
}

impl DetailStore for RwSignal<DetailState> {
    fn current(&self) -> DetailState {
        self.get_untracked()
    }

    fn replace(&self, state: DetailState) {
        self.set(state);
    }
}

/// Hands out tickets for in-flight requests.
///
/// Issuing a new ticket or calling [`FetchGuard::invalidate`] makes every
/// older ticket stale, so a late response is dropped instead of being
/// written into a card that was torn down or superseded.
#[derive(Debug, Clone, Default)]
pub struct FetchGuard {
    generation: Arc<AtomicU64>,
}

#[derive(Debug, Clone)]
pub struct FetchTicket {
    generation: Arc<AtomicU64>,
    issued: u64,
}

impl FetchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> FetchTicket {
        let issued = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        FetchTicket {
            generation: self.generation.clone(),
            issued,
        }
    }

    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

impl FetchTicket {
    pub fn is_current(&self) -> bool {
        self.generation.load(Ordering::SeqCst) == self.issued
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewDetailsOutcome {
    /// Detail loaded, modal open
    Opened,
    /// Request failed, user notified
    Failed(FetchError),
    /// A request is already running
    Ignored,
    /// The card went away or a newer request took over
    Stale,
}

pub fn failure_message(id: &ItemId, error: &FetchError) -> String {
    format!("Failed to load details for item {}: {}", id, error)
}

/// "View details" action.
///
/// Every exit that still owns the card leaves `Loading`: success opens the
/// modal, failure closes it and reports once through `notifier`.
pub async fn view_details<S, N, D>(
    source: &S,
    notifier: &N,
    store: &D,
    id: &ItemId,
    ticket: &FetchTicket,
) -> ViewDetailsOutcome
where
    S: ItemSource,
    N: Notify + ?Sized,
    D: DetailStore + ?Sized,
{
    if store.current().is_loading() {
        return ViewDetailsOutcome::Ignored;
    }
    store.replace(DetailState::Loading);

    let result = source.fetch_item(id).await;

    if !ticket.is_current() {
        log::debug!("Dropping stale detail response for item {}", id);
        return ViewDetailsOutcome::Stale;
    }

    match result {
        Ok(item) => {
            store.replace(DetailState::Open(item));
            ViewDetailsOutcome::Opened
        }
        Err(error) => {
            store.replace(DetailState::Closed);
            notifier.error(failure_message(id, &error));
            ViewDetailsOutcome::Failed(error)
        }
    }
}

/// Close the modal and drop the loaded record in one update
pub fn close_details<D: DetailStore + ?Sized>(store: &D) {
    store.replace(DetailState::Closed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_production_item::aggregate::ProductionStatus;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct RecordingStore {
        history: RefCell<Vec<DetailState>>,
    }

    impl DetailStore for RecordingStore {
        fn current(&self) -> DetailState {
            self.history.borrow().last().cloned().unwrap_or_default()
        }

        fn replace(&self, state: DetailState) {
            self.history.borrow_mut().push(state);
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        messages: RefCell<Vec<String>>,
    }

    impl Notify for RecordingNotifier {
        fn error(&self, message: String) {
            self.messages.borrow_mut().push(message);
        }
    }

    struct FakeSource {
        response: Result<ProductionItem, FetchError>,
        calls: Cell<usize>,
        on_fetch: Option<Box<dyn Fn()>>,
    }

    impl FakeSource {
        fn new(response: Result<ProductionItem, FetchError>) -> Self {
            Self {
                response,
                calls: Cell::new(0),
                on_fetch: None,
            }
        }
    }

    impl ItemSource for FakeSource {
        async fn fetch_item(&self, _id: &ItemId) -> Result<ProductionItem, FetchError> {
            self.calls.set(self.calls.get() + 1);
            if let Some(hook) = &self.on_fetch {
                hook();
            }
            self.response.clone()
        }
    }

    fn sample_item(id: &str) -> ProductionItem {
        ProductionItem {
            id: ItemId::from(id),
            order_number: Some("PO-001".into()),
            style: Some("STYLE-ABC".into()),
            quantity: Some(1000),
            status: ProductionStatus::InProduction,
            ..Default::default()
        }
    }

    #[test]
    fn test_success_opens_with_fetched_item() {
        let item = sample_item("a1");
        let source = FakeSource::new(Ok(item.clone()));
        let notifier = RecordingNotifier::default();
        let store = RecordingStore::default();
        let guard = FetchGuard::new();

        let outcome = block_on(view_details(
            &source,
            &notifier,
            &store,
            &item.id,
            &guard.issue(),
        ));

        assert_eq!(outcome, ViewDetailsOutcome::Opened);
        assert_eq!(
            *store.history.borrow(),
            vec![DetailState::Loading, DetailState::Open(item.clone())]
        );
        assert_eq!(store.current().item(), Some(&item));
        assert!(notifier.messages.borrow().is_empty());
    }

    #[test]
    fn test_failure_notifies_once_and_stays_closed() {
        let source = FakeSource::new(Err(FetchError::Status(404)));
        let notifier = RecordingNotifier::default();
        let store = RecordingStore::default();
        let guard = FetchGuard::new();

        let outcome = block_on(view_details(
            &source,
            &notifier,
            &store,
            &ItemId::from("missing"),
            &guard.issue(),
        ));

        assert_eq!(outcome, ViewDetailsOutcome::Failed(FetchError::Status(404)));
        assert_eq!(
            *store.history.borrow(),
            vec![DetailState::Loading, DetailState::Closed]
        );
        assert_eq!(notifier.messages.borrow().len(), 1);
        assert!(notifier.messages.borrow()[0].contains("HTTP 404"));
    }

    #[test]
    fn test_network_failure_releases_loading() {
        let source = FakeSource::new(Err(FetchError::Network("offline".into())));
        let notifier = RecordingNotifier::default();
        let store = RecordingStore::default();
        let guard = FetchGuard::new();

        block_on(view_details(
            &source,
            &notifier,
            &store,
            &ItemId::Int(3),
            &guard.issue(),
        ));

        assert!(!store.current().is_loading());
        assert!(!store.current().is_open());
        assert_eq!(notifier.messages.borrow().len(), 1);
    }

    #[test]
    fn test_activation_while_loading_is_ignored() {
        let source = FakeSource::new(Ok(sample_item("a1")));
        let notifier = RecordingNotifier::default();
        let store = RecordingStore::default();
        store.replace(DetailState::Loading);
        let guard = FetchGuard::new();

        let outcome = block_on(view_details(
            &source,
            &notifier,
            &store,
            &ItemId::from("a1"),
            &guard.issue(),
        ));

        assert_eq!(outcome, ViewDetailsOutcome::Ignored);
        assert_eq!(source.calls.get(), 0);
    }

    #[test]
    fn test_teardown_drops_late_response() {
        let guard = FetchGuard::new();
        let teardown = guard.clone();
        let mut source = FakeSource::new(Ok(sample_item("a1")));
        source.on_fetch = Some(Box::new(move || teardown.invalidate()));
        let notifier = RecordingNotifier::default();
        let store = RecordingStore::default();

        let outcome = block_on(view_details(
            &source,
            &notifier,
            &store,
            &ItemId::from("a1"),
            &guard.issue(),
        ));

        assert_eq!(outcome, ViewDetailsOutcome::Stale);
        assert_eq!(*store.history.borrow(), vec![DetailState::Loading]);
    }

    #[test]
    fn test_newer_ticket_supersedes_older() {
        let guard = FetchGuard::new();
        let first = guard.issue();
        let second = guard.issue();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn test_close_resets_in_one_update() {
        let store = RecordingStore::default();
        store.replace(DetailState::Open(sample_item("a1")));

        close_details(&store);

        assert_eq!(store.history.borrow().len(), 2);
        assert_eq!(store.current(), DetailState::Closed);
        assert!(store.current().item().is_none());
    }

    #[test]
    fn test_reopen_shows_new_item_only() {
        let guard = FetchGuard::new();
        let notifier = RecordingNotifier::default();
        let store = RecordingStore::default();

        let first = sample_item("a1");
        block_on(view_details(
            &FakeSource::new(Ok(first.clone())),
            &notifier,
            &store,
            &first.id,
            &guard.issue(),
        ));
        close_details(&store);

        let second = sample_item("b2");
        block_on(view_details(
            &FakeSource::new(Ok(second.clone())),
            &notifier,
            &store,
            &second.id,
            &guard.issue(),
        ));

        let history = store.history.borrow();
        assert_eq!(history[2], DetailState::Closed);
        assert_eq!(history[3], DetailState::Loading);
        assert_eq!(history[4], DetailState::Open(second));
    }
}
