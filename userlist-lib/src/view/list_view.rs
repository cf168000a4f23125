//! The list view controller.

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use log::info;
use log::warn;
use tokio::sync::mpsc;

use crate::api::UserSource;
use crate::model::ItemsPerPage;
use crate::model::QueryParams;
use crate::model::UsersPage;

use super::Debouncer;
use super::FetchOutcome;
use super::FetchState;
use super::FetchTracker;
use super::Settled;
use super::StateStore;

/// Default quiet period before a search or sort change is fetched.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(2000);

/// Tunables for a [`ListView`].
#[derive(Debug, Clone, Copy)]
pub struct ListViewConfig {
    /// How long search/sort changes must stay quiet before refetching.
    pub quiet_period: Duration,
    /// Items per page at mount.
    pub initial_limit: ItemsPerPage,
}

impl Default for ListViewConfig {
    fn default() -> Self {
        Self {
            quiet_period: DEFAULT_QUIET_PERIOD,
            initial_limit: ItemsPerPage::default(),
        }
    }
}

/// Something [`ListView::process`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewUpdate {
    /// The quiet period elapsed and a fetch was issued.
    FetchIssued { seq: u64 },
    /// A response replaced the shown data (or error).
    Applied { seq: u64 },
    /// A response arrived after a newer one and was dropped.
    Discarded { seq: u64 },
}

/// Paginated, searchable, sortable view over a [`UserSource`].
///
/// All state lives here and is only touched through `&mut self`, so the
/// owning task is the single writer. Fetches run as spawned tasks and report
/// back through a channel drained by [`process`](Self::process).
///
/// Page and limit changes fetch immediately. Search and sort changes restart
/// a quiet-period timer and fetch once it elapses. Page, limit and sort
/// actions are ignored while anything is in flight (see
/// [`actions_allowed`](Self::actions_allowed)).
pub struct ListView<S> {
    source: Arc<S>,
    store: StateStore,
    fetches: FetchTracker,
    debounce: Debouncer,
    search_loading: bool,
    results_tx: mpsc::UnboundedSender<FetchOutcome>,
    results_rx: mpsc::UnboundedReceiver<FetchOutcome>,
    torn_down: bool,
}

enum Wake {
    Debounce,
    Result(FetchOutcome),
}

impl<S: UserSource + 'static> ListView<S> {
    pub fn new(source: Arc<S>, config: ListViewConfig) -> Self {
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        Self {
            source,
            store: StateStore::new(config.initial_limit),
            fetches: FetchTracker::new(),
            debounce: Debouncer::new(config.quiet_period),
            search_loading: false,
            results_tx,
            results_rx,
            torn_down: false,
        }
    }

    /// Issues the initial fetch.
    pub fn mount(&mut self) {
        if self.torn_down {
            return;
        }
        info!("Mounting list view");
        self.issue_fetch();
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    pub fn params(&self) -> QueryParams {
        self.store.params()
    }

    /// A fetch is in flight.
    pub fn loading(&self) -> bool {
        self.fetches.is_loading()
    }

    /// A search/sort change is waiting for its quiet period to end.
    pub fn search_loading(&self) -> bool {
        self.search_loading
    }

    /// Whether page, limit and sort actions are accepted right now.
    pub fn actions_allowed(&self) -> bool {
        !(self.loading() || self.search_loading)
    }

    pub fn fetch_state(&self) -> &FetchState {
        self.fetches.state()
    }

    pub fn data(&self) -> Option<&UsersPage> {
        self.fetches.data()
    }

    pub fn error(&self) -> Option<&str> {
        self.fetches.error()
    }

    /// Total pages from the latest applied response, zero if none.
    pub fn total_pages(&self) -> u32 {
        self.data().map(UsersPage::total_pages).unwrap_or(0)
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Replaces the search text and restarts the quiet period.
    ///
    /// Typing is never blocked, even while busy.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        if self.torn_down {
            return;
        }
        if self.store.set_search_text(text) {
            self.qualifying_change();
        }
    }

    pub fn push_search_char(&mut self, c: char) {
        let mut text = self.store.search_text().to_string();
        text.push(c);
        self.set_search_text(text);
    }

    pub fn pop_search_char(&mut self) {
        let mut text = self.store.search_text().to_string();
        if text.pop().is_some() {
            self.set_search_text(text);
        }
    }

    pub fn clear_search(&mut self) {
        self.set_search_text(String::new());
    }

    /// Toggles the sort on `field` and restarts the quiet period.
    pub fn toggle_sort(&mut self, field: &str) -> bool {
        if !self.gate("toggle_sort") {
            return false;
        }
        match self.store.toggle_sort(field) {
            Some(order) => {
                debug!("Sort by {} {}", field, order);
                self.qualifying_change();
                true
            }
            None => {
                warn!("Ignoring sort on unknown field {:?}", field);
                false
            }
        }
    }

    /// Jumps to page `page` as given.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        if !self.gate("go_to_page") {
            return false;
        }
        self.refetch_if(|store| store.set_page(page))
    }

    pub fn previous_page(&mut self) -> bool {
        if !self.gate("previous_page") {
            return false;
        }
        self.refetch_if(StateStore::previous_page)
    }

    pub fn next_page(&mut self) -> bool {
        if !self.gate("next_page") {
            return false;
        }
        let total = self.total_pages();
        self.refetch_if(|store| store.next_page(total))
    }

    /// Sets the items per page and returns to page 1.
    pub fn change_limit(&mut self, limit: ItemsPerPage) -> bool {
        if !self.gate("change_limit") {
            return false;
        }
        self.refetch_if(|store| store.set_limit(limit))
    }

    /// Re-issues the current query, e.g. after a failure.
    pub fn retry(&mut self) -> bool {
        if !self.gate("retry") {
            return false;
        }
        self.issue_fetch();
        true
    }

    /// Cancels the pending quiet period and stops all further updates.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        info!("Tearing down list view");
        self.debounce.cancel();
        self.search_loading = false;
        self.torn_down = true;
        self.results_rx.close();
    }

    /// Waits for the next timer expiry or fetch result and applies it.
    ///
    /// Cancel safe, so it can sit in a `select!` next to terminal input.
    /// Returns `None` once torn down.
    pub async fn process(&mut self) -> Option<ViewUpdate> {
        if self.torn_down {
            return None;
        }

        let wake = tokio::select! {
            () = self.debounce.fired() => Wake::Debounce,
            Some(outcome) = self.results_rx.recv() => Wake::Result(outcome),
            else => return None,
        };

        match wake {
            Wake::Debounce => {
                let seq = self.issue_fetch();
                self.search_loading = false;
                Some(ViewUpdate::FetchIssued { seq })
            }
            Wake::Result(outcome) => Some(self.apply(outcome)),
        }
    }

    fn apply(&mut self, outcome: FetchOutcome) -> ViewUpdate {
        let seq = outcome.seq;
        if let Err(e) = &outcome.result {
            warn!("Fetch #{} failed: {}", seq, e);
        }

        match self.fetches.settle(outcome) {
            Settled::Stale => ViewUpdate::Discarded { seq },
            Settled::Applied => {
                debug!("Applied response #{}", seq);
                self.clamp_page();
                ViewUpdate::Applied { seq }
            }
        }
    }

    /// Pulls the page back into range when a response shrank the page count.
    fn clamp_page(&mut self) {
        let total = self.total_pages();
        if total > 0 && self.store.page() > total && self.store.set_page(total) {
            info!("Page out of range, moving to last page {}", total);
            self.issue_fetch();
        }
    }

    fn gate(&self, action: &str) -> bool {
        if self.torn_down {
            return false;
        }
        if !self.actions_allowed() {
            debug!("Ignoring {} while busy", action);
            return false;
        }
        true
    }

    fn refetch_if(&mut self, mutate: impl FnOnce(&mut StateStore) -> bool) -> bool {
        if mutate(&mut self.store) {
            self.issue_fetch();
            true
        } else {
            false
        }
    }

    fn qualifying_change(&mut self) {
        self.search_loading = true;
        self.debounce.trigger();
    }

    fn issue_fetch(&mut self) -> u64 {
        let seq = self.fetches.begin();
        let params = self.store.params();
        debug!("Issuing fetch #{}: {:?}", seq, params);

        let source = Arc::clone(&self.source);
        let tx = self.results_tx.clone();
        tokio::spawn(async move {
            let result = source.fetch_users(&params).await;
            // The view may be gone by now.
            let _ = tx.send(FetchOutcome { seq, result });
        });
        seq
    }
}

impl<S> Drop for ListView<S> {
    fn drop(&mut self) {
        self.debounce.cancel();
        self.results_rx.close();
    }
}
