use crate::api::{ApiError, ExoplanetApi};
use crate::domain::{Exoplanet, ExoplanetPage, Habitability, PAGE_SIZE};
use crate::filter::{compute_view, Criteria};
use tracing::{debug, warn};

pub const GRID_ERROR_MESSAGE: &str = "Failed to load exoplanets. Please try again later.";
pub const LOAD_MORE_ERROR_MESSAGE: &str = "Could not load more exoplanets.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridStatus {
    Loading,
    Ready,
    Failed(String),
}

/// What a `finish_*` call did with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// The page was applied; carries the number of records it held.
    Applied(usize),
    /// The ticket predates the latest reload and the response was dropped.
    Stale,
}

/// Issued by `begin_*`, redeemed by `finish_*`. A ticket from before the
/// latest first-page request is stale and its result is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTicket {
    pub page: u32,
    generation: u64,
}

/// The accumulated dataset plus the active view over it.
#[derive(Debug)]
pub struct DatasetStore {
    all: Vec<Exoplanet>,
    filtered: Vec<usize>,
    current_page: u32,
    has_more: bool,
    criteria: Criteria,
    status: GridStatus,
    generation: u64,
    first_page_in_flight: bool,
    next_page_in_flight: bool,
    last_error: Option<String>,
}

impl Default for DatasetStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetStore {
    pub const fn new() -> Self {
        Self {
            all: Vec::new(),
            filtered: Vec::new(),
            current_page: 1,
            has_more: false,
            criteria: Criteria {
                search: String::new(),
                method: None,
                habitability: None,
            },
            status: GridStatus::Loading,
            generation: 0,
            first_page_in_flight: false,
            next_page_in_flight: false,
            last_error: None,
        }
    }

    pub fn all(&self) -> &[Exoplanet] {
        &self.all
    }

    pub fn filtered(&self) -> impl Iterator<Item = &Exoplanet> + '_ {
        self.filtered.iter().map(|&index| &self.all[index])
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Record at `position` within the filtered view.
    pub fn filtered_get(&self, position: usize) -> Option<&Exoplanet> {
        self.filtered
            .get(position)
            .and_then(|&index| self.all.get(index))
    }

    pub fn filtered_vec(&self) -> Vec<Exoplanet> {
        self.filtered().cloned().collect()
    }

    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    pub const fn has_more(&self) -> bool {
        self.has_more
    }

    /// Hidden once the grid itself shows a load error.
    pub const fn load_more_visible(&self) -> bool {
        self.has_more && !matches!(self.status, GridStatus::Failed(_))
    }

    pub const fn is_loading_more(&self) -> bool {
        self.next_page_in_flight
    }

    pub const fn status(&self) -> &GridStatus {
        &self.status
    }

    pub const fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn begin_first_page(&mut self) -> PageTicket {
        self.generation += 1;
        self.first_page_in_flight = true;
        self.next_page_in_flight = false;
        if self.all.is_empty() {
            self.status = GridStatus::Loading;
        }
        PageTicket {
            page: 1,
            generation: self.generation,
        }
    }

    /// Replaces the dataset with page 1. On failure the previous dataset is
    /// kept and the grid shows an inline error instead.
    pub fn finish_first_page(
        &mut self,
        ticket: PageTicket,
        result: Result<ExoplanetPage, ApiError>,
    ) -> Result<PageOutcome, ApiError> {
        if ticket.generation != self.generation {
            debug!(page = ticket.page, "dropping stale first page");
            return Ok(PageOutcome::Stale);
        }
        self.first_page_in_flight = false;

        match result {
            Ok(page) => {
                let count = page.exoplanets.len();
                debug!(count, has_more = page.has_more, "first page loaded");
                self.all = page.exoplanets;
                self.current_page = 1;
                self.has_more = page.has_more;
                self.status = GridStatus::Ready;
                self.last_error = None;
                self.refresh_view();
                Ok(PageOutcome::Applied(count))
            }
            Err(error) => {
                warn!(%error, "first page failed");
                self.status = GridStatus::Failed(GRID_ERROR_MESSAGE.to_string());
                Err(error)
            }
        }
    }

    /// Returns `None` while any page request is outstanding, when the server
    /// reported no further pages, or while the grid shows a load error.
    pub fn begin_next_page(&mut self) -> Option<PageTicket> {
        if self.first_page_in_flight || self.next_page_in_flight {
            debug!("load more ignored: request already in flight");
            return None;
        }
        if !self.load_more_visible() {
            return None;
        }

        self.next_page_in_flight = true;
        Some(PageTicket {
            page: self.current_page + 1,
            generation: self.generation,
        })
    }

    /// Appends the page and reapplies the active criteria to the whole
    /// dataset.
    pub fn finish_next_page(
        &mut self,
        ticket: PageTicket,
        result: Result<ExoplanetPage, ApiError>,
    ) -> Result<PageOutcome, ApiError> {
        if ticket.generation != self.generation {
            debug!(page = ticket.page, "dropping stale page");
            return Ok(PageOutcome::Stale);
        }
        self.next_page_in_flight = false;

        match result {
            Ok(page) => {
                let appended = page.exoplanets.len();
                self.all.extend(page.exoplanets);
                self.current_page = ticket.page;
                self.has_more = page.has_more;
                self.last_error = None;
                self.refresh_view();
                debug!(page = ticket.page, appended, total = self.all.len(), "page appended");
                Ok(PageOutcome::Applied(appended))
            }
            Err(error) => {
                warn!(page = ticket.page, %error, "load more failed");
                self.last_error = Some(LOAD_MORE_ERROR_MESSAGE.to_string());
                Err(error)
            }
        }
    }

    pub fn set_search(&mut self, term: &str) {
        term.clone_into(&mut self.criteria.search);
        self.refresh_view();
    }

    pub fn set_method(&mut self, method: Option<String>) {
        self.criteria.method = method.filter(|value| !value.is_empty());
        self.refresh_view();
    }

    pub fn set_habitability(&mut self, habitability: Option<Habitability>) {
        self.criteria.habitability = habitability;
        self.refresh_view();
    }

    pub fn reset_filters(&mut self) {
        self.criteria.clear();
        self.filtered = (0..self.all.len()).collect();
    }

    fn refresh_view(&mut self) {
        self.filtered = compute_view(&self.all, &self.criteria);
    }
}

pub async fn load_first_page<A: ExoplanetApi>(
    store: &mut DatasetStore,
    api: &A,
) -> Result<PageOutcome, ApiError> {
    let ticket = store.begin_first_page();
    let result = api.fetch_exoplanets(ticket.page, PAGE_SIZE).await;
    store.finish_first_page(ticket, result)
}

/// `Ok(None)` when no request was issued.
pub async fn load_next_page<A: ExoplanetApi>(
    store: &mut DatasetStore,
    api: &A,
) -> Result<Option<PageOutcome>, ApiError> {
    let Some(ticket) = store.begin_next_page() else {
        return Ok(None);
    };
    let result = api.fetch_exoplanets(ticket.page, PAGE_SIZE).await;
    store.finish_next_page(ticket, result).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::{page_of, FakeApi};

    #[tokio::test]
    async fn first_page_replaces_instead_of_accumulating() {
        let api = FakeApi::with_pages(vec![page_of("a", 12, true)]);
        let mut store = DatasetStore::new();

        load_first_page(&mut store, &api).await.unwrap();
        load_first_page(&mut store, &api).await.unwrap();

        assert_eq!(store.all().len(), 12);
        assert_eq!(store.filtered_len(), 12);
        assert_eq!(store.current_page(), 1);
        assert_eq!(store.status(), &GridStatus::Ready);
    }

    #[tokio::test]
    async fn next_page_is_strictly_additive() {
        let api = FakeApi::with_pages(vec![page_of("a", 12, true), page_of("b", 5, false)]);
        let mut store = DatasetStore::new();

        load_first_page(&mut store, &api).await.unwrap();
        let appended = load_next_page(&mut store, &api).await.unwrap();

        assert_eq!(appended, Some(PageOutcome::Applied(5)));
        assert_eq!(store.all().len(), 17);
        assert_eq!(store.current_page(), 2);
        assert_eq!(store.all()[12].name, "b-0");
    }

    #[tokio::test]
    async fn load_more_visibility_follows_has_more() {
        let api = FakeApi::with_pages(vec![page_of("a", 12, true), page_of("b", 1, false)]);
        let mut store = DatasetStore::new();

        load_first_page(&mut store, &api).await.unwrap();
        assert!(store.load_more_visible());

        load_next_page(&mut store, &api).await.unwrap();
        assert!(!store.load_more_visible());

        assert_eq!(load_next_page(&mut store, &api).await.unwrap(), None);
        assert_eq!(api.requested_pages(), [1, 2]);
    }

    #[test]
    fn second_load_more_is_ignored_while_one_is_outstanding() {
        let mut store = DatasetStore::new();
        let ticket = store.begin_first_page();
        store
            .finish_first_page(ticket, Ok(page_of("a", 12, true)))
            .unwrap();

        let first = store.begin_next_page();
        let second = store.begin_next_page();
        assert!(first.is_some());
        assert!(second.is_none());
        assert!(store.is_loading_more());

        let Some(first) = first else { return };
        store
            .finish_next_page(first, Ok(page_of("b", 12, true)))
            .unwrap();
        assert_eq!(store.all().len(), 24);
        assert!(!store.is_loading_more());
    }

    #[test]
    fn stale_next_page_is_dropped_after_reload() {
        let mut store = DatasetStore::new();
        let ticket = store.begin_first_page();
        store
            .finish_first_page(ticket, Ok(page_of("a", 12, true)))
            .unwrap();

        let Some(stale) = store.begin_next_page() else {
            panic!("expected a ticket");
        };
        let reload = store.begin_first_page();
        store
            .finish_first_page(reload, Ok(page_of("c", 3, true)))
            .unwrap();

        assert_eq!(
            store.finish_next_page(stale, Ok(page_of("b", 12, true))).unwrap(),
            PageOutcome::Stale
        );
        assert_eq!(store.all().len(), 3);
        assert_eq!(store.current_page(), 1);
    }

    #[test]
    fn load_more_waits_for_an_outstanding_reload() {
        let mut store = DatasetStore::new();
        let ticket = store.begin_first_page();
        store
            .finish_first_page(ticket, Ok(page_of("p1", 12, true)))
            .unwrap();
        for (page, prefix) in [(2, "p2"), (3, "p3")] {
            let Some(ticket) = store.begin_next_page() else {
                panic!("expected a ticket for page {page}");
            };
            store
                .finish_next_page(ticket, Ok(page_of(prefix, 12, true)))
                .unwrap();
        }
        assert_eq!(store.current_page(), 3);

        let reload = store.begin_first_page();
        assert_eq!(store.begin_next_page(), None);
        store
            .finish_first_page(reload, Ok(page_of("p1", 12, true)))
            .unwrap();

        let Some(next) = store.begin_next_page() else {
            panic!("expected a ticket after the reload finished");
        };
        assert_eq!(next.page, 2);
        store
            .finish_next_page(next, Ok(page_of("p2", 12, true)))
            .unwrap();
        assert_eq!(store.all().len(), 24);
        assert_eq!(store.all()[12].name, "p2-0");
    }

    #[test]
    fn failed_reload_releases_the_guard_but_hides_load_more() {
        let mut store = DatasetStore::new();
        let ticket = store.begin_first_page();
        store
            .finish_first_page(ticket, Ok(page_of("a", 12, true)))
            .unwrap();

        let reload = store.begin_first_page();
        assert!(store
            .finish_first_page(reload, Err(ApiError::Network("down".to_string())))
            .is_err());
        assert!(!store.load_more_visible());
        assert_eq!(store.begin_next_page(), None);

        let retry = store.begin_first_page();
        store
            .finish_first_page(retry, Ok(page_of("a", 12, true)))
            .unwrap();
        assert!(store.begin_next_page().is_some());
    }

    #[test]
    fn stale_first_page_is_reported_as_stale() {
        let mut store = DatasetStore::new();
        let old = store.begin_first_page();
        let current = store.begin_first_page();

        assert_eq!(
            store.finish_first_page(old, Ok(page_of("old", 12, true))).unwrap(),
            PageOutcome::Stale
        );
        assert!(store.all().is_empty());
        assert_eq!(
            store
                .finish_first_page(current, Ok(page_of("new", 3, false)))
                .unwrap(),
            PageOutcome::Applied(3)
        );
    }

    #[tokio::test]
    async fn failed_first_page_keeps_state_and_reports_inline() {
        let api = FakeApi::failing();
        let mut store = DatasetStore::new();

        assert!(load_first_page(&mut store, &api).await.is_err());
        assert!(store.all().is_empty());
        assert_eq!(store.current_page(), 1);
        assert_eq!(
            store.status(),
            &GridStatus::Failed(GRID_ERROR_MESSAGE.to_string())
        );
    }

    #[tokio::test]
    async fn failed_next_page_keeps_grid() {
        let api = FakeApi::with_pages(vec![page_of("a", 12, true)]);
        let mut store = DatasetStore::new();

        load_first_page(&mut store, &api).await.unwrap();
        assert!(load_next_page(&mut store, &api).await.is_err());

        assert_eq!(store.all().len(), 12);
        assert_eq!(store.current_page(), 1);
        assert_eq!(store.status(), &GridStatus::Ready);
        assert_eq!(store.last_error(), Some(LOAD_MORE_ERROR_MESSAGE));
        assert!(!store.is_loading_more());
    }

    #[tokio::test]
    async fn appended_pages_respect_active_search() {
        let api = FakeApi::with_pages(vec![page_of("Kepler", 12, true), page_of("HD", 5, false)]);
        let mut store = DatasetStore::new();

        load_first_page(&mut store, &api).await.unwrap();
        store.set_search("kepler");
        load_next_page(&mut store, &api).await.unwrap();

        assert_eq!(store.all().len(), 17);
        assert_eq!(store.filtered_len(), 12);
    }

    #[test]
    fn changing_one_criterion_keeps_the_others() {
        let mut store = DatasetStore::new();
        let ticket = store.begin_first_page();
        let mut page = page_of("Kepler", 2, false);
        page.exoplanets[0].pl_rade = Some(1.0);
        page.exoplanets[1].pl_rade = Some(9.0);
        store.finish_first_page(ticket, Ok(page)).unwrap();

        store.set_habitability(Some(Habitability::Habitable));
        store.set_search("kepler");

        assert_eq!(store.filtered_len(), 1);
        assert_eq!(store.criteria().habitability, Some(Habitability::Habitable));
    }

    #[test]
    fn reset_restores_full_view_and_clears_criteria() {
        let mut store = DatasetStore::new();
        let ticket = store.begin_first_page();
        store
            .finish_first_page(ticket, Ok(page_of("a", 4, false)))
            .unwrap();

        store.set_search("zzz");
        store.set_method(Some("Transit".to_string()));
        store.set_habitability(Some(Habitability::Cold));
        assert_eq!(store.filtered_len(), 0);

        store.reset_filters();

        assert_eq!(store.filtered_vec(), store.all());
        assert!(store.criteria().is_empty());
        assert_eq!(store.criteria().method, None);
    }
}
