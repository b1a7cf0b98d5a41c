use crate::app::actions::{ApiEvent, Request};
use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use chrono::{DateTime, Local};
use stellar_scout_core::charts::{chart_view, ChartKind, ChartView};
use stellar_scout_core::filter::method_options;
use stellar_scout_core::prediction::{PredictionForm, PredictionState};
use stellar_scout_core::store::{GridStatus, PageOutcome};
use stellar_scout_core::view::StatsView;
use stellar_scout_core::{ChartData, DatasetStore, Exoplanet, Habitability, Health};
use throbber_widgets_tui::ThrobberState;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Explore,
    Details,
    Predict,
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub show_help: bool,
    pub store: DatasetStore,
    /// `None` until the stats request settles.
    pub stats: Option<StatsView>,
    pub charts: Option<ChartData>,
    pub charts_failed: bool,
    pub health: Option<Health>,
    pub selected_index: usize,
    pub search_active: bool,
    pub search_query: String,
    pub method_options: Vec<String>,
    pub chart_tab_index: usize,
    pub prediction_form: PredictionForm,
    pub prediction: PredictionState,
    pub status_message: String,
    pub throbber_state: ThrobberState,
    pub last_updated: Option<DateTime<Local>>,
    requests: Vec<Request>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            screen: AppScreen::Explore,
            show_help: false,
            store: DatasetStore::new(),
            stats: None,
            charts: None,
            charts_failed: false,
            health: None,
            selected_index: 0,
            search_active: false,
            search_query: String::new(),
            method_options: Vec::new(),
            chart_tab_index: 0,
            prediction_form: PredictionForm::new(),
            prediction: PredictionState::Idle,
            status_message: String::new(),
            throbber_state: ThrobberState::default(),
            last_updated: None,
            requests: Vec::new(),
        }
    }

    /// Advances the spinner while anything is outstanding.
    pub fn update(&mut self) {
        if self.is_busy() {
            self.throbber_state.calc_next();
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.store.status(), GridStatus::Loading)
            || self.store.is_loading_more()
            || self.prediction.is_loading()
            || self.stats.is_none()
    }

    /// Drains the requests queued by input handling since the last call.
    pub fn take_requests(&mut self) -> Vec<Request> {
        std::mem::take(&mut self.requests)
    }

    /// Stats, charts, health and page 1 are independent and issued together.
    pub fn request_initial_load(&mut self) {
        let ticket = self.store.begin_first_page();
        self.requests.extend([
            Request::Stats,
            Request::Charts,
            Request::Health,
            Request::FirstPage(ticket),
        ]);
    }

    pub fn reload(&mut self) {
        self.charts_failed = false;
        self.status_message = "Refreshing...".to_string();
        self.request_initial_load();
    }

    pub fn load_more(&mut self) {
        match self.store.begin_next_page() {
            Some(ticket) => {
                self.status_message = format!("Loading page {}...", ticket.page);
                self.requests.push(Request::NextPage(ticket));
            }
            None => debug!("load more not issued"),
        }
    }

    pub fn submit_prediction(&mut self) {
        if self.prediction.is_loading() {
            return;
        }
        self.prediction = PredictionState::Loading;
        self.requests
            .push(Request::Predict(self.prediction_form.to_input()));
    }

    pub fn apply(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::Stats(result) => {
                self.stats = Some(StatsView::from_result(&result));
            }
            ApiEvent::FirstPage(ticket, result) => {
                match self.store.finish_first_page(ticket, result) {
                    Ok(PageOutcome::Applied(count)) => {
                        self.after_dataset_change();
                        self.status_message = format!("Loaded {count} exoplanets");
                    }
                    Ok(PageOutcome::Stale) => {}
                    Err(_) => {
                        if let GridStatus::Failed(message) = self.store.status() {
                            self.status_message = format!("Error: {message}");
                        }
                    }
                }
            }
            ApiEvent::NextPage(ticket, result) => {
                match self.store.finish_next_page(ticket, result) {
                    Ok(PageOutcome::Stale) => {}
                    Ok(PageOutcome::Applied(appended)) => {
                        self.after_dataset_change();
                        self.status_message = format!(
                            "Loaded {appended} more exoplanets (page {})",
                            self.store.current_page()
                        );
                    }
                    Err(_) => {
                        let message = self.store.last_error().unwrap_or_default();
                        self.status_message = format!("Error: {message}");
                    }
                }
            }
            ApiEvent::Charts(result) => match result {
                Ok(data) => {
                    self.charts = Some(data);
                    self.charts_failed = false;
                }
                Err(error) => {
                    warn!(%error, "chart data unavailable");
                    self.charts_failed = true;
                }
            },
            ApiEvent::Health(result) => {
                self.health = result
                    .map_err(|error| debug!(%error, "health check failed"))
                    .ok();
            }
            ApiEvent::Prediction(result) => {
                self.prediction = PredictionState::from_result(result);
            }
        }
    }

    fn after_dataset_change(&mut self) {
        self.method_options = method_options(self.store.all());
        self.last_updated = Some(Local::now());
        self.clamp_selection();
    }

    pub fn selected_planet(&self) -> Option<&Exoplanet> {
        self.store.filtered_get(self.selected_index)
    }

    pub fn visible_count(&self) -> usize {
        self.store.filtered_len()
    }

    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected_index + 1 < self.visible_count() {
            self.selected_index += 1;
        }
    }

    pub fn select_by(&mut self, delta: isize) {
        let last = self.visible_count().saturating_sub(1);
        self.selected_index = self.selected_index.saturating_add_signed(delta).min(last);
    }

    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    pub fn select_last(&mut self) {
        self.selected_index = self.visible_count().saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let last = self.visible_count().saturating_sub(1);
        self.selected_index = self.selected_index.min(last);
    }

    pub fn start_search(&mut self) {
        self.search_active = true;
    }

    /// Every keystroke re-filters.
    pub fn push_search_char(&mut self, ch: char) {
        self.search_query.push(ch);
        self.apply_search();
    }

    pub fn pop_search_char(&mut self) {
        self.search_query.pop();
        self.apply_search();
    }

    pub fn finish_search(&mut self) {
        self.search_active = false;
    }

    pub fn clear_search(&mut self) {
        self.search_query.clear();
        self.search_active = false;
        self.apply_search();
    }

    fn apply_search(&mut self) {
        self.store.set_search(&self.search_query);
        self.selected_index = 0;
    }

    pub fn selected_method(&self) -> Option<&str> {
        self.store.criteria().method.as_deref()
    }

    /// Cycles all methods, then back to none.
    pub fn cycle_method(&mut self, forward: bool) {
        let slots = self.method_options.len() + 1;
        let current = self
            .selected_method()
            .and_then(|method| self.method_options.iter().position(|option| option == method))
            .map_or(0, |position| position + 1);
        let next = if forward {
            wrap_increment(current, slots)
        } else {
            wrap_decrement(current, slots)
        };

        let method = next
            .checked_sub(1)
            .and_then(|position| self.method_options.get(position))
            .cloned();
        self.store.set_method(method);
        self.selected_index = 0;
    }

    pub const fn selected_habitability(&self) -> Option<Habitability> {
        self.store.criteria().habitability
    }

    pub fn cycle_habitability(&mut self, forward: bool) {
        let slots = Habitability::ALL.len() + 1;
        let current = self
            .selected_habitability()
            .and_then(|selected| Habitability::ALL.iter().position(|h| *h == selected))
            .map_or(0, |position| position + 1);
        let next = if forward {
            wrap_increment(current, slots)
        } else {
            wrap_decrement(current, slots)
        };

        let habitability = next.checked_sub(1).and_then(Habitability::from_index);
        self.store.set_habitability(habitability);
        self.selected_index = 0;
    }

    pub fn reset_filters(&mut self) {
        self.search_query.clear();
        self.search_active = false;
        self.store.reset_filters();
        self.selected_index = 0;
        self.status_message = "Filters cleared".to_string();
    }

    pub fn chart_kind(&self) -> ChartKind {
        ChartKind::from_index(self.chart_tab_index).unwrap_or(ChartKind::Timeline)
    }

    pub fn next_chart_tab(&mut self) {
        self.chart_tab_index = wrap_increment(self.chart_tab_index, ChartKind::ALL.len());
    }

    pub fn previous_chart_tab(&mut self) {
        self.chart_tab_index = wrap_decrement(self.chart_tab_index, ChartKind::ALL.len());
    }

    pub fn current_chart(&self) -> Option<ChartView> {
        self.charts
            .as_ref()
            .map(|data| chart_view(data, self.chart_kind()))
    }
}
