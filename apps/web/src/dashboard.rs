use ratzilla::event::KeyCode;
use stellar_scout_core::charts::{chart_view, ChartKind, ChartView};
use stellar_scout_core::filter::method_options;
use stellar_scout_core::prediction::{PredictionForm, PredictionState};
use stellar_scout_core::store::{PageOutcome, PageTicket};
use stellar_scout_core::view::StatsView;
use stellar_scout_core::{
    ApiError, ChartData, DatasetStore, Exoplanet, ExoplanetPage, Habitability, PredictionInput,
    PredictionResult,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Explore,
    Details,
    Predict,
}

/// Network work a key press asks for. `main` spawns it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    NextPage(PageTicket),
    Predict(PredictionInput),
}

#[derive(Debug)]
pub struct Dashboard {
    pub view: View,
    pub store: DatasetStore,
    pub stats: Option<StatsView>,
    pub charts: Option<ChartData>,
    pub charts_failed: bool,
    pub selected: usize,
    pub search_active: bool,
    pub search: String,
    pub methods: Vec<String>,
    pub chart_tab: usize,
    pub form: PredictionForm,
    pub prediction: PredictionState,
    pub status: String,
    pub updated: Option<String>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    pub const fn new() -> Self {
        Self {
            view: View::Explore,
            store: DatasetStore::new(),
            stats: None,
            charts: None,
            charts_failed: false,
            selected: 0,
            search_active: false,
            search: String::new(),
            methods: Vec::new(),
            chart_tab: 0,
            form: PredictionForm::new(),
            prediction: PredictionState::Idle,
            status: String::new(),
            updated: None,
        }
    }

    pub fn selected_planet(&self) -> Option<&Exoplanet> {
        self.store.filtered_get(self.selected)
    }

    pub fn chart_kind(&self) -> ChartKind {
        ChartKind::from_index(self.chart_tab).unwrap_or(ChartKind::Timeline)
    }

    pub fn current_chart(&self) -> Option<ChartView> {
        self.charts
            .as_ref()
            .map(|data| chart_view(data, self.chart_kind()))
    }

    /// Returns whether the response was applied; stale responses are not.
    pub fn finish_first_page(
        &mut self,
        ticket: PageTicket,
        result: Result<ExoplanetPage, ApiError>,
    ) -> bool {
        match self.store.finish_first_page(ticket, result) {
            Ok(PageOutcome::Applied(count)) => {
                self.after_dataset_change();
                self.status = format!("Loaded {count} exoplanets");
                true
            }
            Ok(PageOutcome::Stale) => false,
            Err(error) => {
                self.status = format!("Error: {error}");
                false
            }
        }
    }

    pub fn finish_next_page(
        &mut self,
        ticket: PageTicket,
        result: Result<ExoplanetPage, ApiError>,
    ) -> bool {
        match self.store.finish_next_page(ticket, result) {
            Ok(PageOutcome::Applied(appended)) => {
                self.after_dataset_change();
                self.status = format!("Loaded {appended} more exoplanets");
                true
            }
            Ok(PageOutcome::Stale) => false,
            Err(_) => {
                self.status = format!("Error: {}", self.store.last_error().unwrap_or_default());
                false
            }
        }
    }

    pub fn finish_prediction(&mut self, result: Result<PredictionResult, ApiError>) {
        self.prediction = PredictionState::from_result(result);
    }

    fn after_dataset_change(&mut self) {
        self.methods = method_options(self.store.all());
        self.selected = self.selected.min(self.store.filtered_len().saturating_sub(1));
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Option<Command> {
        match self.view {
            View::Explore if self.search_active => {
                self.handle_search_key(code);
                None
            }
            View::Explore => self.handle_explore_key(code),
            View::Details => {
                match code {
                    KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace => self.view = View::Explore,
                    KeyCode::Up => self.selected = self.selected.saturating_sub(1),
                    KeyCode::Down => self.select_next(),
                    _ => {}
                }
                None
            }
            View::Predict => self.handle_predict_key(code),
        }
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.search.clear();
                self.search_active = false;
            }
            KeyCode::Enter => self.search_active = false,
            KeyCode::Backspace => {
                self.search.pop();
            }
            KeyCode::Char(ch) => self.search.push(ch),
            _ => return,
        }
        self.store.set_search(&self.search);
        self.selected = 0;
    }

    fn handle_explore_key(&mut self, code: KeyCode) -> Option<Command> {
        match code {
            KeyCode::Char('/') => self.search_active = true,
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.select_next(),
            KeyCode::Enter => {
                if self.selected_planet().is_some() {
                    self.view = View::Details;
                }
            }
            KeyCode::Char('m') => self.cycle_method(),
            KeyCode::Char('h') => self.cycle_habitability(),
            KeyCode::Char('r') => {
                self.search.clear();
                self.store.reset_filters();
                self.selected = 0;
            }
            KeyCode::Char('n') => {
                let ticket = self.store.begin_next_page()?;
                self.status = format!("Loading page {}...", ticket.page);
                return Some(Command::NextPage(ticket));
            }
            KeyCode::Char('p') => self.view = View::Predict,
            KeyCode::Left => {
                self.chart_tab = (self.chart_tab + ChartKind::ALL.len() - 1) % ChartKind::ALL.len();
            }
            KeyCode::Right | KeyCode::Tab => {
                self.chart_tab = (self.chart_tab + 1) % ChartKind::ALL.len();
            }
            _ => {}
        }
        None
    }

    fn handle_predict_key(&mut self, code: KeyCode) -> Option<Command> {
        match code {
            KeyCode::Esc => self.view = View::Explore,
            KeyCode::Tab | KeyCode::Down => self.form.field = self.form.field.next(),
            KeyCode::Up => self.form.field = self.form.field.prev(),
            KeyCode::Backspace => self.form.pop_char(),
            KeyCode::Delete => self.form.clear(),
            KeyCode::Char(ch) => self.form.push_char(ch),
            KeyCode::Enter => {
                if self.prediction.is_loading() {
                    return None;
                }
                self.prediction = PredictionState::Loading;
                return Some(Command::Predict(self.form.to_input()));
            }
            _ => {}
        }
        None
    }

    fn select_next(&mut self) {
        if self.selected + 1 < self.store.filtered_len() {
            self.selected += 1;
        }
    }

    fn cycle_method(&mut self) {
        let current = self
            .store
            .criteria()
            .method
            .as_deref()
            .and_then(|method| self.methods.iter().position(|option| option == method));
        let next = match current {
            None => self.methods.first(),
            Some(position) => self.methods.get(position + 1),
        }
        .cloned();
        self.store.set_method(next);
        self.selected = 0;
    }

    fn cycle_habitability(&mut self) {
        let next = match self.store.criteria().habitability {
            None => Some(Habitability::Habitable),
            Some(Habitability::Habitable) => Some(Habitability::Hot),
            Some(Habitability::Hot) => Some(Habitability::Cold),
            Some(Habitability::Cold) => None,
        };
        self.store.set_habitability(next);
        self.selected = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> Dashboard {
        let mut dashboard = Dashboard::new();
        let ticket = dashboard.store.begin_first_page();
        let planets = vec![
            Exoplanet {
                discoverymethod: Some("Transit".to_string()),
                ..Exoplanet::named("WASP-12 b")
            },
            Exoplanet {
                discoverymethod: Some("Imaging".to_string()),
                ..Exoplanet::named("HR 8799 b")
            },
        ];
        dashboard.finish_first_page(ticket, Ok(ExoplanetPage::new(planets, true)));
        dashboard
    }

    #[test]
    fn stale_page_is_not_reported() {
        let mut dashboard = loaded();
        let Some(Command::NextPage(stale)) = dashboard.handle_key(KeyCode::Char('n')) else {
            panic!("expected a load-more command");
        };
        let reload = dashboard.store.begin_first_page();
        assert!(dashboard.finish_first_page(reload, Ok(ExoplanetPage::new(Vec::new(), false))));
        let status = dashboard.status.clone();

        let page = ExoplanetPage::new(vec![Exoplanet::named("Late b")], false);
        assert!(!dashboard.finish_next_page(stale, Ok(page)));
        assert_eq!(dashboard.status, status);
        assert!(dashboard.store.all().is_empty());
    }

    #[test]
    fn search_typing_filters() {
        let mut dashboard = loaded();
        dashboard.handle_key(KeyCode::Char('/'));
        for ch in "wasp".chars() {
            dashboard.handle_key(KeyCode::Char(ch));
        }
        assert_eq!(dashboard.store.filtered_len(), 1);
        dashboard.handle_key(KeyCode::Esc);
        assert_eq!(dashboard.store.filtered_len(), 2);
    }

    #[test]
    fn load_more_issues_one_command() {
        let mut dashboard = loaded();
        let first = dashboard.handle_key(KeyCode::Char('n'));
        let second = dashboard.handle_key(KeyCode::Char('n'));
        assert!(matches!(first, Some(Command::NextPage(ticket)) if ticket.page == 2));
        assert_eq!(second, None);
    }

    #[test]
    fn method_cycle_returns_to_all() {
        let mut dashboard = loaded();
        dashboard.handle_key(KeyCode::Char('m'));
        assert_eq!(dashboard.store.criteria().method.as_deref(), Some("Transit"));
        dashboard.handle_key(KeyCode::Char('m'));
        dashboard.handle_key(KeyCode::Char('m'));
        assert_eq!(dashboard.store.criteria().method, None);
    }

    #[test]
    fn predict_enter_is_guarded() {
        let mut dashboard = loaded();
        dashboard.handle_key(KeyCode::Char('p'));
        assert!(matches!(
            dashboard.handle_key(KeyCode::Enter),
            Some(Command::Predict(_))
        ));
        assert_eq!(dashboard.handle_key(KeyCode::Enter), None);
    }
}
