use crate::api::directory::DirectoryClient;
use crate::api::directory::types::UserInfo;
use crate::api::pulse::PulseClient;
use crate::api::pulse::alerts::AlertsApi;
use crate::api::pulse::demo::DemoApi;
use crate::api::pulse::hosts::{HostQuery, HostsApi};
use crate::api::pulse::metrics::MetricsApi;
use crate::api::pulse::types::{AlertReport, HealthReport, MetricDetail, MetricRow, MetricsResponse};
use crate::common::debounce::Debouncer;
use crate::common::rows::{RowSpec, SortSpec, filter_rows, sort_rows};
use crate::config::DbProbeConfig;
use crate::event::{Event, EventHandler};
use crate::pages::alerts::{AlertCountIndex, alert_counts, alert_rows};
use crate::pages::data::{data_rows, data_summary};
use crate::pages::hosts::host_rows;
use crate::pages::metrics::metric_rows;
use crate::tui::Tui;
use crate::ui;
use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::widgets::TableState;
use std::collections::HashSet;
use std::future::Future;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::UnboundedSender;

const FLASH_TTL: Duration = Duration::from_secs(4);
const FILTER_DELAY: Duration = Duration::from_millis(500);
const HOURS_CHOICES: [u32; 5] = [4, 8, 24, 48, 72];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Alerts,
    Metrics,
    Hosts,
    Data,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Alerts, Tab::Metrics, Tab::Hosts, Tab::Data];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Alerts => "Alerts",
            Tab::Metrics => "Metrics",
            Tab::Hosts => "Hosts",
            Tab::Data => "Data",
        }
    }

    fn column_count(&self) -> usize {
        match self {
            Tab::Alerts => 5,
            Tab::Metrics => 7,
            Tab::Hosts => 3,
            Tab::Data => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

/// Dismissible message popup, the single surface every request outcome that
/// needs attention is funneled through.
#[derive(Clone, Debug)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn warning(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            body: body.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Filter,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPurpose {
    HostQuery,
    DbProbe,
    UserLookup,
}

#[derive(Clone, Debug)]
pub struct FormField {
    pub label: &'static str,
    pub buffer: String,
    pub masked: bool,
}

impl FormField {
    fn new(label: &'static str, buffer: impl Into<String>) -> Self {
        Self {
            label,
            buffer: buffer.into(),
            masked: false,
        }
    }

    fn masked(label: &'static str, buffer: impl Into<String>) -> Self {
        Self {
            masked: true,
            ..Self::new(label, buffer)
        }
    }
}

#[derive(Clone, Debug)]
pub struct FormState {
    pub title: &'static str,
    pub purpose: FormPurpose,
    pub fields: Vec<FormField>,
    pub selected: usize,
}

#[derive(Debug)]
pub struct App {
    pub should_quit: bool,
    pub client: Option<PulseClient>,
    pub directory: Option<DirectoryClient>,
    pub db_probe: DbProbeConfig,
    pub test_count: Option<u32>,

    pub tab: Tab,
    pub is_loading: bool,
    pub notice: Option<Notice>,
    pub flash: Option<(String, Instant)>,
    pub refreshed_at: Option<DateTime<Local>>,

    // Alerts view
    pub hours: u32,
    pub alert_rows: Vec<RowSpec>,
    pub alert_counts: AlertCountIndex,
    pub alert_sort: SortSpec,
    pub alerts_table_state: TableState,

    // Metrics view
    pub metrics: Vec<MetricRow>,
    pub all_metric_rows: Vec<RowSpec>,
    pub visible_metric_rows: Vec<RowSpec>,
    pub health: Option<HealthReport>,
    pub metric_sort: SortSpec,
    pub metrics_table_state: TableState,
    pub metric_filter: String,
    pub applied_filter: String,
    pub filter_debounce: Debouncer,
    pub metric_detail: Option<MetricDetail>,
    pub disabled_meters: HashSet<String>,

    // Hosts view
    pub host_query: HostQuery,
    pub hung_nodes: Vec<String>,
    pub host_rows: Vec<RowSpec>,
    pub host_sort: SortSpec,
    pub hosts_table_state: TableState,

    // Data view
    pub data_rows: Vec<RowSpec>,
    pub data_table_state: TableState,

    pub user_info: Option<UserInfo>,
    pub input: InputMode,
    pub form: Option<FormState>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            should_quit: false,
            client: None,
            directory: None,
            db_probe: DbProbeConfig::default(),
            test_count: None,

            tab: Tab::Alerts,
            is_loading: false,
            notice: None,
            flash: None,
            refreshed_at: None,

            hours: HOURS_CHOICES[0],
            alert_rows: Vec::new(),
            alert_counts: AlertCountIndex::new(),
            alert_sort: SortSpec::descending(0),
            alerts_table_state: TableState::default(),

            metrics: Vec::new(),
            all_metric_rows: Vec::new(),
            visible_metric_rows: Vec::new(),
            health: None,
            metric_sort: SortSpec::descending(1),
            metrics_table_state: TableState::default(),
            metric_filter: String::new(),
            applied_filter: String::new(),
            filter_debounce: Debouncer::new(FILTER_DELAY),
            metric_detail: None,
            disabled_meters: HashSet::new(),

            host_query: HostQuery::default(),
            hung_nodes: Vec::new(),
            host_rows: Vec::new(),
            host_sort: SortSpec::descending(1),
            hosts_table_state: TableState::default(),

            data_rows: Vec::new(),
            data_table_state: TableState::default(),

            user_info: None,
            input: InputMode::Normal,
            form: None,
        }
    }
}

impl App {
    pub fn new(
        client: Option<PulseClient>,
        directory: Option<DirectoryClient>,
        db_probe: DbProbeConfig,
        test_count: Option<u32>,
    ) -> Self {
        Self {
            client,
            directory,
            db_probe,
            test_count,
            ..Self::default()
        }
    }

    pub async fn run(&mut self, tui: &mut Tui, events: &mut EventHandler) -> Result<()> {
        if self.client.is_some() {
            self.fetch_alerts(events.sender());
        } else {
            self.notice = Some(Notice::error(
                "Configuration",
                "API client not initialized. Check .env settings.",
            ));
        }

        while !self.should_quit {
            tui.draw(|f| {
                ui::render(self, f);
            })?;

            match events.next().await? {
                Event::Tick => self.on_tick(),
                Event::Key(key) => self.handle_key_event(key, events.sender()),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                Event::AlertsFetched(result) => {
                    self.is_loading = false;
                    match result {
                        Ok(report) => {
                            self.apply_alert_report(report);
                            // alert refresh always rolls into a metrics refresh
                            // so the status markers track the new counts
                            self.fetch_metrics(events.sender(), None);
                        }
                        Err(e) => self.report_error("getting alerts", &e),
                    }
                }
                Event::MetricsFetched(result) => {
                    self.is_loading = false;
                    match result {
                        Ok(response) => self.apply_metrics(response),
                        Err(e) => self.report_error("getting metrics", &e),
                    }
                }
                Event::MetricDetailFetched(result) => {
                    self.is_loading = false;
                    match result {
                        Ok(detail) => self.metric_detail = Some(detail),
                        Err(e) => self.report_error("getting metric details", &e),
                    }
                }
                Event::MeterToggled(result) => {
                    self.is_loading = false;
                    match result {
                        Ok(outcome) => {
                            let body = serde_json::to_string_pretty(&outcome)
                                .unwrap_or_else(|_| outcome.to_string());
                            self.notice = Some(Notice::info("Meter Toggled", body));
                        }
                        Err(e) => self.report_error("toggling alerts", &e),
                    }
                }
                Event::MetricsCleared(result) => {
                    self.is_loading = false;
                    match result {
                        Ok(cleared) => {
                            self.notice = Some(Notice::info(
                                "Metrics Cleared",
                                format!(
                                    "Cleared: {} Stopwatches and {} Counters",
                                    cleared.num_stops, cleared.num_counters
                                ),
                            ));
                            self.fetch_metrics(events.sender(), None);
                        }
                        Err(e) => self.report_error("clearing metrics", &e),
                    }
                }
                Event::HungReportFetched(result) => {
                    self.is_loading = false;
                    match result {
                        Ok(report) => {
                            self.hung_nodes = report.hung_nodes;
                            self.host_rows = host_rows(&report.hung_reports);
                            sort_rows(&mut self.host_rows, self.host_sort);
                            self.hosts_table_state.select(Some(0));
                            self.refreshed_at = Some(Local::now());
                        }
                        Err(e) => self.report_error("getting hung report", &e),
                    }
                }
                Event::TestDataFetched(result) => {
                    self.is_loading = false;
                    match result {
                        Ok(response) => {
                            self.show_flash(format!("Number of items in DB: {}", response.count));
                            self.notice =
                                Some(Notice::info("Sample Data", data_summary(&response)));
                            self.data_rows = data_rows(&response);
                            self.data_table_state.select(Some(0));
                            self.refreshed_at = Some(Local::now());
                        }
                        Err(e) => self.report_error("getting items in db", &e),
                    }
                }
                Event::DbConnectionTested(result) => {
                    self.is_loading = false;
                    match result {
                        Ok(body) => self.notice = Some(Notice::warning("Db Connection", body)),
                        Err(e) => self.report_error("testing db connection", &e),
                    }
                }
                Event::CurrentTimeFetched(result) => {
                    self.is_loading = false;
                    match result {
                        Ok(body) => self.notice = Some(Notice::warning("Current Time", body)),
                        Err(e) => self.report_error("getting current time", &e),
                    }
                }
                Event::UserInfoFetched(result) => {
                    self.is_loading = false;
                    match result {
                        Ok(user) => self.user_info = Some(user),
                        Err(e) => self.report_error("getting user info", &e),
                    }
                }
            }
        }
        Ok(())
    }

    /// Formats a connection failure into the shared notice surface and puts
    /// the UI back into its interactive state. Every failed request funnels
    /// through here; there is no retry and no distinction between transport,
    /// status and decode failures.
    pub fn report_error(&mut self, operation: &str, detail: &str) {
        self.is_loading = false;
        self.notice = Some(Notice::error(
            "Connection Failure",
            format!("Failed command: {}\n\nServer message: {}", operation, detail),
        ));
    }

    pub fn show_flash(&mut self, message: impl Into<String>) {
        self.flash = Some((message.into(), Instant::now() + FLASH_TTL));
    }

    fn on_tick(&mut self) {
        let now = Instant::now();
        if let Some((_, until)) = &self.flash
            && now >= *until
        {
            self.flash = None;
        }
        if self.filter_debounce.ready(now) {
            self.applied_filter = self.metric_filter.clone();
            self.refresh_visible_metric_rows();
        }
    }

    // ---- refresh cycle -------------------------------------------------

    /// The refresh primitive: mark the view busy, run the request off-loop,
    /// deliver the outcome back as a completion event. Responses are never
    /// applied from the spawned task; only the event loop touches state.
    /// Overlapping refreshes are not sequenced, so the last completion wins.
    fn dispatch<T, Fut>(
        &mut self,
        tx: UnboundedSender<Event>,
        request: Fut,
        into_event: fn(Result<T, String>) -> Event,
    ) where
        T: Send + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        self.is_loading = true;
        tokio::spawn(async move {
            let result = request.await.map_err(|e| e.to_string());
            let _ = tx.send(into_event(result));
        });
    }

    pub fn fetch_alerts(&mut self, tx: UnboundedSender<Event>) {
        let Some(client) = self.client.clone() else {
            return;
        };
        let hours = self.hours;
        let test_count = self.test_count;
        self.dispatch(
            tx,
            async move { client.get_alert_report(hours, test_count).await },
            Event::AlertsFetched,
        );
    }

    pub fn fetch_metrics(&mut self, tx: UnboundedSender<Event>, sample_name: Option<String>) {
        let Some(client) = self.client.clone() else {
            return;
        };
        self.dispatch(
            tx,
            async move { client.get_metrics(sample_name.as_deref()).await },
            Event::MetricsFetched,
        );
    }

    fn fetch_metric_detail(&mut self, tx: UnboundedSender<Event>, name: String) {
        let Some(client) = self.client.clone() else {
            return;
        };
        self.dispatch(
            tx,
            async move { client.get_metric(&name).await },
            Event::MetricDetailFetched,
        );
    }

    fn toggle_selected_meter(&mut self, tx: UnboundedSender<Event>) {
        let Some(name) = self.selected_metric_name() else {
            return;
        };
        // flip the locally tracked state; the server response is shown as-is
        let enabled = self.disabled_meters.contains(&name);
        if enabled {
            self.disabled_meters.remove(&name);
        } else {
            self.disabled_meters.insert(name.clone());
        }
        let Some(client) = self.client.clone() else {
            return;
        };
        self.dispatch(
            tx,
            async move { client.toggle_meter(&name, enabled).await },
            Event::MeterToggled,
        );
    }

    fn clear_metrics(&mut self, tx: UnboundedSender<Event>) {
        let Some(client) = self.client.clone() else {
            return;
        };
        self.dispatch(
            tx,
            async move { client.clear_metrics().await },
            Event::MetricsCleared,
        );
    }

    pub fn fetch_hung_report(&mut self, tx: UnboundedSender<Event>) {
        let Some(client) = self.client.clone() else {
            return;
        };
        let query = self.host_query.clone();
        self.dispatch(
            tx,
            async move { client.get_hung_report(&query).await },
            Event::HungReportFetched,
        );
    }

    pub fn fetch_test_data(&mut self, tx: UnboundedSender<Event>) {
        let Some(client) = self.client.clone() else {
            return;
        };
        self.dispatch(
            tx,
            async move { client.get_test_data().await },
            Event::TestDataFetched,
        );
    }

    fn test_db_connection(&mut self, tx: UnboundedSender<Event>) {
        let Some(client) = self.client.clone() else {
            return;
        };
        let probe = self.db_probe.clone();
        self.show_flash("Testing db connection");
        self.dispatch(
            tx,
            async move { client.test_db_connection(&probe).await },
            Event::DbConnectionTested,
        );
    }

    fn fetch_current_time(&mut self, tx: UnboundedSender<Event>) {
        let Some(client) = self.client.clone() else {
            return;
        };
        self.dispatch(
            tx,
            async move { client.get_current_time().await },
            Event::CurrentTimeFetched,
        );
    }

    fn fetch_user_info(&mut self, tx: UnboundedSender<Event>, userid: String) {
        let Some(directory) = self.directory.clone() else {
            return;
        };
        self.dispatch(
            tx,
            async move { directory.get_user_info(&userid).await },
            Event::UserInfoFetched,
        );
    }

    // ---- response application ------------------------------------------

    fn apply_alert_report(&mut self, report: AlertReport) {
        // known ids are the metric names plus everything counted before, so
        // identifiers that stop alerting drop back to an explicit zero
        let known: Vec<String> = self
            .metrics
            .iter()
            .map(|m| m.name.clone())
            .chain(self.alert_counts.keys().cloned())
            .collect();
        self.alert_counts = alert_counts(known.iter().map(String::as_str), &report.triggered);

        if let Some(count) = report.test_count {
            self.show_flash(format!("Test mode: {} generated alerts", count));
        }

        self.alert_rows = alert_rows(&report.triggered);
        sort_rows(&mut self.alert_rows, self.alert_sort);
        self.alerts_table_state.select(Some(0));
        self.refreshed_at = Some(Local::now());
    }

    fn apply_metrics(&mut self, response: MetricsResponse) {
        self.health = Some(response.health_report);
        self.metrics = response.rows;
        self.rebuild_metric_rows();
        self.refreshed_at = Some(Local::now());
    }

    fn rebuild_metric_rows(&mut self) {
        self.all_metric_rows = metric_rows(&self.metrics, &self.alert_counts);
        sort_rows(&mut self.all_metric_rows, self.metric_sort);
        self.refresh_visible_metric_rows();
    }

    fn refresh_visible_metric_rows(&mut self) {
        self.visible_metric_rows = filter_rows(&self.all_metric_rows, &self.applied_filter);
        if self.visible_metric_rows.is_empty() {
            self.metrics_table_state.select(None);
        } else {
            self.metrics_table_state.select(Some(0));
        }
    }

    fn selected_metric_name(&self) -> Option<String> {
        let idx = self.metrics_table_state.selected()?;
        let row = self.visible_metric_rows.get(idx)?;
        if row.placeholder {
            return None;
        }
        row.cells.first().map(|cell| cell.text.clone())
    }

    // ---- input ----------------------------------------------------------

    fn handle_key_event(&mut self, key: KeyEvent, tx: UnboundedSender<Event>) {
        // modal surfaces swallow input until dismissed
        if self.notice.is_some() {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')
            ) {
                self.notice = None;
            }
            return;
        }
        if self.metric_detail.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                self.metric_detail = None;
            }
            return;
        }
        if self.user_info.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                self.user_info = None;
            }
            return;
        }
        if self.form.is_some() {
            self.handle_form_key(key, tx);
            return;
        }
        if self.input == InputMode::Filter {
            self.handle_filter_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('1') => self.switch_tab(Tab::Alerts, tx),
            KeyCode::Char('2') => self.switch_tab(Tab::Metrics, tx),
            KeyCode::Char('3') => self.switch_tab(Tab::Hosts, tx),
            KeyCode::Char('4') => self.switch_tab(Tab::Data, tx),
            KeyCode::Tab => self.next_tab(tx),
            KeyCode::Char('r') => self.refresh_current(tx),
            KeyCode::Char('j') | KeyCode::Down => self.next_row(),
            KeyCode::Char('k') | KeyCode::Up => self.previous_row(),
            KeyCode::Char('s') => self.cycle_sort_column(),
            KeyCode::Char('S') => self.toggle_sort_direction(),
            KeyCode::Char('u') => self.open_user_lookup(),
            _ => self.handle_tab_key(key, tx),
        }
    }

    fn handle_tab_key(&mut self, key: KeyEvent, tx: UnboundedSender<Event>) {
        match (self.tab, key.code) {
            (Tab::Alerts, KeyCode::Char('h')) => {
                self.cycle_hours();
                self.fetch_alerts(tx);
            }
            (Tab::Metrics, KeyCode::Char('/')) => self.input = InputMode::Filter,
            (Tab::Metrics, KeyCode::Char('c')) => self.clear_metrics(tx),
            (Tab::Metrics, KeyCode::Char('R')) => {
                self.fetch_metrics(tx, Some("restart".to_string()))
            }
            (Tab::Metrics, KeyCode::Char('t')) => self.toggle_selected_meter(tx),
            (Tab::Metrics, KeyCode::Enter) => {
                if let Some(name) = self.selected_metric_name() {
                    self.fetch_metric_detail(tx, name);
                }
            }
            (Tab::Hosts, KeyCode::Char('e')) => self.open_host_query_form(),
            (Tab::Data, KeyCode::Char('g')) => self.fetch_test_data(tx),
            (Tab::Data, KeyCode::Char('d')) => self.open_db_probe_form(),
            (Tab::Data, KeyCode::Char('T')) => self.fetch_current_time(tx),
            _ => {}
        }
    }

    fn handle_filter_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.input = InputMode::Normal,
            KeyCode::Backspace => {
                self.metric_filter.pop();
                self.filter_debounce.poke(Instant::now());
            }
            KeyCode::Char(c) => {
                self.metric_filter.push(c);
                self.filter_debounce.poke(Instant::now());
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent, tx: UnboundedSender<Event>) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.form = None,
            KeyCode::Enter => self.submit_form(tx),
            KeyCode::Tab | KeyCode::Down => {
                form.selected = (form.selected + 1) % form.fields.len();
            }
            KeyCode::BackTab | KeyCode::Up => {
                form.selected = if form.selected == 0 {
                    form.fields.len() - 1
                } else {
                    form.selected - 1
                };
            }
            KeyCode::Backspace => {
                form.fields[form.selected].buffer.pop();
            }
            KeyCode::Char(c) => {
                form.fields[form.selected].buffer.push(c);
            }
            _ => {}
        }
    }

    fn submit_form(&mut self, tx: UnboundedSender<Event>) {
        let Some(form) = self.form.take() else {
            return;
        };
        match form.purpose {
            FormPurpose::HostQuery => {
                let mut buffers = form.fields.into_iter().map(|f| f.buffer);
                self.host_query = HostQuery {
                    host_pattern: buffers.next().unwrap_or_default(),
                    host_count: buffers.next().unwrap_or_default(),
                    sample_count: buffers.next().unwrap_or_default(),
                    backlog_queue: buffers.next().unwrap_or_default(),
                    processed_queue: buffers.next().unwrap_or_default(),
                    expression: buffers.next().unwrap_or_default(),
                };
                self.fetch_hung_report(tx);
            }
            FormPurpose::DbProbe => {
                let mut buffers = form.fields.into_iter().map(|f| f.buffer);
                self.db_probe = DbProbeConfig {
                    url: buffers.next().unwrap_or_default(),
                    username: buffers.next().unwrap_or_default(),
                    password: buffers.next().unwrap_or_default(),
                };
                self.test_db_connection(tx);
            }
            FormPurpose::UserLookup => {
                let userid = form
                    .fields
                    .first()
                    .map(|f| f.buffer.trim().to_string())
                    .unwrap_or_default();
                if !userid.is_empty() {
                    self.fetch_user_info(tx, userid);
                }
            }
        }
    }

    fn open_host_query_form(&mut self) {
        self.form = Some(FormState {
            title: "Hung Host Query",
            purpose: FormPurpose::HostQuery,
            fields: vec![
                FormField::new("Host Pattern", self.host_query.host_pattern.clone()),
                FormField::new("Host Count", self.host_query.host_count.clone()),
                FormField::new("Sample Count", self.host_query.sample_count.clone()),
                FormField::new("Backlog Queue", self.host_query.backlog_queue.clone()),
                FormField::new("Processed Queue", self.host_query.processed_queue.clone()),
                FormField::new("Expression", self.host_query.expression.clone()),
            ],
            selected: 0,
        });
    }

    fn open_db_probe_form(&mut self) {
        self.form = Some(FormState {
            title: "Db Connection Probe",
            purpose: FormPurpose::DbProbe,
            fields: vec![
                FormField::new("Url", self.db_probe.url.clone()),
                FormField::new("Username", self.db_probe.username.clone()),
                FormField::masked("Password", self.db_probe.password.clone()),
            ],
            selected: 0,
        });
    }

    fn open_user_lookup(&mut self) {
        if self.directory.is_none() {
            self.show_flash("Directory service not configured");
            return;
        }
        self.form = Some(FormState {
            title: "User Lookup",
            purpose: FormPurpose::UserLookup,
            fields: vec![FormField::new("Userid", "")],
            selected: 0,
        });
    }

    // ---- navigation ------------------------------------------------------

    fn switch_tab(&mut self, tab: Tab, tx: UnboundedSender<Event>) {
        if self.tab == tab {
            return;
        }
        self.tab = tab;
        // mirror the tab-activation refresh of the metrics panel
        if tab == Tab::Metrics {
            self.fetch_metrics(tx, None);
        }
    }

    fn next_tab(&mut self, tx: UnboundedSender<Event>) {
        let idx = Tab::ALL.iter().position(|t| *t == self.tab).unwrap_or(0);
        let next = Tab::ALL[(idx + 1) % Tab::ALL.len()];
        self.switch_tab(next, tx);
    }

    fn refresh_current(&mut self, tx: UnboundedSender<Event>) {
        match self.tab {
            Tab::Alerts => self.fetch_alerts(tx),
            Tab::Metrics => self.fetch_metrics(tx, None),
            Tab::Hosts => self.fetch_hung_report(tx),
            Tab::Data => self.fetch_test_data(tx),
        }
    }

    fn cycle_hours(&mut self) {
        let idx = HOURS_CHOICES
            .iter()
            .position(|h| *h == self.hours)
            .unwrap_or(0);
        self.hours = HOURS_CHOICES[(idx + 1) % HOURS_CHOICES.len()];
    }

    fn current_sort(&mut self) -> Option<&mut SortSpec> {
        match self.tab {
            Tab::Alerts => Some(&mut self.alert_sort),
            Tab::Metrics => Some(&mut self.metric_sort),
            Tab::Hosts => Some(&mut self.host_sort),
            // the data table keeps its ordinal labels in insertion order
            Tab::Data => None,
        }
    }

    fn cycle_sort_column(&mut self) {
        let columns = self.tab.column_count();
        if let Some(sort) = self.current_sort() {
            sort.column = (sort.column + 1) % columns;
        }
        self.resort_current();
    }

    fn toggle_sort_direction(&mut self) {
        if let Some(sort) = self.current_sort() {
            sort.toggle();
        }
        self.resort_current();
    }

    fn resort_current(&mut self) {
        match self.tab {
            Tab::Alerts => sort_rows(&mut self.alert_rows, self.alert_sort),
            Tab::Metrics => {
                sort_rows(&mut self.all_metric_rows, self.metric_sort);
                self.refresh_visible_metric_rows();
            }
            Tab::Hosts => sort_rows(&mut self.host_rows, self.host_sort),
            Tab::Data => {}
        }
    }

    fn current_row_count(&self) -> usize {
        match self.tab {
            Tab::Alerts => self.alert_rows.len(),
            Tab::Metrics => self.visible_metric_rows.len(),
            Tab::Hosts => self.host_rows.len(),
            Tab::Data => self.data_rows.len(),
        }
    }

    fn current_table_state(&mut self) -> &mut TableState {
        match self.tab {
            Tab::Alerts => &mut self.alerts_table_state,
            Tab::Metrics => &mut self.metrics_table_state,
            Tab::Hosts => &mut self.hosts_table_state,
            Tab::Data => &mut self.data_table_state,
        }
    }

    fn next_row(&mut self) {
        let len = self.current_row_count();
        if len == 0 {
            return;
        }
        let state = self.current_table_state();
        let i = match state.selected() {
            Some(i) => {
                if i >= len.saturating_sub(1) {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        state.select(Some(i));
    }

    fn previous_row(&mut self) {
        let len = self.current_row_count();
        if len == 0 {
            return;
        }
        let state = self.current_table_state();
        let i = match state.selected() {
            Some(i) => {
                if i == 0 {
                    len.saturating_sub(1)
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        state.select(Some(i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::pulse::types::TriggeredAlert;
    use crate::pages::alerts::HEALTH_REPORT_ID;

    fn alert(id: &str) -> TriggeredAlert {
        TriggeredAlert {
            id: id.to_string(),
            kind: "limit".to_string(),
            host: None,
            service: None,
            description: Some("exceeded".to_string()),
            time: "10:00:00 , Aug 6".to_string(),
            ts: 100,
            count: None,
        }
    }

    fn report(ids: &[&str]) -> AlertReport {
        AlertReport {
            triggered: ids.iter().map(|id| alert(id)).collect(),
            test_count: None,
        }
    }

    #[test]
    fn failed_request_notice_names_operation_and_detail() {
        let mut app = App::default();
        app.is_loading = true;

        app.report_error("getting alerts", "connection refused");

        assert!(!app.is_loading, "UI must return to interactive state");
        let notice = app.notice.expect("error must surface a notice");
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.body.contains("getting alerts"));
        assert!(notice.body.contains("connection refused"));
    }

    #[test]
    fn alert_refresh_recomputes_counts_and_zeroes_stale_ids() {
        let mut app = App::default();

        app.apply_alert_report(report(&["a", "a", "b"]));
        assert_eq!(app.alert_counts.get("a"), Some(&2));
        assert_eq!(app.alert_counts.get("b"), Some(&1));
        assert_eq!(app.alert_counts.get(HEALTH_REPORT_ID), Some(&3));

        // next cycle: "a" went quiet but stays known, at zero
        app.apply_alert_report(report(&["b"]));
        assert_eq!(app.alert_counts.get("a"), Some(&0));
        assert_eq!(app.alert_counts.get("b"), Some(&1));
        assert_eq!(app.alert_counts.get(HEALTH_REPORT_ID), Some(&1));
    }

    #[test]
    fn metrics_refresh_replaces_rows_wholesale() {
        let mut app = App::default();
        let response = MetricsResponse {
            health_report: HealthReport {
                is_healthy: true,
                last_collected: None,
            },
            rows: vec![
                MetricRow {
                    name: "http.get".to_string(),
                    data: vec![10, 20, 1, 50, 200],
                },
                MetricRow {
                    name: "db.query".to_string(),
                    data: vec![5, 2, 1, 4, 10],
                },
            ],
        };

        app.apply_metrics(response.clone());
        let first = app.visible_metric_rows.clone();
        app.apply_metrics(response);

        assert_eq!(app.visible_metric_rows, first);
        assert_eq!(app.visible_metric_rows.len(), 2);
    }

    #[test]
    fn applied_filter_hides_non_matching_metric_rows() {
        let mut app = App::default();
        app.apply_metrics(MetricsResponse {
            health_report: HealthReport {
                is_healthy: true,
                last_collected: None,
            },
            rows: vec![
                MetricRow {
                    name: "http.get".to_string(),
                    data: vec![10, 20, 1, 50, 200],
                },
                MetricRow {
                    name: "db.query".to_string(),
                    data: vec![5, 2, 1, 4, 10],
                },
            ],
        });

        app.applied_filter = "http".to_string();
        app.refresh_visible_metric_rows();

        assert_eq!(app.visible_metric_rows.len(), 1);
        assert_eq!(app.visible_metric_rows[0].cells[0].text, "http.get");
    }

    #[test]
    fn hours_selection_cycles_through_choices() {
        let mut app = App::default();
        assert_eq!(app.hours, 4);
        for _ in 0..HOURS_CHOICES.len() {
            app.cycle_hours();
        }
        assert_eq!(app.hours, 4);
    }
}
