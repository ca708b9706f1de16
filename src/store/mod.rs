//! Session store: the single owner of all console state.
//!
//! Every change goes through [`Store::dispatch`], one action at a time. After
//! each action the store re-synchronises its timers with the session flags, so
//! pausing or disconnecting cancels pending ticks before any of them can apply.

mod action;

use std::collections::HashMap;
use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, trace, warn};

use crate::config::ConsoleConfig;
use crate::error::ConsoleError;
use crate::feed::RowFeed;
use crate::model::{EventLog, LogKind, Session, TelemetryHistory, TelemetrySample};
use crate::schema::{NodeKind, SchemaNode, SchemaTree, default_schema};
use crate::settings::Settings;
use crate::simulator::Simulator;
use crate::timer::{TimerKey, TimerToken, Timers};
use crate::workspace::{START_PAGE, TabRegistry, WorkspaceView};

pub use action::Action;

const CONNECT_GUARD: &str = "Please connect first!";
const OBJECT_FROM_EXPLORER: &str = "Tables and views are opened from the object explorer.";

/// Console state container.
#[derive(Debug)]
pub struct Store {
    config: ConsoleConfig,
    session: Session,
    aws_enabled: bool,
    tabs: TabRegistry,
    views: HashMap<String, WorkspaceView>,
    schema: SchemaTree,
    simulator: Simulator<StdRng>,
    telemetry: TelemetrySample,
    history: TelemetryHistory,
    log: EventLog,
    feeds: HashMap<String, RowFeed>,
    timers: Timers,
    settings: Settings,
    ticks: u64,
}

impl Store {
    /// Creates a store with the built-in explorer schema.
    pub fn new(config: ConsoleConfig, settings: Settings) -> Result<Self, ConsoleError> {
        Self::with_schema(config, settings, default_schema())
    }

    pub fn with_schema(
        config: ConsoleConfig,
        settings: Settings,
        schema: Vec<SchemaNode>,
    ) -> Result<Self, ConsoleError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let simulator = Simulator::new(config.catalog.clone(), config.ranges.clone(), rng)?;
        let schema = SchemaTree::new(schema)?;
        let mut views = HashMap::new();
        views.insert(START_PAGE.to_string(), WorkspaceView::Start);

        Ok(Self {
            history: TelemetryHistory::new(config.history_capacity),
            aws_enabled: settings.aws_enabled,
            config,
            session: Session::default(),
            tabs: TabRegistry::new(START_PAGE),
            views,
            schema,
            simulator,
            telemetry: TelemetrySample::IDLE,
            log: EventLog::with_startup_lines(),
            feeds: HashMap::new(),
            timers: Timers::new(),
            settings,
            ticks: 0,
        })
    }

    /// Applies one action, then re-synchronises timers.
    ///
    /// Only guard violations return an error; the state is unchanged in that case.
    pub fn dispatch(&mut self, action: Action, now: Instant) -> Result<(), ConsoleError> {
        if !matches!(action, Action::Tick(_)) {
            debug!(?action, "dispatch");
        }
        let result = self.apply(action);
        self.sync_timers(now);
        result
    }

    /// Dispatches a tick for every due timer. Returns the number of ticks applied.
    pub fn fire_due(&mut self, now: Instant) -> usize {
        let due = self.timers.take_due(now);
        let mut applied = 0;
        for token in due {
            // an earlier tick in this batch may have cancelled this one
            if self.timers.is_current(&token) {
                applied += 1;
            }
            self.on_tick(token);
            self.sync_timers(now);
        }
        applied
    }

    /// When the event loop should wake up next.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    fn apply(&mut self, action: Action) -> Result<(), ConsoleError> {
        match action {
            Action::Connect { aws_enabled } => {
                self.connect(aws_enabled);
                Ok(())
            }
            Action::Disconnect => {
                self.disconnect();
                Ok(())
            }
            Action::StartRun => {
                self.require_connection()?;
                if !self.session.running {
                    self.set_running(true);
                }
                Ok(())
            }
            Action::PauseRun => {
                if self.session.running {
                    self.set_running(false);
                }
                Ok(())
            }
            Action::ToggleRun => {
                self.require_connection()?;
                self.set_running(!self.session.running);
                Ok(())
            }
            Action::SwitchTraffic => {
                self.require_connection()?;
                self.session.route = self.session.route.flipped();
                info!(route = self.session.route.label(), "traffic switched");
                self.log.push(
                    format!(
                        "Traffic routed to {} ({})",
                        self.session.route.label(),
                        self.session.route.endpoint()
                    ),
                    LogKind::Info,
                );
                Ok(())
            }
            Action::ToggleNode(id) => {
                if !self.schema.toggle(&id) {
                    trace!(id = %id, "toggle ignored");
                }
                Ok(())
            }
            Action::OpenNode(id) => self.open_node(&id),
            Action::OpenView(WorkspaceView::Object { .. }) => Err(ConsoleError::InvalidOperation(
                OBJECT_FROM_EXPLORER.to_string(),
            )),
            Action::OpenView(view) => self.open_view(view),
            Action::CloseTab(name) => {
                self.close_tab(&name);
                Ok(())
            }
            Action::ActivateTab(name) => {
                self.tabs.activate(&name);
                Ok(())
            }
            Action::ClearLogs => {
                self.log.clear();
                Ok(())
            }
            Action::EditSetting { field, step } => {
                self.settings.adjust(field, step);
                Ok(())
            }
            Action::Tick(token) => {
                self.on_tick(token);
                Ok(())
            }
        }
    }

    fn require_connection(&self) -> Result<(), ConsoleError> {
        if self.session.connected {
            Ok(())
        } else {
            warn!("operation rejected: not connected");
            Err(ConsoleError::InvalidOperation(CONNECT_GUARD.to_string()))
        }
    }

    fn connect(&mut self, aws_enabled: bool) {
        if self.session.connected {
            return;
        }
        self.session.connected = true;
        self.aws_enabled = aws_enabled;
        info!(aws_enabled, "connected");

        self.views
            .insert(WorkspaceView::Monitor.tab_name(), WorkspaceView::Monitor);
        self.tabs.open(&WorkspaceView::Monitor.tab_name());

        let message = if aws_enabled {
            "Connected to PostgreSQL, MongoDB Atlas, and AWS S3."
        } else {
            "Connected to PostgreSQL and MongoDB Atlas."
        };
        self.log.push(message, LogKind::Success);
    }

    fn disconnect(&mut self) {
        if !self.session.connected {
            return;
        }
        self.session = Session::default();
        self.tabs.reset_to_default();
        self.views.retain(|name, _| name == START_PAGE);
        self.feeds.clear();
        self.history.clear();
        self.telemetry = TelemetrySample::IDLE;
        self.timers.disarm_all();
        info!("disconnected");
        self.log
            .push("Disconnected from all endpoints.", LogKind::Warning);
    }

    fn set_running(&mut self, running: bool) {
        self.session.running = running;
        if running {
            info!("pipeline started");
            self.log
                .push("Migration pipeline initialized.", LogKind::Success);
        } else {
            info!("pipeline paused");
            self.log.push("Migration pipeline paused.", LogKind::Warning);
        }
    }

    fn open_node(&mut self, id: &str) -> Result<(), ConsoleError> {
        let Some((kind, name)) = self.schema.lookup(id) else {
            return Ok(());
        };
        let title = match kind {
            NodeKind::Table => format!("Table: {}", name),
            NodeKind::View => format!("View: {}", name),
            NodeKind::Folder { .. } | NodeKind::Procedure => return Ok(()),
        };
        self.open_view(WorkspaceView::Object {
            node_id: id.to_string(),
            title,
        })
    }

    fn open_view(&mut self, view: WorkspaceView) -> Result<(), ConsoleError> {
        if view.requires_connection() {
            self.require_connection()?;
        }
        let name = view.tab_name();
        if let WorkspaceView::Object { node_id, .. } = &view
            && !self.feeds.contains_key(&name)
        {
            let source = self
                .schema
                .lookup(node_id)
                .map(|(_, n)| n.to_string())
                .unwrap_or_else(|| node_id.clone());
            let feed = RowFeed::generate(
                &source,
                self.config.feed.total_rows,
                self.config.feed.rows_per_tick,
                self.simulator.rng_mut(),
            );
            self.feeds.insert(name.clone(), feed);
        }
        self.views.insert(name.clone(), view);
        self.tabs.open(&name);
        Ok(())
    }

    fn close_tab(&mut self, name: &str) {
        if !self.tabs.close(name) {
            return;
        }
        self.views.remove(name);
        if self.feeds.remove(name).is_some() {
            self.timers.disarm(&TimerKey::Feed(name.to_string()));
        }
    }

    fn on_tick(&mut self, token: TimerToken) {
        if !self.timers.is_current(&token) {
            trace!(?token, "stale tick ignored");
            return;
        }
        match token.key {
            TimerKey::Simulator => {
                if !self.session.is_active() {
                    return;
                }
                let tick = self.simulator.tick();
                self.log.push(tick.message, LogKind::Info);
                self.telemetry = tick.sample;
                self.history.push(tick.sample);
                self.ticks += 1;
            }
            TimerKey::Feed(name) => {
                if let Some(feed) = self.feeds.get_mut(&name) {
                    feed.advance();
                }
            }
        }
    }

    /// Arms or disarms timers to match the session flags.
    fn sync_timers(&mut self, now: Instant) {
        let active = self.session.is_active();
        let armed = self.timers.is_armed(&TimerKey::Simulator);
        if active && !armed {
            self.timers
                .arm(TimerKey::Simulator, self.config.tick_interval, now);
        } else if !active && armed {
            self.timers.disarm(&TimerKey::Simulator);
            self.telemetry = TelemetrySample::IDLE;
        }

        for (name, feed) in &self.feeds {
            let key = TimerKey::Feed(name.clone());
            let want = self.session.running && !feed.is_saturated();
            let armed = self.timers.is_armed(&key);
            if want && !armed {
                self.timers.arm(key, self.config.feed.interval, now);
            } else if !want && armed {
                self.timers.disarm(&key);
            }
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn aws_enabled(&self) -> bool {
        self.aws_enabled
    }

    pub fn tabs(&self) -> &TabRegistry {
        &self.tabs
    }

    /// View shown by the active tab.
    pub fn active_view(&self) -> &WorkspaceView {
        self.views
            .get(self.tabs.active())
            .unwrap_or(&WorkspaceView::Start)
    }

    pub fn schema(&self) -> &SchemaTree {
        &self.schema
    }

    pub fn telemetry(&self) -> &TelemetrySample {
        &self.telemetry
    }

    pub fn history(&self) -> &TelemetryHistory {
        &self.history
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn feed(&self, tab: &str) -> Option<&RowFeed> {
        self.feeds.get(tab)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Simulator ticks applied since start-up.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_timer_armed(&self, key: &TimerKey) -> bool {
        self.timers.is_armed(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::config::FeedConfig;
    use crate::settings::SettingField;
    use crate::workspace::{DEAD_LETTER_TAB, MONITOR_TAB, SETTINGS_TAB};

    const TICK: Duration = Duration::from_millis(1000);

    fn config() -> ConsoleConfig {
        ConsoleConfig {
            tick_interval: TICK,
            seed: Some(7),
            feed: FeedConfig {
                total_rows: 1000,
                rows_per_tick: 5,
                interval: Duration::from_millis(50),
            },
            ..ConsoleConfig::default()
        }
    }

    fn store() -> Store {
        Store::new(config(), Settings::default()).unwrap()
    }

    fn connected(start: Instant) -> Store {
        let mut s = store();
        s.dispatch(Action::Connect { aws_enabled: true }, start)
            .unwrap();
        s
    }

    fn tab_names(s: &Store) -> Vec<&str> {
        s.tabs().tabs().iter().map(String::as_str).collect()
    }

    #[test]
    fn test_open_view_cannot_shadow_reserved_tabs() {
        let start = Instant::now();
        let mut s = connected(start);
        for title in [START_PAGE, MONITOR_TAB] {
            let err = s
                .dispatch(
                    Action::OpenView(WorkspaceView::Object {
                        node_id: "t1".to_string(),
                        title: title.to_string(),
                    }),
                    start,
                )
                .unwrap_err();
            assert_eq!(
                err,
                ConsoleError::InvalidOperation(OBJECT_FROM_EXPLORER.to_string())
            );
            assert!(s.feed(title).is_none());
        }
        assert_eq!(tab_names(&s), vec![START_PAGE, MONITOR_TAB]);
        assert_eq!(s.active_view(), &WorkspaceView::Monitor);

        s.dispatch(Action::Disconnect, start).unwrap();
        assert_eq!(tab_names(&s), vec![START_PAGE]);
        assert_eq!(s.active_view(), &WorkspaceView::Start);
    }

    #[test]
    fn test_initial_state() {
        let s = store();
        assert!(!s.session().connected);
        assert!(!s.session().running);
        assert_eq!(tab_names(&s), vec![START_PAGE]);
        assert_eq!(s.active_view(), &WorkspaceView::Start);
        assert_eq!(*s.telemetry(), TelemetrySample::IDLE);
        assert_eq!(s.log().len(), 3);
        assert_eq!(s.next_deadline(), None);
    }

    #[test]
    fn test_start_while_disconnected_is_rejected() {
        let start = Instant::now();
        let mut s = store();
        let log_len = s.log().len();

        for action in [Action::StartRun, Action::ToggleRun] {
            let err = s.dispatch(action, start).unwrap_err();
            assert_eq!(err, ConsoleError::InvalidOperation(CONNECT_GUARD.to_string()));
        }
        assert!(!s.session().running);
        assert_eq!(s.log().len(), log_len);
        assert_eq!(s.next_deadline(), None);
    }

    #[test]
    fn test_connect_opens_monitor() {
        let start = Instant::now();
        let s = connected(start);
        assert!(s.session().connected);
        assert_eq!(tab_names(&s), vec![START_PAGE, MONITOR_TAB]);
        assert_eq!(s.tabs().active(), MONITOR_TAB);
        assert_eq!(s.active_view(), &WorkspaceView::Monitor);
        let last = s.log().entries().last().unwrap();
        assert_eq!(last.kind, LogKind::Success);
        assert!(last.message.contains("AWS S3"));
    }

    #[test]
    fn test_connect_without_aws() {
        let mut s = store();
        s.dispatch(Action::Connect { aws_enabled: false }, Instant::now())
            .unwrap();
        assert!(!s.aws_enabled());
        let last = s.log().entries().last().unwrap();
        assert!(!last.message.contains("AWS"));
    }

    #[test]
    fn test_connect_twice_is_noop() {
        let start = Instant::now();
        let mut s = connected(start);
        s.dispatch(Action::ActivateTab(START_PAGE.to_string()), start)
            .unwrap();
        let log_len = s.log().len();
        s.dispatch(Action::Connect { aws_enabled: false }, start)
            .unwrap();
        assert_eq!(s.log().len(), log_len);
        assert_eq!(s.tabs().active(), START_PAGE);
        assert!(s.aws_enabled());
    }

    #[test]
    fn test_tick_appends_one_log_and_sample() {
        let start = Instant::now();
        let mut s = connected(start);
        s.dispatch(Action::StartRun, start).unwrap();
        let log_len = s.log().len();

        assert_eq!(s.fire_due(start + TICK / 2), 0);
        assert_eq!(s.log().len(), log_len);

        assert_eq!(s.fire_due(start + TICK), 1);
        assert_eq!(s.log().len(), log_len + 1);
        let entry = s.log().entries().last().unwrap();
        assert_eq!(entry.kind, LogKind::Info);
        assert!(config().catalog.contains(&entry.message));
        assert_eq!(entry.timestamp.len(), 8);
        assert_eq!(entry.timestamp.matches(':').count(), 2);
        assert_ne!(*s.telemetry(), TelemetrySample::IDLE);
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.history().latest(), Some(s.telemetry()));
        assert_eq!(s.ticks(), 1);
    }

    #[test]
    fn test_history_is_bounded() {
        let start = Instant::now();
        let mut s = connected(start);
        s.dispatch(Action::StartRun, start).unwrap();
        for i in 1..=45u32 {
            s.fire_due(start + TICK * i);
            assert!(s.history().len() <= 20);
        }
        assert_eq!(s.ticks(), 45);
        assert_eq!(s.history().len(), 20);
        assert_eq!(s.history().latest(), Some(s.telemetry()));
    }

    #[test]
    fn test_pause_quiesces_simulator() {
        let start = Instant::now();
        let mut s = connected(start);
        s.dispatch(Action::StartRun, start).unwrap();
        s.fire_due(start + TICK);
        s.fire_due(start + TICK * 2);
        assert_eq!(s.history().len(), 2);

        let paused_at = start + TICK * 2 + TICK / 2;
        s.dispatch(Action::PauseRun, paused_at).unwrap();
        let log_len = s.log().len();
        assert_eq!(*s.telemetry(), TelemetrySample::IDLE);

        for i in 3..10u32 {
            assert_eq!(s.fire_due(start + TICK * i), 0);
        }
        assert_eq!(s.log().len(), log_len);
        // history survives a pause
        assert_eq!(s.history().len(), 2);
        assert!(!s.is_timer_armed(&TimerKey::Simulator));
    }

    #[test]
    fn test_stale_token_never_applies() {
        let start = Instant::now();
        let mut s = connected(start);
        s.dispatch(Action::StartRun, start).unwrap();
        let stale = TimerToken {
            key: TimerKey::Simulator,
            generation: 1,
        };
        s.dispatch(Action::PauseRun, start).unwrap();
        s.dispatch(Action::StartRun, start).unwrap();
        let log_len = s.log().len();

        s.dispatch(Action::Tick(stale), start + TICK).unwrap();
        assert_eq!(s.log().len(), log_len);
        assert_eq!(s.ticks(), 0);
    }

    #[test]
    fn test_fire_due_resyncs_timers_after_each_tick() {
        let start = Instant::now();
        let config = ConsoleConfig {
            feed: FeedConfig {
                total_rows: 5,
                rows_per_tick: 5,
                interval: Duration::from_millis(50),
            },
            ..config()
        };
        let mut s = Store::new(config, Settings::default()).unwrap();
        s.dispatch(Action::Connect { aws_enabled: true }, start)
            .unwrap();
        s.dispatch(Action::OpenNode("t1".to_string()), start).unwrap();
        s.dispatch(Action::StartRun, start).unwrap();
        let feed_key = TimerKey::Feed("Table: users".to_string());
        assert!(s.is_timer_armed(&feed_key));

        // simulator and feed are both due; the feed saturates on its first tick
        assert_eq!(s.fire_due(start + TICK), 2);
        assert_eq!(s.feed("Table: users").map(|f| f.revealed()), Some(5));
        assert!(!s.is_timer_armed(&feed_key));
        assert_eq!(s.next_deadline(), Some(start + TICK * 2));
        assert_eq!(s.ticks(), 1);
    }

    #[test]
    fn test_toggle_run() {
        let start = Instant::now();
        let mut s = connected(start);
        s.dispatch(Action::ToggleRun, start).unwrap();
        assert!(s.session().running);
        assert_eq!(
            s.log().entries().last().unwrap().message,
            "Migration pipeline initialized."
        );
        s.dispatch(Action::ToggleRun, start).unwrap();
        assert!(!s.session().running);
        assert_eq!(
            s.log().entries().last().unwrap().message,
            "Migration pipeline paused."
        );
    }

    #[test]
    fn test_start_and_pause_are_idempotent() {
        let start = Instant::now();
        let mut s = connected(start);
        let log_len = s.log().len();
        s.dispatch(Action::PauseRun, start).unwrap();
        assert_eq!(s.log().len(), log_len);
        s.dispatch(Action::StartRun, start).unwrap();
        s.dispatch(Action::StartRun, start).unwrap();
        assert_eq!(s.log().len(), log_len + 1);
    }

    #[test]
    fn test_disconnect_resets_state() {
        let start = Instant::now();
        let mut s = connected(start);
        s.dispatch(Action::OpenView(WorkspaceView::DeadLetters), start)
            .unwrap();
        s.dispatch(Action::OpenNode("t1".to_string()), start)
            .unwrap();
        s.dispatch(Action::SwitchTraffic, start).unwrap();
        s.dispatch(Action::StartRun, start).unwrap();
        s.fire_due(start + TICK);

        s.dispatch(Action::Disconnect, start + TICK).unwrap();
        assert_eq!(*s.session(), Session::default());
        assert_eq!(tab_names(&s), vec![START_PAGE]);
        assert_eq!(s.tabs().active(), START_PAGE);
        assert!(s.history().is_empty());
        assert_eq!(*s.telemetry(), TelemetrySample::IDLE);
        assert!(s.feed("Table: users").is_none());
        assert_eq!(s.next_deadline(), None);
        assert_eq!(
            s.log().entries().last().unwrap().message,
            "Disconnected from all endpoints."
        );
    }

    #[test]
    fn test_disconnect_while_disconnected_is_noop() {
        let mut s = store();
        let log_len = s.log().len();
        s.dispatch(Action::Disconnect, Instant::now()).unwrap();
        assert_eq!(s.log().len(), log_len);
    }

    #[test]
    fn test_switch_traffic_requires_connection() {
        let start = Instant::now();
        let mut s = store();
        assert!(s.dispatch(Action::SwitchTraffic, start).is_err());

        let mut s = connected(start);
        s.dispatch(Action::SwitchTraffic, start).unwrap();
        assert_eq!(s.session().route, crate::model::TrafficRoute::Target);
        assert!(
            s.log()
                .entries()
                .last()
                .unwrap()
                .message
                .contains("TARGET")
        );
    }

    #[test]
    fn test_toggle_node() {
        let mut s = store();
        assert_eq!(s.schema().is_open("s1"), Some(true));
        s.dispatch(Action::ToggleNode("s1".to_string()), Instant::now())
            .unwrap();
        assert_eq!(s.schema().is_open("s1"), Some(false));
        s.dispatch(Action::ToggleNode("missing".to_string()), Instant::now())
            .unwrap();
    }

    #[test]
    fn test_open_node_requires_connection() {
        let mut s = store();
        let err = s
            .dispatch(Action::OpenNode("t1".to_string()), Instant::now())
            .unwrap_err();
        assert!(matches!(err, ConsoleError::InvalidOperation(_)));
        assert_eq!(tab_names(&s), vec![START_PAGE]);
    }

    #[test]
    fn test_open_node_ignores_folders_and_procedures() {
        let start = Instant::now();
        let mut s = connected(start);
        s.dispatch(Action::OpenNode("s1".to_string()), start)
            .unwrap();
        s.dispatch(Action::OpenNode("p1".to_string()), start)
            .unwrap();
        assert_eq!(tab_names(&s), vec![START_PAGE, MONITOR_TAB]);
    }

    #[test]
    fn test_feed_reveals_while_running_and_saturates() {
        let start = Instant::now();
        let mut s = connected(start);
        s.dispatch(Action::OpenNode("t1".to_string()), start)
            .unwrap();
        assert_eq!(s.tabs().active(), "Table: users");
        let key = TimerKey::Feed("Table: users".to_string());
        assert!(!s.is_timer_armed(&key));

        s.dispatch(Action::StartRun, start).unwrap();
        assert!(s.is_timer_armed(&key));

        let step = Duration::from_millis(50);
        for i in 1..=200u32 {
            s.fire_due(start + step * i);
        }
        let feed = s.feed("Table: users").unwrap();
        assert_eq!(feed.revealed(), 1000);
        assert!(feed.is_saturated());
        assert!(!s.is_timer_armed(&key));

        for i in 201..=220u32 {
            s.fire_due(start + step * i);
        }
        assert_eq!(s.feed("Table: users").unwrap().revealed(), 1000);
    }

    #[test]
    fn test_feed_pause_freezes_and_resume_continues() {
        let start = Instant::now();
        let step = Duration::from_millis(50);
        let mut s = connected(start);
        s.dispatch(Action::OpenNode("d1".to_string()), start)
            .unwrap();
        s.dispatch(Action::StartRun, start).unwrap();
        for i in 1..=4u32 {
            s.fire_due(start + step * i);
        }
        assert_eq!(s.feed("View: users_v2").unwrap().revealed(), 20);

        s.dispatch(Action::PauseRun, start + step * 4).unwrap();
        for i in 5..=10u32 {
            s.fire_due(start + step * i);
        }
        assert_eq!(s.feed("View: users_v2").unwrap().revealed(), 20);

        let resumed = start + step * 10;
        s.dispatch(Action::StartRun, resumed).unwrap();
        s.fire_due(resumed + step);
        assert_eq!(s.feed("View: users_v2").unwrap().revealed(), 25);
    }

    #[test]
    fn test_closing_feed_tab_resets_feed() {
        let start = Instant::now();
        let step = Duration::from_millis(50);
        let mut s = connected(start);
        s.dispatch(Action::StartRun, start).unwrap();
        s.dispatch(Action::OpenNode("t2".to_string()), start)
            .unwrap();
        s.fire_due(start + step);
        assert_eq!(s.feed("Table: transactions").unwrap().revealed(), 5);

        s.dispatch(Action::CloseTab("Table: transactions".to_string()), start + step)
            .unwrap();
        assert!(s.feed("Table: transactions").is_none());
        assert!(!s.is_timer_armed(&TimerKey::Feed("Table: transactions".to_string())));
        assert_eq!(s.tabs().active(), START_PAGE);

        s.dispatch(Action::OpenNode("t2".to_string()), start + step)
            .unwrap();
        assert_eq!(s.feed("Table: transactions").unwrap().revealed(), 0);
    }

    #[test]
    fn test_reopening_feed_tab_keeps_progress() {
        let start = Instant::now();
        let step = Duration::from_millis(50);
        let mut s = connected(start);
        s.dispatch(Action::StartRun, start).unwrap();
        s.dispatch(Action::OpenNode("t3".to_string()), start)
            .unwrap();
        s.fire_due(start + step);
        s.dispatch(Action::ActivateTab(MONITOR_TAB.to_string()), start + step)
            .unwrap();
        s.dispatch(Action::OpenNode("t3".to_string()), start + step)
            .unwrap();
        assert_eq!(s.feed("Table: inventory_items").unwrap().revealed(), 5);
        assert_eq!(s.tabs().active(), "Table: inventory_items");
    }

    #[test]
    fn test_default_tab_cannot_be_closed() {
        let start = Instant::now();
        let mut s = connected(start);
        s.dispatch(Action::CloseTab(START_PAGE.to_string()), start)
            .unwrap();
        assert_eq!(tab_names(&s), vec![START_PAGE, MONITOR_TAB]);

        s.dispatch(Action::CloseTab(MONITOR_TAB.to_string()), start)
            .unwrap();
        assert_eq!(tab_names(&s), vec![START_PAGE]);
        assert_eq!(s.active_view(), &WorkspaceView::Start);
    }

    #[test]
    fn test_views_available_offline() {
        let start = Instant::now();
        let mut s = store();
        s.dispatch(Action::OpenView(WorkspaceView::Settings), start)
            .unwrap();
        s.dispatch(Action::OpenView(WorkspaceView::DeadLetters), start)
            .unwrap();
        assert_eq!(tab_names(&s), vec![START_PAGE, SETTINGS_TAB, DEAD_LETTER_TAB]);
        assert!(
            s.dispatch(Action::OpenView(WorkspaceView::Monitor), start)
                .is_err()
        );
    }

    #[test]
    fn test_edit_setting_does_not_touch_simulation() {
        let start = Instant::now();
        let mut s = connected(start);
        s.dispatch(
            Action::EditSetting {
                field: SettingField::BatchSize,
                step: 1,
            },
            start,
        )
        .unwrap();
        assert_eq!(s.settings().batch_size, 600);
        assert_eq!(s.config().feed.rows_per_tick, 5);
    }

    #[test]
    fn test_clear_logs() {
        let start = Instant::now();
        let mut s = connected(start);
        s.dispatch(Action::ClearLogs, start).unwrap();
        assert!(s.log().is_empty());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let cfg = ConsoleConfig {
            catalog: Vec::new(),
            ..config()
        };
        assert!(Store::new(cfg, Settings::default()).is_err());
    }

    #[test]
    fn test_end_to_end_scenario() {
        let start = Instant::now();
        let mut s = store();

        // start guard while disconnected
        let before = s.log().len();
        assert!(s.dispatch(Action::ToggleRun, start).is_err());
        assert!(!s.session().running);
        assert_eq!(s.log().len(), before);

        // connect opens the monitor
        s.dispatch(Action::Connect { aws_enabled: true }, start)
            .unwrap();
        assert_eq!(s.tabs().active(), MONITOR_TAB);

        // one tick after starting, exactly one new line
        s.dispatch(Action::ToggleRun, start).unwrap();
        let before = s.log().len();
        s.fire_due(start + TICK);
        assert_eq!(s.log().len(), before + 1);
        assert_ne!(*s.telemetry(), TelemetrySample::IDLE);

        // pause, disconnect
        s.dispatch(Action::ToggleRun, start + TICK).unwrap();
        s.dispatch(Action::Disconnect, start + TICK).unwrap();
        assert_eq!(tab_names(&s), vec![START_PAGE]);
        assert!(s.history().is_empty());

        let before = s.log().len();
        s.fire_due(start + TICK * 5);
        assert_eq!(s.log().len(), before);
    }
}
