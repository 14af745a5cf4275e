use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures_util::StreamExt;
use game_core::{
    COUNTDOWN_SECONDS, GameEvent, GameEventHandler, GameSession, InputOutcome, SESSION_DURATIONS,
    TickOutcome, TracingEventHandler, WordPool, next_duration,
};
use game_persistence::{Preferences, Scoreboard};
use game_types::{ColorScheme, Difficulty, RankedScore, ScoreEntry};
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::config::Config;
use crate::ticker::TickSource;
use crate::ui::{self, Theme, terminal::TerminalGuard};
use crate::word_source::WordSource;

const MAX_NAME_LENGTH: usize = 24;
const SPINNER_PERIOD: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Loading,
    Countdown,
    Playing,
    GameOver,
    Scoreboard,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeField {
    Name,
    Difficulty,
    Duration,
    ColorScheme,
}

impl HomeField {
    fn next(self) -> Self {
        match self {
            HomeField::Name => HomeField::Difficulty,
            HomeField::Difficulty => HomeField::Duration,
            HomeField::Duration => HomeField::ColorScheme,
            HomeField::ColorScheme => HomeField::Name,
        }
    }

    fn previous(self) -> Self {
        match self {
            HomeField::Name => HomeField::ColorScheme,
            HomeField::Difficulty => HomeField::Name,
            HomeField::Duration => HomeField::Difficulty,
            HomeField::ColorScheme => HomeField::Duration,
        }
    }
}

/// Settings chosen on the home screen
#[derive(Debug, Clone, PartialEq)]
pub struct HomeForm {
    pub name: String,
    pub difficulty: Difficulty,
    pub duration_seconds: u32,
    pub color_scheme: ColorScheme,
    pub focus: HomeField,
    pub error: Option<String>,
}

impl HomeForm {
    pub fn player_name(&self) -> String {
        self.name.trim().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreboardFilter {
    pub difficulty: Option<Difficulty>,
    pub duration: Option<u32>,
}

impl ScoreboardFilter {
    /// all -> easy -> normal -> hard -> all
    pub fn cycle_difficulty(&mut self) {
        self.difficulty = match self.difficulty {
            None => Some(Difficulty::Easy),
            Some(Difficulty::Hard) => None,
            Some(d) => Some(d.next()),
        };
    }

    /// all -> 30 -> 60 -> 120 -> all
    pub fn cycle_duration(&mut self) {
        self.duration = match self.duration {
            None => Some(SESSION_DURATIONS[0]),
            Some(d) if d == SESSION_DURATIONS[SESSION_DURATIONS.len() - 1] => None,
            Some(d) => Some(next_duration(d)),
        };
    }
}

/// Everything the driver loop feeds into the app
#[derive(Debug, Clone)]
pub enum AppEvent {
    Key(KeyEvent),
    Tick(f64),
    CountdownStep,
    WordsLoaded(WordPool),
    MeaningResolved { word: String, meaning: String },
    ScoresLoaded(Vec<RankedScore>),
    Redraw,
}

/// Side effects the app asks the driver to perform
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchWords,
    FetchMeaning(String),
    StartTicker,
    StopTicker,
    StartCountdown,
    StopCountdown,
    SaveScore(ScoreEntry),
    SavePreferences {
        player_name: String,
        color_scheme: ColorScheme,
    },
    LoadScores(ScoreboardFilter),
}

/// Raised by the game-over event; read once by the app
#[derive(Debug, Clone, Default)]
pub struct Celebration {
    pending: Arc<AtomicBool>,
}

impl Celebration {
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::SeqCst)
    }
}

impl GameEventHandler for Celebration {
    fn handle_event(&mut self, event: &GameEvent) {
        if let GameEvent::GameOver { .. } = event {
            self.pending.store(true, Ordering::SeqCst);
        }
    }
}

pub struct App {
    screen: Screen,
    home: HomeForm,
    theme: Theme,
    words: Option<WordPool>,
    session: Option<GameSession>,
    countdown: u32,
    spinner_frame: usize,
    celebration: Celebration,
    celebrating: bool,
    scoreboard_filter: ScoreboardFilter,
    scoreboard_rows: Vec<RankedScore>,
}

impl App {
    pub fn new(
        player_name: String,
        color_scheme: ColorScheme,
        difficulty: Difficulty,
        duration_seconds: u32,
    ) -> Self {
        Self {
            screen: Screen::Home,
            home: HomeForm {
                name: player_name,
                difficulty,
                duration_seconds,
                color_scheme,
                focus: HomeField::Name,
                error: None,
            },
            theme: Theme::for_scheme(color_scheme),
            words: None,
            session: None,
            countdown: 0,
            spinner_frame: 0,
            celebration: Celebration::default(),
            celebrating: false,
            scoreboard_filter: ScoreboardFilter::default(),
            scoreboard_rows: Vec::new(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn home(&self) -> &HomeForm {
        &self.home
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    pub fn spinner_frame(&self) -> usize {
        self.spinner_frame
    }

    pub fn celebrating(&self) -> bool {
        self.celebrating
    }

    pub fn scoreboard_filter(&self) -> &ScoreboardFilter {
        &self.scoreboard_filter
    }

    pub fn scoreboard_rows(&self) -> &[RankedScore] {
        &self.scoreboard_rows
    }

    pub fn should_quit(&self) -> bool {
        self.screen == Screen::Quit
    }

    pub fn handle(&mut self, event: AppEvent) -> Vec<Command> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Tick(elapsed) => self.handle_tick(elapsed),
            AppEvent::CountdownStep => self.handle_countdown_step(),
            AppEvent::WordsLoaded(pool) => {
                self.words = Some(pool);
                if self.screen == Screen::Loading {
                    self.begin_new_session()
                } else {
                    Vec::new()
                }
            }
            AppEvent::MeaningResolved { word, meaning } => {
                if let Some(session) = self.session.as_mut() {
                    session.resolve_meaning(&word, meaning);
                }
                Vec::new()
            }
            AppEvent::ScoresLoaded(rows) => {
                self.scoreboard_rows = rows;
                Vec::new()
            }
            AppEvent::Redraw => {
                if self.screen == Screen::Loading {
                    self.spinner_frame = self.spinner_frame.wrapping_add(1);
                }
                Vec::new()
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Vec<Command> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return self.quit();
        }

        match self.screen {
            Screen::Home => self.handle_home_key(key),
            Screen::Playing => self.handle_playing_key(key),
            Screen::GameOver => self.handle_game_over_key(key),
            Screen::Scoreboard => self.handle_scoreboard_key(key),
            Screen::Loading | Screen::Countdown => {
                if key.code == KeyCode::Esc {
                    self.go_home()
                } else {
                    Vec::new()
                }
            }
            Screen::Quit => Vec::new(),
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) -> Vec<Command> {
        match key.code {
            KeyCode::Esc => return self.quit(),
            KeyCode::Enter => return self.submit_home(),
            KeyCode::F(2) => return self.open_scoreboard(ScoreboardFilter::default()),
            KeyCode::Tab | KeyCode::Down => self.home.focus = self.home.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.home.focus = self.home.focus.previous(),
            code => match self.home.focus {
                HomeField::Name => match code {
                    KeyCode::Char(c) if self.home.name.chars().count() < MAX_NAME_LENGTH => {
                        self.home.name.push(c);
                        self.home.error = None;
                    }
                    KeyCode::Backspace => {
                        self.home.name.pop();
                    }
                    _ => {}
                },
                field if is_cycle_key(code) => self.cycle_home_field(field),
                _ => {}
            },
        }
        Vec::new()
    }

    fn cycle_home_field(&mut self, field: HomeField) {
        match field {
            HomeField::Difficulty => self.home.difficulty = self.home.difficulty.next(),
            HomeField::Duration => {
                self.home.duration_seconds = next_duration(self.home.duration_seconds)
            }
            HomeField::ColorScheme => {
                self.home.color_scheme = self.home.color_scheme.next();
                self.theme = Theme::for_scheme(self.home.color_scheme);
            }
            HomeField::Name => {}
        }
    }

    fn submit_home(&mut self) -> Vec<Command> {
        let player_name = self.home.player_name();
        if player_name.is_empty() {
            self.home.error = Some("Please enter your name".to_string());
            return Vec::new();
        }

        let mut commands = vec![Command::SavePreferences {
            player_name,
            color_scheme: self.home.color_scheme,
        }];

        if self.words.is_some() {
            commands.extend(self.begin_new_session());
        } else {
            self.screen = Screen::Loading;
            commands.push(Command::FetchWords);
        }
        commands
    }

    fn begin_new_session(&mut self) -> Vec<Command> {
        let pool = self.words.clone().unwrap_or_default();
        let created = GameSession::new(
            self.home.player_name(),
            self.home.duration_seconds,
            self.home.difficulty,
            pool,
        );

        match created {
            Ok(mut session) => {
                session.event_bus.add_handler(Box::new(TracingEventHandler));
                session.event_bus.add_handler(Box::new(self.celebration.clone()));
                self.session = Some(session);
                self.begin_countdown()
            }
            Err(e) => {
                tracing::error!("Failed to create session: {}", e);
                self.home.error = Some(e.to_string());
                self.screen = Screen::Home;
                Vec::new()
            }
        }
    }

    fn begin_countdown(&mut self) -> Vec<Command> {
        self.countdown = COUNTDOWN_SECONDS;
        self.celebrating = false;
        self.screen = Screen::Countdown;
        vec![Command::StopTicker, Command::StartCountdown]
    }

    fn handle_countdown_step(&mut self) -> Vec<Command> {
        if self.screen != Screen::Countdown {
            return Vec::new();
        }

        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown > 0 {
            return Vec::new();
        }

        let Some(session) = self.session.as_mut() else {
            return vec![Command::StopCountdown];
        };

        match session.start() {
            Ok(first_word) => {
                let first_word = first_word.to_string();
                self.screen = Screen::Playing;
                vec![
                    Command::StopCountdown,
                    Command::StartTicker,
                    Command::FetchMeaning(first_word),
                ]
            }
            Err(e) => {
                tracing::error!("Failed to start session: {}", e);
                self.home.error = Some(e.to_string());
                self.screen = Screen::Home;
                vec![Command::StopCountdown]
            }
        }
    }

    fn handle_playing_key(&mut self, key: KeyEvent) -> Vec<Command> {
        if key.code == KeyCode::Esc {
            return self.go_home();
        }
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };

        let mut value = session.state.input.clone();
        match key.code {
            KeyCode::Backspace => {
                value.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => value.push(c),
            _ => return Vec::new(),
        }

        match session.on_input(&value) {
            Ok(InputOutcome::WordCompleted { next_word, .. }) => {
                vec![Command::FetchMeaning(next_word)]
            }
            Ok(_) => Vec::new(),
            Err(e) => {
                tracing::error!("Failed to apply input: {}", e);
                Vec::new()
            }
        }
    }

    fn handle_tick(&mut self, elapsed: f64) -> Vec<Command> {
        if self.screen != Screen::Playing {
            return Vec::new();
        }
        let Some(session) = self.session.as_mut() else {
            return vec![Command::StopTicker];
        };

        match session.tick(elapsed) {
            TickOutcome::Running => Vec::new(),
            TickOutcome::GameOver(entry) => {
                self.screen = Screen::GameOver;
                self.celebrating = self.celebration.take();
                vec![Command::StopTicker, Command::SaveScore(entry)]
            }
            TickOutcome::Finished => vec![Command::StopTicker],
        }
    }

    fn handle_game_over_key(&mut self, key: KeyEvent) -> Vec<Command> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('r') => self.play_again(),
            KeyCode::Char('h') => self.go_home(),
            KeyCode::Char('s') => {
                let filter = self
                    .session
                    .as_ref()
                    .map(|s| ScoreboardFilter {
                        difficulty: Some(s.state.difficulty),
                        duration: Some(s.duration_seconds),
                    })
                    .unwrap_or_default();
                self.open_scoreboard(filter)
            }
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            _ => Vec::new(),
        }
    }

    /// Same player and settings, fresh state
    fn play_again(&mut self) -> Vec<Command> {
        let Some(session) = self.session.as_mut() else {
            return self.go_home();
        };

        let (duration, difficulty) = (session.duration_seconds, session.state.difficulty);
        if let Err(e) = session.reset(duration, difficulty) {
            tracing::error!("Failed to reset session: {}", e);
            return self.go_home();
        }
        self.begin_countdown()
    }

    fn handle_scoreboard_key(&mut self, key: KeyEvent) -> Vec<Command> {
        match key.code {
            KeyCode::Char('d') => {
                self.scoreboard_filter.cycle_difficulty();
                vec![Command::LoadScores(self.scoreboard_filter)]
            }
            KeyCode::Char('t') => {
                self.scoreboard_filter.cycle_duration();
                vec![Command::LoadScores(self.scoreboard_filter)]
            }
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('h') => self.go_home(),
            KeyCode::Char('q') => self.quit(),
            _ => Vec::new(),
        }
    }

    fn open_scoreboard(&mut self, filter: ScoreboardFilter) -> Vec<Command> {
        self.scoreboard_filter = filter;
        self.scoreboard_rows.clear();
        self.screen = Screen::Scoreboard;
        vec![Command::LoadScores(filter)]
    }

    fn go_home(&mut self) -> Vec<Command> {
        self.screen = Screen::Home;
        self.home.focus = HomeField::Name;
        vec![Command::StopTicker, Command::StopCountdown]
    }

    fn quit(&mut self) -> Vec<Command> {
        self.screen = Screen::Quit;
        vec![Command::StopTicker, Command::StopCountdown]
    }
}

fn is_cycle_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Left | KeyCode::Right | KeyCode::Char(' '))
}

/// Key presses and resizes reach the app; pastes and key releases are dropped
pub fn map_terminal_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
        Event::Resize(..) => Some(AppEvent::Redraw),
        _ => None,
    }
}

/// Long-lived collaborators the driver loop runs commands against
pub struct Services {
    pub word_source: WordSource,
    pub scoreboard: Arc<Scoreboard>,
    pub preferences: Preferences,
}

struct Timers {
    ticker: TickSource,
    countdown: TickSource,
}

pub async fn run(config: Config, services: Services) -> anyhow::Result<()> {
    let player_name = services.preferences.player_name().await.unwrap_or_else(|e| {
        tracing::warn!("Failed to read player name: {}", e);
        game_persistence::repositories::DEFAULT_PLAYER_NAME.to_string()
    });
    let color_scheme = services.preferences.color_scheme().await.unwrap_or_default();

    let mut app = App::new(
        player_name,
        color_scheme,
        config.default_difficulty,
        config.default_duration_seconds,
    );

    let _guard = TerminalGuard::enter()?;
    let mut stdout = io::stdout();
    let mut keys = EventStream::new();
    let mut timers = Timers {
        ticker: TickSource::new(config.tick_interval),
        countdown: TickSource::new(Duration::from_secs(1)),
    };
    let mut spinner = tokio::time::interval(SPINNER_PERIOD);
    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();

    loop {
        ui::draw(&mut stdout, &app)?;
        stdout.flush()?;

        if app.should_quit() {
            break;
        }

        let event = tokio::select! {
            Some(Ok(terminal_event)) = keys.next() => match map_terminal_event(terminal_event) {
                Some(event) => event,
                None => continue,
            },
            elapsed = timers.ticker.next_tick() => AppEvent::Tick(elapsed),
            _ = timers.countdown.next_tick() => AppEvent::CountdownStep,
            Some(event) = rx.recv() => event,
            _ = spinner.tick() => AppEvent::Redraw,
        };

        for command in app.handle(event) {
            execute(command, &services, &mut timers, &tx).await;
        }
    }

    tracing::info!("Speed Typer exiting");
    Ok(())
}

async fn execute(
    command: Command,
    services: &Services,
    timers: &mut Timers,
    tx: &UnboundedSender<AppEvent>,
) {
    match command {
        Command::FetchWords => {
            let source = services.word_source.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let pool = source.load_pool().await;
                let _ = tx.send(AppEvent::WordsLoaded(pool));
            });
        }
        Command::FetchMeaning(word) => {
            let source = services.word_source.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let meaning = source.fetch_meaning(&word).await;
                let _ = tx.send(AppEvent::MeaningResolved { word, meaning });
            });
        }
        Command::StartTicker => timers.ticker.start(),
        Command::StopTicker => timers.ticker.stop(),
        Command::StartCountdown => timers.countdown.start(),
        Command::StopCountdown => timers.countdown.stop(),
        Command::SaveScore(entry) => {
            if let Err(e) = services.scoreboard.save(entry).await {
                tracing::error!("Failed to save score: {}", e);
            }
        }
        Command::SavePreferences {
            player_name,
            color_scheme,
        } => {
            if let Err(e) = services.preferences.set_player_name(&player_name).await {
                tracing::warn!("Failed to save player name: {}", e);
            }
            if let Err(e) = services.preferences.set_color_scheme(color_scheme).await {
                tracing::warn!("Failed to save color scheme: {}", e);
            }
        }
        Command::LoadScores(filter) => {
            let rows = services
                .scoreboard
                .ranked(filter.difficulty, filter.duration)
                .await
                .unwrap_or_else(|e| {
                    tracing::warn!("Failed to load scores: {}", e);
                    Vec::new()
                });
            let _ = tx.send(AppEvent::ScoresLoaded(rows));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) -> Vec<Command> {
        text.chars()
            .flat_map(|c| app.handle(key(KeyCode::Char(c))))
            .collect()
    }

    fn new_app() -> App {
        App::new("Ada".to_string(), ColorScheme::Dark, Difficulty::Normal, 30)
    }

    /// Drive an app from home to the playing screen with a one-word pool
    fn playing_app(word: &str) -> App {
        let mut app = new_app();
        app.handle(key(KeyCode::Enter));
        app.handle(AppEvent::WordsLoaded(WordPool::from_words([word])));
        for _ in 0..COUNTDOWN_SECONDS {
            app.handle(AppEvent::CountdownStep);
        }
        assert_eq!(app.screen(), Screen::Playing);
        app
    }

    #[test]
    fn test_enter_without_words_fetches_them() {
        let mut app = new_app();
        let commands = app.handle(key(KeyCode::Enter));

        assert_eq!(app.screen(), Screen::Loading);
        assert_eq!(
            commands,
            vec![
                Command::SavePreferences {
                    player_name: "Ada".to_string(),
                    color_scheme: ColorScheme::Dark,
                },
                Command::FetchWords,
            ]
        );
    }

    #[test]
    fn test_blank_name_blocks_start() {
        let mut app = App::new(String::new(), ColorScheme::Dark, Difficulty::Normal, 30);
        let commands = app.handle(key(KeyCode::Enter));

        assert!(commands.is_empty());
        assert_eq!(app.screen(), Screen::Home);
        assert!(app.home().error.is_some());
    }

    #[test]
    fn test_name_editing() {
        let mut app = App::new(String::new(), ColorScheme::Dark, Difficulty::Normal, 30);
        type_text(&mut app, "Bobb");
        app.handle(key(KeyCode::Backspace));
        assert_eq!(app.home().name, "Bob");
    }

    #[test]
    fn test_home_selectors_cycle() {
        let mut app = new_app();
        app.handle(key(KeyCode::Tab));
        app.handle(key(KeyCode::Right));
        assert_eq!(app.home().difficulty, Difficulty::Hard);

        app.handle(key(KeyCode::Tab));
        app.handle(key(KeyCode::Char(' ')));
        assert_eq!(app.home().duration_seconds, 60);

        app.handle(key(KeyCode::Tab));
        app.handle(key(KeyCode::Right));
        assert_eq!(app.home().color_scheme, ColorScheme::System);
    }

    #[test]
    fn test_countdown_then_playing() {
        let mut app = new_app();
        app.handle(key(KeyCode::Enter));
        let commands = app.handle(AppEvent::WordsLoaded(WordPool::from_words(["hook"])));

        assert_eq!(app.screen(), Screen::Countdown);
        assert_eq!(app.countdown(), COUNTDOWN_SECONDS);
        assert!(commands.contains(&Command::StartCountdown));

        app.handle(AppEvent::CountdownStep);
        app.handle(AppEvent::CountdownStep);
        assert_eq!(app.screen(), Screen::Countdown);

        let commands = app.handle(AppEvent::CountdownStep);
        assert_eq!(app.screen(), Screen::Playing);
        assert_eq!(
            commands,
            vec![
                Command::StopCountdown,
                Command::StartTicker,
                Command::FetchMeaning("hook".to_string()),
            ]
        );
    }

    #[test]
    fn test_typing_word_requests_next_meaning() {
        let mut app = playing_app("hook");
        let commands = type_text(&mut app, "hook");

        assert_eq!(commands, vec![Command::FetchMeaning("hook".to_string())]);
        assert_eq!(app.session().unwrap().state.score, 1);
    }

    #[test]
    fn test_backspace_edits_input() {
        let mut app = playing_app("hook");
        type_text(&mut app, "hx");
        app.handle(key(KeyCode::Backspace));
        assert_eq!(app.session().unwrap().state.input, "h");
    }

    #[test]
    fn test_ticks_ignored_outside_play() {
        let mut app = new_app();
        assert!(app.handle(AppEvent::Tick(0.1)).is_empty());
    }

    #[test]
    fn test_game_over_saves_score_and_celebrates_once() {
        let mut app = playing_app("hook");
        type_text(&mut app, "hook");

        let mut saved = Vec::new();
        for _ in 0..2000 {
            for command in app.handle(AppEvent::Tick(0.1)) {
                if let Command::SaveScore(entry) = command {
                    saved.push(entry);
                }
            }
        }

        assert_eq!(app.screen(), Screen::GameOver);
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].player_name, "Ada");
        assert_eq!(saved[0].score, 1);
        assert!(app.celebrating());
        assert!(!app.celebration.take());
    }

    #[test]
    fn test_play_again_resets_state() {
        let mut app = playing_app("hook");
        type_text(&mut app, "hook");
        app.handle(AppEvent::Tick(500.0));
        assert_eq!(app.screen(), Screen::GameOver);

        let commands = app.handle(key(KeyCode::Enter));
        assert_eq!(app.screen(), Screen::Countdown);
        assert_eq!(commands, vec![Command::StopTicker, Command::StartCountdown]);
        assert!(!app.celebrating());

        let session = app.session().unwrap();
        assert_eq!(session.state.score, 0);
        assert_eq!(session.player_name, "Ada");
        assert!(!session.state.game_over);
    }

    #[test]
    fn test_meaning_resolution_reaches_session() {
        let mut app = playing_app("hook");
        type_text(&mut app, "hook");
        app.handle(AppEvent::MeaningResolved {
            word: "hook".to_string(),
            meaning: "A bent rod".to_string(),
        });

        let typed = &app.session().unwrap().state.typed_words[0];
        assert_eq!(typed.meaning.as_deref(), Some("A bent rod"));
    }

    #[test]
    fn test_scoreboard_from_game_over_uses_session_filter() {
        let mut app = playing_app("hook");
        app.handle(AppEvent::Tick(500.0));

        let commands = app.handle(key(KeyCode::Char('s')));
        assert_eq!(app.screen(), Screen::Scoreboard);
        assert_eq!(
            commands,
            vec![Command::LoadScores(ScoreboardFilter {
                difficulty: Some(Difficulty::Normal),
                duration: Some(30),
            })]
        );
    }

    #[test]
    fn test_scoreboard_filter_cycles() {
        let mut filter = ScoreboardFilter::default();
        filter.cycle_difficulty();
        assert_eq!(filter.difficulty, Some(Difficulty::Easy));
        filter.cycle_difficulty();
        filter.cycle_difficulty();
        filter.cycle_difficulty();
        assert_eq!(filter.difficulty, None);

        filter.cycle_duration();
        assert_eq!(filter.duration, Some(30));
        filter.cycle_duration();
        filter.cycle_duration();
        assert_eq!(filter.duration, Some(120));
        filter.cycle_duration();
        assert_eq!(filter.duration, None);
    }

    #[test]
    fn test_escape_from_play_stops_ticker() {
        let mut app = playing_app("hook");
        let commands = app.handle(key(KeyCode::Esc));

        assert_eq!(app.screen(), Screen::Home);
        assert!(commands.contains(&Command::StopTicker));
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let mut app = playing_app("hook");
        app.handle(AppEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.should_quit());
    }

    #[test]
    fn test_paste_is_dropped() {
        assert!(map_terminal_event(Event::Paste("hook".to_string())).is_none());
    }

    #[test]
    fn test_only_key_presses_reach_the_app() {
        let press = KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE);
        assert!(matches!(
            map_terminal_event(Event::Key(press)),
            Some(AppEvent::Key(k)) if k.code == KeyCode::Char('h')
        ));

        let mut release = press;
        release.kind = KeyEventKind::Release;
        assert!(map_terminal_event(Event::Key(release)).is_none());

        assert!(matches!(
            map_terminal_event(Event::Resize(80, 24)),
            Some(AppEvent::Redraw)
        ));
    }

    #[test]
    fn test_spinner_only_advances_while_loading() {
        let mut app = new_app();
        app.handle(AppEvent::Redraw);
        assert_eq!(app.spinner_frame(), 0);

        app.handle(key(KeyCode::Enter));
        app.handle(AppEvent::Redraw);
        assert_eq!(app.spinner_frame(), 1);
    }
}
