use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;
use tracing::info;

use crate::game::{GameConfig, GameEngine, GameState, TickScheduler};
use crate::input::{InputAdapter, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Render at ~30 FPS, independently of the tick period
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Interactive terminal session: wires input, ticks, engine and renderer
pub struct PlayMode {
    engine: GameEngine,
    scheduler: TickScheduler,
    input: InputAdapter,
    metrics: GameMetrics,
    renderer: Renderer,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(config: GameConfig) -> Self {
        Self::from_engine(GameEngine::new(config))
    }

    pub fn from_engine(engine: GameEngine) -> Self {
        let config = engine.config();
        let scheduler = TickScheduler::new(config.tick_interval());
        let input = InputAdapter::new(config.swipe_threshold);

        Self {
            engine,
            scheduler,
            input,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            should_quit: false,
        }
    }

    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut render_timer = interval(FRAME_INTERVAL);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => {
                            return Err(err).context("Failed to read terminal event");
                        }
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick; inert while no session is running
                _ = self.scheduler.tick() => {
                    self.on_tick();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, self.engine.state(), &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                info!(games_played = self.metrics.games_played, "quitting");
                break;
            }
        }

        self.scheduler.disarm();
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let session = self.engine.session();

        match event {
            Event::Key(key) => {
                // Only process key press events, not release
                if key.kind != KeyEventKind::Press {
                    return;
                }

                match self.input.on_key(key, session) {
                    // Start doubles as restart once a game is over
                    KeyAction::Start => {
                        if self.engine.start() || self.engine.restart() {
                            self.session_started();
                        }
                    }
                    KeyAction::Restart => {
                        if self.engine.restart() {
                            self.session_started();
                        }
                    }
                    KeyAction::Quit => self.should_quit = true,
                    KeyAction::Steer(_) | KeyAction::None => {}
                }
            }
            Event::Mouse(mouse) => self.input.on_mouse(mouse, session),
            _ => {}
        }
    }

    /// Apply one tick with whatever direction arrived since the last one
    fn on_tick(&mut self) {
        let pending = self.input.take_pending();
        let result = self.engine.tick(pending);

        if result.ended() {
            self.scheduler.disarm();
            self.metrics.on_game_over();
        }
    }

    fn session_started(&mut self) {
        self.input.clear();
        self.metrics.on_game_start();
        // arm() cancels any leftover tick before scheduling the new stream
        self.scheduler.arm();
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
