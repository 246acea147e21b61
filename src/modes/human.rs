use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, interval, sleep};
use tracing::debug;

use crate::game::{GameConfig, GameEngine, GameEvent};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;
use crate::store::HighScoreStore;

pub struct HumanMode {
    engine: GameEngine,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    store: HighScoreStore,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, store: HighScoreStore) -> Result<Self> {
        let mut engine = GameEngine::new(config)?;
        let best = store
            .load()
            .with_context(|| format!("failed to load high score from {}", store.path().display()))?;
        engine.restore_high_score(best);

        Ok(Self {
            engine,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            store,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
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

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        // The game tick is a re-armed sleep rather than a fixed interval:
        // eating FastFood or SlowFood changes effective_speed() and the
        // next tick has to honor it.
        let tick = sleep(self.tick_duration());
        tokio::pin!(tick);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event)?;
                    }
                }

                // Game logic tick
                () = &mut tick => {
                    self.tick()?;
                    tick.as_mut().reset(Instant::now() + self.tick_duration());
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.engine, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.engine.effective_speed())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Turn(direction) => {
                    // The engine buffers the request and drops reversals.
                    self.engine.change_direction(direction);
                }
                KeyAction::Restart => {
                    self.restart_game();
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }

        Ok(())
    }

    fn tick(&mut self) -> Result<()> {
        if self.engine.is_game_over() {
            return Ok(());
        }

        let events = self.engine.update();
        self.handle_game_events(&events)
    }

    fn handle_game_events(&mut self, events: &[GameEvent]) -> Result<()> {
        for event in events {
            debug!(?event, "engine event");
            match event {
                GameEvent::GameOver => self.metrics.on_game_over(),
                GameEvent::HighScoreUpdated(best) => {
                    self.store.save(*best).context("failed to persist high score")?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn restart_game(&mut self) {
        self.engine.restart();
        self.metrics.on_game_start();
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
