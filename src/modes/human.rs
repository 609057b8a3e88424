use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{Stderr, stderr};
use std::time::{Duration, Instant};
use tokio::time::{Interval, MissedTickBehavior, interval};
use tracing::{debug, info};

use crate::game::{Action, ColorPhase, GameConfig, GameEngine, GameState};
use crate::input::{InputAction, InputHandler};
use crate::render::{Renderer, ScreenMap, ToggleIcons};

pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    phase: ColorPhase,
    renderer: Renderer,
    input_handler: InputHandler,
    icons: ToggleIcons,
    clock: Instant,
    tick_interval: Duration,
    screen: ScreenMap,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, icons: ToggleIcons) -> Self {
        let renderer = Renderer::new(&config);
        let input_handler = InputHandler::new(renderer.toggle_rect());
        let phase = ColorPhase::new(
            Duration::from_millis(config.color_change_interval_ms),
            Duration::ZERO,
        );
        let tick_interval = Duration::from_secs(1) / config.ticks_per_second;
        // Nothing is clickable until the first frame is drawn
        let screen = renderer.screen_map(Rect::default());

        let mut engine = GameEngine::new(config);
        let state = engine.reset();

        Self {
            engine,
            state,
            phase,
            renderer,
            input_handler,
            icons,
            clock: Instant::now(),
            tick_interval,
            screen,
            should_quit: false,
        }
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

        info!(
            direction = ?self.state.snake.direction,
            food_x = self.state.food.position.x,
            food_y = self.state.food.position.y,
            "game started"
        );

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal);

        info!(score = self.state.score(), steps = self.state.steps, "game over");
        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut ticks = tick_timer(self.tick_interval);

        loop {
            tokio::select! {
                // Input is applied as it arrives, ahead of the next move
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Game tick: advance, then redraw
                _ = ticks.tick() => {
                    self.update_game(self.clock.elapsed());
                    terminal.draw(|frame| {
                        self.screen = self.renderer.render(frame, &self.state, &self.icons);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                info!("quit requested");
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let action = match event {
            // Only process key press events, not release
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.input_handler.handle_key_event(key)
            }
            Event::Mouse(mouse) => self.input_handler.handle_mouse_event(mouse, &self.screen),
            _ => InputAction::None,
        };

        match action {
            InputAction::GameAction(action) => self.apply(action),
            InputAction::Quit => self.should_quit = true,
            InputAction::None => {}
        }
    }

    fn apply(&mut self, action: Action) {
        self.engine.apply(&mut self.state, action);
        if action == Action::ToggleAutopilot {
            info!(auto_move = self.state.snake.auto_move, "Cheat-Bot toggled");
        }
    }

    /// One tick: recolor, move, eat
    fn update_game(&mut self, now: Duration) {
        let colors = self.phase.update(now);
        self.state.snake.color = colors.snake;
        self.state.food.color = colors.food;

        let info = self.engine.step(&mut self.state);
        if info.ate_food {
            debug!(score = self.state.score(), steps = self.state.steps, "score increased");
        }
    }

    fn cleanup_terminal(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) {
        if let Err(err) = disable_raw_mode() {
            tracing::error!(?err, "failed to disable raw mode");
        }
        if let Err(err) = execute!(
            terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        ) {
            tracing::error!(?err, "failed to leave alternate screen");
        }
        if let Err(err) = terminal.show_cursor() {
            tracing::error!(?err, "failed to show cursor");
        }
    }
}

/// Tick timer that waits a full period after a late tick instead of catching up
fn tick_timer(period: Duration) -> Interval {
    let mut timer = interval(period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    timer
}
