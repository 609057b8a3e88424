use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::debug;

use super::{
    action::{Action, Direction},
    config::{Board, GameConfig},
    state::{Food, GameState, Position, Snake},
};

/// Information about a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Head position after the move
    pub head: Position,
}

/// The game engine that handles all game logic
pub struct GameEngine<R: Rng = ThreadRng> {
    config: GameConfig,
    board: Board,
    rng: R,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine drawing from the given random source
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self {
            board: config.board(),
            config,
            rng,
        }
    }

    pub fn board(&self) -> Board {
        self.board
    }

    /// Start a fresh game: seed body, random heading, random food
    pub fn reset(&mut self) -> GameState {
        let direction = Direction::ALL[self.rng.gen_range(0..Direction::ALL.len())];
        let snake = Snake::new(self.config.initial_body(), direction);
        let food = Food::spawn(&mut self.rng, &self.board);

        GameState::new(snake, food, self.board)
    }

    /// Apply a player action between ticks
    pub fn apply(&self, state: &mut GameState, action: Action) {
        match action {
            Action::Turn(direction) => state.snake.change_direction(direction),
            Action::ToggleAutopilot => state.snake.toggle_auto_move(),
        }
    }

    /// Execute one step of the game
    ///
    /// Moves the snake, then checks the head against the food. On a hit the
    /// snake grows and the food is replaced by a freshly sampled one, which
    /// starts out red until the next recolor. Growth lengthens the body on the
    /// following move. Nothing ends the game: self-collision is not checked.
    pub fn step(&mut self, state: &mut GameState) -> StepInfo {
        state.snake.move_snake(&self.board, state.food.position);

        let ate_food = state.head_on_food();
        if ate_food {
            state.snake.grow();
            state.food = Food::spawn(&mut self.rng, &self.board);
            debug!(
                score = state.snake.score,
                food_x = state.food.position.x,
                food_y = state.food.position.y,
                "food eaten"
            );
        }

        state.steps += 1;

        StepInfo {
            ate_food,
            head: state.snake.head(),
        }
    }
}
