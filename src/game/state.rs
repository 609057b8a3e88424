use std::ops::{Add, Mul};

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::action::Direction;
use super::color::Rgb;
use super::config::Board;

/// A position on the screen, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Mul<i32> for Position {
    type Output = Position;

    fn mul(self, rhs: i32) -> Position {
        Position::new(self.x * rhs, self.y * rhs)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
    /// Food eaten so far; the body settles at `score + 1` segments
    pub score: u32,
    /// Cheat-Bot autopilot
    pub auto_move: bool,
    pub color: Rgb,
}

impl Snake {
    /// Create a snake from a seed body
    ///
    /// The body is taken as given, even when its length disagrees with the
    /// score; the first move trims it.
    pub fn new(body: Vec<Position>, direction: Direction) -> Self {
        Self {
            body,
            direction,
            score: 0,
            auto_move: false,
            color: Rgb::GREEN,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Turn, unless the turn would reverse the snake onto itself
    pub fn change_direction(&mut self, direction: Direction) {
        if !self.direction.is_opposite(direction) {
            self.direction = direction;
        }
    }

    pub fn grow(&mut self) {
        self.score += 1;
    }

    pub fn toggle_auto_move(&mut self) {
        self.auto_move = !self.auto_move;
    }

    /// Greedy autopilot: close the horizontal gap first, then the vertical.
    ///
    /// Sets the direction outright, so it may reverse the snake.
    pub fn steer_towards(&mut self, target: Position) {
        let head = self.head();
        if head.x < target.x {
            self.direction = Direction::Right;
        } else if head.x > target.x {
            self.direction = Direction::Left;
        } else if head.y < target.y {
            self.direction = Direction::Down;
        } else if head.y > target.y {
            self.direction = Direction::Up;
        }
    }

    /// Advance one cell, wrapping around the board edges
    ///
    /// With the autopilot on, the heading is first pointed at `food`. After
    /// the move the body holds exactly `score + 1` segments whenever it had
    /// more.
    pub fn move_snake(&mut self, board: &Board, food: Position) {
        if self.auto_move {
            self.steer_towards(food);
        }

        let new_head = board.wrap(self.head() + self.direction.delta() * board.cell);
        self.body.insert(0, new_head);
        self.body.truncate(self.score as usize + 1);
    }
}

/// A piece of food
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub position: Position,
    pub color: Rgb,
}

impl Food {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            color: Rgb::RED,
        }
    }

    /// Place food on a uniformly random cell; the snake body is not avoided
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, board: &Board) -> Self {
        let column = rng.gen_range(0..board.columns());
        let row = rng.gen_range(0..board.rows());
        Self::new(board.cell_origin(column, row))
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub board: Board,
    /// Ticks played
    pub steps: u64,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, food: Food, board: Board) -> Self {
        Self {
            snake,
            food,
            board,
            steps: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.snake.score
    }

    /// Whether the head sits on the food cell
    pub fn head_on_food(&self) -> bool {
        self.snake.head() == self.food.position
    }
}
