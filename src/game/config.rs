use serde::{Deserialize, Serialize};

use super::state::Position;

/// Configuration for the game
///
/// All distances are in screen pixels. The values are fixed for the game;
/// `Default` is the only configuration the binary uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the screen
    pub width: i32,
    /// Height of the screen
    pub height: i32,
    /// Side of one grid cell; the snake moves one cell per tick
    pub grid_size: i32,
    /// Side of the square drawn for each snake segment
    pub snake_size: i32,
    /// Game ticks per second
    pub ticks_per_second: u32,
    /// Length of one color phase in milliseconds
    pub color_change_interval_ms: u64,
    /// Head of the seed body
    pub initial_head: Position,
    /// Number of segments in the seed body
    pub initial_snake_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
            grid_size: 20,
            snake_size: 10,
            ticks_per_second: 10,
            color_change_interval_ms: 3000,
            initial_head: Position::new(200, 200),
            initial_snake_length: 3,
        }
    }
}

impl GameConfig {
    /// The playing field described by this configuration
    pub fn board(&self) -> Board {
        Board {
            width: self.width,
            height: self.height,
            cell: self.grid_size,
        }
    }

    /// Seed body: segments trail to the right of the head, one segment
    /// width apart.
    pub fn initial_body(&self) -> Vec<Position> {
        (0..self.initial_snake_length as i32)
            .map(|i| self.initial_head + Position::new(self.snake_size, 0) * i)
            .collect()
    }

    /// Validate the geometry
    ///
    /// # Returns
    ///
    /// `Ok(())` if the grid tiles the screen exactly, `Err(String)` with an
    /// error message otherwise.
    pub fn validate(&self) -> Result<(), String> {
        if self.grid_size <= 0 {
            return Err(format!(
                "grid_size must be positive, got {}",
                self.grid_size
            ));
        }

        if self.width <= 0 || self.height <= 0 {
            return Err(format!(
                "screen must be non-empty, got {}x{}",
                self.width, self.height
            ));
        }

        if self.width % self.grid_size != 0 || self.height % self.grid_size != 0 {
            return Err(format!(
                "grid_size {} must divide the screen {}x{}",
                self.grid_size, self.width, self.height
            ));
        }

        if self.snake_size <= 0 || self.snake_size > self.grid_size {
            return Err(format!(
                "snake_size must be in (0, {}], got {}",
                self.grid_size, self.snake_size
            ));
        }

        if self.ticks_per_second == 0 {
            return Err("ticks_per_second must be positive".to_string());
        }

        if self.color_change_interval_ms == 0 {
            return Err("color_change_interval_ms must be positive".to_string());
        }

        Ok(())
    }
}

/// Toroidal playing field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    pub width: i32,
    pub height: i32,
    pub cell: i32,
}

impl Board {
    /// Number of cells across
    pub fn columns(&self) -> i32 {
        self.width / self.cell
    }

    /// Number of cells down
    pub fn rows(&self) -> i32 {
        self.height / self.cell
    }

    /// Top-left corner of the cell at the given column and row
    pub fn cell_origin(&self, column: i32, row: i32) -> Position {
        Position::new(column * self.cell, row * self.cell)
    }

    /// Wrap a position around both edges; the result is never negative
    pub fn wrap(&self, pos: Position) -> Position {
        Position::new(pos.x.rem_euclid(self.width), pos.y.rem_euclid(self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.width, 600);
        assert_eq!(config.height, 400);
        assert_eq!(config.grid_size, 20);
        assert_eq!(config.snake_size, 10);
        assert_eq!(config.ticks_per_second, 10);
        assert_eq!(config.color_change_interval_ms, 3000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_initial_body() {
        let config = GameConfig::default();
        assert_eq!(
            config.initial_body(),
            vec![
                Position::new(200, 200),
                Position::new(210, 200),
                Position::new(220, 200)
            ]
        );
    }

    #[test]
    fn test_validate_rejects_uneven_grid() {
        let config = GameConfig {
            grid_size: 7,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            snake_size: 30,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            ticks_per_second: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_board_geometry() {
        let board = GameConfig::default().board();
        assert_eq!(board.columns(), 30);
        assert_eq!(board.rows(), 20);
        assert_eq!(board.cell_origin(3, 4), Position::new(60, 80));
    }

    #[test]
    fn test_board_wrap() {
        let board = GameConfig::default().board();
        assert_eq!(board.wrap(Position::new(600, 200)), Position::new(0, 200));
        assert_eq!(board.wrap(Position::new(-20, 200)), Position::new(580, 200));
        assert_eq!(board.wrap(Position::new(40, -20)), Position::new(40, 380));
        assert_eq!(board.wrap(Position::new(40, 400)), Position::new(40, 0));
    }
}
