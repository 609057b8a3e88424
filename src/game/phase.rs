//! Wall-clock color animation
//!
//! Snake and food colors ping-pong between two endpoints each. The cycle is
//! driven by elapsed time, so it runs at the same pace whatever the tick rate.

use std::time::Duration;

use super::color::{Rgb, interpolate};

/// Colors produced for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseColors {
    pub snake: Rgb,
    pub food: Rgb,
}

/// Ping-pong color phase
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPhase {
    start_snake: Rgb,
    end_snake: Rgb,
    start_food: Rgb,
    end_food: Rgb,
    phase_start: Duration,
    duration: Duration,
}

impl ColorPhase {
    /// Green to red for the snake, red to blue for the food
    pub fn new(duration: Duration, now: Duration) -> Self {
        Self::with_colors((Rgb::GREEN, Rgb::RED), (Rgb::RED, Rgb::BLUE), duration, now)
    }

    pub fn with_colors(
        snake: (Rgb, Rgb),
        food: (Rgb, Rgb),
        duration: Duration,
        now: Duration,
    ) -> Self {
        Self {
            start_snake: snake.0,
            end_snake: snake.1,
            start_food: food.0,
            end_food: food.1,
            phase_start: now,
            duration,
        }
    }

    /// Advance to `now` and return the colors for this tick
    ///
    /// Once more than `duration` has passed since the phase began, both pairs
    /// swap ends and the phase restarts at `now`.
    pub fn update(&mut self, now: Duration) -> PhaseColors {
        if now.saturating_sub(self.phase_start) > self.duration {
            std::mem::swap(&mut self.start_snake, &mut self.end_snake);
            std::mem::swap(&mut self.start_food, &mut self.end_food);
            self.phase_start = now;
        }

        let factor = self.factor(now);
        PhaseColors {
            snake: interpolate(self.start_snake, self.end_snake, factor),
            food: interpolate(self.start_food, self.end_food, factor),
        }
    }

    /// Progress through the current phase; not clamped
    pub fn factor(&self, now: Duration) -> f64 {
        now.saturating_sub(self.phase_start).as_secs_f64() / self.duration.as_secs_f64()
    }

    pub fn phase_start(&self) -> Duration {
        self.phase_start
    }

    /// Current (start, end) pair for the snake
    pub fn snake_endpoints(&self) -> (Rgb, Rgb) {
        (self.start_snake, self.end_snake)
    }

    /// Current (start, end) pair for the food
    pub fn food_endpoints(&self) -> (Rgb, Rgb) {
        (self.start_food, self.end_food)
    }
}
