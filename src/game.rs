use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::GridSize;
use crate::food::Food;
use crate::input::{Direction, GameInput};
use crate::snake::{Advance, Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    Paused,
}

/// Outcome of one simulation tick, reported to the rendering layer.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The snake moved into an empty cell, or the game is paused.
    Continuing,
    /// The head landed on the food; the snake grows and the food has moved.
    AteFood,
    /// The head hit the body; the field has been reset in place.
    SelfCollided,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub tick_count: u64,
    pub status: GameStatus,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a state seeded from OS entropy.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, mut rng: StdRng) -> Self {
        let snake = Snake::new(Position::center_of(bounds), Direction::Right);
        let food = Food::random(&mut rng, bounds);

        Self {
            snake,
            food,
            score: 0,
            tick_count: 0,
            status: GameStatus::Playing,
            bounds,
            rng,
        }
    }

    /// Returns the playing field dimensions.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Advances the simulation by one tick.
    ///
    /// Order per tick: consume the queued direction, move the snake, then
    /// resolve what the new head landed on. A paused state does not advance.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Playing {
            return TickOutcome::Continuing;
        }

        self.tick_count += 1;
        self.snake.apply_pending_direction();

        if self.snake.advance(self.bounds, &mut self.rng) == Advance::SelfCollided {
            self.score = 0;
            return TickOutcome::SelfCollided;
        }

        if self.snake.head() == self.food.position {
            self.score += 1;
            self.snake.grow();
            self.food.relocate(&mut self.rng, self.bounds);
            return TickOutcome::AteFood;
        }

        TickOutcome::Continuing
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                if self.status == GameStatus::Playing {
                    self.snake.queue_direction(direction);
                }
            }
            GameInput::Pause => {
                self.status = match self.status {
                    GameStatus::Playing => GameStatus::Paused,
                    GameStatus::Paused => GameStatus::Playing,
                };
            }
            GameInput::Quit | GameInput::Confirm => {}
        }
    }

    /// Returns true while the initial start popup should be shown.
    #[must_use]
    pub fn is_start_screen(&self) -> bool {
        self.status == GameStatus::Paused && self.tick_count == 0
    }
}
