use rand::Rng;

use crate::config::GridSize;
use crate::snake::Position;

/// Food entity currently active on the field.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Creates food at `position`.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Creates food at a uniformly random cell.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Self {
        Self::at(random_cell(rng, bounds))
    }

    /// Moves the food to a uniformly random cell anywhere on the field.
    ///
    /// The draw does not exclude cells occupied by the snake, so food can
    /// land under a body segment; it becomes reachable again once the
    /// segment moves on.
    pub fn relocate<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: GridSize) {
        self.position = random_cell(rng, bounds);
    }
}

/// Draws a uniformly random cell within `bounds`.
#[must_use]
pub fn random_cell<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Position {
    Position {
        x: rng.gen_range(0..i32::from(bounds.width)),
        y: rng.gen_range(0..i32::from(bounds.height)),
    }
}
