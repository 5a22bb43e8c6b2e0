use std::collections::VecDeque;

use rand::Rng;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns the center cell of `bounds`.
    #[must_use]
    pub fn center_of(bounds: GridSize) -> Self {
        Self {
            x: i32::from(bounds.width / 2),
            y: i32::from(bounds.height / 2),
        }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns this position wrapped into bounds on both axes.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: wrap_axis(self.x, i32::from(bounds.width)),
            y: wrap_axis(self.y, i32::from(bounds.height)),
        }
    }

    /// Returns the neighboring cell one step in `direction`, wrapped around
    /// the field edges: off the left edge re-enters on the right, off the
    /// top edge on the bottom, and so on.
    #[must_use]
    pub fn step(self, direction: Direction, bounds: GridSize) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
        .wrapped(bounds)
    }
}

// True mathematical modulo: the result is never negative, unlike `%`.
fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    let wrapped = value % upper_bound;
    if wrapped < 0 {
        wrapped + upper_bound
    } else {
        wrapped
    }
}

/// Result of one movement step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Advance {
    /// The snake moved one cell forward.
    Moved,
    /// The next head cell hit the body; the snake has been reset in place.
    SelfCollided,
}

/// Mutable snake state: body segments, heading, and growth bookkeeping.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending_direction: Option<Direction>,
    target_len: usize,
    last_vacated: Option<Position>,
}

impl Snake {
    /// Creates a one-cell snake at `start` with the provided direction.
    #[must_use]
    pub fn new(start: Position, direction: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self {
            body,
            direction,
            pending_direction: None,
            target_len: 1,
            last_vacated: None,
        }
    }

    /// Creates a snake from explicit body segments (front is head). The
    /// target length matches the segment count, so the snake holds its size.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        let target_len = segments.len().max(1);

        Self {
            body: VecDeque::from(segments),
            direction,
            pending_direction: None,
            target_len,
            last_vacated: None,
        }
    }

    /// Requests a direction change for the next tick; the last request
    /// before the tick wins.
    ///
    /// A request for the exact opposite of the current direction is dropped
    /// silently: reversing in place would fold the head into the neck.
    pub fn queue_direction(&mut self, direction: Direction) {
        if direction == self.direction.opposite() {
            return;
        }

        self.pending_direction = Some(direction);
    }

    /// Consumes the pending direction request, if any. Called once at the
    /// start of each tick, before movement; calling again without a new
    /// request changes nothing.
    pub fn apply_pending_direction(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
    }

    /// Moves the snake one cell in its current direction.
    ///
    /// When the next head cell lands on the body past the neck, the snake
    /// does not move: it resets to a single segment at the grid center and
    /// reports [`Advance::SelfCollided`]. The first two segments are
    /// excluded from the check because the neck cell is vacated by the same
    /// move that would otherwise hit it.
    pub fn advance<R: Rng + ?Sized>(&mut self, bounds: GridSize, rng: &mut R) -> Advance {
        debug_assert!(bounds.width > 0 && bounds.height > 0);

        let next_head = self.head().step(self.direction, bounds);
        if self.body.iter().skip(2).any(|segment| *segment == next_head) {
            self.reset(bounds, rng);
            return Advance::SelfCollided;
        }

        self.body.push_front(next_head);
        if self.body.len() > self.target_len {
            self.last_vacated = self.body.pop_back();
        } else {
            self.last_vacated = None;
        }

        Advance::Moved
    }

    /// Queues growth: the tail survives the next call to [`Self::advance`].
    pub fn grow(&mut self) {
        self.target_len += 1;
    }

    /// Resets to a single segment at the grid center, heading in a
    /// uniformly random direction, with all queued state cleared.
    pub fn reset<R: Rng + ?Sized>(&mut self, bounds: GridSize, rng: &mut R) {
        self.body.clear();
        self.body.push_front(Position::center_of(bounds));
        self.direction = match rng.gen_range(0..4) {
            0 => Direction::Up,
            1 => Direction::Down,
            2 => Direction::Left,
            _ => Direction::Right,
        };
        self.pending_direction = None;
        self.target_len = 1;
        self.last_vacated = None;
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the tail cell dropped by the most recent move, or `None`
    /// while the snake is growing into its target length. Renderers that
    /// erase incrementally use this to know which cell to clear.
    #[must_use]
    pub fn last_vacated(&self) -> Option<Position> {
        self.last_vacated
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Advance, Position, Snake};

    const BOUNDS: GridSize = GridSize {
        width: 10,
        height: 8,
    };

    #[test]
    fn position_wrapping_keeps_coordinates_inside_bounds() {
        let wrapped_left = Position { x: -1, y: 3 }.wrapped(BOUNDS);
        let wrapped_bottom = Position { x: 4, y: 8 }.wrapped(BOUNDS);

        assert_eq!(wrapped_left, Position { x: 9, y: 3 });
        assert_eq!(wrapped_bottom, Position { x: 4, y: 0 });
    }

    #[test]
    fn step_then_opposite_step_returns_to_start() {
        // Exercised at a corner so every direction crosses an edge.
        let corner = Position { x: 0, y: 0 };

        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let there = corner.step(direction, BOUNDS);
            assert_eq!(there.step(direction.opposite(), BOUNDS), corner);
        }
    }

    #[test]
    fn step_wraps_around_both_axes() {
        let rightmost = Position { x: 9, y: 3 };
        assert_eq!(
            rightmost.step(Direction::Right, BOUNDS),
            Position { x: 0, y: 3 }
        );

        let top = Position { x: 4, y: 0 };
        assert_eq!(top.step(Direction::Up, BOUNDS), Position { x: 4, y: 7 });
    }

    #[test]
    fn snake_moves_one_cell_per_tick() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);

        assert_eq!(snake.advance(BOUNDS, &mut rng), Advance::Moved);

        assert_eq!(snake.head(), Position { x: 6, y: 5 });
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.last_vacated(), Some(Position { x: 5, y: 5 }));
    }

    #[test]
    fn growth_is_delayed_exactly_one_tick() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);

        snake.grow();
        snake.advance(BOUNDS, &mut rng);
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.last_vacated(), None);

        snake.advance(BOUNDS, &mut rng);
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.last_vacated(), Some(Position { x: 5, y: 5 }));
    }

    #[test]
    fn queued_reverse_direction_is_dropped() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);

        snake.queue_direction(Direction::Left);
        snake.apply_pending_direction();

        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn last_queued_direction_wins() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);

        snake.queue_direction(Direction::Up);
        snake.queue_direction(Direction::Down);
        snake.apply_pending_direction();

        assert_eq!(snake.direction(), Direction::Down);
    }

    #[test]
    fn applying_pending_direction_twice_changes_nothing() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);

        snake.queue_direction(Direction::Up);
        snake.apply_pending_direction();
        snake.apply_pending_direction();

        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn hitting_the_body_past_the_neck_resets_the_snake() {
        let mut rng = StdRng::seed_from_u64(3);
        // Head at (2,2), moving down into (2,3) which is the fourth segment.
        let mut snake = Snake::from_segments(
            vec![
                Position { x: 2, y: 2 },
                Position { x: 1, y: 2 },
                Position { x: 1, y: 3 },
                Position { x: 2, y: 3 },
            ],
            Direction::Down,
        );

        assert_eq!(snake.advance(BOUNDS, &mut rng), Advance::SelfCollided);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position::center_of(BOUNDS));
        assert_eq!(snake.last_vacated(), None);
    }

    #[test]
    fn moving_onto_the_vacating_tail_cell_is_not_a_collision() {
        let mut rng = StdRng::seed_from_u64(4);
        // A two-segment snake stepping back onto its tail: the tail vacates
        // that cell on the same move, so this must not count as a collision.
        let mut snake = Snake::from_segments(
            vec![Position { x: 2, y: 2 }, Position { x: 1, y: 2 }],
            Direction::Left,
        );

        assert_eq!(snake.advance(BOUNDS, &mut rng), Advance::Moved);
        assert_eq!(snake.head(), Position { x: 1, y: 2 });
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.last_vacated(), Some(Position { x: 1, y: 2 }));
    }

    #[test]
    fn reset_clears_queued_state() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut snake = Snake::new(Position { x: 1, y: 1 }, Direction::Right);

        snake.grow();
        snake.queue_direction(Direction::Up);
        snake.reset(BOUNDS, &mut rng);

        let direction_after_reset = snake.direction();
        snake.apply_pending_direction();

        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position::center_of(BOUNDS));
        // The queued turn must not survive the reset.
        assert_eq!(snake.direction(), direction_after_reset);

        // Nor must the growth request.
        snake.advance(BOUNDS, &mut rng);
        assert_eq!(snake.len(), 1);
    }
}
