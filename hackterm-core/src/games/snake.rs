//! Snake on a fixed 19x19 grid.
//!
//! The engine is tick-driven and owns no clock: the frontend calls
//! [`SnakeGame::tick`] on its own cadence (about 150 ms). Steering is
//! buffered; the buffered direction is adopted at the next tick, and a
//! change that would reverse the axis of travel is rejected outright.

use std::collections::VecDeque;

use rand::Rng;

pub const GRID_WIDTH: i32 = 19;
pub const GRID_HEIGHT: i32 = 19;
pub const FOOD_SCORE: u32 = 10;

const START: Point = Point { x: 10, y: 10 };
// First food spawns a short dash to the right of the snake.
const FIRST_FOOD: Point = Point { x: 15, y: 10 };

/// Grid cell. Origin top-left, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopCause {
    WallCollision,
    SelfCollision,
    UserQuit,
}

impl StopCause {
    pub fn message(self) -> &'static str {
        match self {
            StopCause::WallCollision => "Game over! You hit the wall.",
            StopCause::SelfCollision => "Game over! You ran into yourself.",
            StopCause::UserQuit => "Game ended.",
        }
    }
}

/// What one tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No direction submitted yet; nothing moved.
    Idle,
    Moved,
    Ate,
    Stopped(StopCause),
}

/// One snake run. The session drops it on [`TickOutcome::Stopped`] or quit;
/// the engine itself never ends a run on its own clock.
#[derive(Debug)]
pub struct SnakeGame {
    /// Head first. Never empty.
    body: VecDeque<Point>,
    /// Direction of the last actual movement.
    direction: Option<Direction>,
    /// Buffered steering input, adopted at the next tick.
    pending: Option<Direction>,
    food: Point,
    score: u32,
}

impl SnakeGame {
    pub fn new() -> Self {
        Self {
            body: VecDeque::from([START]),
            direction: None,
            pending: None,
            food: FIRST_FOOD,
            score: 0,
        }
    }

    /// Buffers a direction change. Returns false (buffer unchanged) when the
    /// change would reverse either the last moved direction or the one
    /// already buffered, so an up-then-down inside one tick window cannot
    /// fold the snake onto itself.
    pub fn steer(&mut self, dir: Direction) -> bool {
        let reverses = |d: Option<Direction>| d.is_some_and(|d| d == dir.opposite());
        if reverses(self.direction) || reverses(self.pending) {
            return false;
        }
        self.pending = Some(dir);
        true
    }

    /// True once the first direction has been submitted. The tick loop may
    /// run earlier; it just does nothing.
    pub fn started(&self) -> bool {
        self.pending.is_some()
    }

    /// Advances one step: adopt the buffered direction, move, then handle
    /// walls, self-collision and food in that order.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> TickOutcome {
        let Some(dir) = self.pending else {
            return TickOutcome::Idle;
        };
        self.direction = Some(dir);

        let head = match self.body.front() {
            Some(p) => *p,
            None => return TickOutcome::Idle,
        };
        let (dx, dy) = dir.delta();
        let candidate = Point {
            x: head.x + dx,
            y: head.y + dy,
        };

        if candidate.x < 0
            || candidate.x >= GRID_WIDTH
            || candidate.y < 0
            || candidate.y >= GRID_HEIGHT
        {
            return TickOutcome::Stopped(StopCause::WallCollision);
        }
        // The tail cell counts even though it is about to vacate.
        if self.body.len() > 1 && self.body.contains(&candidate) {
            return TickOutcome::Stopped(StopCause::SelfCollision);
        }

        self.body.push_front(candidate);
        if candidate == self.food {
            self.score += FOOD_SCORE;
            self.food = self.place_food(rng);
            TickOutcome::Ate
        } else {
            self.body.pop_back();
            TickOutcome::Moved
        }
    }

    /// Uniform over free cells by rejection sampling. The board dwarfs any
    /// reachable body length, so this terminates fast.
    fn place_food<R: Rng>(&self, rng: &mut R) -> Point {
        loop {
            let candidate = Point {
                x: rng.gen_range(0..GRID_WIDTH),
                y: rng.gen_range(0..GRID_HEIGHT),
            };
            if !self.body.contains(&candidate) {
                return candidate;
            }
        }
    }

    pub fn body(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    pub fn head(&self) -> Point {
        self.body.front().copied().unwrap_or(START)
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}

impl Default for SnakeGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_tick_before_first_input_does_not_move() {
        let mut game = SnakeGame::new();
        assert_eq!(game.tick(&mut rng()), TickOutcome::Idle);
        assert_eq!(game.head(), Point { x: 10, y: 10 });
        assert_eq!(game.len(), 1);
    }

    #[test]
    fn test_first_move_goes_up() {
        let mut game = SnakeGame::new();
        assert!(game.steer(Direction::Up));
        assert_eq!(game.tick(&mut rng()), TickOutcome::Moved);
        assert_eq!(game.head(), Point { x: 10, y: 9 });
        assert_eq!(game.len(), 1);
    }

    #[test]
    fn test_reversal_rejected_within_one_tick_window() {
        let mut game = SnakeGame::new();
        assert!(game.steer(Direction::Up));
        // Down would fold straight back before the snake even moves.
        assert!(!game.steer(Direction::Down));
        game.tick(&mut rng());
        assert_eq!(game.head(), Point { x: 10, y: 9 });
    }

    #[test]
    fn test_reversal_rejected_against_travel() {
        let mut game = SnakeGame::new();
        game.steer(Direction::Right);
        game.tick(&mut rng());
        // Perpendicular turn buffers fine, but the second change may not
        // reverse the actual travel axis.
        assert!(game.steer(Direction::Up));
        assert!(!game.steer(Direction::Left));
        game.tick(&mut rng());
        assert_eq!(game.head(), Point { x: 11, y: 9 });
    }

    #[test]
    fn test_eating_grows_and_scores() {
        let mut game = SnakeGame::new();
        let mut rng = rng();
        game.steer(Direction::Right);
        for _ in 0..4 {
            assert_eq!(game.tick(&mut rng), TickOutcome::Moved);
        }
        // Fifth step lands on the first food at (15,10).
        assert_eq!(game.tick(&mut rng), TickOutcome::Ate);
        assert_eq!(game.score(), FOOD_SCORE);
        assert_eq!(game.len(), 2);

        let body: Vec<Point> = game.body().collect();
        assert!(!body.contains(&game.food()));
        assert!((0..GRID_WIDTH).contains(&game.food().x));
        assert!((0..GRID_HEIGHT).contains(&game.food().y));
    }

    #[test]
    fn test_wall_collision_stops_the_run() {
        let mut game = SnakeGame::new();
        let mut rng = rng();
        game.steer(Direction::Up);
        for _ in 0..10 {
            assert_eq!(game.tick(&mut rng), TickOutcome::Moved);
        }
        assert_eq!(game.head(), Point { x: 10, y: 0 });
        assert_eq!(
            game.tick(&mut rng),
            TickOutcome::Stopped(StopCause::WallCollision)
        );
    }

    #[test]
    fn test_self_collision_stops_the_run() {
        // A five-cell snake that just moved left, about to turn down into
        // its own body.
        let mut game = SnakeGame {
            body: VecDeque::from([
                Point { x: 10, y: 10 },
                Point { x: 11, y: 10 },
                Point { x: 11, y: 11 },
                Point { x: 10, y: 11 },
                Point { x: 9, y: 11 },
            ]),
            direction: Some(Direction::Left),
            pending: Some(Direction::Left),
            food: Point { x: 0, y: 0 },
            score: 0,
        };
        assert!(game.steer(Direction::Down));
        assert_eq!(
            game.tick(&mut rng()),
            TickOutcome::Stopped(StopCause::SelfCollision)
        );
    }

    #[test]
    fn test_single_cell_snake_cannot_collide_with_itself() {
        let mut game = SnakeGame::new();
        let mut rng = rng();
        game.steer(Direction::Right);
        game.tick(&mut rng);
        // Length 1: the only body cell is the head itself and the
        // self-collision clause must not apply.
        game.steer(Direction::Up);
        assert_eq!(game.tick(&mut rng), TickOutcome::Moved);
    }

    #[test]
    fn test_same_direction_steer_is_accepted() {
        let mut game = SnakeGame::new();
        game.steer(Direction::Right);
        game.tick(&mut rng());
        assert!(game.steer(Direction::Right));
    }
}
