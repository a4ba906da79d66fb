use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::MIN_CELL_COUNT;
use crate::food::Food;
use crate::grid::Heading;
use crate::snake::Snake;

/// High-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// What ended the last run.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Notable things that happened during one tick, in order.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameEvent {
    FoodEaten { score: u32 },
    GameOver { reason: DeathReason },
}

/// Complete mutable state for one session.
#[derive(Debug, Clone)]
pub struct Game {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    cell_count: u16,
    rng: StdRng,
}

impl Game {
    /// Creates a session on a `cell_count` square grid seeded from OS entropy.
    ///
    /// # Panics
    ///
    /// Panics when `cell_count` is below [`MIN_CELL_COUNT`], the smallest
    /// grid holding the starting body.
    #[must_use]
    pub fn new(cell_count: u16) -> Self {
        Self::with_rng(cell_count, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    ///
    /// # Panics
    ///
    /// Panics when `cell_count` is below [`MIN_CELL_COUNT`].
    #[must_use]
    pub fn new_with_seed(cell_count: u16, seed: u64) -> Self {
        Self::with_rng(cell_count, StdRng::seed_from_u64(seed))
    }

    fn with_rng(cell_count: u16, mut rng: StdRng) -> Self {
        assert!(
            cell_count >= MIN_CELL_COUNT,
            "cell count {cell_count} is below the minimum of {MIN_CELL_COUNT}"
        );

        let snake = Snake::new();
        let food = Food::spawn(&mut rng, cell_count, snake.body())
            .expect("a grid of at least MIN_CELL_COUNT cells has room beside the starting body");

        Self {
            snake,
            food,
            score: 0,
            status: GameStatus::Running,
            death_reason: None,
            cell_count,
            rng,
        }
    }

    #[must_use]
    pub fn cell_count(&self) -> u16 {
        self.cell_count
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// Advances one logic tick: move, then food, edge and self checks.
    ///
    /// Does nothing while the game-over prompt is showing. A game-over ends
    /// the tick, so later checks never see the freshly reset snake.
    pub fn update(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if !self.is_running() {
            return events;
        }

        self.snake.update();

        if let Some(event) = self.check_food_collision() {
            events.push(event);
        }

        let reason = if self.check_edge_collision() {
            Some(DeathReason::WallCollision)
        } else if self.check_self_collision() {
            Some(DeathReason::SelfCollision)
        } else {
            None
        };

        if let Some(reason) = reason {
            self.game_over(reason);
            events.push(GameEvent::GameOver { reason });
        }

        events
    }

    /// Applies a heading request unless it reverses the current heading.
    ///
    /// Returns whether the heading was accepted.
    pub fn steer(&mut self, heading: Heading) -> bool {
        if heading == self.snake.heading().opposite() {
            return false;
        }

        self.snake.set_heading(heading);
        true
    }

    /// Leaves the game-over prompt. Returns false when already running.
    pub fn restart(&mut self) -> bool {
        if self.is_running() {
            return false;
        }

        info!("restarting");
        self.status = GameStatus::Running;
        self.death_reason = None;
        true
    }

    fn check_food_collision(&mut self) -> Option<GameEvent> {
        if self.snake.head() != self.food.position {
            return None;
        }

        let _ = self
            .food
            .relocate(&mut self.rng, self.cell_count, self.snake.body());
        self.snake.grow();
        self.score += 1;
        debug!("food eaten, score {}", self.score);

        Some(GameEvent::FoodEaten { score: self.score })
    }

    fn check_edge_collision(&self) -> bool {
        !self.snake.head().is_within(self.cell_count)
    }

    fn check_self_collision(&self) -> bool {
        self.snake.head_overlaps_body()
    }

    fn game_over(&mut self, reason: DeathReason) {
        info!("game over ({reason:?}) with score {}", self.score);

        self.snake.reset();
        let _ = self
            .food
            .relocate(&mut self.rng, self.cell_count, self.snake.body());
        self.score = 0;
        self.status = GameStatus::GameOver;
        self.death_reason = Some(reason);
    }
}
