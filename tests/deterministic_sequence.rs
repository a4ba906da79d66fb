use std::time::{Duration, Instant};

use classic_snake::cue::{self, Cue, CuePlayer};
use classic_snake::food::Food;
use classic_snake::game::{DeathReason, Game, GameEvent, GameStatus};
use classic_snake::grid::{Cell, Heading};
use classic_snake::snake::{INITIAL_BODY, Snake};
use classic_snake::tick::TickGate;

#[derive(Default)]
struct Recorded(Vec<Cue>);

impl CuePlayer for Recorded {
    fn play(&mut self, cue: Cue) {
        self.0.push(cue);
    }
}

fn body(game: &Game) -> Vec<Cell> {
    game.snake.segments().copied().collect()
}

#[test]
fn eat_grow_turn_and_hit_wall_then_restart() {
    let mut game = Game::new_with_seed(25, 42);
    let mut cues = Recorded::default();
    game.food = Food::new(Cell::new(7, 9));

    let events = game.update();
    cue::play_events(&mut cues, &events);
    assert_eq!(events, vec![GameEvent::FoodEaten { score: 1 }]);
    assert_eq!(body(&game), vec![Cell::new(7, 9), Cell::new(6, 9), Cell::new(5, 9)]);

    // Keep the relocated food out of the path for the rest of the run.
    game.food = Food::new(Cell::new(20, 20));

    game.update();
    assert_eq!(game.snake.len(), 4);
    assert_eq!(game.snake.head(), Cell::new(8, 9));

    assert!(!game.steer(Heading::Left));
    assert!(game.steer(Heading::Up));
    for expected_y in (0..9).rev() {
        assert!(game.update().is_empty());
        assert_eq!(game.snake.head(), Cell::new(8, expected_y));
    }
    assert_eq!(game.score, 1);

    let events = game.update();
    cue::play_events(&mut cues, &events);
    assert_eq!(
        events,
        vec![GameEvent::GameOver {
            reason: DeathReason::WallCollision
        }]
    );
    assert_eq!(game.status, GameStatus::GameOver);
    assert_eq!(game.score, 0);
    assert_eq!(body(&game), INITIAL_BODY);
    assert_eq!(cues.0, vec![Cue::Eat, Cue::Collision]);

    assert!(game.restart());
    assert_eq!(game.status, GameStatus::Running);
    game.food = Food::new(Cell::new(20, 20));
    game.update();
    assert_eq!(game.snake.head(), Cell::new(7, 9));
}

#[test]
fn leftward_snake_at_edge_resets() {
    let mut game = Game::new_with_seed(25, 9);
    game.snake = Snake::from_segments(
        vec![Cell::new(0, 9), Cell::new(1, 9), Cell::new(2, 9)],
        Heading::Left,
    );

    game.update();

    assert_eq!(game.status, GameStatus::GameOver);
    assert_eq!(game.score, 0);
    assert_eq!(body(&game), INITIAL_BODY);
}

#[test]
fn gated_loop_runs_five_ticks_per_second() {
    let mut game = Game::new_with_seed(25, 1);
    game.food = Food::new(Cell::new(20, 20));
    let start = Instant::now();
    let mut gate = TickGate::new(start);
    let interval = Duration::from_millis(200);

    for frame in 1..=60 {
        let now = start + Duration::from_millis(frame * 1000 / 60);
        if gate.should_tick(interval, now) {
            game.update();
        }
    }

    assert_eq!(game.snake.head(), Cell::new(11, 9));
}
