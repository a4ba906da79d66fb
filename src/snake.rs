use std::collections::VecDeque;

use crate::grid::{Cell, Heading};

/// Head-first body every new or reset snake starts with.
pub const INITIAL_BODY: [Cell; 3] = [Cell::new(6, 9), Cell::new(5, 9), Cell::new(4, 9)];

/// Heading every new or reset snake starts with.
pub const INITIAL_HEADING: Heading = Heading::Right;

/// Ordered body of grid cells (head at the front) plus movement state.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    heading: Heading,
    pending_growth: bool,
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

impl Snake {
    /// Creates the three-cell starting snake heading right.
    #[must_use]
    pub fn new() -> Self {
        Self {
            body: VecDeque::from(INITIAL_BODY),
            heading: INITIAL_HEADING,
            pending_growth: false,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, heading: Heading) -> Self {
        assert!(!segments.is_empty(), "snake body needs at least one segment");

        Self {
            body: VecDeque::from(segments),
            heading,
            pending_growth: false,
        }
    }

    /// Restores the starting body and heading and drops any pending growth.
    pub fn reset(&mut self) {
        self.body.clear();
        self.body.extend(INITIAL_BODY);
        self.heading = INITIAL_HEADING;
        self.pending_growth = false;
    }

    /// Stores the heading used by the next [`Snake::update`].
    ///
    /// No reversal check happens here; callers steer through
    /// [`crate::game::Game::steer`].
    pub fn set_heading(&mut self, heading: Heading) {
        self.heading = heading;
    }

    /// Advances one cell: pushes the new head, then drops the tail unless
    /// growth is pending.
    pub fn update(&mut self) {
        let next_head = self.head() + self.heading;
        self.body.push_front(next_head);

        if self.pending_growth {
            self.pending_growth = false;
        } else {
            let _ = self.body.pop_back();
        }
    }

    /// Keeps the tail on the next update, growing the body by one.
    pub fn grow(&mut self) {
        self.pending_growth = true;
    }

    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        crate::grid::contains(self.head(), self.body.iter().skip(1))
    }

    #[must_use]
    pub fn heading(&self) -> Heading {
        self.heading
    }

    #[must_use]
    pub fn has_pending_growth(&self) -> bool {
        self.pending_growth
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Body cells from head to tail.
    #[must_use]
    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::{Cell, Heading};

    use super::{INITIAL_BODY, Snake};

    #[test]
    fn new_snake_matches_initial_layout() {
        let snake = Snake::new();

        assert_eq!(snake.body().iter().copied().collect::<Vec<_>>(), INITIAL_BODY);
        assert_eq!(snake.heading(), Heading::Right);
        assert!(!snake.has_pending_growth());
    }

    #[test]
    fn update_moves_head_and_shifts_body() {
        let mut snake = Snake::new();

        snake.update();

        let body: Vec<Cell> = snake.segments().copied().collect();
        assert_eq!(body, vec![Cell::new(7, 9), Cell::new(6, 9), Cell::new(5, 9)]);
    }

    #[test]
    fn every_segment_follows_its_predecessor() {
        let mut snake = Snake::new();
        let headings = [Heading::Down, Heading::Down, Heading::Left, Heading::Up];

        for heading in headings {
            let before: Vec<Cell> = snake.segments().copied().collect();
            snake.set_heading(heading);
            snake.update();
            let after: Vec<Cell> = snake.segments().copied().collect();

            assert_eq!(after[0], before[0] + heading);
            for index in 1..after.len() {
                assert_eq!(after[index], before[index - 1]);
            }
        }
    }

    #[test]
    fn growth_adds_exactly_one_segment_once() {
        let mut snake = Snake::new();

        snake.grow();
        snake.update();
        assert_eq!(snake.len(), 4);
        assert!(!snake.has_pending_growth());

        snake.update();
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn growth_keeps_previous_tail() {
        let mut snake = Snake::new();

        snake.grow();
        snake.update();

        assert_eq!(snake.segments().last(), Some(&Cell::new(4, 9)));
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut snake = Snake::from_segments(vec![Cell::new(0, 0), Cell::new(0, 1)], Heading::Up);
        snake.grow();

        snake.reset();

        assert_eq!(snake.body().iter().copied().collect::<Vec<_>>(), INITIAL_BODY);
        assert_eq!(snake.heading(), Heading::Right);
        assert!(!snake.has_pending_growth());
    }

    #[test]
    fn head_overlap_ignores_the_head_itself() {
        let straight = Snake::new();
        assert!(!straight.head_overlaps_body());

        let looped = Snake::from_segments(
            vec![
                Cell::new(2, 2),
                Cell::new(3, 2),
                Cell::new(3, 3),
                Cell::new(2, 3),
                Cell::new(2, 2),
            ],
            Heading::Up,
        );
        assert!(looped.head_overlaps_body());
    }
}
