use log::warn;
use rand::Rng;

use crate::grid::{self, Cell};

/// Random samples tried before falling back to scanning every free cell.
pub const MAX_RANDOM_PLACEMENT_ATTEMPTS: usize = 1000;

/// The single food item on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Cell,
}

impl Food {
    #[must_use]
    pub fn new(position: Cell) -> Self {
        Self { position }
    }

    /// Places food on a random cell outside `occupied`, or `None` when the
    /// board has no free cell.
    #[must_use]
    pub fn spawn<'a, R, I>(rng: &mut R, cell_count: u16, occupied: I) -> Option<Self>
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = &'a Cell> + Clone,
    {
        random_free_cell(rng, cell_count, occupied).map(Self::new)
    }

    /// Moves the food to a uniformly random cell not in `occupied`.
    ///
    /// Returns `false` and keeps the current position when every cell is
    /// occupied.
    pub fn relocate<'a, R, I>(&mut self, rng: &mut R, cell_count: u16, occupied: I) -> bool
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = &'a Cell> + Clone,
    {
        match random_free_cell(rng, cell_count, occupied) {
            Some(cell) => {
                self.position = cell;
                true
            }
            None => {
                warn!("no free cell left for food on a {cell_count}x{cell_count} grid");
                false
            }
        }
    }
}

/// Samples random cells until one is free, then falls back to an
/// exhaustive scan once [`MAX_RANDOM_PLACEMENT_ATTEMPTS`] is spent.
#[must_use]
pub fn random_free_cell<'a, R, I>(rng: &mut R, cell_count: u16, occupied: I) -> Option<Cell>
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = &'a Cell> + Clone,
{
    if cell_count == 0 {
        return None;
    }

    let upper = i32::from(cell_count);
    for _ in 0..MAX_RANDOM_PLACEMENT_ATTEMPTS {
        let candidate = Cell::new(rng.gen_range(0..upper), rng.gen_range(0..upper));
        if !grid::contains(candidate, occupied.clone()) {
            return Some(candidate);
        }
    }

    let candidates = grid::free_cells(cell_count, occupied);
    if candidates.is_empty() {
        return None;
    }

    Some(candidates[rng.gen_range(0..candidates.len())])
}
