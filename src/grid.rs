use std::ops::Add;

/// Discrete cell on the square play field.
///
/// Coordinates are signed so a head that has just stepped off the board
/// (`-1` or `cell_count`) is still representable for edge detection.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when both coordinates lie in `[0, cell_count)`.
    #[must_use]
    pub fn is_within(self, cell_count: u16) -> bool {
        let upper = i32::from(cell_count);
        (0..upper).contains(&self.x) && (0..upper).contains(&self.y)
    }
}

impl Add<Heading> for Cell {
    type Output = Cell;

    fn add(self, heading: Heading) -> Cell {
        let (dx, dy) = heading.delta();
        Cell {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Unit step applied to the head on every tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// Returns the `(dx, dy)` unit vector. Screen coordinates: `y` grows downward.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Returns true if `cell` equals any cell in `body`.
pub fn contains<'a, I>(cell: Cell, body: I) -> bool
where
    I: IntoIterator<Item = &'a Cell>,
{
    body.into_iter().any(|segment| *segment == cell)
}

/// Lists every in-bounds cell not present in `occupied`, row by row.
#[must_use]
pub fn free_cells<'a, I>(cell_count: u16, occupied: I) -> Vec<Cell>
where
    I: IntoIterator<Item = &'a Cell> + Clone,
{
    let upper = i32::from(cell_count);
    let mut cells = Vec::new();

    for y in 0..upper {
        for x in 0..upper {
            let cell = Cell { x, y };
            if !contains(cell, occupied.clone()) {
                cells.push(cell);
            }
        }
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::{Cell, Heading, contains, free_cells};

    #[test]
    fn heading_step_moves_one_cell() {
        let origin = Cell::new(6, 9);

        assert_eq!(origin + Heading::Right, Cell::new(7, 9));
        assert_eq!(origin + Heading::Left, Cell::new(5, 9));
        assert_eq!(origin + Heading::Down, Cell::new(6, 10));
        assert_eq!(origin + Heading::Up, Cell::new(6, 8));
    }

    #[test]
    fn opposite_heading_is_correct() {
        assert_eq!(Heading::Up.opposite(), Heading::Down);
        assert_eq!(Heading::Down.opposite(), Heading::Up);
        assert_eq!(Heading::Left.opposite(), Heading::Right);
        assert_eq!(Heading::Right.opposite(), Heading::Left);
    }

    #[test]
    fn bounds_exclude_minus_one_and_cell_count() {
        assert!(Cell::new(0, 0).is_within(25));
        assert!(Cell::new(24, 24).is_within(25));
        assert!(!Cell::new(-1, 3).is_within(25));
        assert!(!Cell::new(25, 3).is_within(25));
        assert!(!Cell::new(3, -1).is_within(25));
        assert!(!Cell::new(3, 25).is_within(25));
    }

    #[test]
    fn occupancy_uses_exact_equality() {
        let body = [Cell::new(6, 9), Cell::new(5, 9), Cell::new(4, 9)];

        assert!(contains(Cell::new(5, 9), &body));
        assert!(!contains(Cell::new(9, 5), &body));
        let empty: [Cell; 0] = [];
        assert!(!contains(Cell::new(0, 0), &empty));
    }

    #[test]
    fn free_cells_skips_occupied() {
        let occupied = [Cell::new(0, 0), Cell::new(1, 1)];

        let free = free_cells(2, &occupied);

        assert_eq!(free, vec![Cell::new(1, 0), Cell::new(0, 1)]);
    }
}
