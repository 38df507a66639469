use std::fmt;

/// A 0-indexed grid coordinate.
///
/// Cells order row-major, which gives every set of cells a deterministic iteration
/// order and keeps seeded runs reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Grid-step distance `|dr| + |dc|` between two cells.
    #[inline]
    pub fn manhattan_distance(&self, other: &Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The up, down, left and right cells, in that order.
    ///
    /// Cells that would fall below row or column zero are skipped; the upper bounds are
    /// the caller's concern because a bare cell knows nothing about the grid.
    pub fn orthogonal_neighbors(&self) -> impl Iterator<Item = Cell> {
        let up = self.row.checked_sub(1).map(|row| Cell::new(row, self.col));
        let down = Some(Cell::new(self.row + 1, self.col));
        let left = self.col.checked_sub(1).map(|col| Cell::new(self.row, col));
        let right = Some(Cell::new(self.row, self.col + 1));
        [up, down, left, right].into_iter().flatten()
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance_is_symmetric_sum_of_axis_offsets() {
        let a = Cell::new(1, 7);
        let b = Cell::new(4, 2);
        assert_eq!(a.manhattan_distance(&b), 8);
        assert_eq!(b.manhattan_distance(&a), 8);
        assert_eq!(a.manhattan_distance(&a), 0);
    }

    #[test]
    fn orthogonal_neighbors_follow_up_down_left_right_order() {
        let neighbors: Vec<_> = Cell::new(2, 3).orthogonal_neighbors().collect();
        assert_eq!(
            neighbors,
            vec![
                Cell::new(1, 3),
                Cell::new(3, 3),
                Cell::new(2, 2),
                Cell::new(2, 4)
            ]
        );
    }

    #[test]
    fn orthogonal_neighbors_skip_negative_coordinates() {
        let neighbors: Vec<_> = Cell::new(0, 0).orthogonal_neighbors().collect();
        assert_eq!(neighbors, vec![Cell::new(1, 0), Cell::new(0, 1)]);
    }

    #[test]
    fn cells_order_row_major() {
        assert!(Cell::new(0, 9) < Cell::new(1, 0));
        assert!(Cell::new(1, 0) < Cell::new(1, 1));
    }

    #[test]
    fn display_and_tuple_conversion() {
        let cell: Cell = (3, 5).into();
        assert_eq!(cell, Cell::new(3, 5));
        assert_eq!(cell.to_string(), "(3, 5)");
    }
}
