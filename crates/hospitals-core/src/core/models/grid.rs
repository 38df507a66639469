use super::cell::Cell;
use super::placement::Placement;
use itertools::iproduct;
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum GridError {
    #[error("Grid dimensions must be positive and their product must fit in usize, got {height}x{width}")]
    InvalidDimensions { height: usize, width: usize },

    #[error("At least one hospital must be placed")]
    NoHospitals,

    #[error("House at {cell} lies outside the {height}x{width} grid")]
    HouseOutOfBounds {
        cell: Cell,
        height: usize,
        width: usize,
    },

    #[error("Cannot place {requested} hospitals: only {available} cells are free of houses")]
    TooManyHospitals { requested: usize, available: usize },
}

/// A bounded grid holding the fixed house set of a placement problem.
///
/// The dimensions and the hospital count are fixed at construction. Houses are added
/// during setup and never removed; the search itself only ever reads the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    hospital_count: usize,
    houses: BTreeSet<Cell>,
}

impl Grid {
    /// Creates an empty grid.
    ///
    /// # Arguments
    ///
    /// * `height` - Number of rows; must be positive.
    /// * `width` - Number of columns; must be positive.
    /// * `hospital_count` - Number of hospitals every placement holds; must be positive.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] for a zero dimension or a cell count that
    /// overflows `usize`, and
    /// [`GridError::NoHospitals`] for a zero hospital count. Checking that the hospitals
    /// fit among the free cells is deferred to [`Grid::validate`], since houses are added
    /// after construction.
    pub fn new(height: usize, width: usize, hospital_count: usize) -> Result<Self, GridError> {
        if height == 0 || width == 0 || height.checked_mul(width).is_none() {
            return Err(GridError::InvalidDimensions { height, width });
        }
        if hospital_count == 0 {
            return Err(GridError::NoHospitals);
        }
        Ok(Self {
            height,
            width,
            hospital_count,
            houses: BTreeSet::new(),
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn hospital_count(&self) -> usize {
        self.hospital_count
    }

    pub fn houses(&self) -> &BTreeSet<Cell> {
        &self.houses
    }

    /// Returns `true` if `cell` lies within the grid bounds.
    #[inline]
    pub fn contains(&self, cell: &Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    #[inline]
    pub fn is_house(&self, cell: &Cell) -> bool {
        self.houses.contains(cell)
    }

    /// Adds a house to the grid.
    ///
    /// # Arguments
    ///
    /// * `cell` - The location of the house.
    ///
    /// # Return
    ///
    /// Returns `Ok(true)` if the house is new, `Ok(false)` if a house already stood there.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::HouseOutOfBounds`] if `cell` is not on the grid.
    pub fn add_house(&mut self, cell: Cell) -> Result<bool, GridError> {
        if !self.contains(&cell) {
            return Err(GridError::HouseOutOfBounds {
                cell,
                height: self.height,
                width: self.width,
            });
        }
        Ok(self.houses.insert(cell))
    }

    /// Iterates every cell of the grid in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        iproduct!(0..self.height, 0..self.width).map(Cell::from)
    }

    /// Returns every cell not occupied by a house.
    pub fn free_cells(&self) -> BTreeSet<Cell> {
        self.cells().filter(|cell| !self.is_house(cell)).collect()
    }

    /// Returns every cell occupied neither by a house nor by a hospital of `placement`.
    pub fn available_cells(&self, placement: &Placement) -> BTreeSet<Cell> {
        self.cells()
            .filter(|cell| !self.is_house(cell) && !placement.contains(cell))
            .collect()
    }

    pub fn free_cell_count(&self) -> usize {
        self.height
            .checked_mul(self.width)
            .map_or(0, |cells| cells - self.houses.len())
    }

    /// Returns the cells a hospital at `cell` may step to.
    ///
    /// Candidates are the up, down, left and right cells that lie on the grid and are
    /// occupied neither by a house nor by any hospital of `placement`. Diagonal and
    /// multi-step moves are never produced, so a hospital has at most four candidates.
    pub fn neighbors(&self, cell: Cell, placement: &Placement) -> Vec<Cell> {
        cell.orthogonal_neighbors()
            .filter(|candidate| {
                self.contains(candidate)
                    && !self.is_house(candidate)
                    && !placement.contains(candidate)
            })
            .collect()
    }

    /// Checks that the configured hospitals fit among the free cells.
    pub fn validate(&self) -> Result<(), GridError> {
        let available = self.free_cell_count();
        if self.hospital_count > available {
            return Err(GridError::TooManyHospitals {
                requested: self.hospital_count,
                available,
            });
        }
        Ok(())
    }
}
