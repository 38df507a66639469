use hospitals::core::models::grid::Grid;
use hospitals::core::models::placement::Placement;

const HOUSE: char = 'H';
const HOSPITAL: char = '+';
const EMPTY: char = '.';

/// Draws the grid as text, one line per row.
pub fn grid_map(grid: &Grid, placement: &Placement) -> String {
    let mut out = String::with_capacity(grid.height() * (grid.width() + 1));
    for cell in grid.cells() {
        if cell.col == 0 && cell.row > 0 {
            out.push('\n');
        }
        out.push(if grid.is_house(&cell) {
            HOUSE
        } else if placement.contains(&cell) {
            HOSPITAL
        } else {
            EMPTY
        });
    }
    out
}
