use ndarray::Array2;

use crate::*;

/// Grid of cells: where the mines are and what the player has uncovered.
///
/// Mines and visibility live in two parallel arrays indexed by `(row, col)`.
/// The board keeps `mine_count` in sync with the mine array so the session can
/// evaluate the win condition without rescanning.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    mines: Array2<bool>,
    cells: Array2<CellState>,
    mine_count: CellCount,
}

impl Board {
    pub fn new(rows: Coord, cols: Coord) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidDimensions);
        }
        let size: Coord2 = (rows, cols);
        Ok(Self {
            mines: Array2::default(size.to_nd_index()),
            cells: Array2::default(size.to_nd_index()),
            mine_count: 0,
        })
    }

    /// Builds a board with mines at exactly the given coordinates.
    pub fn with_mines(rows: Coord, cols: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let mut board = Self::new(rows, cols)?;
        for &coords in mine_coords {
            board.set_mine(coords, true)?;
        }
        Ok(board)
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.mines.dim();
        // dimensions come from `Coord` values in `new`
        (dim.0 as Coord, dim.1 as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn cell_state(&self, coords: Coord2) -> Result<CellState> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cells[coords.to_nd_index()])
    }

    pub fn has_mine(&self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        Ok(self.mines[coords.to_nd_index()])
    }

    /// Number of mines among the in-bounds neighbours, regardless of the
    /// cell's own state.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> Result<u8> {
        let coords = self.validate_coords(coords)?;
        Ok(self.count_adjacent_mines(coords))
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    pub fn set_mine(&mut self, coords: Coord2, value: bool) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        let slot = &mut self.mines[coords.to_nd_index()];
        match (*slot, value) {
            (false, true) => self.mine_count += 1,
            (true, false) => self.mine_count -= 1,
            _ => {}
        }
        *slot = value;
        Ok(())
    }

    /// Removes every mine, leaving cell states untouched.
    pub fn clear_mines(&mut self) {
        self.mines.fill(false);
        self.mine_count = 0;
    }

    /// Marks a hidden cell as revealed. Returns whether the state changed;
    /// revealed and flagged cells are left alone.
    pub(crate) fn mark_revealed(&mut self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_hidden() {
            *cell = CellState::Revealed;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Flags or unflags a cell. Flagging a revealed cell is a no-op. Returns
    /// whether the state changed.
    pub fn set_flag(&mut self, coords: Coord2, value: bool) -> Result<bool> {
        use CellState::*;

        let coords = self.validate_coords(coords)?;
        let cell = &mut self.cells[coords.to_nd_index()];
        Ok(match (*cell, value) {
            (Hidden, true) => {
                *cell = Flagged;
                true
            }
            (Flagged, false) => {
                *cell = Hidden;
                true
            }
            _ => false,
        })
    }

    /// Visible state of a cell for drawing.
    pub fn cell_view(&self, coords: Coord2) -> Result<CellView> {
        let coords = self.validate_coords(coords)?;
        Ok(self.view_at(coords))
    }

    pub(crate) fn view_at(&self, coords: Coord2) -> CellView {
        match self.cells[coords.to_nd_index()] {
            CellState::Hidden => CellView::Hidden,
            CellState::Flagged => CellView::Flagged,
            CellState::Revealed if self.mines[coords.to_nd_index()] => CellView::Mine,
            CellState::Revealed => CellView::Revealed(self.count_adjacent_mines(coords)),
        }
    }

    /// All cells in row-major order.
    pub fn iter_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (rows, cols) = self.size();
        (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    fn count_adjacent_mines(&self, coords: Coord2) -> u8 {
        // at most 8 neighbours
        self.iter_neighbors(coords)
            .filter(|&pos| self.mines[pos.to_nd_index()])
            .count() as u8
    }
}
