use super::*;

/// Places mines at explicit row-major linear positions.
///
/// Useful for replaying a known layout independently of the RNG algorithm.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMineGenerator {
    positions: Vec<CellCount>,
}

impl FixedMineGenerator {
    pub fn new(positions: impl IntoIterator<Item = CellCount>) -> Self {
        let mut positions: Vec<_> = positions.into_iter().collect();
        positions.sort_unstable();
        Self { positions }
    }

    pub fn positions(&self) -> &[CellCount] {
        &self.positions
    }
}

impl MineGenerator for FixedMineGenerator {
    /// `num_mines` must match the number of distinct positions given.
    fn place(self, board: &mut Board, num_mines: CellCount) -> Result<()> {
        check_mine_count(board, num_mines)?;

        let total_cells = board.total_cells();
        if self.positions.len() != usize::from(num_mines)
            || self.positions.windows(2).any(|pair| pair[0] == pair[1])
        {
            return Err(GameError::InvalidMineCount);
        }
        if self.positions.iter().any(|&pos| pos >= total_cells) {
            return Err(GameError::OutOfBounds);
        }

        let cols = board.cols();
        board.clear_mines();
        for pos in self.positions {
            board.set_mine(coords_from_linear(pos, cols), true)?;
        }
        Ok(())
    }
}
