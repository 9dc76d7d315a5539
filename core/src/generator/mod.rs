use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Strategy for laying mines onto a freshly built board.
///
/// Implementations replace any previous layout and leave cell states alone.
pub trait MineGenerator {
    fn place(self, board: &mut Board, num_mines: CellCount) -> Result<()>;
}

/// Places `num_mines` mines uniformly at random, reproducibly for `seed`.
pub fn place_mines(board: &mut Board, num_mines: CellCount, seed: u64) -> Result<()> {
    RandomMineGenerator::new(seed).place(board, num_mines)
}

fn check_mine_count(board: &Board, num_mines: CellCount) -> Result<()> {
    if num_mines >= board.total_cells() {
        Err(GameError::InvalidMineCount)
    } else {
        Ok(())
    }
}
