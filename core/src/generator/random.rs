use super::*;

/// Purely random placement: every subset of `num_mines` cells is equally
/// likely. The starting cell is not protected, so the first reveal may hit a
/// mine.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MineGenerator for RandomMineGenerator {
    fn place(self, board: &mut Board, num_mines: CellCount) -> Result<()> {
        use rand::prelude::*;

        check_mine_count(board, num_mines)?;

        let total_cells = board.total_cells();
        let cols = board.cols();
        let mut rng = SmallRng::seed_from_u64(self.seed);

        board.clear_mines();
        let positions = rand::seq::index::sample(
            &mut rng,
            usize::from(total_cells),
            usize::from(num_mines),
        );
        for pos in positions {
            // sampled below `total_cells`, which fits
            board.set_mine(coords_from_linear(pos as CellCount, cols), true)?;
        }

        // double check mine count
        if board.mine_count() != num_mines {
            log::warn!(
                "Generated mine count mismatch, actual: {}, requested: {}",
                board.mine_count(),
                num_mines
            );
        }
        log::trace!("Placed {} mines with seed {}", num_mines, self.seed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mine_positions(board: &Board) -> Vec<Coord2> {
        board
            .iter_coords()
            .filter(|&coords| board.has_mine(coords).unwrap())
            .collect()
    }

    #[test]
    fn places_exact_count() {
        for (rows, cols, mines) in [(8, 8, 9), (16, 30, 72), (1, 2, 1), (5, 5, 0), (3, 3, 8)] {
            let mut board = Board::new(rows, cols).unwrap();
            RandomMineGenerator::new(7).place(&mut board, mines).unwrap();

            assert_eq!(board.mine_count(), mines);
            assert_eq!(mine_positions(&board).len(), usize::from(mines));
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let mut a = Board::new(16, 16).unwrap();
        let mut b = Board::new(16, 16).unwrap();
        place_mines(&mut a, 38, 1234).unwrap();
        place_mines(&mut b, 38, 1234).unwrap();

        assert_eq!(mine_positions(&a), mine_positions(&b));
    }

    #[test]
    fn different_seeds_vary_layout() {
        let layouts: Vec<_> = (0..8)
            .map(|seed| {
                let mut board = Board::new(16, 16).unwrap();
                place_mines(&mut board, 38, seed).unwrap();
                mine_positions(&board)
            })
            .collect();

        assert!(layouts.iter().any(|layout| layout != &layouts[0]));
    }

    #[test]
    fn replaces_previous_layout() {
        let mut board = Board::with_mines(4, 4, &[(0, 0), (1, 1), (2, 2), (3, 3)]).unwrap();
        place_mines(&mut board, 2, 99).unwrap();

        assert_eq!(board.mine_count(), 2);
    }

    #[test]
    fn rejects_full_board() {
        let mut board = Board::new(3, 3).unwrap();

        assert_eq!(
            RandomMineGenerator::new(1).place(&mut board, 9),
            Err(GameError::InvalidMineCount)
        );
        assert_eq!(board.mine_count(), 0);
    }
}
