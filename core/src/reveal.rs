use serde::{Deserialize, Serialize};

use crate::*;

/// Result of revealing a single cell on a [`Board`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    /// The target holds a mine. Nothing was revealed.
    Mine,
    /// Coordinates that changed to revealed, in reveal order. Empty when the
    /// target was already revealed or is flagged.
    Cleared(Vec<Coord2>),
}

impl RevealOutcome {
    pub fn has_update(&self) -> bool {
        match self {
            Self::Mine => true,
            Self::Cleared(cells) => !cells.is_empty(),
        }
    }
}

/// Reveals `coords` and, when it has no adjacent mines, every hidden cell
/// connected to it through other zero cells.
///
/// The frontier is an explicit stack and cells are marked revealed as they are
/// pushed, so each cell is visited at most once and the work is bounded by the
/// board size. Flagged cells stop propagation and mines are never revealed.
pub fn reveal(board: &mut Board, coords: Coord2) -> Result<RevealOutcome> {
    let coords = board.validate_coords(coords)?;

    if !board.cell_state(coords)?.is_hidden() {
        return Ok(RevealOutcome::Cleared(Vec::new()));
    }
    if board.has_mine(coords)? {
        return Ok(RevealOutcome::Mine);
    }

    board.mark_revealed(coords)?;
    let mut revealed = vec![coords];
    let mut frontier = Vec::new();
    if board.adjacent_mine_count(coords)? == 0 {
        frontier.push(coords);
    }

    while let Some(visit_coords) = frontier.pop() {
        for pos in board.iter_neighbors(visit_coords) {
            if !board.cell_state(pos)?.is_hidden() || board.has_mine(pos)? {
                continue;
            }

            board.mark_revealed(pos)?;
            revealed.push(pos);

            if board.adjacent_mine_count(pos)? == 0 {
                frontier.push(pos);
            }
        }
    }

    log::trace!("Revealed {} cells from {:?}", revealed.len(), coords);
    Ok(RevealOutcome::Cleared(revealed))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn board(size: Coord2, mines: &[Coord2]) -> Board {
        Board::with_mines(size.0, size.1, mines).unwrap()
    }

    fn cleared(outcome: RevealOutcome) -> Vec<Coord2> {
        match outcome {
            RevealOutcome::Cleared(cells) => cells,
            RevealOutcome::Mine => panic!("unexpected mine"),
        }
    }

    #[test]
    fn numbered_cell_reveals_alone() {
        let mut board = board((3, 3), &[(0, 0)]);

        let cells = cleared(reveal(&mut board, (1, 1)).unwrap());

        assert_eq!(cells, vec![(1, 1)]);
        assert_eq!(board.cell_state((0, 1)).unwrap(), CellState::Hidden);
    }

    #[test]
    fn mine_hit_leaves_board_untouched() {
        let mut board = board((2, 2), &[(0, 0)]);
        let before = board.clone();

        assert_eq!(reveal(&mut board, (0, 0)).unwrap(), RevealOutcome::Mine);
        assert_eq!(board, before);
    }

    #[test]
    fn flood_fill_opens_zero_region_up_to_numbers() {
        let mut board = board((3, 3), &[(2, 2)]);

        let cells = cleared(reveal(&mut board, (0, 0)).unwrap());

        assert_eq!(cells.len(), 8);
        assert_eq!(board.cell_view((0, 0)).unwrap(), CellView::Revealed(0));
        assert_eq!(board.cell_view((1, 1)).unwrap(), CellView::Revealed(1));
        assert_eq!(board.cell_state((2, 2)).unwrap(), CellState::Hidden);
    }

    #[test]
    fn flood_fill_stops_at_numbered_boundary() {
        // column 2 is a wall of mines, column 1 is numbered
        let mines = [(0, 2), (1, 2), (2, 2), (3, 2)];
        let mut board = board((4, 5), &mines);

        let cells: BTreeSet<_> = cleared(reveal(&mut board, (0, 0)).unwrap())
            .into_iter()
            .collect();

        let expected: BTreeSet<Coord2> = (0..4).flat_map(|row| [(row, 0), (row, 1)]).collect();
        assert_eq!(cells, expected);
        for row in 0..4 {
            assert_eq!(board.cell_state((row, 3)).unwrap(), CellState::Hidden);
            assert_eq!(board.cell_state((row, 4)).unwrap(), CellState::Hidden);
        }
    }

    #[test]
    fn flood_fill_skips_flagged_cells() {
        let mut board = board((3, 3), &[]);
        board.set_flag((1, 1), true).unwrap();

        let cells = cleared(reveal(&mut board, (0, 0)).unwrap());

        assert_eq!(cells.len(), 8);
        assert!(!cells.contains(&(1, 1)));
        assert_eq!(board.cell_state((1, 1)).unwrap(), CellState::Flagged);
    }

    #[test]
    fn no_cell_is_reported_twice() {
        let mut board = board((20, 20), &[(10, 10), (3, 17)]);

        let cells = cleared(reveal(&mut board, (0, 0)).unwrap());
        let unique: BTreeSet<_> = cells.iter().copied().collect();

        assert_eq!(cells.len(), unique.len());
        assert_eq!(cells.len(), 398);
        assert!(!cells.contains(&(10, 10)));
        assert!(!cells.contains(&(3, 17)));
    }

    #[test]
    fn repeated_and_flagged_targets_are_no_ops() {
        let mut board = board((2, 2), &[(1, 1)]);
        board.set_flag((0, 1), true).unwrap();

        assert_eq!(reveal(&mut board, (0, 1)).unwrap(), RevealOutcome::Cleared(vec![]));
        assert_eq!(cleared(reveal(&mut board, (0, 0)).unwrap()), vec![(0, 0)]);
        assert_eq!(reveal(&mut board, (0, 0)).unwrap(), RevealOutcome::Cleared(vec![]));
        assert!(!RevealOutcome::Cleared(vec![]).has_update());
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        let mut board = board((2, 2), &[]);

        assert_eq!(reveal(&mut board, (2, 0)), Err(GameError::OutOfBounds));
    }

    #[test]
    fn large_open_board_does_not_recurse() {
        let mut board = board((255, 255), &[(254, 254)]);

        let cells = cleared(reveal(&mut board, (0, 0)).unwrap());

        assert_eq!(cells.len(), 255 * 255 - 1);
    }
}
