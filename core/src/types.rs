/// Single coordinate axis used for row/column counts and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Maps a row-major linear position onto `(row, col)` for a grid `cols` wide.
pub const fn coords_from_linear(pos: CellCount, cols: Coord) -> Coord2 {
    let cols = cols as CellCount;
    ((pos / cols) as Coord, (pos % cols) as Coord)
}

pub const fn linear_from_coords((row, col): Coord2, cols: Coord) -> CellCount {
    (row as CellCount) * (cols as CellCount) + (col as CellCount)
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (rows, cols) = bounds;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= rows {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= cols {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterates over the up-to-8 in-bounds neighbours of a cell.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub(crate) fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbors(center: Coord2, bounds: Coord2) -> Vec<Coord2> {
        NeighborIter::new(center, bounds).collect()
    }

    #[test]
    fn center_cell_has_eight_neighbors() {
        let found = neighbors((4, 4), (9, 9));
        assert_eq!(found.len(), 8);
        assert!(!found.contains(&(4, 4)));
        for pos in [(3, 3), (3, 5), (5, 3), (5, 5)] {
            assert!(found.contains(&pos), "missing neighbor {pos:?}");
        }
    }

    #[test]
    fn corners_and_edges_are_clipped() {
        assert_eq!(neighbors((0, 0), (9, 9)), vec![(0, 1), (1, 0), (1, 1)]);
        assert_eq!(neighbors((8, 8), (9, 9)), vec![(7, 7), (7, 8), (8, 7)]);
        assert_eq!(neighbors((0, 4), (9, 9)).len(), 5);
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        assert!(neighbors((0, 0), (1, 1)).is_empty());
    }

    #[test]
    fn linear_positions_map_row_major() {
        assert_eq!(coords_from_linear(5, 8), (0, 5));
        assert_eq!(coords_from_linear(12, 8), (1, 4));
        assert_eq!(coords_from_linear(40, 8), (5, 0));
        assert_eq!(linear_from_coords((5, 0), 8), 40);
        assert_eq!(coords_from_linear(31, 30), (1, 1));
    }
}
