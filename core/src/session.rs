use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Ready -> Playing
/// - Ready -> Won (first reveal clears the board)
/// - Ready -> Lost (first reveal hits a mine)
/// - Playing -> Won
/// - Playing -> Lost
///
/// Any phase goes back to Ready on reset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Mines are placed, no move made yet
    #[default]
    Ready,
    /// At least one move accepted
    Playing,
    /// Every safe cell revealed
    Won,
    /// A mine was revealed
    Lost,
}

impl Phase {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Discrete input delivered by the presentation layer.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Command {
    Reveal(Coord2),
    ToggleFlag(Coord2),
    Reset(SessionConfig),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellChange {
    pub coords: Coord2,
    pub view: CellView,
}

/// What a command did: the cells to redraw and the counters after it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommandResult {
    pub phase: Phase,
    pub changes: Vec<CellChange>,
    /// Mines minus flags placed; negative when over-flagged.
    pub mines_remaining: isize,
    pub revealed_count: CellCount,
}

impl CommandResult {
    pub fn has_update(&self) -> bool {
        !self.changes.is_empty()
    }
}

/// One game from start to finish, rebuilt in place on reset.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSession {
    board: Board,
    phase: Phase,
    flags_placed: CellCount,
    revealed_count: CellCount,
    triggered_mine: Option<Coord2>,
    seed: Option<u64>,
}

/// Starts a session with mines already placed.
pub fn new_session(
    rows: Coord,
    cols: Coord,
    mine_density: f64,
    seed: Option<u64>,
) -> Result<GameSession> {
    let config = SessionConfig {
        rows,
        cols,
        mine_density,
        seed,
    };
    GameSession::new(config)
}

/// Applies one command to the session.
pub fn apply(session: &mut GameSession, command: Command) -> Result<CommandResult> {
    session.apply(command)
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Result<Self> {
        let (board, seed) = Self::build_board(config)?;
        log::debug!(
            "New session {}x{} with {} mines, seed {}",
            board.rows(),
            board.cols(),
            board.mine_count(),
            seed
        );
        Ok(Self::from_parts(board, Some(seed)))
    }

    /// Starts a session on a board whose mines are already laid out, e.g. by
    /// a [`FixedMineGenerator`]. Every cell must still be hidden.
    pub fn from_board(board: Board) -> Result<Self> {
        if board.mine_count() >= board.total_cells() {
            return Err(GameError::InvalidMineCount);
        }
        if board
            .iter_coords()
            .any(|coords| board.view_at(coords) != CellView::Hidden)
        {
            return Err(GameError::InvalidTransition);
        }
        Ok(Self::from_parts(board, None))
    }

    fn from_parts(board: Board, seed: Option<u64>) -> Self {
        Self {
            board,
            phase: Phase::Ready,
            flags_placed: 0,
            revealed_count: 0,
            triggered_mine: None,
            seed,
        }
    }

    fn build_board(config: SessionConfig) -> Result<(Board, u64)> {
        let num_mines = config.num_mines()?;
        let mut board = Board::new(config.rows, config.cols)?;
        let seed = config.seed.unwrap_or_else(rand::random);
        place_mines(&mut board, num_mines, seed)?;
        Ok((board, seed))
    }

    pub fn apply(&mut self, command: Command) -> Result<CommandResult> {
        log::debug!("Applying {command:?} in phase {:?}", self.phase);
        match command {
            Command::Reveal(coords) => self.reveal(coords),
            Command::ToggleFlag(coords) => self.toggle_flag(coords),
            Command::Reset(config) => self.reset(config),
        }
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<CommandResult> {
        self.check_not_finished()?;
        let coords = self.board.validate_coords(coords)?;

        let changes = match reveal(&mut self.board, coords)? {
            RevealOutcome::Mine => {
                self.board.mark_revealed(coords)?;
                self.triggered_mine = Some(coords);
                self.end_game(false);
                vec![CellChange {
                    coords,
                    view: CellView::Mine,
                }]
            }
            RevealOutcome::Cleared(cells) => {
                // bounded by the number of safe cells
                self.revealed_count += cells.len() as CellCount;
                if self.revealed_count == self.board.safe_cell_count() {
                    self.end_game(true);
                } else {
                    self.mark_started();
                }
                self.changes_for(cells)
            }
        };

        Ok(self.result(changes))
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<CommandResult> {
        self.check_not_finished()?;
        let coords = self.board.validate_coords(coords)?;

        match self.board.cell_state(coords)? {
            CellState::Revealed => return Err(GameError::InvalidTransition),
            CellState::Hidden => {
                self.board.set_flag(coords, true)?;
                self.flags_placed += 1;
            }
            CellState::Flagged => {
                self.board.set_flag(coords, false)?;
                self.flags_placed -= 1;
            }
        }
        self.mark_started();

        let changes = self.changes_for([coords]);
        Ok(self.result(changes))
    }

    /// Rebuilds the board from `config`. An invalid config leaves the current
    /// game untouched.
    pub fn reset(&mut self, config: SessionConfig) -> Result<CommandResult> {
        let (board, seed) = Self::build_board(config)?;
        log::debug!(
            "Reset session to {}x{} with {} mines, seed {}",
            board.rows(),
            board.cols(),
            board.mine_count(),
            seed
        );
        *self = Self::from_parts(board, Some(seed));

        let changes = self.changes_for(self.board.iter_coords());
        Ok(self.result(changes))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn num_mines(&self) -> CellCount {
        self.board.mine_count()
    }

    pub fn flags_placed(&self) -> CellCount {
        self.flags_placed
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn mines_remaining(&self) -> isize {
        (self.board.mine_count() as isize) - (self.flags_placed as isize)
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Seed the mines were placed with, absent for sessions built from a
    /// prepared board.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn view(&self, coords: Coord2) -> Result<CellView> {
        self.board.cell_view(coords)
    }

    /// Visible state of every cell, for a full redraw.
    pub fn cell_views(&self) -> Array2<CellView> {
        Array2::from_shape_fn(self.size().to_nd_index(), |(row, col)| {
            self.board.view_at((row as Coord, col as Coord))
        })
    }

    fn changes_for(&self, cells: impl IntoIterator<Item = Coord2>) -> Vec<CellChange> {
        cells
            .into_iter()
            .map(|coords| CellChange {
                coords,
                view: self.board.view_at(coords),
            })
            .collect()
    }

    fn result(&self, changes: Vec<CellChange>) -> CommandResult {
        CommandResult {
            phase: self.phase,
            changes,
            mines_remaining: self.mines_remaining(),
            revealed_count: self.revealed_count,
        }
    }

    fn mark_started(&mut self) {
        if self.phase.is_ready() {
            self.phase = Phase::Playing;
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.phase.is_finished() {
            return;
        }

        self.phase = if won { Phase::Won } else { Phase::Lost };
        log::info!(
            "Game {} after revealing {} of {} safe cells",
            if won { "won" } else { "lost" },
            self.revealed_count,
            self.board.safe_cell_count()
        );
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.phase.is_finished() {
            Err(GameError::SessionOver)
        } else {
            Ok(())
        }
    }
}
