use std::fmt;

use super::{GameResult, Player};
use crate::error::{BoardError, MoveError};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const CENTER_COL: usize = COLS / 2;

/// Number of contiguous same-colour cells needed to win.
pub const CONNECT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// Four contiguous `(row, col)` positions along one line direction.
pub type Window = [(usize, usize); CONNECT];

/// Row/column steps for horizontal, vertical, diagonal down-right (\) and
/// diagonal up-right (/) lines.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Every window of four cells on the board, in all four line directions.
pub fn windows() -> impl Iterator<Item = Window> {
    DIRECTIONS.into_iter().flat_map(|(dr, dc)| {
        (0..ROWS).flat_map(move |row| (0..COLS).filter_map(move |col| window_at(row, col, dr, dc)))
    })
}

fn window_at(row: usize, col: usize, dr: isize, dc: isize) -> Option<Window> {
    let mut window = [(0, 0); CONNECT];
    for (i, slot) in window.iter_mut().enumerate() {
        let r = row as isize + dr * i as isize;
        let c = col as isize + dc * i as isize;
        if r < 0 || r >= ROWS as isize || c < 0 || c >= COLS as isize {
            return None;
        }
        *slot = (r as usize, c as usize);
    }
    Some(window)
}

/// A 6x7 Connect Four grid. Pieces only enter through [`Board::drop_piece`]
/// or a validated [`Board::from_cells`], so every column is filled bottom-up
/// with no gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

/// Serialized shape of a [`Board`], checked before it becomes one.
#[derive(serde::Deserialize)]
struct RawBoard {
    cells: [[Cell; COLS]; ROWS],
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Board::from_cells(raw.cells)
    }
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Build a board from a raw grid (row 0 at the top), rejecting grids that
    /// legal play cannot produce.
    pub fn from_cells(cells: [[Cell; COLS]; ROWS]) -> Result<Self, BoardError> {
        for col in 0..COLS {
            for row in 0..ROWS - 1 {
                if cells[row][col] != Cell::Empty && cells[row + 1][col] == Cell::Empty {
                    return Err(BoardError::FloatingPiece { row, col });
                }
            }
        }

        let count = |cell: Cell| cells.iter().flatten().filter(|&&c| c == cell).count();
        let (red, yellow) = (count(Cell::Red), count(Cell::Yellow));
        if red != yellow && red != yellow + 1 {
            return Err(BoardError::PieceCount { red, yellow });
        }

        let board = Board { cells };
        if board.winning_line(Player::Red).is_some() && board.winning_line(Player::Yellow).is_some() {
            return Err(BoardError::BothPlayersWin);
        }
        Ok(board)
    }

    /// Replay alternating drops, Red first. Stops at the first illegal drop.
    pub fn from_moves(moves: &[usize]) -> Result<Self, MoveError> {
        let mut board = Board::new();
        let mut player = Player::Red;
        for &col in moves {
            board.drop_piece(col, player)?;
            player = player.other();
        }
        Ok(board)
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::OutOfRange(col));
        }

        // Find the lowest empty row in this column
        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][col] == Cell::Empty)
            .ok_or(MoveError::ColumnFull(col))?;
        self.cells[row][col] = player.to_cell();
        Ok(row)
    }

    /// Remove the topmost piece of a column, returning it.
    pub fn lift_piece(&mut self, col: usize) -> Option<Cell> {
        if col >= COLS {
            return None;
        }
        let row = (0..ROWS).find(|&row| self.cells[row][col] != Cell::Empty)?;
        let cell = self.cells[row][col];
        self.cells[row][col] = Cell::Empty;
        Some(cell)
    }

    /// Columns that can still take a piece, in ascending order
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Player whose turn it is, assuming Red moved first and turns alternated.
    pub fn next_player(&self) -> Player {
        if self.piece_count() % 2 == 0 {
            Player::Red
        } else {
            Player::Yellow
        }
    }

    /// Scan every line for four in a row. Only the player who moved last can
    /// have completed a new line, so the first owned window found is the winner.
    pub fn result(&self) -> GameResult {
        if let Some(player) = windows().find_map(|window| self.window_owner(&window)) {
            return GameResult::Win(player);
        }
        if self.is_full() {
            GameResult::Draw
        } else {
            GameResult::InProgress
        }
    }

    /// Cells of the first four-in-a-row owned by `player`, if any.
    pub fn winning_line(&self, player: Player) -> Option<Window> {
        windows().find(|window| self.window_owner(window) == Some(player))
    }

    /// The player owning all four cells of the window.
    fn window_owner(&self, window: &Window) -> Option<Player> {
        let (r0, c0) = window[0];
        let first = self.cells[r0][c0];
        if window.iter().all(|&(r, c)| self.cells[r][c] == first) {
            Player::from_cell(first)
        } else {
            None
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<&str> = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => ".",
                    Cell::Red => "R",
                    Cell::Yellow => "Y",
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        let footer: Vec<String> = (0..COLS).map(|col| col.to_string()).collect();
        write!(f, "{}", footer.join(" "))
    }
}
