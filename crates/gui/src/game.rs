//! Game state management
//!
//! The UI owns the board copy, the turn holder, and the selection. The
//! rules crate is only ever asked for verdicts; every mutation happens
//! here, after an approving one.

use chess_rules::{Board, Color, Square, is_legal};
use log::{debug, info};
use std::collections::HashSet;

/// Mutable state of the game in progress.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Board copy owned by the UI
    pub board: Board,
    /// Side to move
    pub turn: Color,
    /// Currently selected square (for move input)
    pub selected: Option<Square>,
    /// Legal destinations from the selected square
    pub legal_targets: HashSet<Square>,
    /// Last applied move (for highlighting)
    pub last_move: Option<(Square, Square)>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::initial(),
            turn: Color::White,
            selected: None,
            legal_targets: HashSet::new(),
            last_move: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
        info!("new game");
    }

    /// Handle a click on `sq`: apply a validated move from the current
    /// selection, reselect another piece of the side to move, or clear
    /// the selection.
    pub fn select_square(&mut self, sq: Square) {
        if let Some(from) = self.selected {
            if is_legal(&self.board, from, sq, self.turn) {
                self.apply_move(from, sq);
                return;
            }
            debug!("rejected {} -> {} for {}", from, sq, color_name(self.turn));
            if self.holds_mover_piece(sq) {
                self.select(sq);
            } else {
                self.clear_selection();
            }
        } else if self.holds_mover_piece(sq) {
            self.select(sq);
        }
    }

    /// Apply an approved move: relocate on the own board copy, remember it
    /// for highlighting, and hand the turn to the other side.
    fn apply_move(&mut self, from: Square, to: Square) {
        self.board.apply_move(from, to);
        info!("{} played {} -> {}", color_name(self.turn), from, to);
        self.last_move = Some((from, to));
        self.turn = self.turn.other();
        self.clear_selection();
    }

    fn holds_mover_piece(&self, sq: Square) -> bool {
        self.board.piece_at(sq).is_some_and(|p| p.color == self.turn)
    }

    fn select(&mut self, sq: Square) {
        self.selected = Some(sq);
        self.update_legal_targets();
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.legal_targets.clear();
    }

    /// Probe every destination from the selected square. The board is a
    /// fixed 8x8, so that is 64 verdicts per selection.
    fn update_legal_targets(&mut self) {
        self.legal_targets.clear();
        if let Some(from) = self.selected {
            for row in 0..8 {
                for col in 0..8 {
                    let to = Square::new(row, col);
                    if is_legal(&self.board, from, to, self.turn) {
                        self.legal_targets.insert(to);
                    }
                }
            }
        }
    }
}

fn color_name(c: Color) -> &'static str {
    match c {
        Color::White => "white",
        Color::Black => "black",
    }
}
