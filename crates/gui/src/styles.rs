//! Styling constants and piece glyphs

use chess_rules::{Color as PieceColor, PieceKind};
use iced::Color;

// Highlight colors
pub const SELECTED_SQUARE: Color = Color::from_rgb(0.68, 0.85, 0.37); // Yellow-green
pub const LAST_MOVE_SQUARE: Color = Color::from_rgba(0.9, 0.9, 0.0, 0.4); // Yellow overlay
pub const HINT_DOT: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.3);

// Dimensions
pub const PANEL_WIDTH: f32 = 320.0;

/// Unicode glyph for a piece
pub fn piece_glyph(color: PieceColor, kind: PieceKind) -> &'static str {
    match (color, kind) {
        (PieceColor::White, PieceKind::Pawn) => "♙",
        (PieceColor::White, PieceKind::Knight) => "♘",
        (PieceColor::White, PieceKind::Bishop) => "♗",
        (PieceColor::White, PieceKind::Rook) => "♖",
        (PieceColor::White, PieceKind::Queen) => "♕",
        (PieceColor::White, PieceKind::King) => "♔",
        (PieceColor::Black, PieceKind::Pawn) => "♟",
        (PieceColor::Black, PieceKind::Knight) => "♞",
        (PieceColor::Black, PieceKind::Bishop) => "♝",
        (PieceColor::Black, PieceKind::Rook) => "♜",
        (PieceColor::Black, PieceKind::Queen) => "♛",
        (PieceColor::Black, PieceKind::King) => "♚",
    }
}
