//! Scenario tests for the move validator
//!
//! Each scenario arranges a concrete position and pins the verdict:
//! - pawn advances over one, two, and three squares
//! - slider path blocking against own and enemy pieces
//! - knight jumps over a crowded board
//! - ownership rules at both endpoints

use chess_rules::{Board, Color, Piece, PieceKind, Square, is_legal};

fn sq(row: i8, col: i8) -> Square {
    Square::new(row, col)
}

fn put(board: &mut Board, row: i8, col: i8, color: Color, kind: PieceKind) {
    board.set_piece(sq(row, col), Some(Piece { color, kind }));
}

// =============================================================================
// Opening Position Scenarios
// =============================================================================

#[test]
fn test_double_pawn_advance_from_start() {
    let board = Board::initial();
    assert!(
        is_legal(&board, sq(6, 4), sq(4, 4), Color::White),
        "two empty squares straight ahead from the start row"
    );
}

#[test]
fn test_triple_pawn_advance_rejected() {
    let board = Board::initial();
    assert!(
        !is_legal(&board, sq(6, 4), sq(3, 4), Color::White),
        "three squares is beyond any pawn advance"
    );
}

#[test]
fn test_rook_blocked_by_own_pawn() {
    let board = Board::initial();
    assert!(
        !is_legal(&board, sq(7, 0), sq(5, 0), Color::White),
        "the pawn on (6, 0) blocks the file"
    );
}

#[test]
fn test_initial_board_white_has_twenty_moves() {
    // Pawn singles and doubles plus four knight hops; every slider and the
    // royal pair are boxed in. Counting by probing keeps the validator honest
    // over the whole grid.
    let board = Board::initial();
    let mut count = 0;
    for from_row in 0..8 {
        for from_col in 0..8 {
            for to_row in 0..8 {
                for to_col in 0..8 {
                    if is_legal(
                        &board,
                        sq(from_row, from_col),
                        sq(to_row, to_col),
                        Color::White,
                    ) {
                        count += 1;
                    }
                }
            }
        }
    }
    assert_eq!(count, 20);
}

// =============================================================================
// Constructed Position Scenarios
// =============================================================================

#[test]
fn test_rook_captures_along_clear_rank() {
    let mut board = Board::empty();
    put(&mut board, 4, 4, Color::White, PieceKind::Rook);
    put(&mut board, 4, 7, Color::Black, PieceKind::Pawn);
    assert!(
        is_legal(&board, sq(4, 4), sq(4, 7), Color::White),
        "clear path, enemy piece on the destination"
    );
}

#[test]
fn test_bishop_blocked_by_own_pawn_on_diagonal() {
    let mut board = Board::empty();
    put(&mut board, 2, 2, Color::White, PieceKind::Bishop);
    put(&mut board, 4, 4, Color::White, PieceKind::Pawn);
    assert!(
        !is_legal(&board, sq(2, 2), sq(5, 5), Color::White),
        "own pawn sits on the diagonal"
    );
}

#[test]
fn test_knight_jumps_on_a_full_board() {
    // Fill the whole board with black pawns, then drop in a white knight
    let mut board = Board::empty();
    for row in 0..8 {
        for col in 0..8 {
            put(&mut board, row, col, Color::Black, PieceKind::Pawn);
        }
    }
    put(&mut board, 4, 4, Color::White, PieceKind::Knight);
    assert!(
        is_legal(&board, sq(4, 4), sq(6, 5), Color::White),
        "occupancy between the squares never matters for a knight"
    );
}

// =============================================================================
// Ownership Sweeps
// =============================================================================

#[test]
fn test_never_legal_onto_own_piece() {
    let board = Board::initial();
    for from_row in 0..8 {
        for from_col in 0..8 {
            for to_row in 0..8 {
                for to_col in 0..8 {
                    let from = sq(from_row, from_col);
                    let to = sq(to_row, to_col);
                    let own_target = board
                        .piece_at(to)
                        .is_some_and(|p| p.color == Color::White);
                    if own_target {
                        assert!(!is_legal(&board, from, to, Color::White));
                    }
                }
            }
        }
    }
}

#[test]
fn test_never_legal_from_empty_or_opponent_square() {
    let board = Board::initial();
    for from_row in 0..8 {
        for from_col in 0..8 {
            let from = sq(from_row, from_col);
            let owned = board
                .piece_at(from)
                .is_some_and(|p| p.color == Color::White);
            if owned {
                continue;
            }
            for to_row in 0..8 {
                for to_col in 0..8 {
                    assert!(!is_legal(&board, from, sq(to_row, to_col), Color::White));
                }
            }
        }
    }
}
