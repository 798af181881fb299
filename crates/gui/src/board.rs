//! Chess board widget rendering

use crate::config::UiConfig;
use crate::game::GameState;
use crate::styles;
use chess_rules::Square;
use iced::widget::{button, column, container, row, text};
use iced::{Color, Element, Length};

/// Message type for board interactions
#[derive(Debug, Clone)]
pub enum BoardMessage {
    SquareClicked(Square),
}

/// Renders the chess board
pub struct BoardView<'a> {
    game: &'a GameState,
    config: &'a UiConfig,
    flipped: bool,
}

impl<'a> BoardView<'a> {
    pub fn new(game: &'a GameState, config: &'a UiConfig, flipped: bool) -> Self {
        Self {
            game,
            config,
            flipped,
        }
    }

    /// Create the board view element. Row 0 holds the black back rank, so
    /// rendering rows top to bottom puts white at the bottom of the window.
    pub fn view(&self) -> Element<'a, BoardMessage> {
        let mut board_column = column![].spacing(0);

        for row_idx in 0..8i8 {
            let display_row = if self.flipped { 7 - row_idx } else { row_idx };
            let mut rank_row = row![].spacing(0);

            for col_idx in 0..8i8 {
                let display_col = if self.flipped { 7 - col_idx } else { col_idx };
                let sq = Square::new(display_row, display_col);

                rank_row = rank_row.push(self.render_square(sq));
            }

            board_column = board_column.push(rank_row);
        }

        container(board_column)
            .style(|_theme| container::Style {
                border: iced::Border {
                    color: Color::from_rgb(0.3, 0.3, 0.3),
                    width: 2.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    /// Render a single square
    fn render_square(&self, sq: Square) -> Element<'a, BoardMessage> {
        let is_light = (sq.row + sq.col) % 2 == 0;
        let mut bg_color = if is_light {
            self.config.light_square()
        } else {
            self.config.dark_square()
        };

        // Highlight selected square
        if self.game.selected == Some(sq) {
            bg_color = styles::SELECTED_SQUARE;
        }

        // Highlight last move
        if let Some((from, to)) = self.game.last_move {
            if sq == from || sq == to {
                bg_color = blend_colors(bg_color, styles::LAST_MOVE_SQUARE);
            }
        }

        let size = self.config.square_size;

        // Get piece on this square
        let piece_glyph = self
            .game
            .board
            .piece_at(sq)
            .map(|p| styles::piece_glyph(p.color, p.kind));

        // Legal move indicator
        let is_legal_target =
            self.config.show_move_hints && self.game.legal_targets.contains(&sq);

        let content: Element<'a, BoardMessage> = if let Some(glyph) = piece_glyph {
            text(glyph).size(size * 0.75).center().into()
        } else if is_legal_target {
            // Show dot for legal moves
            text("●").size(size * 0.3).color(styles::HINT_DOT).center().into()
        } else {
            text("").into()
        };

        button(
            container(content)
                .width(size)
                .height(size)
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        )
        .width(size)
        .height(size)
        .style(move |_theme, status| {
            let hover_overlay = match status {
                button::Status::Hovered => 0.1,
                button::Status::Pressed => 0.2,
                _ => 0.0,
            };
            button::Style {
                background: Some(iced::Background::Color(if hover_overlay > 0.0 {
                    blend_colors(bg_color, Color::from_rgba(1.0, 1.0, 1.0, hover_overlay))
                } else {
                    bg_color
                })),
                border: iced::Border::default(),
                text_color: Color::BLACK,
                ..Default::default()
            }
        })
        .on_press(BoardMessage::SquareClicked(sq))
        .into()
    }
}

/// Blend two colors together
fn blend_colors(base: Color, overlay: Color) -> Color {
    let alpha = overlay.a;
    Color::from_rgb(
        base.r * (1.0 - alpha) + overlay.r * alpha,
        base.g * (1.0 - alpha) + overlay.g * alpha,
        base.b * (1.0 - alpha) + overlay.b * alpha,
    )
}
