//! Main application state and logic

use crate::board::{BoardMessage, BoardView};
use crate::config::UiConfig;
use crate::game::GameState;
use crate::styles::PANEL_WIDTH;

use chess_rules::Color;
use iced::widget::{button, column, container, horizontal_rule, row, text, vertical_space};
use iced::{Element, Length, Task, Theme};

/// Main application state
pub struct ChessApp {
    /// Game state
    game: GameState,
    /// Board flipped?
    board_flipped: bool,
    /// Appearance settings
    config: UiConfig,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Board interaction
    Board(BoardMessage),

    // Game controls
    NewGame,
    FlipBoard,
}

impl ChessApp {
    pub fn new(config: UiConfig, flipped: bool) -> (Self, Task<Message>) {
        (
            Self {
                game: GameState::new(),
                board_flipped: flipped,
                config,
            },
            Task::none(),
        )
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Board(BoardMessage::SquareClicked(sq)) => {
                self.game.select_square(sq);
                Task::none()
            }

            Message::NewGame => {
                self.game.reset();
                Task::none()
            }

            Message::FlipBoard => {
                self.board_flipped = !self.board_flipped;
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        // Chess board
        let board = BoardView::new(&self.game, &self.config, self.board_flipped)
            .view()
            .map(Message::Board);

        // Side panel
        let panel = self.control_panel();

        row![
            board,
            container(panel)
                .width(PANEL_WIDTH)
                .height(Length::Fill)
                .padding(15),
        ]
        .spacing(20)
        .padding(20)
        .into()
    }

    /// Render the control panel
    fn control_panel(&self) -> Element<'_, Message> {
        let new_game_btn = button(text("New Game"))
            .on_press(Message::NewGame)
            .style(button::primary)
            .width(Length::Fill);

        let flip_btn = button(text("Flip Board"))
            .on_press(Message::FlipBoard)
            .style(button::secondary)
            .width(Length::Fill);

        // Status
        let side = match self.game.turn {
            Color::White => "White",
            Color::Black => "Black",
        };
        let status_text = text(format!("{} to move", side)).size(16);

        let last_move_text = match self.game.last_move {
            Some((from, to)) => text(format!("Last move: {} -> {}", from, to)).size(13),
            None => text(""),
        };

        column![
            new_game_btn,
            flip_btn,
            vertical_space().height(20),
            horizontal_rule(1),
            vertical_space().height(10),
            status_text,
            last_move_text,
        ]
        .spacing(5)
        .into()
    }
}
