//! Board appearance configuration
//!
//! Presentation settings only; no game state is ever written or read.

use log::warn;
use serde::Deserialize;
use std::{fs, path::Path};

/// Appearance settings for the board, loadable from a TOML file.
/// Colors are RGB triples with components in 0..=1.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub square_size: f32,
    pub light_square: [f32; 3],
    pub dark_square: [f32; 3],
    pub show_move_hints: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            square_size: 70.0,
            light_square: [0.94, 0.85, 0.71], // Wheat
            dark_square: [0.71, 0.53, 0.39],  // Sienna
            show_move_hints: true,
        }
    }
}

impl UiConfig {
    /// Load from `path`, falling back to the defaults when no path is given
    /// or the file is missing or malformed. A bad theme file should never
    /// keep the game from starting.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warn!("ignoring malformed config {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("could not read config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn light_square(&self) -> iced::Color {
        let [r, g, b] = self.light_square;
        iced::Color::from_rgb(r, g, b)
    }

    pub fn dark_square(&self) -> iced::Color {
        let [r, g, b] = self.dark_square;
        iced::Color::from_rgb(r, g, b)
    }
}
