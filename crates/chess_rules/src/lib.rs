pub mod board;
pub mod types;
pub mod validate;

// Re-export the full surface; callers deal in squares, pieces, and verdicts.
pub use board::*;
pub use types::*;
pub use validate::*;
