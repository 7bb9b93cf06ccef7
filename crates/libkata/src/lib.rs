mod error;

pub mod config;
pub mod minesweeper;
pub mod summarize;
pub mod tvseries;

pub use config::Config;
pub use error::{KataError, Result};
