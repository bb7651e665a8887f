pub mod export;

pub use export::{basketball_rows, football_rows, GameRow};
