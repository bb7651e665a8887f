pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

pub use api::*;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use models::*;
