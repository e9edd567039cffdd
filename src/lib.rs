pub mod config;
pub mod error;
pub mod lambda;
pub mod server;

pub use error::{Error, Result};
