//! Load Warcry fighter and ability data, assemble it into warbands, and serve it.

pub mod cli;
pub mod data;
pub mod error;
pub mod server;

pub use error::{AssemblyError, LoadError};
