//! Terminal front end for the tic-tac-toe engine.

#![warn(missing_docs)]

pub mod cli;
pub mod driver;
pub mod logging;

pub use cli::{Cli, Command};
