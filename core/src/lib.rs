//! Game-state engine for single-player Minesweeper.
//!
//! A [`GameSession`] owns a [`Board`], accepts [`Command`]s from a
//! presentation layer and answers each with a [`CommandResult`] listing the
//! cells to redraw. Rendering and input handling live outside this crate.

pub use board::*;
pub use cell::*;
pub use config::*;
pub use error::*;
pub use generator::*;
pub use reveal::*;
pub use session::*;
pub use types::*;

mod board;
mod cell;
mod config;
mod error;
mod generator;
mod reveal;
mod session;
mod types;
