//! Search-tree substrate over the play and shop phases.

mod action;
mod buy;
mod config;
mod error;
mod play;
mod reward;
mod state;
mod trace;
mod tree;

pub use action::*;
pub use buy::*;
pub use config::*;
pub use error::*;
pub use play::*;
pub use reward::*;
pub use state::*;
pub use trace::*;
pub use tree::*;
