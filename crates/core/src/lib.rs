//! Content and scoring engines. Keep this crate free of IO and platform concerns.

pub mod boss;
pub mod cards;
pub mod config;
pub mod consumables;
pub mod deck;
pub mod effects;
pub mod events;
pub mod hand;
pub mod joker;
pub mod ledger;
pub mod rng;
pub mod scoring;
pub mod vouchers;

pub use boss::*;
pub use cards::*;
pub use config::*;
pub use consumables::*;
pub use deck::*;
pub use effects::*;
pub use events::*;
pub use hand::*;
pub use joker::*;
pub use ledger::*;
pub use rng::*;
pub use scoring::*;
pub use vouchers::*;
