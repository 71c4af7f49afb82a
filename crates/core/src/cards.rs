use crate::{Effect, EventBus, GameLedger};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Clubs,
    Diamonds,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Suit::Spades => "Spades",
            Suit::Hearts => "Hearts",
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
        };
        f.write_str(name)
    }
}

/// Catalog entry. Hands and decks share it through [`CardRef`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Card {
    pub name: String,
    pub suit: Suit,
    pub chip_value: i64,
    #[serde(default)]
    pub effects: Vec<Effect>,
}

pub type CardRef = Arc<Card>;

impl Card {
    pub fn new(name: impl Into<String>, suit: Suit, chip_value: i64) -> Self {
        Self {
            name: name.into(),
            suit,
            chip_value,
            effects: Vec::new(),
        }
    }

    pub fn with_effects(mut self, effects: Vec<Effect>) -> Self {
        self.effects = effects;
        self
    }

    pub fn shared(self) -> CardRef {
        Arc::new(self)
    }

    pub fn apply_effects(&self, ledger: &mut GameLedger, events: &mut EventBus) {
        for effect in &self.effects {
            effect.apply(ledger, events);
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} ({} chips)", self.name, self.suit, self.chip_value)
    }
}
