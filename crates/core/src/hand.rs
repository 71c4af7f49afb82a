use crate::CardRef;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandKind {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl HandKind {
    pub const ALL: [HandKind; 10] = [
        HandKind::HighCard,
        HandKind::Pair,
        HandKind::TwoPair,
        HandKind::ThreeOfAKind,
        HandKind::Straight,
        HandKind::Flush,
        HandKind::FullHouse,
        HandKind::FourOfAKind,
        HandKind::StraightFlush,
        HandKind::RoyalFlush,
    ];

    /// Categories that carry both a chip and a multiplier base value.
    pub const PLAYABLE: [HandKind; 9] = [
        HandKind::HighCard,
        HandKind::Pair,
        HandKind::TwoPair,
        HandKind::ThreeOfAKind,
        HandKind::Straight,
        HandKind::Flush,
        HandKind::FullHouse,
        HandKind::FourOfAKind,
        HandKind::StraightFlush,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HandKind::HighCard => "High Card",
            HandKind::Pair => "Pair",
            HandKind::TwoPair => "Two Pair",
            HandKind::ThreeOfAKind => "Three of a Kind",
            HandKind::Straight => "Straight",
            HandKind::Flush => "Flush",
            HandKind::FullHouse => "Full House",
            HandKind::FourOfAKind => "Four of a Kind",
            HandKind::StraightFlush => "Straight Flush",
            HandKind::RoyalFlush => "Royal Flush",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, HandError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| HandError::UnknownCategory(name.to_string()))
    }

    pub fn base_chips(self) -> i64 {
        match self {
            HandKind::HighCard => 5,
            HandKind::Pair => 10,
            HandKind::TwoPair => 15,
            HandKind::ThreeOfAKind => 20,
            HandKind::Straight => 30,
            HandKind::Flush => 40,
            HandKind::FullHouse => 50,
            HandKind::FourOfAKind => 75,
            HandKind::StraightFlush => 100,
            HandKind::RoyalFlush => 150,
        }
    }

    /// `None` for Royal Flush, which has a chip value but no multiplier.
    pub fn base_multiplier(self) -> Option<f64> {
        match self {
            HandKind::HighCard => Some(1.0),
            HandKind::Pair => Some(1.5),
            HandKind::TwoPair => Some(2.0),
            HandKind::ThreeOfAKind => Some(2.5),
            HandKind::Straight => Some(3.0),
            HandKind::Flush => Some(3.5),
            HandKind::FullHouse => Some(4.0),
            HandKind::FourOfAKind => Some(5.0),
            HandKind::StraightFlush => Some(7.0),
            HandKind::RoyalFlush => None,
        }
    }
}

impl fmt::Display for HandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HandError {
    #[error("invalid hand name: {0}")]
    UnknownCategory(String),
    #[error("hand category {0} has no multiplier")]
    Unscorable(HandKind),
}

/// A played poker hand. Base values are fixed at construction; only the
/// level moves, and only upwards.
#[derive(Debug, Clone)]
pub struct Hand {
    kind: HandKind,
    cards: Vec<CardRef>,
    level: u32,
    base_chips: i64,
    base_multiplier: f64,
}

impl Hand {
    pub fn new(kind: HandKind, cards: Vec<CardRef>) -> Result<Self, HandError> {
        let base_multiplier = kind.base_multiplier().ok_or(HandError::Unscorable(kind))?;
        Ok(Self {
            kind,
            cards,
            level: 1,
            base_chips: kind.base_chips(),
            base_multiplier,
        })
    }

    pub fn from_name(name: &str, cards: Vec<CardRef>) -> Result<Self, HandError> {
        Self::new(HandKind::from_name(name)?, cards)
    }

    pub fn kind(&self) -> HandKind {
        self.kind
    }

    pub fn cards(&self) -> &[CardRef] {
        &self.cards
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn base_chips(&self) -> i64 {
        self.base_chips
    }

    pub fn base_multiplier(&self) -> f64 {
        self.base_multiplier
    }

    pub(crate) fn raise_level(&mut self) {
        self.level = self.level.saturating_add(1);
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | level {} | chips {} | multiplier {} | cards [",
            self.kind,
            self.level,
            self.calculate_chips(),
            self.calculate_multiplier()
        )?;
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}
