use crate::HandKind;
use serde::{Deserialize, Serialize};

/// Where an applied modifier came from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Source {
    Effect,
    Deck(String),
    Voucher(String),
    Consumable(String),
    Boss,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    ChipsAdded { source: Source, amount: i64, chips: i64 },
    ChipsDoubled { source: Source, chips: i64 },
    MultiplierAdded { source: Source, amount: f64, multiplier: f64 },
    MultiplierDoubled { source: Source, multiplier: f64 },
    BaseMultiplierAdded { source: Source, amount: f64, base_multiplier: f64 },
    HandSizeAdded { source: Source, amount: i64, hand_size: i64 },
    RerollsAdded { source: Source, amount: i64, rerolls: i64 },
    DiscountAdded { source: Source, percent: i64, discount: i64 },
    ShopSlotsAdded { source: Source, amount: i64, slots: i64 },
    BetDoubled { source: Source },
    CardsSwapped,
    SpectralApplied { name: String, duration: u32 },
    BuffIgnored { source: Source, buff: String },
    UnknownTag { source: Source, tag: String },
    MagnitudeMissing { tag: String },
    HandLeveled { hand: HandKind, level: u32 },
    BossModeChanged { active: bool },
    BlindsEscalated { small: i64, big: i64 },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> + '_ {
        self.queue.iter()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
