use crate::{Event, EventBus, Hand};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Score {
    pub chips: i64,
    pub mult: f64,
}

impl Score {
    pub fn total_raw(&self) -> f64 {
        self.chips as f64 * self.mult
    }

    pub fn total(&self) -> i64 {
        self.total_raw().floor() as i64
    }
}

impl Hand {
    pub fn calculate_chips(&self) -> i64 {
        self.base_chips().saturating_mul(self.level() as i64)
    }

    pub fn calculate_multiplier(&self) -> f64 {
        self.base_multiplier() * self.level() as f64
    }

    pub fn level_up(&mut self, events: &mut EventBus) -> u32 {
        self.raise_level();
        log::info!("{} leveled up to level {}", self.kind(), self.level());
        events.push(Event::HandLeveled {
            hand: self.kind(),
            level: self.level(),
        });
        self.level()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub base: Score,
    pub card_chips: i64,
    pub total: Score,
}

pub fn score_hand(hand: &Hand) -> ScoreBreakdown {
    let base = Score {
        chips: hand.calculate_chips(),
        mult: hand.calculate_multiplier(),
    };
    let card_chips = hand
        .cards()
        .iter()
        .fold(0i64, |acc, card| acc.saturating_add(card.chip_value));
    let total = Score {
        chips: base.chips.saturating_add(card_chips),
        mult: base.mult,
    };
    ScoreBreakdown {
        base,
        card_chips,
        total,
    }
}
