use crate::{Event, EventBus, GameLedger, Source};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DeckRule {
    BonusChips(i64),
    ExtraMultiplier(f64),
    RerollBonus(i64),
    Unknown { tag: String, value: f64 },
}

impl DeckRule {
    pub fn from_tag(tag: &str, value: f64) -> Self {
        match tag {
            "bonus_chips" => Self::BonusChips(value.round() as i64),
            "extra_multiplier" => Self::ExtraMultiplier(value),
            "reroll_bonus" => Self::RerollBonus(value.round() as i64),
            other => Self::Unknown {
                tag: other.to_string(),
                value,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    pub description: String,
    pub num_cards: u32,
    pub joker_slots: u32,
    pub consumable_slots: u32,
    #[serde(default)]
    pub special_rules: Vec<DeckRule>,
}

impl Deck {
    pub fn apply_special_rules(&self, ledger: &mut GameLedger, events: &mut EventBus) {
        let source = || Source::Deck(self.name.clone());
        for rule in &self.special_rules {
            match rule {
                DeckRule::BonusChips(amount) => {
                    ledger.chips = ledger.chips.saturating_add(*amount);
                    log::info!("{}: +{amount} bonus chips applied", self.name);
                    events.push(Event::ChipsAdded {
                        source: source(),
                        amount: *amount,
                        chips: ledger.chips,
                    });
                }
                DeckRule::ExtraMultiplier(amount) => {
                    ledger.base_multiplier += amount;
                    log::info!("{}: base multiplier increased by {amount}x", self.name);
                    events.push(Event::BaseMultiplierAdded {
                        source: source(),
                        amount: *amount,
                        base_multiplier: ledger.base_multiplier,
                    });
                }
                DeckRule::RerollBonus(amount) => {
                    ledger.rerolls_remaining = ledger.rerolls_remaining.saturating_add(*amount);
                    log::info!("{}: +{amount} additional rerolls", self.name);
                    events.push(Event::RerollsAdded {
                        source: source(),
                        amount: *amount,
                        rerolls: ledger.rerolls_remaining,
                    });
                }
                DeckRule::Unknown { tag, .. } => {
                    log::warn!("{}: unknown rule '{tag}', no action taken", self.name);
                    events.push(Event::UnknownTag {
                        source: source(),
                        tag: tag.clone(),
                    });
                }
            }
        }
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | cards {} | joker slots {} | consumable slots {} | rules {:?}",
            self.name, self.num_cards, self.joker_slots, self.consumable_slots, self.special_rules
        )
    }
}
