use crate::{Event, EventBus, GameLedger, Rarity, Source};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumableInfo {
    pub name: String,
    pub cost: i64,
    #[serde(default)]
    pub description: String,
    pub rarity: Rarity,
}

/// One-time-use card. Each card type carries its own payload.
pub trait Consumable {
    fn info(&self) -> &ConsumableInfo;

    fn apply_effect(&self, ledger: &mut GameLedger, events: &mut EventBus);

    fn name(&self) -> &str {
        &self.info().name
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TarotBuff {
    Multiplier(f64),
    Chips(i64),
    HandSize(i64),
    Unknown { tag: String, value: f64 },
}

impl TarotBuff {
    pub fn from_tag(tag: &str, value: f64) -> Self {
        match tag {
            "Multiplier" => Self::Multiplier(value),
            "Chips" => Self::Chips(value.round() as i64),
            "Hand Size" => Self::HandSize(value.round() as i64),
            other => Self::Unknown {
                tag: other.to_string(),
                value,
            },
        }
    }
}

impl fmt::Display for TarotBuff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TarotBuff::Multiplier(value) => write!(f, "Multiplier +{value}"),
            TarotBuff::Chips(value) => write!(f, "Chips +{value}"),
            TarotBuff::HandSize(value) => write!(f, "Hand Size +{value}"),
            TarotBuff::Unknown { tag, value } => write!(f, "{tag} +{value}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TarotCard {
    pub info: ConsumableInfo,
    pub buff: TarotBuff,
}

impl Consumable for TarotCard {
    fn info(&self) -> &ConsumableInfo {
        &self.info
    }

    fn apply_effect(&self, ledger: &mut GameLedger, events: &mut EventBus) {
        let source = Source::Consumable(self.info.name.clone());
        match &self.buff {
            TarotBuff::Multiplier(amount) => {
                ledger.multiplier += amount;
                events.push(Event::MultiplierAdded {
                    source,
                    amount: *amount,
                    multiplier: ledger.multiplier,
                });
            }
            TarotBuff::Chips(amount) => {
                ledger.chips = ledger.chips.saturating_add(*amount);
                events.push(Event::ChipsAdded {
                    source,
                    amount: *amount,
                    chips: ledger.chips,
                });
            }
            TarotBuff::HandSize(amount) => {
                ledger.hand_size = ledger.hand_size.saturating_add(*amount);
                events.push(Event::HandSizeAdded {
                    source,
                    amount: *amount,
                    hand_size: ledger.hand_size,
                });
            }
            TarotBuff::Unknown { tag, .. } => {
                events.push(Event::BuffIgnored {
                    source,
                    buff: tag.clone(),
                });
            }
        }
        log::info!("{} applied: {}", self.info.name, self.buff);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanetEffect {
    DoubleMultiplier,
    DoubleChips,
    Other(String),
}

impl PlanetEffect {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Double Multiplier" => Self::DoubleMultiplier,
            "Double Chips" => Self::DoubleChips,
            other => Self::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetCard {
    pub info: ConsumableInfo,
    pub special_effect: PlanetEffect,
}

impl Consumable for PlanetCard {
    fn info(&self) -> &ConsumableInfo {
        &self.info
    }

    fn apply_effect(&self, ledger: &mut GameLedger, events: &mut EventBus) {
        let source = Source::Consumable(self.info.name.clone());
        match &self.special_effect {
            PlanetEffect::DoubleMultiplier => {
                ledger.multiplier *= 2.0;
                events.push(Event::MultiplierDoubled {
                    source,
                    multiplier: ledger.multiplier,
                });
            }
            PlanetEffect::DoubleChips => {
                ledger.chips = ledger.chips.saturating_mul(2);
                events.push(Event::ChipsDoubled {
                    source,
                    chips: ledger.chips,
                });
            }
            PlanetEffect::Other(_) => {}
        }
        log::info!("{} applied: {:?}", self.info.name, self.special_effect);
    }
}

pub type SpectralFn = Box<dyn Fn(&mut GameLedger)>;

/// Runs an arbitrary callback. `duration` is recorded, never enforced here.
pub struct SpectralCard {
    pub info: ConsumableInfo,
    pub duration: u32,
    effect: SpectralFn,
}

impl SpectralCard {
    pub fn new(
        info: ConsumableInfo,
        duration: u32,
        effect: impl Fn(&mut GameLedger) + 'static,
    ) -> Self {
        Self {
            info,
            duration,
            effect: Box::new(effect),
        }
    }
}

impl fmt::Debug for SpectralCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpectralCard")
            .field("info", &self.info)
            .field("duration", &self.duration)
            .finish_non_exhaustive()
    }
}

impl Consumable for SpectralCard {
    fn info(&self) -> &ConsumableInfo {
        &self.info
    }

    fn apply_effect(&self, ledger: &mut GameLedger, events: &mut EventBus) {
        (self.effect)(ledger);
        log::info!(
            "{} applied: effect active for {} turns",
            self.info.name,
            self.duration
        );
        events.push(Event::SpectralApplied {
            name: self.info.name.clone(),
            duration: self.duration,
        });
    }
}
