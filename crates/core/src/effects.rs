use crate::{Event, EventBus, GameLedger, Source};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Chips granted on application. `None` applies nothing.
    IncreaseChips(Option<i64>),
    DoubleBet,
    /// Reserved for card exchange; leaves the ledger alone.
    SwapCards,
    Unknown(String),
}

impl EffectKind {
    pub fn from_tag(tag: &str, magnitude: Option<f64>) -> Self {
        match tag {
            "increase_chips" => Self::IncreaseChips(magnitude.map(|value| value.round() as i64)),
            "double_bet" => Self::DoubleBet,
            "swap_cards" => Self::SwapCards,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            Self::IncreaseChips(_) => "increase_chips",
            Self::DoubleBet => "double_bet",
            Self::SwapCards => "swap_cards",
            Self::Unknown(tag) => tag,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    pub kind: EffectKind,
}

impl Effect {
    pub fn new(kind: EffectKind) -> Self {
        Self { kind }
    }

    pub fn from_tag(tag: &str, magnitude: Option<f64>) -> Self {
        Self::new(EffectKind::from_tag(tag, magnitude))
    }

    pub fn apply(&self, ledger: &mut GameLedger, events: &mut EventBus) {
        match &self.kind {
            EffectKind::IncreaseChips(Some(amount)) => {
                ledger.chips = ledger.chips.saturating_add(*amount);
                log::info!("{amount} chips added");
                events.push(Event::ChipsAdded {
                    source: Source::Effect,
                    amount: *amount,
                    chips: ledger.chips,
                });
            }
            EffectKind::IncreaseChips(None) => {
                log::warn!("increase_chips effect without a magnitude, skipped");
                events.push(Event::MagnitudeMissing {
                    tag: self.kind.tag().to_string(),
                });
            }
            EffectKind::DoubleBet => {
                ledger.double_bet = true;
                log::info!("bet will be doubled");
                events.push(Event::BetDoubled {
                    source: Source::Effect,
                });
            }
            EffectKind::SwapCards => {
                log::info!("cards swapped");
                events.push(Event::CardsSwapped);
            }
            EffectKind::Unknown(tag) => {
                log::warn!("unknown effect: {tag}");
                events.push(Event::UnknownTag {
                    source: Source::Effect,
                    tag: tag.clone(),
                });
            }
        }
    }
}
