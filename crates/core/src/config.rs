use crate::{
    BossBlinds, BossRule, Card, Deck, DeckRule, Effect, Rarity, Suit, Voucher, VoucherEffect,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid content config: {0}")]
    Json(#[from] serde_json::Error),
}

/// A `{tag, value}` pair as authored in content files. Tags are matched
/// case-sensitively when converted into typed rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuleSpec {
    pub tag: String,
    #[serde(default)]
    pub value: Option<f64>,
}

impl RuleSpec {
    fn value_or_zero(&self) -> f64 {
        self.value.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardConfig {
    pub name: String,
    pub suit: Suit,
    pub chip_value: i64,
    #[serde(default)]
    pub effects: Vec<RuleSpec>,
}

impl CardConfig {
    pub fn build(&self) -> Card {
        let effects = self
            .effects
            .iter()
            .map(|spec| Effect::from_tag(&spec.tag, spec.value))
            .collect();
        Card::new(self.name.clone(), self.suit, self.chip_value).with_effects(effects)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub num_cards: u32,
    pub joker_slots: u32,
    pub consumable_slots: u32,
    #[serde(default)]
    pub special_rules: Vec<RuleSpec>,
}

impl DeckConfig {
    pub fn build(&self) -> Deck {
        Deck {
            name: self.name.clone(),
            description: self.description.clone(),
            num_cards: self.num_cards,
            joker_slots: self.joker_slots,
            consumable_slots: self.consumable_slots,
            special_rules: self
                .special_rules
                .iter()
                .map(|spec| DeckRule::from_tag(&spec.tag, spec.value_or_zero()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoucherConfig {
    pub name: String,
    pub cost: i64,
    #[serde(default)]
    pub description: String,
    pub rarity: Rarity,
    pub effect_type: String,
    pub effect_value: f64,
}

impl VoucherConfig {
    pub fn build(&self) -> Voucher {
        Voucher {
            name: self.name.clone(),
            cost: self.cost,
            description: self.description.clone(),
            rarity: self.rarity,
            effect: VoucherEffect::from_tag(&self.effect_type, self.effect_value),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossBlindsConfig {
    pub small_blind: i64,
    pub big_blind: i64,
    pub escalation_rate: u32,
    pub max_blind_cap: i64,
    #[serde(default = "default_difficulty")]
    pub difficulty_level: u32,
    #[serde(default)]
    pub special_rules: Vec<RuleSpec>,
}

fn default_difficulty() -> u32 {
    1
}

impl BossBlindsConfig {
    pub fn build(&self) -> BossBlinds {
        let rules = self
            .special_rules
            .iter()
            .map(|spec| BossRule::from_tag(&spec.tag, spec.value_or_zero()))
            .collect();
        BossBlinds::new(
            self.small_blind,
            self.big_blind,
            self.escalation_rate,
            self.max_blind_cap,
            self.difficulty_level,
            rules,
        )
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentConfig {
    #[serde(default)]
    pub cards: Vec<CardConfig>,
    #[serde(default)]
    pub decks: Vec<DeckConfig>,
    #[serde(default)]
    pub vouchers: Vec<VoucherConfig>,
    #[serde(default)]
    pub boss_blinds: Option<BossBlindsConfig>,
}

impl ContentConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn deck(&self, name: &str) -> Option<Deck> {
        self.decks
            .iter()
            .find(|deck| deck.name == name)
            .map(DeckConfig::build)
    }

    pub fn voucher(&self, name: &str) -> Option<Voucher> {
        self.vouchers
            .iter()
            .find(|voucher| voucher.name == name)
            .map(VoucherConfig::build)
    }

    pub fn card_catalog(&self) -> Vec<crate::CardRef> {
        self.cards.iter().map(|card| card.build().shared()).collect()
    }
}
