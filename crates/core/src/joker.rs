use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JokerCard {
    pub name: String,
    pub effect_type: String,
    pub effect_description: String,
    pub rarity: Rarity,
    pub value: i64,
    pub unlock_condition: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub synergy_tags: Vec<String>,
    /// `None` means unlimited.
    #[serde(default)]
    pub limited_uses: Option<u32>,
    #[serde(default = "default_true")]
    pub permanent: bool,
}

fn default_true() -> bool {
    true
}

impl JokerCard {
    pub fn new(
        name: impl Into<String>,
        effect_type: impl Into<String>,
        effect_description: impl Into<String>,
        rarity: Rarity,
        value: i64,
        unlock_condition: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            effect_type: effect_type.into(),
            effect_description: effect_description.into(),
            rarity,
            value,
            unlock_condition: unlock_condition.into(),
            is_active: true,
            synergy_tags: Vec::new(),
            limited_uses: None,
            permanent: true,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.synergy_tags.iter().any(|item| item == tag)
    }

    /// Spends one use. Returns false when the joker could not fire.
    pub fn use_charge(&mut self) -> bool {
        if !self.is_active {
            return false;
        }
        if let Some(left) = self.limited_uses.as_mut() {
            if *left == 0 {
                self.is_active = false;
                return false;
            }
            *left -= 1;
            if *left == 0 {
                self.is_active = false;
            }
        }
        true
    }

    pub fn is_expired(&self) -> bool {
        !self.permanent && !self.is_active
    }
}
