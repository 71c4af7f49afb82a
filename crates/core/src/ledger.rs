use serde::{Deserialize, Serialize};

/// Numeric record shared by every engine call. Engines borrow it mutably
/// one call at a time; nothing holds on to it between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameLedger {
    pub chips: i64,
    pub multiplier: f64,
    pub base_multiplier: f64,
    pub hand_size: i64,
    pub double_bet: bool,
    pub rerolls_remaining: i64,
    pub shop_discount: i64,
    pub shop_slots: i64,
}

impl GameLedger {
    pub fn new() -> Self {
        Self {
            chips: 0,
            multiplier: 1.0,
            base_multiplier: 1.0,
            hand_size: 8,
            double_bet: false,
            rerolls_remaining: 0,
            shop_discount: 0,
            shop_slots: 2,
        }
    }
}

impl Default for GameLedger {
    fn default() -> Self {
        Self::new()
    }
}
