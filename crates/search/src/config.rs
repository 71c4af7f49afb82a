use crate::PlaceholderReward;
use balatree_core::RngState;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub seed: u64,
    pub play_reward_scale: f64,
    pub buy_reward_divisor: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            seed: 0xC0FFEE,
            play_reward_scale: 10.0,
            buy_reward_divisor: 10.0,
        }
    }
}

impl SearchConfig {
    pub fn rng(&self) -> RngState {
        RngState::from_seed(self.seed)
    }

    pub fn reward(&self) -> PlaceholderReward {
        PlaceholderReward {
            play_scale: self.play_reward_scale,
            buy_divisor: self.buy_reward_divisor,
        }
    }
}
