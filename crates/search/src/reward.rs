use crate::{BuyState, PlayState, ShopItem};
use balatree_core::HandKind;

/// Scores the outcome of one rollout step. Swapped out by callers that
/// want something better than the placeholder.
pub trait RewardModel {
    fn play_reward(&self, state: &PlayState, action: HandKind) -> f64;

    fn buy_reward(&self, state: &BuyState, item: &ShopItem) -> f64;
}

/// `multiplier * play_scale` for play, `cost / buy_divisor` for buy.
/// Neither looks at the chosen action beyond the item cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceholderReward {
    pub play_scale: f64,
    pub buy_divisor: f64,
}

impl Default for PlaceholderReward {
    fn default() -> Self {
        Self {
            play_scale: 10.0,
            buy_divisor: 10.0,
        }
    }
}

impl RewardModel for PlaceholderReward {
    fn play_reward(&self, state: &PlayState, _action: HandKind) -> f64 {
        state.multiplier * self.play_scale
    }

    fn buy_reward(&self, _state: &BuyState, item: &ShopItem) -> f64 {
        if self.buy_divisor == 0.0 {
            return 0.0;
        }
        item.cost as f64 / self.buy_divisor
    }
}
