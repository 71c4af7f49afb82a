use crate::{Action, PhaseState, RewardModel, SearchError};
use balatree_core::{EventBus, GameLedger, JokerCard, RngState, Voucher};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopItem {
    pub name: String,
    pub cost: i64,
}

impl ShopItem {
    pub fn new(name: impl Into<String>, cost: i64) -> Self {
        Self {
            name: name.into(),
            cost,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BuyState {
    pub shop_items: Vec<ShopItem>,
    pub money: i64,
    pub jokers_owned: Vec<JokerCard>,
    pub rerolls_remaining: i64,
    pub shop_level: u32,
    /// Percent off every purchase.
    pub bonus_discount: i64,
    pub items_purchased: Vec<String>,
    pub free_reroll_used: bool,
}

impl BuyState {
    pub fn new(
        shop_items: Vec<ShopItem>,
        money: i64,
        jokers_owned: Vec<JokerCard>,
        rerolls_remaining: i64,
        shop_level: u32,
    ) -> Self {
        Self {
            shop_items,
            money,
            jokers_owned,
            rerolls_remaining,
            shop_level,
            bonus_discount: 0,
            items_purchased: Vec::new(),
            free_reroll_used: false,
        }
    }

    pub fn affordable_items(&self) -> Vec<&ShopItem> {
        self.shop_items
            .iter()
            .filter(|item| item.cost <= self.money)
            .collect()
    }

    pub fn discounted_cost(&self, cost: i64) -> i64 {
        let percent = self.bonus_discount.clamp(0, 100);
        (cost - cost * percent / 100).max(0)
    }

    pub fn purchase(&mut self, name: &str) -> Result<ShopItem, SearchError> {
        let idx = self
            .shop_items
            .iter()
            .position(|item| item.name == name)
            .ok_or_else(|| SearchError::UnknownItem(name.to_string()))?;
        let cost = self.discounted_cost(self.shop_items[idx].cost);
        if cost > self.money {
            return Err(SearchError::NotEnoughMoney {
                cost,
                money: self.money,
            });
        }
        self.money -= cost;
        let item = self.shop_items.remove(idx);
        self.items_purchased.push(item.name.clone());
        log::debug!("bought {} for {cost}, {} left", item.name, self.money);
        Ok(item)
    }

    /// Replaces the shop offer. The first reroll of the phase is free.
    pub fn reroll(&mut self, items: Vec<ShopItem>) -> Result<(), SearchError> {
        if !self.free_reroll_used {
            self.free_reroll_used = true;
        } else if self.rerolls_remaining > 0 {
            self.rerolls_remaining -= 1;
        } else {
            return Err(SearchError::NoRerollsLeft);
        }
        self.shop_items = items;
        Ok(())
    }

    /// Applies `voucher` to a ledger seeded from this shop and keeps the
    /// discount and reroll fields. The ledger is returned for the caller to
    /// merge the rest.
    pub fn apply_voucher(&mut self, voucher: &Voucher, events: &mut EventBus) -> GameLedger {
        let mut ledger = GameLedger {
            shop_discount: self.bonus_discount,
            rerolls_remaining: self.rerolls_remaining,
            ..GameLedger::new()
        };
        voucher.apply_effect(&mut ledger, events);
        self.bonus_discount = ledger.shop_discount;
        self.rerolls_remaining = ledger.rerolls_remaining;
        ledger
    }
}

impl PhaseState for BuyState {
    fn is_terminal(&self) -> bool {
        self.money <= 0 || self.shop_items.is_empty()
    }

    fn legal_actions(&self) -> Vec<Action> {
        self.affordable_items()
            .into_iter()
            .map(|item| Action::Buy(item.name.clone()))
            .collect()
    }

    fn simulate(&self, rng: &mut RngState, reward: &dyn RewardModel) -> f64 {
        let affordable = self.affordable_items();
        match rng.choose(&affordable) {
            Some(item) => reward.buy_reward(self, item),
            None => 0.0,
        }
    }
}
