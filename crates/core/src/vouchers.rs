use crate::{Event, EventBus, GameLedger, Rarity, Source};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VoucherEffect {
    /// Percent taken off shop prices.
    Discount(i64),
    RerollBonus(i64),
    ShopSlots(i64),
    BonusChips(i64),
    Unknown { tag: String, value: f64 },
}

impl VoucherEffect {
    pub fn from_tag(tag: &str, value: f64) -> Self {
        let amount = value.round() as i64;
        match tag {
            "Discount" => Self::Discount(amount),
            "Reroll Bonus" => Self::RerollBonus(amount),
            "Shop Slots" => Self::ShopSlots(amount),
            "Bonus Chips" => Self::BonusChips(amount),
            other => Self::Unknown {
                tag: other.to_string(),
                value,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voucher {
    pub name: String,
    pub cost: i64,
    #[serde(default)]
    pub description: String,
    pub rarity: Rarity,
    pub effect: VoucherEffect,
}

impl Voucher {
    /// Applies the voucher once. Callers own the "only once" bookkeeping.
    pub fn apply_effect(&self, ledger: &mut GameLedger, events: &mut EventBus) {
        let source = Source::Voucher(self.name.clone());
        match &self.effect {
            VoucherEffect::Discount(percent) => {
                ledger.shop_discount = ledger.shop_discount.saturating_add(*percent);
                log::info!("{} applied: shop items cost {percent}% less", self.name);
                events.push(Event::DiscountAdded {
                    source,
                    percent: *percent,
                    discount: ledger.shop_discount,
                });
            }
            VoucherEffect::RerollBonus(amount) => {
                ledger.rerolls_remaining = ledger.rerolls_remaining.saturating_add(*amount);
                log::info!("{} applied: +{amount} rerolls", self.name);
                events.push(Event::RerollsAdded {
                    source,
                    amount: *amount,
                    rerolls: ledger.rerolls_remaining,
                });
            }
            VoucherEffect::ShopSlots(amount) => {
                ledger.shop_slots = ledger.shop_slots.saturating_add(*amount);
                log::info!("{} applied: +{amount} shop slots", self.name);
                events.push(Event::ShopSlotsAdded {
                    source,
                    amount: *amount,
                    slots: ledger.shop_slots,
                });
            }
            VoucherEffect::BonusChips(amount) => {
                ledger.chips = ledger.chips.saturating_add(*amount);
                log::info!("{} applied: +{amount} chips", self.name);
                events.push(Event::ChipsAdded {
                    source,
                    amount: *amount,
                    chips: ledger.chips,
                });
            }
            VoucherEffect::Unknown { tag, .. } => {
                log::warn!("unknown voucher effect type: {tag}");
                events.push(Event::UnknownTag {
                    source,
                    tag: tag.clone(),
                });
            }
        }
    }
}
