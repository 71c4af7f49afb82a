use crate::{Event, EventBus, GameLedger, Source};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Amount both blinds rise by on each escalation.
pub const BLIND_ESCALATION_STEP: i64 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BossRule {
    BonusChips(i64),
    DoubleBet,
    Unknown { tag: String, value: f64 },
}

impl BossRule {
    pub fn from_tag(tag: &str, value: f64) -> Self {
        match tag {
            "bonus_chips" => Self::BonusChips(value.round() as i64),
            "double_bet" => Self::DoubleBet,
            other => Self::Unknown {
                tag: other.to_string(),
                value,
            },
        }
    }
}

/// Escalating blind schedule. Both blinds stay at or below `max_blind_cap`
/// once escalation has run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BossBlinds {
    small_blind: i64,
    big_blind: i64,
    escalation_rate: u32,
    max_blind_cap: i64,
    difficulty_level: u32,
    special_rules: Vec<BossRule>,
    round_counter: u32,
    boss_mode_active: bool,
}

impl BossBlinds {
    pub fn new(
        small_blind: i64,
        big_blind: i64,
        escalation_rate: u32,
        max_blind_cap: i64,
        difficulty_level: u32,
        special_rules: Vec<BossRule>,
    ) -> Self {
        Self {
            small_blind,
            big_blind,
            escalation_rate,
            max_blind_cap,
            difficulty_level,
            special_rules,
            round_counter: 0,
            boss_mode_active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.boss_mode_active
    }

    pub fn round_counter(&self) -> u32 {
        self.round_counter
    }

    pub fn difficulty_level(&self) -> u32 {
        self.difficulty_level
    }

    pub fn max_blind_cap(&self) -> i64 {
        self.max_blind_cap
    }

    pub fn special_rules(&self) -> &[BossRule] {
        &self.special_rules
    }

    pub fn activate(&mut self, events: &mut EventBus) {
        self.set_active(true, events);
    }

    pub fn deactivate(&mut self, events: &mut EventBus) {
        self.set_active(false, events);
    }

    fn set_active(&mut self, active: bool, events: &mut EventBus) {
        self.boss_mode_active = active;
        if active {
            log::info!("boss blinds mode activated");
        } else {
            log::info!("boss blinds mode deactivated");
        }
        events.push(Event::BossModeChanged { active });
    }

    fn threshold(&self) -> u32 {
        self.difficulty_level.saturating_mul(self.escalation_rate)
    }

    /// Per-round tick. Does nothing while boss mode is off.
    /// Returns true when the blinds escalated.
    pub fn tick(&mut self, events: &mut EventBus) -> bool {
        if !self.boss_mode_active {
            return false;
        }
        self.round_counter = self.round_counter.saturating_add(1);
        if self.round_counter < self.threshold() {
            return false;
        }
        self.small_blind = self
            .small_blind
            .saturating_add(BLIND_ESCALATION_STEP)
            .min(self.max_blind_cap);
        self.big_blind = self
            .big_blind
            .saturating_add(BLIND_ESCALATION_STEP)
            .min(self.max_blind_cap);
        self.round_counter = 0;
        log::info!(
            "boss blinds increased: small {} big {}",
            self.small_blind,
            self.big_blind
        );
        events.push(Event::BlindsEscalated {
            small: self.small_blind,
            big: self.big_blind,
        });
        true
    }

    pub fn rounds_until_escalation(&self) -> u32 {
        self.threshold().saturating_sub(self.round_counter)
    }

    pub fn apply_boss_rules(&self, ledger: &mut GameLedger, events: &mut EventBus) {
        for rule in &self.special_rules {
            match rule {
                BossRule::BonusChips(amount) => {
                    ledger.chips = ledger.chips.saturating_add(*amount);
                    log::info!("boss mode: +{amount} bonus chips applied");
                    events.push(Event::ChipsAdded {
                        source: Source::Boss,
                        amount: *amount,
                        chips: ledger.chips,
                    });
                }
                BossRule::DoubleBet => {
                    ledger.double_bet = true;
                    log::info!("boss mode: all bets are doubled");
                    events.push(Event::BetDoubled {
                        source: Source::Boss,
                    });
                }
                BossRule::Unknown { tag, .. } => {
                    log::warn!("unknown boss rule: {tag}");
                    events.push(Event::UnknownTag {
                        source: Source::Boss,
                        tag: tag.clone(),
                    });
                }
            }
        }
    }

    pub fn current_blinds(&self) -> (i64, i64) {
        (self.small_blind, self.big_blind)
    }
}

impl fmt::Display for BossBlinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "small blind {} | big blind {} | rounds until next increment {} | difficulty {} | cap {}",
            self.small_blind,
            self.big_blind,
            self.rounds_until_escalation(),
            self.difficulty_level,
            self.max_blind_cap
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_threshold_escalates_every_tick() {
        let mut boss = BossBlinds::new(10, 20, 0, 100, 1, Vec::new());
        let mut events = EventBus::default();
        boss.activate(&mut events);
        assert!(boss.tick(&mut events));
        assert!(boss.tick(&mut events));
        assert_eq!(boss.current_blinds(), (20, 30));
    }

    #[test]
    fn reactivation_keeps_counter() {
        let mut boss = BossBlinds::new(10, 20, 3, 100, 1, Vec::new());
        let mut events = EventBus::default();
        boss.activate(&mut events);
        boss.tick(&mut events);
        boss.activate(&mut events);
        assert_eq!(boss.round_counter(), 1);
        assert_eq!(boss.rounds_until_escalation(), 2);
    }

    #[test]
    fn countdown_scales_with_difficulty() {
        let mut boss = BossBlinds::new(10, 20, 2, 100, 3, Vec::new());
        let mut events = EventBus::default();
        boss.activate(&mut events);
        assert!(!boss.tick(&mut events));
        assert_eq!(boss.rounds_until_escalation(), 5);
    }

    #[test]
    fn blinds_saturate_before_cap() {
        let mut boss = BossBlinds::new(i64::MAX - 1, i64::MAX, 0, i64::MAX, 1, Vec::new());
        let mut events = EventBus::default();
        boss.activate(&mut events);
        assert!(boss.tick(&mut events));
        assert_eq!(boss.current_blinds(), (i64::MAX, i64::MAX));
    }
}
