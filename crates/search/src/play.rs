use crate::{Action, PhaseState, RewardModel, SearchError};
use balatree_core::{
    score_hand, BossBlinds, CardRef, Consumable, EventBus, GameLedger, Hand, HandKind, JokerCard,
    RngState, Score,
};

/// Hand categories offered as play actions. Fixed for now: the candidates
/// are not derived from the cards actually held.
pub const PLAY_CANDIDATES: [HandKind; 4] = [
    HandKind::Pair,
    HandKind::Flush,
    HandKind::FullHouse,
    HandKind::Straight,
];

#[derive(Debug, Clone)]
pub struct PlayState {
    pub hand: Vec<CardRef>,
    pub chips: i64,
    pub multiplier: f64,
    pub required_score: i64,
    pub current_score: i64,
    pub rounds_remaining: i32,
    pub jokers: Vec<JokerCard>,
    pub active_buffs: Vec<String>,
    pub is_boss_round: bool,
    pub played_hands: Vec<HandKind>,
    pub bonus_cards_used: u32,
    pub multiplier_history: Vec<f64>,
}

impl PlayState {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        hand: Vec<CardRef>,
        chips: i64,
        multiplier: f64,
        required_score: i64,
        current_score: i64,
        rounds_remaining: i32,
        jokers: Vec<JokerCard>,
        active_buffs: Vec<String>,
    ) -> Self {
        Self {
            hand,
            chips,
            multiplier,
            required_score,
            current_score,
            rounds_remaining,
            jokers,
            active_buffs,
            is_boss_round: false,
            played_hands: Vec::new(),
            bonus_cards_used: 0,
            multiplier_history: Vec::new(),
        }
    }

    /// Scores `hand` on top of the state's chips and multiplier and spends
    /// one round.
    pub fn play_hand(&mut self, hand: &Hand) -> Result<Score, SearchError> {
        if self.rounds_remaining <= 0 {
            return Err(SearchError::NoRoundsLeft);
        }
        let breakdown = score_hand(hand);
        let score = Score {
            chips: breakdown.total.chips.saturating_add(self.chips),
            mult: breakdown.total.mult * self.multiplier,
        };
        self.current_score = self.current_score.saturating_add(score.total());
        self.rounds_remaining -= 1;
        self.played_hands.push(hand.kind());
        self.multiplier_history.push(score.mult);
        log::debug!(
            "played {} for {} ({}/{})",
            hand.kind(),
            score.total(),
            self.current_score,
            self.required_score
        );
        Ok(score)
    }

    /// Applies `consumable` on top of the state's chips and multiplier and
    /// keeps those two. The ledger is returned for the caller to merge the
    /// rest (hand size, bet flag).
    pub fn use_consumable(
        &mut self,
        consumable: &dyn Consumable,
        events: &mut EventBus,
    ) -> GameLedger {
        let mut scratch = self.scratch_ledger();
        consumable.apply_effect(&mut scratch, events);
        self.write_back(&scratch);
        self.bonus_cards_used = self.bonus_cards_used.saturating_add(1);
        scratch
    }

    /// Turns this into a boss round. Returns whether bets are now doubled.
    pub fn enter_boss_round(&mut self, boss: &mut BossBlinds, events: &mut EventBus) -> bool {
        self.is_boss_round = true;
        boss.activate(events);
        let mut scratch = self.scratch_ledger();
        boss.apply_boss_rules(&mut scratch, events);
        self.write_back(&scratch);
        scratch.double_bet
    }

    fn scratch_ledger(&self) -> GameLedger {
        GameLedger {
            chips: self.chips,
            multiplier: self.multiplier,
            ..GameLedger::new()
        }
    }

    fn write_back(&mut self, ledger: &GameLedger) {
        self.chips = ledger.chips;
        self.multiplier = ledger.multiplier;
    }
}

impl PhaseState for PlayState {
    fn is_terminal(&self) -> bool {
        self.current_score >= self.required_score || self.rounds_remaining <= 0
    }

    fn legal_actions(&self) -> Vec<Action> {
        PLAY_CANDIDATES.into_iter().map(Action::PlayHand).collect()
    }

    fn simulate(&self, rng: &mut RngState, reward: &dyn RewardModel) -> f64 {
        match rng.choose(&PLAY_CANDIDATES[..]) {
            Some(kind) => reward.play_reward(self, *kind),
            None => 0.0,
        }
    }
}
