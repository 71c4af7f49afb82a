use crate::{Action, BuyState, PlayState, RewardModel, SearchError};
use balatree_core::RngState;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateType {
    Play,
    Buy,
    Other(String),
}

impl fmt::Display for StateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateType::Play => f.write_str("Play"),
            StateType::Buy => f.write_str("Buy"),
            StateType::Other(tag) => f.write_str(tag),
        }
    }
}

/// Capabilities every concrete phase provides to the search.
pub trait PhaseState {
    fn is_terminal(&self) -> bool;

    /// Deterministic for a given state; order is part of the contract.
    fn legal_actions(&self) -> Vec<Action>;

    /// One stochastic rollout. Must not touch node statistics.
    fn simulate(&self, rng: &mut RngState, reward: &dyn RewardModel) -> f64;
}

/// Payload of a search node. `Pending` reserves a slot for phases that
/// have a tag but no behaviour yet; asking it for anything is an error.
#[derive(Debug, Clone)]
pub enum NodeState {
    Play(PlayState),
    Buy(BuyState),
    Pending { tag: String },
}

impl NodeState {
    pub fn state_type(&self) -> StateType {
        match self {
            NodeState::Play(_) => StateType::Play,
            NodeState::Buy(_) => StateType::Buy,
            NodeState::Pending { tag } => StateType::Other(tag.clone()),
        }
    }

    fn phase(&self, capability: &'static str) -> Result<&dyn PhaseState, SearchError> {
        match self {
            NodeState::Play(state) => Ok(state as &dyn PhaseState),
            NodeState::Buy(state) => Ok(state as &dyn PhaseState),
            NodeState::Pending { .. } => Err(SearchError::NotImplemented {
                state_type: self.state_type(),
                capability,
            }),
        }
    }

    pub fn is_terminal(&self) -> Result<bool, SearchError> {
        Ok(self.phase("is_terminal")?.is_terminal())
    }

    pub fn legal_actions(&self) -> Result<Vec<Action>, SearchError> {
        Ok(self.phase("legal_actions")?.legal_actions())
    }

    pub fn simulate(
        &self,
        rng: &mut RngState,
        reward: &dyn RewardModel,
    ) -> Result<f64, SearchError> {
        Ok(self.phase("simulate")?.simulate(rng, reward))
    }
}

impl From<PlayState> for NodeState {
    fn from(value: PlayState) -> Self {
        NodeState::Play(value)
    }
}

impl From<BuyState> for NodeState {
    fn from(value: BuyState) -> Self {
        NodeState::Buy(value)
    }
}
