use crate::StateType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("{capability} is not implemented for {state_type} states")]
    NotImplemented {
        state_type: StateType,
        capability: &'static str,
    },
    #[error("unknown node {0}")]
    UnknownNode(usize),
    #[error("no rounds remaining")]
    NoRoundsLeft,
    #[error("shop item not found: {0}")]
    UnknownItem(String),
    #[error("not enough money: need {cost}, have {money}")]
    NotEnoughMoney { cost: i64, money: i64 },
    #[error("no rerolls left")]
    NoRerollsLeft,
    #[error("io error: {0}")]
    Io(String),
    #[error("serialize error: {0}")]
    Serialize(String),
}

impl From<std::io::Error> for SearchError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value.to_string())
    }
}
