use balatree_core::HandKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Action {
    PlayHand(HandKind),
    Buy(String),
}

impl Action {
    pub fn stable_key(&self) -> String {
        match self {
            Self::PlayHand(kind) => format!("play:{}", kind.name()),
            Self::Buy(name) => format!("buy:{name}"),
        }
    }
}
