use crate::{Action, NodeId, SearchError, SearchTree, StateType};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeSnapshot {
    pub id: NodeId,
    pub state_type: StateType,
    pub parent: Option<NodeId>,
    pub action: Option<Action>,
    pub children: Vec<NodeId>,
    pub visits: u32,
    pub value: f64,
    pub mean_value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TreeSnapshot {
    pub nodes: Vec<NodeSnapshot>,
}

impl TreeSnapshot {
    pub fn to_text_report(&self) -> String {
        let mut lines = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            let action = node
                .action
                .as_ref()
                .map(Action::stable_key)
                .unwrap_or_else(|| "root".to_string());
            lines.push(format!(
                "node {:>4} | {} | {} | visits {} value {:.2} mean {:.2} children {}",
                node.id.index(),
                node.state_type,
                action,
                node.visits,
                node.value,
                node.mean_value,
                node.children.len()
            ));
        }
        lines.join("\n")
    }
}

impl SearchTree {
    pub fn snapshot(&self) -> TreeSnapshot {
        TreeSnapshot {
            nodes: self
                .nodes()
                .map(|(id, node)| NodeSnapshot {
                    id,
                    state_type: node.state_type(),
                    parent: node.parent(),
                    action: node.action.clone(),
                    children: node.children().to_vec(),
                    visits: node.visits(),
                    value: node.value(),
                    mean_value: node.mean_value(),
                })
                .collect(),
        }
    }
}

pub fn write_json(path: &Path, snapshot: &TreeSnapshot) -> Result<(), SearchError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let body = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, body)?;
    Ok(())
}
