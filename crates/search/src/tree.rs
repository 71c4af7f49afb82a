use crate::{Action, NodeState, RewardModel, SearchError, StateType};
use balatree_core::RngState;
use serde::{Deserialize, Serialize};

/// Stable handle into a [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub state: NodeState,
    pub action: Option<Action>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    visits: u32,
    value: f64,
}

impl Node {
    fn new_root(state: NodeState) -> Self {
        Self {
            state,
            action: None,
            parent: None,
            children: Vec::new(),
            visits: 0,
            value: 0.0,
        }
    }

    fn new_child(parent: NodeId, action: Action, state: NodeState) -> Self {
        Self {
            state,
            action: Some(action),
            parent: Some(parent),
            children: Vec::new(),
            visits: 0,
            value: 0.0,
        }
    }

    pub fn state_type(&self) -> StateType {
        self.state.state_type()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn visits(&self) -> u32 {
        self.visits
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn mean_value(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.value / self.visits as f64
        }
    }
}

/// Arena of nodes. Children are owned by the arena and listed by handle on
/// their parent; the parent link is a plain handle used for walking up.
#[derive(Debug, Clone)]
pub struct SearchTree {
    nodes: Vec<Node>,
}

impl SearchTree {
    pub fn new(root: impl Into<NodeState>) -> Self {
        Self {
            nodes: vec![Node::new_root(root.into())],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, SearchError> {
        self.nodes.get(id.0).ok_or(SearchError::UnknownNode(id.0))
    }

    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, SearchError> {
        self.nodes.get_mut(id.0).ok_or(SearchError::UnknownNode(id.0))
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (NodeId(idx), node))
    }

    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>, SearchError> {
        Ok(self.node(id)?.parent)
    }

    pub fn children(&self, id: NodeId) -> Result<&[NodeId], SearchError> {
        Ok(&self.node(id)?.children)
    }

    pub fn add_child(
        &mut self,
        parent: NodeId,
        action: Action,
        state: impl Into<NodeState>,
    ) -> Result<NodeId, SearchError> {
        self.node(parent)?;
        let child = NodeId(self.nodes.len());
        self.nodes.push(Node::new_child(parent, action, state.into()));
        self.nodes[parent.0].children.push(child);
        Ok(child)
    }

    /// Adds one child per legal action of `id`, in action order. The
    /// transition builds each child's state from the parent's state. Either
    /// every child is added or, if a transition fails, none are.
    pub fn expand<F>(&mut self, id: NodeId, mut transition: F) -> Result<Vec<NodeId>, SearchError>
    where
        F: FnMut(&NodeState, &Action) -> Result<NodeState, SearchError>,
    {
        let parent = &self.node(id)?.state;
        let mut pending = Vec::new();
        for action in parent.legal_actions()? {
            let next = transition(parent, &action)?;
            pending.push((action, next));
        }
        let mut created = Vec::with_capacity(pending.len());
        for (action, next) in pending {
            created.push(self.add_child(id, action, next)?);
        }
        log::debug!("expanded node {} into {} children", id.0, created.len());
        Ok(created)
    }

    /// Handles from `id` up to and including the root.
    pub fn path_to_root(&self, id: NodeId) -> Result<Vec<NodeId>, SearchError> {
        let mut path = Vec::new();
        let mut walk = Some(id);
        while let Some(current) = walk {
            path.push(current);
            walk = self.node(current)?.parent;
        }
        Ok(path)
    }

    pub fn depth(&self, id: NodeId) -> Result<usize, SearchError> {
        Ok(self.path_to_root(id)?.len() - 1)
    }

    pub fn simulate(
        &self,
        id: NodeId,
        rng: &mut RngState,
        reward: &dyn RewardModel,
    ) -> Result<f64, SearchError> {
        self.node(id)?.state.simulate(rng, reward)
    }

    pub fn backpropagate(&mut self, id: NodeId, reward: f64) -> Result<(), SearchError> {
        self.node(id)?;
        let mut walk = Some(id);
        while let Some(idx) = walk {
            let node = &mut self.nodes[idx.0];
            node.visits = node.visits.saturating_add(1);
            node.value += reward;
            walk = node.parent;
        }
        Ok(())
    }

    /// Simulates from `id` and feeds the reward back up to the root.
    pub fn rollout(
        &mut self,
        id: NodeId,
        rng: &mut RngState,
        reward: &dyn RewardModel,
    ) -> Result<f64, SearchError> {
        let value = self.simulate(id, rng, reward)?;
        self.backpropagate(id, value)?;
        Ok(value)
    }
}
