//! Arena-based search tree.
//!
//! Nodes live in a flat `Vec` and reference each other by index, which
//! keeps traversal cache-friendly and sidesteps ownership cycles.

use smallvec::SmallVec;

use crate::game::{GameState, Move};

/// Index into the tree's node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel for "no node" (the root's parent).
    pub const NONE: NodeId = NodeId(u32::MAX);

    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }
}

/// One node: the state reached by `move_from_parent`, plus search tallies.
#[derive(Debug)]
pub struct MctsNode {
    pub parent: NodeId,

    /// The move that produced this node's state (`None` at the root).
    pub move_from_parent: Option<Move>,

    /// State snapshot after the move was applied.
    pub state: GameState,

    /// Legal moves not yet expanded into children.
    pub untried: Vec<Move>,

    /// Expanded children.
    pub children: SmallVec<[NodeId; 8]>,

    pub visits: u32,
    pub total_reward: f64,
}

impl MctsNode {
    /// Create a node for `state`; untried moves are the state's current
    /// legal set.
    #[must_use]
    pub fn new(parent: NodeId, move_from_parent: Option<Move>, state: GameState) -> Self {
        let untried = state.legal_moves_current();
        Self {
            parent,
            move_from_parent,
            state,
            untried,
            children: SmallVec::new(),
            visits: 0,
            total_reward: 0.0,
        }
    }

    /// Mean reward over visits (0 before the first visit).
    #[must_use]
    pub fn mean_reward(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.total_reward / f64::from(self.visits)
        }
    }

    /// A leaf for selection purposes: nothing tried, nothing expanded, or
    /// a terminal state.
    #[must_use]
    pub fn is_fully_expanded(&self) -> bool {
        self.untried.is_empty() && !self.children.is_empty()
    }
}

/// The arena tree.
#[derive(Debug)]
pub struct MctsTree {
    nodes: Vec<MctsNode>,
}

impl MctsTree {
    /// Create a tree rooted at `state`.
    #[must_use]
    pub fn new(state: GameState) -> Self {
        Self {
            nodes: vec![MctsNode::new(NodeId::NONE, None, state)],
        }
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &MctsNode {
        &self.nodes[id.0 as usize]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MctsNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a node and link it under its parent.
    pub fn alloc(&mut self, node: MctsNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let parent = node.parent;
        self.nodes.push(node);
        if !parent.is_none() {
            self.get_mut(parent).children.push(id);
        }
        id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Root child with the highest visit count (the robust child).
    #[must_use]
    pub fn most_visited_root_child(&self) -> Option<&MctsNode> {
        self.get(self.root())
            .children
            .iter()
            .map(|&id| self.get(id))
            .max_by_key(|n| n.visits)
    }

    /// (move, visits) per root child, in expansion order.
    #[must_use]
    pub fn root_visit_counts(&self) -> Vec<(Move, u32)> {
        self.get(self.root())
            .children
            .iter()
            .filter_map(|&id| {
                let node = self.get(id);
                node.move_from_parent.map(|mv| (mv, node.visits))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_tree() -> MctsTree {
        MctsTree::new(GameState::new(&["a", "b"], 42))
    }

    #[test]
    fn test_new_tree_has_untried_root() {
        let tree = fresh_tree();
        let root = tree.get(tree.root());

        assert_eq!(tree.len(), 1);
        assert!(root.parent.is_none());
        assert!(root.move_from_parent.is_none());
        assert!(!root.untried.is_empty());
        assert!(!root.is_fully_expanded());
    }

    #[test]
    fn test_alloc_links_child() {
        let mut tree = fresh_tree();
        let root = tree.root();

        let mv = tree.get_mut(root).untried.pop().unwrap();
        let mut child_state = tree.get_mut(root).state.clone_state();
        child_state.apply(&mv).unwrap();
        let child = tree.alloc(MctsNode::new(root, Some(mv), child_state));

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.get(root).children.as_slice(), &[child]);
        assert_eq!(tree.get(child).parent, root);
        assert_eq!(tree.get(child).move_from_parent, Some(mv));
    }

    #[test]
    fn test_mean_reward() {
        let mut tree = fresh_tree();
        let root = tree.root();

        assert_eq!(tree.get(root).mean_reward(), 0.0);

        tree.get_mut(root).visits = 4;
        tree.get_mut(root).total_reward = 6.0;
        assert_eq!(tree.get(root).mean_reward(), 1.5);
    }

    #[test]
    fn test_most_visited_root_child() {
        let mut tree = fresh_tree();
        let root = tree.root();

        for _ in 0..2 {
            let mv = tree.get_mut(root).untried.pop().unwrap();
            let mut state = tree.get_mut(root).state.clone_state();
            state.apply(&mv).unwrap();
            tree.alloc(MctsNode::new(root, Some(mv), state));
        }
        let children: Vec<NodeId> = tree.get(root).children.to_vec();
        tree.get_mut(children[0]).visits = 3;
        tree.get_mut(children[1]).visits = 9;

        let best = tree.most_visited_root_child().unwrap();
        assert_eq!(best.visits, 9);

        let counts = tree.root_visit_counts();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.iter().map(|(_, v)| v).sum::<u32>(), 12);
    }
}
