use std::hash::{Hash, Hasher};

use xxhash_rust::xxh64::Xxh64;

use crate::{iterator::PreOrderIter, NodeId, NodeValue};

/// A node of an n-ary tree. Children are owned and kept in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node {
    id: NodeId,
    value: NodeValue,
    children: Vec<Node>,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, value: NodeValue) -> Self {
        Self {
            id: id.into(),
            value,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn value(&self) -> NodeValue {
        self.value
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Return the number of child nodes for this node
    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Add a new child node after any existing children
    pub fn push_child(&mut self, node: Node) {
        self.children.push(node);
    }

    /// Iterate the subtree rooted at this node in pre-order
    pub fn iter(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(self)
    }

    /// Hash the whole subtree rooted at this node, including ids and child order
    pub fn xxhash(&self) -> u64 {
        let mut hasher = Xxh64::new(0);
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl<'a> IntoIterator for &'a Node {
    type Item = crate::iterator::IterNode<'a>;
    type IntoIter = PreOrderIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
