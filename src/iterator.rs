use std::{collections::VecDeque, ops::Deref};

use crate::Node;

/// A node yielded by [`PreOrderIter`], with its position relative to the
/// node the iteration started from.
#[derive(Debug, Clone, Copy)]
pub struct IterNode<'iter> {
    depth: usize,
    index: usize,
    node: &'iter Node,
}

impl<'iter> IterNode<'iter> {
    /// Number of edges between the iteration root and this node
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Pre-order position, starting at 0 for the iteration root
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn node(&self) -> &'iter Node {
        self.node
    }
}

impl<'iter> Deref for IterNode<'iter> {
    type Target = Node;

    fn deref(&self) -> &Self::Target {
        self.node
    }
}

/// Depth-first pre-order iterator. Parents are yielded before their
/// children, and children in their stored order.
pub struct PreOrderIter<'iter> {
    stack: VecDeque<(usize, &'iter Node)>,
    next_index: usize,
}

impl<'iter> PreOrderIter<'iter> {
    pub fn new(node: &'iter Node) -> Self {
        Self {
            stack: VecDeque::from([(0, node)]),
            next_index: 0,
        }
    }
}

impl<'iter> Iterator for PreOrderIter<'iter> {
    type Item = IterNode<'iter>;

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop_front()?;

        // Push children in reverse so the first child is popped next
        node.children()
            .iter()
            .rev()
            .for_each(|child| self.stack.push_front((depth + 1, child)));

        let index = self.next_index;
        self.next_index += 1;

        Some(IterNode { depth, index, node })
    }
}
