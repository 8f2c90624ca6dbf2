//! Subtree height and level width.

use crate::Node;

/// Height of the subtree rooted at `node`: the number of edges on the longest
/// path down to a leaf. A leaf has height 0.
pub fn height(node: &Node) -> usize {
    node.children()
        .iter()
        .map(|child| 1 + height(child))
        .max()
        .unwrap_or(0)
}

/// Count the nodes exactly `level` edges below `node`. Level 0 is the node itself.
pub fn count_at_level(node: &Node, level: usize) -> usize {
    if level == 0 {
        return 1;
    }

    node.children()
        .iter()
        .map(|child| count_at_level(child, level - 1))
        .sum()
}

/// Heights of every node in a tree, computed once bottom-up and stored by
/// pre-order position (see [`crate::IterNode::index`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightIndex {
    heights: Vec<usize>,
}

impl HeightIndex {
    pub fn build(root: &Node) -> Self {
        fn fill(node: &Node, heights: &mut Vec<usize>) -> usize {
            // Reserve this node's pre-order slot before descending
            let slot = heights.len();
            heights.push(0);

            let h = node
                .children()
                .iter()
                .map(|child| 1 + fill(child, heights))
                .max()
                .unwrap_or(0);

            heights[slot] = h;
            h
        }

        let mut heights = Vec::new();
        fill(root, &mut heights);
        Self { heights }
    }

    /// Height of the node at pre-order position `index`
    pub fn get(&self, index: usize) -> Option<usize> {
        self.heights.get(index).copied()
    }

    /// Height of the root
    pub fn root(&self) -> usize {
        self.heights[0]
    }

    /// Number of nodes in the tree, at least 1
    pub fn num_nodes(&self) -> usize {
        self.heights.len()
    }
}
