//! Widest and narrowest subtree search.
//!
//! Every node whose subtree height equals the target height is a candidate.
//! Its width is the number of nodes at the target level below it, which for a
//! candidate is the number of nodes on its deepest level. The search keeps all
//! candidates sharing the extremal width, in pre-order.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::{
    error::{non_negative, TreeResult},
    height::{count_at_level, HeightIndex},
    Node,
};

/// Check a caller-supplied target height, rejecting negatives with
/// [`crate::TreeError::InvalidArgument`]
pub fn validate_height(target_height: i64) -> TreeResult<usize> {
    non_negative("target_height", target_height)
}

/// Which end of the width range a search keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    Widest,
    Narrowest,
}

impl Extremum {
    /// `Greater` when `width` beats the current `best`
    fn compare(self, width: usize, best: usize) -> Ordering {
        match self {
            Extremum::Widest => width.cmp(&best),
            Extremum::Narrowest => best.cmp(&width),
        }
    }
}

impl std::fmt::Display for Extremum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Extremum::Widest => f.write_str("widest"),
            Extremum::Narrowest => f.write_str("narrowest"),
        }
    }
}

/// Subtree roots sharing the extremal width, in pre-order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subtrees<'a> {
    width: Option<usize>,
    nodes: Vec<&'a Node>,
}

impl<'a> Subtrees<'a> {
    fn empty() -> Self {
        Self {
            width: None,
            nodes: Vec::new(),
        }
    }

    /// Fold a candidate into the running extremum
    fn offer(mut self, extremum: Extremum, node: &'a Node, width: usize) -> Self {
        match self.width.map(|best| extremum.compare(width, best)) {
            None | Some(Ordering::Greater) => {
                self.width = Some(width);
                self.nodes.clear();
                self.nodes.push(node);
            }
            Some(Ordering::Equal) => self.nodes.push(node),
            Some(Ordering::Less) => {}
        }
        self
    }

    /// The shared width of the found subtrees, `None` if nothing matched
    pub fn width(&self) -> Option<usize> {
        self.width
    }

    pub fn nodes(&self) -> &[&'a Node] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<&'a Node> {
        self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Answers subtree queries over one tree. Heights are computed once on
/// construction and shared by every query.
#[derive(Debug)]
pub struct SubtreeSearch<'a> {
    root: &'a Node,
    heights: HeightIndex,
}

impl<'a> SubtreeSearch<'a> {
    pub fn new(root: &'a Node) -> Self {
        let heights = HeightIndex::build(root);
        debug!(
            "Indexed {} nodes, root height {}",
            heights.num_nodes(),
            heights.root()
        );
        Self { root, heights }
    }

    pub fn root(&self) -> &'a Node {
        self.root
    }

    pub fn heights(&self) -> &HeightIndex {
        &self.heights
    }

    /// Find the subtrees of height `target_height` with the extremal width.
    ///
    /// Returns an empty set when no subtree has that height. A negative
    /// height is rejected with [`crate::TreeError::InvalidArgument`].
    pub fn find(&self, target_height: i64, extremum: Extremum) -> TreeResult<Subtrees<'a>> {
        let target = validate_height(target_height)?;

        let found = self
            .root
            .iter()
            .filter(|node| self.heights.get(node.index()) == Some(target))
            .fold(Subtrees::empty(), |found, node| {
                let width = count_at_level(node.node(), target);
                trace!("Candidate {} width {}", node.id(), width);
                found.offer(extremum, node.node(), width)
            });

        debug!(
            "Found {} {} subtrees at height {} with width {:?}",
            found.len(),
            extremum,
            target,
            found.width()
        );

        Ok(found)
    }

    pub fn widest(&self, target_height: i64) -> TreeResult<Subtrees<'a>> {
        self.find(target_height, Extremum::Widest)
    }

    pub fn narrowest(&self, target_height: i64) -> TreeResult<Subtrees<'a>> {
        self.find(target_height, Extremum::Narrowest)
    }
}

fn find_optional(
    root: Option<&Node>,
    target_height: i64,
    extremum: Extremum,
) -> TreeResult<Vec<&Node>> {
    // Validate before looking at the tree so an empty tree still rejects bad input
    validate_height(target_height)?;

    match root {
        Some(root) => Ok(SubtreeSearch::new(root)
            .find(target_height, extremum)?
            .into_nodes()),
        None => Ok(Vec::new()),
    }
}

/// Roots of the widest subtrees of height `target_height`, in pre-order
pub fn find_widest(root: Option<&Node>, target_height: i64) -> TreeResult<Vec<&Node>> {
    find_optional(root, target_height, Extremum::Widest)
}

/// Roots of the narrowest subtrees of height `target_height`, in pre-order
pub fn find_narrowest(root: Option<&Node>, target_height: i64) -> TreeResult<Vec<&Node>> {
    find_optional(root, target_height, Extremum::Narrowest)
}
