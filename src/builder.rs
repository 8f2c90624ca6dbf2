//! Builders for constructing trees.
//!
//! The `NodeBuilder` and `TreeBuilder` types enable building tree structures in a composable way.
//! Every node receives a fresh identity from the builder's [`UniqueGenerator`].

use std::marker::PhantomData;

use tracing::{debug, debug_span, trace};

use crate::{id::UniqueGenerator, Node, NodeValue, UuidGenerator};

/// A builder for adding children to a parent node.
///
/// It is handed to the closures passed to [`TreeBuilder::root`] and
/// [`NodeBuilder::child`].
pub struct NodeBuilder<'a, E, G = UuidGenerator>
where
    G: UniqueGenerator,
{
    node: &'a mut Node,
    idgen: &'a mut G,
    // Edges between the tree root and this node
    depth: usize,
    _phantom: PhantomData<E>,
}

impl<'a, E, G> NodeBuilder<'a, E, G>
where
    G: UniqueGenerator,
{
    fn new(node: &'a mut Node, idgen: &'a mut G, depth: usize) -> Self {
        Self {
            node,
            idgen,
            depth,
            _phantom: PhantomData,
        }
    }

    /// Adds a child to the current node.
    ///
    /// # Arguments
    ///
    /// * `value`: The value of the child node.
    /// * `f`: A closure that takes the child builder and adds its own children.
    pub fn child<F>(&mut self, value: NodeValue, f: F) -> Result<(), E>
    where
        F: FnOnce(&mut NodeBuilder<'_, E, G>) -> Result<(), E>,
    {
        let mut child = Node::new(self.idgen.generate(), value);
        trace!("Child {} value {} depth {}", child.id(), value, self.depth + 1);

        let mut node_builder = NodeBuilder::<E, G>::new(&mut child, self.idgen, self.depth + 1);

        // Call the supplied closure with the NodeBuilder to add this node's children
        f(&mut node_builder)?;

        self.node.push_child(child);
        Ok(())
    }

    pub fn node(&self) -> &Node {
        self.node
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// A builder for constructing trees.
///
/// The `root` method adds the root node and calls the provided closure with a
/// [`NodeBuilder`] that recursively builds its children. The closures return
/// `Result<(), E>` where `E` is your error type, so errors inside them propagate.
///
/// # Examples
///
/// ```
/// use canopy::{SequentialGenerator, TreeBuilder};
///
/// let root = TreeBuilder::<(), SequentialGenerator>::new()
///     .root(5, |root| {
///         root.child(3, |_| Ok(()))?;
///         root.child(7, |_| Ok(()))
///     })
///     .and_then(|builder| builder.done())
///     .unwrap()
///     .unwrap();
///
/// assert_eq!(root.num_children(), 2);
/// ```
#[derive(Debug)]
pub struct TreeBuilder<E, G = UuidGenerator>
where
    G: UniqueGenerator,
{
    idgen: G,
    root: Option<Node>,
    debug_span: tracing::Span,
    _phantom: PhantomData<E>,
}

impl<E, G> TreeBuilder<E, G>
where
    G: UniqueGenerator + Default,
{
    /// Creates a new `TreeBuilder` with a default identity generator.
    pub fn new() -> Self {
        Self::with_generator(G::default())
    }
}

impl<E, G> Default for TreeBuilder<E, G>
where
    G: UniqueGenerator + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E, G> TreeBuilder<E, G>
where
    G: UniqueGenerator,
{
    /// Creates a new `TreeBuilder` drawing node ids from `idgen`.
    pub fn with_generator(idgen: G) -> Self {
        let debug_span = debug_span!("TreeBuilder");
        debug_span.in_scope(|| debug!("Created new TreeBuilder"));

        Self {
            idgen,
            root: None,
            debug_span,
            _phantom: PhantomData,
        }
    }

    /// Returns the constructed tree when finished building it.
    pub fn done(self) -> Result<Option<Node>, E> {
        self.debug_span.in_scope(|| {
            debug!("Finished building tree");
            Ok(self.root)
        })
    }

    /// Adds a root node to the tree and returns the updated builder.
    ///
    /// # Panics
    ///
    /// Panics if the builder already holds a root.
    pub fn root<F>(mut self, value: NodeValue, f: F) -> Result<Self, E>
    where
        F: FnOnce(&mut NodeBuilder<'_, E, G>) -> Result<(), E>,
    {
        if self.root.is_some() {
            panic!("Root node already exists");
        }

        let mut root = Node::new(self.idgen.generate(), value);

        self.debug_span.in_scope(|| -> Result<(), E> {
            let mut node_builder = NodeBuilder::<E, G>::new(&mut root, &mut self.idgen, 0);

            // Call the supplied closure with the NodeBuilder to add this node's children
            f(&mut node_builder)?;

            debug!("Added root {}", root.id());
            Ok(())
        })?;

        self.root = Some(root);
        Ok(self)
    }
}
