//! Random tree generation.

use std::convert::Infallible;

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, debug_span};

use crate::{
    error::{non_negative, TreeResult},
    id::UniqueGenerator,
    Node, NodeBuilder, NodeValue, TreeBuilder, UuidGenerator,
};

/// Values are drawn uniformly from this inclusive range
pub const VALUE_RANGE: std::ops::RangeInclusive<NodeValue> = 0..=100;

pub const DEFAULT_MAX_DEPTH: i64 = 5;
pub const DEFAULT_MAX_CHILDREN: i64 = 4;

/// Parameters for a generated tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of node levels. No node lies more than `max_depth - 1` edges below the root.
    pub max_depth: i64,
    /// Upper bound of the uniform draw for the number of children of each node
    pub max_children: i64,
    /// Seed for reproducible trees
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_children: DEFAULT_MAX_CHILDREN,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Generate a tree with fresh UUID identities
    pub fn generate(&self) -> TreeResult<Option<Node>> {
        let mut generator = match self.seed {
            Some(seed) => TreeGenerator::seeded(seed),
            None => TreeGenerator::from_entropy(),
        };
        generator.generate(self.max_depth, self.max_children)
    }
}

/// Builds random trees from an injected random source and identity generator.
#[derive(Debug)]
pub struct TreeGenerator<G = UuidGenerator, R = StdRng>
where
    G: UniqueGenerator,
    R: Rng,
{
    idgen: G,
    rng: R,
}

impl TreeGenerator {
    /// A generator whose values and shape are reproducible for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(UuidGenerator, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(UuidGenerator, StdRng::from_entropy())
    }
}

impl<G, R> TreeGenerator<G, R>
where
    G: UniqueGenerator,
    R: Rng,
{
    pub fn new(idgen: G, rng: R) -> Self {
        Self { idgen, rng }
    }

    /// Generate a random tree.
    ///
    /// Every node gets a value from [`VALUE_RANGE`] and draws its number of
    /// children uniformly from `0..=max_children`. Children that would sit at
    /// `max_depth` are not created, so the realized branching factor near the
    /// bottom of the tree is lower than drawn.
    ///
    /// Returns `None` when `max_depth` is 0.
    pub fn generate(&mut self, max_depth: i64, max_children: i64) -> TreeResult<Option<Node>> {
        let max_depth = non_negative("max_depth", max_depth)?;
        let max_children = non_negative("max_children", max_children)?;

        let span = debug_span!("generate", max_depth, max_children);
        let _enter = span.enter();

        if max_depth == 0 {
            debug!("Zero depth, no root");
            return Ok(None);
        }

        let Self { idgen, rng } = self;
        let value = rng.gen_range(VALUE_RANGE);

        let root = TreeBuilder::<Infallible, &mut G>::with_generator(idgen)
            .root(value, |root| grow(root, rng, max_depth, max_children))
            .and_then(|builder| builder.done())
            .unwrap_or_else(|never| match never {});

        if let Some(root) = &root {
            debug!(
                "Generated {} nodes, root {}",
                root.iter().count(),
                root.id()
            );
        }

        Ok(root)
    }
}

fn grow<G, R>(
    builder: &mut NodeBuilder<'_, Infallible, G>,
    rng: &mut R,
    max_depth: usize,
    max_children: usize,
) -> Result<(), Infallible>
where
    G: UniqueGenerator,
    R: Rng,
{
    let num_children = rng.gen_range(0..=max_children);

    // Children at max_depth come back empty
    if builder.depth() + 1 >= max_depth {
        return Ok(());
    }

    for _ in 0..num_children {
        let value = rng.gen_range(VALUE_RANGE);
        builder.child(value, |child| grow(child, rng, max_depth, max_children))?;
    }

    Ok(())
}
