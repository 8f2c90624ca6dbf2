//! # Canopy
//!
//! Random n-ary trees and subtree width queries.
//!
//! ## Overview
//!
//! Canopy generates random trees of bounded depth and branching factor, stores
//! and restores them as JSON, and finds the subtrees of a given height that are
//! widest or narrowest at that height.
//!
//! ```
//! use canopy::{SubtreeSearch, TreeGenerator};
//!
//! let root = TreeGenerator::seeded(7).generate(5, 4).unwrap().unwrap();
//! let search = SubtreeSearch::new(&root);
//!
//! for subtree in search.widest(1).unwrap().nodes() {
//!     println!("{}", subtree);
//! }
//! ```

mod builder;
mod display;
mod error;
mod id;
mod iterator;
mod node;

pub mod codec;
pub mod generator;
pub mod height;
pub mod search;

#[cfg(test)]
mod test;

pub use builder::*;
pub use display::TreeDisplay;
pub use error::{TreeError, TreeResult};
pub use generator::{GeneratorConfig, TreeGenerator};
pub use id::*;
pub use iterator::{IterNode, PreOrderIter};
pub use node::Node;
pub use search::{
    find_narrowest, find_widest, validate_height, Extremum, SubtreeSearch, Subtrees,
};

pub type NodeId = String;
pub type NodeValue = i64;
