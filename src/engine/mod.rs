//! Module for the core logic: the recursive expansion of a semantic model into a fixture tree

mod builder;
mod suffix;

pub(crate) use builder::{TreeBuilder, TreeSummary};
