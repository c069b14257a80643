// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Perfect binary tree construction and node counting.
//!
//! Leaves are real nodes with two absent children, so a tree of depth `d`
//! holds `2^(d+1) - 1` nodes.

/// A payload-free tree node owning its two children.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Node {
    pub left: Option<Box<Node>>,
    pub right: Option<Box<Node>>,
}

impl Node {
    /// A node with no children.
    pub fn leaf() -> Self {
        Self::default()
    }

    /// Whether both children are absent.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Build a perfect tree counting the depth down to zero.
pub fn build(depth: u32) -> Node {
    if depth == 0 {
        return Node::leaf();
    }
    Node {
        left: Some(Box::new(build(depth - 1))),
        right: Some(Box::new(build(depth - 1))),
    }
}

/// Count every node reachable from `tree`.
pub fn count(tree: &Node) -> u64 {
    1 + count_child(tree.left.as_deref()) + count_child(tree.right.as_deref())
}

fn count_child(child: Option<&Node>) -> u64 {
    child.map_or(0, count)
}

/// Build a tree of `depth` and return its node count.
pub fn build_and_count(depth: u32) -> u64 {
    let tree = build(depth);
    let nodes = count(&tree);
    tracing::debug!(depth, nodes, "Binary tree counted");
    nodes
}
