//! Node implementation for the ranking graph

use super::types::{NodeId, NodeName};
use serde::{Deserialize, Serialize};

/// A node in the directed graph
///
/// Links are stored as [`NodeId`]s into the owning [`Graph`](super::Graph); they are
/// traversal back-references only. Neither list ever holds the same node twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Position in the graph's registration order
    pub id: NodeId,

    /// Immutable identity
    pub name: NodeName,

    /// Nodes this node links to, in first-link order
    children: Vec<NodeId>,

    /// Nodes linking to this node, in first-link order
    parents: Vec<NodeId>,
}

impl Node {
    pub fn new(id: NodeId, name: impl Into<NodeName>) -> Self {
        Node {
            id,
            name: name.into(),
            children: Vec::new(),
            parents: Vec::new(),
        }
    }

    /// Record `child` as an outgoing link. Returns false if it was already present.
    pub fn link_child(&mut self, child: NodeId) -> bool {
        if self.children.contains(&child) {
            return false;
        }
        self.children.push(child);
        true
    }

    /// Record `parent` as an incoming link. Returns false if it was already present.
    pub fn link_parent(&mut self, parent: NodeId) -> bool {
        if self.parents.contains(&parent) {
            return false;
        }
        self.parents.push(parent);
        true
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parents(&self) -> &[NodeId] {
        &self.parents
    }

    pub fn has_child(&self, child: NodeId) -> bool {
        self.children.contains(&child)
    }

    pub fn out_degree(&self) -> usize {
        self.children.len()
    }

    pub fn in_degree(&self) -> usize {
        self.parents.len()
    }

    /// No outgoing links
    pub fn is_sink(&self) -> bool {
        self.children.is_empty()
    }
}
