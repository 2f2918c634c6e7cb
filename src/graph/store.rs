//! In-memory graph storage
//!
//! An insertion-ordered registry of uniquely named nodes. The registration order is the
//! canonical index order for every vector and matrix the solvers produce, and it is
//! exposed explicitly through [`Graph::index_of`] and [`Graph::name_of`].

use super::node::Node;
use super::types::{NodeId, NodeName};
use indexmap::IndexMap;
use linkrank_algorithms::{adjacency_matrix, AlgoError, GraphView};
use ndarray::Array2;
use thiserror::Error;

/// Errors that can occur during graph lookups
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Node {0} not found")]
    NodeNotFound(NodeName),

    #[error("Invalid graph view: {0}")]
    View(#[from] AlgoError),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Directed graph with named nodes
///
/// Built with find-or-insert semantics: the first reference to a name creates the node
/// at the end of the registration order, later references reuse it.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Name -> node; position in the map is the node's index
    nodes: IndexMap<NodeName, Node>,

    /// Number of distinct parent -> child links
    edge_count: usize,
}

impl Graph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize) -> Self {
        Graph {
            nodes: IndexMap::with_capacity(nodes),
            edge_count: 0,
        }
    }

    /// Build a graph from `(parent, child)` pairs, in order
    pub fn from_edges<I, P, C>(edges: I) -> Self
    where
        I: IntoIterator<Item = (P, C)>,
        P: Into<NodeName>,
        C: Into<NodeName>,
    {
        let mut graph = Graph::new();
        for (parent, child) in edges {
            graph.add_edge(parent, child);
        }
        graph
    }

    /// Return the node with this name, registering it first if it is new
    pub fn find_or_create(&mut self, name: impl Into<NodeName>) -> NodeId {
        let name = name.into();
        if let Some(index) = self.nodes.get_index_of(name.as_str()) {
            return NodeId(index);
        }
        let id = NodeId(self.nodes.len());
        self.nodes.insert(name.clone(), Node::new(id, name));
        id
    }

    /// Link `parent -> child`, creating either endpoint on first use.
    ///
    /// Both sides of the link are recorded, each de-duplicated, so a repeated edge is a
    /// no-op. Returns true if the link is new.
    pub fn add_edge(&mut self, parent: impl Into<NodeName>, child: impl Into<NodeName>) -> bool {
        let parent_id = self.find_or_create(parent);
        let child_id = self.find_or_create(child);

        let added = self.nodes[parent_id.0].link_child(child_id);
        let mirrored = self.nodes[child_id.0].link_parent(parent_id);
        debug_assert_eq!(added, mirrored, "child/parent links out of sync");

        if added {
            self.edge_count += 1;
        }
        added
    }

    /// Number of registered nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn size(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get_index(id.0).map(|(_, node)| node)
    }

    pub fn node_by_name(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    /// Name -> index mapping
    pub fn index_of(&self, name: &str) -> Option<NodeId> {
        self.nodes.get_index_of(name).map(NodeId)
    }

    /// Index -> name mapping
    pub fn name_of(&self, id: NodeId) -> Option<&NodeName> {
        self.nodes.get_index(id.0).map(|(name, _)| name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Nodes in registration order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.values()
    }

    /// Names in registration order
    pub fn names(&self) -> impl Iterator<Item = &NodeName> + '_ {
        self.nodes.keys()
    }

    pub fn children_of(&self, name: &str) -> GraphResult<Vec<&NodeName>> {
        let node = self.require(name)?;
        Ok(node.children().iter().filter_map(|&id| self.name_of(id)).collect())
    }

    pub fn parents_of(&self, name: &str) -> GraphResult<Vec<&NodeName>> {
        let node = self.require(name)?;
        Ok(node.parents().iter().filter_map(|&id| self.name_of(id)).collect())
    }

    /// Nodes with no outgoing links, in registration order
    pub fn sinks(&self) -> Vec<NodeId> {
        self.nodes().filter(|n| n.is_sink()).map(|n| n.id).collect()
    }

    /// Project the graph to the index-based view the solvers run on
    pub fn view(&self) -> GraphResult<GraphView> {
        let outgoing = self
            .nodes()
            .map(|node| node.children().iter().map(|c| c.0).collect())
            .collect();
        Ok(GraphView::from_adjacency_list(outgoing)?)
    }

    /// N×N 0/1 matrix: entry (i, j) is 1 iff node `i` has node `j` as a child
    pub fn adjacency_matrix(&self) -> GraphResult<Array2<f64>> {
        Ok(adjacency_matrix(&self.view()?))
    }

    fn require(&self, name: &str) -> GraphResult<&Node> {
        self.node_by_name(name)
            .ok_or_else(|| GraphError::NodeNotFound(NodeName::from(name)))
    }
}
