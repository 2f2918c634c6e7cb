//! Directed graph model
//!
//! Named nodes with de-duplicated, symmetric parent/child links, held in an
//! insertion-ordered registry. The registry order is the index order used by the
//! ranking solvers.

pub mod node;
pub mod store;
pub mod types;

// Re-export main types
pub use node::Node;
pub use store::{Graph, GraphError, GraphResult};
pub use types::{NodeId, NodeName};
