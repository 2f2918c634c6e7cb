//! Core type definitions for the graph model

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Dense index of a node in the graph's registration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn new(index: usize) -> Self {
        NodeId(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

/// Canonical node identity.
///
/// Names are opaque tokens compared by string equality. Integer inputs are rendered in
/// decimal, so the integer `1` and the token `"1"` name the same node, while `"01"`
/// stays distinct. Cloning is a reference-count bump.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeName(Arc<str>);

impl NodeName {
    pub fn new(name: impl AsRef<str>) -> Self {
        NodeName(Arc::from(name.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for NodeName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeName {
    fn from(s: &str) -> Self {
        NodeName::new(s)
    }
}

impl From<String> for NodeName {
    fn from(s: String) -> Self {
        NodeName(Arc::from(s))
    }
}

impl From<&String> for NodeName {
    fn from(s: &String) -> Self {
        NodeName::new(s)
    }
}

impl From<&NodeName> for NodeName {
    fn from(name: &NodeName) -> Self {
        name.clone()
    }
}

impl From<u64> for NodeName {
    fn from(n: u64) -> Self {
        NodeName::from(n.to_string())
    }
}

impl From<i64> for NodeName {
    fn from(n: i64) -> Self {
        NodeName::from(n.to_string())
    }
}

impl From<usize> for NodeName {
    fn from(n: usize) -> Self {
        NodeName::from(n.to_string())
    }
}

impl From<i32> for NodeName {
    fn from(n: i32) -> Self {
        NodeName::from(n.to_string())
    }
}

impl Serialize for NodeName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Names are read as text, so YAML scalars such as `0x10` or `1.0` keep their spelling.
/// Formats that only hand out integers are canonicalized like `From<u64>`.
impl<'de> Deserialize<'de> for NodeName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NameVisitor;

        impl<'de> serde::de::Visitor<'de> for NameVisitor {
            type Value = NodeName;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a node name or integer")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<NodeName, E> {
                Ok(NodeName::from(v))
            }

            fn visit_string<E: serde::de::Error>(self, v: String) -> Result<NodeName, E> {
                Ok(NodeName::from(v))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<NodeName, E> {
                Ok(NodeName::from(v))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<NodeName, E> {
                Ok(NodeName::from(v))
            }
        }

        deserializer.deserialize_str(NameVisitor)
    }
}
