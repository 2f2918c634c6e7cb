//! Ranking configuration
//!
//! Every option of a rank computation lives in [`RankConfig`]; nothing is read from
//! ambient defaults. All fields have defaults, so a config file only needs to name the
//! options it changes:
//!
//! ```yaml
//! alpha: 0.9
//! algorithm: exact
//! round: true
//! teleportation:
//!   home: 3.0
//!   about: 1.0
//! ```

use super::RankError;
use crate::graph::{Graph, GraphError, NodeName};
use indexmap::IndexMap;
use linkrank_algorithms::{Distribution, PageRankConfig};
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Solution method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Power method, bounded by `max_iterations`
    #[default]
    Iterative,
    /// Dense linear solve, O(N³)
    Exact,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Iterative => f.write_str("iterative"),
            Algorithm::Exact => f.write_str("exact"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "iterative" => Ok(Algorithm::Iterative),
            "exact" => Ok(Algorithm::Exact),
            other => Err(RankError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// A distribution over nodes, addressed by name.
///
/// Serialized either as the keyword `uniform` or as a `name: weight` map. Nodes left
/// out of the map get weight 0; weights are normalized to sum 1.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(into = "PersonalizationRepr")]
pub enum Personalization {
    #[default]
    Uniform,
    ByName(IndexMap<NodeName, f64>),
}

#[derive(Serialize)]
#[serde(untagged)]
enum PersonalizationRepr {
    Keyword(String),
    Weights(IndexMap<NodeName, f64>),
}

// Map keys go straight to `NodeName`, so node names keep their spelling in YAML.
impl<'de> Deserialize<'de> for Personalization {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PersonalizationVisitor;

        impl<'de> Visitor<'de> for PersonalizationVisitor {
            type Value = Personalization;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("`uniform` or a name: weight map")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Personalization, E> {
                if v.eq_ignore_ascii_case("uniform") {
                    Ok(Personalization::Uniform)
                } else {
                    Err(E::custom(format!(
                        "expected `uniform` or a name: weight map, got `{}`",
                        v
                    )))
                }
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Personalization, A::Error> {
                let mut weights = IndexMap::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, weight)) = map.next_entry::<NodeName, f64>()? {
                    if weights.insert(name.clone(), weight).is_some() {
                        return Err(de::Error::custom(format!("duplicate node `{}`", name)));
                    }
                }
                Ok(Personalization::ByName(weights))
            }
        }

        deserializer.deserialize_any(PersonalizationVisitor)
    }
}

impl From<Personalization> for PersonalizationRepr {
    fn from(p: Personalization) -> Self {
        match p {
            Personalization::Uniform => PersonalizationRepr::Keyword("uniform".to_string()),
            Personalization::ByName(w) => PersonalizationRepr::Weights(w),
        }
    }
}

impl Personalization {
    /// Weights keyed by name
    pub fn by_name<I, N>(weights: I) -> Self
    where
        I: IntoIterator<Item = (N, f64)>,
        N: Into<NodeName>,
    {
        Personalization::ByName(weights.into_iter().map(|(n, w)| (n.into(), w)).collect())
    }

    /// Align to the graph's node order
    pub fn to_distribution(&self, graph: &Graph) -> Result<Distribution, GraphError> {
        match self {
            Personalization::Uniform => Ok(Distribution::Uniform),
            Personalization::ByName(weights) => {
                let mut dense = vec![0.0; graph.len()];
                for (name, &weight) in weights {
                    let id = graph
                        .index_of(name.as_str())
                        .ok_or_else(|| GraphError::NodeNotFound(name.clone()))?;
                    dense[id.index()] = weight;
                }
                Ok(Distribution::Custom(dense))
            }
        }
    }
}

/// Options for [`compute_rank`](super::compute_rank)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RankConfig {
    /// Damping factor, must lie in (0, 1)
    pub alpha: f64,
    pub algorithm: Algorithm,
    /// Iteration cap for the power method; reaching it is not an error
    pub max_iterations: usize,
    /// L1 step below which the power method stops.
    ///
    /// The default of 1e-16 sits below the floating-point noise floor of most graphs
    /// (steps settle around 1e-15), so default runs usually stop at `max_iterations`
    /// with `converged = false`. The scores are still accurate; raise the tolerance
    /// to something like 1e-12 if an early stop is wanted.
    pub tolerance: f64,
    /// Round scores to three decimal digits
    pub round: bool,
    /// Where the surfer lands when it does not follow a link
    pub teleportation: Personalization,
    /// Where mass parked on sink nodes is sent
    pub dangling: Personalization,
}

impl Default for RankConfig {
    fn default() -> Self {
        let solver = PageRankConfig::default();
        Self {
            alpha: solver.damping_factor,
            algorithm: Algorithm::Iterative,
            max_iterations: solver.max_iterations,
            tolerance: solver.tolerance,
            round: false,
            teleportation: Personalization::Uniform,
            dangling: Personalization::Uniform,
        }
    }
}

impl RankConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, RankError> {
        let config: RankConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<Self, RankError> {
        let config: RankConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_rounding(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    pub fn with_teleportation(mut self, teleportation: Personalization) -> Self {
        self.teleportation = teleportation;
        self
    }

    pub fn with_dangling(mut self, dangling: Personalization) -> Self {
        self.dangling = dangling;
        self
    }

    /// Check the graph-independent options
    pub fn validate(&self) -> Result<(), RankError> {
        self.base_solver_config().validate()?;
        Ok(())
    }

    /// Solver parameters with name-keyed distributions resolved against `graph`
    pub fn to_solver_config(&self, graph: &Graph) -> Result<PageRankConfig, RankError> {
        Ok(self
            .base_solver_config()
            .with_teleportation(self.teleportation.to_distribution(graph)?)
            .with_dangling(self.dangling.to_distribution(graph)?))
    }

    fn base_solver_config(&self) -> PageRankConfig {
        PageRankConfig::new()
            .with_damping(self.alpha)
            .with_max_iterations(self.max_iterations)
            .with_tolerance(self.tolerance)
            .with_rounding(self.round)
    }
}
