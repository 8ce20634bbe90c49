//! Limits applied by the graph collaborators.

use serde::{Deserialize, Serialize};

/// Smallest vertex count for which every vertex can have a neighbor.
pub const MIN_VERTICES: usize = 2;

/// Bounds used when collecting a graph from the console or a graph file.
///
/// The shortest-path engine itself does not check these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphLimits {
    /// Minimum number of vertices.
    pub min_vertices: usize,

    /// Maximum number of vertices.
    pub max_vertices: usize,

    /// Smallest accepted edge weight.
    pub min_weight: u32,

    /// Largest accepted edge weight.
    pub max_weight: u32,
}

impl Default for GraphLimits {
    fn default() -> Self {
        Self {
            min_vertices: 3,
            max_vertices: 50,
            min_weight: 1,
            max_weight: 100_000,
        }
    }
}

impl GraphLimits {
    /// Creates limits with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set minimum vertex count.
    ///
    /// Every vertex needs at least one neighbor, so fewer than two vertices
    /// can never form a valid graph.
    pub fn with_min_vertices(mut self, count: usize) -> Self {
        self.min_vertices = count.max(MIN_VERTICES);
        self
    }

    /// Builder: set maximum vertex count.
    pub fn with_max_vertices(mut self, count: usize) -> Self {
        self.max_vertices = count.max(self.min_vertices);
        self
    }

    /// Builder: set the accepted weight range.
    pub fn with_weight_range(mut self, min: u32, max: u32) -> Self {
        self.min_weight = min.max(1);
        self.max_weight = max.max(self.min_weight);
        self
    }

    /// Loads limits from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        fn var<T: std::str::FromStr>(name: &str) -> Option<T> {
            std::env::var(name).ok().and_then(|s| s.trim().parse().ok())
        }

        let defaults = Self::default();
        Self {
            min_vertices: var("GRAPH_MIN_VERTICES").unwrap_or(defaults.min_vertices),
            max_vertices: var("GRAPH_MAX_VERTICES").unwrap_or(defaults.max_vertices),
            min_weight: var("GRAPH_MIN_WEIGHT").unwrap_or(defaults.min_weight),
            max_weight: var("GRAPH_MAX_WEIGHT").unwrap_or(defaults.max_weight),
        }
    }

    /// Validates the limits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_vertices < MIN_VERTICES {
            return Err(ConfigError::InvalidMinVertices);
        }
        if self.max_vertices < self.min_vertices {
            return Err(ConfigError::InvalidMaxVertices);
        }
        if self.min_weight < 1 {
            return Err(ConfigError::InvalidMinWeight);
        }
        if self.max_weight < self.min_weight {
            return Err(ConfigError::InvalidMaxWeight);
        }
        Ok(())
    }

    pub fn vertex_count_in_range(&self, count: usize) -> bool {
        (self.min_vertices..=self.max_vertices).contains(&count)
    }

    pub fn weight_in_range(&self, weight: u32) -> bool {
        (self.min_weight..=self.max_weight).contains(&weight)
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidMinVertices,
    InvalidMaxVertices,
    InvalidMinWeight,
    InvalidMaxWeight,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMinVertices => {
                write!(f, "Minimum vertex count must be at least {}", MIN_VERTICES)
            }
            Self::InvalidMaxVertices => {
                write!(f, "Maximum vertex count must be >= minimum vertex count")
            }
            Self::InvalidMinWeight => write!(f, "Minimum edge weight must be at least 1"),
            Self::InvalidMaxWeight => {
                write!(f, "Maximum edge weight must be >= minimum edge weight")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_default() {
        let limits = GraphLimits::default();
        assert_eq!(limits.min_vertices, 3);
        assert_eq!(limits.max_vertices, 50);
        assert_eq!(limits.min_weight, 1);
        assert_eq!(limits.max_weight, 100_000);
        assert!(limits.validate().is_ok());
    }

    #[test]
    fn test_limits_builder() {
        let limits = GraphLimits::new()
            .with_min_vertices(2)
            .with_max_vertices(10)
            .with_weight_range(5, 50);

        assert_eq!(limits.min_vertices, 2);
        assert_eq!(limits.max_vertices, 10);
        assert!(limits.weight_in_range(5));
        assert!(!limits.weight_in_range(51));
        assert!(limits.vertex_count_in_range(10));
        assert!(!limits.vertex_count_in_range(1));
    }

    #[test]
    fn test_limits_builder_clamps() {
        let limits = GraphLimits::new()
            .with_min_vertices(0)
            .with_weight_range(0, 0);
        assert_eq!(limits.min_vertices, 2);
        assert_eq!(GraphLimits::new().with_min_vertices(1).min_vertices, 2);
        assert_eq!(limits.min_weight, 1);
        assert_eq!(limits.max_weight, 1);

        let limits = GraphLimits::new().with_min_vertices(8).with_max_vertices(4);
        assert!(limits.max_vertices >= limits.min_vertices);
    }

    #[test]
    fn test_limits_validation() {
        let limits = GraphLimits {
            max_vertices: 2,
            ..Default::default()
        };
        assert_eq!(limits.validate(), Err(ConfigError::InvalidMaxVertices));

        let limits = GraphLimits {
            min_weight: 0,
            ..Default::default()
        };
        assert_eq!(limits.validate(), Err(ConfigError::InvalidMinWeight));
    }

    #[test]
    fn test_limits_reject_single_vertex_minimum() {
        for min_vertices in [0, 1] {
            let limits = GraphLimits {
                min_vertices,
                ..Default::default()
            };
            assert_eq!(limits.validate(), Err(ConfigError::InvalidMinVertices));
        }

        let limits = GraphLimits {
            min_vertices: 2,
            max_vertices: 2,
            ..Default::default()
        };
        assert!(limits.validate().is_ok());
        assert!(ConfigError::InvalidMinVertices.to_string().contains("at least 2"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidMaxWeight;
        assert!(err.to_string().contains("Maximum edge weight"));
    }
}
