//! Search limits.

use drinfeld_groebner::GroebnerConfig;

/// Limits for branching on positive-dimensional half-braiding varieties.
#[derive(Clone, Debug)]
pub struct BranchConfig {
    /// Maximum number of branch states popped before giving up.
    pub max_states: usize,
}

impl Default for BranchConfig {
    fn default() -> Self {
        Self { max_states: 10_000 }
    }
}

/// Configuration for the simple-object search.
#[derive(Clone, Debug, Default)]
pub struct SearchConfig {
    /// Largest multiplicity of a base simple in a candidate carrier.
    /// `None` uses ⌊dim C⌋.
    pub max_multiplicity: Option<usize>,
    /// Branching limits.
    pub branch: BranchConfig,
    /// Gröbner basis limits, shared by every ideal of the search.
    pub groebner: GroebnerConfig,
}
