//! Run configuration.
//!
//! A configuration can come from a YAML file, from defaults, or both:
//!
//! ```yaml
//! tagged: "0110"
//! iterations: auto
//! shots: 2048
//! seed: 7
//! ```
//!
//! Missing fields take their defaults. Command-line flags override file values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{GroverError, GroverResult};
use crate::search::optimal_iterations;
use crate::tagged::TaggedState;

/// Number of (oracle, diffusion) rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IterationsRepr", into = "IterationsRepr")]
pub enum Iterations {
    /// A fixed count.
    Fixed(u32),
    /// `round(π/4 · √(2^n))`, resolved once the qubit count is known.
    Optimal,
}

impl Iterations {
    /// Concrete round count for an `n`-qubit search.
    pub fn resolve(self, num_qubits: usize) -> u32 {
        match self {
            Iterations::Fixed(r) => r,
            Iterations::Optimal => optimal_iterations(num_qubits),
        }
    }
}

impl Default for Iterations {
    fn default() -> Self {
        Iterations::Fixed(2)
    }
}

impl FromStr for Iterations {
    type Err = GroverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "auto" | "optimal" => Ok(Iterations::Optimal),
            other => other
                .parse()
                .map(Iterations::Fixed)
                .map_err(|_| GroverError::InvalidIterations(s.to_string())),
        }
    }
}

impl fmt::Display for Iterations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Iterations::Fixed(r) => write!(f, "{r}"),
            Iterations::Optimal => f.write_str("auto"),
        }
    }
}

/// YAML form: either an integer or a keyword.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum IterationsRepr {
    Count(u32),
    Keyword(String),
}

impl TryFrom<IterationsRepr> for Iterations {
    type Error = GroverError;

    fn try_from(repr: IterationsRepr) -> Result<Self, Self::Error> {
        match repr {
            IterationsRepr::Count(r) => Ok(Iterations::Fixed(r)),
            IterationsRepr::Keyword(s) => s.parse(),
        }
    }
}

impl From<Iterations> for IterationsRepr {
    fn from(iterations: Iterations) -> Self {
        match iterations {
            Iterations::Fixed(r) => IterationsRepr::Count(r),
            Iterations::Optimal => IterationsRepr::Keyword("auto".into()),
        }
    }
}

/// Unvalidated run configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroverConfig {
    /// Tagged bit-string, qubit 0 first.
    #[serde(default = "default_tagged")]
    pub tagged: String,

    /// Register width; must match the tagged length when set.
    #[serde(default)]
    pub num_qubits: Option<usize>,

    /// Number of Grover rounds.
    #[serde(default)]
    pub iterations: Iterations,

    /// Number of sampled measurements.
    #[serde(default = "default_shots")]
    pub shots: u32,

    /// Sampling seed; fresh entropy when unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_tagged() -> String {
    "010".to_string()
}

fn default_shots() -> u32 {
    1024
}

impl Default for GroverConfig {
    fn default() -> Self {
        Self {
            tagged: default_tagged(),
            num_qubits: None,
            iterations: Iterations::default(),
            shots: default_shots(),
            seed: None,
        }
    }
}

impl GroverConfig {
    /// Parse a configuration from YAML text.
    pub fn from_yaml(contents: &str) -> GroverResult<Self> {
        Ok(serde_yaml_ng::from_str(contents)?)
    }

    /// Load a configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> GroverResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&contents)
    }

    /// Serialize back to YAML.
    pub fn to_yaml(&self) -> GroverResult<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check every field and resolve the iteration count.
    pub fn validate(&self) -> GroverResult<ValidatedConfig> {
        let tagged = TaggedState::new(&self.tagged)?;

        if let Some(num_qubits) = self.num_qubits {
            if num_qubits != tagged.num_qubits() {
                return Err(GroverError::LengthMismatch {
                    tagged: self.tagged.clone(),
                    num_qubits,
                });
            }
        }

        if self.shots == 0 {
            return Err(GroverError::InvalidShots(self.shots));
        }

        let iterations = self.iterations.resolve(tagged.num_qubits());
        Ok(ValidatedConfig {
            tagged,
            iterations,
            shots: self.shots,
            seed: self.seed,
        })
    }
}

/// A configuration that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedConfig {
    /// The state to search for.
    pub tagged: TaggedState,
    /// Resolved number of rounds.
    pub iterations: u32,
    /// Number of sampled measurements, at least 1.
    pub shots: u32,
    /// Sampling seed.
    pub seed: Option<u64>,
}

impl ValidatedConfig {
    /// Register width.
    pub fn num_qubits(&self) -> usize {
        self.tagged.num_qubits()
    }
}
