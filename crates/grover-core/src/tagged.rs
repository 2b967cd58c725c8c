//! The tagged bit-string a search looks for.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{GroverError, GroverResult};

/// Smallest register with an oracle table.
pub const MIN_QUBITS: usize = 3;
/// Largest register with an oracle table.
pub const MAX_QUBITS: usize = 5;

/// A computational basis state written as a bit-string, qubit 0 first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaggedState {
    bits: Vec<bool>,
}

impl TaggedState {
    /// Parse a bit-string of 3 to 5 characters.
    pub fn new(bits: &str) -> GroverResult<Self> {
        let bits = bits
            .chars()
            .enumerate()
            .map(|(position, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                found => Err(GroverError::InvalidBit { position, found }),
            })
            .collect::<GroverResult<Vec<_>>>()?;

        if !(MIN_QUBITS..=MAX_QUBITS).contains(&bits.len()) {
            return Err(GroverError::UnsupportedQubitCount(bits.len()));
        }
        Ok(Self { bits })
    }

    /// The tagged basis state for `index` on `num_qubits` qubits.
    pub fn from_index(index: usize, num_qubits: usize) -> GroverResult<Self> {
        if !(MIN_QUBITS..=MAX_QUBITS).contains(&num_qubits) {
            return Err(GroverError::UnsupportedQubitCount(num_qubits));
        }
        let bits = (0..num_qubits).map(|q| (index >> q) & 1 == 1).collect();
        Ok(Self { bits })
    }

    /// Register width.
    pub fn num_qubits(&self) -> usize {
        self.bits.len()
    }

    /// Value of qubit `i` in the tagged state.
    pub fn bit(&self, qubit: usize) -> bool {
        self.bits[qubit]
    }

    /// Basis index `Σ bit_i · 2^i`.
    pub fn index(&self) -> usize {
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, b)| **b)
            .map(|(i, _)| 1 << i)
            .sum()
    }

    /// Qubits whose tagged value is `0`; the oracle conjugates these with X.
    pub fn zero_qubits(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, b)| !**b)
            .map(|(i, _)| i)
    }
}

impl FromStr for TaggedState {
    type Err = GroverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TaggedState {
    type Error = GroverError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<TaggedState> for String {
    fn from(state: TaggedState) -> Self {
        state.to_string()
    }
}

impl fmt::Display for TaggedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            f.write_str(if b { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_index() {
        let state = TaggedState::new("010").unwrap();
        assert_eq!(state.num_qubits(), 3);
        assert_eq!(state.index(), 0b010);
        assert_eq!(state.to_string(), "010");

        // Qubit 0 is the first character, so "100" is basis index 1.
        assert_eq!(TaggedState::new("100").unwrap().index(), 1);
        assert_eq!(TaggedState::new("11111").unwrap().index(), 31);
    }

    #[test]
    fn test_from_index_roundtrip() {
        for index in 0..16 {
            let state = TaggedState::from_index(index, 4).unwrap();
            assert_eq!(state.index(), index);
            assert_eq!(state.to_string().parse::<TaggedState>().unwrap(), state);
        }
    }

    #[test]
    fn test_zero_qubits() {
        let state = TaggedState::new("0110").unwrap();
        assert_eq!(state.zero_qubits().collect::<Vec<_>>(), vec![0, 3]);
        assert!(state.bit(1));
    }

    #[test]
    fn test_invalid_bit() {
        let err = TaggedState::new("01x").unwrap_err();
        assert!(matches!(
            err,
            GroverError::InvalidBit {
                position: 2,
                found: 'x'
            }
        ));
    }

    #[test]
    fn test_unsupported_lengths() {
        assert!(matches!(
            TaggedState::new("01"),
            Err(GroverError::UnsupportedQubitCount(2))
        ));
        assert!(matches!(
            TaggedState::new("010101"),
            Err(GroverError::UnsupportedQubitCount(6))
        ));
        assert!(matches!(
            TaggedState::new(""),
            Err(GroverError::UnsupportedQubitCount(0))
        ));
        assert!(matches!(
            TaggedState::from_index(0, 6),
            Err(GroverError::UnsupportedQubitCount(6))
        ));
    }
}
