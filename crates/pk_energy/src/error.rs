use std::fmt;

/// A dangle scorer was called with positions that violate its adjacency
/// contract. This is a defect in the caller, never an energy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DangleError {
    Not3PrimeAdjacent { i: usize, k: usize, j: usize }, // k != i-1 and j != i-1
    Not5PrimeAdjacent { i: usize, k: usize, j: usize }, // k != i+1 and j != i+1
}

impl fmt::Display for DangleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DangleError::Not3PrimeAdjacent { i, k, j } => {
                write!(f, "3' dangle at {} is not adjacent to pair ({}, {}): k != i-1 and j != i-1", i, k, j)
            }
            DangleError::Not5PrimeAdjacent { i, k, j } => {
                write!(f, "5' dangle at {} is not adjacent to pair ({}, {}): k != i+1 and j != i+1", i, k, j)
            }
        }
    }
}

impl std::error::Error for DangleError {}


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    UnknownMotif(String),
    WrongKind { motif: &'static str, expected: &'static str, found: &'static str },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::UnknownMotif(name) => {
                write!(f, "Unknown motif '{}'", name)
            }
            RegistryError::WrongKind { motif, expected, found } => {
                write!(f, "Motif '{}' is a {}, not a {}", motif, found, expected)
            }
        }
    }
}

impl std::error::Error for RegistryError {}
