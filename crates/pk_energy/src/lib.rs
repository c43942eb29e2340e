//! # pk_energy
//!
//! Free energies of the irreducible surfaces (hairpins, stacks, bulges,
//! interior loops, coaxial stacks and dangles) used to assemble RNA
//! secondary structures with pseudoknots.
//!
//! Every scorer takes 0-based positions into a `&[Base]` sequence and is a
//! pure function of its arguments. Infeasible configurations cost
//! [`FORBIDDEN`] (positive infinity). Dangle scorers additionally report
//! caller mistakes as a [`DangleError`].

/// Base, Sequence, PairTypeRNA, ....
mod nucleotides;

/// Errors of dangle scorers and registry lookups.
mod error;

/// Size-indexed hairpin, bulge and interior loop tables.
pub mod loop_tables;

/// Stacking of two adjacent base pairs.
mod coaxial_stacking;

/// Unpaired nucleotides next to a helix end.
mod dangles;

/// Order-1 and order-2 irreducible surfaces.
mod surfaces;

/// Name based access to all scorers and constants.
pub mod registry;

pub use nucleotides::*;
pub use error::*;
pub use coaxial_stacking::*;
pub use dangles::*;
pub use surfaces::*;
pub use registry::{Motif, Parameter};

/// Free energy in kcal/mol.
pub type Energy = f64;

/// The cost of a configuration that must never be chosen.
pub const FORBIDDEN: Energy = f64::INFINITY;

/// Weight of motifs inside a pseudoknotted region.
pub const PK_DISCOUNT: Energy = 0.83;

fn in_range(seq: &[Base], positions: &[usize]) -> bool {
    positions.iter().all(|&p| p < seq.len())
}
