use crate::Base;
use crate::PairTypeRNA;
use crate::PCOUNT as P;
use crate::Energy;
use crate::FORBIDDEN;
use crate::PK_DISCOUNT;
use crate::in_range;

/// Stacking bonus for any pair-pair context not listed in the table.
pub const COAXIAL_DEFAULT: Energy = -0.4;

// Indexed by the lower pair (i, j) and the upper pair (k, l):
//
//   --> # -->
//   i k # l j
//   | | # | |
//   j l # k i
//   <-- # <--
//
// Mirrored orientations are listed explicitly. Where a mirror coincides
// with an earlier entry, the earlier value is kept.
const STACK: [[Option<Energy>; P]; P] = {
    use PairTypeRNA::*;
    let mut table = [[None; P]; P];

    // Watson-Crick stacks.
    table[AU as usize][AU as usize] = Some(-0.9);
    table[AU as usize][UA as usize] = Some(-0.9);
    table[UA as usize][AU as usize] = Some(-1.1);
    table[CG as usize][AU as usize] = Some(-1.8);
    table[CG as usize][UA as usize] = Some(-1.7);
    table[GC as usize][AU as usize] = Some(-2.3);
    table[GC as usize][UA as usize] = Some(-2.1);
    table[CG as usize][GC as usize] = Some(-2.0);
    table[GC as usize][CG as usize] = Some(-3.4);
    table[GC as usize][GC as usize] = Some(-2.9);

    // Mirrors of the above.
    table[UA as usize][UA as usize] = Some(-0.9);
    table[UA as usize][GC as usize] = Some(-1.8);
    table[AU as usize][GC as usize] = Some(-1.7);
    table[UA as usize][CG as usize] = Some(-2.3);
    table[AU as usize][CG as usize] = Some(-2.1);
    table[CG as usize][CG as usize] = Some(-2.9);

    // Stacks on a G-U wobble.
    table[AU as usize][GU as usize] = Some(-0.5);
    table[CG as usize][GU as usize] = Some(-1.5);
    table[GC as usize][GU as usize] = Some(-1.3);
    table[UA as usize][GU as usize] = Some(-0.7);
    table[GU as usize][GU as usize] = Some(-0.5);
    table[UG as usize][GU as usize] = Some(-0.6);

    // Stacks on a U-G wobble.
    table[AU as usize][UG as usize] = Some(-0.7);
    table[CG as usize][UG as usize] = Some(-1.5);
    table[GC as usize][UG as usize] = Some(-1.9);
    table[UA as usize][UG as usize] = Some(-0.5);
    table[GU as usize][UG as usize] = Some(-0.5);
    table[UG as usize][UG as usize] = Some(-0.5);
    table
};

/// The tabulated bonus for pair `lower` stacked beneath pair `upper`.
pub fn stack_energy(lower: PairTypeRNA, upper: PairTypeRNA) -> Energy {
    STACK[lower as usize][upper as usize].unwrap_or(COAXIAL_DEFAULT)
}

/// Coaxial stacking of pair (i, j) beneath pair (k, l).
///
/// Out-of-range positions are forbidden. Every other context yields a
/// finite value: unlisted contexts fall back to [`COAXIAL_DEFAULT`].
pub fn coaxial_stacking(i: usize, j: usize, k: usize, l: usize, seq: &[Base]) -> Energy {
    if !in_range(seq, &[i, j, k, l]) {
        return FORBIDDEN;
    }
    let lower = PairTypeRNA::from((seq[i], seq[j]));
    let upper = PairTypeRNA::from((seq[k], seq[l]));
    stack_energy(lower, upper)
}

/// Coaxial stacking inside a pseudoknot.
pub fn coaxial_stacking_wave(i: usize, j: usize, k: usize, l: usize, seq: &[Base]) -> Energy {
    coaxial_stacking(i, j, k, l, seq) * PK_DISCOUNT
}
