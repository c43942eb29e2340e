use std::fmt;
use colored::*;

use crate::Base;
use crate::Energy;
use crate::FORBIDDEN;
use crate::PK_DISCOUNT;
use crate::in_range;
use crate::coaxial_stacking;
use crate::loop_tables::{HAIRPIN, BULGE, INTERIOR};

/// Penalty on top of the stacking bonus for a single-nucleotide bulge.
pub const BULGE1_PENALTY: Energy = 3.3;

/// Minimum number of unpaired nucleotides enclosed by the inner pair of an
/// order-2 surface. Anything less cannot close a hairpin later on.
pub const MIN_INNER_LOOP: usize = 5;

/// Geometry of an order-2 surface: pair (k, l) nested inside pair (i, j).
///
///   k-l
///   i-j
///   5 3
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order2Loop {
    Stack,
    /// Exactly one unpaired nucleotide on one side, none on the other.
    Bulge1,
    /// Bulge of the given size (> 1) on the 5' (k - i) or 3' (j - l) side.
    Bulge(usize),
    /// Unpaired nucleotides on both sides, by total size.
    Interior(usize),
}

impl fmt::Display for Order2Loop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order2Loop::Stack => write!(f, "{:<8}", "Stack".cyan()),
            Order2Loop::Bulge1 => write!(f, "{:<8} ({:>3})", "Bulge".cyan(), 1),
            Order2Loop::Bulge(n) => write!(f, "{:<8} ({:>3})", "Bulge".cyan(), n),
            Order2Loop::Interior(n) => write!(f, "{:<8} ({:>3})", "Interior".cyan(), n),
        }
    }
}

impl Order2Loop {
    /// Classify the surface closed by (i, j) and (k, l), or `None` if the
    /// geometry is infeasible (inner loop too short, or crossing pairs).
    pub fn classify(i: usize, j: usize, k: usize, l: usize) -> Option<Self> {
        // Any subtraction below zero means the pairs are not nested.
        let inner = l.checked_sub(k)?.checked_sub(1)?;
        if inner < MIN_INNER_LOOP {
            return None;
        }
        let delta_k_i = k.checked_sub(i)?.checked_sub(1)?;
        let delta_j_l = j.checked_sub(l)?.checked_sub(1)?;

        Some(match (delta_k_i, delta_j_l) {
            (0, 0) => Order2Loop::Stack,
            (1, 0) | (0, 1) => Order2Loop::Bulge1,
            (n, 0) | (0, n) => Order2Loop::Bulge(n),
            (a, b) => Order2Loop::Interior(a + b),
        })
    }
}

/// Order-1 irreducible surface: the hairpin closed by (i, j).
pub fn surface_order1(i: usize, j: usize, seq: &[Base]) -> Energy {
    if !in_range(seq, &[i, j]) {
        return FORBIDDEN;
    }
    let gap = j as isize - i as isize - 1;
    if gap <= 2 {
        return FORBIDDEN;
    }
    // Beyond the table, HAIRPIN resolves to its size-30 value.
    HAIRPIN.energy(gap as usize) + coaxial_stacking(i, j, i + 1, j - 1, seq)
}

/// Order-2 irreducible surface: stack, bulge or interior loop between the
/// outer pair (i, j) and the inner pair (k, l).
///
/// Bulges larger than one nucleotide carry no stacking term.
pub fn surface_order2(i: usize, j: usize, k: usize, l: usize, seq: &[Base]) -> Energy {
    if !in_range(seq, &[i, j, k, l]) {
        return FORBIDDEN;
    }
    match Order2Loop::classify(i, j, k, l) {
        None => FORBIDDEN,
        Some(Order2Loop::Stack) => coaxial_stacking(i, j, k, l, seq),
        Some(Order2Loop::Bulge1) => coaxial_stacking(i, j, k, l, seq) + BULGE1_PENALTY,
        Some(Order2Loop::Bulge(n)) => BULGE.energy(n),
        Some(Order2Loop::Interior(n)) => INTERIOR.energy(n),
    }
}

/// Order-2 irreducible surface inside a pseudoknot.
pub fn surface_order2_wave(i: usize, j: usize, k: usize, l: usize, seq: &[Base]) -> Energy {
    surface_order2(i, j, k, l, seq) * PK_DISCOUNT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sequence;
    use rand::Rng;
    use rand::seq::IndexedRandom;

    fn random_sequence(rng: &mut impl Rng, n: usize) -> Sequence {
        use Base::*;
        (0..n).map(|_| *[A, C, G, U].choose(rng).unwrap()).collect()
    }

    #[test]
    fn test_order1_hairpin() {
        let seq = Sequence::new("GGGAAACCC").expect("valid");
        assert_eq!(surface_order1(2, 6, &seq), coaxial_stacking(2, 6, 3, 5, &seq) + 7.4);
        // G-C beneath A-C: unlisted, default stacking.
        assert_eq!(surface_order1(2, 6, &seq), 7.4 + -0.4);
        assert_eq!(surface_order1(1, 7, &seq), coaxial_stacking(1, 7, 2, 6, &seq) + 4.4);
        assert_eq!(surface_order1(1, 7, &seq), 4.4 + -2.9);
        assert_eq!(surface_order1(0, 8, &seq), coaxial_stacking(0, 8, 1, 7, &seq) + 4.1);
    }

    #[test]
    fn test_order1_too_short() {
        let seq = Sequence::new("GGGAAACCC").expect("valid");
        assert_eq!(surface_order1(3, 6, &seq), FORBIDDEN);
        assert_eq!(surface_order1(2, 5, &seq), FORBIDDEN);
        assert_eq!(surface_order1(4, 4, &seq), FORBIDDEN);
        assert_eq!(surface_order1(6, 2, &seq), FORBIDDEN);
        assert_eq!(surface_order1(0, 0, &seq), FORBIDDEN);
    }

    #[test]
    fn test_order1_out_of_range() {
        let seq = Sequence::new("GGGAAACCC").expect("valid");
        assert_eq!(surface_order1(2, 9, &seq), FORBIDDEN);
        assert_eq!(surface_order1(9, 20, &seq), FORBIDDEN);
    }

    #[test]
    fn test_order1_long_hairpin() {
        let mut s = String::from("G");
        s.push_str(&"A".repeat(40));
        s.push('C');
        let seq = Sequence::new(s.as_str()).expect("valid");
        // 30 unpaired: still tabulated.
        assert_eq!(surface_order1(0, 31, &seq), 8.9 + coaxial_stacking(0, 31, 1, 30, &seq));
        // 40 unpaired: extrapolated constant.
        assert_eq!(surface_order1(0, 41, &seq), 8.9 + coaxial_stacking(0, 41, 1, 40, &seq));
    }

    #[test]
    fn test_order2_classification() {
        assert_eq!(Order2Loop::classify(0, 19, 1, 18), Some(Order2Loop::Stack));
        assert_eq!(Order2Loop::classify(0, 19, 2, 18), Some(Order2Loop::Bulge1));
        assert_eq!(Order2Loop::classify(0, 19, 1, 17), Some(Order2Loop::Bulge1));
        assert_eq!(Order2Loop::classify(0, 19, 4, 18), Some(Order2Loop::Bulge(3)));
        assert_eq!(Order2Loop::classify(0, 19, 1, 14), Some(Order2Loop::Bulge(4)));
        assert_eq!(Order2Loop::classify(0, 19, 2, 17), Some(Order2Loop::Interior(2)));
        assert_eq!(Order2Loop::classify(0, 19, 2, 15), Some(Order2Loop::Interior(4)));
        assert_eq!(Order2Loop::classify(0, 19, 4, 17), Some(Order2Loop::Interior(4)));
        // Inner loop too short.
        assert_eq!(Order2Loop::classify(0, 19, 8, 13), None);
        // Inner pair outside of the outer pair.
        assert_eq!(Order2Loop::classify(5, 19, 4, 18), None);
        assert_eq!(Order2Loop::classify(0, 17, 1, 18), None);
        assert_eq!(Order2Loop::classify(0, 19, 12, 5), None);
    }

    #[test]
    fn test_order2_classification_extreme_positions() {
        let big = usize::MAX;
        assert_eq!(Order2Loop::classify(0, 0, 1 << 63, 5), None);
        assert_eq!(Order2Loop::classify(big, 0, 0, big), None);
        assert_eq!(Order2Loop::classify(0, big, 1, big - 1), Some(Order2Loop::Stack));
        assert_eq!(Order2Loop::classify(0, big, big, 1), None);
        let seq = Sequence::new("GGGAAACCC").expect("valid");
        assert_eq!(surface_order2(0, 0, 1 << 63, 5, &seq), FORBIDDEN);
    }

    #[test]
    fn test_order2_stack_and_bulge1() {
        let seq = Sequence::new("GCAAAAAAAAAAAAAAAAGC").expect("valid");
        assert_eq!(surface_order2(0, 19, 1, 18, &seq), coaxial_stacking(0, 19, 1, 18, &seq));
        assert_eq!(surface_order2(0, 19, 1, 18, &seq), -3.4);
        assert_eq!(surface_order2(0, 19, 2, 18, &seq), coaxial_stacking(0, 19, 2, 18, &seq) + 3.3);
        assert_eq!(surface_order2(0, 19, 1, 17, &seq), coaxial_stacking(0, 19, 1, 17, &seq) + 3.3);
    }

    #[test]
    fn test_order2_bulges() {
        let seq = Sequence::from_lossy(&"A".repeat(60));
        assert_eq!(surface_order2(0, 59, 3, 58, &seq), 5.2);
        assert_eq!(surface_order2(0, 59, 1, 55, &seq), 6.0);
        assert_eq!(surface_order2(0, 59, 31, 58, &seq), 15.8);
        assert_eq!(surface_order2(0, 59, 32, 58, &seq), 16.0);
        assert_eq!(surface_order2(0, 59, 1, 27, &seq), 16.0);
    }

    #[test]
    fn test_order2_interior() {
        let seq = Sequence::from_lossy(&"A".repeat(60));
        assert_eq!(surface_order2(0, 59, 2, 57, &seq), 0.8);
        assert_eq!(surface_order2(0, 59, 3, 56, &seq), 1.7);
        assert_eq!(surface_order2(0, 59, 11, 57, &seq), 4.0);
        assert_eq!(surface_order2(0, 59, 16, 43, &seq), 8.4);
        assert_eq!(surface_order2(0, 59, 16, 42, &seq), 8.5);
    }

    #[test]
    fn test_order2_infeasible() {
        let seq = Sequence::from_lossy(&"GC".repeat(15));
        assert_eq!(surface_order2(0, 29, 1, 30, &seq), FORBIDDEN);
        assert_eq!(surface_order2(30, 29, 1, 28, &seq), FORBIDDEN);
        assert_eq!(surface_order2(0, 29, 10, 15, &seq), FORBIDDEN);
        assert_eq!(surface_order2(0, 29, 10, 14, &seq), FORBIDDEN);
        assert_eq!(surface_order2(3, 29, 2, 28, &seq), FORBIDDEN);
        assert_eq!(surface_order2(0, 20, 1, 22, &seq), FORBIDDEN);
        assert_eq!(surface_order2_wave(0, 29, 10, 14, &seq), FORBIDDEN);
    }

    #[test]
    fn test_order2_short_inner_loop_regardless_of_deltas() {
        let mut rng = rand::rng();
        let seq = random_sequence(&mut rng, 50);
        for _ in 0..1000 {
            let i = rng.random_range(0..50);
            let j = rng.random_range(0..50);
            let k = rng.random_range(0..50);
            let l = k + rng.random_range(0..6);
            if l >= 50 {
                continue;
            }
            assert_eq!(surface_order2(i, j, k, l, &seq), FORBIDDEN);
        }
    }

    #[test]
    fn test_order2_wave_discount() {
        let mut rng = rand::rng();
        for _ in 0..500 {
            let seq = random_sequence(&mut rng, 60);
            // Nested pairs i < k < l < j with at least 5 nucleotides inside (k, l).
            let i = rng.random_range(0..10);
            let k = i + 1 + rng.random_range(0..15);
            let l = k + 6 + rng.random_range(0..15);
            let j = l + 1 + rng.random_range(0..15);
            assert!(j < 60);
            let e = surface_order2(i, j, k, l, &seq);
            assert!(e.is_finite(), "({i}, {j}, {k}, {l})");
            assert_eq!(surface_order2_wave(i, j, k, l, &seq), e * 0.83);
        }
    }

    #[test]
    fn test_order2_bulge1_random() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let seq = random_sequence(&mut rng, 30);
            let e1 = surface_order2(2, 25, 4, 24, &seq);
            let e2 = surface_order2(2, 25, 3, 23, &seq);
            assert_eq!(e1, coaxial_stacking(2, 25, 4, 24, &seq) + 3.3);
            assert_eq!(e2, coaxial_stacking(2, 25, 3, 23, &seq) + 3.3);
            assert!(e1.is_finite() && e2.is_finite());
        }
    }

    #[test]
    fn test_order2_display() {
        assert!(format!("{}", Order2Loop::Bulge(4)).contains("4"));
        assert!(format!("{}", Order2Loop::Interior(12)).contains("12"));
    }
}
