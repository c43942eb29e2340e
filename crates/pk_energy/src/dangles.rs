use crate::Base;
use crate::PairTypeRNA;
use crate::BCOUNT as B;
use crate::PCOUNT as P;
use crate::Energy;
use crate::FORBIDDEN;
use crate::PK_DISCOUNT;
use crate::DangleError;
use crate::in_range;

/// Penalty added to a dangle off a multiloop pair.
pub const DANGLE_INTERIOR_PENALTY: Energy = 0.4;
/// Offset added to a (discounted) dangle off a pseudoknot pair.
pub const DANGLE_WAVE_OFFSET: Energy = 0.2;

// 3' dangles, indexed by the pair (k, j) and the unpaired base i.
//
//   --> # -->
//   k i #   k
//   |   #   |
//   j   # i j
//   <-- # <--
//
const DANGLE3: [[Option<Energy>; B]; P] = {
    use Base::*;
    use PairTypeRNA::*;
    let mut table = [[None; B]; P];
    table[AU as usize][A as usize] = Some(-0.8);
    table[AU as usize][C as usize] = Some(-0.5);
    table[AU as usize][G as usize] = Some(-0.8);
    table[AU as usize][U as usize] = Some(-0.6);

    table[CG as usize][A as usize] = Some(-1.7);
    table[CG as usize][C as usize] = Some(-0.8);
    table[CG as usize][G as usize] = Some(-1.7);
    table[CG as usize][U as usize] = Some(-1.2);

    table[GC as usize][A as usize] = Some(-1.1);
    table[GC as usize][C as usize] = Some(-0.4);
    table[GC as usize][G as usize] = Some(-1.3);
    table[GC as usize][U as usize] = Some(-0.6);

    table[UA as usize][A as usize] = Some(-0.7);
    table[UA as usize][C as usize] = Some(-0.1);
    table[UA as usize][G as usize] = Some(-0.7);
    table[UA as usize][U as usize] = Some(-0.1);
    table
};

// 5' dangles, indexed by the pair (k, j) and the unpaired base i.
//
//   --> # -->
//   i k # k
//     | # |
//     j # j i
//   <-- # <--
//
const DANGLE5: [[Option<Energy>; B]; P] = {
    use Base::*;
    use PairTypeRNA::*;
    let mut table = [[None; B]; P];
    table[AU as usize][A as usize] = Some(-0.3);
    table[AU as usize][C as usize] = Some(-0.3);
    table[AU as usize][G as usize] = Some(-0.4);
    table[AU as usize][U as usize] = Some(-0.2);

    table[CG as usize][A as usize] = Some(-0.5);
    table[CG as usize][C as usize] = Some(-0.2);
    table[CG as usize][G as usize] = Some(-0.2);
    table[CG as usize][U as usize] = Some(-0.1);

    table[GC as usize][A as usize] = Some(-0.2);
    table[GC as usize][C as usize] = Some(-0.3);
    table[GC as usize][G as usize] = Some(-0.0);
    table[GC as usize][U as usize] = Some(-0.0);

    table[UA as usize][A as usize] = Some(-0.3);
    table[UA as usize][C as usize] = Some(-0.2);
    table[UA as usize][G as usize] = Some(-0.2);
    table[UA as usize][U as usize] = Some(-0.2);
    table
};

fn lookup(table: &[[Option<Energy>; B]; P], i: usize, k: usize, j: usize, seq: &[Base]) -> Energy {
    if !in_range(seq, &[i, k, j]) {
        return FORBIDDEN;
    }
    let pair = PairTypeRNA::from((seq[k], seq[j]));
    if !pair.can_pair() {
        return FORBIDDEN;
    }
    table[pair as usize][seq[i] as usize].unwrap_or(FORBIDDEN)
}

/// Unpaired base `i` dangling 3' of the pair (k, j).
///
/// The caller must guarantee that `k == i-1` or `j == i-1`, otherwise this
/// returns a [`DangleError`]. Contexts without a tabulated value (wobble
/// pairs, non-canonical pairs, `N`) are forbidden.
pub fn dangle_right(i: usize, k: usize, j: usize, seq: &[Base]) -> Result<Energy, DangleError> {
    let prev = i.checked_sub(1);
    if prev != Some(k) && prev != Some(j) {
        return Err(DangleError::Not3PrimeAdjacent { i, k, j });
    }
    Ok(lookup(&DANGLE3, i, k, j, seq))
}

/// Unpaired base `i` dangling 5' of the pair (k, j).
///
/// The caller must guarantee that `k == i+1` or `j == i+1`.
pub fn dangle_left(i: usize, k: usize, j: usize, seq: &[Base]) -> Result<Energy, DangleError> {
    let next = i.checked_add(1);
    if next != Some(k) && next != Some(j) {
        return Err(DangleError::Not5PrimeAdjacent { i, k, j });
    }
    Ok(lookup(&DANGLE5, i, k, j, seq))
}

/// 3' dangle off a multiloop pair.
pub fn dangle_right_interior(i: usize, k: usize, j: usize, seq: &[Base]) -> Result<Energy, DangleError> {
    Ok(dangle_right(i, k, j, seq)? + DANGLE_INTERIOR_PENALTY)
}

/// 5' dangle off a multiloop pair.
pub fn dangle_left_interior(i: usize, k: usize, j: usize, seq: &[Base]) -> Result<Energy, DangleError> {
    Ok(dangle_left(i, k, j, seq)? + DANGLE_INTERIOR_PENALTY)
}

/// 3' dangle off a pseudoknot pair.
pub fn dangle_right_wave(i: usize, k: usize, j: usize, seq: &[Base]) -> Result<Energy, DangleError> {
    Ok(dangle_right(i, k, j, seq)? * PK_DISCOUNT + DANGLE_WAVE_OFFSET)
}

/// 5' dangle off a pseudoknot pair.
pub fn dangle_left_wave(i: usize, k: usize, j: usize, seq: &[Base]) -> Result<Energy, DangleError> {
    Ok(dangle_left(i, k, j, seq)? * PK_DISCOUNT + DANGLE_WAVE_OFFSET)
}
