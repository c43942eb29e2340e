use crate::Energy;
use crate::FORBIDDEN;

/// Largest tabulated loop size.
pub const MAX_LOOP: usize = 30;

/// Loop initiation energies indexed by the number of unpaired nucleotides.
///
/// Sizes below the tabulated domain are forbidden, sizes above `MAX_LOOP`
/// resolve to a fixed per-motif value (no logarithmic extrapolation).
pub struct SizeTable {
    values: [Option<Energy>; MAX_LOOP + 1],
    extrapolated: Energy,
}

impl SizeTable {
    const fn new(first: usize, tabulated: &[Energy], extrapolated: Energy) -> Self {
        assert!(first + tabulated.len() == MAX_LOOP + 1);
        let mut values = [None; MAX_LOOP + 1];
        let mut n = 0;
        while n < tabulated.len() {
            values[first + n] = Some(tabulated[n]);
            n += 1;
        }
        SizeTable { values, extrapolated }
    }

    /// The tabulated value, if `size` lies in the tabulated domain.
    pub fn get(&self, size: usize) -> Option<Energy> {
        self.values.get(size).copied().flatten()
    }

    pub fn energy(&self, size: usize) -> Energy {
        if size > MAX_LOOP {
            self.extrapolated
        } else {
            self.get(size).unwrap_or(FORBIDDEN)
        }
    }
}

pub static HAIRPIN: SizeTable = SizeTable::new(3, &[
    7.4, 5.9, 4.4, 4.3, 4.1, 4.1, 4.2, 4.3, 4.6, 4.9,          //  3 - 12
    5.25, 5.6, 5.85, 6.1, 6.4, 6.7, 6.9, 7.1, 7.3, 7.5,        // 13 - 22
    7.7, 7.9, 8.1, 8.26, 8.42, 8.58, 8.74, 8.9,                // 23 - 30
], 8.9);

pub static BULGE: SizeTable = SizeTable::new(2, &[
    5.2, 6.0, 6.7, 7.4, 8.2, 9.1, 10.0, 10.5, 11.0, 11.4,      //  2 - 11
    11.8, 12.15, 12.5, 12.75, 13.0, 13.3, 13.6, 13.8, 14.0,    // 12 - 20
    14.2, 14.4, 14.6, 14.8, 15.0, 15.16, 15.32, 15.48, 15.64,  // 21 - 29
    15.8,                                                      // 30
], 16.0);

pub static INTERIOR: SizeTable = SizeTable::new(2, &[
    0.8, 1.3, 1.7, 2.1, 2.5, 2.6, 2.8, 3.1, 3.6, 4.0,          //  2 - 11
    4.4, 4.75, 5.1, 5.35, 5.6, 5.9, 6.2, 6.4, 6.6,             // 12 - 20
    6.8, 7.0, 7.2, 7.4, 7.6, 7.76, 7.92, 8.08, 8.24,           // 21 - 29
    8.4,                                                       // 30
], 8.5);
