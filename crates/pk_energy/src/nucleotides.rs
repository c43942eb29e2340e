use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use log::warn;
use colored::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// Anything but A, C, G, U (T) or N, with its position in the input.
    InvalidSymbol { symbol: char, position: usize },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::InvalidSymbol { symbol, position } => {
                write!(f, "Invalid nucleotide '{}' at position {}", symbol, position)
            }
        }
    }
}

impl std::error::Error for SequenceError {}


/// A single nucleotide. `N` never pairs, so it only ever hits table defaults.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Base { A, C, G, U, N }
pub const BCOUNT: usize = 5;

impl Base {
    fn parse(symbol: char, position: usize) -> Result<Self, SequenceError> {
        match symbol.to_ascii_uppercase() {
            'A' => Ok(Base::A),
            'C' => Ok(Base::C),
            'G' => Ok(Base::G),
            'U' | 'T' => Ok(Base::U),
            'N' => Ok(Base::N),
            _ => Err(SequenceError::InvalidSymbol { symbol, position }),
        }
    }
}

/// A single RNA strand. Scorers only ever borrow it as `&[Base]`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Sequence(Vec<Base>);

impl Deref for Sequence {
    type Target = [Base];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<Base> for Sequence {
    fn from_iter<I: IntoIterator<Item = Base>>(iter: I) -> Self {
        Sequence(iter.into_iter().collect())
    }
}

impl FromStr for Sequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(p, c)| Base::parse(c, p))
            .collect()
    }
}

impl Sequence {
    pub fn new(s: &str) -> Result<Self, SequenceError> {
        s.parse()
    }

    /// Like [`Sequence::new`], but unknown symbols become `N`.
    pub fn from_lossy(s: &str) -> Self {
        s.chars()
            .enumerate()
            .map(|(p, c)| Base::parse(c, p).unwrap_or_else(|e| {
                warn!("{} {} -> using 'N'", "WARNING:".red(), e);
                Base::N
            }))
            .collect()
    }
}

const PAIR_LOOKUP: [[PairTypeRNA; BCOUNT]; BCOUNT] = {
    use Base::*;
    use PairTypeRNA::*;
    let mut table = [[NN; BCOUNT]; BCOUNT];
    table[A as usize][U as usize] = AU;
    table[U as usize][A as usize] = UA;
    table[C as usize][G as usize] = CG;
    table[G as usize][C as usize] = GC;
    table[G as usize][U as usize] = GU;
    table[U as usize][G as usize] = UG;
    table
};

/// The (5', 3') identity of a base pair; `NN` if the bases cannot pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PairTypeRNA { AU, UA, CG, GC, GU, UG, NN }
pub const PCOUNT: usize = 7;

impl From<(Base, Base)> for PairTypeRNA {
    fn from((b5, b3): (Base, Base)) -> Self {
        PAIR_LOOKUP[b5 as usize][b3 as usize]
    }
}

impl PairTypeRNA {
    pub fn can_pair(&self) -> bool {
       self != &PairTypeRNA::NN
    }
}
