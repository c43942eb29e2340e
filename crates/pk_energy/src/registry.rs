use std::fmt;

use ahash::AHashMap;
use colored::*;
use log::{debug, trace};
use once_cell::sync::Lazy;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter, IntoStaticStr};

use crate::Base;
use crate::Energy;
use crate::PK_DISCOUNT;
use crate::DangleError;
use crate::RegistryError;
use crate::surfaces::*;
use crate::coaxial_stacking::*;
use crate::dangles::*;

/// Hairpin closing pair (i, j).
pub type Order1Score = fn(usize, usize, &[Base]) -> Energy;
/// Outer pair (i, j) around inner pair (k, l).
pub type Order2Score = fn(usize, usize, usize, usize, &[Base]) -> Energy;
/// Pair (i, j) stacked beneath pair (k, l).
pub type StackingScore = fn(usize, usize, usize, usize, &[Base]) -> Energy;
/// Unpaired base i next to the pair (k, j).
pub type DangleScore = fn(usize, usize, usize, &[Base]) -> Result<Energy, DangleError>;

/// Everything the assembly engine may ask for by name.
///
/// The string form of each variant is its registry key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount, IntoStaticStr)]
pub enum Motif {
    #[strum(serialize = "EIS1")]
    SurfaceOrder1,
    #[strum(serialize = "EIS2")]
    SurfaceOrder2,
    #[strum(serialize = "EIS2_wave")]
    SurfaceOrder2Wave,
    #[strum(serialize = "C")]
    CoaxialStacking,
    #[strum(serialize = "C_wave")]
    CoaxialStackingWave,
    #[strum(serialize = "R")]
    DangleRight,
    #[strum(serialize = "L")]
    DangleLeft,
    #[strum(serialize = "Ri")]
    DangleRightInterior,
    #[strum(serialize = "Li")]
    DangleLeftInterior,
    #[strum(serialize = "R_wave")]
    DangleRightWave,
    #[strum(serialize = "L_wave")]
    DangleLeftWave,
    #[strum(serialize = "P")]
    HelixPenalty,
    #[strum(serialize = "Q")]
    UnpairedPenalty,
    #[strum(serialize = "Pi")]
    MultiloopHelixPenalty,
    #[strum(serialize = "Qi")]
    MultiloopUnpairedPenalty,
    #[strum(serialize = "M")]
    MultiloopInitiation,
    #[strum(serialize = "g")]
    PseudoknotDiscount,
    #[strum(serialize = "P_wave")]
    PseudoknotHelixPenalty,
    #[strum(serialize = "Pi_wave")]
    PseudoknotMultiloopHelixPenalty,
    #[strum(serialize = "Q_wave")]
    PseudoknotUnpairedPenalty,
    #[strum(serialize = "M_wave")]
    PseudoknotMultiloopInitiation,
    #[strum(serialize = "Gw")]
    PseudoknotInitiation,
    #[strum(serialize = "Gwi")]
    PseudoknotInMultiloop,
    #[strum(serialize = "Gwh")]
    PseudoknotInHairpin,
}

/// A registry entry: either a sequence-independent weight or a scorer with
/// a fixed call signature.
#[derive(Debug, Clone, Copy)]
pub enum Parameter {
    Constant(Energy),
    Order1(Order1Score),
    Order2(Order2Score),
    Stacking(StackingScore),
    Dangle(DangleScore),
}

impl Parameter {
    pub fn kind(&self) -> &'static str {
        match self {
            Parameter::Constant(_) => "constant",
            Parameter::Order1(_) => "order-1 surface",
            Parameter::Order2(_) => "order-2 surface",
            Parameter::Stacking(_) => "coaxial stacking",
            Parameter::Dangle(_) => "dangle",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::Constant(e) => write!(f, "{:>8.4}", e),
            _ => write!(f, "{:>8}", self.kind().green()),
        }
    }
}

impl Motif {
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn parameter(self) -> Parameter {
        use Motif::*;
        use Parameter::*;
        match self {
            SurfaceOrder1 => Order1(surface_order1),
            SurfaceOrder2 => Order2(surface_order2),
            SurfaceOrder2Wave => Order2(surface_order2_wave),
            CoaxialStacking => Stacking(coaxial_stacking),
            CoaxialStackingWave => Stacking(coaxial_stacking_wave),
            DangleRight => Dangle(dangle_right),
            DangleLeft => Dangle(dangle_left),
            DangleRightInterior => Dangle(dangle_right_interior),
            DangleLeftInterior => Dangle(dangle_left_interior),
            DangleRightWave => Dangle(dangle_right_wave),
            DangleLeftWave => Dangle(dangle_left_wave),
            HelixPenalty => Constant(0.0),
            UnpairedPenalty => Constant(0.0),
            MultiloopHelixPenalty => Constant(0.1),
            MultiloopUnpairedPenalty => Constant(0.4),
            MultiloopInitiation => Constant(4.6),
            PseudoknotDiscount => Constant(PK_DISCOUNT),
            PseudoknotHelixPenalty => Constant(0.1),
            PseudoknotMultiloopHelixPenalty => Constant(0.1 * PK_DISCOUNT),
            PseudoknotUnpairedPenalty => Constant(0.2),
            PseudoknotMultiloopInitiation => Constant(8.43),
            PseudoknotInitiation => Constant(7.0),
            PseudoknotInMultiloop => Constant(13.0),
            PseudoknotInHairpin => Constant(6.0),
        }
    }
}

static REGISTRY: Lazy<AHashMap<&'static str, (Motif, Parameter)>> = Lazy::new(|| {
    let table: AHashMap<_, _> = Motif::iter()
        .map(|m| (m.name(), (m, m.parameter())))
        .collect();
    debug!("Parameter registry initialized with {} motifs.", table.len());
    table
});

fn entry(name: &str) -> Result<(Motif, Parameter), RegistryError> {
    trace!("Registry lookup: {}", name);
    REGISTRY.get(name)
        .copied()
        .ok_or_else(|| RegistryError::UnknownMotif(name.to_string()))
}

/// Resolve a motif name, e.g. "EIS2_wave" or "Gw".
pub fn lookup(name: &str) -> Result<Parameter, RegistryError> {
    entry(name).map(|(_, p)| p)
}

/// All registered motifs in declaration order.
pub fn parameters() -> impl Iterator<Item = (Motif, Parameter)> {
    Motif::iter().map(|m| (m, m.parameter()))
}

fn wrong_kind(motif: Motif, p: Parameter, expected: &'static str) -> RegistryError {
    RegistryError::WrongKind { motif: motif.name(), expected, found: p.kind() }
}

pub fn constant(name: &str) -> Result<Energy, RegistryError> {
    match entry(name)? {
        (_, Parameter::Constant(e)) => Ok(e),
        (m, p) => Err(wrong_kind(m, p, "constant")),
    }
}

pub fn order1(name: &str) -> Result<Order1Score, RegistryError> {
    match entry(name)? {
        (_, Parameter::Order1(f)) => Ok(f),
        (m, p) => Err(wrong_kind(m, p, "order-1 surface")),
    }
}

pub fn order2(name: &str) -> Result<Order2Score, RegistryError> {
    match entry(name)? {
        (_, Parameter::Order2(f)) => Ok(f),
        (m, p) => Err(wrong_kind(m, p, "order-2 surface")),
    }
}

pub fn stacking(name: &str) -> Result<StackingScore, RegistryError> {
    match entry(name)? {
        (_, Parameter::Stacking(f)) => Ok(f),
        (m, p) => Err(wrong_kind(m, p, "coaxial stacking")),
    }
}

pub fn dangle(name: &str) -> Result<DangleScore, RegistryError> {
    match entry(name)? {
        (_, Parameter::Dangle(f)) => Ok(f),
        (m, p) => Err(wrong_kind(m, p, "dangle")),
    }
}
