//! Internal↔external unit conversion.
//!
//! Every snapshot field carries a [`UnitDimension`] tag; the conversion
//! factor for a tag is the product of the system's base factors raised
//! to the dimension's exponents. Exponents are `f64` because the
//! entropic function carries the adiabatic index γ in its dimensions.

use crate::eos::GAMMA;

/// Physical dimension of a snapshot field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitDimension {
    /// Dimensionless quantity; the factor is always 1.
    None,
    /// Length.
    Length,
    /// Speed.
    Speed,
    /// Mass.
    Mass,
    /// Acceleration.
    Acceleration,
    /// Mass density.
    Density,
    /// Energy.
    Energy,
    /// Energy per unit mass.
    EnergyPerMass,
    /// Entropic function, `P / ρ^γ`.
    Entropy,
    /// Pressure.
    Pressure,
    /// Gravitational potential (energy per unit mass).
    Potential,
}

impl UnitDimension {
    /// Exponents `(mass, length, time)` of this dimension.
    pub fn exponents(self) -> (f64, f64, f64) {
        match self {
            Self::None => (0.0, 0.0, 0.0),
            Self::Length => (0.0, 1.0, 0.0),
            Self::Speed => (0.0, 1.0, -1.0),
            Self::Mass => (1.0, 0.0, 0.0),
            Self::Acceleration => (0.0, 1.0, -2.0),
            Self::Density => (1.0, -3.0, 0.0),
            Self::Energy => (1.0, 2.0, -2.0),
            Self::EnergyPerMass => (0.0, 2.0, -2.0),
            Self::Entropy => (2.0 - GAMMA, 3.0 * GAMMA - 1.0, -2.0),
            Self::Pressure => (1.0, -1.0, -2.0),
            Self::Potential => (0.0, 2.0, -2.0),
        }
    }
}

/// Base factors of the internal unit system, expressed in the external
/// (output) system.
///
/// A factor of `x` for mass means one internal mass unit equals `x`
/// external mass units. Writers multiply by
/// [`conversion_factor`](Self::conversion_factor); readers divide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitSystem {
    /// One internal mass unit, in external mass units.
    pub mass: f64,
    /// One internal length unit, in external length units.
    pub length: f64,
    /// One internal time unit, in external time units.
    pub time: f64,
}

impl UnitSystem {
    /// The identity system: internal units equal external units.
    pub fn identity() -> Self {
        Self {
            mass: 1.0,
            length: 1.0,
            time: 1.0,
        }
    }

    /// Conversion factor from internal to external units for `dim`.
    pub fn conversion_factor(&self, dim: UnitDimension) -> f64 {
        let (m, l, t) = dim.exponents();
        self.mass.powf(m) * self.length.powf(l) * self.time.powf(t)
    }
}
