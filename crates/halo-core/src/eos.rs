//! Adiabatic index constants and ideal-gas equation-of-state accessors.
//!
//! The scheme runs a monoatomic ideal gas, γ = 5/3. The accessors
//! return comoving quantities; unit and frame conversion happen in the
//! snapshot layer.

use crate::particle::Particle;

/// Adiabatic index γ.
pub const GAMMA: f64 = 5.0 / 3.0;

/// γ − 1.
pub const GAMMA_MINUS_ONE: f64 = GAMMA - 1.0;

/// Comoving internal energy per unit mass, `u = P / ((γ−1) ρ)`.
///
/// Zero density is not guarded; the result is non-finite as plain IEEE
/// arithmetic dictates.
pub fn comoving_internal_energy(p: &Particle) -> f32 {
    p.primitives.pressure / (GAMMA_MINUS_ONE as f32 * p.primitives.rho)
}

/// Comoving entropic function, `A = P / ρ^γ`.
pub fn comoving_entropy(p: &Particle) -> f32 {
    p.primitives.pressure / p.primitives.rho.powf(GAMMA as f32)
}
