//! The particle data model.
//!
//! A [`Particle`] is one discretized fluid element: its comoving
//! position, velocity, interaction radius, and the conserved and
//! primitive quantity bundles evolved by the (external) finite-volume
//! solver. The [`ExtendedPart`] carries auxiliary state needed only for
//! prediction between kicks and is owned 1:1 with each particle.

use crate::id::{ParticleId, TimeBin};

/// Conserved quantities integrated by the solver.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ConservedQuantities {
    /// Particle mass.
    pub mass: f32,
    /// Momentum, 3 components.
    pub momentum: [f32; 3],
    /// Energy. Depending on the scheme configuration this stores either
    /// the total energy or the internal (thermal) energy only; the
    /// total-energy converter resolves the difference at output time.
    pub energy: f32,
}

/// Primitive quantities, recomputed from the conserved bundle by the
/// solver for use in flux computations.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PrimitiveQuantities {
    /// Comoving density.
    pub rho: f32,
    /// Comoving pressure.
    pub pressure: f32,
}

/// Gravity-side companion of a hydro particle.
///
/// Only the fields the snapshot layer reads are modelled; the gravity
/// solver owns the rest.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GravityPart {
    /// Comoving gravitational potential at the particle's position.
    pub potential: f32,
}

/// One discretized fluid element.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Comoving position, 3 components.
    pub x: [f64; 3],
    /// Velocity at the last kick, 3 components.
    pub v: [f32; 3],
    /// Hydrodynamic acceleration at the last force evaluation.
    pub a_hydro: [f32; 3],
    /// Smoothing length (interaction radius).
    pub h: f32,
    /// Conserved quantity bundle.
    pub conserved: ConservedQuantities,
    /// Primitive quantity bundle.
    pub primitives: PrimitiveQuantities,
    /// Unique immutable identifier.
    pub id: ParticleId,
    /// Paired gravity particle, if the particle feels self-gravity.
    pub gravity: Option<GravityPart>,
    /// Cadence at which this particle is kicked/drifted.
    pub time_bin: TimeBin,
}

impl Particle {
    /// A particle with all quantities zeroed, synchronized to the start
    /// of the timeline. Starting point for readers and fixtures.
    pub fn with_id(id: ParticleId) -> Self {
        Self {
            x: [0.0; 3],
            v: [0.0; 3],
            a_hydro: [0.0; 3],
            h: 0.0,
            conserved: ConservedQuantities::default(),
            primitives: PrimitiveQuantities::default(),
            id,
            gravity: None,
            time_bin: TimeBin(0),
        }
    }

    /// Extrapolate the velocity from the last kick to the output time.
    ///
    /// `dt_kick_hydro` and `dt_kick_grav` are the hydrodynamic and
    /// gravity kick-factor deltas between the particle's last kick and
    /// the output time; they differ under cosmological integration
    /// because the two kick operators carry different scale-factor
    /// weightings.
    pub fn drifted_velocity(&self, xp: &ExtendedPart, dt_kick_hydro: f64, dt_kick_grav: f64) -> [f32; 3] {
        let mut v = [0.0f32; 3];
        for i in 0..3 {
            v[i] = self.v[i]
                + self.a_hydro[i] * dt_kick_hydro as f32
                + xp.a_grav[i] * dt_kick_grav as f32;
        }
        v
    }
}

/// Auxiliary per-particle state needed only between kicks.
///
/// Owned 1:1 with each [`Particle`], same lifetime. The snapshot layer
/// reads it but never mutates it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ExtendedPart {
    /// Gravitational acceleration at the last gravity kick.
    pub a_grav: [f32; 3],
}
