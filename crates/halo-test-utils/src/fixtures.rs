//! Fixture builders.

use halo_core::{
    eos, ExtendedPart, GravityPart, IntegerTime, Particle, ParticleId, TimeBin,
};
use halo_cosmology::{Cosmology, KickTable};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// A deterministic population of `n` particles in the unit box.
///
/// Positions, velocities, and thermodynamic quantities are drawn from a
/// seeded ChaCha8 RNG: identical seeds produce identical populations.
/// Every particle gets a positive mass and density, sequential IDs
/// starting at 1, an active time bin, and a gravity pairing on every
/// other particle.
pub fn uniform_particles(n: usize, seed: u64) -> (Vec<Particle>, Vec<ExtendedPart>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut parts = Vec::with_capacity(n);
    let mut xparts = Vec::with_capacity(n);
    for i in 0..n {
        let mut p = Particle::with_id(ParticleId(i as u64 + 1));
        p.x = [rng.gen::<f64>(), rng.gen::<f64>(), rng.gen::<f64>()];
        p.v = [
            rng.gen::<f32>() - 0.5,
            rng.gen::<f32>() - 0.5,
            rng.gen::<f32>() - 0.5,
        ];
        p.a_hydro = [
            rng.gen::<f32>() - 0.5,
            rng.gen::<f32>() - 0.5,
            rng.gen::<f32>() - 0.5,
        ];
        p.h = 0.05 + 0.1 * rng.gen::<f32>();
        p.conserved.mass = 0.5 + rng.gen::<f32>();
        p.conserved.momentum = [
            p.conserved.mass * p.v[0],
            p.conserved.mass * p.v[1],
            p.conserved.mass * p.v[2],
        ];
        p.conserved.energy = 1.0 + rng.gen::<f32>();
        p.primitives.rho = 0.5 + rng.gen::<f32>();
        p.primitives.pressure = 0.1 + rng.gen::<f32>();
        p.time_bin = TimeBin(1 + (i % 4) as i8);
        if i % 2 == 0 {
            p.gravity = Some(GravityPart {
                potential: -(1.0 + rng.gen::<f32>()),
            });
        }
        parts.push(p);
        xparts.push(ExtendedPart {
            a_grav: [
                rng.gen::<f32>() - 0.5,
                rng.gen::<f32>() - 0.5,
                rng.gen::<f32>() - 0.5,
            ],
        });
    }
    (parts, xparts)
}

/// A particle whose kick interval at `ti_current = 0` is empty: bin 0,
/// zero accelerations. Its converted velocity equals its stored
/// velocity under a non-expanding cosmology.
pub fn synchronized_particle(id: u64, v: [f32; 3]) -> (Particle, ExtendedPart) {
    let mut p = Particle::with_id(ParticleId(id));
    p.v = v;
    p.time_bin = TimeBin(0);
    p.conserved.mass = 1.0;
    p.primitives.rho = 1.0;
    p.primitives.pressure = 1.0;
    (p, ExtendedPart::default())
}

/// An expanding cosmology frozen at scale factor `a`, with kick tables
/// built from the frozen expansion's weightings: `1/a` for gravity and
/// `a^{-3(γ−1)}` for hydro. Covers intervals up to four times
/// `ti_current` (and at least `2^20` ticks).
pub fn expanding_cosmology(a: f64, ti_current: IntegerTime, time_base: f64) -> Cosmology {
    let ti_max = IntegerTime((4 * ti_current.0).max(1 << 20));
    let a_inv = 1.0 / a;
    let hydro_weight = a.powf(-3.0 * (eos::GAMMA - 1.0));
    let grav = KickTable::with_default_samples(ti_max, time_base, move |_| a_inv);
    let hydro = KickTable::with_default_samples(ti_max, time_base, move |_| hydro_weight);
    Cosmology::expanding(a, ti_current, time_base, grav, hydro)
}

/// The run parameters the properties derivation tests use:
/// η = 1.2, Δn = 0.1, CFL = 0.3, optionals left to their defaults.
pub fn gizmo_parameter_file() -> halo_core::ParameterFile {
    let mut params = halo_core::ParameterFile::new();
    params.set_f64("SPH:resolution_eta", 1.2);
    params.set_f64("SPH:delta_neighbours", 0.1);
    params.set_f64("SPH:CFL_condition", 0.3);
    params
}
