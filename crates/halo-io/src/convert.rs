//! Derived-quantity converters.
//!
//! Each converter is a pure function of the per-pass [`SnapshotContext`]
//! and one particle's state: deterministic, no hidden globals, safe to
//! invoke concurrently across particles. The context is captured once
//! before the pass starts and never refreshed mid-pass.

use halo_core::{eos, ExtendedPart, IntegerTime, Particle};
use halo_cosmology::timeline::{integer_time_begin, integer_time_end};
use halo_cosmology::{Cosmology, KickKind};

use crate::descriptor::FieldValue;

/// What the conserved energy field stores, and therefore how the total
/// energy is produced at output time.
///
/// One mode per output pass; the writer never mixes them within a
/// single snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TotalEnergyMode {
    /// The energy field already holds the total energy; pass through.
    Stored,
    /// The energy field holds internal energy only; the total adds the
    /// kinetic term `½|momentum|²/mass`.
    FromInternal,
}

/// Immutable global context of one output pass.
///
/// Replaces ambient engine state: converters receive it explicitly, so
/// they can be exercised against synthetic contexts in isolation.
#[derive(Clone, Debug, PartialEq)]
pub struct SnapshotContext {
    /// Cosmology state, snapshotted before the pass.
    pub cosmology: Cosmology,
    /// Whether the simulation domain is periodic.
    pub periodic: bool,
    /// Domain extent per axis.
    pub dim: [f64; 3],
    /// Total-energy production mode.
    pub total_energy: TotalEnergyMode,
}

/// Wrap `x` into `[lower, upper)` by modular reduction.
pub fn box_wrap(x: f64, lower: f64, upper: f64) -> f64 {
    let size = upper - lower;
    let mut v = (x - lower) % size;
    if v < 0.0 {
        v += size;
    }
    v + lower
}

/// Position converter: periodic domains wrap each coordinate into
/// `[0, dim)`; non-periodic domains pass the stored position through.
pub fn particle_position(ctx: &SnapshotContext, p: &Particle, _xp: &ExtendedPart) -> FieldValue {
    if ctx.periodic {
        FieldValue::vec3_f64([
            box_wrap(p.x[0], 0.0, ctx.dim[0]),
            box_wrap(p.x[1], 0.0, ctx.dim[1]),
            box_wrap(p.x[2], 0.0, ctx.dim[2]),
        ])
    } else {
        FieldValue::vec3_f64(p.x)
    }
}

/// Velocity converter: extrapolate to the output time, then convert to
/// peculiar velocity.
///
/// The particle's last kick landed it at the midpoint of its current
/// step `[ti_begin, ti_end]`; the extrapolation interval therefore runs
/// from that midpoint to the true current time, split into a gravity
/// and a hydrodynamic kick-factor delta because the two operators carry
/// different expansion weightings. Each delta is evaluated as the
/// difference of two provider calls sharing `ti_begin` as the lower
/// bound. The drifted comoving velocity is finally scaled by `1/a²`.
pub fn particle_velocity(ctx: &SnapshotContext, p: &Particle, xp: &ExtendedPart) -> FieldValue {
    let cosmo = &ctx.cosmology;
    let ti_current = cosmo.ti_current;
    let ti_begin = integer_time_begin(ti_current, p.time_bin);
    let ti_end = integer_time_end(ti_current, p.time_bin);
    let ti_mid = IntegerTime((ti_begin.0 + ti_end.0) / 2);

    let (dt_kick_grav, dt_kick_hydro) = if cosmo.enabled() {
        let grav = cosmo.kick_factor(KickKind::Gravity, ti_begin, ti_current)
            - cosmo.kick_factor(KickKind::Gravity, ti_begin, ti_mid);
        let hydro = cosmo.kick_factor(KickKind::Hydro, ti_begin, ti_current)
            - cosmo.kick_factor(KickKind::Hydro, ti_begin, ti_mid);
        (grav, hydro)
    } else {
        let dt = (ti_current.0 - ti_mid.0) as f64 * cosmo.time_base;
        (dt, dt)
    };

    let v = p.drifted_velocity(xp, dt_kick_hydro, dt_kick_grav);
    let a2_inv = cosmo.a2_inv as f32;
    FieldValue::vec3_f32([v[0] * a2_inv, v[1] * a2_inv, v[2] * a2_inv])
}

/// Comoving internal energy through the equation of state.
pub fn internal_energy(_ctx: &SnapshotContext, p: &Particle, _xp: &ExtendedPart) -> FieldValue {
    FieldValue::scalar_f32(eos::comoving_internal_energy(p))
}

/// Comoving entropic function through the equation of state.
pub fn entropy(_ctx: &SnapshotContext, p: &Particle, _xp: &ExtendedPart) -> FieldValue {
    FieldValue::scalar_f32(eos::comoving_entropy(p))
}

/// Total energy, per the context's [`TotalEnergyMode`].
///
/// Zero mass in `FromInternal` mode is not guarded; the kinetic term
/// goes non-finite as plain IEEE arithmetic dictates.
pub fn total_energy(ctx: &SnapshotContext, p: &Particle, _xp: &ExtendedPart) -> FieldValue {
    let energy = match ctx.total_energy {
        TotalEnergyMode::Stored => p.conserved.energy,
        TotalEnergyMode::FromInternal => {
            let m = p.conserved.momentum;
            let momentum2 = m[0] * m[0] + m[1] * m[1] + m[2] * m[2];
            p.conserved.energy + 0.5 * momentum2 / p.conserved.mass
        }
    };
    FieldValue::scalar_f32(energy)
}

/// Comoving gravitational potential of the paired gravity particle;
/// 0 when the particle has none.
pub fn potential(_ctx: &SnapshotContext, p: &Particle, _xp: &ExtendedPart) -> FieldValue {
    FieldValue::scalar_f32(p.gravity.map_or(0.0, |g| g.potential))
}

#[cfg(test)]
mod tests {
    use super::*;
    use halo_core::{GravityPart, ParticleId, TimeBin};
    use proptest::prelude::*;

    fn newtonian_ctx(ti_current: i64) -> SnapshotContext {
        SnapshotContext {
            cosmology: Cosmology::newtonian(IntegerTime(ti_current), 1e-3),
            periodic: false,
            dim: [1.0; 3],
            total_energy: TotalEnergyMode::FromInternal,
        }
    }

    #[test]
    fn position_passthrough_when_not_periodic() {
        let ctx = newtonian_ctx(0);
        let mut p = Particle::with_id(ParticleId(1));
        p.x = [-0.5, 2.5, 0.25];
        let xp = ExtendedPart::default();
        assert_eq!(
            particle_position(&ctx, &p, &xp),
            FieldValue::vec3_f64(p.x)
        );
    }

    #[test]
    fn position_wraps_into_box_when_periodic() {
        let mut ctx = newtonian_ctx(0);
        ctx.periodic = true;
        ctx.dim = [1.0, 2.0, 4.0];
        let mut p = Particle::with_id(ParticleId(1));
        p.x = [-0.25, 2.5, 4.0];
        let xp = ExtendedPart::default();
        let got = particle_position(&ctx, &p, &xp);
        assert_eq!(got, FieldValue::vec3_f64([0.75, 0.5, 0.0]));
    }

    #[test]
    fn velocity_of_synchronized_particle_is_the_stored_velocity() {
        // Bin 0: no active step, both boundaries at the origin and the
        // midpoint too, so with ti_current = 0 the kick interval is
        // empty; with a2_inv == 1 the converter must reproduce v.
        let ctx = newtonian_ctx(0);
        let mut p = Particle::with_id(ParticleId(1));
        p.v = [1.0, -2.0, 3.0];
        p.a_hydro = [10.0; 3];
        p.time_bin = TimeBin(0);
        let xp = ExtendedPart { a_grav: [10.0; 3] };
        assert_eq!(
            particle_velocity(&ctx, &p, &xp),
            FieldValue::vec3_f32(p.v)
        );
    }

    #[test]
    fn velocity_extrapolates_from_the_step_midpoint() {
        // Bin 2 -> step of 8 ticks. ti_current = 8 sits at the end of
        // [0, 8], midpoint 4, so dt = 4 ticks * time_base = 4e-3.
        let ctx = newtonian_ctx(8);
        let mut p = Particle::with_id(ParticleId(1));
        p.v = [1.0, 0.0, 0.0];
        p.a_hydro = [100.0, 0.0, 0.0];
        p.time_bin = TimeBin(2);
        let xp = ExtendedPart {
            a_grav: [0.0, 50.0, 0.0],
        };
        let got = particle_velocity(&ctx, &p, &xp);
        let want = [1.4f32, 0.2, 0.0];
        for i in 0..3 {
            assert!((got.as_f32(i) - want[i]).abs() < 1e-6, "component {i}");
        }
    }

    #[test]
    fn velocity_scales_by_inverse_scale_factor_squared() {
        use halo_cosmology::KickTable;
        // Zero integrands make the kick deltas vanish, isolating the
        // peculiar-velocity conversion.
        let ti_max = IntegerTime(1 << 16);
        let zero = KickTable::build(ti_max, 64, 1.0, |_| 0.0);
        let ctx = SnapshotContext {
            cosmology: Cosmology::expanding(0.5, IntegerTime(8), 1.0, zero.clone(), zero),
            periodic: false,
            dim: [1.0; 3],
            total_energy: TotalEnergyMode::Stored,
        };
        let mut p = Particle::with_id(ParticleId(1));
        p.v = [1.0, 2.0, 3.0];
        p.time_bin = TimeBin(2);
        let xp = ExtendedPart::default();
        assert_eq!(
            particle_velocity(&ctx, &p, &xp),
            FieldValue::vec3_f32([4.0, 8.0, 12.0])
        );
    }

    #[test]
    fn total_energy_from_internal_adds_kinetic_term() {
        let ctx = newtonian_ctx(0);
        let mut p = Particle::with_id(ParticleId(1));
        p.conserved.momentum = [3.0, 4.0, 0.0];
        p.conserved.mass = 5.0;
        p.conserved.energy = 10.0;
        let xp = ExtendedPart::default();
        assert_eq!(
            total_energy(&ctx, &p, &xp),
            FieldValue::scalar_f32(12.5)
        );
    }

    #[test]
    fn total_energy_stored_passes_through() {
        let mut ctx = newtonian_ctx(0);
        ctx.total_energy = TotalEnergyMode::Stored;
        let mut p = Particle::with_id(ParticleId(1));
        p.conserved.momentum = [3.0, 4.0, 0.0];
        p.conserved.mass = 5.0;
        p.conserved.energy = 10.0;
        let xp = ExtendedPart::default();
        assert_eq!(
            total_energy(&ctx, &p, &xp),
            FieldValue::scalar_f32(10.0)
        );
    }

    #[test]
    fn potential_defaults_to_zero_without_gravity_pairing() {
        let ctx = newtonian_ctx(0);
        let mut p = Particle::with_id(ParticleId(1));
        let xp = ExtendedPart::default();
        assert_eq!(potential(&ctx, &p, &xp), FieldValue::scalar_f32(0.0));
        p.gravity = Some(GravityPart { potential: -3.5 });
        assert_eq!(potential(&ctx, &p, &xp), FieldValue::scalar_f32(-3.5));
    }

    proptest! {
        #[test]
        fn box_wrap_lands_in_range(
            x in -1e6f64..1e6,
            dim in 1e-3f64..1e3,
        ) {
            let w = box_wrap(x, 0.0, dim);
            prop_assert!((0.0..dim).contains(&w), "wrap({x}, 0, {dim}) = {w}");
        }

        #[test]
        fn box_wrap_is_identity_inside_the_box(x in 0.0f64..10.0) {
            prop_assert_eq!(box_wrap(x, 0.0, 10.0), x);
        }

        #[test]
        fn box_wrap_is_periodic(x in -1e3f64..1e3, dim in 0.1f64..100.0) {
            let a = box_wrap(x, 0.0, dim);
            let b = box_wrap(x + dim, 0.0, dim);
            prop_assert!((a - b).abs() < 1e-9 * dim);
        }
    }
}
