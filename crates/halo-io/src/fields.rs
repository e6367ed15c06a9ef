//! The snapshot schema: ordered field descriptor lists for the
//! GIZMO-MFV-style finite-volume scheme.
//!
//! [`output_fields`] is the canonical attribute layout of one snapshot;
//! [`input_fields`] maps external arrays back onto particle attributes.
//! Changing the external schema means editing these two lists and
//! nothing else.

use halo_core::{ExtendedPart, Particle, ParticleId, UnitDimension};

use crate::convert;
use crate::descriptor::{DataType, FieldValue, InputField, OutputField};

// ── direct output accessors ───────────────────────────────────────

fn mass(p: &Particle, _xp: &ExtendedPart) -> FieldValue {
    FieldValue::scalar_f32(p.conserved.mass)
}

fn smoothing_length(p: &Particle, _xp: &ExtendedPart) -> FieldValue {
    FieldValue::scalar_f32(p.h)
}

fn particle_id(p: &Particle, _xp: &ExtendedPart) -> FieldValue {
    FieldValue::scalar_u64(p.id.0)
}

fn density(p: &Particle, _xp: &ExtendedPart) -> FieldValue {
    FieldValue::scalar_f32(p.primitives.rho)
}

fn pressure(p: &Particle, _xp: &ExtendedPart) -> FieldValue {
    FieldValue::scalar_f32(p.primitives.pressure)
}

// ── input setters ─────────────────────────────────────────────────

fn set_coordinates(p: &mut Particle, v: &FieldValue) {
    p.x = [v.as_f64(0), v.as_f64(1), v.as_f64(2)];
}

fn set_velocities(p: &mut Particle, v: &FieldValue) {
    p.v = [v.as_f32(0), v.as_f32(1), v.as_f32(2)];
}

fn set_mass(p: &mut Particle, v: &FieldValue) {
    p.conserved.mass = v.as_f32(0);
}

fn set_smoothing_length(p: &mut Particle, v: &FieldValue) {
    p.h = v.as_f32(0);
}

fn set_internal_energy(p: &mut Particle, v: &FieldValue) {
    p.conserved.energy = v.as_f32(0);
}

fn set_particle_id(p: &mut Particle, v: &FieldValue) {
    p.id = ParticleId(v.as_u64(0));
}

fn set_accelerations(p: &mut Particle, v: &FieldValue) {
    p.a_hydro = [v.as_f32(0), v.as_f32(1), v.as_f32(2)];
}

fn set_density(p: &mut Particle, v: &FieldValue) {
    p.primitives.rho = v.as_f32(0);
}

/// The fields one snapshot writes, in their canonical order.
pub fn output_fields() -> Vec<OutputField> {
    vec![
        OutputField::convert(
            "Coordinates",
            DataType::F64,
            3,
            UnitDimension::Length,
            convert::particle_position,
        ),
        OutputField::convert(
            "Velocities",
            DataType::F32,
            3,
            UnitDimension::Speed,
            convert::particle_velocity,
        ),
        OutputField::direct("Masses", DataType::F32, 1, UnitDimension::Mass, mass),
        OutputField::direct(
            "SmoothingLength",
            DataType::F32,
            1,
            UnitDimension::Length,
            smoothing_length,
        ),
        OutputField::convert(
            "InternalEnergy",
            DataType::F32,
            1,
            UnitDimension::EnergyPerMass,
            convert::internal_energy,
        ),
        OutputField::direct(
            "ParticleIDs",
            DataType::U64,
            1,
            UnitDimension::None,
            particle_id,
        ),
        OutputField::direct("Density", DataType::F32, 1, UnitDimension::Density, density),
        OutputField::convert(
            "Entropy",
            DataType::F32,
            1,
            UnitDimension::Entropy,
            convert::entropy,
        ),
        OutputField::direct(
            "Pressure",
            DataType::F32,
            1,
            UnitDimension::Pressure,
            pressure,
        ),
        OutputField::convert(
            "TotEnergy",
            DataType::F32,
            1,
            UnitDimension::Energy,
            convert::total_energy,
        ),
        OutputField::convert(
            "Potential",
            DataType::F32,
            1,
            UnitDimension::Potential,
            convert::potential,
        ),
    ]
}

/// The fields one snapshot reads, with their requiredness.
pub fn input_fields() -> Vec<InputField> {
    vec![
        InputField::compulsory(
            "Coordinates",
            DataType::F64,
            3,
            UnitDimension::Length,
            set_coordinates,
        ),
        InputField::compulsory(
            "Velocities",
            DataType::F32,
            3,
            UnitDimension::Speed,
            set_velocities,
        ),
        InputField::compulsory("Masses", DataType::F32, 1, UnitDimension::Mass, set_mass),
        InputField::compulsory(
            "SmoothingLength",
            DataType::F32,
            1,
            UnitDimension::Length,
            set_smoothing_length,
        ),
        InputField::compulsory(
            "InternalEnergy",
            DataType::F32,
            1,
            UnitDimension::EnergyPerMass,
            set_internal_energy,
        ),
        InputField::compulsory(
            "ParticleIDs",
            DataType::U64,
            1,
            UnitDimension::None,
            set_particle_id,
        ),
        InputField::optional(
            "Accelerations",
            DataType::F32,
            3,
            UnitDimension::Acceleration,
            set_accelerations,
        ),
        InputField::optional(
            "Density",
            DataType::F32,
            1,
            UnitDimension::Density,
            set_density,
        ),
    ]
}
