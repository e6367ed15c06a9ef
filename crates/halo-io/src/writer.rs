//! Snapshot export: the gather pass and the metadata block.

use halo_core::{ExtendedPart, HydroProperties, Particle, UnitSystem};

use crate::convert::SnapshotContext;
use crate::dataset::{AttributeValue, Column, DatasetSink};
use crate::descriptor::OutputSource;
use crate::fields::output_fields;

/// Whether particles stay on their initial positions or advect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleMovement {
    /// Mesh-like fixed particles.
    Fixed,
    /// Particles move with the local flow velocity.
    FlowVelocity,
}

impl ParticleMovement {
    /// The movement description written to snapshot metadata.
    pub fn description(self) -> &'static str {
        match self {
            Self::Fixed => "Fixed particles.",
            Self::FlowVelocity => "Particles move with flow velocity.",
        }
    }
}

/// Identification of the numerical scheme, written verbatim to the
/// metadata block of every snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemeInfo {
    /// Scheme name.
    pub scheme: &'static str,
    /// Gradient-reconstruction method.
    pub gradient_model: &'static str,
    /// Cell-wide slope-limiter method.
    pub limiter_cell: &'static str,
    /// Per-face slope-limiter method.
    pub limiter_face: &'static str,
    /// Riemann-solver method.
    pub riemann_solver: &'static str,
    /// Particle movement mode.
    pub movement: ParticleMovement,
    /// Whether the internal-energy field semantically holds entropy.
    /// Always `false` for this scheme; carried so readers need not
    /// hardcode the scheme's choice.
    pub thermal_energy_stores_entropy: bool,
}

impl SchemeInfo {
    /// The finite-volume scheme this registry serves.
    pub fn gizmo_mfv(movement: ParticleMovement) -> Self {
        Self {
            scheme: "GIZMO MFV (meshless finite volume)",
            gradient_model: "Per-particle linear gradients",
            limiter_cell: "Cell-wide slope limiter",
            limiter_face: "Per-face slope limiter",
            riemann_solver: "Exact Riemann solver",
            movement,
            thermal_energy_stores_entropy: false,
        }
    }
}

/// Export one particle set.
///
/// Iterates the output registry in order; direct fields copy the named
/// attribute, derived fields invoke their converter with the pass's
/// immutable context. Each column is scaled by the conversion factor of
/// its unit-dimension tag before it reaches the sink. The metadata
/// block follows the datasets.
///
/// # Panics
///
/// Panics if `parts` and `xparts` differ in length, or if a converter
/// produces a value whose shape disagrees with its descriptor; both
/// are programming errors, not runtime conditions.
pub fn write_snapshot<S: DatasetSink>(
    sink: &mut S,
    ctx: &SnapshotContext,
    units: &UnitSystem,
    scheme: &SchemeInfo,
    props: &HydroProperties,
    parts: &[Particle],
    xparts: &[ExtendedPart],
) {
    assert_eq!(
        parts.len(),
        xparts.len(),
        "particle and extended-state arrays must pair 1:1"
    );

    for field in output_fields() {
        let mut column = Column::with_capacity(field.dtype, parts.len() * field.count as usize);
        for (p, xp) in parts.iter().zip(xparts.iter()) {
            let value = match field.source {
                OutputSource::Direct(accessor) => accessor(p, xp),
                OutputSource::Convert(converter) => converter(ctx, p, xp),
            };
            assert_eq!(
                value.len(),
                field.count as usize,
                "field '{}' produced a wrongly-shaped value",
                field.name
            );
            assert_eq!(
                value.dtype(),
                field.dtype,
                "field '{}' produced a wrongly-typed value",
                field.name
            );
            column.push(&value);
        }
        column.scale(units.conversion_factor(field.units));
        sink.write_dataset(field.name, field.units, column);
    }

    write_metadata(sink, ctx, scheme, props);
}

/// Write the scheme and properties metadata block.
fn write_metadata<S: DatasetSink>(
    sink: &mut S,
    _ctx: &SnapshotContext,
    scheme: &SchemeInfo,
    props: &HydroProperties,
) {
    sink.write_attribute("Scheme", AttributeValue::Str(scheme.scheme.to_string()));
    sink.write_attribute(
        "Gradient reconstruction model",
        AttributeValue::Str(scheme.gradient_model.to_string()),
    );
    sink.write_attribute(
        "Cell wide slope limiter model",
        AttributeValue::Str(scheme.limiter_cell.to_string()),
    );
    sink.write_attribute(
        "Piecewise slope limiter model",
        AttributeValue::Str(scheme.limiter_face.to_string()),
    );
    sink.write_attribute(
        "Riemann solver type",
        AttributeValue::Str(scheme.riemann_solver.to_string()),
    );
    sink.write_attribute(
        "Particle movement",
        AttributeValue::Str(scheme.movement.description().to_string()),
    );

    sink.write_attribute(
        "Adiabatic index",
        AttributeValue::Float(halo_core::eos::GAMMA),
    );
    sink.write_attribute(
        "Kernel function",
        AttributeValue::Str(halo_core::kernel::NAME.to_string()),
    );
    sink.write_attribute(
        "Kernel target N_ngb",
        AttributeValue::Float(f64::from(props.target_neighbours)),
    );
    sink.write_attribute(
        "Kernel delta N_ngb",
        AttributeValue::Float(f64::from(props.delta_neighbours)),
    );
    sink.write_attribute(
        "Kernel eta",
        AttributeValue::Float(f64::from(props.eta_neighbours)),
    );
    sink.write_attribute(
        "CFL parameter",
        AttributeValue::Float(f64::from(props.cfl_condition)),
    );
    sink.write_attribute(
        "Volume log(max(delta h))",
        AttributeValue::Float(f64::from(props.log_max_h_change)),
    );
    sink.write_attribute(
        "Volume max change time-step",
        AttributeValue::Float(f64::from(props.max_volume_change())),
    );
    sink.write_attribute(
        "Max ghost iterations",
        AttributeValue::Int(i64::from(props.max_smoothing_iterations)),
    );
    sink.write_attribute(
        "ThermalEnergyStoresEntropy",
        AttributeValue::Int(i64::from(scheme.thermal_energy_stores_entropy)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::TotalEnergyMode;
    use crate::dataset::{DatasetSource, MemorySnapshot};
    use halo_core::IntegerTime;
    use halo_cosmology::Cosmology;
    use halo_test_utils::{gizmo_parameter_file, uniform_particles};

    fn test_ctx() -> SnapshotContext {
        SnapshotContext {
            cosmology: Cosmology::newtonian(IntegerTime(0), 1e-3),
            periodic: false,
            dim: [1.0; 3],
            total_energy: TotalEnergyMode::FromInternal,
        }
    }

    #[test]
    fn writes_every_field_in_registry_order() {
        let (parts, xparts) = uniform_particles(5, 42);
        let props = HydroProperties::derive(&gizmo_parameter_file()).unwrap();
        let scheme = SchemeInfo::gizmo_mfv(ParticleMovement::FlowVelocity);
        let mut sink = MemorySnapshot::new();
        write_snapshot(
            &mut sink,
            &test_ctx(),
            &UnitSystem::identity(),
            &scheme,
            &props,
            &parts,
            &xparts,
        );
        let names: Vec<&str> = sink.datasets.keys().map(String::as_str).collect();
        assert_eq!(names.len(), 11);
        assert_eq!(names[0], "Coordinates");
        assert_eq!(names[10], "Potential");
        for (name, (_, column)) in &sink.datasets {
            let per_particle = column.len() / parts.len();
            assert!(per_particle == 1 || per_particle == 3, "{name}");
        }
    }

    #[test]
    fn applies_unit_conversion_to_tagged_fields() {
        let (parts, xparts) = uniform_particles(3, 1);
        let props = HydroProperties::derive(&gizmo_parameter_file()).unwrap();
        let scheme = SchemeInfo::gizmo_mfv(ParticleMovement::Fixed);
        let units = UnitSystem {
            mass: 10.0,
            length: 1.0,
            time: 1.0,
        };
        let mut sink = MemorySnapshot::new();
        write_snapshot(&mut sink, &test_ctx(), &units, &scheme, &props, &parts, &xparts);
        match sink.dataset("Masses").unwrap() {
            Column::F32(masses) => {
                for (i, p) in parts.iter().enumerate() {
                    assert!((masses[i] - p.conserved.mass * 10.0).abs() < 1e-3);
                }
            }
            other => panic!("Masses stored as {other:?}"),
        }
        // Dimensionless IDs are never scaled.
        match sink.dataset("ParticleIDs").unwrap() {
            Column::U64(ids) => assert_eq!(ids[0], parts[0].id.0),
            other => panic!("ParticleIDs stored as {other:?}"),
        }
    }

    #[test]
    fn metadata_block_reports_scheme_and_properties() {
        let (parts, xparts) = uniform_particles(1, 7);
        let props = HydroProperties::derive(&gizmo_parameter_file()).unwrap();
        let scheme = SchemeInfo::gizmo_mfv(ParticleMovement::Fixed);
        let mut sink = MemorySnapshot::new();
        write_snapshot(
            &mut sink,
            &test_ctx(),
            &UnitSystem::identity(),
            &scheme,
            &props,
            &parts,
            &xparts,
        );
        assert_eq!(
            sink.attributes.get("Particle movement"),
            Some(&AttributeValue::Str("Fixed particles.".to_string()))
        );
        assert_eq!(
            sink.attributes.get("ThermalEnergyStoresEntropy"),
            Some(&AttributeValue::Int(0))
        );
        assert_eq!(
            sink.attributes.get("Max ghost iterations"),
            Some(&AttributeValue::Int(30))
        );
        assert!(sink.attributes.contains_key("Kernel target N_ngb"));
        assert!(sink.attributes.contains_key("Volume max change time-step"));
    }

    #[test]
    #[should_panic(expected = "pair 1:1")]
    fn mismatched_particle_arrays_panic() {
        let (parts, mut xparts) = uniform_particles(4, 3);
        xparts.pop();
        let props = HydroProperties::derive(&gizmo_parameter_file()).unwrap();
        let scheme = SchemeInfo::gizmo_mfv(ParticleMovement::Fixed);
        let mut sink = MemorySnapshot::new();
        write_snapshot(
            &mut sink,
            &test_ctx(),
            &UnitSystem::identity(),
            &scheme,
            &props,
            &parts,
            &xparts,
        );
    }
}
