//! Halo: the snapshot export/import layer of a cosmologically-expanding
//! particle simulation.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Halo sub-crates. For most users, adding `halo` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use halo::prelude::*;
//!
//! // Configuration: required resolution parameters, optionals default.
//! let mut params = ParameterFile::new();
//! params.set_f64("SPH:resolution_eta", 1.2);
//! params.set_f64("SPH:delta_neighbours", 0.1);
//! params.set_f64("SPH:CFL_condition", 0.3);
//! let props = HydroProperties::derive(&params).unwrap();
//!
//! // One particle, synchronized to the start of the timeline.
//! let mut p = Particle::with_id(ParticleId(1));
//! p.conserved.mass = 1.0;
//! p.primitives.rho = 1.0;
//! p.primitives.pressure = 0.4;
//! let xp = ExtendedPart::default();
//!
//! // Export into an in-memory snapshot.
//! let ctx = SnapshotContext {
//!     cosmology: Cosmology::newtonian(IntegerTime(0), 1e-3),
//!     periodic: true,
//!     dim: [1.0; 3],
//!     total_energy: TotalEnergyMode::FromInternal,
//! };
//! let scheme = SchemeInfo::gizmo_mfv(ParticleMovement::FlowVelocity);
//! let mut sink = MemorySnapshot::new();
//! write_snapshot(
//!     &mut sink,
//!     &ctx,
//!     &UnitSystem::identity(),
//!     &scheme,
//!     &props,
//!     &[p],
//!     &[xp],
//! );
//! assert_eq!(sink.datasets.len(), 11);
//!
//! // And load it back.
//! let mut loaded = vec![Particle::with_id(ParticleId(0))];
//! read_snapshot(&sink, &UnitSystem::identity(), &mut loaded).unwrap();
//! assert_eq!(loaded[0].id, ParticleId(1));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`core`] | `halo-core` | Particle model, units, parameters, properties, errors |
//! | [`cosmology`] | `halo-cosmology` | Integer timeline and kick-factor evaluation |
//! | [`io`] | `halo-io` | Field registry, converters, snapshot writer/reader |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Particle model, unit system, parameters, properties, and errors
/// (`halo-core`).
pub use halo_core as core;

/// Integer timeline and cosmological kick-factor evaluation
/// (`halo-cosmology`).
pub use halo_cosmology as cosmology;

/// Field descriptor registry, derived-quantity converters, and the
/// snapshot writer/reader (`halo-io`).
pub use halo_io as io;

/// Common imports for typical Halo usage.
///
/// ```rust
/// use halo::prelude::*;
/// ```
pub mod prelude {
    // Particle model and configuration
    pub use halo_core::{
        ExtendedPart, GravityPart, HydroProperties, IntegerTime, ParameterError, ParameterFile,
        Particle, ParticleId, SnapshotError, TimeBin, UnitDimension, UnitSystem,
    };

    // Cosmology
    pub use halo_cosmology::{Cosmology, KickKind, KickTable};

    // Snapshot I/O
    pub use halo_io::{
        read_snapshot, write_snapshot, AttributeValue, Column, DatasetSink, DatasetSource,
        MemorySnapshot, ParticleMovement, SchemeInfo, SnapshotContext, TotalEnergyMode,
    };
}
