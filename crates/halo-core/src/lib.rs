//! Core types for the Halo snapshot layer.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the particle data model, equation-of-state accessors, kernel
//! constants, the unit system, the parameter file, the hydrodynamic
//! properties derivation, and the error taxonomy shared by the rest of
//! the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod eos;
pub mod error;
pub mod id;
pub mod kernel;
pub mod params;
pub mod particle;
pub mod properties;
pub mod units;

pub use error::{ParameterError, SnapshotError};
pub use id::{IntegerTime, ParticleId, TimeBin};
pub use params::{ParameterFile, ParameterValue};
pub use particle::{ConservedQuantities, ExtendedPart, GravityPart, Particle, PrimitiveQuantities};
pub use properties::HydroProperties;
pub use units::{UnitDimension, UnitSystem};
