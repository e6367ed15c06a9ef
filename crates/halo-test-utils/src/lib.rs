//! Reusable fixtures for testing the Halo snapshot layer.
//!
//! Deterministic particle populations, cosmology states, and parameter
//! files, consumed by the other crates' dev-dependencies.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod fixtures;

pub use fixtures::{
    expanding_cosmology, gizmo_parameter_file, synchronized_particle, uniform_particles,
};
