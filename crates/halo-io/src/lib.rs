//! Snapshot export/import for the Halo particle model.
//!
//! The external schema is owned entirely by the field descriptor
//! registry ([`fields`]): an ordered list of descriptors, each either a
//! direct copy of a particle attribute or a reference to a
//! derived-quantity converter ([`convert`]). The writer and reader
//! iterate that list uniformly: adding, removing, or reordering
//! descriptors is the sole mechanism for changing the schema, and no
//! other code special-cases a field name.
//!
//! Converters are pure functions of one particle plus an immutable
//! per-pass [`SnapshotContext`], so the conversion pass over N
//! particles is safe to spread over parallel workers with no ordering
//! between particles.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod convert;
pub mod dataset;
pub mod descriptor;
pub mod fields;
pub mod reader;
pub mod writer;

pub use convert::{SnapshotContext, TotalEnergyMode};
pub use dataset::{AttributeValue, Column, DatasetSink, DatasetSource, MemorySnapshot};
pub use descriptor::{DataType, FieldValue, InputField, InputPolicy, OutputField, OutputSource};
pub use reader::read_snapshot;
pub use writer::{write_snapshot, ParticleMovement, SchemeInfo};
