//! Integer timeline and cosmological kick-factor evaluation.
//!
//! The integrator subdivides the run into integer ticks; each particle's
//! time bin defines its begin/end kick boundaries on that timeline
//! ([`timeline`]). Extrapolating a quantity from its last kick to the
//! output time needs the integral of a kick operator over an integer
//! interval; [`Cosmology`] evaluates those integrals from cached
//! cumulative tables, or degenerates to plain elapsed time when
//! cosmological integration is disabled.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod kick;
pub mod timeline;

mod cosmology;

pub use cosmology::Cosmology;
pub use kick::{KickKind, KickTable};
