//! Strongly-typed identifiers and integer-time labels.

use std::fmt;

/// Unique, immutable identifier of one particle.
///
/// Assigned at initial-condition generation and carried unchanged
/// through the whole run; written verbatim to the `ParticleIDs` dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(pub u64);

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ParticleId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// A point on the simulation's integer timeline.
///
/// The integrator subdivides the run into `2^N` integer ticks; one tick
/// corresponds to `time_base` seconds of physical time (or of
/// scale-factor parametrisation when cosmology is enabled). Signed so
/// interval arithmetic can be written without casts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IntegerTime(pub i64);

impl fmt::Display for IntegerTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for IntegerTime {
    fn from(v: i64) -> Self {
        Self(v)
    }
}

/// Per-particle label encoding how frequently the particle is updated.
///
/// A particle in bin `b > 0` is kicked/drifted every `2^(b+1)` integer
/// ticks; bin 0 (and below) means the particle is synchronized to the
/// start of the timeline. The bin defines the particle's begin/end kick
/// boundaries relative to the global current time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeBin(pub i8);

impl fmt::Display for TimeBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i8> for TimeBin {
    fn from(v: i8) -> Self {
        Self(v)
    }
}
