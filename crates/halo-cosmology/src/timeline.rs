//! The integer timeline and per-bin kick boundaries.
//!
//! The run spans `2^(NUM_TIME_BINS + 1)` integer ticks. A particle in
//! bin `b > 0` takes steps of `2^(b + 1)` ticks, aligned to multiples
//! of its step length; bins at or below zero mean the particle has no
//! active step and both boundaries collapse to the timeline origin.

use halo_core::{IntegerTime, TimeBin};

/// Number of usable time bins.
pub const NUM_TIME_BINS: u32 = 56;

/// Highest tick on the timeline, `2^(NUM_TIME_BINS + 1)`.
pub const MAX_NR_TIMESTEPS: i64 = 1 << (NUM_TIME_BINS + 1);

/// Step length, in integer ticks, of a particle in `bin`.
pub fn integer_timestep(bin: TimeBin) -> IntegerTime {
    if bin.0 <= 0 {
        IntegerTime(0)
    } else {
        IntegerTime(1 << (bin.0 as u32 + 1))
    }
}

/// Start of the step containing `ti_current` for a particle in `bin`.
///
/// This is the particle's last kick boundary: the largest multiple of
/// its step length strictly below `ti_current` (or equal to it when
/// `ti_current` sits exactly on a boundary, in which case the step that
/// *ends* at `ti_current` is meant).
pub fn integer_time_begin(ti_current: IntegerTime, bin: TimeBin) -> IntegerTime {
    let dti = integer_timestep(bin).0;
    if dti == 0 {
        return IntegerTime(0);
    }
    IntegerTime(dti * ((ti_current.0 - 1) / dti))
}

/// End of the step containing `ti_current` for a particle in `bin`.
pub fn integer_time_end(ti_current: IntegerTime, bin: TimeBin) -> IntegerTime {
    let dti = integer_timestep(bin).0;
    if dti == 0 {
        return IntegerTime(0);
    }
    let rem = ti_current.0 % dti;
    if rem == 0 {
        ti_current
    } else {
        IntegerTime(ti_current.0 - rem + dti)
    }
}
