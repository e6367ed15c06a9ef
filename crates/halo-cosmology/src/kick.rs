//! Interval integrals of the kick operators.
//!
//! Under cosmological integration, extrapolating a velocity needs the
//! integral of an expansion-dependent weighting over an integer-time
//! interval. Computing that integral per particle would be wasteful:
//! the integrand only depends on the global expansion history, so a
//! cumulative table is built once per run and every interval reduces to
//! a difference of two interpolated lookups. The integrand closures
//! themselves belong to the integrator driver; this module owns the
//! table build, interpolation, and interval-difference contract only.

use halo_core::IntegerTime;

/// Which kick operator's integral to evaluate.
///
/// The gravity kick weights by the inverse scale factor along the
/// expansion history; the hydrodynamic kick weights by
/// `a^{-3(γ−1)}`. With cosmology disabled both collapse to plain
/// elapsed physical time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KickKind {
    /// Gravity kick operator.
    Gravity,
    /// Hydrodynamic kick operator.
    Hydro,
}

/// Cumulative-integral cache for one kick kernel.
///
/// `cumulative[i]` holds the integral of the kernel over the integer
/// interval `[0, i * step)`. Built once by trapezoidal quadrature of a
/// supplied integrand; interval queries interpolate linearly between
/// samples. Monotonic non-decreasing as long as the integrand is
/// non-negative, which every physical kick kernel is.
#[derive(Clone, Debug, PartialEq)]
pub struct KickTable {
    /// Highest integer time the table covers.
    ti_max: i64,
    /// Integer ticks between consecutive samples.
    step: f64,
    /// Cumulative integral at each sample point.
    cumulative: Vec<f64>,
}

impl KickTable {
    /// Sample count giving table errors well below the quantities'
    /// single-precision storage for smooth expansion histories.
    pub const DEFAULT_SAMPLES: usize = 10_000;

    /// Build with [`DEFAULT_SAMPLES`](Self::DEFAULT_SAMPLES) intervals.
    pub fn with_default_samples(
        ti_max: IntegerTime,
        time_base: f64,
        integrand: impl Fn(f64) -> f64,
    ) -> Self {
        Self::build(ti_max, Self::DEFAULT_SAMPLES, time_base, integrand)
    }

    /// Build a cumulative table over `[0, ti_max]` with `samples`
    /// intervals.
    ///
    /// `integrand(t)` is the kick kernel as a function of physical time
    /// `t = ti * time_base`; it must be non-negative over the covered
    /// range for the monotonicity contract to hold.
    ///
    /// # Panics
    ///
    /// Panics if `ti_max` or `samples` is zero.
    pub fn build(
        ti_max: IntegerTime,
        samples: usize,
        time_base: f64,
        integrand: impl Fn(f64) -> f64,
    ) -> Self {
        assert!(ti_max.0 > 0, "kick table needs a positive time range");
        assert!(samples > 0, "kick table needs at least one interval");

        let step = ti_max.0 as f64 / samples as f64;
        let dt = step * time_base;
        let mut cumulative = Vec::with_capacity(samples + 1);
        cumulative.push(0.0);
        let mut prev = integrand(0.0);
        let mut total = 0.0;
        for i in 1..=samples {
            let next = integrand(i as f64 * dt);
            total += 0.5 * (prev + next) * dt;
            cumulative.push(total);
            prev = next;
        }
        Self {
            ti_max: ti_max.0,
            step,
            cumulative,
        }
    }

    /// Cumulative integral over `[0, ti)`, interpolated.
    fn value_at(&self, ti: i64) -> f64 {
        assert!(
            (0..=self.ti_max).contains(&ti),
            "integer time {ti} outside kick table range [0, {}]",
            self.ti_max
        );
        let pos = ti as f64 / self.step;
        let idx = (pos as usize).min(self.cumulative.len() - 2);
        let frac = pos - idx as f64;
        self.cumulative[idx] + frac * (self.cumulative[idx + 1] - self.cumulative[idx])
    }

    /// Integral of the kernel over the half-open interval
    /// `[ti_begin, ti_end)`.
    ///
    /// # Panics
    ///
    /// `ti_end < ti_begin` is a programming error and panics; an
    /// inverted interval can only come from broken timeline arithmetic
    /// and is never recoverable.
    pub fn interval(&self, ti_begin: IntegerTime, ti_end: IntegerTime) -> f64 {
        assert!(
            ti_end >= ti_begin,
            "kick interval ends at {ti_end} before it begins at {ti_begin}"
        );
        self.value_at(ti_end.0) - self.value_at(ti_begin.0)
    }
}
