//! Process-wide cosmology state, snapshotted per output pass.

use halo_core::IntegerTime;

use crate::kick::{KickKind, KickTable};

/// Expansion state and kick-factor provider.
///
/// Constructed once from configuration, mutated only by the integrator
/// driver between coarse steps, and read by converters without
/// synchronization: an output pass captures the state once before it
/// starts and never refreshes it mid-pass. The driver and the output
/// pass are sequenced, never interleaved.
#[derive(Clone, Debug, PartialEq)]
pub struct Cosmology {
    /// Scale factor `a`.
    pub a: f64,
    /// `1 / a`.
    pub a_inv: f64,
    /// `1 / a²`, the comoving→peculiar velocity factor.
    pub a2_inv: f64,
    /// `1 / a³`.
    pub a3_inv: f64,
    /// Current integer simulation time.
    pub ti_current: IntegerTime,
    /// Seconds of physical time per integer tick.
    pub time_base: f64,
    mode: Mode,
}

#[derive(Clone, Debug, PartialEq)]
enum Mode {
    /// Plain Newtonian time: every kick factor is elapsed time.
    Newtonian,
    /// Scale-factor integration with cached kick-kernel integrals.
    Expanding {
        grav: Box<KickTable>,
        hydro: Box<KickTable>,
    },
}

impl Cosmology {
    /// A non-expanding universe: `a = 1`, kick factors reduce to
    /// elapsed physical time.
    pub fn newtonian(ti_current: IntegerTime, time_base: f64) -> Self {
        Self {
            a: 1.0,
            a_inv: 1.0,
            a2_inv: 1.0,
            a3_inv: 1.0,
            ti_current,
            time_base,
            mode: Mode::Newtonian,
        }
    }

    /// An expanding universe at scale factor `a`, with the gravity and
    /// hydrodynamic kick-kernel tables supplied by the integrator
    /// driver (the kernel forms are its responsibility).
    pub fn expanding(
        a: f64,
        ti_current: IntegerTime,
        time_base: f64,
        grav: KickTable,
        hydro: KickTable,
    ) -> Self {
        let a_inv = 1.0 / a;
        Self {
            a,
            a_inv,
            a2_inv: a_inv * a_inv,
            a3_inv: a_inv * a_inv * a_inv,
            ti_current,
            time_base,
            mode: Mode::Expanding {
                grav: Box::new(grav),
                hydro: Box::new(hydro),
            },
        }
    }

    /// Whether cosmological integration is enabled.
    pub fn enabled(&self) -> bool {
        matches!(self.mode, Mode::Expanding { .. })
    }

    /// Integral of the `kind` kick operator over `[ti_begin, ti_end)`.
    ///
    /// Monotonic non-decreasing in `ti_end` for fixed `ti_begin`, and
    /// zero for an empty interval.
    ///
    /// # Panics
    ///
    /// Panics if `ti_end < ti_begin`; an inverted interval is a
    /// programming error, not a recoverable condition.
    pub fn kick_factor(&self, kind: KickKind, ti_begin: IntegerTime, ti_end: IntegerTime) -> f64 {
        match &self.mode {
            Mode::Newtonian => {
                assert!(
                    ti_end >= ti_begin,
                    "kick interval ends at {ti_end} before it begins at {ti_begin}"
                );
                (ti_end.0 - ti_begin.0) as f64 * self.time_base
            }
            Mode::Expanding { grav, hydro } => match kind {
                KickKind::Gravity => grav.interval(ti_begin, ti_end),
                KickKind::Hydro => hydro.interval(ti_begin, ti_end),
            },
        }
    }
}
