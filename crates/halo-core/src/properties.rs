//! Adaptive-resolution (smoothing-length) configuration.
//!
//! [`HydroProperties::derive`] translates the user-facing resolution
//! parameters into the target neighbour count and convergence
//! thresholds the iterative smoothing-length solver consumes. Derived
//! once at start-up, immutable thereafter, reported verbatim in logs
//! and snapshot metadata.

use std::f64::consts::PI;

use crate::eos::GAMMA;
use crate::error::ParameterError;
use crate::kernel;
use crate::params::ParameterFile;

/// Default bound on the number of smoothing-length iterations.
pub const DEFAULT_MAX_ITERATIONS: i64 = 30;

/// Default bound on the per-step change of a particle's kernel volume.
pub const DEFAULT_VOLUME_CHANGE: f64 = 2.0;

/// Immutable hydrodynamic configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HydroProperties {
    /// Desired-neighbours shape parameter η (smoothing length in units
    /// of the local inter-particle separation).
    pub eta_neighbours: f32,
    /// Continuous target neighbour count, `(4π/3) γ_k³ η³`.
    pub target_neighbours: f32,
    /// Acceptable tolerance band around the target neighbour count.
    pub delta_neighbours: f32,
    /// Iteration bound for the smoothing-length solver.
    pub max_smoothing_iterations: u32,
    /// CFL time-step stability parameter.
    pub cfl_condition: f32,
    /// Log-space bound on the per-step smoothing-length growth,
    /// `ln(max_volume_change^{1/3})`.
    pub log_max_h_change: f32,
}

impl HydroProperties {
    /// Derive the configuration from run parameters and kernel constants.
    ///
    /// `SPH:resolution_eta`, `SPH:delta_neighbours`, and
    /// `SPH:CFL_condition` are required; `SPH:max_volume_change` and
    /// `SPH:max_ghost_iterations` default to
    /// [`DEFAULT_VOLUME_CHANGE`] and [`DEFAULT_MAX_ITERATIONS`].
    pub fn derive(params: &ParameterFile) -> Result<Self, ParameterError> {
        let eta = params.get_f64("SPH:resolution_eta")?;
        let target = 4.0 * PI * kernel::GAMMA3 * eta * eta * eta / 3.0;
        let delta = params.get_f64("SPH:delta_neighbours")?;
        let cfl = params.get_f64("SPH:CFL_condition")?;

        let max_iterations =
            params.get_opt_i64("SPH:max_ghost_iterations", DEFAULT_MAX_ITERATIONS)?;
        let max_volume_change =
            params.get_opt_f64("SPH:max_volume_change", DEFAULT_VOLUME_CHANGE)?;

        Ok(Self {
            eta_neighbours: eta as f32,
            target_neighbours: target as f32,
            delta_neighbours: delta as f32,
            max_smoothing_iterations: max_iterations as u32,
            cfl_condition: cfl as f32,
            log_max_h_change: max_volume_change.powf(1.0 / 3.0).ln() as f32,
        })
    }

    /// Maximum per-step kernel volume change implied by
    /// [`log_max_h_change`](Self::log_max_h_change).
    pub fn max_volume_change(&self) -> f32 {
        (self.log_max_h_change.exp()).powi(3)
    }

    /// Human-readable report, one line per configuration aspect.
    ///
    /// Reproduces every derived value, not just the raw inputs. The
    /// scheme-name line is deliberately absent: scheme identification
    /// belongs to the snapshot writer's metadata block, which owns the
    /// flavour strings.
    pub fn summary(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Adiabatic index gamma: {GAMMA}."),
            format!(
                "Hydrodynamic kernel: {} with {:.2} +/- {:.2} neighbours (eta={}).",
                kernel::NAME,
                self.target_neighbours,
                self.delta_neighbours,
                self.eta_neighbours
            ),
            format!(
                "Hydrodynamic integration: CFL parameter: {:.4}.",
                self.cfl_condition
            ),
            format!(
                "Hydrodynamic integration: Max change of volume: {:.2} (max|dlog(h)/dt|={}).",
                self.max_volume_change(),
                self.log_max_h_change
            ),
        ];
        if i64::from(self.max_smoothing_iterations) != DEFAULT_MAX_ITERATIONS {
            lines.push(format!(
                "Maximal iterations in ghost task set to {} (default is {}).",
                self.max_smoothing_iterations, DEFAULT_MAX_ITERATIONS
            ));
        }
        lines
    }
}
