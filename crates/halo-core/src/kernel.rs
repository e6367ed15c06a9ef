//! Smoothing-kernel constants consumed by the properties derivation.
//!
//! The kernel function itself lives with the smoothing-length solver;
//! this module only exposes the constants the configuration layer
//! needs: the kernel's name and the ratio between its compact-support
//! radius and the smoothing length.

/// Kernel name, reported in logs and snapshot metadata.
pub const NAME: &str = "Cubic spline (M4)";

/// Ratio of the kernel compact-support radius to the smoothing length.
pub const GAMMA: f64 = 1.825742;

/// `GAMMA` cubed, the compact-support volume factor entering the
/// target neighbour count.
pub const GAMMA3: f64 = GAMMA * GAMMA * GAMMA;
