//! Sector record and scene configuration.
//!
//! - `SceneCfg`: centralizes the circle radius, world center, and the
//!   screen-fit width budget used by the interleave clamp.
//! - `SectorId`: stable identifier within one partition generation.
//! - `Sector`: the atomic visual/geometric unit; angular fields are fixed at
//!   partition time, placement and colors are mutable presentation state.

use crate::Vec2;

/// Scene configuration shared by partitioning and layout.
#[derive(Clone, Copy, Debug)]
pub struct SceneCfg {
    /// Circle radius in scene units (pixels in the reference page).
    pub radius: f64,
    /// World-space center of the circle.
    pub center: Vec2<f64>,
    /// Width budget for `Fit::Screen` interleave spacing.
    pub fit_width: f64,
}

impl Default for SceneCfg {
    fn default() -> Self {
        Self {
            radius: 150.0,
            center: Vec2::new(400.0, 300.0),
            fit_width: 700.0,
        }
    }
}

/// Identifier of a sector within one partition generation.
///
/// Regenerating the partition replaces the whole sector set; ids are never
/// patched across generations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SectorId(pub usize);

/// A pie-slice wedge of the partitioned circle.
///
/// Invariants:
/// - `angle = end_angle − start_angle`; the local wedge is centered on the
///   up direction (−π/2), so `rotation` alone orients it in the world.
/// - `pos` is the world position of the local origin (the apex), not the
///   centroid.
#[derive(Clone, Debug, PartialEq)]
pub struct Sector {
    pub id: SectorId,
    /// Angular width in radians (2π/N for a uniform partition).
    pub angle: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    /// CSS fill color. Never affects geometry.
    pub color: &'static str,
    /// Optional CSS outline color.
    pub stroke: Option<&'static str>,
    pub pos: Vec2<f64>,
    /// Radians applied around the local origin after translation.
    pub rotation: f64,
}
