//! Uniform partition of the circle into congruent sectors.

use std::f64::consts::{FRAC_PI_2, TAU};

use super::types::{SceneCfg, Sector, SectorId};

/// Fill palette cycled across sectors in partition order.
pub const PALETTE: [&str; 12] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#FFA07A", "#98D8C8", "#F7DC6F", "#BB8FCE", "#85C1E2",
    "#F8B739", "#6C5CE7", "#A29BFE", "#FD79A8",
];

/// Partition the circle into `count` congruent sectors.
///
/// Sector `i` is the base wedge (bisector pointing up) rotated by
/// `i · 2π/count` about `cfg.center`, so the set reconstructs the full
/// circle when rendered. `count == 0` yields an empty set.
///
/// The page draws counts from a fixed set (4, 8, …, 128) but any positive
/// count works.
pub fn partition_circle(count: usize, cfg: &SceneCfg) -> Vec<Sector> {
    if count == 0 {
        return Vec::new();
    }
    let step = TAU / count as f64;
    let start = -FRAC_PI_2 - step / 2.0;
    let end = -FRAC_PI_2 + step / 2.0;
    (0..count)
        .map(|i| Sector {
            id: SectorId(i),
            angle: step,
            start_angle: start,
            end_angle: end,
            color: PALETTE[i % PALETTE.len()],
            stroke: None,
            pos: cfg.center,
            rotation: step * i as f64,
        })
        .collect()
}
