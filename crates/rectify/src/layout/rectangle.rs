//! Exact interlocking rectangle: the limiting-case layout.
//!
//! Target width is exactly π·r (half the circumference), height exactly r.
//! The slot width is `width/count`; even indices land on the even slots of
//! the upper row, odd indices on the midpoints in between on the lower row,
//! which is the offset that interlocks the wedges without gaps as the count
//! grows.

use std::f64::consts::PI;

use crate::sector::{SceneCfg, Sector};
use crate::Vec2;

use super::rows::{LEFT_HALF, RIGHT_HALF};

/// Interlock the sector set into the exact rectangle.
///
/// Colors and strokes from the prior coloring pass are preserved; a sector
/// arriving without a stroke gets the row-parity stroke so the function
/// stays total without re-running that pass.
pub fn arrange_exact_rectangle(sectors: &[Sector], cfg: &SceneCfg) -> Vec<Sector> {
    let count = sectors.len();
    if count == 0 {
        return Vec::new();
    }
    let width = PI * cfg.radius;
    let slot = width / count as f64;
    let x0 = cfg.center.x - width / 2.0;
    let upper_y = cfg.center.y - cfg.radius / 2.0;
    let lower_y = cfg.center.y + cfg.radius / 2.0;

    sectors
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let upper = i % 2 == 0;
            let mut out = s.clone();
            // Even i = 2k sits at slot 2k; odd i = 2k+1 sits at the midpoint
            // between slots 2k and 2k+2. Both reduce to slot · i.
            out.pos = Vec2::new(x0 + slot * i as f64, if upper { upper_y } else { lower_y });
            out.rotation = if upper { 0.0 } else { PI };
            out.stroke = s
                .stroke
                .or(Some(if upper { LEFT_HALF } else { RIGHT_HALF }));
            out
        })
        .collect()
}
