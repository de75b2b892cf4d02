//! Geometry core for the circle-area teaching tool.
//!
//! Partitions a circle into congruent sectors, arranges them into
//! rectangle-like layouts, and drives the scripted circle→rectangle
//! derivation timeline. The surrounding page (rendering, routing, form
//! plumbing) consumes the sector set and the measurement numbers; none of
//! that lives here.
//!
//! Coordinates are y-down screen coordinates; angles are radians, increasing
//! clockwise from the positive x-axis, so "up" is −π/2.

pub mod api;
pub mod interact;
pub mod layout;
pub mod problems;
pub mod sector;
pub mod timeline;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::interact::{drag_by, rotate_by, ClickRotator};
    pub use crate::layout::scatter::{scatter, ReplayToken, ScatterCfg};
    pub use crate::layout::{
        arrange_exact_rectangle, arrange_interleaved, arrange_interleaved_outlined,
        arrange_interleaved_recolored, measure, Extent, Fit,
    };
    pub use crate::sector::{partition_circle, sector_path, PathCmd, SceneCfg, Sector, SectorId};
    pub use crate::timeline::{LayoutMode, Phase, Script, Timeline};
    pub use nalgebra::Vector2 as Vec2;
}

/// Area of a circle of radius `r`.
#[inline]
pub fn circle_area(r: f64) -> f64 {
    std::f64::consts::PI * r * r
}

/// Circumference of a circle of radius `r`.
#[inline]
pub fn circumference(r: f64) -> f64 {
    std::f64::consts::TAU * r
}
