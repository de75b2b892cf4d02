//! Geometry kernel: sector records, uniform partition, wedge paths.
//!
//! Purpose
//! - Keep the wedge analytic: every sector of one partition shares the same
//!   local path (apex at the origin, bisector pointing up), so placement is
//!   purely a translate + rotate transform and never a path recompute.
//! - Centralize the scene constants (`SceneCfg`) the layout engine and
//!   sequencer share.

mod partition;
mod path;
mod types;

pub use partition::{partition_circle, PALETTE};
pub use path::{sector_path, svg_path_data, PathCmd};
pub use types::{SceneCfg, Sector, SectorId};
