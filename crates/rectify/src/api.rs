//! Curated API surface for the surrounding page/UI collaborator.
//!
//! Prefer these re-exports for clarity and consistency across call sites.

// Geometry kernel
pub use crate::sector::{
    partition_circle, sector_path, svg_path_data, PathCmd, SceneCfg, Sector, SectorId, PALETTE,
};
// Layout engine
pub use crate::layout::{
    arrange_exact_rectangle, arrange_interleaved, arrange_interleaved_outlined,
    arrange_interleaved_recolored, measure, Extent, Fit,
};
// Explore-stage scatter
pub use crate::layout::scatter::{scatter, ReplayToken, ScatterCfg};
// Derivation sequencer
pub use crate::timeline::{LayoutMode, Phase, Script, Timeline};
// Interaction layer
pub use crate::interact::{
    drag_by, rotate_by, ClickRotator, CLICK_TURN, CLICK_WINDOW, DOUBLE_CLICK_TURN,
};
// Apply-stage problems
pub use crate::problems::{practice_set, AreaProblem, GivenSize};
