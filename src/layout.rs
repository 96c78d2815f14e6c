//! Layout module for tracking UI component regions
//!
//! The `LayoutRegions` struct records where the dashboard's components were
//! last rendered, and `region_at()` resolves a screen position to one of
//! them for mouse routing.

mod layout_regions;

pub use layout_hit_test::{dropdown_row_at, region_at};
pub use layout_regions::{LayoutRegions, Region};
