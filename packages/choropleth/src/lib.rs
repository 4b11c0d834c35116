#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! District join engine, value range and colour scale.
//!
//! Takes the district boundaries and one day's readings, left-joins them
//! on normalized district name, and produces the records, colour domain
//! and warnings the map is drawn from. Pure: no I/O beyond logging.

pub mod color;
pub mod join;
pub mod range;

pub use color::{ColorScale, Rgb};
pub use join::{join_regions, map_bounds};
pub use range::compute_value_range;
