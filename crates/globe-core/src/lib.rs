//! Core logic for the globe launcher: deterministic spherical icon layout,
//! per-frame visibility and outward orientation, and pointer picking.
//! No platform APIs; front-ends supply the viewpoint and draw the output.

pub mod apps;
pub mod constants;
pub mod error;
pub mod layout;
pub mod marker;
pub mod picking;
pub mod scene;
pub mod state;
pub mod visibility;

pub static GLOBE_WGSL: &str = include_str!("../shaders/globe.wgsl");

pub use apps::*;
pub use constants::*;
pub use error::*;
pub use layout::*;
pub use marker::*;
pub use picking::*;
pub use scene::*;
pub use state::*;
pub use visibility::*;
