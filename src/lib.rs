//! Declarative, immutable scene graph for 2D vector and raster graphics.
//!
//! Applications describe a frame as an [`draw::Element`] tree built from pure
//! constructors and hand it to an external renderer. The crate also carries the
//! supporting pieces a renderer-facing tool needs: scene files, configuration and a
//! paint-order tree walker.

pub mod config;
pub mod demo;
pub mod draw;
pub mod scene;
pub mod util;

pub use config::Config;
