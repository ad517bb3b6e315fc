//! Plotline Paint API
//!
//! The drawing vocabulary shared by the chart crates. Nothing here rasterizes;
//! charts build paths and paint records that a host surface draws.
//!
//! # Features
//!
//! - Path building (lines, quadratic/cubic curves)
//! - Shape primitives (rect, ellipse, rounded rect)
//! - Path measurement, trimming and vertical scaling for reveal animations
//! - Solid and linear-gradient fills with unit-space anchors
//! - A recording paint context

pub mod color;
pub mod context;
pub mod error;
pub mod gradient;
pub mod path;
pub mod primitives;

pub use color::Color;
pub use context::{FillStyle, LineCap, LineJoin, PaintCommand, PaintContext, StrokeStyle};
pub use error::{PaintError, Result};
pub use gradient::{GradientStop, LinearGradient, UnitPoint};
pub use path::{Path, PathBuilder, PathCommand, Point};
pub use primitives::*;
