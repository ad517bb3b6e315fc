//! Gradient fills

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::path::Point;
use crate::primitives::Size;

/// A position in unit space of a frame, `(0, 0)` top-leading to `(1, 1)`
/// bottom-trailing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitPoint {
    pub x: f32,
    pub y: f32,
}

impl UnitPoint {
    pub const ZERO: UnitPoint = UnitPoint::new(0.0, 0.0);
    pub const CENTER: UnitPoint = UnitPoint::new(0.5, 0.5);
    pub const LEADING: UnitPoint = UnitPoint::new(0.0, 0.5);
    pub const TRAILING: UnitPoint = UnitPoint::new(1.0, 0.5);
    pub const TOP: UnitPoint = UnitPoint::new(0.5, 0.0);
    pub const BOTTOM: UnitPoint = UnitPoint::new(0.5, 1.0);
    pub const TOP_LEADING: UnitPoint = UnitPoint::new(0.0, 0.0);
    pub const TOP_TRAILING: UnitPoint = UnitPoint::new(1.0, 0.0);
    pub const BOTTOM_LEADING: UnitPoint = UnitPoint::new(0.0, 1.0);
    pub const BOTTOM_TRAILING: UnitPoint = UnitPoint::new(1.0, 1.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Resolve to a local point inside a frame of `size`.
    pub fn resolve(&self, size: Size) -> Point {
        Point::new(self.x * size.width, self.y * size.height)
    }

    pub fn to_bits(&self) -> [u32; 2] {
        [self.x.to_bits(), self.y.to_bits()]
    }
}

/// A gradient stop
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub color: Color,
    /// 0.0 to 1.0 along the gradient axis
    #[serde(rename = "location")]
    pub offset: f32,
}

impl GradientStop {
    pub const fn new(color: Color, offset: f32) -> Self {
        Self { color, offset }
    }
}

/// A linear gradient between two local points
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    /// Spread `colors` evenly along the axis.
    pub fn from_colors(colors: &[Color], start: Point, end: Point) -> Self {
        let last = colors.len().saturating_sub(1).max(1) as f32;
        let stops = colors
            .iter()
            .enumerate()
            .map(|(i, &color)| GradientStop::new(color, i as f32 / last))
            .collect();
        Self { start, end, stops }
    }

    /// Use explicit stops, sorted by offset with offsets clamped to 0..=1.
    pub fn from_stops(stops: &[GradientStop], start: Point, end: Point) -> Self {
        let mut stops: Vec<GradientStop> = stops
            .iter()
            .map(|s| GradientStop::new(s.color, s.offset.clamp(0.0, 1.0)))
            .collect();
        stops.sort_by(|a, b| a.offset.total_cmp(&b.offset));
        Self { start, end, stops }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_points_resolve_against_frame() {
        let size = Size::new(200.0, 100.0);
        assert_eq!(UnitPoint::LEADING.resolve(size), Point::new(0.0, 50.0));
        assert_eq!(UnitPoint::BOTTOM_TRAILING.resolve(size), Point::new(200.0, 100.0));
    }

    #[test]
    fn colors_are_spread_evenly() {
        let g = LinearGradient::from_colors(
            &[Color::RED, Color::GREEN, Color::BLUE],
            Point::ZERO,
            Point::new(1.0, 0.0),
        );
        let offsets: Vec<f32> = g.stops.iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn stops_are_sorted_and_clamped() {
        let g = LinearGradient::from_stops(
            &[GradientStop::new(Color::RED, 1.5), GradientStop::new(Color::BLUE, 0.2)],
            Point::ZERO,
            Point::ZERO,
        );
        assert_eq!(g.stops[0].color, Color::BLUE);
        assert_eq!(g.stops[1].offset, 1.0);
    }
}
