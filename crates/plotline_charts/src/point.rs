use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use plotline_paint::{Color, CornerRadius, Path, PathBuilder, Point, Rect, Size, StrokeStyle};

use crate::colour::PointColour;
use crate::drawable::DrawPaint;

/// Corner radius of [`PointShape::RoundSquare`].
pub const ROUND_SQUARE_RADIUS: f32 = 3.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointShape {
    #[default]
    Circle,
    Square,
    RoundSquare,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointType {
    Filled,
    #[default]
    Outline,
    FilledOutline,
}

/// Styling for the data point markers of a series.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointStyle {
    pub point_size: f32,
    pub border_colour: Color,
    pub fill_colour: Color,
    pub line_width: f32,
    pub point_type: PointType,
    pub point_shape: PointShape,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            point_size: 9.0,
            border_colour: Color::PRIMARY,
            fill_colour: Color::TRANSPARENT,
            line_width: 3.0,
            point_type: PointType::Outline,
            point_shape: PointShape::Circle,
        }
    }
}

impl PointStyle {
    /// Paints for one marker, back to front. A per-point override replaces
    /// the style's colours.
    pub fn paints(&self, colour: Option<&PointColour>) -> SmallVec<[DrawPaint; 2]> {
        let fill = colour.map_or(self.fill_colour, |c| c.fill);
        let border = colour.map_or(self.border_colour, |c| c.border);
        let stroke = || DrawPaint::Stroke {
            style: border.into(),
            stroke: StrokeStyle::new(self.line_width),
        };
        match self.point_type {
            PointType::Filled => smallvec![DrawPaint::Fill(fill.into())],
            PointType::Outline => smallvec![stroke()],
            PointType::FilledOutline => smallvec![DrawPaint::Fill(fill.into()), stroke()],
        }
    }
}

/// Marker path with its top-leading corner at `position`.
///
/// With `ignore_zero` a zero value yields an empty path, hiding the marker
/// without shifting any other point.
pub fn point_path(position: Point, size: f32, shape: PointShape, ignore_zero: bool, value: f64) -> Path {
    if ignore_zero && value == 0.0 {
        return Path::new();
    }
    let rect = Rect::from_origin_size(position, Size::new(size, size));
    let builder = PathBuilder::new();
    match shape {
        PointShape::Circle => builder.add_ellipse(rect),
        PointShape::Square => builder.add_rect(rect),
        PointShape::RoundSquare => {
            builder.add_rounded_rect(rect, CornerRadius::uniform(ROUND_SQUARE_RADIUS))
        }
    }
    .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotline_paint::{FillStyle, PathCommand};

    #[test]
    fn zero_is_suppressed_only_when_asked() {
        let p = Point::new(10.0, 10.0);
        assert!(point_path(p, 8.0, PointShape::Square, true, 0.0).is_empty());
        assert!(!point_path(p, 8.0, PointShape::Square, false, 0.0).is_empty());
        assert!(!point_path(p, 8.0, PointShape::Square, true, 0.1).is_empty());
    }

    #[test]
    fn every_shape_fills_the_point_rect() {
        let p = Point::new(45.0, 45.0);
        for shape in [PointShape::Circle, PointShape::Square, PointShape::RoundSquare] {
            let path = point_path(p, 10.0, shape, true, 5.0);
            assert_eq!(path.bounds(), Some(Rect::new(45.0, 45.0, 10.0, 10.0)), "{shape:?}");
        }
    }

    #[test]
    fn shapes_use_their_primitive() {
        let p = Point::ZERO;
        let square = point_path(p, 10.0, PointShape::Square, false, 1.0);
        assert!(square
            .commands()
            .iter()
            .all(|c| !matches!(c, PathCommand::CubicTo { .. })));

        let circle = point_path(p, 10.0, PointShape::Circle, false, 1.0);
        let cubics = circle
            .commands()
            .iter()
            .filter(|c| matches!(c, PathCommand::CubicTo { .. }))
            .count();
        assert_eq!(cubics, 4);

        let round = point_path(p, 10.0, PointShape::RoundSquare, false, 1.0);
        assert_eq!(
            round.commands().first(),
            Some(&PathCommand::MoveTo(Point::new(ROUND_SQUARE_RADIUS, 0.0)))
        );
    }

    #[test]
    fn paints_follow_point_type_and_override() {
        let mut style = PointStyle {
            point_type: PointType::FilledOutline,
            ..PointStyle::default()
        };
        let over = PointColour::new(Color::RED, Color::BLUE);
        let paints = style.paints(Some(&over));
        assert_eq!(paints.len(), 2);
        assert_eq!(paints[0], DrawPaint::Fill(Color::BLUE.into()));
        assert!(matches!(&paints[1], DrawPaint::Stroke { style, .. } if *style == FillStyle::Color(Color::RED)));

        style.point_type = PointType::Filled;
        assert_eq!(style.paints(None).as_slice(), &[DrawPaint::Fill(Color::TRANSPARENT.into())]);
    }
}
