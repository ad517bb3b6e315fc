//! A second line overlaid on a line or bar chart.
//!
//! [`ExtraLine::attach`] stores the series on the host chart and registers
//! its legend entry; [`ExtraLine::compose`] stacks the line and its point
//! markers over the host's content. Each drawable has its own reveal
//! controller, driven by the host's mount/unmount callbacks.

use anyhow::Context;
use serde::{Deserialize, Serialize};

use plotline_animation::{Animation, RevealId, RevealKind, RevealRuntime};
use plotline_paint::{Path, PathBuilder, Point, Size, StrokeStyle};

use crate::colour::{ColourStyle, PointColour};
use crate::drawable::{DrawPaint, Drawable};
use crate::fragment::Fragment;
use crate::geometry::{map_point, min_max, SeriesGeometry};
use crate::legend::register_extra_line;
use crate::model::{ElementId, LineBarChartData};
use crate::point::{point_path, PointStyle};

/// Z-index of the extra line's drawables, above the host's content.
const OVERLAY_Z_INDEX: f32 = 1.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtraLineDataPoint {
    pub value: f64,
    #[serde(default)]
    pub colour: Option<PointColour>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ExtraLineDataPoint {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            colour: None,
            description: None,
        }
    }

    pub fn with_colour(mut self, colour: PointColour) -> Self {
        self.colour = Some(colour);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineType {
    #[default]
    Line,
    Curved,
    Stepped,
}

/// Which host layout the x positions line up with. Both centre each point
/// in its slot; `Bar` names the alignment with bar centres.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineSpacing {
    #[default]
    Line,
    Bar,
}

/// Value at the bottom edge of the frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Baseline {
    #[default]
    MinimumValue,
    Zero,
    Value(f64),
}

/// Value at the top edge of the frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopLine {
    #[default]
    MaximumValue,
    Value(f64),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtraLineStyle {
    pub line_colour: ColourStyle,
    pub line_type: LineType,
    pub line_spacing: LineSpacing,
    pub stroke_style: StrokeStyle,
    pub point_style: PointStyle,
    pub animation_type: RevealKind,
    pub baseline: Baseline,
    pub top_line: TopLine,
}

impl Default for ExtraLineStyle {
    fn default() -> Self {
        Self {
            line_colour: ColourStyle::default(),
            line_type: LineType::Curved,
            line_spacing: LineSpacing::Line,
            stroke_style: StrokeStyle::new(3.0),
            point_style: PointStyle::default(),
            animation_type: RevealKind::Draw,
            baseline: Baseline::MinimumValue,
            top_line: TopLine::MaximumValue,
        }
    }
}

/// The extra line's series: its points, style and value span.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtraLineData {
    pub id: ElementId,
    pub legend_title: String,
    pub data_points: Vec<ExtraLineDataPoint>,
    pub style: ExtraLineStyle,
    min_value: f64,
    range: f64,
}

impl ExtraLineData {
    pub fn new(
        legend_title: impl Into<String>,
        data_points: Vec<ExtraLineDataPoint>,
        style: ExtraLineStyle,
    ) -> anyhow::Result<Self> {
        let legend_title = legend_title.into();
        if let Some(index) = data_points.iter().position(|p| !p.value.is_finite()) {
            anyhow::bail!("extra line {legend_title:?} has a non-finite value at index {index}");
        }

        let values: Vec<f64> = data_points.iter().map(|p| p.value).collect();
        let (lo, hi) = min_max(&values);
        let min_value = match style.baseline {
            Baseline::MinimumValue => lo,
            Baseline::Zero => 0.0,
            Baseline::Value(v) => v,
        };
        let max_value = match style.top_line {
            TopLine::MaximumValue => hi,
            TopLine::Value(v) => v,
        };
        anyhow::ensure!(
            min_value.is_finite() && max_value.is_finite(),
            "extra line {legend_title:?} has a non-finite baseline or top line"
        );

        Ok(Self {
            id: ElementId::next(),
            legend_title,
            data_points,
            style,
            min_value,
            range: max_value - min_value,
        })
    }

    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    /// Top line minus baseline, before the zero-range guard.
    pub fn range(&self) -> f64 {
        self.range
    }

    pub fn values(&self) -> Vec<f64> {
        self.data_points.iter().map(|p| p.value).collect()
    }

    pub fn geometry(&self) -> SeriesGeometry {
        SeriesGeometry::new(self.min_value, self.range, self.data_points.len())
    }
}

/// One continuous sub-path through every value, unstyled.
pub fn line_path(
    values: &[f64],
    line_type: LineType,
    spacing: LineSpacing,
    geometry: &SeriesGeometry,
    frame: Size,
) -> Path {
    let points: Vec<Point> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| match spacing {
            LineSpacing::Line | LineSpacing::Bar => map_point(v, i, geometry, frame, 0.0),
        })
        .collect();

    let Some((first, rest)) = points.split_first() else {
        return Path::new();
    };

    let mut builder = PathBuilder::new().move_to(first.x, first.y);
    let mut prev = *first;
    for &p in rest {
        builder = match line_type {
            LineType::Line => builder.line_to(p.x, p.y),
            LineType::Curved => {
                let mid = (prev.x + p.x) / 2.0;
                builder.cubic_to(mid, prev.y, mid, p.y, p.x, p.y)
            }
            LineType::Stepped => builder.line_to(p.x, prev.y).line_to(p.x, p.y),
        };
        prev = p;
    }
    builder.build()
}

/// Reveal state of an attached extra line.
#[derive(Debug)]
pub struct ExtraLine {
    reveals: RevealRuntime,
    line: RevealId,
    points: Vec<RevealId>,
}

impl ExtraLine {
    /// Build the series, register its legend entry and store it on `chart`,
    /// replacing any previous extra line.
    pub fn attach<T>(
        chart: &mut T,
        legend_title: impl Into<String>,
        data_points: Vec<ExtraLineDataPoint>,
        style: ExtraLineStyle,
    ) -> anyhow::Result<Self>
    where
        T: LineBarChartData + ?Sized,
    {
        let data = ExtraLineData::new(legend_title, data_points, style)
            .context("failed to attach extra line")?;
        register_extra_line(chart.legends_mut(), &data);

        let animation = chart.chart_style().global_animation;
        let overlay = Self::with_point_count(animation, data.data_points.len());
        chart.set_extra_line(data);
        Ok(overlay)
    }

    fn with_point_count(animation: Animation, count: usize) -> Self {
        let mut reveals = RevealRuntime::new();
        let line = reveals.create(animation);
        let points = (0..count).map(|_| reveals.create(animation)).collect();
        Self {
            reveals,
            line,
            points,
        }
    }

    pub fn on_appear(&mut self) {
        self.reveals.appear_all();
    }

    pub fn on_disappear(&mut self) {
        self.reveals.disappear_all();
    }

    pub fn tick(&mut self, dt_ms: f32) {
        self.reveals.tick(dt_ms);
    }

    pub fn is_animating(&self) -> bool {
        self.reveals.has_active_animations()
    }

    pub fn line_progress(&self) -> f32 {
        self.reveals.progress(self.line)
    }

    pub fn point_progress(&self, index: usize) -> f32 {
        self.points
            .get(index)
            .map_or_else(|| self.line_progress(), |id| self.reveals.progress(*id))
    }

    /// The host's content with the line and its points stacked above it.
    ///
    /// Returns the content alone when the host has two or fewer points, no
    /// extra line is attached, or the line's colour cannot be resolved.
    pub fn compose<T, C>(&self, chart: &T, content: C, frame: Size) -> Fragment<C>
    where
        T: LineBarChartData + ?Sized,
    {
        if !chart.is_greater_than_two() {
            return Fragment::Content(content);
        }
        let Some(data) = chart.extra_line() else {
            return Fragment::Content(content);
        };
        let Some(line_fill) = data.style.line_colour.fill_style(frame) else {
            tracing::debug!(title = %data.legend_title, "extra line colour is incomplete, skipping");
            return Fragment::Content(content);
        };

        let style = &data.style;
        let geometry = data.geometry();
        let anchor_y = frame.height;

        let mut children = Vec::with_capacity(data.data_points.len() + 2);
        let path = line_path(&data.values(), style.line_type, style.line_spacing, &geometry, frame);
        children.push(Fragment::Shape(
            Drawable::new(
                path,
                DrawPaint::Stroke {
                    style: line_fill,
                    stroke: style.stroke_style.clone(),
                },
            )
            .with_reveal(style.animation_type, self.line_progress(), anchor_y)
            .with_z_index(OVERLAY_Z_INDEX),
        ));

        let point_style = &style.point_style;
        for (index, point) in data.data_points.iter().enumerate() {
            let position = map_point(point.value, index, &geometry, frame, point_style.point_size);
            let marker = point_path(
                position,
                point_style.point_size,
                point_style.point_shape,
                false,
                point.value,
            );
            let progress = self.point_progress(index);
            for paint in point_style.paints(point.colour.as_ref()) {
                children.push(Fragment::Shape(
                    Drawable::new(marker.clone(), paint)
                        .with_reveal(style.animation_type, progress, anchor_y)
                        .with_z_index(OVERLAY_Z_INDEX),
                ));
            }
        }

        children.push(Fragment::Content(content));
        Fragment::ZStack { children }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotline_paint::PathCommand;

    const FRAME: Size = Size::new(100.0, 100.0);

    fn points(values: &[f64]) -> Vec<ExtraLineDataPoint> {
        values.iter().copied().map(ExtraLineDataPoint::new).collect()
    }

    #[test]
    fn baseline_and_top_line_set_the_span() {
        let data = ExtraLineData::new("a", points(&[2.0, 6.0, 4.0]), ExtraLineStyle::default()).unwrap();
        assert_eq!((data.min_value(), data.range()), (2.0, 4.0));

        let style = ExtraLineStyle {
            baseline: Baseline::Zero,
            top_line: TopLine::Value(10.0),
            ..ExtraLineStyle::default()
        };
        let data = ExtraLineData::new("a", points(&[2.0, 6.0, 4.0]), style).unwrap();
        assert_eq!((data.min_value(), data.range()), (0.0, 10.0));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let err = ExtraLineData::new("a", points(&[1.0, f64::INFINITY]), ExtraLineStyle::default())
            .unwrap_err();
        assert!(err.to_string().contains("index 1"));
    }

    #[test]
    fn straight_line_visits_every_mapped_point() {
        let geometry = SeriesGeometry::new(0.0, 10.0, 4);
        let path = line_path(&[0.0, 5.0, 10.0, 5.0], LineType::Line, LineSpacing::Line, &geometry, FRAME);
        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo(Point::new(12.5, 100.0)),
                PathCommand::LineTo(Point::new(37.5, 50.0)),
                PathCommand::LineTo(Point::new(62.5, 0.0)),
                PathCommand::LineTo(Point::new(87.5, 50.0)),
            ]
        );
    }

    #[test]
    fn bar_spacing_matches_line_spacing() {
        let geometry = SeriesGeometry::new(0.0, 10.0, 3);
        let values = [1.0, 9.0, 4.0];
        assert_eq!(
            line_path(&values, LineType::Curved, LineSpacing::Line, &geometry, FRAME),
            line_path(&values, LineType::Curved, LineSpacing::Bar, &geometry, FRAME),
        );
    }

    #[test]
    fn curves_have_horizontal_tangents() {
        let geometry = SeriesGeometry::new(0.0, 10.0, 2);
        let path = line_path(&[0.0, 10.0], LineType::Curved, LineSpacing::Line, &geometry, FRAME);
        assert_eq!(
            path.commands()[1],
            PathCommand::CubicTo {
                control1: Point::new(50.0, 100.0),
                control2: Point::new(50.0, 0.0),
                end: Point::new(75.0, 0.0),
            }
        );
    }

    #[test]
    fn stepped_moves_across_then_down() {
        let geometry = SeriesGeometry::new(0.0, 10.0, 2);
        let path = line_path(&[0.0, 10.0], LineType::Stepped, LineSpacing::Line, &geometry, FRAME);
        assert_eq!(
            &path.commands()[1..],
            &[
                PathCommand::LineTo(Point::new(75.0, 100.0)),
                PathCommand::LineTo(Point::new(75.0, 0.0)),
            ]
        );
    }

    #[test]
    fn empty_values_give_empty_path() {
        let geometry = SeriesGeometry::new(0.0, 1.0, 0);
        assert!(line_path(&[], LineType::Line, LineSpacing::Line, &geometry, FRAME).is_empty());
    }

    #[test]
    fn point_progress_falls_back_to_line() {
        let overlay = ExtraLine::with_point_count(Animation::none(), 2);
        assert_eq!(overlay.point_progress(5), overlay.line_progress());
    }
}
