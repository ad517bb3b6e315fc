//! Chart data capability surface.
//!
//! Overlays read the host chart through [`ChartData`] and, for charts that
//! can carry an extra line, [`LineBarChartData`]. [`ChartModel`] is the
//! concrete line/bar implementation.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use plotline_animation::Animation;
use plotline_paint::{Color, Point};

use crate::colour::{ColourStyle, PointColour};
use crate::extra_line::ExtraLineData;
use crate::fragment::{FontWeight, TextStyle};
use crate::geometry::{min_max, SeriesGeometry};
use crate::legend::{LegendEntry, LegendSet, SeriesKind};

/// Identity of a data point, series or legend entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    /// A process-unique id.
    pub fn next() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        ElementId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// One value of the host chart's data set.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    pub id: ElementId,
    pub value: f64,
    pub description: Option<String>,
    pub colour: Option<PointColour>,
}

impl DataPoint {
    pub fn new(value: f64) -> Self {
        Self {
            id: ElementId::next(),
            value,
            description: None,
            colour: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_colour(mut self, colour: PointColour) -> Self {
        self.colour = Some(colour);
        self
    }
}

/// Title and subtitle shown above the chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartMetadata {
    pub title: String,
    pub subtitle: String,
    pub title_style: TextStyle,
    pub subtitle_style: TextStyle,
}

impl Default for ChartMetadata {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            title_style: TextStyle::new(20.0).with_weight(FontWeight::Semibold),
            subtitle_style: TextStyle::new(15.0).with_color(Color::SECONDARY),
        }
    }
}

/// Where the touch readout is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfoBoxPlacement {
    /// A box following the touch inside the chart.
    #[default]
    Floating,
    /// A fixed box at the side of the chart.
    InfoBox,
    /// In place of the title block while touching.
    Header,
}

/// Constrained displays have no touch input and always show the title block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayProfile {
    #[default]
    Standard,
    Constrained,
}

/// Unit text attached to a touch readout value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchUnit {
    #[default]
    None,
    Prefix(String),
    Suffix(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub info_box_placement: InfoBoxPlacement,
    pub info_box_value_style: TextStyle,
    pub info_box_description_style: TextStyle,
    /// Drives every enter/exit reveal of the chart's overlays.
    pub global_animation: Animation,
    pub display_profile: DisplayProfile,
    pub touch_unit: TouchUnit,
    /// Decimal places of touch readout values.
    pub value_decimals: usize,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            info_box_placement: InfoBoxPlacement::Floating,
            info_box_value_style: TextStyle::new(28.0).with_weight(FontWeight::Bold),
            info_box_description_style: TextStyle::new(15.0).with_color(Color::SECONDARY),
            global_animation: Animation::ease_in_out(1000),
            display_profile: DisplayProfile::Standard,
            touch_unit: TouchUnit::None,
            value_decimals: 0,
        }
    }
}

/// A point located by a touch, in frame-local coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchPoint {
    pub id: ElementId,
    pub description: String,
    pub value: f64,
    pub position: Point,
}

/// Live touch state of a chart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InfoView {
    pub is_touch_current: bool,
    pub touch_location: Option<Point>,
    pub touch_overlay_info: Vec<TouchPoint>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
}

impl ChartKind {
    pub fn series_kind(&self) -> SeriesKind {
        match self {
            ChartKind::Line => SeriesKind::Line,
            ChartKind::Bar => SeriesKind::Bar,
        }
    }
}

/// Format `value` with `decimals` places and the unit's text.
pub fn format_value(value: f64, unit: &TouchUnit, decimals: usize) -> String {
    match unit {
        TouchUnit::None => format!("{value:.decimals$}"),
        TouchUnit::Prefix(u) => format!("{u} {value:.decimals$}"),
        TouchUnit::Suffix(u) => format!("{value:.decimals$} {u}"),
    }
}

/// What every overlay needs from a host chart.
pub trait ChartData {
    fn metadata(&self) -> &ChartMetadata;

    fn chart_style(&self) -> &ChartStyle;

    fn info_view(&self) -> &InfoView;

    fn legends(&self) -> &LegendSet;

    fn legends_mut(&mut self) -> &mut LegendSet;

    /// Number of points in the host's data set.
    fn point_count(&self) -> usize;

    /// Overlays are only drawn for more than two points.
    fn is_greater_than_two(&self) -> bool {
        self.point_count() > 2
    }

    fn info_description(&self, info: &TouchPoint) -> String {
        info.description.clone()
    }

    fn info_value_unit(&self, info: &TouchPoint) -> String {
        let style = self.chart_style();
        format_value(info.value, &style.touch_unit, style.value_decimals)
    }
}

/// Line and bar charts, which may carry one extra line.
pub trait LineBarChartData: ChartData {
    fn kind(&self) -> ChartKind;

    fn extra_line(&self) -> Option<&ExtraLineData>;

    fn set_extra_line(&mut self, data: ExtraLineData);
}

/// A line or bar chart's data set with its styling, legend and touch state.
#[derive(Clone, Debug)]
pub struct ChartModel {
    pub kind: ChartKind,
    pub metadata: ChartMetadata,
    pub chart_style: ChartStyle,
    pub info_view: InfoView,
    data_points: Vec<DataPoint>,
    legends: LegendSet,
    extra_line: Option<ExtraLineData>,
}

impl ChartModel {
    pub fn new(kind: ChartKind, data_points: Vec<DataPoint>) -> anyhow::Result<Self> {
        anyhow::ensure!(
            data_points.iter().all(|p| p.value.is_finite()),
            "ChartModel requires finite values"
        );
        Ok(Self {
            kind,
            metadata: ChartMetadata::default(),
            chart_style: ChartStyle::default(),
            info_view: InfoView::default(),
            data_points,
            legends: LegendSet::new(),
            extra_line: None,
        })
    }

    pub fn line(values: &[f64]) -> anyhow::Result<Self> {
        Self::new(ChartKind::Line, values.iter().copied().map(DataPoint::new).collect())
    }

    pub fn bar(values: &[f64]) -> anyhow::Result<Self> {
        Self::new(ChartKind::Bar, values.iter().copied().map(DataPoint::new).collect())
    }

    pub fn with_metadata(mut self, title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        self.metadata.title = title.into();
        self.metadata.subtitle = subtitle.into();
        self
    }

    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.chart_style = style;
        self
    }

    /// Register the legend entry of the main data set (priority 1).
    pub fn with_series_legend(mut self, title: impl Into<String>, colour: ColourStyle) -> Self {
        if let Some(colour) = colour.legend_swatch() {
            let entry = LegendEntry {
                id: ElementId::next(),
                title: title.into(),
                colour,
                stroke_style: Default::default(),
                priority: 1,
                kind: self.kind.series_kind(),
            };
            self.legends.register_if_absent(entry);
        }
        self
    }

    pub fn data_points(&self) -> &[DataPoint] {
        &self.data_points
    }

    /// Geometry of the main data set. Bars grow from zero, lines span
    /// their own min..max.
    pub fn geometry(&self) -> SeriesGeometry {
        let values: Vec<f64> = self.data_points.iter().map(|p| p.value).collect();
        let (min, max) = min_max(&values);
        match self.kind {
            ChartKind::Line => SeriesGeometry::new(min, max - min, values.len()),
            ChartKind::Bar => SeriesGeometry::new(0.0, max, values.len()),
        }
    }
}

impl ChartData for ChartModel {
    fn metadata(&self) -> &ChartMetadata {
        &self.metadata
    }

    fn chart_style(&self) -> &ChartStyle {
        &self.chart_style
    }

    fn info_view(&self) -> &InfoView {
        &self.info_view
    }

    fn legends(&self) -> &LegendSet {
        &self.legends
    }

    fn legends_mut(&mut self) -> &mut LegendSet {
        &mut self.legends
    }

    fn point_count(&self) -> usize {
        self.data_points.len()
    }
}

impl LineBarChartData for ChartModel {
    fn kind(&self) -> ChartKind {
        self.kind
    }

    fn extra_line(&self) -> Option<&ExtraLineData> {
        self.extra_line.as_ref()
    }

    fn set_extra_line(&mut self, data: ExtraLineData) {
        self.extra_line = Some(data);
    }
}
