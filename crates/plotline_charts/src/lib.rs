//! plotline_charts
//!
//! Overlays for line and bar charts: an extra line stacked on the chart, a
//! header with the title or live touch readout, and the legend both share.
//!
//! Everything here is pure geometry and view description. The host owns the
//! chart model, forwards mount/unmount and frame ticks, and rasterizes the
//! returned [`Fragment`] tree.

mod touch;

pub mod colour;
pub mod config;
pub mod drawable;
pub mod extra_line;
pub mod fragment;
pub mod geometry;
pub mod header_box;
pub mod legend;
pub mod model;
pub mod point;

pub use colour::{ColourStyle, PointColour};
pub use config::ChartConfig;
pub use drawable::{DrawPaint, Drawable};
pub use fragment::{FontWeight, Fragment, HAlign, TextRun, TextStyle};
pub use geometry::{map_point, nearest_index, SeriesGeometry};
pub use legend::{LegendEntry, LegendSet, SeriesKind};

/// Common imports for chart users.
pub mod prelude {
    pub use crate::colour::{ColourStyle, PointColour};
    pub use crate::config::ChartConfig;
    pub use crate::extra_line::{
        line_path, Baseline, ExtraLine, ExtraLineData, ExtraLineDataPoint, ExtraLineStyle,
        LineSpacing, LineType, TopLine,
    };
    pub use crate::fragment::{Fragment, HAlign, TextStyle};
    pub use crate::geometry::{map_point, SeriesGeometry};
    pub use crate::header_box::header_box;
    pub use crate::legend::{register_extra_line, LegendEntry, LegendSet, SeriesKind};
    pub use crate::model::{
        ChartData, ChartKind, ChartMetadata, ChartModel, ChartStyle, DataPoint, DisplayProfile,
        InfoBoxPlacement, LineBarChartData, TouchUnit,
    };
    pub use crate::point::{point_path, PointShape, PointStyle, PointType};

    pub use plotline_animation::{Animation, Easing, RevealKind};
    pub use plotline_paint::{Color, Point, Size, UnitPoint};
}
