//! Nearest-point lookup for touch and hover.

use plotline_paint::{Point, Size};

use crate::geometry::{map_point, nearest_index};
use crate::model::{ChartModel, LineBarChartData, TouchPoint};

impl ChartModel {
    /// Locate the data point under `location` (and the extra line's point,
    /// when one is attached) and make it the current touch readout.
    ///
    /// Only the x coordinate selects a point. A location that selects
    /// nothing leaves the touch inactive.
    pub fn touch_at(&mut self, location: Point, frame: Size) {
        let mut info = Vec::with_capacity(2);

        let geometry = self.geometry();
        if let Some(index) = nearest_index(location.x, self.data_points().len(), frame) {
            let point = &self.data_points()[index];
            info.push(TouchPoint {
                id: point.id,
                description: point.description.clone().unwrap_or_default(),
                value: point.value,
                position: map_point(point.value, index, &geometry, frame, 0.0),
            });
        }

        if let Some(extra) = self.extra_line() {
            let geometry = extra.geometry();
            if let Some(index) = nearest_index(location.x, extra.data_points.len(), frame) {
                let point = &extra.data_points[index];
                info.push(TouchPoint {
                    id: extra.id,
                    description: point
                        .description
                        .clone()
                        .unwrap_or_else(|| extra.legend_title.clone()),
                    value: point.value,
                    position: map_point(point.value, index, &geometry, frame, 0.0),
                });
            }
        }

        tracing::trace!(x = location.x, located = info.len(), "touch");
        self.info_view.is_touch_current = !info.is_empty();
        self.info_view.touch_location = Some(location);
        self.info_view.touch_overlay_info = info;
    }

    pub fn touch_ended(&mut self) {
        self.info_view.is_touch_current = false;
        self.info_view.touch_location = None;
        self.info_view.touch_overlay_info.clear();
    }
}
