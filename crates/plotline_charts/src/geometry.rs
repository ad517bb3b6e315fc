use plotline_paint::{Point, Size};

/// What the mapper needs to know about a series: where its values start,
/// how far they span and how many slots the frame is divided into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesGeometry {
    min_value: f64,
    range: f64,
    point_count: usize,
}

impl SeriesGeometry {
    /// A zero or non-finite `range` would divide by zero; it is replaced by a
    /// unit range so a flat series sits on the bottom edge.
    pub fn new(min_value: f64, range: f64, point_count: usize) -> Self {
        let range = if range.is_finite() && range != 0.0 {
            range
        } else {
            tracing::debug!(range, "degenerate value range, using 1.0");
            1.0
        };
        let min_value = if min_value.is_finite() { min_value } else { 0.0 };
        Self {
            min_value,
            range,
            point_count,
        }
    }

    /// Geometry spanning min..max of `values`.
    pub fn from_values(values: &[f64]) -> Self {
        let (min, max) = min_max(values);
        Self::new(min, max - min, values.len())
    }

    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    pub fn range(&self) -> f64 {
        self.range
    }

    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// Width of one point's slot.
    pub fn step(&self, frame: Size) -> f32 {
        frame.width / self.point_count.max(1) as f32
    }
}

/// Finite min/max of `values`, `(0, 0)` when there are none.
pub fn min_max(values: &[f64]) -> (f64, f64) {
    let (min, max) = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if min > max {
        (0.0, 0.0)
    } else {
        (min, max)
    }
}

/// Local position of the point at `index` inside `frame`.
///
/// The frame is split into `point_count` equal slots and the point is
/// centred in its slot. The y axis is inverted so larger values sit higher.
/// Values outside `min..min + range` land outside the frame; nothing is
/// clamped. `point_size` shifts the result to the top-leading corner of a
/// point of that size; pass 0 for the centre.
pub fn map_point(
    value: f64,
    index: usize,
    geometry: &SeriesGeometry,
    frame: Size,
    point_size: f32,
) -> Point {
    let step = geometry.step(frame) as f64;
    let scale = frame.height as f64 / geometry.range;
    let offset = point_size as f64 / 2.0;

    let x = index as f64 * step + step / 2.0 - offset;
    let y = (value - geometry.min_value) * -scale + frame.height as f64 - offset;
    Point::new(x as f32, y as f32)
}

/// Index of the slot under local `x`, clamped to the series.
pub fn nearest_index(x: f32, point_count: usize, frame: Size) -> Option<usize> {
    if point_count == 0 || frame.width <= 0.0 || !x.is_finite() {
        return None;
    }
    let step = frame.width / point_count as f32;
    let slot = (x / step).floor().max(0.0) as usize;
    Some(slot.min(point_count - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Size = Size::new(100.0, 100.0);

    #[test]
    fn maps_slot_centre_with_inverted_y() {
        let g = SeriesGeometry::new(0.0, 10.0, 4);
        let p = map_point(5.0, 1, &g, FRAME, 10.0);
        assert_eq!(p, Point::new(32.5, 45.0));

        let centre = map_point(5.0, 1, &g, FRAME, 0.0);
        assert_eq!(centre, Point::new(37.5, 50.0));
    }

    #[test]
    fn larger_values_sit_higher() {
        let g = SeriesGeometry::new(-5.0, 20.0, 3);
        let ys: Vec<f32> = [-5.0, 0.0, 7.5, 15.0]
            .iter()
            .map(|&v| map_point(v, 0, &g, FRAME, 0.0).y)
            .collect();
        assert!(ys.windows(2).all(|w| w[1] < w[0]));
        assert_eq!(ys[0], 100.0);
        assert_eq!(ys[3], 0.0);
    }

    #[test]
    fn out_of_range_values_are_not_clamped() {
        let g = SeriesGeometry::new(0.0, 10.0, 2);
        assert_eq!(map_point(20.0, 0, &g, FRAME, 0.0).y, -100.0);
        assert_eq!(map_point(-10.0, 0, &g, FRAME, 0.0).y, 200.0);
    }

    #[test]
    fn zero_range_is_guarded() {
        let g = SeriesGeometry::from_values(&[4.0, 4.0, 4.0]);
        assert_eq!(g.range(), 1.0);
        let p = map_point(4.0, 2, &g, FRAME, 0.0);
        assert!(p.x.is_finite() && p.y.is_finite());
        assert_eq!(p.y, 100.0);

        assert_eq!(SeriesGeometry::new(0.0, f64::NAN, 1).range(), 1.0);
    }

    #[test]
    fn min_max_skips_non_finite() {
        assert_eq!(min_max(&[3.0, f64::NAN, -1.0]), (-1.0, 3.0));
        assert_eq!(min_max(&[]), (0.0, 0.0));
    }

    #[test]
    fn nearest_index_inverts_slots() {
        assert_eq!(nearest_index(0.0, 4, FRAME), Some(0));
        assert_eq!(nearest_index(37.5, 4, FRAME), Some(1));
        assert_eq!(nearest_index(99.9, 4, FRAME), Some(3));
        assert_eq!(nearest_index(250.0, 4, FRAME), Some(3));
        assert_eq!(nearest_index(-3.0, 4, FRAME), Some(0));
        assert_eq!(nearest_index(10.0, 0, FRAME), None);
    }
}
