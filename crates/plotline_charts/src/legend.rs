use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use plotline_paint::StrokeStyle;

use crate::colour::ColourStyle;
use crate::extra_line::ExtraLineData;
use crate::model::ElementId;

/// Draw-order priority of an extra line's legend entry.
pub const EXTRA_LINE_PRIORITY: i32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    Line,
    Bar,
    Point,
}

/// One row of a chart legend.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub id: ElementId,
    pub title: String,
    pub colour: ColourStyle,
    pub stroke_style: StrokeStyle,
    /// Lower priorities are listed first.
    pub priority: i32,
    pub kind: SeriesKind,
}

/// Structural identity of an entry; ids and stroke styles do not count.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct LegendKey {
    title: String,
    colour: Vec<u32>,
    priority: i32,
    kind: SeriesKind,
}

impl LegendKey {
    fn new(title: &str, colour: &ColourStyle, priority: i32, kind: SeriesKind) -> Self {
        Self {
            title: title.to_owned(),
            colour: colour.key_bits(),
            priority,
            kind,
        }
    }

    fn of(entry: &LegendEntry) -> Self {
        Self::new(&entry.title, &entry.colour, entry.priority, entry.kind)
    }
}

/// The legend shared by every series of a chart. Append-only; an entry whose
/// (title, colour, priority, kind) is already present is not added again.
#[derive(Clone, Debug, Default)]
pub struct LegendSet {
    entries: Vec<LegendEntry>,
    keys: FxHashSet<LegendKey>,
}

impl LegendSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `entry` unless a structural duplicate exists. Returns whether
    /// it was added.
    pub fn register_if_absent(&mut self, entry: LegendEntry) -> bool {
        if !self.keys.insert(LegendKey::of(&entry)) {
            tracing::trace!(title = %entry.title, "legend entry already registered");
            return false;
        }
        tracing::debug!(title = %entry.title, priority = entry.priority, kind = ?entry.kind, "legend entry added");
        self.entries.push(entry);
        true
    }

    pub fn contains(&self, title: &str, colour: &ColourStyle, priority: i32, kind: SeriesKind) -> bool {
        self.keys
            .contains(&LegendKey::new(title, colour, priority, kind))
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    /// Entries sorted by priority, insertion order breaking ties.
    pub fn ordered(&self) -> Vec<&LegendEntry> {
        let mut out: Vec<&LegendEntry> = self.entries.iter().collect();
        out.sort_by_key(|e| e.priority);
        out
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Register the legend entry for an overlaid extra line. Gradients are
/// listed with leading-to-trailing anchors; a gradient with no colours or
/// stops registers nothing.
pub fn register_extra_line(legends: &mut LegendSet, data: &ExtraLineData) -> bool {
    let Some(colour) = data.style.line_colour.legend_swatch() else {
        tracing::debug!(title = %data.legend_title, "extra line has no legend colour");
        return false;
    };
    legends.register_if_absent(LegendEntry {
        id: data.id,
        title: data.legend_title.clone(),
        colour,
        stroke_style: data.style.stroke_style.clone(),
        priority: EXTRA_LINE_PRIORITY,
        kind: SeriesKind::Line,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotline_paint::{Color, GradientStop, UnitPoint};

    use crate::extra_line::{ExtraLineDataPoint, ExtraLineStyle};

    fn entry(title: &str, colour: ColourStyle, priority: i32) -> LegendEntry {
        LegendEntry {
            id: ElementId::next(),
            title: title.to_string(),
            colour,
            stroke_style: StrokeStyle::default(),
            priority,
            kind: SeriesKind::Line,
        }
    }

    #[test]
    fn duplicate_keys_are_ignored() {
        let mut legends = LegendSet::new();
        assert!(legends.register_if_absent(entry("Avg", Color::RED.into(), 3)));
        assert!(!legends.register_if_absent(entry("Avg", Color::RED.into(), 3)));
        assert_eq!(legends.len(), 1);

        assert!(legends.register_if_absent(entry("Avg", Color::BLUE.into(), 3)));
        assert!(legends.register_if_absent(entry("Avg", Color::RED.into(), 1)));
        let mut bar = entry("Avg", Color::RED.into(), 3);
        bar.kind = SeriesKind::Bar;
        assert!(legends.register_if_absent(bar));
        assert_eq!(legends.len(), 4);
    }

    #[test]
    fn stroke_style_is_not_part_of_the_key() {
        let mut legends = LegendSet::new();
        legends.register_if_absent(entry("Avg", Color::RED.into(), 3));
        let mut dashed = entry("Avg", Color::RED.into(), 3);
        dashed.stroke_style = StrokeStyle::new(2.0).with_dash(vec![4.0, 2.0]);
        assert!(!legends.register_if_absent(dashed));
    }

    #[test]
    fn ordered_sorts_by_priority_stably() {
        let mut legends = LegendSet::new();
        legends.register_if_absent(entry("c", Color::RED.into(), 3));
        legends.register_if_absent(entry("a", Color::RED.into(), 1));
        legends.register_if_absent(entry("b", Color::BLUE.into(), 3));
        let titles: Vec<&str> = legends.ordered().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c", "b"]);
    }

    #[test]
    fn extra_line_gradient_registers_with_normalised_anchors() {
        let stops = vec![GradientStop::new(Color::RED, 0.0), GradientStop::new(Color::BLUE, 1.0)];
        let style = ExtraLineStyle {
            line_colour: ColourStyle::gradient_stops(stops.clone(), UnitPoint::TOP, UnitPoint::BOTTOM),
            ..ExtraLineStyle::default()
        };
        let data = ExtraLineData::new(
            "Target",
            vec![ExtraLineDataPoint::new(1.0), ExtraLineDataPoint::new(2.0)],
            style,
        )
        .unwrap();

        let mut legends = LegendSet::new();
        assert!(register_extra_line(&mut legends, &data));
        assert!(!register_extra_line(&mut legends, &data));

        let swatch = ColourStyle::gradient_stops(stops, UnitPoint::LEADING, UnitPoint::TRAILING);
        assert!(legends.contains("Target", &swatch, EXTRA_LINE_PRIORITY, SeriesKind::Line));
        assert_eq!(legends.entries()[0].colour, swatch);
        assert_eq!(legends.entries()[0].id, data.id);
    }
}
