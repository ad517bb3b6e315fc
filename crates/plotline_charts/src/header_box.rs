//! Title block and touch readout shown above a chart.

use crate::fragment::{Fragment, HAlign};
use crate::model::{ChartData, DisplayProfile, InfoBoxPlacement};

/// Stack the chart's header above `content`.
///
/// Charts with two or fewer points get their content back unchanged. With
/// [`InfoBoxPlacement::Header`] the touch readout replaces the title block
/// while a touch is current; constrained displays always show the title.
pub fn header_box<T, C>(chart: &T, content: C) -> Fragment<C>
where
    T: ChartData + ?Sized,
{
    if !chart.is_greater_than_two() {
        return Fragment::Content(content);
    }

    let style = chart.chart_style();
    let header = match (style.display_profile, style.info_box_placement) {
        (DisplayProfile::Constrained, _) => title_box(chart),
        (_, InfoBoxPlacement::Floating | InfoBoxPlacement::InfoBox) => title_box(chart),
        (_, InfoBoxPlacement::Header) if chart.info_view().is_touch_current => touch_overlay(chart),
        (_, InfoBoxPlacement::Header) => title_box(chart),
    };
    Fragment::vstack(HAlign::Leading, vec![header, Fragment::Content(content)])
}

pub fn title_box<T, C>(chart: &T) -> Fragment<C>
where
    T: ChartData + ?Sized,
{
    let metadata = chart.metadata();
    Fragment::vstack(
        HAlign::Leading,
        vec![
            Fragment::text(metadata.title.clone(), metadata.title_style),
            Fragment::text(metadata.subtitle.clone(), metadata.subtitle_style),
        ],
    )
}

/// Description and value of every touched point. Without a touch it holds
/// two empty runs so the header keeps its height.
pub fn touch_overlay<T, C>(chart: &T) -> Fragment<C>
where
    T: ChartData + ?Sized,
{
    let style = chart.chart_style();
    let info = chart.info_view();

    let children = if info.is_touch_current {
        info.touch_overlay_info
            .iter()
            .flat_map(|point| {
                [
                    Fragment::text(chart.info_description(point), style.info_box_description_style),
                    Fragment::text(chart.info_value_unit(point), style.info_box_value_style),
                ]
            })
            .collect()
    } else {
        vec![
            Fragment::text("", style.info_box_value_style),
            Fragment::text("", style.info_box_description_style),
        ]
    };
    Fragment::vstack(touch_overlay_alignment(style.info_box_placement), children)
}

pub fn touch_overlay_alignment(placement: InfoBoxPlacement) -> HAlign {
    match placement {
        InfoBoxPlacement::Header => HAlign::Leading,
        InfoBoxPlacement::Floating | InfoBoxPlacement::InfoBox => HAlign::Trailing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChartModel;

    fn chart(values: &[f64], placement: InfoBoxPlacement) -> ChartModel {
        let mut model = ChartModel::line(values).unwrap().with_metadata("Steps", "Daily");
        model.chart_style.info_box_placement = placement;
        model
    }

    #[test]
    fn alignment_by_placement() {
        assert_eq!(touch_overlay_alignment(InfoBoxPlacement::Header), HAlign::Leading);
        assert_eq!(touch_overlay_alignment(InfoBoxPlacement::Floating), HAlign::Trailing);
        assert_eq!(touch_overlay_alignment(InfoBoxPlacement::InfoBox), HAlign::Trailing);
    }

    #[test]
    fn idle_overlay_keeps_two_empty_runs() {
        let model = chart(&[1.0, 2.0, 3.0], InfoBoxPlacement::Floating);
        let overlay: Fragment<()> = touch_overlay(&model);
        let texts = overlay.texts();
        assert_eq!(texts.len(), 2);
        assert!(texts.iter().all(|t| t.text.is_empty()));
        assert_eq!(texts[0].style, model.chart_style.info_box_value_style);
        assert_eq!(texts[1].style, model.chart_style.info_box_description_style);
        assert!(matches!(overlay, Fragment::VStack { alignment: HAlign::Trailing, .. }));
    }

    #[test]
    fn title_box_runs() {
        let model = chart(&[1.0, 2.0, 3.0], InfoBoxPlacement::Header);
        let title: Fragment<()> = title_box(&model);
        let texts: Vec<&str> = title.texts().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Steps", "Daily"]);
    }
}
