use serde::{Deserialize, Serialize};

use plotline_paint::{Color, FillStyle, GradientStop, LinearGradient, Size, UnitPoint};

/// Colour specification for a series: a solid colour or a linear gradient
/// built from a colour list or a stop list.
///
/// Gradient anchors are optional; a gradient without both anchors cannot be
/// drawn and the series is skipped for that pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ColourStyle {
    Colour {
        colour: Color,
    },
    GradientColours {
        colours: Vec<Color>,
        #[serde(default)]
        start: Option<UnitPoint>,
        #[serde(default)]
        end: Option<UnitPoint>,
    },
    GradientStops {
        stops: Vec<GradientStop>,
        #[serde(default)]
        start: Option<UnitPoint>,
        #[serde(default)]
        end: Option<UnitPoint>,
    },
}

impl ColourStyle {
    pub fn solid(colour: Color) -> Self {
        ColourStyle::Colour { colour }
    }

    pub fn gradient_colours(colours: Vec<Color>, start: UnitPoint, end: UnitPoint) -> Self {
        ColourStyle::GradientColours {
            colours,
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn gradient_stops(stops: Vec<GradientStop>, start: UnitPoint, end: UnitPoint) -> Self {
        ColourStyle::GradientStops {
            stops,
            start: Some(start),
            end: Some(end),
        }
    }

    /// Paint source for a frame of `size`, or `None` when a gradient is
    /// missing its colours, its stops or either anchor.
    pub fn fill_style(&self, size: Size) -> Option<FillStyle> {
        match self {
            ColourStyle::Colour { colour } => Some(FillStyle::Color(*colour)),
            ColourStyle::GradientColours {
                colours,
                start: Some(start),
                end: Some(end),
            } if !colours.is_empty() => Some(FillStyle::Gradient(LinearGradient::from_colors(
                colours,
                start.resolve(size),
                end.resolve(size),
            ))),
            ColourStyle::GradientStops {
                stops,
                start: Some(start),
                end: Some(end),
            } if !stops.is_empty() => Some(FillStyle::Gradient(LinearGradient::from_stops(
                stops,
                start.resolve(size),
                end.resolve(size),
            ))),
            _ => None,
        }
    }

    /// The swatch shown in a legend. Gradients always run leading to
    /// trailing there, whatever anchors the series is drawn with.
    pub fn legend_swatch(&self) -> Option<ColourStyle> {
        match self {
            ColourStyle::Colour { colour } => Some(ColourStyle::solid(*colour)),
            ColourStyle::GradientColours { colours, .. } if !colours.is_empty() => Some(
                ColourStyle::gradient_colours(colours.clone(), UnitPoint::LEADING, UnitPoint::TRAILING),
            ),
            ColourStyle::GradientStops { stops, .. } if !stops.is_empty() => Some(
                ColourStyle::gradient_stops(stops.clone(), UnitPoint::LEADING, UnitPoint::TRAILING),
            ),
            _ => None,
        }
    }

    /// Bit pattern of the whole specification, usable as a hash key.
    pub fn key_bits(&self) -> Vec<u32> {
        fn anchors(bits: &mut Vec<u32>, start: &Option<UnitPoint>, end: &Option<UnitPoint>) {
            for anchor in [start, end] {
                match anchor {
                    Some(p) => {
                        bits.push(1);
                        bits.extend(p.to_bits());
                    }
                    None => bits.push(0),
                }
            }
        }

        let mut bits = Vec::new();
        match self {
            ColourStyle::Colour { colour } => {
                bits.push(0);
                bits.extend(colour.to_bits());
            }
            ColourStyle::GradientColours { colours, start, end } => {
                bits.extend([1, colours.len() as u32]);
                for c in colours {
                    bits.extend(c.to_bits());
                }
                anchors(&mut bits, start, end);
            }
            ColourStyle::GradientStops { stops, start, end } => {
                bits.extend([2, stops.len() as u32]);
                for s in stops {
                    bits.extend(s.color.to_bits());
                    bits.push(s.offset.to_bits());
                }
                anchors(&mut bits, start, end);
            }
        }
        bits
    }
}

impl Default for ColourStyle {
    fn default() -> Self {
        ColourStyle::solid(Color::rgb(1.0, 0.23, 0.19))
    }
}

impl From<Color> for ColourStyle {
    fn from(colour: Color) -> Self {
        ColourStyle::solid(colour)
    }
}

/// Per-point colour override
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointColour {
    pub border: Color,
    pub fill: Color,
}

impl PointColour {
    pub const fn new(border: Color, fill: Color) -> Self {
        Self { border, fill }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotline_paint::Point;

    const SIZE: Size = Size::new(200.0, 100.0);

    #[test]
    fn solid_always_resolves() {
        assert_eq!(
            ColourStyle::solid(Color::RED).fill_style(SIZE),
            Some(FillStyle::Color(Color::RED))
        );
    }

    #[test]
    fn gradient_anchors_resolve_against_frame() {
        let style = ColourStyle::gradient_colours(
            vec![Color::RED, Color::BLUE],
            UnitPoint::TOP,
            UnitPoint::BOTTOM,
        );
        let Some(FillStyle::Gradient(g)) = style.fill_style(SIZE) else {
            panic!("expected a gradient");
        };
        assert_eq!(g.start, Point::new(100.0, 0.0));
        assert_eq!(g.end, Point::new(100.0, 100.0));
        assert_eq!(g.stops.len(), 2);
    }

    #[test]
    fn gradient_without_anchor_does_not_resolve() {
        let style = ColourStyle::GradientStops {
            stops: vec![GradientStop::new(Color::RED, 0.0)],
            start: Some(UnitPoint::LEADING),
            end: None,
        };
        assert_eq!(style.fill_style(SIZE), None);

        let empty = ColourStyle::gradient_colours(Vec::new(), UnitPoint::LEADING, UnitPoint::TRAILING);
        assert_eq!(empty.fill_style(SIZE), None);
    }

    #[test]
    fn legend_swatch_normalises_anchors() {
        let stops = vec![GradientStop::new(Color::RED, 0.0), GradientStop::new(Color::BLUE, 1.0)];
        let style = ColourStyle::gradient_stops(stops.clone(), UnitPoint::TOP, UnitPoint::BOTTOM);
        assert_eq!(
            style.legend_swatch(),
            Some(ColourStyle::gradient_stops(stops, UnitPoint::LEADING, UnitPoint::TRAILING))
        );

        let no_anchors = ColourStyle::GradientColours {
            colours: vec![Color::GREEN],
            start: None,
            end: None,
        };
        assert_eq!(
            no_anchors.legend_swatch(),
            Some(ColourStyle::gradient_colours(
                vec![Color::GREEN],
                UnitPoint::LEADING,
                UnitPoint::TRAILING
            ))
        );
    }

    #[test]
    fn deserializes_tagged_specs() {
        let style: ColourStyle = toml::from_str(
            "type = \"gradient_colours\"\ncolours = [\"#ff0000\", \"#0000ff\"]\nstart = { x = 0.0, y = 0.5 }",
        )
        .unwrap();
        assert!(matches!(
            style,
            ColourStyle::GradientColours { ref colours, start: Some(_), end: None } if colours.len() == 2
        ));
    }
}
