//! Paint context - records fills and strokes for a host surface

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::gradient::LinearGradient;
use crate::path::Path;

/// Fill or stroke source
#[derive(Clone, Debug, PartialEq)]
pub enum FillStyle {
    Color(Color),
    Gradient(LinearGradient),
}

impl From<Color> for FillStyle {
    fn from(color: Color) -> Self {
        FillStyle::Color(color)
    }
}

impl From<LinearGradient> for FillStyle {
    fn from(gradient: LinearGradient) -> Self {
        FillStyle::Gradient(gradient)
    }
}

/// Stroke geometry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeStyle {
    pub line_width: f32,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    pub miter_limit: f32,
    pub dash: Vec<f32>,
    pub dash_phase: f32,
}

impl StrokeStyle {
    pub fn new(line_width: f32) -> Self {
        Self {
            line_width,
            ..Self::default()
        }
    }

    pub fn with_dash(mut self, dash: Vec<f32>) -> Self {
        self.dash = dash;
        self
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
            miter_limit: 10.0,
            dash: Vec::new(),
            dash_phase: 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// A paint command for the renderer
#[derive(Clone, Debug, PartialEq)]
pub enum PaintCommand {
    FillPath {
        path: Path,
        style: FillStyle,
    },
    StrokePath {
        path: Path,
        style: FillStyle,
        stroke: StrokeStyle,
    },
}

/// Records paint commands in draw order.
#[derive(Clone, Debug, Default)]
pub struct PaintContext {
    commands: Vec<PaintCommand>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty paths are skipped.
    pub fn fill_path(&mut self, path: Path, style: impl Into<FillStyle>) {
        if path.is_empty() {
            return;
        }
        self.commands.push(PaintCommand::FillPath {
            path,
            style: style.into(),
        });
    }

    /// Empty paths are skipped.
    pub fn stroke_path(&mut self, path: Path, style: impl Into<FillStyle>, stroke: &StrokeStyle) {
        if path.is_empty() {
            return;
        }
        self.commands.push(PaintCommand::StrokePath {
            path,
            style: style.into(),
            stroke: stroke.clone(),
        });
    }

    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<PaintCommand> {
        self.commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathBuilder;

    #[test]
    fn empty_paths_are_not_recorded() {
        let mut ctx = PaintContext::new();
        ctx.fill_path(Path::new(), Color::RED);
        ctx.stroke_path(Path::new(), Color::RED, &StrokeStyle::new(2.0));
        assert!(ctx.commands().is_empty());

        let line = PathBuilder::new().move_to(0.0, 0.0).line_to(1.0, 1.0).build();
        ctx.stroke_path(line, Color::RED, &StrokeStyle::new(2.0));
        assert!(matches!(
            ctx.into_commands().as_slice(),
            [PaintCommand::StrokePath { stroke, .. }] if stroke.line_width == 2.0
        ));
    }

    #[test]
    fn stroke_style_defaults_fill_missing_keys() {
        let s: StrokeStyle = toml::from_str("line_width = 3.0\nline_cap = \"round\"").unwrap();
        assert_eq!(s.line_width, 3.0);
        assert_eq!(s.line_cap, LineCap::Round);
        assert_eq!(s.line_join, LineJoin::Miter);
    }
}
