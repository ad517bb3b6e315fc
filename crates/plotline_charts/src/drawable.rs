use plotline_animation::RevealKind;
use plotline_paint::{FillStyle, PaintContext, Path, StrokeStyle};

/// How a drawable's path is painted.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawPaint {
    Fill(FillStyle),
    Stroke {
        style: FillStyle,
        stroke: StrokeStyle,
    },
}

/// A styled path plus the reveal state it is drawn with.
#[derive(Clone, Debug, PartialEq)]
pub struct Drawable {
    pub path: Path,
    pub paint: DrawPaint,
    pub reveal: RevealKind,
    /// Reveal progress, 0.0 (hidden) to 1.0.
    pub progress: f32,
    /// Bottom edge that [`RevealKind::Scale`] grows from.
    pub anchor_y: f32,
    pub z_index: f32,
}

impl Drawable {
    pub fn new(path: Path, paint: DrawPaint) -> Self {
        Self {
            path,
            paint,
            reveal: RevealKind::Draw,
            progress: 1.0,
            anchor_y: 0.0,
            z_index: 0.0,
        }
    }

    pub fn with_reveal(mut self, reveal: RevealKind, progress: f32, anchor_y: f32) -> Self {
        self.reveal = reveal;
        self.progress = progress.clamp(0.0, 1.0);
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_z_index(mut self, z_index: f32) -> Self {
        self.z_index = z_index;
        self
    }

    /// The path as it should be drawn at the current progress.
    pub fn resolved_path(&self) -> Path {
        match self.reveal {
            RevealKind::Draw => self.path.trimmed(self.progress),
            RevealKind::Scale => self.path.scaled_y(self.progress, self.anchor_y),
        }
    }

    pub fn record(&self, ctx: &mut PaintContext) {
        let path = self.resolved_path();
        match &self.paint {
            DrawPaint::Fill(style) => ctx.fill_path(path, style.clone()),
            DrawPaint::Stroke { style, stroke } => ctx.stroke_path(path, style.clone(), stroke),
        }
    }
}
