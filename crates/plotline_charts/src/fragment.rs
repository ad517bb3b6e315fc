//! View fragments handed back to the host layout.
//!
//! A fragment is a small retained tree: stacks, text runs, shapes, and the
//! host's own content (`C`) which is passed through untouched.

use serde::{Deserialize, Serialize};

use plotline_paint::{Color, PaintContext};

use crate::drawable::Drawable;

/// Horizontal alignment of a vertical stack's children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HAlign {
    #[default]
    Leading,
    Center,
    Trailing,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
}

/// Font and colour of a text run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub size: f32,
    pub weight: FontWeight,
    pub color: Color,
}

impl TextStyle {
    pub const fn new(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Regular,
            color: Color::PRIMARY,
        }
    }

    pub const fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(17.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub style: TextStyle,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Fragment<C> {
    /// The host's content, unchanged.
    Content(C),
    VStack {
        alignment: HAlign,
        children: Vec<Fragment<C>>,
    },
    /// Children drawn back to front.
    ZStack { children: Vec<Fragment<C>> },
    Text(TextRun),
    Shape(Drawable),
}

impl<C> Fragment<C> {
    pub fn text(text: impl Into<String>, style: TextStyle) -> Self {
        Fragment::Text(TextRun {
            text: text.into(),
            style,
        })
    }

    pub fn vstack(alignment: HAlign, children: Vec<Fragment<C>>) -> Self {
        Fragment::VStack {
            alignment,
            children,
        }
    }

    pub fn is_content(&self) -> bool {
        matches!(self, Fragment::Content(_))
    }

    /// First host content found depth-first.
    pub fn content(&self) -> Option<&C> {
        match self {
            Fragment::Content(c) => Some(c),
            Fragment::VStack { children, .. } | Fragment::ZStack { children } => {
                children.iter().find_map(|c| c.content())
            }
            Fragment::Text(_) | Fragment::Shape(_) => None,
        }
    }

    /// Text runs in depth-first order.
    pub fn texts(&self) -> Vec<&TextRun> {
        let mut out = Vec::new();
        self.walk(&mut |f| {
            if let Fragment::Text(run) = f {
                out.push(run);
            }
        });
        out
    }

    /// Shapes in depth-first order.
    pub fn drawables(&self) -> Vec<&Drawable> {
        let mut out = Vec::new();
        self.walk(&mut |f| {
            if let Fragment::Shape(d) = f {
                out.push(d);
            }
        });
        out
    }

    /// Record every shape, honouring z-index within each depth stack.
    pub fn record(&self, ctx: &mut PaintContext) {
        match self {
            Fragment::Shape(d) => d.record(ctx),
            Fragment::VStack { children, .. } => {
                for child in children {
                    child.record(ctx);
                }
            }
            Fragment::ZStack { children } => {
                let mut ordered: Vec<&Fragment<C>> = children.iter().collect();
                ordered.sort_by(|a, b| a.z_index().total_cmp(&b.z_index()));
                for child in ordered {
                    child.record(ctx);
                }
            }
            Fragment::Content(_) | Fragment::Text(_) => {}
        }
    }

    fn z_index(&self) -> f32 {
        match self {
            Fragment::Shape(d) => d.z_index,
            _ => 0.0,
        }
    }

    fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Fragment<C>)) {
        visit(self);
        if let Fragment::VStack { children, .. } | Fragment::ZStack { children } = self {
            for child in children {
                child.walk(visit);
            }
        }
    }
}
