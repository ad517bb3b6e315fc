//! Path building and representation

use smallvec::SmallVec;

use crate::primitives::{CornerRadius, Rect};

/// Control-point distance for approximating a quarter ellipse with a cubic.
const KAPPA: f32 = 0.552_284_8;

/// Line segments used per curve when flattening.
const CURVE_STEPS: usize = 16;

/// A 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn lerp(self, other: Point, t: f32) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

/// Path command
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadTo {
        control: Point,
        end: Point,
    },
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    Close,
}

impl PathCommand {
    fn map(self, f: impl Fn(Point) -> Point) -> Self {
        match self {
            PathCommand::MoveTo(p) => PathCommand::MoveTo(f(p)),
            PathCommand::LineTo(p) => PathCommand::LineTo(f(p)),
            PathCommand::QuadTo { control, end } => PathCommand::QuadTo {
                control: f(control),
                end: f(end),
            },
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => PathCommand::CubicTo {
                control1: f(control1),
                control2: f(control2),
                end: f(end),
            },
            PathCommand::Close => PathCommand::Close,
        }
    }
}

/// A 2D path composed of commands
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: SmallVec<[PathCommand; 16]>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Bounding box of every on-curve and control point.
    pub fn bounds(&self) -> Option<Rect> {
        let mut points = self.commands.iter().flat_map(|c| match *c {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => SmallVec::<[Point; 3]>::from_slice(&[p]),
            PathCommand::QuadTo { control, end } => SmallVec::from_slice(&[control, end]),
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => SmallVec::from_slice(&[control1, control2, end]),
            PathCommand::Close => SmallVec::new(),
        });
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        Some(Rect::from_points(min, max))
    }

    /// Flatten into polylines, one per sub-path. Curves are sampled uniformly
    /// and a closed sub-path ends on its starting point.
    pub fn flatten(&self) -> Vec<Vec<Point>> {
        let mut out: Vec<Vec<Point>> = Vec::new();
        let mut current: Vec<Point> = Vec::new();
        let mut cursor = Point::ZERO;

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => {
                    if current.len() > 1 {
                        out.push(std::mem::take(&mut current));
                    }
                    current.clear();
                    current.push(p);
                    cursor = p;
                }
                PathCommand::LineTo(p) => {
                    if current.is_empty() {
                        current.push(cursor);
                    }
                    current.push(p);
                    cursor = p;
                }
                PathCommand::QuadTo { control, end } => {
                    if current.is_empty() {
                        current.push(cursor);
                    }
                    let start = cursor;
                    for step in 1..=CURVE_STEPS {
                        let t = step as f32 / CURVE_STEPS as f32;
                        let a = start.lerp(control, t);
                        let b = control.lerp(end, t);
                        current.push(a.lerp(b, t));
                    }
                    cursor = end;
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                } => {
                    if current.is_empty() {
                        current.push(cursor);
                    }
                    let start = cursor;
                    for step in 1..=CURVE_STEPS {
                        let t = step as f32 / CURVE_STEPS as f32;
                        current.push(cubic_point(start, control1, control2, end, t));
                    }
                    cursor = end;
                }
                PathCommand::Close => {
                    if let Some(&first) = current.first() {
                        if current.last() != Some(&first) {
                            current.push(first);
                        }
                        cursor = first;
                    }
                    if current.len() > 1 {
                        out.push(std::mem::take(&mut current));
                    }
                    current.clear();
                }
            }
        }

        if current.len() > 1 {
            out.push(current);
        }
        out
    }

    /// Total length of the flattened path.
    pub fn length(&self) -> f32 {
        self.flatten().iter().map(|line| polyline_length(line)).sum()
    }

    /// The leading `fraction` (0.0 to 1.0) of the path by length.
    ///
    /// Partial results are polylines; `fraction >= 1` returns the path as is.
    pub fn trimmed(&self, fraction: f32) -> Path {
        if fraction >= 1.0 {
            return self.clone();
        }
        if !(fraction > 0.0) {
            return Path::new();
        }

        let lines = self.flatten();
        let mut remaining = lines.iter().map(|l| polyline_length(l)).sum::<f32>() * fraction;
        let mut builder = PathBuilder::new();

        'lines: for line in &lines {
            let Some((&first, rest)) = line.split_first() else {
                continue;
            };
            builder = builder.move_to(first.x, first.y);
            let mut prev = first;
            for &p in rest {
                let seg = prev.distance(p);
                if seg >= remaining {
                    let t = if seg > 0.0 { remaining / seg } else { 0.0 };
                    let end = prev.lerp(p, t);
                    builder = builder.line_to(end.x, end.y);
                    break 'lines;
                }
                builder = builder.line_to(p.x, p.y);
                remaining -= seg;
                prev = p;
            }
        }
        builder.build()
    }

    /// Scale every y coordinate by `factor` about the horizontal line `anchor_y`.
    pub fn scaled_y(&self, factor: f32, anchor_y: f32) -> Path {
        self.map_points(|p| Point::new(p.x, anchor_y + (p.y - anchor_y) * factor))
    }

    fn map_points(&self, f: impl Fn(Point) -> Point + Copy) -> Path {
        Path {
            commands: self.commands.iter().map(|c| c.map(f)).collect(),
        }
    }
}

fn cubic_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f32) -> Point {
    let u = 1.0 - t;
    let a = u * u * u;
    let b = 3.0 * u * u * t;
    let c = 3.0 * u * t * t;
    let d = t * t * t;
    Point::new(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}

fn polyline_length(points: &[Point]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Builder for constructing paths
pub struct PathBuilder {
    path: Path,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self { path: Path::new() }
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.path.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.path.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    pub fn quad_to(mut self, cx: f32, cy: f32, x: f32, y: f32) -> Self {
        self.path.commands.push(PathCommand::QuadTo {
            control: Point::new(cx, cy),
            end: Point::new(x, y),
        });
        self
    }

    pub fn cubic_to(mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) -> Self {
        self.path.commands.push(PathCommand::CubicTo {
            control1: Point::new(c1x, c1y),
            control2: Point::new(c2x, c2y),
            end: Point::new(x, y),
        });
        self
    }

    pub fn close(mut self) -> Self {
        self.path.commands.push(PathCommand::Close);
        self
    }

    /// Closed rectangle sub-path, clockwise from the top-leading corner.
    pub fn add_rect(self, rect: Rect) -> Self {
        self.move_to(rect.x, rect.y)
            .line_to(rect.max_x(), rect.y)
            .line_to(rect.max_x(), rect.max_y())
            .line_to(rect.x, rect.max_y())
            .close()
    }

    /// Closed ellipse inscribed in `rect`, four cubic quarter arcs.
    pub fn add_ellipse(self, rect: Rect) -> Self {
        let c = rect.center();
        let rx = rect.width / 2.0;
        let ry = rect.height / 2.0;
        let kx = rx * KAPPA;
        let ky = ry * KAPPA;
        self.move_to(c.x + rx, c.y)
            .cubic_to(c.x + rx, c.y + ky, c.x + kx, c.y + ry, c.x, c.y + ry)
            .cubic_to(c.x - kx, c.y + ry, c.x - rx, c.y + ky, c.x - rx, c.y)
            .cubic_to(c.x - rx, c.y - ky, c.x - kx, c.y - ry, c.x, c.y - ry)
            .cubic_to(c.x + kx, c.y - ry, c.x + rx, c.y - ky, c.x + rx, c.y)
            .close()
    }

    /// Closed rounded rectangle; radii are clamped to half the rect size.
    pub fn add_rounded_rect(self, rect: Rect, radius: CornerRadius) -> Self {
        let r = radius.clamped_to(rect);
        if r.x <= 0.0 || r.y <= 0.0 {
            return self.add_rect(rect);
        }
        let (x0, y0, x1, y1) = (rect.x, rect.y, rect.max_x(), rect.max_y());
        let kx = r.x * KAPPA;
        let ky = r.y * KAPPA;
        self.move_to(x0 + r.x, y0)
            .line_to(x1 - r.x, y0)
            .cubic_to(x1 - r.x + kx, y0, x1, y0 + r.y - ky, x1, y0 + r.y)
            .line_to(x1, y1 - r.y)
            .cubic_to(x1, y1 - r.y + ky, x1 - r.x + kx, y1, x1 - r.x, y1)
            .line_to(x0 + r.x, y1)
            .cubic_to(x0 + r.x - kx, y1, x0, y1 - r.y + ky, x0, y1 - r.y)
            .line_to(x0, y0 + r.y)
            .cubic_to(x0, y0 + r.y - ky, x0 + r.x - kx, y0, x0 + r.x, y0)
            .close()
    }

    pub fn build(self) -> Path {
        self.path
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}
