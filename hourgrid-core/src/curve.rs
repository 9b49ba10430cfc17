use crate::format::format_coord;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Smoothing factor applied to the Catmull-Rom tangent estimate.
pub const DEFAULT_SMOOTHING: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PathSegment {
    MoveTo(Point),
    CurveTo { cp1: Point, cp2: Point, end: Point },
}

impl PathSegment {
    /// The on-curve point this segment ends at.
    pub fn anchor(&self) -> Point {
        match self {
            PathSegment::MoveTo(point) => *point,
            PathSegment::CurveTo { end, .. } => *end,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Curve {
    pub segments: Vec<PathSegment>,
}

impl Curve {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn anchors(&self) -> Vec<Point> {
        self.segments.iter().map(PathSegment::anchor).collect()
    }

    /// SVG path data, e.g. `M 0 10 C 1 9, 2 8, 3 7`.
    pub fn to_svg_path(&self) -> String {
        let mut parts = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match segment {
                PathSegment::MoveTo(p) => {
                    parts.push(format!("M {} {}", format_coord(p.x), format_coord(p.y)));
                }
                PathSegment::CurveTo { cp1, cp2, end } => {
                    parts.push(format!(
                        "C {} {}, {} {}, {} {}",
                        format_coord(cp1.x),
                        format_coord(cp1.y),
                        format_coord(cp2.x),
                        format_coord(cp2.y),
                        format_coord(end.x),
                        format_coord(end.y)
                    ));
                }
            }
        }
        parts.join(" ")
    }
}

/// Builds a smooth path through every point in `points`.
///
/// Each span `p[i] -> p[i+1]` becomes a cubic whose control points follow
/// the Catmull-Rom tangents scaled by `smoothing / 6`. Neighbours past
/// either end are clamped to the end point itself, so the curve never
/// overshoots the first or last sample.
pub fn build_path(points: &[Point], smoothing: f64) -> Curve {
    let Some(first) = points.first() else {
        return Curve::default();
    };
    let last_idx = points.len() - 1;
    let at = |idx: isize| -> Point { points[idx.clamp(0, last_idx as isize) as usize] };
    let k = smoothing / 6.0;

    let mut segments = Vec::with_capacity(points.len());
    segments.push(PathSegment::MoveTo(*first));
    for i in 0..last_idx as isize {
        let prev = at(i - 1);
        let current = at(i);
        let next = at(i + 1);
        let after = at(i + 2);
        segments.push(PathSegment::CurveTo {
            cp1: current + (next - prev) * k,
            cp2: next - (after - current) * k,
            end: next,
        });
    }
    Curve { segments }
}
