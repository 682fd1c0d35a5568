//! Canvas geometry: points, drop-zone bounds, and client-to-canvas conversion.
//!
//! Two coordinate spaces are in play. *Client* space is what the browser
//! reports for pointer events (viewport CSS pixels). *Canvas-local* space has
//! its origin at the drop zone's top-left corner and is the only space the
//! placement list stores. Every stored coordinate is clamped into
//! `[0, width] x [0, height]`.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// A point in either client or canvas-local space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector from `origin` to `self`.
    #[must_use]
    pub fn offset_from(self, origin: Point) -> Point {
        Point { x: self.x - origin.x, y: self.y - origin.y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Size of the drop zone in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Build bounds, treating negative or non-finite dimensions as zero.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width: sanitize_extent(width), height: sanitize_extent(height) }
    }

    /// Whether the drop zone has not been measured yet (or collapsed).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Center of the drop zone; the initial leader-line target of new placements.
    #[must_use]
    pub fn center(&self) -> Point {
        Point { x: self.width / 2.0, y: self.height / 2.0 }
    }

    /// Clamp `p` into `[0, width] x [0, height]`. NaN maps to 0.
    #[must_use]
    pub fn clamp(&self, p: Point) -> Point {
        Point { x: clamp_axis(p.x, self.width), y: clamp_axis(p.y, self.height) }
    }

    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

/// Client-space rectangle of the drop zone element, as reported by
/// `getBoundingClientRect()`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CanvasRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CanvasRect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Client-space position of the canvas origin.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point { x: self.left, y: self.top }
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }

    /// Convert a client-space point to canvas-local space. Not clamped.
    #[must_use]
    pub fn to_local(&self, client: Point) -> Point {
        client.offset_from(self.origin())
    }
}

fn sanitize_extent(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

fn clamp_axis(v: f64, max: f64) -> f64 {
    if v.is_nan() {
        return 0.0;
    }
    v.max(0.0).min(max)
}
