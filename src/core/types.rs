use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Cartesian coordinate in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Client-space rectangle of a container, as reported by the host layout.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[must_use]
    pub fn from_viewport(viewport: Viewport) -> Self {
        Self::new(
            0.0,
            0.0,
            f64::from(viewport.width),
            f64::from(viewport.height),
        )
    }

    /// Converts a client-space coordinate into box-local space.
    #[must_use]
    pub fn to_local(self, client_x: f64, client_y: f64) -> Point {
        Point::new(client_x - self.left, client_y - self.top)
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(
            self.left + self.width / 2.0,
            self.top + self.height / 2.0,
        )
    }

    #[must_use]
    pub fn contains(self, client_x: f64, client_y: f64) -> bool {
        client_x >= self.left
            && client_x <= self.left + self.width
            && client_y >= self.top
            && client_y <= self.top + self.height
    }
}
