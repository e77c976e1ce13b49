use serde::{Deserialize, Serialize};

use crate::core::types::Point;

/// Converts an angle measured clockwise from 12 o'clock into a point on the
/// circle of `radius` around `(center_x, center_y)`.
///
/// `0°` maps to the top of the circle and `90°` to its right-hand side.
/// Angles outside `[0, 360]` wrap through the trigonometric functions.
#[must_use]
pub fn polar_to_cartesian(center_x: f64, center_y: f64, radius: f64, angle_deg: f64) -> Point {
    let angle_rad = (angle_deg - 90.0).to_radians();
    Point::new(
        center_x + radius * angle_rad.cos(),
        center_y + radius * angle_rad.sin(),
    )
}

/// Inverse of [`polar_to_cartesian`]: angle in `[0, 360)` measured clockwise
/// from 12 o'clock, plus the distance from the center.
#[must_use]
pub fn cartesian_to_polar(center_x: f64, center_y: f64, point: Point) -> (f64, f64) {
    let dx = point.x - center_x;
    let dy = point.y - center_y;
    let angle_deg = (dy.atan2(dx).to_degrees() + 90.0).rem_euclid(360.0);
    (angle_deg, dx.hypot(dy))
}

/// Parameters fully defining one circular arc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcDescriptor {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub start_angle_deg: f64,
    pub end_angle_deg: f64,
}

impl ArcDescriptor {
    #[must_use]
    pub const fn new(
        center_x: f64,
        center_y: f64,
        radius: f64,
        start_angle_deg: f64,
        end_angle_deg: f64,
    ) -> Self {
        Self {
            center_x,
            center_y,
            radius,
            start_angle_deg,
            end_angle_deg,
        }
    }

    #[must_use]
    pub fn start_point(self) -> Point {
        polar_to_cartesian(
            self.center_x,
            self.center_y,
            self.radius,
            self.start_angle_deg,
        )
    }

    #[must_use]
    pub fn end_point(self) -> Point {
        polar_to_cartesian(
            self.center_x,
            self.center_y,
            self.radius,
            self.end_angle_deg,
        )
    }

    #[must_use]
    pub fn sweep_deg(self) -> f64 {
        self.end_angle_deg - self.start_angle_deg
    }

    /// Large-arc flag: set only when the sweep is strictly over a half turn.
    #[must_use]
    pub fn is_large_arc(self) -> bool {
        self.sweep_deg() > 180.0
    }
}
