use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::path::{PathData, donut_path};
use crate::core::polar::{ArcDescriptor, cartesian_to_polar};
use crate::core::types::Point;
use crate::error::{ChartError, ChartResult};

/// Annular wedge between two concentric arcs sharing start/end angles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DonutSegment {
    center: Point,
    outer_radius: f64,
    inner_radius: f64,
    start_angle_deg: f64,
    end_angle_deg: f64,
}

impl DonutSegment {
    pub fn new(
        center: Point,
        outer_radius: f64,
        inner_radius: f64,
        start_angle_deg: f64,
        end_angle_deg: f64,
    ) -> ChartResult<Self> {
        if !outer_radius.is_finite() || !inner_radius.is_finite() {
            return Err(ChartError::InvalidData(
                "donut radii must be finite".to_owned(),
            ));
        }
        if inner_radius < 0.0 || inner_radius >= outer_radius {
            return Err(ChartError::InvalidData(format!(
                "donut radii must satisfy 0 <= inner < outer, got inner={inner_radius}, outer={outer_radius}"
            )));
        }
        if !start_angle_deg.is_finite()
            || !end_angle_deg.is_finite()
            || end_angle_deg < start_angle_deg
        {
            return Err(ChartError::InvalidData(
                "donut angles must be finite with end >= start".to_owned(),
            ));
        }

        Ok(Self {
            center,
            outer_radius,
            inner_radius,
            start_angle_deg,
            end_angle_deg,
        })
    }

    #[must_use]
    pub fn center(self) -> Point {
        self.center
    }

    #[must_use]
    pub fn radii(self) -> (f64, f64) {
        (self.inner_radius, self.outer_radius)
    }

    #[must_use]
    pub fn angles(self) -> (f64, f64) {
        (self.start_angle_deg, self.end_angle_deg)
    }

    #[must_use]
    pub fn outer_arc(self) -> ArcDescriptor {
        ArcDescriptor::new(
            self.center.x,
            self.center.y,
            self.outer_radius,
            self.start_angle_deg,
            self.end_angle_deg,
        )
    }

    #[must_use]
    pub fn inner_arc(self) -> ArcDescriptor {
        ArcDescriptor::new(
            self.center.x,
            self.center.y,
            self.inner_radius,
            self.start_angle_deg,
            self.end_angle_deg,
        )
    }

    #[must_use]
    pub fn path(self) -> PathData {
        donut_path(
            self.center.x,
            self.center.y,
            self.outer_radius,
            self.inner_radius,
            self.start_angle_deg,
            self.end_angle_deg,
        )
    }

    /// Hit-test in the segment's own pixel space.
    #[must_use]
    pub fn contains(self, point: Point) -> bool {
        let (angle_deg, distance) = cartesian_to_polar(self.center.x, self.center.y, point);
        if distance < self.inner_radius || distance > self.outer_radius {
            return false;
        }
        if self.end_angle_deg - self.start_angle_deg >= 360.0 {
            return true;
        }
        let start = self.start_angle_deg.rem_euclid(360.0);
        let sweep = self.end_angle_deg - self.start_angle_deg;
        (angle_deg - start).rem_euclid(360.0) <= sweep
    }
}

/// Placement of a full donut ring, splitting 360° across a value series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DonutLayout {
    pub center: Point,
    pub outer_radius: f64,
    /// Share of the outer radius cut out of the middle, in `[0, 1)`.
    pub cutout_ratio: f64,
}

impl DonutLayout {
    pub fn new(center: Point, outer_radius: f64, cutout_ratio: f64) -> ChartResult<Self> {
        if !outer_radius.is_finite() || outer_radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "donut outer radius must be finite and > 0".to_owned(),
            ));
        }
        if !cutout_ratio.is_finite() || !(0.0..1.0).contains(&cutout_ratio) {
            return Err(ChartError::InvalidData(
                "donut cutout ratio must be finite and in [0, 1)".to_owned(),
            ));
        }
        Ok(Self {
            center,
            outer_radius,
            cutout_ratio,
        })
    }

    #[must_use]
    pub fn inner_radius(self) -> f64 {
        self.outer_radius * self.cutout_ratio
    }

    /// One segment per value, in input order, clockwise from 12 o'clock.
    ///
    /// A zero total produces no segments.
    pub fn segments(self, values: &[f64]) -> ChartResult<Vec<DonutSegment>> {
        if let Some(bad) = values.iter().find(|v| !v.is_finite() || **v < 0.0) {
            return Err(ChartError::InvalidData(format!(
                "donut values must be finite and >= 0, got {bad}"
            )));
        }

        let total: f64 = values.iter().sum();
        if total == 0.0 {
            return Ok(Vec::new());
        }

        let mut start: f64 = 0.0;
        let mut segments = Vec::with_capacity(values.len());
        for (index, value) in values.iter().enumerate() {
            let end = if index + 1 == values.len() {
                start.max(360.0)
            } else {
                start + value / total * 360.0
            };
            segments.push(DonutSegment::new(
                self.center,
                self.outer_radius,
                self.inner_radius(),
                start,
                end,
            )?);
            start = end;
        }
        trace!(count = segments.len(), total, "laid out donut segments");
        Ok(segments)
    }

    /// Index of the first non-empty segment under `point`, if any.
    #[must_use]
    pub fn segment_at(segments: &[DonutSegment], point: Point) -> Option<usize> {
        segments.iter().position(|segment| {
            let (start, end) = segment.angles();
            end > start && segment.contains(point)
        })
    }
}
