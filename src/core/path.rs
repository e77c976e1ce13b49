use std::fmt;

use smallvec::SmallVec;

use crate::core::polar::{ArcDescriptor, polar_to_cartesian};
use crate::core::types::Point;

/// One SVG path command in absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    ArcTo {
        radius_x: f64,
        radius_y: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: Point,
    },
    Close,
}

/// Ordered path commands; `Display` emits SVG path data.
///
/// A full donut segment is seven commands, so the inline capacity covers it
/// without allocating.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathData {
    commands: SmallVec<[PathCommand; 8]>,
}

impl PathData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    pub fn extend(&mut self, other: &PathData) {
        self.commands.extend_from_slice(&other.commands);
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, command) in self.commands.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            match *command {
                PathCommand::MoveTo(point) => {
                    write!(f, "M {} {}", Coord(point.x), Coord(point.y))?;
                }
                PathCommand::LineTo(point) => {
                    write!(f, "L {} {}", Coord(point.x), Coord(point.y))?;
                }
                PathCommand::ArcTo {
                    radius_x,
                    radius_y,
                    x_axis_rotation,
                    large_arc,
                    sweep,
                    to,
                } => {
                    write!(
                        f,
                        "A {} {} {} {} {} {} {}",
                        Coord(radius_x),
                        Coord(radius_y),
                        Coord(x_axis_rotation),
                        u8::from(large_arc),
                        u8::from(sweep),
                        Coord(to.x),
                        Coord(to.y)
                    )?;
                }
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

/// Shortest round-trip number formatting with negative zero folded to `0`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Coord(pub f64);

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = if self.0 == 0.0 { 0.0 } else { self.0 };
        write!(f, "{value}")
    }
}

/// Arc commands for one descriptor, drawn from the end angle back to the
/// start angle with a fixed sweep flag of `0`.
#[must_use]
pub fn arc_path(arc: ArcDescriptor) -> PathData {
    let mut path = PathData::new();
    path.push(PathCommand::MoveTo(arc.end_point()));
    path.push(PathCommand::ArcTo {
        radius_x: arc.radius,
        radius_y: arc.radius,
        x_axis_rotation: 0.0,
        large_arc: arc.is_large_arc(),
        sweep: false,
        to: arc.start_point(),
    });
    path
}

/// SVG path data for a single arc.
///
/// Callers pass `end_angle_deg >= start_angle_deg`; a sweep of exactly 180°
/// takes the small-arc branch.
#[must_use]
pub fn describe_arc(
    x: f64,
    y: f64,
    radius: f64,
    start_angle_deg: f64,
    end_angle_deg: f64,
) -> String {
    arc_path(ArcDescriptor::new(
        x,
        y,
        radius,
        start_angle_deg,
        end_angle_deg,
    ))
    .to_string()
}

/// Closed path commands for an annular wedge.
#[must_use]
pub fn donut_path(
    x: f64,
    y: f64,
    outer_radius: f64,
    inner_radius: f64,
    start_angle_deg: f64,
    end_angle_deg: f64,
) -> PathData {
    let outer = ArcDescriptor::new(x, y, outer_radius, start_angle_deg, end_angle_deg);
    // inner ring is walked in reverse, so its descriptor swaps the angles
    let inner = ArcDescriptor::new(x, y, inner_radius, end_angle_deg, start_angle_deg);

    let mut path = arc_path(outer);
    path.push(PathCommand::LineTo(polar_to_cartesian(
        x,
        y,
        inner_radius,
        end_angle_deg,
    )));
    path.extend(&arc_path(inner));
    path.push(PathCommand::LineTo(polar_to_cartesian(
        x,
        y,
        outer_radius,
        start_angle_deg,
    )));
    path.push(PathCommand::Close);
    path
}

/// SVG path data for one donut segment. The result always ends in `Z`.
///
/// The inner arc starts a new subpath with its own `M` and always carries a
/// large-arc flag of `0`, so a segment sweeping more than 180° does not fill
/// as one annular wedge.
#[must_use]
pub fn create_donut_path(
    x: f64,
    y: f64,
    outer_radius: f64,
    inner_radius: f64,
    start_angle_deg: f64,
    end_angle_deg: f64,
) -> String {
    donut_path(
        x,
        y,
        outer_radius,
        inner_radius,
        start_angle_deg,
        end_angle_deg,
    )
    .to_string()
}
