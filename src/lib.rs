//! donut-chart-rs: donut/arc geometry and pointer interaction for
//! custom-rendered charts.
//!
//! Geometry (`core`) is pure and produces SVG path data and scales.
//! Interaction (`interaction`) keeps tooltip, hover and zoom/pan state for
//! host-owned elements and reacts to pointer events.

pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use error::{ChartError, ChartResult};
