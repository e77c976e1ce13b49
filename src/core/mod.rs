pub mod donut;
pub mod format;
pub mod path;
pub mod polar;
pub mod range;
pub mod scale;
pub mod types;

pub use donut::{DonutLayout, DonutSegment};
pub use format::{format_currency, format_percentage, format_segment_label};
pub use path::{PathCommand, PathData, create_donut_path, describe_arc};
pub use polar::{ArcDescriptor, cartesian_to_polar, polar_to_cartesian};
pub use range::generate_range;
pub use scale::{LinearScale, create_linear_scale};
pub use types::{BoundingBox, Point, Viewport};
