//! Stateless transformations applied to detected text boxes before mapping:
//! geometric primitives, reading-order sorting, and confidence filtering.

pub mod filter;
pub mod geometry;
pub mod sorter;
pub mod text_box;

pub use filter::filter_by_confidence;
pub use geometry::{BoundingBox, Point};
pub use sorter::{DEFAULT_LINE_TOLERANCE_PX, sort_reading_order};
pub use text_box::{BoxPosition, RawDetection, TextBox};
