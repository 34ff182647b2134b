//! Pixel operations for turning logo images into square app icons.
//!
//! Provides content-span detection (finding where drawn content ends and
//! trailing whitespace begins), tight alpha bounding-box cropping, and
//! centered square padding on a transparent canvas.

pub mod bounds;
pub mod compose;
pub mod crop;
pub mod io;

// Re-exports for convenience
pub use bounds::{Bounds, ContentSpan, content_bbox, find_content_span};
pub use compose::pad_to_square;
pub use crop::crop_to_content;
pub use io::{IconError, load_rgba, save_rgba};
