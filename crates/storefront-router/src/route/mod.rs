//! Route module: pattern parsing and segment matching
//!
//! Pure functional components; nothing here touches the route table itself.

pub mod parser;
pub mod pattern;

pub use parser::{parse_pattern, Pattern};
pub use pattern::{classify_segment, Segment};
