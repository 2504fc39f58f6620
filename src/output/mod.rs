//! Result rendering.
//!
//! - `OutputWriter`: prints operation reports as styled text or as one JSON object

mod writer;

pub use writer::OutputWriter;
