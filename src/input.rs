//! Input subsystem: frames raw bytes from the input stream into command lines.

pub mod reader;

// Public re-exports for convenience. Modules outside this crate should prefer importing
// from `crate::input` rather than reaching into submodules.
pub use reader::{LineReader, BUFFER_CAPACITY};
