//! # sitepager - Interactive Line-Oriented Pager
//!
//! Greets the user, reads one command per line from standard input and prints the
//! requested page. A handful of static pages (about, native, github and, when built with
//! the `blog` feature, a blog with numbered posts) are compiled into the binary.
//!
//! ## Architecture
//!
//! - [`error`] - Fatal conditions and their diagnostics
//! - [`input`] - Framing raw reads into command lines
//! - [`command`] - Classifying a line into a [`Command`]
//! - [`pages`] - The build-time page [`Catalog`]
//! - [`app`] - The prompt/read/dispatch loop
//!
//! ## Exit status
//!
//! `exit` ends the loop with status 0. End of input, a read error or a line that fills
//! the whole input buffer end it with status 1.

// Core modules
pub mod error;
pub mod input;

// Dispatch
pub mod command;
pub mod pages;

// Core components
pub mod app;

// Re-export commonly used types for convenience
pub use error::{PagerError, Result};

// Public API surface for external usage
pub use app::Pager;
pub use command::Command;
pub use input::LineReader;
pub use pages::Catalog;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
