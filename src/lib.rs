//! Syncheck - Desktop front-end for an external C/C++ syntax checker
//!
//! Wraps a pre-built command-line checker in a small native GUI: pick a
//! source file, run the checker on it, and read the captured output in a
//! scrollable pane with diagnostics highlighted.
//!
//! # Features
//!
//! - **Native file picker**: C, C++, text and catch-all filters
//! - **One-shot checks**: the checker runs once per selected file, path as
//!   its sole argument
//! - **Tagged transcript**: stdout rendered plainly, stderr in red
//! - **Responsive window**: the check runs on a worker thread and can be
//!   cancelled
//!
//! # Example
//!
//! ```no_run
//! use syncheck::{gui, Checker};
//!
//! fn main() -> syncheck::Result<()> {
//!     syncheck::logging::init();
//!     gui::run(Checker::default())
//! }
//! ```

pub mod checker;
pub mod error;
pub mod gui;
pub mod logging;
pub mod transcript;

// Re-export main types
pub use checker::{CheckMessage, CheckOutput, Checker, RunningCheck};
pub use error::{Result, SyncheckError};
pub use transcript::{Span, SpanKind, Transcript};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
