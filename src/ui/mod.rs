//! User interface components for terminal interaction.
//!
//! # Modules
//!
//! - [`display`]: Result messages, audit tables, banner
//! - [`progress`]: Spinner shown while a hash is being stretched
//! - [`prompt`]: Masked password entry and wizard selections

pub mod display;
pub mod progress;
pub mod prompt;
