//! Application-level utilities for the Diary CLI.
//!
//! This module provides:
//! - Path resolution for config and diary files
//! - Logging bootstrap
//! - The interactive session (menu state machine)

mod logging;
mod resolver;
pub mod session;

pub use logging::init_logging;
pub use resolver::{resolve_config_path, resolve_diary_path};
pub use session::Session;
