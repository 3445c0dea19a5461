//! UI primitives for the Diary CLI.
//!
//! - **Terminal**: line-oriented input/output, real or in-memory
//! - **Prompt**: interpretation of menu choices and yes/no answers
//! - **Format**: timestamp and rule rendering
//! - **Theme**: control sequences and fixed symbols

pub mod format;
pub mod prompt;
pub mod terminal;
pub mod theme;

pub use terminal::{IoTerminal, Terminal};
