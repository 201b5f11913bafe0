//! ui
//!
//! User interaction utilities.
//!
//! All terminal output goes through [`output`] so quiet/debug handling is
//! consistent across commands.

pub mod output;
