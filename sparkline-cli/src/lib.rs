//! Support library for the sparkline CLI binary.
//!
//! Exposes the CLI and logging modules so tests can exercise the command
//! pipeline without forking a subprocess.

pub mod cli;
pub mod logging;
