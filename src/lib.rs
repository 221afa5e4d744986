//! Codeteria landing page rendered in the terminal.
//!
//! [`core`] holds the code playground's state machine and has no terminal
//! dependencies. [`tui`] hosts it inside a scrollable ratatui page.

pub mod config;
pub mod core;
pub mod logging;
pub mod tui;
