#![forbid(unsafe_code)]

//! Scripted playback for Bento panel rows.
//!
//! The binary loads a [`SurfaceConfig`](bento_widgets::SurfaceConfig) from a
//! preset or a file, plays a pointer script against it at a fixed frame
//! rate, and prints the render plan as ASCII frames or JSON lines.

pub mod canvas;
pub mod cli;
pub mod error;
pub mod logging;
pub mod script;

pub use cli::{Cli, run, run_from_env};
pub use error::{DemoError, Result};
