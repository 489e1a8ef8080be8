//! Page module
//!
//! HTML rendering for the calculator page and its embedded assets.

pub mod renderer;

pub use renderer::{render_index, SCRIPT, SCRIPT_PATH, STYLESHEET, STYLESHEET_PATH};
