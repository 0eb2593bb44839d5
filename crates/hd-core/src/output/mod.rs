//! Output rendering.

pub mod report;

pub use report::{render, render_json, render_text, PosteriorReport};
