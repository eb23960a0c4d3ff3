//! Rendering utilities for terminals and CI surfaces (text, Markdown, GitHub annotations).

#![forbid(unsafe_code)]

mod gha;
mod markdown;
mod model;
mod text;

pub use gha::render_github_annotations;
pub use markdown::render_markdown;
pub use model::{RenderableAction, RenderableReport, RenderableResource, RenderableVerdict};
pub use text::{TextOptions, render_text};

pub const DISCLAIMER: &str = "This tool provides informational guidance only and does not constitute legal advice. Consult with qualified legal counsel to ensure full compliance with all applicable laws and regulations.";

pub const NO_LAWS_FALLBACK: &str =
    "No specific health regulations identified, but general consumer protection laws may still apply.";
