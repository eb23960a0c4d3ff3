//! Use case orchestration for mhguard.
//!
//! This crate provides the application layer: use cases that coordinate the settings, domain, and
//! render layers. It is intentionally thin and delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod explain;
mod questions;
mod render;
mod report;

pub use check::{CheckInput, CheckOutput, run_check, verdict_exit_code};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use questions::{list_questions, run_sample};
pub use render::{render_annotations, render_markdown, render_text};
pub use report::{build_report, parse_report_json, serialize_report, to_renderable};
