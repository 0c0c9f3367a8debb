//! Report rendering.
//!
//! Turns a [`CheckReport`](crate::CheckReport) into:
//! - a plain-text report with one record table per XMPP service, note markers
//!   with footnote numbers, and the footnote explanations
//! - a pretty-printed JSON document

mod json;
mod text;

// Re-export public API
pub use json::render_json;
pub use text::render_text;

#[cfg(test)]
mod tests;
