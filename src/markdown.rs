//! Markdown rendering with GitHub Flavored Markdown support.
//!
//! This module provides markdown rendering using comrak with GFM extensions
//! (tables, strikethrough, autolinks, task lists) and deterministic heading
//! identifiers, plus rewriting of relative image references against a
//! raw-content base URL.

mod links;
mod renderer;

pub use links::LinkRewriter;
pub use renderer::MarkdownRenderer;
