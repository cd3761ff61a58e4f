//! Markdown rendering with safe, annotated links.
//!
//! This module renders markdown with comrak (autolinks, hard line breaks)
//! and rewrites every hyperlink through a [`RuleTable`]: links open in a new
//! browsing context and off-site links get an external link icon after the
//! closing tag.

mod attrs;
mod links;
mod renderer;
mod rules;

pub use links::{LinkState, LinkToken};
pub use renderer::MarkdownRenderer;
pub use rules::{
    ExternalLinkIcon, LinkOpenToken, LinkRule, OpenInNewTab, RuleTable, Token, TokenKind,
    render_token,
};
