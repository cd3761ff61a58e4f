//! Documentation reference validation and safe link rendering.
//!
//! Two independent pieces share one notion of what counts as a URL:
//! - [`parse_references`] turns an entity's loosely typed `docs` field into
//!   a validated [`ReferenceList`]
//! - [`MarkdownRenderer`] renders markdown so every link opens in a new
//!   browsing context and off-site links carry an external link icon

pub mod components;
mod config;
mod docs;
mod error;
mod markdown;
mod util;

pub use components::icons::external_link_icon;
pub use components::layout::page_wrapper;
pub use config::{Command, Config};
pub use docs::{
    Documentable, DocumentableData, Reference, ReferenceList, parse_collection, parse_references,
};
pub use error::{LinkStateError, ReferenceError, RenderError};
pub use markdown::{
    ExternalLinkIcon, LinkOpenToken, LinkRule, LinkState, LinkToken, MarkdownRenderer,
    OpenInNewTab, RuleTable, Token, TokenKind, render_token,
};
pub use util::is_external_url;
