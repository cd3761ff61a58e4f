//! Link boundary rendering rules.
//!
//! A [`RuleTable`] maps each link boundary kind to a [`LinkRule`]. Kinds
//! without a rule fall back to [`render_token`], the plain HTML rendering
//! of the boundary. The table is handed to the renderer when it is built;
//! there is no global registry.

use comrak::html::{escape, escape_href};
use std::collections::HashMap;
use std::fmt;
use std::io::Write;

use super::links::{LinkState, LinkToken};
use crate::components::icons::external_link_icon;
use crate::error::RenderError;
use crate::util::is_dangerous_url;

/// Kind of link boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    LinkOpen,
    LinkClose,
}

/// Opening boundary of a link with its attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOpenToken {
    pub href: String,
    pub title: String,
    attrs: Vec<(String, String)>,
}

impl LinkOpenToken {
    pub fn new(href: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            title: title.into(),
            attrs: Vec::new(),
        }
    }

    /// Returns value of extra attribute, if declared.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Sets extra attribute, replacing an existing value in place.
    ///
    /// `title` updates the link title instead of adding a second attribute.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if name == "title" {
            self.title = value;
            return;
        }

        match self.attrs.iter_mut().find(|(key, _)| *key == name) {
            Some(existing) => existing.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }
}

/// Link boundary passed through the rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    LinkOpen(LinkOpenToken),
    LinkClose,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::LinkOpen(_) => TokenKind::LinkOpen,
            Self::LinkClose => TokenKind::LinkClose,
        }
    }
}

/// Rendering override for one kind of link boundary.
pub trait LinkRule: Send + Sync {
    /// Renders boundary to HTML.
    ///
    /// Rules may rewrite the token before delegating to [`render_token`] and
    /// share data across boundaries through `state`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::RendererState`] when boundaries arrive out of
    /// order.
    fn render(&self, token: &mut Token, state: &mut LinkState) -> Result<String, RenderError>;
}

/// Renders boundary as plain HTML without any rule applied.
///
/// Output matches comrak's own anchors: the href is percent-encoded with
/// [`escape_href`] and attribute values are escaped with [`escape`].
/// Dangerous link targets (see [`is_dangerous_url`]) render with an empty
/// `href`.
///
/// # Errors
///
/// Returns [`RenderError::Format`] if writing the HTML fails.
pub fn render_token(token: &Token) -> Result<String, RenderError> {
    let mut html: Vec<u8> = Vec::new();

    match token {
        Token::LinkOpen(open) => {
            html.write_all(b"<a href=\"")?;
            if !is_dangerous_url(&open.href) {
                escape_href(&mut html, open.href.as_bytes())?;
            }
            if !open.title.is_empty() {
                html.write_all(b"\" title=\"")?;
                escape(&mut html, open.title.as_bytes())?;
            }
            for (key, value) in &open.attrs {
                write!(html, "\" {}=\"", key)?;
                escape(&mut html, value.as_bytes())?;
            }
            html.write_all(b"\">")?;
        }
        Token::LinkClose => html.write_all(b"</a>")?,
    }

    Ok(String::from_utf8(html)?)
}

/// Opens links in a new browsing context.
///
/// Adds `target="_blank"` unless the link already declares a target, then
/// records the link in `state` for the matching close boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenInNewTab;

impl LinkRule for OpenInNewTab {
    fn render(&self, token: &mut Token, state: &mut LinkState) -> Result<String, RenderError> {
        let Token::LinkOpen(open) = token else {
            return render_token(token);
        };

        if open.attr("target").is_none_or(str::is_empty) {
            open.set_attr("target", "_blank");
        }

        state.open(LinkToken::new(open.href.clone()))?;
        render_token(token)
    }
}

/// Appends external link icon after closing tag of off-site links.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExternalLinkIcon;

impl LinkRule for ExternalLinkIcon {
    fn render(&self, token: &mut Token, state: &mut LinkState) -> Result<String, RenderError> {
        let link = state.close()?;
        let mut html = render_token(token)?;

        if link.is_external() {
            html.push_str(&external_link_icon().into_string());
        }

        Ok(html)
    }
}

/// Mapping from link boundary kind to rendering rule.
#[derive(Default)]
pub struct RuleTable {
    rules: HashMap<TokenKind, Box<dyn LinkRule>>,
}

impl RuleTable {
    /// Creates empty table: every boundary uses [`render_token`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates table with [`OpenInNewTab`] and [`ExternalLinkIcon`].
    pub fn standard() -> Self {
        Self::new()
            .with_rule(TokenKind::LinkOpen, OpenInNewTab)
            .with_rule(TokenKind::LinkClose, ExternalLinkIcon)
    }

    /// Installs rule for boundary kind, replacing any previous one.
    pub fn with_rule(mut self, kind: TokenKind, rule: impl LinkRule + 'static) -> Self {
        self.rules.insert(kind, Box::new(rule));
        self
    }

    pub fn has_rule(&self, kind: TokenKind) -> bool {
        self.rules.contains_key(&kind)
    }

    /// Renders boundary with its rule, or plainly when none is installed.
    ///
    /// # Errors
    ///
    /// Propagates errors from the installed rule.
    pub fn render(&self, token: &mut Token, state: &mut LinkState) -> Result<String, RenderError> {
        match self.rules.get(&token.kind()) {
            Some(rule) => rule.render(token, state),
            None => render_token(token),
        }
    }
}

impl fmt::Debug for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.rules.keys().collect();
        kinds.sort_by_key(|kind| **kind as u8);
        f.debug_struct("RuleTable").field("rules", &kinds).finish()
    }
}
