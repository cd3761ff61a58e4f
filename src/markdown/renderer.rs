//! Markdown rendering with link rewriting.

use comrak::arena_tree::{Node, NodeEdge};
use comrak::nodes::{Ast, AstNode, LineColumn, NodeLink, NodeValue};
use comrak::{Arena, Options};
use std::cell::RefCell;

use super::attrs::parse_attr_block;
use super::links::LinkState;
use super::rules::{LinkOpenToken, RuleTable, Token};
use crate::error::RenderError;

/// Renders markdown to HTML, passing every link through a [`RuleTable`].
///
/// Configuration is fixed: bare URLs are autolinked, single newlines inside
/// a paragraph become `<br />`, tables and strikethrough are enabled, and
/// raw HTML in the source is rendered as text. With the standard rules,
/// links open in a new browsing context and off-site links get an
/// external link icon after `</a>`.
///
/// Link state lives inside each [`render`](Self::render) call, so one
/// renderer can serve any number of documents.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
    rules: RuleTable,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with the standard link rules.
    pub fn new() -> Self {
        Self::with_rules(RuleTable::standard())
    }

    /// Creates renderer with custom link rules.
    ///
    /// Boundaries without a rule in `rules` render as plain anchors.
    ///
    /// # Arguments
    ///
    /// * `rules`: Rule table applied to link open and close boundaries
    pub fn with_rules(rules: RuleTable) -> Self {
        let mut options = Options::default();

        // Extension options
        options.extension.autolink = true;
        options.extension.table = true;
        options.extension.strikethrough = true;

        // Render options: rewritten anchors are emitted as raw HTML nodes,
        // source HTML is escaped before that in `escape_raw_html`
        options.render.hardbreaks = true;
        options.render.unsafe_ = true;

        Self { options, rules }
    }

    /// Renders markdown content to HTML string.
    ///
    /// Parses markdown into AST, replaces each link with its rendered open
    /// and close boundaries, and formats the result as HTML.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown content to render
    ///
    /// # Returns
    ///
    /// Rendered HTML as string
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::RendererState`] if link boundaries arrive out
    /// of order (for instance a rule table that opens links but never
    /// closes them), or a formatting error if comrak fails to write HTML.
    pub fn render(&self, content: &str) -> Result<String, RenderError> {
        let arena = Arena::new();
        let root = comrak::parse_document(&arena, content, &self.options);

        escape_raw_html(&arena, root);
        let link_count = self.rewrite_links(&arena, root)?;

        let mut html = Vec::with_capacity(content.len() * 2);
        comrak::format_html(root, &self.options, &mut html)?;
        let html = String::from_utf8(html)?;

        tracing::debug!(links = link_count, bytes = html.len(), "Rendered markdown");

        Ok(html)
    }

    /// Replaces link nodes with raw HTML produced by the rule table.
    ///
    /// Link boundaries are visited in document order. Each open boundary
    /// becomes an HTML node before the link, each close boundary an HTML
    /// node after it, and the link node is then unwrapped so its children
    /// sit between the two.
    ///
    /// # Returns
    ///
    /// Number of links rewritten
    fn rewrite_links<'n>(
        &self,
        arena: &'n Arena<AstNode<'n>>,
        root: &'n AstNode<'n>,
    ) -> Result<usize, RenderError> {
        let edges: Vec<NodeEdge<&'n AstNode<'n>>> = root
            .traverse()
            .filter(|edge| match edge {
                NodeEdge::Start(node) | NodeEdge::End(node) => link_of(node).is_some(),
            })
            .collect();

        let mut state = LinkState::default();
        let mut links = Vec::new();

        for edge in edges {
            match edge {
                NodeEdge::Start(node) => {
                    let Some(link) = link_of(node) else { continue };

                    let mut open = LinkOpenToken::new(link.url, link.title);
                    for (key, value) in take_attr_block(node) {
                        open.set_attr(key, value);
                    }

                    tracing::trace!(href = %open.href, "Link open");
                    let html = self.rules.render(&mut Token::LinkOpen(open), &mut state)?;
                    node.insert_before(html_node(arena, html));
                    links.push(node);
                }
                NodeEdge::End(node) => {
                    let html = self.rules.render(&mut Token::LinkClose, &mut state)?;
                    node.insert_after(html_node(arena, html));
                }
            }
        }

        state.finish()?;

        let count = links.len();
        for link in links {
            unwrap_node(link);
        }

        Ok(count)
    }
}

impl Default for MarkdownRenderer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

fn link_of(node: &AstNode<'_>) -> Option<NodeLink> {
    match &node.data.borrow().value {
        NodeValue::Link(link) => Some(link.clone()),
        _ => None,
    }
}

fn html_node<'n>(arena: &'n Arena<AstNode<'n>>, html: String) -> &'n AstNode<'n> {
    arena.alloc(Node::new(RefCell::new(Ast::new(
        NodeValue::HtmlInline(html),
        LineColumn { line: 0, column: 0 },
    ))))
}

/// Removes attribute block directly following link and returns its pairs.
///
/// Adjacent text siblings are merged first so a block split across text
/// nodes is still found.
fn take_attr_block(link: &AstNode<'_>) -> Vec<(String, String)> {
    let Some(next) = link.next_sibling() else {
        return Vec::new();
    };

    let mut merged = match &next.data.borrow().value {
        NodeValue::Text(text) => text.clone(),
        _ => return Vec::new(),
    };

    while let Some(sibling) = next.next_sibling() {
        let text = match &sibling.data.borrow().value {
            NodeValue::Text(text) => text.clone(),
            _ => break,
        };
        merged.push_str(&text);
        sibling.detach();
    }

    let Some((attrs, consumed)) = parse_attr_block(&merged) else {
        next.data.borrow_mut().value = NodeValue::Text(merged);
        return Vec::new();
    };

    let rest = merged[consumed..].to_string();
    if rest.is_empty() {
        next.detach();
    } else {
        next.data.borrow_mut().value = NodeValue::Text(rest);
    }

    attrs
}

/// Turns raw HTML from the source into literal text.
fn escape_raw_html<'n>(arena: &'n Arena<AstNode<'n>>, root: &'n AstNode<'n>) {
    let raw: Vec<_> = root
        .descendants()
        .filter(|node| {
            matches!(
                node.data.borrow().value,
                NodeValue::HtmlInline(_) | NodeValue::HtmlBlock(_)
            )
        })
        .collect();

    for node in raw {
        let value = std::mem::replace(&mut node.data.borrow_mut().value, NodeValue::Paragraph);
        match value {
            NodeValue::HtmlInline(html) => {
                node.data.borrow_mut().value = NodeValue::Text(html);
            }
            NodeValue::HtmlBlock(block) => {
                let text = block.literal.trim_end_matches('\n').to_string();
                node.append(arena.alloc(Node::new(RefCell::new(Ast::new(
                    NodeValue::Text(text),
                    LineColumn { line: 0, column: 0 },
                )))));
            }
            other => node.data.borrow_mut().value = other,
        }
    }
}

fn unwrap_node<'n>(node: &'n AstNode<'n>) {
    let children: Vec<_> = node.children().collect();
    for child in children {
        node.insert_before(child);
    }
    node.detach();
}
