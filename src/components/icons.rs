//! Inline icons

use maud::{Markup, html};

/// External link indicator placed after off-site links.
///
/// Square with outgoing arrow, drawn at 15 by 15 on a 24 unit view box.
/// Stroke uses `currentColor` so the icon follows the surrounding text
/// color.
pub fn external_link_icon() -> Markup {
    html! {
        svg
            fill="none"
            stroke-linecap="round"
            stroke-linejoin="round"
            stroke-width="2"
            viewBox="0 0 24 24"
            stroke="currentColor"
            width="15"
            height="15"
            aria-hidden="true"
        {
            path d="M10 6H6a2 2 0 00-2 2v10a2 2 0 002 2h10a2 2 0 002-2v-4M14 4h6m0 0v6m0-6L10 14" {}
        }
    }
}
