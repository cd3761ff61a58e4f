//! Page layout wrapper component

use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Inline styles for preview pages.
const PREVIEW_STYLE: &str = "body{font-family:system-ui,sans-serif;line-height:1.6;\
max-width:48rem;margin:2rem auto;padding:0 1rem;color:#24292f}\
a svg{vertical-align:middle;margin-left:2px}";

/// Wraps rendered markdown in a standalone HTML document
///
/// # Arguments
///
/// * `title`: Page title text
/// * `body_html`: Already rendered HTML fragment, inserted unescaped
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(title: &str, body_html: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(PREVIEW_STYLE)) }
            }
            body {
                main class="markdown-body" {
                    (PreEscaped(body_html))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_wrapper_structure() {
        // Act
        let page = page_wrapper("Guide", "<p>hello</p>").into_string();

        // Assert
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Guide</title>"));
        assert!(page.contains("<main class=\"markdown-body\"><p>hello</p></main>"));
    }

    #[test]
    fn test_page_wrapper_escapes_title() {
        let page = page_wrapper("<script>", "").into_string();
        assert!(page.contains("<title>&lt;script&gt;</title>"));
    }
}
