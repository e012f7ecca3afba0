//! HTML sanitizer — turns a raw email body into clean plain text.
//!
//! Email HTML is hostile: tracking scripts, invisible characters, broken
//! markup. The sanitizer parses leniently (html5ever under the hood, via
//! `scraper`), drops `<script>`/`<style>` subtrees wholesale, and keeps
//! only text content. Entities are decoded by the parser itself.

use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{Html, Selector};

/// Elements whose boundaries sit inside a word or phrase; every other
/// element boundary separates words.
const INLINE_ELEMENTS: &[&str] = &[
    "a", "abbr", "b", "code", "em", "i", "mark", "small", "span", "strong", "sub", "sup", "u",
];

/// Extracts clean plain text from an HTML (or plain-text) email body.
pub struct ContentSanitizer {
    body_selector: Selector,
}

impl ContentSanitizer {
    /// Create a sanitizer. The selector is static and always valid.
    pub fn new() -> Self {
        Self {
            body_selector: Selector::parse("body").unwrap(),
        }
    }

    /// Sanitize an email body.
    ///
    /// Never fails: malformed markup parses to a best-effort tree and
    /// empty input yields an empty string. No length truncation is
    /// applied here — display-side truncation is the caller's concern.
    pub fn sanitize(&self, html: &str) -> String {
        if html.trim().is_empty() {
            return String::new();
        }

        // Zero-width non-joiners are a common tracking/obfuscation trick.
        let stripped = html.replace('\u{200c}', "");

        let document = Html::parse_document(&stripped);
        let mut text = String::new();
        match document.select(&self.body_selector).next() {
            Some(body) => collect_text(*body, &mut text),
            // html5ever synthesizes <body> for any document, but don't
            // rely on it — fall back to the whole tree.
            None => collect_text(document.tree.root(), &mut text),
        }

        // Entity-encoded ZWNJs only materialize after parsing; strip
        // those too, then collapse whitespace runs and trim.
        text.retain(|c| c != '\u{200c}');
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

impl Default for ContentSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Work item for the explicit traversal stack.
enum Walk<'a> {
    Node(NodeRef<'a, Node>),
    Separator,
}

/// Text collection over an explicit stack — no recursion, so arbitrarily
/// deep nesting cannot overflow. Script/style subtrees are skipped
/// entirely; non-inline element boundaries emit a word separator.
fn collect_text(root: NodeRef<'_, Node>, out: &mut String) {
    let mut stack = vec![Walk::Node(root)];
    while let Some(item) = stack.pop() {
        let node = match item {
            Walk::Separator => {
                out.push(' ');
                continue;
            }
            Walk::Node(node) => node,
        };
        match node.value() {
            Node::Text(text) => out.push_str(&text.text),
            Node::Element(el) if matches!(el.name(), "script" | "style") => {}
            Node::Element(el) if !INLINE_ELEMENTS.contains(&el.name()) => {
                stack.push(Walk::Separator);
                for child in node.children().rev() {
                    stack.push(Walk::Node(child));
                }
                stack.push(Walk::Separator);
            }
            _ => {
                for child in node.children().rev() {
                    stack.push(Walk::Node(child));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_keeps_text() {
        let s = ContentSanitizer::new();
        assert_eq!(s.sanitize("<p>Hello <b>world</b></p>"), "Hello world");
    }

    #[test]
    fn removes_script_contents() {
        let s = ContentSanitizer::new();
        let out = s.sanitize("<script>track()</script><p>Visible</p>");
        assert_eq!(out, "Visible");
        assert!(!out.contains("track"));
    }

    #[test]
    fn removes_style_contents() {
        let s = ContentSanitizer::new();
        let out = s.sanitize("<style>.x { color: red; }</style><div>Text</div>");
        assert_eq!(out, "Text");
        assert!(!out.contains("color"));
    }

    #[test]
    fn decodes_entities() {
        let s = ContentSanitizer::new();
        assert_eq!(s.sanitize("<p>Fish &amp; chips &gt; soup</p>"), "Fish & chips > soup");
    }

    #[test]
    fn collapses_whitespace() {
        let s = ContentSanitizer::new();
        let out = s.sanitize("<p>  one\n\n  two   three </p>");
        assert_eq!(out, "one two three");
    }

    #[test]
    fn strips_zero_width_non_joiner() {
        let s = ContentSanitizer::new();
        let out = s.sanitize("<p>he\u{200c}llo</p>");
        assert_eq!(out, "hello");
        assert_eq!(s.sanitize("<p>he&zwnj;llo</p>"), "hello");
    }

    #[test]
    fn inline_markup_does_not_split_words() {
        let s = ContentSanitizer::new();
        assert_eq!(s.sanitize("<p>he<b>ll</b>o</p>"), "hello");
        assert_eq!(s.sanitize("<p>un<em>mis</em>takable</p>"), "unmistakable");
    }

    #[test]
    fn block_boundaries_separate_words() {
        let s = ContentSanitizer::new();
        assert_eq!(s.sanitize("<div>one</div><div>two</div>"), "one two");
        assert_eq!(s.sanitize("<p>first</p><p>second</p>"), "first second");
    }

    #[test]
    fn link_text_kept_href_dropped() {
        let s = ContentSanitizer::new();
        let out = s.sanitize(r#"<a href="https://example.com/x">click here</a>"#);
        assert_eq!(out, "click here");
        assert!(!out.contains("example.com"));
    }

    #[test]
    fn tolerates_malformed_markup() {
        let s = ContentSanitizer::new();
        let out = s.sanitize("<div><p>unclosed <b>bold");
        assert_eq!(out, "unclosed bold");
    }

    #[test]
    fn deeply_nested_markup_does_not_overflow() {
        let s = ContentSanitizer::new();
        let html = format!("{}x{}", "<div>".repeat(5000), "</div>".repeat(5000));
        assert_eq!(s.sanitize(&html), "x");
    }

    #[test]
    fn empty_input_yields_empty_string() {
        let s = ContentSanitizer::new();
        assert_eq!(s.sanitize(""), "");
        assert_eq!(s.sanitize("   \n  "), "");
    }

    #[test]
    fn plain_text_passes_through() {
        let s = ContentSanitizer::new();
        assert_eq!(s.sanitize("just plain text"), "just plain text");
    }

    #[test]
    fn no_truncation_of_long_bodies() {
        let s = ContentSanitizer::new();
        let body = "word ".repeat(500);
        let out = s.sanitize(&format!("<p>{body}</p>"));
        assert!(out.len() > 2000);
        assert!(!out.ends_with("..."));
    }
}
