//! Plain-text extraction from a chapter page's content region.

use ego_tree::NodeRef;
use scraper::{node::Node, ElementRef, Html, Selector};

const IGNORE_TAGS: &[&str] = &["script", "style", "noscript", "nav", "header", "footer"];

// Platform chrome that lives inside the content region but must never be
// sent out for translation.
const IGNORE_CLASSES: &[&str] = &[
    "chatbot-widget",
    "language-toggle",
    "theme-toggle-checkbox",
    "theme-toggle-label",
    "translation-notification",
];

/// Extracts the readable text of a chapter page.
///
/// Resolves the content region (`main.content`, with progressively looser
/// fallbacks down to `body`), walks its paragraph-level blocks, skips
/// script/style and platform chrome, and collapses whitespace. Blocks are
/// joined with newlines so the translation prompt keeps paragraph
/// boundaries.
pub fn page_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let root = content_root(&document).unwrap_or_else(|| document.root_element());

    let block_selector =
        Selector::parse("p, h1, h2, h3, h4, h5, h6, li, pre").expect("valid block selector");

    let mut blocks = Vec::new();
    for node in root.select(&block_selector) {
        if in_ignored_subtree(&node) {
            continue;
        }
        let mut buf = String::new();
        collect_text(&node, &mut buf);
        let text = collapse_whitespace(&buf);
        if !text.is_empty() {
            blocks.push(text);
        }
    }

    if blocks.is_empty() {
        let mut buf = String::new();
        collect_text(&root, &mut buf);
        return collapse_whitespace(&buf);
    }

    blocks.join("\n")
}

fn content_root(document: &Html) -> Option<ElementRef<'_>> {
    for raw in ["main.content", ".content", "main", "body"] {
        let selector = Selector::parse(raw).expect("valid content selector");
        if let Some(node) = document.select(&selector).next() {
            return Some(node);
        }
    }
    None
}

fn collect_text(node: &NodeRef<'_, Node>, out: &mut String) {
    match node.value() {
        Node::Text(text) => out.push_str(text),
        Node::Element(element) => {
            if ignored_element(element) {
                return;
            }
            for child in node.children() {
                collect_text(&child, out);
            }
        }
        _ => {
            for child in node.children() {
                collect_text(&child, out);
            }
        }
    }
}

fn ignored_element(element: &scraper::node::Element) -> bool {
    if IGNORE_TAGS.contains(&element.name()) {
        return true;
    }
    element
        .classes()
        .any(|class| IGNORE_CLASSES.contains(&class))
}

fn in_ignored_subtree(node: &ElementRef<'_>) -> bool {
    if ignored_element(node.value()) {
        return true;
    }
    node.ancestors().any(|ancestor| {
        ElementRef::wrap(ancestor)
            .is_some_and(|element| ignored_element(element.value()))
    })
}

fn collapse_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_space = false;
    for ch in input.chars() {
        if ch.is_whitespace() {
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_blocks_from_the_content_region() {
        let html = r#"
        <body>
          <nav><a href="/">Home</a></nav>
          <main class="content">
            <h2>Stoichiometry</h2>
            <p>The mole is a   unit of
               amount.</p>
            <ul><li>Avogadro's number</li></ul>
          </main>
          <footer>copyright</footer>
        </body>
        "#;

        assert_eq!(
            page_text(html),
            "Stoichiometry\nThe mole is a unit of amount.\nAvogadro's number"
        );
    }

    #[test]
    fn skips_scripts_styles_and_platform_chrome() {
        let html = r#"
        <div class="content">
          <p>Keep this.</p>
          <script>alert(1)</script>
          <style>p { color: red }</style>
          <label class="theme-toggle-label"><p>Dark mode</p></label>
          <div class="chatbot-widget"><p>Ask me anything</p></div>
        </div>
        "#;

        assert_eq!(page_text(html), "Keep this.");
    }

    #[test]
    fn inline_markup_does_not_split_text() {
        let html = r#"<main class="content"><p>Water is H<sub>2</sub>O.</p></main>"#;
        assert_eq!(page_text(html), "Water is H2O.");
    }

    #[test]
    fn falls_back_to_whole_body_text() {
        let html = "<body>No block structure here</body>";
        assert_eq!(page_text(html), "No block structure here");
    }
}
