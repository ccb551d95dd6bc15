//! Inner-markup serialization for the `html_*` fields.
//!
//! Text and attribute values are escaped with numeric references for quotes
//! (`&#34;`, `&#39;`), and void elements are closed with `/>`. This is the form
//! the provider's own tooling renders, so a `&quot;` in the page comes back as
//! `&#34;` rather than a bare quote.

use scraper::node::Node;
use scraper::ElementRef;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "keygen", "link", "meta",
    "param", "source", "track", "wbr",
];

const RAW_TEXT_ELEMENTS: &[&str] = &[
    "iframe", "noembed", "noframes", "noscript", "plaintext", "script", "style", "xmp",
];

/// Serializes the children of `element`, without the element's own tags.
pub fn inner_markup(element: ElementRef) -> String {
    let mut output = String::new();
    write_children(element, &mut output);
    output
}

fn write_children(element: ElementRef, output: &mut String) {
    let raw_text = RAW_TEXT_ELEMENTS.contains(&element.value().name());

    for child in element.children() {
        match child.value() {
            Node::Text(text) if raw_text => output.push_str(text),
            Node::Text(text) => escape_into(text, output),
            Node::Comment(comment) => {
                output.push_str("<!--");
                output.push_str(comment);
                output.push_str("-->");
            }
            Node::Element(_) => {
                if let Some(child_elem) = ElementRef::wrap(child) {
                    write_element(child_elem, output);
                }
            }
            _ => {}
        }
    }
}

fn write_element(element: ElementRef, output: &mut String) {
    let name = element.value().name();
    output.push('<');
    output.push_str(name);
    for (attr, value) in element.value().attrs() {
        output.push(' ');
        output.push_str(attr);
        output.push_str("=\"");
        escape_into(value, output);
        output.push('"');
    }

    if VOID_ELEMENTS.contains(&name) {
        output.push_str("/>");
        return;
    }

    output.push('>');
    write_children(element, output);
    output.push_str("</");
    output.push_str(name);
    output.push('>');
}

fn escape_into(text: &str, output: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '\'' => output.push_str("&#39;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&#34;"),
            '\r' => output.push_str("&#13;"),
            c => output.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{ Html, Selector };

    fn render(fragment: &str) -> String {
        let document = Html::parse_fragment(&format!("<div id=\"root\">{}</div>", fragment));
        let selector = Selector::parse("#root").unwrap();
        inner_markup(document.select(&selector).next().unwrap())
    }

    #[test]
    fn test_quotes_use_numeric_references() {
        assert_eq!(render("La &quot;supercazzola&quot;"), "La &#34;supercazzola&#34;");
        assert_eq!(render("&#39;Un s&#39;intrometta!"), "&#39;Un s&#39;intrometta!");
    }

    #[test]
    fn test_inline_markup_is_kept() {
        assert_eq!(render("Come se fosse <b>antani</b>"), "Come se fosse <b>antani</b>");
        assert_eq!(render("a &amp; b &lt;c&gt;"), "a &amp; b &lt;c&gt;");
    }

    #[test]
    fn test_attributes_and_void_elements() {
        assert_eq!(
            render("<a href=\"/l/?a=1&amp;b=2\">x<br></a>"),
            "<a href=\"/l/?a=1&amp;b=2\">x<br/></a>"
        );
        assert_eq!(render("<span title='it&apos;s'>y</span>"), "<span title=\"it&#39;s\">y</span>");
    }

    #[test]
    fn test_comments_are_kept() {
        assert_eq!(render("a<!-- note -->b"), "a<!-- note -->b");
    }
}
