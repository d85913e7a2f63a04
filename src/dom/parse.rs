//! Tolerant single-pass HTML parser.
//!
//! Handles doctype, comments, void elements, raw-text elements
//! (`script`/`style` content is never tokenized), quoted and unquoted
//! attributes, and entity decoding on text and attribute values.
//! Malformed input degrades gracefully: stray close tags are ignored and
//! unclosed elements are closed at end of input.

use super::node::{Document, Element, Node, Text};
use crate::utils::html::{is_raw_text_element, is_void_element, parse_attributes, unescape};

/// Parse an HTML string into an owned document tree.
pub fn parse(input: &str) -> Document {
    let mut parser = Parser {
        doc: Document::default(),
        stack: Vec::new(),
    };
    parser.run(input);
    parser.finish()
}

struct Parser {
    doc: Document,
    stack: Vec<Element>,
}

impl Parser {
    fn run(&mut self, input: &str) {
        let mut pos = 0;

        while pos < input.len() {
            let rest = &input[pos..];
            match rest.find('<') {
                Some(lt) => {
                    if lt > 0 {
                        self.push_text(&rest[..lt]);
                    }
                    pos += lt;
                    pos += self.consume_markup(&input[pos..]);
                }
                None => {
                    self.push_text(rest);
                    break;
                }
            }
        }
    }

    fn finish(mut self) -> Document {
        // Close any elements left open at end of input.
        while let Some(elem) = self.stack.pop() {
            self.attach(Node::Element(elem));
        }
        self.doc
    }

    /// Consume one markup construct starting at `<`. Returns bytes consumed.
    fn consume_markup(&mut self, rest: &str) -> usize {
        if let Some(comment) = rest.strip_prefix("<!--") {
            return match comment.find("-->") {
                Some(end) => {
                    self.attach(Node::Comment(comment[..end].to_string()));
                    4 + end + 3
                }
                None => {
                    // Unterminated comment swallows the rest of the input.
                    self.attach(Node::Comment(comment.to_string()));
                    rest.len()
                }
            };
        }

        if let Some(decl) = rest.strip_prefix("<!") {
            let end = decl.find('>').unwrap_or(decl.len());
            let content = &decl[..end];
            if content.len() >= 7 && content[..7].eq_ignore_ascii_case("doctype") {
                self.doc.doctype = Some(content.to_string());
            }
            return 2 + end + 1;
        }

        if let Some(close) = rest.strip_prefix("</") {
            let end = close.find('>').unwrap_or(close.len());
            let name = close[..end].trim().to_ascii_lowercase();
            self.close_element(&name);
            return 2 + end + 1;
        }

        // Not a tag start: emit the `<` as literal text.
        if !rest[1..].starts_with(|c: char| c.is_ascii_alphabetic()) {
            self.push_text("<");
            return 1;
        }

        self.consume_open_tag(rest)
    }

    /// Consume an open tag (and, for raw-text elements, its content and
    /// close tag). Returns bytes consumed.
    fn consume_open_tag(&mut self, rest: &str) -> usize {
        let inner = &rest[1..];
        let Some(end) = find_tag_end(inner) else {
            // Unterminated tag: treat the rest as text.
            self.push_text(rest);
            return rest.len();
        };

        let mut tag_body = &inner[..end];
        let self_closing = tag_body.ends_with('/');
        if self_closing {
            tag_body = &tag_body[..tag_body.len() - 1];
        }

        let name_len = tag_body
            .find(|c: char| c.is_whitespace())
            .unwrap_or(tag_body.len());
        let tag = tag_body[..name_len].to_ascii_lowercase();

        let mut elem = Element::new(&tag);
        for (name, value) in parse_attributes(&tag_body[name_len..]) {
            elem.attrs.push((name, unescape(&value).into_owned()));
        }

        let consumed = 1 + end + 1;

        if self_closing || is_void_element(&tag) {
            self.attach(Node::Element(elem));
            return consumed;
        }

        if is_raw_text_element(&tag) {
            return consumed + self.consume_raw_content(&rest[consumed..], elem, &tag);
        }

        self.stack.push(elem);
        consumed
    }

    /// Consume raw content up to the matching close tag and complete the
    /// element. Returns bytes consumed after the open tag.
    fn consume_raw_content(&mut self, rest: &str, mut elem: Element, tag: &str) -> usize {
        let close = format!("</{tag}");
        match find_ci(rest, &close) {
            Some(start) => {
                if start > 0 {
                    elem.children.push(Node::Text(Text::raw(&rest[..start])));
                }
                self.attach(Node::Element(elem));
                // Skip past the close tag's `>`.
                let after = &rest[start..];
                start + after.find('>').map_or(after.len(), |gt| gt + 1)
            }
            None => {
                if !rest.is_empty() {
                    elem.children.push(Node::Text(Text::raw(rest)));
                }
                self.attach(Node::Element(elem));
                rest.len()
            }
        }
    }

    /// Close the innermost open element with the given tag, implicitly
    /// closing anything opened inside it. Unmatched close tags are ignored.
    fn close_element(&mut self, tag: &str) {
        let Some(idx) = self.stack.iter().rposition(|e| e.tag == tag) else {
            return;
        };

        while self.stack.len() > idx + 1 {
            if let Some(inner) = self.stack.pop() {
                self.attach(Node::Element(inner));
            }
        }
        if let Some(elem) = self.stack.pop() {
            self.attach(Node::Element(elem));
        }
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.attach(Node::Text(Text::new(unescape(text).into_owned())));
    }

    fn attach(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.doc.nodes.push(node),
        }
    }
}

/// Find the `>` ending a tag, skipping over quoted attribute values.
/// `s` starts just after the `<`.
fn find_tag_end(s: &str) -> Option<usize> {
    let mut quote: Option<u8> = None;
    for (i, b) in s.bytes().enumerate() {
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None => match b {
                b'"' | b'\'' => quote = Some(b),
                b'>' => return Some(i),
                _ => {}
            },
        }
    }
    None
}

/// Case-insensitive substring search.
fn find_ci(haystack: &str, needle: &str) -> Option<usize> {
    let hay = haystack.as_bytes();
    let nee = needle.as_bytes();
    if nee.is_empty() || hay.len() < nee.len() {
        return None;
    }
    (0..=hay.len() - nee.len()).find(|&i| hay[i..i + nee.len()].eq_ignore_ascii_case(nee))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_document() {
        let doc = parse("<!DOCTYPE html><html><body data-page=\"home\"><h1 id=\"hero-title\">Hi</h1></body></html>");

        assert_eq!(doc.doctype.as_deref(), Some("DOCTYPE html"));
        assert_eq!(doc.page_marker(), Some("home"));
        let title = doc.find_by_id("hero-title").unwrap();
        assert_eq!(title.text_content(), "Hi");
    }

    #[test]
    fn test_parse_void_elements() {
        let doc = parse("<div>a<br>b<img src=\"x.png\">c</div>");
        let Node::Element(div) = &doc.nodes[0] else {
            panic!("expected element");
        };
        assert_eq!(div.children.len(), 5);
    }

    #[test]
    fn test_parse_self_closing() {
        let doc = parse("<div><hr/><span>x</span></div>");
        let Node::Element(div) = &doc.nodes[0] else {
            panic!("expected element");
        };
        assert_eq!(div.children.len(), 2);
    }

    #[test]
    fn test_parse_script_content_not_tokenized() {
        let doc = parse("<script>if (a < b) { x(\"<div>\"); }</script>");
        let Node::Element(script) = &doc.nodes[0] else {
            panic!("expected element");
        };
        let Node::Text(text) = &script.children[0] else {
            panic!("expected text");
        };
        assert!(text.raw);
        assert!(text.content.contains("a < b"));
        assert!(text.content.contains("<div>"));
    }

    #[test]
    fn test_parse_entities_decoded() {
        let doc = parse("<p title=\"a &amp; b\">x &lt; y</p>");
        let Node::Element(p) = &doc.nodes[0] else {
            panic!("expected element");
        };
        assert_eq!(p.get_attr("title"), Some("a & b"));
        assert_eq!(p.text_content(), "x < y");
    }

    #[test]
    fn test_parse_comment() {
        let doc = parse("<div><!-- note --></div>");
        let Node::Element(div) = &doc.nodes[0] else {
            panic!("expected element");
        };
        assert_eq!(div.children[0], Node::Comment(" note ".to_string()));
    }

    #[test]
    fn test_parse_unclosed_elements() {
        let doc = parse("<div><p>text");
        let Node::Element(div) = &doc.nodes[0] else {
            panic!("expected element");
        };
        assert_eq!(div.tag, "div");
        let Node::Element(p) = &div.children[0] else {
            panic!("expected p");
        };
        assert_eq!(p.text_content(), "text");
    }

    #[test]
    fn test_parse_stray_close_ignored() {
        let doc = parse("<div></span>text</div>");
        let Node::Element(div) = &doc.nodes[0] else {
            panic!("expected element");
        };
        assert_eq!(div.text_content(), "text");
    }

    #[test]
    fn test_parse_unquoted_attribute() {
        let doc = parse("<input type=text disabled>");
        let Node::Element(input) = &doc.nodes[0] else {
            panic!("expected element");
        };
        assert_eq!(input.get_attr("type"), Some("text"));
        assert_eq!(input.get_attr("disabled"), Some(""));
    }

    #[test]
    fn test_parse_gt_inside_quoted_attr() {
        let doc = parse("<div title=\"a > b\">x</div>");
        let Node::Element(div) = &doc.nodes[0] else {
            panic!("expected element");
        };
        assert_eq!(div.get_attr("title"), Some("a > b"));
        assert_eq!(div.text_content(), "x");
    }

    #[test]
    fn test_parse_uppercase_tags_normalized() {
        let doc = parse("<DIV ID=\"x\">y</DIV>");
        let Node::Element(div) = &doc.nodes[0] else {
            panic!("expected element");
        };
        assert_eq!(div.tag, "div");
        // Attribute names keep their case; lookup is exact.
        assert_eq!(div.get_attr("ID"), Some("x"));
    }

    #[test]
    fn test_parse_literal_lt_in_text() {
        let doc = parse("<p>1 < 2</p>");
        let Node::Element(p) = &doc.nodes[0] else {
            panic!("expected element");
        };
        assert_eq!(p.text_content(), "1 < 2");
    }
}
