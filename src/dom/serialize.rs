//! HTML serializer.
//!
//! Escapes text and attribute values on the way out; raw text nodes and
//! `script`/`style` content are emitted verbatim. Boolean attributes
//! (empty value) are written without `="..."`, and void elements get no
//! closing tag.

use super::node::{Document, Element, Node};
use crate::utils::html::{escape, escape_attr, is_void_element};

/// Serialize a document back to an HTML string.
///
/// Emits exactly what the tree holds; the template's whitespace after the
/// doctype survives as a text node, so no separator is synthesized here
/// and rendering previously rendered output is byte-stable.
pub fn serialize(doc: &Document) -> String {
    let mut out = String::new();
    if let Some(doctype) = &doc.doctype {
        out.push_str("<!");
        out.push_str(doctype);
        out.push('>');
    }
    write_nodes(&doc.nodes, &mut out);
    out
}

/// Serialize a single element subtree (used by renderer tests).
pub fn serialize_element(elem: &Element) -> String {
    let mut out = String::new();
    write_element(elem, &mut out);
    out
}

fn write_nodes(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Element(elem) => write_element(elem, out),
            Node::Text(text) => {
                if text.raw {
                    out.push_str(&text.content);
                } else {
                    out.push_str(&escape(&text.content));
                }
            }
            Node::Comment(content) => {
                out.push_str("<!--");
                out.push_str(content);
                out.push_str("-->");
            }
        }
    }
}

fn write_element(elem: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&elem.tag);

    for (name, value) in &elem.attrs {
        out.push(' ');
        out.push_str(name);
        if !value.is_empty() {
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
    }
    out.push('>');

    if is_void_element(&elem.tag) {
        return;
    }

    write_nodes(&elem.children, out);

    out.push_str("</");
    out.push_str(&elem.tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse;

    #[test]
    fn test_serialize_escapes_text() {
        let mut elem = Element::new("p");
        elem.set_text("a < b & c");
        assert_eq!(serialize_element(&elem), "<p>a &lt; b &amp; c</p>");
    }

    #[test]
    fn test_serialize_raw_text_verbatim() {
        let mut elem = Element::new("p");
        elem.set_raw("Open <strong>late</strong>");
        assert_eq!(serialize_element(&elem), "<p>Open <strong>late</strong></p>");
    }

    #[test]
    fn test_serialize_escapes_attrs() {
        let elem = Element::new("a").with_attr("title", "a \"b\" & c");
        assert_eq!(
            serialize_element(&elem),
            "<a title=\"a &quot;b&quot; &amp; c\"></a>"
        );
    }

    #[test]
    fn test_serialize_boolean_attr() {
        let elem = Element::new("input")
            .with_attr("type", "text")
            .with_attr("disabled", "");
        assert_eq!(serialize_element(&elem), "<input type=\"text\" disabled>");
    }

    #[test]
    fn test_serialize_void_element_no_close() {
        let mut div = Element::new("div");
        div.push_elem(Element::new("br"));
        assert_eq!(serialize_element(&div), "<div><br></div>");
    }

    #[test]
    fn test_serialize_doctype() {
        let doc = parse("<!DOCTYPE html><html></html>");
        assert_eq!(serialize(&doc), "<!DOCTYPE html><html></html>");

        let doc = parse("<!DOCTYPE html>\n<html></html>");
        assert_eq!(serialize(&doc), "<!DOCTYPE html>\n<html></html>");
    }

    #[test]
    fn test_reserialize_does_not_grow_output() {
        let input = "<!DOCTYPE html>\n\n<html><body><p>Massage &amp; Spa</p></body></html>";
        let once = serialize(&parse(input));
        let twice = serialize(&parse(&once));

        assert_eq!(once, input);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_roundtrip_preserves_structure() {
        let input = "<!DOCTYPE html>\n<html><head><title>Hi</title></head><body data-page=\"home\"><nav id=\"nav-menu\"></nav><script>let a = 1 < 2;</script></body></html>";
        let once = serialize(&parse(input));
        let twice = serialize(&parse(&once));
        assert_eq!(once, twice);
        assert!(once.contains("data-page=\"home\""));
        assert!(once.contains("1 < 2"));
    }
}
