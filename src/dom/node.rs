//! Document tree types and mutators.
//!
//! Text content is stored unescaped; escaping happens at serialization.
//! `Text::raw` marks markup strings that must be emitted verbatim, used
//! only for trusted first-party fields (address lines, hours note, map
//! label) and for `script`/`style` content.

use rustc_hash::FxHashSet;

/// A parsed HTML document: optional doctype plus top-level nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Doctype declaration content without the `<!` and `>`, e.g. `DOCTYPE html`.
    pub doctype: Option<String>,
    pub nodes: Vec<Node>,
}

/// One node in the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(Text),
    Comment(String),
}

/// A text node. `raw` text is serialized verbatim; everything else is escaped.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub content: String,
    pub raw: bool,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            raw: false,
        }
    }

    pub fn raw(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            raw: true,
        }
    }
}

/// An element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    /// Attributes in source order; values stored unescaped.
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder: add an attribute.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Builder: add a `class` attribute.
    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.with_attr("class", class)
    }

    /// Builder: add a single escaped text child.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.push_text(text);
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing any existing value.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(attr) => attr.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.get_attr("id")
    }

    /// Replace all children with a single escaped text node.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children = vec![Node::Text(Text::new(text))];
    }

    /// Replace all children with a single raw markup node (trusted content).
    pub fn set_raw(&mut self, markup: impl Into<String>) {
        self.children = vec![Node::Text(Text::raw(markup))];
    }

    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    pub fn push_elem(&mut self, elem: Element) {
        self.children.push(Node::Element(elem));
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        self.children.push(Node::Text(Text::new(text)));
    }

    /// Collect the concatenated text content of this subtree (escaped nodes only).
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(t) => out.push_str(&t.content),
            Node::Element(e) => collect_text(&e.children, out),
            Node::Comment(_) => {}
        }
    }
}

impl Document {
    /// Find the first element with the given id, depth-first.
    pub fn element_by_id(&mut self, id: &str) -> Option<&mut Element> {
        find_by_id_mut(&mut self.nodes, id)
    }

    /// Immutable lookup by id (first match, depth-first).
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        find_by_id(&self.nodes, id)
    }

    /// Read the page marker: the `data-page` attribute on `<body>`.
    pub fn page_marker(&self) -> Option<&str> {
        find_by_tag(&self.nodes, "body").and_then(|body| body.get_attr("data-page"))
    }

    /// Ids that appear more than once. Targeting requires ids to be
    /// unique per document; duplicates are surfaced by `pagoda check`.
    pub fn duplicate_ids(&self) -> Vec<String> {
        let mut seen = FxHashSet::default();
        let mut dupes = Vec::new();
        collect_duplicate_ids(&self.nodes, &mut seen, &mut dupes);
        dupes
    }
}

fn find_by_id_mut<'a>(nodes: &'a mut [Node], id: &str) -> Option<&'a mut Element> {
    for node in nodes {
        if let Node::Element(elem) = node {
            if elem.id() == Some(id) {
                return Some(elem);
            }
            if let Some(found) = find_by_id_mut(&mut elem.children, id) {
                return Some(found);
            }
        }
    }
    None
}

fn find_by_id<'a>(nodes: &'a [Node], id: &str) -> Option<&'a Element> {
    for node in nodes {
        if let Node::Element(elem) = node {
            if elem.id() == Some(id) {
                return Some(elem);
            }
            if let Some(found) = find_by_id(&elem.children, id) {
                return Some(found);
            }
        }
    }
    None
}

fn find_by_tag<'a>(nodes: &'a [Node], tag: &str) -> Option<&'a Element> {
    for node in nodes {
        if let Node::Element(elem) = node {
            if elem.tag.eq_ignore_ascii_case(tag) {
                return Some(elem);
            }
            if let Some(found) = find_by_tag(&elem.children, tag) {
                return Some(found);
            }
        }
    }
    None
}

fn collect_duplicate_ids(nodes: &[Node], seen: &mut FxHashSet<String>, dupes: &mut Vec<String>) {
    for node in nodes {
        if let Node::Element(elem) = node {
            if let Some(id) = elem.id()
                && !seen.insert(id.to_string())
                && !dupes.iter().any(|d| d == id)
            {
                dupes.push(id.to_string());
            }
            collect_duplicate_ids(&elem.children, seen, dupes);
        }
    }
}
