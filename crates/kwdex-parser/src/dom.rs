//! Owned markup tree for one document.
//!
//! The HTML is parsed with ast-grep's tree-sitter grammar and lowered into a
//! flat arena of element and text nodes. Nodes are pushed in pre-order, so a
//! node id doubles as its position in document order and every subtree
//! occupies the contiguous id range `id..end`.
//!
//! tree-sitter drops the whitespace between tokens, so the lowering re-inserts
//! a single-space text node wherever the source had whitespace between two
//! sibling nodes. Text assembly then decodes entities and collapses runs of
//! whitespace.

use std::ops::Range;
use std::path::{Path, PathBuf};

use ast_grep_core::Node;
use ast_grep_language::{LanguageExt, SupportLang};

use crate::error::ParserError;
use crate::text::{decode_entities, normalize_whitespace};

/// Position of a node in document order.
pub type NodeId = usize;

/// An HTML attribute: `(name, optional_value)`.
pub type HtmlAttr = (String, Option<String>);

const ROOT: NodeId = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Lower-cased tag name.
    pub tag: String,
    pub attrs: Vec<HtmlAttr>,
}

impl Element {
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .and_then(|(_, v)| v.as_deref())
    }

    /// Whether the whitespace-separated `class` list contains `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// `h1` through `h6`.
    #[must_use]
    pub fn is_heading(&self) -> bool {
        matches!(self.tag.as_str(), "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    Root,
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone)]
struct DomNode {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// One past the last descendant.
    end: NodeId,
}

/// A parsed document.
#[derive(Debug, Clone)]
pub struct Document {
    path: Option<PathBuf>,
    nodes: Vec<DomNode>,
}

impl Document {
    /// Parse HTML source. Never fails: tree-sitter recovers from malformed
    /// markup and whatever it recognizes ends up in the tree.
    #[must_use]
    pub fn parse(source: &str) -> Self {
        let source = source.strip_prefix('\u{feff}').unwrap_or(source);
        let tree = SupportLang::Html.ast_grep(source);

        let mut builder = Builder {
            source,
            nodes: vec![DomNode {
                data: NodeData::Root,
                parent: None,
                children: Vec::new(),
                end: ROOT + 1,
            }],
        };
        builder.lower_children(&tree.root(), ROOT);
        builder.nodes[ROOT].end = builder.nodes.len();

        Self {
            path: None,
            nodes: builder.nodes,
        }
    }

    /// Read and parse a file.
    ///
    /// # Errors
    /// Returns `ParserError::Io` if the file cannot be read and
    /// `ParserError::Decode` if it is not UTF-8.
    pub fn from_file(path: &Path) -> Result<Self, ParserError> {
        let bytes = std::fs::read(path).map_err(|source| ParserError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let source = String::from_utf8(bytes).map_err(|_| ParserError::Decode {
            path: path.to_path_buf(),
        })?;

        let mut document = Self::parse(&source);
        document.path = Some(path.to_path_buf());
        Ok(document)
    }

    /// The file this document was read from, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    #[must_use]
    pub const fn root(&self) -> NodeId {
        ROOT
    }

    /// Number of nodes, including the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when nothing but the root was recognized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    #[must_use]
    pub fn data(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id).map(|node| &node.data)
    }

    #[must_use]
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match self.data(id)? {
            NodeData::Element(element) => Some(element),
            _ => None,
        }
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id)?.parent
    }

    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id).map_or(&[], |node| node.children.as_slice())
    }

    /// One past the last node of `id`'s subtree.
    #[must_use]
    pub fn end(&self, id: NodeId) -> NodeId {
        self.nodes.get(id).map_or(id, |node| node.end)
    }

    /// Every descendant of `id`, in document order.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Range<NodeId> {
        (id + 1).min(self.end(id))..self.end(id)
    }

    /// Siblings after `id`, in document order.
    pub fn following_siblings(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let siblings = self.parent(id).map_or(&[][..], |parent| self.children(parent));
        siblings.iter().copied().skip_while(move |&s| s != id).skip(1)
    }

    /// Elements whose ids fall inside `range`, in document order.
    pub fn elements_in(
        &self,
        range: Range<NodeId>,
    ) -> impl Iterator<Item = (NodeId, &Element)> + '_ {
        let end = range.end.min(self.nodes.len());
        (range.start..end).filter_map(move |id| self.element(id).map(|element| (id, element)))
    }

    /// First element in `range` matching `predicate`.
    pub fn find_element(
        &self,
        range: Range<NodeId>,
        predicate: impl Fn(&Element) -> bool,
    ) -> Option<NodeId> {
        self.elements_in(range)
            .find(|(_, element)| predicate(element))
            .map(|(id, _)| id)
    }

    /// Normalized text content of `id`.
    #[must_use]
    pub fn text(&self, id: NodeId) -> String {
        self.text_excluding(id, |_, _| false)
    }

    /// Normalized text content of `id`, leaving out every descendant element
    /// (and its subtree) for which `skip` returns true.
    pub fn text_excluding(
        &self,
        id: NodeId,
        skip: impl Fn(NodeId, &Element) -> bool,
    ) -> String {
        let mut raw = String::new();
        if let Some(NodeData::Text(text)) = self.data(id) {
            raw.push_str(text);
        }

        let mut resume_at = 0;
        for node in self.descendants(id) {
            if node < resume_at {
                continue;
            }
            match &self.nodes[node].data {
                NodeData::Text(text) => raw.push_str(text),
                NodeData::Element(element) if skip(node, element) => resume_at = self.end(node),
                NodeData::Element(element) if element.tag == "br" => raw.push(' '),
                _ => {}
            }
        }

        normalize_whitespace(&decode_entities(&raw))
    }
}

struct Builder<'s> {
    source: &'s str,
    nodes: Vec<DomNode>,
}

impl Builder<'_> {
    fn push(&mut self, data: NodeData, parent: NodeId) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(DomNode {
            data,
            parent: Some(parent),
            children: Vec::new(),
            end: id + 1,
        });
        self.nodes[parent].children.push(id);
        id
    }

    fn push_text(&mut self, parent: NodeId, text: &str) {
        self.push(NodeData::Text(text.to_string()), parent);
    }

    fn gap_has_whitespace(&self, from: usize, to: usize) -> bool {
        from < to
            && self
                .source
                .get(from..to)
                .is_some_and(|gap| gap.chars().any(char::is_whitespace))
    }

    fn lower_children<D: ast_grep_core::Doc>(&mut self, node: &Node<D>, parent: NodeId) {
        let mut cursor: Option<usize> = None;

        for child in node.children() {
            let range = child.range();
            if let Some(previous_end) = cursor
                && self.gap_has_whitespace(previous_end, range.start)
            {
                self.push_text(parent, " ");
            }
            cursor = Some(range.end);

            match child.kind().as_ref() {
                "element" => self.lower_element(&child, parent),
                "text" | "entity" => self.push_text(parent, &child.text()),
                // Markup that carries no document text
                "start_tag" | "end_tag" | "self_closing_tag" | "erroneous_end_tag" | "comment"
                | "doctype" | "script_element" | "style_element" => {}
                // Error recovery nodes and anything else: keep what is inside
                _ => self.lower_children(&child, parent),
            }
        }
    }

    fn lower_element<D: ast_grep_core::Doc>(&mut self, node: &Node<D>, parent: NodeId) {
        let Some((tag, attrs)) = tag_info(node) else {
            self.lower_children(node, parent);
            return;
        };

        let id = self.push(NodeData::Element(Element { tag, attrs }), parent);
        self.lower_children(node, id);
        self.nodes[id].end = self.nodes.len();
    }
}

/// Tag name and attributes from an element's `start_tag` or
/// `self_closing_tag`.
fn tag_info<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<(String, Vec<HtmlAttr>)> {
    let tag = node
        .children()
        .find(|c| matches!(c.kind().as_ref(), "start_tag" | "self_closing_tag"))?;
    let name = tag
        .children()
        .find(|c| c.kind().as_ref() == "tag_name")?
        .text()
        .to_ascii_lowercase();
    Some((name, attrs_of(&tag)))
}

fn attrs_of<D: ast_grep_core::Doc>(tag: &Node<D>) -> Vec<HtmlAttr> {
    tag.children()
        .filter(|c| c.kind().as_ref() == "attribute")
        .filter_map(|attr| {
            let name = attr
                .children()
                .find(|c| c.kind().as_ref() == "attribute_name")?
                .text()
                .to_ascii_lowercase();
            let value = attr.children().find_map(|c| match c.kind().as_ref() {
                "attribute_value" => Some(c.text().to_string()),
                "quoted_attribute_value" => c
                    .children()
                    .find(|v| v.kind().as_ref() == "attribute_value")
                    .map(|v| v.text().to_string())
                    .or_else(|| Some(String::new())),
                _ => None,
            });
            Some((name, value))
        })
        .collect()
}
