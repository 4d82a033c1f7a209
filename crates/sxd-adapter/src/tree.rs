//! XmlDocument / XmlNode implementation for sxd-document

use std::fmt;
use sxd_document::{dom, writer, Package, QName};
use sxd_xpath::nodeset::Node;
use xpath_engine_traits::{
    error::{Error, Result},
    tree::{ExpandedName, NodeType, XmlDocument, XmlNode},
};

/// Parse an XML string into an sxd package.
///
/// The package owns the tree; borrow it with [`SxdDocument::new`] via
/// `package.as_document()`.
pub fn parse_xml(xml: &str) -> Result<Package> {
    sxd_document::parser::parse(xml).map_err(|e| Error::xml_parse(format!("{:?}", e)))
}

/// Borrowed view of a parsed sxd document
#[derive(Clone, Copy)]
pub struct SxdDocument<'d> {
    pub(crate) document: dom::Document<'d>,
}

impl fmt::Debug for SxdDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SxdDocument").finish_non_exhaustive()
    }
}

impl<'d> SxdDocument<'d> {
    pub fn new(document: dom::Document<'d>) -> Self {
        Self { document }
    }

    /// Get the underlying sxd document
    pub fn document(&self) -> dom::Document<'d> {
        self.document
    }
}

impl<'d> From<dom::Document<'d>> for SxdDocument<'d> {
    fn from(document: dom::Document<'d>) -> Self {
        Self::new(document)
    }
}

impl<'d> XmlDocument for SxdDocument<'d> {
    type Node = SxdNode<'d>;

    fn root(&self) -> Self::Node {
        SxdNode(Node::Root(self.document.root()))
    }

    fn to_xml(&self) -> Result<String> {
        let mut buffer = Vec::new();
        writer::format_document(&self.document, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| Error::Serialize(e.to_string()))
    }
}

/// Handle to any node of an sxd document.
///
/// Nodes of different documents can be compared structurally; identity
/// is available through `PartialEq`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SxdNode<'d>(pub(crate) Node<'d>);

impl<'d> SxdNode<'d> {
    /// Get the underlying XPath node
    pub fn inner(&self) -> Node<'d> {
        self.0
    }

    /// XPath string value of the node
    pub fn string_value(&self) -> String {
        self.0.string_value()
    }
}

impl<'d> From<Node<'d>> for SxdNode<'d> {
    fn from(node: Node<'d>) -> Self {
        SxdNode(node)
    }
}

impl<'d> From<dom::Element<'d>> for SxdNode<'d> {
    fn from(element: dom::Element<'d>) -> Self {
        SxdNode(Node::Element(element))
    }
}

fn expanded(name: QName<'_>) -> ExpandedName {
    ExpandedName {
        namespace_uri: name.namespace_uri().map(str::to_string),
        local_name: name.local_part().to_string(),
    }
}

impl<'d> XmlNode for SxdNode<'d> {
    fn node_type(&self) -> NodeType {
        match self.0 {
            Node::Root(_) => NodeType::Document,
            Node::Element(_) => NodeType::Element,
            Node::Attribute(_) => NodeType::Attribute,
            Node::Text(_) => NodeType::Text,
            Node::Comment(_) => NodeType::Comment,
            Node::Namespace(_) => NodeType::Namespace,
            Node::ProcessingInstruction(_) => NodeType::ProcessingInstruction,
        }
    }

    fn name(&self) -> Option<ExpandedName> {
        match self.0 {
            Node::Element(element) => Some(expanded(element.name())),
            Node::Attribute(attr) => Some(expanded(attr.name())),
            Node::ProcessingInstruction(pi) => Some(ExpandedName::new(pi.target())),
            Node::Namespace(ns) => Some(ExpandedName::new(ns.prefix())),
            Node::Root(_) | Node::Text(_) | Node::Comment(_) => None,
        }
    }

    fn attributes(&self) -> Vec<(ExpandedName, String)> {
        match self.0 {
            Node::Element(element) => element
                .attributes()
                .into_iter()
                .map(|attr| (expanded(attr.name()), attr.value().to_string()))
                .collect(),
            _ => Vec::new(),
        }
    }

    fn children(&self) -> Vec<Self> {
        match self.0 {
            Node::Root(root) => root
                .children()
                .into_iter()
                .map(|child| match child {
                    dom::ChildOfRoot::Element(e) => SxdNode(Node::Element(e)),
                    dom::ChildOfRoot::Comment(c) => SxdNode(Node::Comment(c)),
                    dom::ChildOfRoot::ProcessingInstruction(pi) => {
                        SxdNode(Node::ProcessingInstruction(pi))
                    }
                })
                .collect(),
            Node::Element(element) => element
                .children()
                .into_iter()
                .map(|child| match child {
                    dom::ChildOfElement::Element(e) => SxdNode(Node::Element(e)),
                    dom::ChildOfElement::Text(t) => SxdNode(Node::Text(t)),
                    dom::ChildOfElement::Comment(c) => SxdNode(Node::Comment(c)),
                    dom::ChildOfElement::ProcessingInstruction(pi) => {
                        SxdNode(Node::ProcessingInstruction(pi))
                    }
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    fn value(&self) -> Option<String> {
        match self.0 {
            Node::Text(text) => Some(text.text().to_string()),
            Node::Comment(comment) => Some(comment.text().to_string()),
            Node::Attribute(attr) => Some(attr.value().to_string()),
            Node::ProcessingInstruction(pi) => pi.value().map(str::to_string),
            Node::Namespace(ns) => Some(ns.uri().to_string()),
            Node::Root(_) | Node::Element(_) => None,
        }
    }
}
