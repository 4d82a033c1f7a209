//! XML tree abstraction traits

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Type of XML node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    /// Document node
    Document,
    /// Element node
    Element,
    /// Attribute node
    Attribute,
    /// Text node
    Text,
    /// Comment node
    Comment,
    /// Processing instruction node
    ProcessingInstruction,
    /// Namespace node
    Namespace,
}

/// A namespace-qualified name. The prefix used in the source document is
/// not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ExpandedName {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub namespace_uri: Option<String>,
    pub local_name: String,
}

impl ExpandedName {
    pub fn new<S: Into<String>>(local_name: S) -> Self {
        Self {
            namespace_uri: None,
            local_name: local_name.into(),
        }
    }

    pub fn with_namespace<U: Into<String>, S: Into<String>>(namespace_uri: U, local_name: S) -> Self {
        Self {
            namespace_uri: Some(namespace_uri.into()),
            local_name: local_name.into(),
        }
    }
}

impl fmt::Display for ExpandedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace_uri {
            Some(uri) => write!(f, "{{{}}}{}", uri, self.local_name),
            None => f.write_str(&self.local_name),
        }
    }
}

/// Read-only view of a single node.
///
/// Node handles are expected to be cheap to clone and to carry whatever
/// they need to reach their children, so nodes from different documents
/// can be compared with each other.
pub trait XmlNode: Clone + Debug {
    /// Get the type of the node
    fn node_type(&self) -> NodeType;

    /// Expanded name of elements, attributes, processing instructions
    /// (target) and namespace nodes (prefix)
    fn name(&self) -> Option<ExpandedName>;

    /// Attributes of an element node; empty for every other node type
    fn attributes(&self) -> Vec<(ExpandedName, String)>;

    /// Child nodes of document and element nodes, in document order
    fn children(&self) -> Vec<Self>;

    /// Own value of text, comment, attribute, processing instruction and
    /// namespace nodes
    fn value(&self) -> Option<String>;
}

/// A parsed document the assertions can run against.
pub trait XmlDocument {
    /// Type representing a node handle in this document
    type Node: XmlNode;

    /// The document (root) node
    fn root(&self) -> Self::Node;

    /// Serialize the whole document to an XML string
    fn to_xml(&self) -> Result<String>;

    /// Get the document element (root element)
    fn document_element(&self) -> Result<Self::Node> {
        self.root()
            .children()
            .into_iter()
            .find(|node| node.node_type() == NodeType::Element)
            .ok_or_else(|| Error::NodeAccess("Document has no root element".to_string()))
    }
}
