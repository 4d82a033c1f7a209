//! XPath evaluation abstraction

use crate::error::{Error, Result};
use crate::tree::XmlDocument;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

/// Prefix to namespace URI bindings registered for one evaluation.
///
/// Bindings are kept sorted by prefix so they are registered in a stable
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Namespaces(BTreeMap<String, String>);

impl Namespaces {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a binding, builder style
    pub fn with<P: Into<String>, U: Into<String>>(mut self, prefix: P, uri: U) -> Self {
        self.insert(prefix, uri);
        self
    }

    /// Add a binding, returning the URI previously bound to `prefix`
    pub fn insert<P: Into<String>, U: Into<String>>(&mut self, prefix: P, uri: U) -> Option<String> {
        self.0.insert(prefix.into(), uri.into())
    }

    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.0.get(prefix).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(prefix, uri)| (prefix.as_str(), uri.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<P: Into<String>, U: Into<String>> FromIterator<(P, U)> for Namespaces {
    fn from_iter<I: IntoIterator<Item = (P, U)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(prefix, uri)| (prefix.into(), uri.into()))
                .collect(),
        )
    }
}

impl<P: Into<String>, U: Into<String>, const N: usize> From<[(P, U); N]> for Namespaces {
    fn from(bindings: [(P, U); N]) -> Self {
        bindings.into_iter().collect()
    }
}

impl From<&Namespaces> for Namespaces {
    fn from(namespaces: &Namespaces) -> Self {
        namespaces.clone()
    }
}

impl<'a> IntoIterator for &'a Namespaces {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Result of evaluating an XPath expression
#[derive(Debug, Clone, PartialEq)]
pub enum XPathValue<N> {
    /// Selected nodes, in document order
    Nodes(Vec<N>),
    Boolean(bool),
    Number(f64),
    String(String),
}

impl<N> XPathValue<N> {
    /// XPath 1.0 `boolean()` conversion
    pub fn effective_boolean(&self) -> bool {
        match self {
            XPathValue::Nodes(nodes) => !nodes.is_empty(),
            XPathValue::Boolean(b) => *b,
            XPathValue::Number(n) => *n != 0.0 && !n.is_nan(),
            XPathValue::String(s) => !s.is_empty(),
        }
    }

    /// Unwrap a node set, rejecting scalar results
    pub fn into_nodes(self) -> Result<Vec<N>> {
        match self {
            XPathValue::Nodes(nodes) => Ok(nodes),
            other => Err(Error::type_conversion(format!(
                "expected a node set, got {}",
                other.kind()
            ))),
        }
    }

    /// Name of the value kind, for messages
    pub fn kind(&self) -> &'static str {
        match self {
            XPathValue::Nodes(_) => "node set",
            XPathValue::Boolean(_) => "boolean",
            XPathValue::Number(_) => "number",
            XPathValue::String(_) => "string",
        }
    }
}

/// Trait for documents that can evaluate XPath expressions against
/// themselves.
///
/// Note: This trait does not require Send + Sync as most XML
/// libraries use shared interior references for their trees.
pub trait XPathDocument: XmlDocument {
    /// Evaluate `expression` with the document root as context node,
    /// after registering every binding in `namespaces`.
    fn evaluate_xpath(
        &self,
        expression: &str,
        namespaces: &Namespaces,
    ) -> Result<XPathValue<Self::Node>>;
}
