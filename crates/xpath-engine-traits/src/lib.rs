//! Core trait abstractions for XML trees and XPath evaluation.
//!
//! This crate defines the traits an XML engine must implement to be used
//! by the XPath assertion helpers. It has no dependency on any engine.

pub mod error;
pub mod tree;
pub mod xpath;

pub use error::{Error, Result};
pub use tree::{ExpandedName, NodeType, XmlDocument, XmlNode};
pub use xpath::{Namespaces, XPathDocument, XPathValue};
