//! sxd engine adapter for the XPath assertion traits
//!
//! This adapter wraps `sxd-document` (tree) and `sxd-xpath` (XPath 1.0)
//! to implement the xpath-engine-traits interfaces.

pub mod tree;
pub mod xpath;

// Re-export main types
pub use tree::{parse_xml, SxdDocument, SxdNode};

// Re-export key types for convenience
pub use sxd_document::Package;
