//! Expected values for equality checks

use xpath_engine_traits::XmlNode;

/// The nodes an XPath result is compared against: one node or an
/// ordered list of nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Expected<N> {
    Node(N),
    Nodes(Vec<N>),
}

impl<N: XmlNode> Expected<N> {
    /// Normalize into a node sequence. A single node becomes a
    /// one-element list; a list keeps its order.
    pub fn into_nodes(self) -> Vec<N> {
        match self {
            Expected::Node(node) => vec![node],
            Expected::Nodes(nodes) => nodes,
        }
    }
}

impl<N: XmlNode> From<Vec<N>> for Expected<N> {
    fn from(nodes: Vec<N>) -> Self {
        Expected::Nodes(nodes)
    }
}

impl<N: XmlNode> From<&[N]> for Expected<N> {
    fn from(nodes: &[N]) -> Self {
        Expected::Nodes(nodes.to_vec())
    }
}

#[cfg(feature = "sxd")]
impl<'d> From<sxd_adapter::SxdNode<'d>> for Expected<sxd_adapter::SxdNode<'d>> {
    fn from(node: sxd_adapter::SxdNode<'d>) -> Self {
        Expected::Node(node)
    }
}
