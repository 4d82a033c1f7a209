//! Structural comparison of DOM nodes

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::trace;
use xpath_engine_traits::{NodeType, XmlNode};

/// Owned, engine independent copy of a node and its subtree.
///
/// Two nodes are structurally equal iff their snapshots are equal:
/// same node type, same expanded name (prefixes are ignored), same
/// attribute set regardless of order, same own value and pairwise equal
/// children in order.
///
/// Adjacent text children are merged into one, so text split by the
/// parser at entity references or CDATA sections compares by content.
/// Text children that are empty or whitespace only are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSnapshot {
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSnapshot>,
}

impl NodeSnapshot {
    pub fn capture<N: XmlNode>(node: &N) -> Self {
        Self {
            node_type: node.node_type(),
            name: node.name().map(|name| name.to_string()),
            attributes: node
                .attributes()
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
            value: node.value(),
            children: capture_children(node),
        }
    }

    pub fn capture_all<N: XmlNode>(nodes: &[N]) -> Vec<Self> {
        nodes.iter().map(NodeSnapshot::capture).collect()
    }
}

fn capture_children<N: XmlNode>(node: &N) -> Vec<NodeSnapshot> {
    let mut children: Vec<NodeSnapshot> = Vec::new();
    for child in node.children() {
        let snapshot = NodeSnapshot::capture(&child);
        if snapshot.node_type == NodeType::Text {
            if let Some(previous) = children
                .last_mut()
                .filter(|previous| previous.node_type == NodeType::Text)
            {
                let text = snapshot.value.unwrap_or_default();
                previous.value.get_or_insert_with(String::new).push_str(&text);
                continue;
            }
        }
        children.push(snapshot);
    }
    children.retain(|child| child.node_type != NodeType::Text || !is_blank(child.value.as_deref()));
    children
}

fn is_blank(text: Option<&str>) -> bool {
    text.map_or(true, |text| {
        text.chars().all(|c| matches!(c, ' ' | '\t' | '\n' | '\r'))
    })
}

/// Deep equality of two nodes, possibly from different documents or
/// engines.
pub fn nodes_equal<A: XmlNode, B: XmlNode>(a: &A, b: &B) -> bool {
    NodeSnapshot::capture(a) == NodeSnapshot::capture(b)
}

/// Positional comparison of two snapshot lists. Order is significant.
pub fn snapshots_equal(expected: &[NodeSnapshot], actual: &[NodeSnapshot]) -> bool {
    if expected.len() != actual.len() {
        trace!(
            expected = expected.len(),
            actual = actual.len(),
            "node lists differ in length"
        );
        return false;
    }
    match expected.iter().zip(actual).position(|(e, a)| e != a) {
        Some(position) => {
            trace!(
                position,
                expected = ?expected[position].node_type,
                actual = ?actual[position].node_type,
                "first differing node"
            );
            false
        }
        None => true,
    }
}

/// Positional deep equality of two node lists.
pub fn node_lists_equal<A: XmlNode, B: XmlNode>(expected: &[A], actual: &[B]) -> bool {
    snapshots_equal(
        &NodeSnapshot::capture_all(expected),
        &NodeSnapshot::capture_all(actual),
    )
}

/// JSON rendering of both sides of a failed comparison
pub(crate) fn render_difference(expected: &[NodeSnapshot], actual: &[NodeSnapshot]) -> String {
    #[derive(Serialize)]
    struct Difference<'a> {
        expected: &'a [NodeSnapshot],
        actual: &'a [NodeSnapshot],
    }

    serde_json::to_string_pretty(&Difference { expected, actual })
        .unwrap_or_else(|e| format!("<unable to render nodes: {e}>"))
}
