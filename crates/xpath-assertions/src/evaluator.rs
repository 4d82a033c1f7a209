//! Shared XPath evaluation used by every check

use tracing::debug;
use xpath_engine_traits::{Namespaces, Result, XPathDocument, XPathValue};

/// Evaluate `expression` against `document` and return the selected
/// nodes in document order.
///
/// Nothing matching is an empty vector. Scalar results (`count(...)`,
/// comparisons, strings) are rejected with `Error::TypeConversion`.
pub fn evaluate<D>(document: &D, expression: &str, namespaces: &Namespaces) -> Result<Vec<D::Node>>
where
    D: XPathDocument + ?Sized,
{
    evaluate_value(document, expression, namespaces)?.into_nodes()
}

/// Evaluate `expression` against `document`, keeping scalar results.
pub fn evaluate_value<D>(
    document: &D,
    expression: &str,
    namespaces: &Namespaces,
) -> Result<XPathValue<D::Node>>
where
    D: XPathDocument + ?Sized,
{
    match document.evaluate_xpath(expression, namespaces) {
        Ok(value) => {
            let size = match &value {
                XPathValue::Nodes(nodes) => nodes.len(),
                _ => 1,
            };
            debug!(
                expression,
                namespaces = namespaces.len(),
                kind = value.kind(),
                size,
                "evaluated xpath expression"
            );
            Ok(value)
        }
        Err(err) => {
            debug!(expression, error = %err, "xpath expression failed");
            Err(err)
        }
    }
}
