//! XPathDocument implementation for sxd-xpath

use sxd_xpath::{Context, Factory, Value};
use xpath_engine_traits::{
    error::{Error, Result},
    xpath::{Namespaces, XPathDocument, XPathValue},
};

use crate::tree::{SxdDocument, SxdNode};

impl<'d> XPathDocument for SxdDocument<'d> {
    fn evaluate_xpath(
        &self,
        expression: &str,
        namespaces: &Namespaces,
    ) -> Result<XPathValue<SxdNode<'d>>> {
        let factory = Factory::new();
        let xpath = factory
            .build(expression)
            .map_err(|e| Error::xpath_compile(e.to_string()))?
            .ok_or_else(|| Error::xpath_compile("empty expression"))?;

        let mut context = Context::new();
        for (prefix, uri) in namespaces.iter() {
            context.set_namespace(prefix, uri);
        }

        let value = xpath
            .evaluate(&context, self.document.root())
            .map_err(|e| Error::xpath_eval(e.to_string()))?;

        Ok(match value {
            Value::Nodeset(nodes) => {
                XPathValue::Nodes(nodes.document_order().into_iter().map(SxdNode).collect())
            }
            Value::Boolean(b) => XPathValue::Boolean(b),
            Value::Number(n) => XPathValue::Number(n),
            Value::String(s) => XPathValue::String(s),
        })
    }
}
