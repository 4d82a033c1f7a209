//! XPath assertions for XML documents.
//!
//! Three checks are available, each in two shapes:
//!
//! | check | assertion | constraint |
//! |-------|-----------|------------|
//! | expression matches | [`assert_xpath_match`] | [`matches_xpath_expression`] |
//! | node count | [`assert_xpath_count`] | [`matches_xpath_result_count`] |
//! | structural equality | [`assert_xpath_equals`] | [`equal_to_xpath_result`] |
//!
//! Assertions panic with a descriptive message when the check does not
//! hold. Constraints are [`predicates::Predicate`]s that can be combined
//! and checked with [`assert_that`].
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use xpath_assertions::prelude::*;
//! use xpath_assertions::sxd::{parse_xml, SxdDocument};
//!
//! let package = parse_xml(r#"<root><child/><x:child xmlns:x="urn:dummy"/></root>"#)?;
//! let doc = SxdDocument::new(package.as_document());
//!
//! assert_xpath_match!("//child", &doc);
//! assert_xpath_count!(2, "//child|//x:child", &doc, [("x", "urn:dummy")]);
//! assert_that(&doc, &matches_xpath_expression("//missing").not())?;
//! ```

pub mod assert;
pub mod compare;
pub mod constraint;
pub mod evaluator;
pub mod expected;
pub mod reporter;

pub use assert::{assert_that, assert_xpath_count, assert_xpath_equals, assert_xpath_match, Assert};
pub use compare::{node_lists_equal, nodes_equal, NodeSnapshot};
pub use constraint::{
    equal_to_xpath_result, matches_xpath_expression, matches_xpath_result_count,
    EqualToXPathResult, MatchesXPathExpression, MatchesXPathResultCount, XPathConstraint,
};
pub use evaluator::{evaluate, evaluate_value};
pub use expected::Expected;
pub use reporter::{CollectingReporter, Failure, FailureReporter, Outcome, PanicReporter};

pub use predicates;
pub use xpath_engine_traits::{
    Error, ExpandedName, Namespaces, NodeType, Result, XPathDocument, XPathValue, XmlDocument,
    XmlNode,
};

#[cfg(feature = "sxd")]
pub use sxd_adapter as sxd;

/// Everything a test module usually needs
pub mod prelude {
    pub use crate::{
        assert_that, assert_xpath_count, assert_xpath_equals, assert_xpath_match,
        equal_to_xpath_result, matches_xpath_expression, matches_xpath_result_count, Expected,
        Namespaces, XmlDocument, XmlNode,
    };
    pub use predicates::prelude::{Predicate, PredicateBooleanExt};
}

/// Panicking form of [`assert_xpath_match`](fn@crate::assert_xpath_match);
/// the namespace bindings are optional.
///
/// ```rust,ignore
/// assert_xpath_match!("//child", &doc);
/// assert_xpath_match!("//x:child", &doc, [("x", "urn:dummy")]);
/// ```
#[macro_export]
macro_rules! assert_xpath_match {
    ($expression:expr, $document:expr $(,)?) => {
        $crate::assert_xpath_match!($expression, $document, $crate::Namespaces::new())
    };
    ($expression:expr, $document:expr, $namespaces:expr $(,)?) => {
        if let ::core::result::Result::Err(err) = $crate::assert::assert_xpath_match(
            $expression,
            $document,
            &$crate::Namespaces::from($namespaces),
        ) {
            ::core::panic!("xpath expression could not be evaluated: {}", err);
        }
    };
}

/// Panicking form of [`assert_xpath_count`](fn@crate::assert_xpath_count).
#[macro_export]
macro_rules! assert_xpath_count {
    ($expected:expr, $expression:expr, $document:expr $(,)?) => {
        $crate::assert_xpath_count!($expected, $expression, $document, $crate::Namespaces::new())
    };
    ($expected:expr, $expression:expr, $document:expr, $namespaces:expr $(,)?) => {
        if let ::core::result::Result::Err(err) = $crate::assert::assert_xpath_count(
            $expected,
            $expression,
            $document,
            &$crate::Namespaces::from($namespaces),
        ) {
            ::core::panic!("xpath expression could not be evaluated: {}", err);
        }
    };
}

/// Panicking form of [`assert_xpath_equals`](fn@crate::assert_xpath_equals).
#[macro_export]
macro_rules! assert_xpath_equals {
    ($expected:expr, $expression:expr, $document:expr $(,)?) => {
        $crate::assert_xpath_equals!($expected, $expression, $document, $crate::Namespaces::new())
    };
    ($expected:expr, $expression:expr, $document:expr, $namespaces:expr $(,)?) => {
        if let ::core::result::Result::Err(err) = $crate::assert::assert_xpath_equals(
            $expected,
            $expression,
            $document,
            &$crate::Namespaces::from($namespaces),
        ) {
            ::core::panic!("xpath expression could not be evaluated: {}", err);
        }
    };
}
