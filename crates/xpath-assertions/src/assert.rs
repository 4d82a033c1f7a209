//! Direct assertion calls
//!
//! Every assertion builds the matching constraint and runs it through
//! [`Assert::that`], so messages and outcomes are the same as for the
//! constraint facade.

use predicates::Predicate;
use xpath_engine_traits::{Namespaces, Result, XPathDocument, XmlNode};

use crate::constraint::{
    equal_to_xpath_result, matches_xpath_expression, matches_xpath_result_count, XPathConstraint,
};
use crate::expected::Expected;
use crate::reporter::{Failure, FailureReporter, Outcome, PanicReporter};

/// Runs checks and hands failures to a [`FailureReporter`].
///
/// Evaluation errors are never reported as failures; they are returned
/// to the caller unchanged.
#[derive(Debug, Clone, Default)]
pub struct Assert<R = PanicReporter> {
    reporter: R,
}

impl<R: FailureReporter> Assert<R> {
    pub fn new(reporter: R) -> Self {
        Self { reporter }
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    #[track_caller]
    pub fn that<D, C>(&self, document: &D, constraint: &C) -> Result<()>
    where
        D: XPathDocument + ?Sized,
        C: XPathConstraint<D> + ?Sized,
    {
        if let Outcome::Fail(failure) = constraint.check(document)? {
            self.reporter.report(failure);
        }
        Ok(())
    }

    /// Assert an arbitrary predicate over the document, for composed
    /// constraints (`.not()`, `.and()`, `.or()`).
    #[track_caller]
    pub fn predicate<D, P>(&self, document: &D, predicate: &P) -> Result<()>
    where
        D: XPathDocument + ?Sized,
        P: Predicate<D> + ?Sized,
    {
        if predicate.eval(document) {
            return Ok(());
        }
        let mut message = format!(
            "Failed asserting that {} {}.",
            document.to_xml()?,
            predicate
        );
        if let Some(case) = predicate.find_case(false, document) {
            for product in case.products() {
                message.push_str(&format!("\n  {}: {}", product.name(), product.value()));
            }
        }
        self.reporter.report(Failure::new(message));
        Ok(())
    }

    #[track_caller]
    pub fn xpath_match<D>(&self, expression: &str, document: &D, namespaces: &Namespaces) -> Result<()>
    where
        D: XPathDocument + ?Sized,
    {
        self.that(
            document,
            &matches_xpath_expression(expression).with_namespaces(namespaces),
        )
    }

    #[track_caller]
    pub fn xpath_count<D>(
        &self,
        expected_count: usize,
        expression: &str,
        document: &D,
        namespaces: &Namespaces,
    ) -> Result<()>
    where
        D: XPathDocument + ?Sized,
    {
        self.that(
            document,
            &matches_xpath_result_count(expected_count, expression).with_namespaces(namespaces),
        )
    }

    #[track_caller]
    pub fn xpath_equals<D, N>(
        &self,
        expected: impl Into<Expected<N>>,
        expression: &str,
        document: &D,
        namespaces: &Namespaces,
    ) -> Result<()>
    where
        D: XPathDocument + ?Sized,
        N: XmlNode,
    {
        self.that(
            document,
            &equal_to_xpath_result(expected, expression).with_namespaces(namespaces),
        )
    }
}

/// Assert that `expression` selects at least one node of `document`.
///
/// Panics with `Failed asserting that <document> matches expression:
/// <expression>.` otherwise.
#[track_caller]
pub fn assert_xpath_match<D>(expression: &str, document: &D, namespaces: &Namespaces) -> Result<()>
where
    D: XPathDocument + ?Sized,
{
    Assert::new(PanicReporter::new()).xpath_match(expression, document, namespaces)
}

/// Assert that `expression` selects exactly `expected_count` nodes.
#[track_caller]
pub fn assert_xpath_count<D>(
    expected_count: usize,
    expression: &str,
    document: &D,
    namespaces: &Namespaces,
) -> Result<()>
where
    D: XPathDocument + ?Sized,
{
    Assert::new(PanicReporter::new()).xpath_count(expected_count, expression, document, namespaces)
}

/// Assert that the nodes selected by `expression` are structurally equal
/// to `expected`, in order.
#[track_caller]
pub fn assert_xpath_equals<D, N>(
    expected: impl Into<Expected<N>>,
    expression: &str,
    document: &D,
    namespaces: &Namespaces,
) -> Result<()>
where
    D: XPathDocument + ?Sized,
    N: XmlNode,
{
    Assert::new(PanicReporter::new()).xpath_equals(expected, expression, document, namespaces)
}

/// Assert that `predicate` holds for `document`.
#[track_caller]
pub fn assert_that<D, P>(document: &D, predicate: &P) -> Result<()>
where
    D: XPathDocument + ?Sized,
    P: Predicate<D> + ?Sized,
{
    Assert::new(PanicReporter::new()).predicate(document, predicate)
}
