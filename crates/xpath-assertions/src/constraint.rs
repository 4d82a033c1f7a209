//! Reusable XPath constraints
//!
//! Each constraint captures an expression, its namespace bindings and
//! the expected value, and is evaluated later against any document. They
//! implement [`predicates::Predicate`], so they compose with `.not()`,
//! `.and()` and `.or()` and can be passed to
//! [`assert_that`](crate::assert_that).

use predicates::reflection::{Case, Parameter, PredicateReflection, Product};
use predicates::Predicate;
use std::fmt;
use tracing::warn;
use xpath_engine_traits::{Namespaces, Result, XPathDocument, XmlNode};

use crate::compare::{render_difference, snapshots_equal, NodeSnapshot};
use crate::evaluator::{evaluate, evaluate_value};
use crate::expected::Expected;
use crate::reporter::{Failure, Outcome};

/// A check that can be run against a document.
///
/// The `Display` implementation is the human readable description used
/// when the constraint is nested in other predicates.
pub trait XPathConstraint<D: XPathDocument + ?Sized>: fmt::Display {
    /// Run the check. Evaluation errors are returned as `Err`, a check
    /// that does not hold as `Outcome::Fail`.
    fn check(&self, document: &D) -> Result<Outcome>;
}

#[derive(Debug, Clone, PartialEq)]
struct Query {
    expression: String,
    namespaces: Namespaces,
}

impl Query {
    fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            namespaces: Namespaces::new(),
        }
    }
}

/// Holds when the expression selects at least one node, or evaluates to
/// a true scalar.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchesXPathExpression {
    query: Query,
}

/// Holds when the expression selects exactly the expected number of
/// nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchesXPathResultCount {
    expected: usize,
    query: Query,
}

/// Holds when the selected nodes are structurally equal to the expected
/// nodes, position by position.
#[derive(Debug, Clone, PartialEq)]
pub struct EqualToXPathResult {
    expected: Vec<NodeSnapshot>,
    query: Query,
}

pub fn matches_xpath_expression(expression: impl Into<String>) -> MatchesXPathExpression {
    MatchesXPathExpression {
        query: Query::new(expression),
    }
}

pub fn matches_xpath_result_count(
    expected: usize,
    expression: impl Into<String>,
) -> MatchesXPathResultCount {
    MatchesXPathResultCount {
        expected,
        query: Query::new(expression),
    }
}

/// The expected nodes are captured immediately, so the constraint does
/// not borrow the document they came from.
pub fn equal_to_xpath_result<N: XmlNode>(
    expected: impl Into<Expected<N>>,
    expression: impl Into<String>,
) -> EqualToXPathResult {
    EqualToXPathResult {
        expected: NodeSnapshot::capture_all(&expected.into().into_nodes()),
        query: Query::new(expression),
    }
}

macro_rules! query_accessors {
    ($($constraint:ty),* $(,)?) => {
        $(
            impl $constraint {
                /// Replace the namespace bindings used for evaluation
                pub fn with_namespaces(mut self, namespaces: impl Into<Namespaces>) -> Self {
                    self.query.namespaces = namespaces.into();
                    self
                }

                /// Bind one more prefix
                pub fn with_namespace(mut self, prefix: &str, uri: &str) -> Self {
                    self.query.namespaces.insert(prefix, uri);
                    self
                }

                pub fn expression(&self) -> &str {
                    &self.query.expression
                }

                pub fn namespaces(&self) -> &Namespaces {
                    &self.query.namespaces
                }
            }
        )*
    };
}

query_accessors!(MatchesXPathExpression, MatchesXPathResultCount, EqualToXPathResult);

impl MatchesXPathResultCount {
    pub fn expected(&self) -> usize {
        self.expected
    }
}

impl EqualToXPathResult {
    pub fn expected(&self) -> &[NodeSnapshot] {
        &self.expected
    }
}

impl fmt::Display for MatchesXPathExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "matches expression: {}", self.query.expression)
    }
}

impl fmt::Display for MatchesXPathResultCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "matches expected count {} for expression: {}",
            self.expected, self.query.expression
        )
    }
}

impl fmt::Display for EqualToXPathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "is equal to the nodes matched by expression: {}",
            self.query.expression
        )
    }
}

impl<D: XPathDocument + ?Sized> XPathConstraint<D> for MatchesXPathExpression {
    fn check(&self, document: &D) -> Result<Outcome> {
        let value = evaluate_value(document, &self.query.expression, &self.query.namespaces)?;
        if value.effective_boolean() {
            return Ok(Outcome::Pass);
        }
        Ok(Outcome::Fail(Failure::new(format!(
            "Failed asserting that {} {}.",
            document.to_xml()?,
            self
        ))))
    }
}

impl<D: XPathDocument + ?Sized> XPathConstraint<D> for MatchesXPathResultCount {
    fn check(&self, document: &D) -> Result<Outcome> {
        let actual = evaluate(document, &self.query.expression, &self.query.namespaces)?.len();
        if actual == self.expected {
            return Ok(Outcome::Pass);
        }
        Ok(Outcome::Fail(Failure::new(format!(
            "Failed asserting that actual node count {} matches expected count {}.",
            actual, self.expected
        ))))
    }
}

impl<D: XPathDocument + ?Sized> XPathConstraint<D> for EqualToXPathResult {
    fn check(&self, document: &D) -> Result<Outcome> {
        let actual = evaluate(document, &self.query.expression, &self.query.namespaces)?;
        let actual = NodeSnapshot::capture_all(&actual);
        if snapshots_equal(&self.expected, &actual) {
            return Ok(Outcome::Pass);
        }
        Ok(Outcome::Fail(
            Failure::new("Failed asserting that two DOM structures are equal.")
                .with_detail(render_difference(&self.expected, &actual)),
        ))
    }
}

/// `Predicate::eval` must not fail; evaluation errors count as "does not
/// hold".
fn holds<D, C>(constraint: &C, document: &D) -> bool
where
    D: XPathDocument + ?Sized,
    C: XPathConstraint<D>,
{
    match constraint.check(document) {
        Ok(outcome) => outcome.is_pass(),
        Err(err) => {
            warn!(constraint = %constraint, error = %err, "xpath constraint could not be evaluated");
            false
        }
    }
}

fn case<'a>(
    predicate: &'a dyn PredicateReflection,
    expected: bool,
    result: bool,
    products: Vec<Product>,
) -> Option<Case<'a>> {
    if result != expected {
        return None;
    }
    Some(
        products
            .into_iter()
            .fold(Case::new(Some(predicate), result), Case::add_product),
    )
}

fn node_count<D>(document: &D, query: &Query) -> Product
where
    D: XPathDocument + ?Sized,
{
    match evaluate(document, &query.expression, &query.namespaces) {
        Ok(nodes) => Product::new("actual count", nodes.len()),
        Err(err) => Product::new("error", err.to_string()),
    }
}

impl PredicateReflection for MatchesXPathExpression {
    fn parameters<'a>(&'a self) -> Box<dyn Iterator<Item = Parameter<'a>> + 'a> {
        Box::new(std::iter::once(Parameter::new("expression", &self.query.expression)))
    }
}

impl PredicateReflection for MatchesXPathResultCount {
    fn parameters<'a>(&'a self) -> Box<dyn Iterator<Item = Parameter<'a>> + 'a> {
        Box::new(
            [
                Parameter::new("expression", &self.query.expression),
                Parameter::new("expected count", &self.expected),
            ]
            .into_iter(),
        )
    }
}

impl PredicateReflection for EqualToXPathResult {
    fn parameters<'a>(&'a self) -> Box<dyn Iterator<Item = Parameter<'a>> + 'a> {
        Box::new(std::iter::once(Parameter::new("expression", &self.query.expression)))
    }
}

impl<D: XPathDocument + ?Sized> Predicate<D> for MatchesXPathExpression {
    fn eval(&self, document: &D) -> bool {
        holds(self, document)
    }

    fn find_case<'a>(&'a self, expected: bool, document: &D) -> Option<Case<'a>> {
        let result = self.eval(document);
        let products = match evaluate_value(document, &self.query.expression, &self.query.namespaces) {
            Ok(value) => vec![Product::new("result kind", value.kind())],
            Err(err) => vec![Product::new("error", err.to_string())],
        };
        case(self, expected, result, products)
    }
}

impl<D: XPathDocument + ?Sized> Predicate<D> for MatchesXPathResultCount {
    fn eval(&self, document: &D) -> bool {
        holds(self, document)
    }

    fn find_case<'a>(&'a self, expected: bool, document: &D) -> Option<Case<'a>> {
        let result = self.eval(document);
        case(self, expected, result, vec![node_count(document, &self.query)])
    }
}

impl<D: XPathDocument + ?Sized> Predicate<D> for EqualToXPathResult {
    fn eval(&self, document: &D) -> bool {
        holds(self, document)
    }

    fn find_case<'a>(&'a self, expected: bool, document: &D) -> Option<Case<'a>> {
        let result = self.eval(document);
        let products = vec![
            Product::new("expected count", self.expected.len()),
            node_count(document, &self.query),
        ];
        case(self, expected, result, products)
    }
}
