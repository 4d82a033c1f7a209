//! Tests for the constraint facade and its predicate integration

use rstest::rstest;
use xpath_assertions::prelude::*;
use xpath_assertions::sxd::{parse_xml, Package, SxdDocument};
use xpath_assertions::{Assert, CollectingReporter, Outcome, XPathConstraint};

const XML: &str = r#"<root><child/><x:child xmlns:x="urn:dummy"/></root>"#;

fn package() -> Package {
    parse_xml(XML).unwrap()
}

#[test]
fn assert_xpath_match_success() {
    let package = package();
    let doc = SxdDocument::new(package.as_document());
    assert_that(&doc, &matches_xpath_expression("//child")).unwrap();
}

#[test]
fn assert_xpath_count_success() {
    let package = package();
    let doc = SxdDocument::new(package.as_document());
    assert_that(&doc, &matches_xpath_result_count(1, "//child")).unwrap();
}

#[test]
fn assert_xpath_equals_success() {
    let expected_package = package();
    let expected_doc = SxdDocument::new(expected_package.as_document());
    let expected = expected_doc.document_element().unwrap().children()[0];

    let package = package();
    let doc = SxdDocument::new(package.as_document());
    assert_that(&doc, &equal_to_xpath_result(expected, "//child")).unwrap();
}

#[test]
fn assert_xpath_equals_with_namespace_success() {
    let expected_package = package();
    let expected_doc = SxdDocument::new(expected_package.as_document());
    let expected = expected_doc.document_element().unwrap().children();

    let package = package();
    let doc = SxdDocument::new(package.as_document());
    assert_that(
        &doc,
        &equal_to_xpath_result(expected, "//child|//x:child")
            .with_namespaces([("x", "urn:dummy")]),
    )
    .unwrap();
}

#[test]
fn constraints_outlive_the_expected_document() {
    let constraint = {
        let expected_package = package();
        let expected_doc = SxdDocument::new(expected_package.as_document());
        equal_to_xpath_result(expected_doc.document_element().unwrap(), "/root")
    };

    let package = package();
    let doc = SxdDocument::new(package.as_document());
    assert!(constraint.eval(&doc));
}

#[test]
fn descriptions() {
    assert_eq!(
        matches_xpath_expression("//child").to_string(),
        "matches expression: //child"
    );
    assert_eq!(
        matches_xpath_result_count(2, "//child").to_string(),
        "matches expected count 2 for expression: //child"
    );
    assert_eq!(
        equal_to_xpath_result(Vec::<xpath_assertions::sxd::SxdNode>::new(), "//child").to_string(),
        "is equal to the nodes matched by expression: //child"
    );
}

#[test]
fn constraint_keeps_namespace_bindings() {
    let constraint = matches_xpath_expression("//x:child")
        .with_namespace("x", "urn:dummy")
        .with_namespace("y", "urn:other");
    assert_eq!(constraint.expression(), "//x:child");
    assert_eq!(constraint.namespaces().get("x"), Some("urn:dummy"));
    assert_eq!(constraint.namespaces().len(), 2);
}

#[test]
fn combinators_compose_with_constraints() {
    let package = package();
    let doc = SxdDocument::new(package.as_document());

    assert_that(&doc, &matches_xpath_expression("//non-existing").not()).unwrap();
    assert_that(
        &doc,
        &matches_xpath_expression("/root").and(matches_xpath_result_count(1, "//child")),
    )
    .unwrap();
    assert_that(
        &doc,
        &matches_xpath_expression("//non-existing").or(matches_xpath_result_count(2, "/root/*")),
    )
    .unwrap();
}

#[test]
#[should_panic(expected = "matches expression: //non-existing.")]
fn assert_that_failure_uses_description() {
    let package = package();
    let doc = SxdDocument::new(package.as_document());
    assert_that(&doc, &matches_xpath_expression("//non-existing")).unwrap();
}

#[test]
fn assert_that_failure_lists_case_products() {
    let package = package();
    let doc = SxdDocument::new(package.as_document());
    let reporter = CollectingReporter::new();

    Assert::new(&reporter)
        .predicate(&doc, &matches_xpath_result_count(5, "//child"))
        .unwrap();

    let failures = reporter.take();
    assert_eq!(failures.len(), 1);
    let message = failures[0].message();
    assert!(message.starts_with("Failed asserting that "));
    assert!(message.contains("matches expected count 5 for expression: //child."));
    assert!(message.contains("actual count: 1"));
}

#[test]
fn invalid_expression_never_matches() {
    let package = package();
    let doc = SxdDocument::new(package.as_document());

    let constraint = matches_xpath_expression("//child[");
    assert!(!constraint.eval(&doc));
    assert!(constraint.not().eval(&doc));
}

#[test]
fn find_case_reports_actual_count() {
    let package = package();
    let doc = SxdDocument::new(package.as_document());
    let constraint = matches_xpath_result_count(3, "//child|//x:child")
        .with_namespace("x", "urn:dummy");

    assert!(constraint.find_case(true, &doc).is_none());
    let case = constraint.find_case(false, &doc).unwrap();
    assert!(!case.result());
    let products: Vec<_> = case
        .products()
        .map(|product| format!("{}={}", product.name(), product.value()))
        .collect();
    assert_eq!(products, vec!["actual count=2"]);
}

#[test]
fn check_returns_the_assertion_message() {
    let package = package();
    let doc = SxdDocument::new(package.as_document());

    let outcome = matches_xpath_result_count(1, "//non-existing").check(&doc).unwrap();
    assert_eq!(
        outcome.failure().map(|failure| failure.message()),
        Some("Failed asserting that actual node count 0 matches expected count 1.")
    );
    assert_eq!(
        matches_xpath_expression("//child").check(&doc).unwrap(),
        Outcome::Pass
    );
}

// The constraint facade must agree with the direct assertions.
#[rstest]
#[case("//child", 1)]
#[case("//x:child", 1)]
#[case("//child|//x:child", 2)]
#[case("//non-existing", 0)]
#[case("//non-existing", 1)]
#[case("/root/*", 3)]
fn facades_agree(#[case] expression: &str, #[case] count: usize) {
    let package = package();
    let doc = SxdDocument::new(package.as_document());
    let namespaces = Namespaces::new().with("x", "urn:dummy");

    let reporter = CollectingReporter::new();
    let direct = Assert::new(&reporter);

    direct.xpath_match(expression, &doc, &namespaces).unwrap();
    let match_passed = reporter.take().is_empty();
    assert_eq!(
        matches_xpath_expression(expression)
            .with_namespaces(&namespaces)
            .eval(&doc),
        match_passed
    );

    direct.xpath_count(count, expression, &doc, &namespaces).unwrap();
    let count_passed = reporter.take().is_empty();
    assert_eq!(
        matches_xpath_result_count(count, expression)
            .with_namespaces(&namespaces)
            .eval(&doc),
        count_passed
    );

    let expected = doc.document_element().unwrap().children();
    direct
        .xpath_equals(expected.clone(), expression, &doc, &namespaces)
        .unwrap();
    let equals_passed = reporter.take().is_empty();
    assert_eq!(
        equal_to_xpath_result(expected, expression)
            .with_namespaces(&namespaces)
            .eval(&doc),
        equals_passed
    );
}
