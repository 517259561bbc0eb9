use crate::{Error, FormatOptions, Query};

#[test]
fn valid_query() {
    let q = Query::expect("error | count()");
    assert!(q.is_valid());
    assert!(q.diagnostics().is_empty());
    assert_eq!(q.source(), "error | count()");
    assert_eq!(q.root().pipeline().unwrap().steps().count(), 2);
}

#[test]
fn invalid_query_keeps_tree() {
    let q = Query::expect("error | count(");
    assert!(!q.is_valid());
    assert_eq!(q.diagnostics().error_count(), 1);
    assert_eq!(q.as_cst().text().to_string(), "error | count(");
    assert_eq!(q.root().pipeline().unwrap().steps().count(), 2);
}

#[test]
fn try_from_string() {
    let source = String::from("a OR b");
    let q = Query::try_from(&source).unwrap();
    assert!(q.is_valid());
}

#[test]
fn parse_rejects_syntax_errors() {
    let Err(err) = crate::parse("count(") else {
        panic!("expected a parse error");
    };
    let Error::QueryParseError(diagnostics) = &err else {
        panic!("expected QueryParseError, got {:?}", err);
    };
    assert_eq!(diagnostics.len(), 1);
    insta::assert_snapshot!(err.to_string(), @"query parsing failed with 1 errors");
}

#[test]
fn parse_accepts_valid_query() {
    let q = crate::parse("status >= 500").unwrap();
    assert!(q.is_valid());
}

#[test]
fn format_entry_point() {
    let res = crate::format("error|count()").unwrap();
    insta::assert_snapshot!(res, @r"
    error
    | count()
    ");
}

#[test]
fn format_refuses_invalid_query() {
    let q = Query::expect("count(");
    let Err(err) = q.format() else {
        panic!("expected a format error");
    };
    assert!(matches!(err, Error::FormatError(_)));
    insta::assert_snapshot!(err.to_string(), @"cannot format a query with 1 syntax errors");
}

#[test]
fn format_with_options() {
    let q = Query::expect("[count(), avg(latency), max(latency)]");
    let options = FormatOptions::new().width(20);

    let res = q.format_with(&options).unwrap();
    insta::assert_snapshot!(res, @r"
    [
      count(),
      avg(latency),
      max(latency)
    ]
    ");
}

#[test]
fn fuel_error_propagates() {
    let result = Query::new("a b c").with_exec_fuel(Some(1)).exec();
    assert!(matches!(result, Err(Error::ExecFuelExhausted)));
}
