use crate::Query;
use crate::diagnostics::{DiagnosticKind, ErrorCategory};

#[test]
fn regex_in_expression() {
    let res = Query::expect_invalid("a := /fisk/i");

    insta::assert_snapshot!(res, @"error at 5..12: regex is not valid in an expression (hint: use `regex()` or a filter step to match a regex)");
}

#[test]
fn second_unnamed_argument() {
    let res = Query::expect_invalid("f(a, b=1, c)");

    insta::assert_snapshot!(res, @"error at 10..11: only one argument may be unnamed (hint: only the first argument may omit its name)");
}

#[test]
fn reserved_word_as_free_text() {
    let res = Query::expect_invalid("test");

    insta::assert_snapshot!(res, @"error at 0..4: `test` is a reserved function name (fix: quote it to search for the text)");
}

#[test]
fn quoted_reserved_word_is_free_text() {
    Query::expect_valid(r#""test" count()"#);
}

#[test]
fn shape_errors_keep_the_tree() {
    let query = Query::expect("a := /fisk/i");

    let diagnostics = query.diagnostics();
    assert_eq!(diagnostics.kinds(), [DiagnosticKind::InvalidRegexContext]);
    assert_eq!(
        diagnostics.iter().next().map(|d| d.category()),
        Some(ErrorCategory::SemanticShape)
    );

    let res = query.dump_cst();
    insta::assert_snapshot!(res, @r#"
    Query
      Pipeline
        EvalShorthand
          FieldName
            Word "a"
          ColonEq ":="
          Error
            Slash "/"
            RegexBody "fisk"
            Slash "/"
            RegexFlags "i"
    "#);
}
