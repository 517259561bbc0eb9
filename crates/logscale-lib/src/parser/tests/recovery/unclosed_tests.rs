use crate::Query;

#[test]
fn unclosed_arg_list_at_end() {
    let res = Query::expect_invalid("count(");

    insta::assert_snapshot!(res, @"error at 5..6: missing closing `)` (related: argument list started here at 5..6)");
}

#[test]
fn unclosed_arg_list_spans_to_last_token() {
    let res = Query::expect_invalid("groupBy(host, function=count()");

    insta::assert_snapshot!(res, @"error at 7..30: missing closing `)` (related: argument list started here at 7..8)");
}

#[test]
fn unclosed_case_block() {
    let res = Query::expect_invalid("case { a | b");

    insta::assert_snapshot!(res, @"error at 5..12: missing closing `}` (related: case block started here at 5..6)");
}

#[test]
fn unclosed_paren_expr() {
    let res = Query::expect_invalid("x := (a + 1");

    insta::assert_snapshot!(res, @"error at 5..11: missing closing `)` (related: parenthesized expression started here at 5..6)");
}

#[test]
fn unclosed_paren_filter_after_missing_operand() {
    let res = Query::expect_invalid("(a OR | count()");

    insta::assert_snapshot!(res, @r"
    error at 6..7: expected a filter, found `|`
    error at 0..5: missing closing `)` (related: parenthesized filter started here at 0..1)
    ");
}

#[test]
fn unclosed_delimiter_hides_cascading_errors() {
    let query = Query::expect("count(a, b");

    insta::assert_snapshot!(query.dump_diagnostics(), @"error at 5..10: missing closing `)` (related: argument list started here at 5..6)");
    insta::assert_snapshot!(query.dump_diagnostics_raw(), @r"
    error at 9..10: only one argument may be unnamed (hint: only the first argument may omit its name)
    error at 5..10: missing closing `)` (related: argument list started here at 5..6)
    ");
}

#[test]
fn unterminated_string() {
    let res = Query::expect_invalid(r#""abc"#);

    insta::assert_snapshot!(res, @"error at 0..4: unterminated string");
}

#[test]
fn unterminated_regex() {
    let res = Query::expect_invalid("/abc");

    insta::assert_snapshot!(res, @"error at 0..4: unterminated regex");
}

#[test]
fn unclosed_tree_is_still_complete() {
    let query = Query::expect("groupBy(host, function=count()");

    assert_eq!(query.as_cst().text().to_string(), "groupBy(host, function=count()");
    let res = query.dump_cst();
    insta::assert_snapshot!(res, @r#"
    Query
      Pipeline
        FunctionCall
          Identifier
            Word "groupBy"
          ArgList
            ParenOpen "("
            UnnamedArg
              FieldName
                Word "host"
            Comma ","
            NamedArg
              Identifier
                Word "function"
              Equals "="
              FunctionCall
                Identifier
                  Word "count"
                ArgList
                  ParenOpen "("
                  ParenClose ")"
    "#);
}
