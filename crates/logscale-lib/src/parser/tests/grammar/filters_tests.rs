use crate::Query;

#[test]
fn implicit_and() {
    let res = Query::expect_valid_cst("error warning");

    insta::assert_snapshot!(res, @r#"
    Query
      Pipeline
        AndFilter
          FreeTextPattern
            Pattern
              Word "error"
          FreeTextPattern
            Pattern
              Word "warning"
    "#);
}

#[test]
fn or_binds_tighter_than_and() {
    let res = Query::expect_valid_cst("a OR b AND c");

    insta::assert_snapshot!(res, @r#"
    Query
      Pipeline
        AndFilter
          OrFilter
            FreeTextPattern
              Pattern
                Word "a"
            KwOr "OR"
            FreeTextPattern
              Pattern
                Word "b"
          KwAnd "AND"
          FreeTextPattern
            Pattern
              Word "c"
    "#);
}

#[test]
fn field_comparisons() {
    let res = Query::expect_valid_cst(r#"status!=500 method like "GE*""#);

    insta::assert_snapshot!(res, @r#"
    Query
      Pipeline
        AndFilter
          FieldComparison
            FieldName
              Word "status"
            NotEq "!="
            Pattern
              NumberLit "500"
          FieldComparison
            FieldName
              Word "method"
            KwLike "like"
            QuotedString
              StringLit "\"GE*\""
    "#);
}

#[test]
fn regexes() {
    let res = Query::expect_valid_cst(r"/fisk/i url=/\.php$/");

    insta::assert_snapshot!(res, @r#"
    Query
      Pipeline
        AndFilter
          FreeTextPattern
            Regex
              Slash "/"
              RegexBody "fisk"
              Slash "/"
              RegexFlags "i"
          FieldComparison
            FieldName
              Word "url"
            Equals "="
            Regex
              Slash "/"
              RegexBody "\\.php$"
              Slash "/"
    "#);
}

#[test]
fn negation_and_parentheses() {
    let res = Query::expect_valid_cst("NOT (a OR b) !c");

    insta::assert_snapshot!(res, @r#"
    Query
      Pipeline
        AndFilter
          NotFilter
            KwNot "NOT"
            ParenthesizedFilter
              ParenOpen "("
              OrFilter
                FreeTextPattern
                  Pattern
                    Word "a"
                KwOr "OR"
                FreeTextPattern
                  Pattern
                    Word "b"
              ParenClose ")"
          NotFilter
            Bang "!"
            FreeTextPattern
              Pattern
                Word "c"
    "#);
}

#[test]
fn booleans_and_patterns() {
    let res = Query::expect_valid_cst("true *fail* 42");

    insta::assert_snapshot!(res, @r#"
    Query
      Pipeline
        AndFilter
          BooleanFilter
            KwTrue "true"
          FreeTextPattern
            Pattern
              PatternWord "*fail*"
          FreeTextPattern
            Pattern
              NumberLit "42"
    "#);
}

#[test]
fn reserved_word_as_field_name() {
    let res = Query::expect_valid_cst("test=fisk");

    insta::assert_snapshot!(res, @r#"
    Query
      Pipeline
        FieldComparison
          FieldName
            Word "test"
          Equals "="
          Pattern
            Word "fisk"
    "#);
}

#[test]
fn word_then_spaced_paren_is_free_text() {
    let res = Query::expect_valid_cst("error (a OR b)");

    insta::assert_snapshot!(res, @r#"
    Query
      Pipeline
        AndFilter
          FreeTextPattern
            Pattern
              Word "error"
          ParenthesizedFilter
            ParenOpen "("
            OrFilter
              FreeTextPattern
                Pattern
                  Word "a"
              KwOr "OR"
              FreeTextPattern
                Pattern
                  Word "b"
            ParenClose ")"
    "#);
}

#[test]
fn reserved_word_then_spaced_paren_is_call() {
    let res = Query::expect_valid_cst("count (x)");

    insta::assert_snapshot!(res, @r#"
    Query
      Pipeline
        FunctionCall
          Identifier
            Word "count"
          ArgList
            ParenOpen "("
            UnnamedArg
              FieldName
                Word "x"
            ParenClose ")"
    "#);
}

#[test]
fn call_as_filter_operand() {
    let res = Query::expect_valid_ast(r#"error in(field=host, values=["a", "b"])"#);

    insta::assert_snapshot!(res, @r#"
    Query
      Pipeline
        And implicit
          FreeText
            Pattern error
          Call in
            Arg field=
              Field host
            Arg values=
              Array
                String "a"
                String "b"
    "#);
}

#[test]
fn empty_query() {
    let res = Query::expect_valid_cst("");

    insta::assert_snapshot!(res, @r"
    Query
      Pipeline
    ");
}

#[test]
fn spaced_comparison_operators() {
    let res = Query::expect_valid_cst("status >= 400 x = true");

    insta::assert_snapshot!(res, @r#"
    Query
      Pipeline
        AndFilter
          FieldComparison
            FieldName
              Word "status"
            GtEq ">="
            Pattern
              NumberLit "400"
          FieldComparison
            FieldName
              Word "x"
            Equals "="
            Pattern
              KwTrue "true"
    "#);
}

#[test]
fn spaced_reserved_field_name() {
    let query = Query::expect("test = fisk");

    assert!(query.is_valid(), "{}", query.dump_diagnostics());
}
