use crate::Query;
use indoc::indoc;

#[test]
fn comments_and_newlines_between_steps() {
    let input = indoc! {r#"
    error  // c
    | count()
    "#};

    let res = Query::expect_valid_cst_full(input);

    insta::assert_snapshot!(res, @r#"
    Query
      Pipeline
        FreeTextPattern
          Pattern
            Word "error"
        Whitespace "  "
        LineComment "// c"
        Newline "\n"
        Pipe "|"
        Whitespace " "
        FunctionCall
          Identifier
            Word "count"
          ArgList
            ParenOpen "("
            ParenClose ")"
      Newline "\n"
    "#);
}

#[test]
fn leading_comment_stays_in_pipeline() {
    let input = indoc! {r#"
    // lead
    error
    "#};

    let res = Query::expect_valid_cst_full(input);

    insta::assert_snapshot!(res, @r#"
    Query
      Pipeline
        LineComment "// lead"
        Newline "\n"
        FreeTextPattern
          Pattern
            Word "error"
      Newline "\n"
    "#);
}

#[test]
fn block_comment_inside_arguments() {
    let res = Query::expect_valid_cst_full("f(a, /* b */ c=1)");

    insta::assert_snapshot!(res, @r#"
    Query
      Pipeline
        FunctionCall
          Identifier
            Word "f"
          ArgList
            ParenOpen "("
            UnnamedArg
              FieldName
                Word "a"
            Comma ","
            Whitespace " "
            BlockComment "/* b */"
            Whitespace " "
            NamedArg
              Identifier
                Word "c"
              Equals "="
              Number
                NumberLit "1"
            ParenClose ")"
    "#);
}

#[test]
fn trivia_is_hidden_by_default() {
    let res = Query::expect_valid_cst("a  /* x */  b");

    insta::assert_snapshot!(res, @r#"
    Query
      Pipeline
        AndFilter
          FreeTextPattern
            Pattern
              Word "a"
          FreeTextPattern
            Pattern
              Word "b"
    "#);
}
