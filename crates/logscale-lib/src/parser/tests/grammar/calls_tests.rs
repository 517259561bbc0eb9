use crate::Query;

#[test]
fn named_and_unnamed_args() {
    let res = Query::expect_valid_cst("groupBy(host, function=count())");

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
            ParenClose ")"
    "#);
}

#[test]
fn subquery_and_array_args() {
    let res = Query::expect_valid_cst(r#"join({status=500 | count()}, include=[a, "b"])"#);

    insta::assert_snapshot!(res, @r#"
    Query
      Pipeline
        FunctionCall
          Identifier
            Word "join"
          ArgList
            ParenOpen "("
            UnnamedArg
              Subquery
                BraceOpen "{"
                Pipeline
                  FieldComparison
                    FieldName
                      Word "status"
                    Equals "="
                    Pattern
                      NumberLit "500"
                  Pipe "|"
                  FunctionCall
                    Identifier
                      Word "count"
                    ArgList
                      ParenOpen "("
                      ParenClose ")"
                BraceClose "}"
            Comma ","
            NamedArg
              Identifier
                Word "include"
              Equals "="
              ArrayExpr
                BracketOpen "["
                FieldName
                  Word "a"
                Comma ","
                QuotedString
                  StringLit "\"b\""
                BracketClose "]"
            ParenClose ")"
    "#);
}

#[test]
fn saved_queries_and_parameters() {
    let res = Query::expect_valid_cst(r#"$"my search"(x=1) | ?{host=web} | ?status"#);

    insta::assert_snapshot!(res, @r#"
    Query
      Pipeline
        SavedQuery
          Dollar "$"
          QuotedString
            StringLit "\"my search\""
          ArgList
            ParenOpen "("
            NamedArg
              Identifier
                Word "x"
              Equals "="
              Number
                NumberLit "1"
            ParenClose ")"
        Pipe "|"
        QueryParameter
          Question "?"
          BraceOpen "{"
          Identifier
            Word "host"
          Equals "="
          Pattern
            Word "web"
          BraceClose "}"
        Pipe "|"
        QueryParameter
          Question "?"
          Identifier
            Word "status"
    "#);
}

#[test]
fn array_step_outline() {
    let res = Query::expect_valid_ast("[count(), avg(latency)]");

    insta::assert_snapshot!(res, @r"
    Query
      Pipeline
        Array
          Call count
          Call avg
            Arg
              Field latency
    ");
}

#[test]
fn call_outline() {
    let res = Query::expect_valid_ast("$lookup(limit=?max) | sort(_count, order=desc)");

    insta::assert_snapshot!(res, @r"
    Query
      Pipeline
        SavedQuery lookup
          Arg limit=
            Param max
        Call sort
          Arg
            Field _count
          Arg order=
            Field desc
    ");
}

#[test]
fn spaced_named_arg() {
    let res = Query::expect_valid_cst("f(x = 1)");

    insta::assert_snapshot!(res, @r#"
    Query
      Pipeline
        FunctionCall
          Identifier
            Word "f"
          ArgList
            ParenOpen "("
            NamedArg
              Identifier
                Word "x"
              Equals "="
              Number
                NumberLit "1"
            ParenClose ")"
    "#);
}
