use crate::Query;

#[test]
fn division_nests_left() {
    let res = Query::expect_valid_cst("a := m/fisk/i");

    insta::assert_snapshot!(res, @r#"
    Query
      Pipeline
        EvalShorthand
          FieldName
            Word "a"
          ColonEq ":="
          MultiplicativeExpr
            MultiplicativeExpr
              FieldName
                Word "m"
              Slash "/"
              FieldName
                Word "fisk"
            Slash "/"
            FieldName
              Word "i"
    "#);
}

#[test]
fn precedence_levels() {
    let res = Query::expect_valid_cst("x := a + b * c == 2");

    insta::assert_snapshot!(res, @r#"
    Query
      Pipeline
        EvalShorthand
          FieldName
            Word "x"
          ColonEq ":="
          ComparisonExpr
            AdditiveExpr
              FieldName
                Word "a"
              Plus "+"
              MultiplicativeExpr
                FieldName
                  Word "b"
                Star "*"
                FieldName
                  Word "c"
            EqEq "=="
            Number
              NumberLit "2"
    "#);
}

#[test]
fn unary_and_parentheses() {
    let res = Query::expect_valid_cst(r#"x := -(a - 1) | y := "s""#);

    insta::assert_snapshot!(res, @r#"
    Query
      Pipeline
        EvalShorthand
          FieldName
            Word "x"
          ColonEq ":="
          UnaryExpr
            Minus "-"
            ParenExpr
              ParenOpen "("
              AdditiveExpr
                FieldName
                  Word "a"
                Minus "-"
                Number
                  NumberLit "1"
              ParenClose ")"
        Pipe "|"
        EvalShorthand
          FieldName
            Word "y"
          ColonEq ":="
          QuotedString
            StringLit "\"s\""
    "#);
}

#[test]
fn eval_function_shorthand() {
    let res = Query::expect_valid_cst("n := text:length(msg)");

    insta::assert_snapshot!(res, @r#"
    Query
      Pipeline
        EvalFunctionShorthand
          FieldName
            Word "n"
          ColonEq ":="
          FunctionCall
            Identifier
              Word "text"
              Colon ":"
              Word "length"
            ArgList
              ParenOpen "("
              UnnamedArg
                FieldName
                  Word "msg"
              ParenClose ")"
    "#);
}

#[test]
fn call_inside_arithmetic_is_plain_eval() {
    let res = Query::expect_valid_ast("x := now() - 1000");

    insta::assert_snapshot!(res, @r"
    Query
      Pipeline
        Eval x
          Binary -
            Call now
            Number 1000
    ");
}

#[test]
fn field_shorthand() {
    let res = Query::expect_valid_cst(r#"ip =~ cidr(subnet="10.0.0.0/8")"#);

    insta::assert_snapshot!(res, @r#"
    Query
      Pipeline
        FieldShorthand
          FieldName
            Word "ip"
          EqTilde "=~"
          FunctionCall
            Identifier
              Word "cidr"
            ArgList
              ParenOpen "("
              NamedArg
                Identifier
                  Word "subnet"
                Equals "="
                QuotedString
                  StringLit "\"10.0.0.0/8\""
              ParenClose ")"
    "#);
}

#[test]
fn expression_ast_outline() {
    let res = Query::expect_valid_ast("r := !(a >= ?limit) | s := -x * 2");

    insta::assert_snapshot!(res, @r"
    Query
      Pipeline
        Eval r
          Unary !
            Paren
              Binary >=
                Field a
                Param limit
        Eval s
          Binary *
            Unary -
              Field x
            Number 2
    ");
}
