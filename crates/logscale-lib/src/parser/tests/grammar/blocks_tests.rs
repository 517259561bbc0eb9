use crate::Query;

#[test]
fn case_with_trailing_semicolon() {
    let res = Query::expect_valid_cst("case { a | b; c; }");

    insta::assert_snapshot!(res, @r#"
    Query
      Pipeline
        CaseExpr
          KwCase "case"
          BraceOpen "{"
          Pipeline
            FreeTextPattern
              Pattern
                Word "a"
            Pipe "|"
            FreeTextPattern
              Pattern
                Word "b"
          Semicolon ";"
          Pipeline
            FreeTextPattern
              Pattern
                Word "c"
          Semicolon ";"
          BraceClose "}"
    "#);
}

#[test]
fn empty_case() {
    let res = Query::expect_valid_ast("case {}");

    insta::assert_snapshot!(res, @r"
    Query
      Pipeline
        Case
    ");
}

#[test]
fn match_arms() {
    let res = Query::expect_valid_cst(r#"f match { "x" => a | b; * => c }"#);

    insta::assert_snapshot!(res, @r#"
    Query
      Pipeline
        MatchExpr
          FieldName
            Word "f"
          KwMatch "match"
          BraceOpen "{"
          MatchArm
            AnchoredPattern
              QuotedString
                StringLit "\"x\""
            FatArrow "=>"
            Pipeline
              FreeTextPattern
                Pattern
                  Word "a"
              Pipe "|"
              FreeTextPattern
                Pattern
                  Word "b"
          Semicolon ";"
          MatchArm
            Wildcard
              PatternWord "*"
            FatArrow "=>"
            Pipeline
              FreeTextPattern
                Pattern
                  Word "c"
          BraceClose "}"
    "#);
}

#[test]
fn match_guards() {
    let res = Query::expect_valid_ast("f match { /y/i => b; in(g) => c; ?p => d; web* => e }");

    insta::assert_snapshot!(res, @r"
    Query
      Pipeline
        Match f
          Arm
            Regex /y/i
            Pipeline
              FreeText
                Pattern b
          Arm
            Call in
              Arg
                Field g
            Pipeline
              FreeText
                Pattern c
          Arm
            Param p
            Pipeline
              FreeText
                Pattern d
          Arm
            Anchored
              Pattern web*
            Pipeline
              FreeText
                Pattern e
    ");
}

#[test]
fn case_outline() {
    let res = Query::expect_valid_ast("case { status >= 500 | e := 1; * }");

    insta::assert_snapshot!(res, @r"
    Query
      Pipeline
        Case
          Pipeline
            Compare status >=
              Pattern 500
            Eval e
              Number 1
          Pipeline
            FreeText
              Pattern *
    ");
}
