use crate::Query;

#[test]
fn missing_step_at_end() {
    let res = Query::expect_invalid("error | ");

    insta::assert_snapshot!(res, @"error at 8..8: expected a pipeline step, found end of input");
}

#[test]
fn empty_step_between_pipes() {
    let res = Query::expect_invalid("error | | count()");

    insta::assert_snapshot!(res, @"error at 8..9: expected a pipeline step, found `|`");
}

#[test]
fn leftover_after_step() {
    let res = Query::expect_invalid("a := b := c");

    insta::assert_snapshot!(res, @"error at 7..9: expected `|`, found `:=`");
}

#[test]
fn invalid_character() {
    let res = Query::expect_invalid("error ☃ | count()");

    insta::assert_snapshot!(res, @"error at 6..9: invalid character: `☃`");
}

#[test]
fn missing_comparison_value() {
    let res = Query::expect_invalid("status= | count()");

    insta::assert_snapshot!(res, @"error at 8..9: expected a value, found `|`");
}

#[test]
fn missing_match_guard() {
    let res = Query::expect_invalid("f match { => a }");

    insta::assert_snapshot!(res, @"error at 10..12: expected a match guard, found `=>`");
}

#[test]
fn recovery_keeps_following_steps() {
    let query = Query::expect("error | | count()");

    let res = query.dump_ast();
    insta::assert_snapshot!(res, @r"
    Query
      Pipeline
        FreeText
          Pattern error
        Call count
    ");
}
