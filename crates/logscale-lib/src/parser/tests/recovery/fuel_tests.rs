use crate::{Error, Query};

#[test]
fn recursion_limit() {
    let result = Query::new("((((a))))").with_recursion_fuel(Some(3)).exec();

    let Err(err) = result else {
        panic!("expected the recursion limit to trip");
    };
    assert!(matches!(err, Error::RecursionLimitExceeded));
    insta::assert_snapshot!(err.to_string(), @"recursion limit exceeded");
}

#[test]
fn recursion_limit_restores_between_steps() {
    let query = Query::new("(a) | (b) | (c)")
        .with_recursion_fuel(Some(4))
        .exec()
        .unwrap();

    assert!(query.is_valid());
}

#[test]
fn exec_fuel_exhausted() {
    let result = Query::new("a b c d").with_exec_fuel(Some(2)).exec();

    let Err(err) = result else {
        panic!("expected execution fuel to run out");
    };
    assert!(matches!(err, Error::ExecFuelExhausted));
    insta::assert_snapshot!(err.to_string(), @"execution limit exceeded");
}

#[test]
fn unlimited_fuel() {
    let source = "(".repeat(50) + "a" + &")".repeat(50);
    let query = Query::new(&source)
        .with_recursion_fuel(None)
        .with_exec_fuel(None)
        .exec()
        .unwrap();

    assert!(query.is_valid());
}

#[test]
fn default_depth_limit_keeps_formatting_safe() {
    let nested = |depth: usize| "(".repeat(depth) + "a" + &")".repeat(depth);

    let deep = nested(500);
    let formatted = crate::format(&deep).unwrap();
    assert_eq!(crate::format(&formatted).unwrap(), formatted);

    let Err(err) = Query::try_from(nested(600).as_str()) else {
        panic!("expected the default recursion limit to trip");
    };
    assert!(matches!(err, Error::RecursionLimitExceeded));
}
