use rowan::TextRange;

use super::*;

fn range(start: u32, end: u32) -> TextRange {
    TextRange::new(start.into(), end.into())
}

#[test]
fn severity_display() {
    insta::assert_snapshot!(format!("{}", Severity::Error), @"error");
    insta::assert_snapshot!(format!("{}", Severity::Warning), @"warning");
}

#[test]
fn category_display() {
    insta::assert_snapshot!(format!("{}", ErrorCategory::Lex), @"lex error");
    insta::assert_snapshot!(format!("{}", ErrorCategory::Syntax), @"syntax error");
    insta::assert_snapshot!(format!("{}", ErrorCategory::SemanticShape), @"semantic shape error");
}

#[test]
fn report_with_default_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedFilter, range(0, 5))
        .emit();

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.has_errors());
    insta::assert_snapshot!(diagnostics.render_plain(), @"error at 0..5: expected a filter");
}

#[test]
fn report_with_custom_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedFilter, range(4, 5))
        .message("found `|`")
        .emit();

    insta::assert_snapshot!(diagnostics.render_plain(), @"error at 4..5: expected a filter, found `|`");
}

#[test]
fn plain_rendering_carries_fix_related_and_hints() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ReservedWordMisuse, range(0, 4))
        .message("test")
        .fix("quote it to search for the text", "\"test\"")
        .emit();
    diagnostics
        .report(DiagnosticKind::UnclosedParen, range(5, 10))
        .related_to("argument list started here", range(5, 6))
        .emit();
    diagnostics
        .report(DiagnosticKind::MultipleUnnamedArgs, range(11, 12))
        .emit();

    insta::assert_snapshot!(diagnostics.render_plain(), @r"
    error at 0..4: `test` is a reserved function name (fix: quote it to search for the text)
    error at 5..10: missing closing `)` (related: argument list started here at 5..6)
    error at 11..12: only one argument may be unnamed (hint: only the first argument may omit its name)
    ");
}

#[test]
fn builder_with_related() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedParen, range(0, 5))
        .message("primary")
        .related_to("related info", range(6, 10))
        .emit();

    let result = diagnostics.printer("hello world!").render();
    insta::assert_snapshot!(result, @r"
    error: missing closing `)`; primary
      |
    1 | hello world!
      | ^^^^^ ---- related info
    ");
}

#[test]
fn builder_with_fix() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ReservedWordMisuse, range(0, 5))
        .message("hello")
        .fix("apply this fix", "fixed")
        .emit();

    let result = diagnostics.printer("hello world").render();
    insta::assert_snapshot!(result, @r"
    error: `hello` is a reserved function name
      |
    1 | hello world
      | ^^^^^
      |
    help: apply this fix
      |
    1 - hello world
    1 + fixed world
      |
    ");
}

#[test]
fn default_hints_are_rendered() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::InvalidRegexContext, range(5, 8))
        .emit();

    let result = diagnostics.printer("a := /x/").render();
    assert!(result.contains("regex is not valid in an expression"));
    assert!(result.contains("use `regex()` or a filter step to match a regex"));
}

#[test]
fn printer_colored() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedStep, range(0, 5))
        .message("found `|`")
        .emit();

    let result = diagnostics.render_colored("hello", true);
    assert!(result.contains("found `|`"));
    assert!(result.contains('\x1b'));
}

#[test]
fn printer_empty_diagnostics() {
    let diagnostics = Diagnostics::new();
    assert!(diagnostics.render("source").is_empty());
    assert!(diagnostics.render_plain().is_empty());
}

#[test]
fn printer_with_path() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ReservedWordMisuse, range(0, 5))
        .message("count")
        .emit();

    let result = diagnostics.printer("count world").path("test.lql").render();
    insta::assert_snapshot!(result, @r"
    error: `count` is a reserved function name
     --> test.lql:1:1
      |
    1 | count world
      | ^^^^^
    ");
}

#[test]
fn printer_zero_width_span() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedExpression, TextRange::empty(0.into()))
        .message("found end of input")
        .emit();

    let result = diagnostics.printer("hello").render();
    insta::assert_snapshot!(result, @r"
    error: expected an expression, found end of input
      |
    1 | hello
      | ^
    ");
}

#[test]
fn printer_multiple_diagnostics() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedParen, range(0, 5))
        .message("first error")
        .emit();
    diagnostics
        .report(DiagnosticKind::ReservedWordMisuse, range(6, 10))
        .message("worl")
        .emit();

    let result = diagnostics.printer("hello world!").render();
    insta::assert_snapshot!(result, @r"
    error: missing closing `)`; first error
      |
    1 | hello world!
      | ^^^^^

    error: `worl` is a reserved function name
      |
    1 | hello world!
      |       ^^^^
    ");
}

#[test]
fn diagnostics_collection_methods() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedBrace, TextRange::empty(0.into()))
        .emit();
    diagnostics
        .report(DiagnosticKind::InvalidCharacter, TextRange::empty(1.into()))
        .emit();

    assert!(!diagnostics.is_empty());
    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics.has_errors());
    assert_eq!(diagnostics.error_count(), 2);
    assert_eq!(
        diagnostics.kinds(),
        [DiagnosticKind::UnclosedBrace, DiagnosticKind::InvalidCharacter]
    );
}

#[test]
fn extend_appends_in_order() {
    let mut first = Diagnostics::new();
    first.report(DiagnosticKind::ExpectedStep, range(0, 1)).emit();
    let mut second = Diagnostics::new();
    second.report(DiagnosticKind::ExpectedName, range(2, 3)).emit();

    first.extend(second);
    assert_eq!(
        first.kinds(),
        [DiagnosticKind::ExpectedStep, DiagnosticKind::ExpectedName]
    );
}

#[test]
fn diagnostic_kind_categories() {
    assert_eq!(DiagnosticKind::UnterminatedString.category(), ErrorCategory::Lex);
    assert_eq!(DiagnosticKind::InvalidCharacter.category(), ErrorCategory::Lex);
    assert_eq!(DiagnosticKind::UnclosedParen.category(), ErrorCategory::Syntax);
    assert_eq!(DiagnosticKind::UnexpectedToken.category(), ErrorCategory::Syntax);
    assert_eq!(
        DiagnosticKind::MultipleUnnamedArgs.category(),
        ErrorCategory::SemanticShape
    );
}

#[test]
fn diagnostic_kind_suppression_order() {
    assert!(DiagnosticKind::UnclosedParen.suppresses(&DiagnosticKind::MultipleUnnamedArgs));
    assert!(DiagnosticKind::ExpectedExpression.suppresses(&DiagnosticKind::UnexpectedToken));
    assert!(!DiagnosticKind::UnclosedParen.suppresses(&DiagnosticKind::UnclosedParen));
    assert!(!DiagnosticKind::InvalidCharacter.suppresses(&DiagnosticKind::UnclosedParen));
}

#[test]
fn diagnostic_kind_message_rendering() {
    assert_eq!(
        DiagnosticKind::UnclosedBracket.message(None),
        "missing closing `]`"
    );
    assert_eq!(
        DiagnosticKind::UnclosedBracket.message(Some("array")),
        "missing closing `]`; array"
    );
    assert_eq!(
        DiagnosticKind::ExpectedValue.message(Some("found `|`")),
        "expected a value, found `|`"
    );
    assert_eq!(
        DiagnosticKind::UnexpectedToken.message(Some("expected `|`, found `:=`")),
        "expected `|`, found `:=`"
    );
    assert_eq!(
        DiagnosticKind::InvalidCharacter.message(Some("`☃`")),
        "invalid character: `☃`"
    );
}

#[test]
fn filtered_no_suppression_disjoint_spans() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedParen, range(0, 5))
        .emit();
    diagnostics
        .report(DiagnosticKind::InvalidCharacter, range(10, 15))
        .emit();

    assert_eq!(diagnostics.filtered().len(), 2);
}

#[test]
fn filtered_suppresses_lower_priority_contained() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedParen, range(0, 20))
        .emit();
    diagnostics
        .report(DiagnosticKind::MultipleUnnamedArgs, range(5, 15))
        .emit();

    assert_eq!(
        diagnostics.filtered().kinds(),
        [DiagnosticKind::UnclosedParen]
    );
}

#[test]
fn filtered_uses_suppression_range() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedExpression, range(2, 3))
        .suppression_range(range(0, 20))
        .emit();
    diagnostics
        .report(DiagnosticKind::UnexpectedToken, range(8, 9))
        .emit();

    assert_eq!(
        diagnostics.filtered().kinds(),
        [DiagnosticKind::ExpectedExpression]
    );
}

#[test]
fn filtered_root_cause_beats_structural_at_same_start() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedParen, range(4, 12))
        .emit();
    diagnostics
        .report(DiagnosticKind::ExpectedExpression, range(4, 5))
        .emit();

    assert_eq!(
        diagnostics.filtered().kinds(),
        [DiagnosticKind::ExpectedExpression]
    );
}

#[test]
fn filtered_root_cause_wins_in_either_order() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedValue, range(7, 8))
        .emit();
    diagnostics
        .report(DiagnosticKind::UnclosedBracket, range(7, 20))
        .emit();

    assert_eq!(diagnostics.filtered().kinds(), [DiagnosticKind::ExpectedValue]);
}

#[test]
fn filtered_same_span_higher_priority_wins() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ReservedWordMisuse, range(0, 10))
        .emit();
    diagnostics
        .report(DiagnosticKind::UnexpectedToken, range(0, 10))
        .emit();

    assert_eq!(
        diagnostics.filtered().kinds(),
        [DiagnosticKind::ReservedWordMisuse]
    );
}

#[test]
fn filtered_empty_diagnostics() {
    assert!(Diagnostics::new().filtered().is_empty());
}

#[test]
fn render_filtered() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedParen, range(0, 20))
        .message("unclosed call")
        .emit();
    diagnostics
        .report(DiagnosticKind::MultipleUnnamedArgs, range(5, 15))
        .emit();

    let result = diagnostics.render_filtered("count(a, b, c, d, e, f");
    assert!(result.contains("unclosed call"));
    assert!(!result.contains("only one argument may be unnamed"));
}
