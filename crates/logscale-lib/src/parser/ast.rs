//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors.
//! Cast is infallible for correct `SyntaxKind` - validation happens in the parser.

use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

/// Closed sum over node wrappers: `cast` dispatches on kind, `as_cst` unwraps.
macro_rules! ast_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident($ty:ident) = $kind:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant($ty)),+
        }

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                match node.kind() {
                    $(SyntaxKind::$kind => $ty::cast(node).map($name::$variant),)+
                    _ => None,
                }
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                match self {
                    $($name::$variant(n) => n.as_cst(),)+
                }
            }
        }
    };
}

ast_node!(Root, Query);
ast_node!(Pipeline, Pipeline);
ast_node!(AndFilter, AndFilter);
ast_node!(OrFilter, OrFilter);
ast_node!(NotFilter, NotFilter);
ast_node!(FieldComparison, FieldComparison);
ast_node!(FreeTextPattern, FreeTextPattern);
ast_node!(ParenthesizedFilter, ParenthesizedFilter);
ast_node!(BooleanFilter, BooleanFilter);
ast_node!(Pattern, Pattern);
ast_node!(AnchoredPattern, AnchoredPattern);
ast_node!(Wildcard, Wildcard);
ast_node!(ComparisonExpr, ComparisonExpr);
ast_node!(AdditiveExpr, AdditiveExpr);
ast_node!(MultiplicativeExpr, MultiplicativeExpr);
ast_node!(UnaryExpr, UnaryExpr);
ast_node!(ParenExpr, ParenExpr);
ast_node!(FunctionCall, FunctionCall);
ast_node!(ArgList, ArgList);
ast_node!(NamedArg, NamedArg);
ast_node!(UnnamedArg, UnnamedArg);
ast_node!(EvalShorthand, EvalShorthand);
ast_node!(EvalFunctionShorthand, EvalFunctionShorthand);
ast_node!(FieldShorthand, FieldShorthand);
ast_node!(ArrayExpr, ArrayExpr);
ast_node!(Subquery, Subquery);
ast_node!(CaseExpr, CaseExpr);
ast_node!(MatchExpr, MatchExpr);
ast_node!(MatchArm, MatchArm);
ast_node!(SavedQuery, SavedQuery);
ast_node!(QueryParameter, QueryParameter);
ast_node!(Regex, Regex);
ast_node!(Identifier, Identifier);
ast_node!(QuotedString, QuotedString);
ast_node!(Number, Number);
ast_node!(FieldName, FieldName);

ast_enum!(
    /// Boolean predicate over events.
    Filter {
        And(AndFilter) = AndFilter,
        Or(OrFilter) = OrFilter,
        Not(NotFilter) = NotFilter,
        FieldComparison(FieldComparison) = FieldComparison,
        FreeText(FreeTextPattern) = FreeTextPattern,
        Parenthesized(ParenthesizedFilter) = ParenthesizedFilter,
        Boolean(BooleanFilter) = BooleanFilter,
        Call(FunctionCall) = FunctionCall,
        Parameter(QueryParameter) = QueryParameter,
    }
);

ast_enum!(
    /// Expression: function arguments and `:=` right-hand sides. Never a regex.
    Expr {
        Comparison(ComparisonExpr) = ComparisonExpr,
        Additive(AdditiveExpr) = AdditiveExpr,
        Multiplicative(MultiplicativeExpr) = MultiplicativeExpr,
        Unary(UnaryExpr) = UnaryExpr,
        Paren(ParenExpr) = ParenExpr,
        Number(Number) = Number,
        String(QuotedString) = QuotedString,
        Call(FunctionCall) = FunctionCall,
        Field(FieldName) = FieldName,
        Parameter(QueryParameter) = QueryParameter,
    }
);

ast_enum!(
    /// Right-hand side of a comparison, or the operand of a free-text search.
    Value {
        Pattern(Pattern) = Pattern,
        String(QuotedString) = QuotedString,
        Regex(Regex) = Regex,
        Parameter(QueryParameter) = QueryParameter,
    }
);

ast_enum!(
    /// Left-hand selector of a match arm.
    Guard {
        Wildcard(Wildcard) = Wildcard,
        Regex(Regex) = Regex,
        Call(FunctionCall) = FunctionCall,
        Parameter(QueryParameter) = QueryParameter,
        Anchored(AnchoredPattern) = AnchoredPattern,
    }
);

ast_enum!(
    Arg {
        Named(NamedArg) = NamedArg,
        Unnamed(UnnamedArg) = UnnamedArg,
    }
);

/// One stage of a pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    Filter(Filter),
    Eval(EvalShorthand),
    EvalFunction(EvalFunctionShorthand),
    FieldShorthand(FieldShorthand),
    Array(ArrayExpr),
    Case(CaseExpr),
    Match(MatchExpr),
    SavedQuery(SavedQuery),
}

impl Step {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::EvalShorthand => EvalShorthand::cast(node).map(Step::Eval),
            SyntaxKind::EvalFunctionShorthand => {
                EvalFunctionShorthand::cast(node).map(Step::EvalFunction)
            }
            SyntaxKind::FieldShorthand => FieldShorthand::cast(node).map(Step::FieldShorthand),
            SyntaxKind::ArrayExpr => ArrayExpr::cast(node).map(Step::Array),
            SyntaxKind::CaseExpr => CaseExpr::cast(node).map(Step::Case),
            SyntaxKind::MatchExpr => MatchExpr::cast(node).map(Step::Match),
            SyntaxKind::SavedQuery => SavedQuery::cast(node).map(Step::SavedQuery),
            _ => Filter::cast(node).map(Step::Filter),
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Step::Filter(n) => n.as_cst(),
            Step::Eval(n) => n.as_cst(),
            Step::EvalFunction(n) => n.as_cst(),
            Step::FieldShorthand(n) => n.as_cst(),
            Step::Array(n) => n.as_cst(),
            Step::Case(n) => n.as_cst(),
            Step::Match(n) => n.as_cst(),
            Step::SavedQuery(n) => n.as_cst(),
        }
    }
}

/// Function argument or array element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArgValue {
    Expr(Expr),
    Array(ArrayExpr),
    Subquery(Subquery),
}

impl ArgValue {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::ArrayExpr => ArrayExpr::cast(node).map(ArgValue::Array),
            SyntaxKind::Subquery => Subquery::cast(node).map(ArgValue::Subquery),
            _ => Expr::cast(node).map(ArgValue::Expr),
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            ArgValue::Expr(n) => n.as_cst(),
            ArgValue::Array(n) => n.as_cst(),
            ArgValue::Subquery(n) => n.as_cst(),
        }
    }
}

fn token(node: &SyntaxNode, pred: impl Fn(SyntaxKind) -> bool) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| pred(t.kind()))
}

/// First non-trivia token directly under `node`.
fn first_token(node: &SyntaxNode) -> Option<SyntaxToken> {
    token(node, |k| !k.is_trivia())
}

impl Root {
    pub fn pipeline(&self) -> Option<Pipeline> {
        self.0.children().find_map(Pipeline::cast)
    }
}

impl Pipeline {
    pub fn steps(&self) -> impl Iterator<Item = Step> + '_ {
        self.0.children().filter_map(Step::cast)
    }
}

impl AndFilter {
    pub fn operands(&self) -> impl Iterator<Item = Filter> + '_ {
        self.0.children().filter_map(Filter::cast)
    }

    /// Whether every operand boundary is implicit (no `AND` keyword).
    pub fn is_implicit(&self) -> bool {
        token(&self.0, |k| k == SyntaxKind::KwAnd).is_none()
    }
}

impl OrFilter {
    pub fn operands(&self) -> impl Iterator<Item = Filter> + '_ {
        self.0.children().filter_map(Filter::cast)
    }
}

impl NotFilter {
    /// `NOT` keyword or `!`.
    pub fn operator(&self) -> Option<SyntaxToken> {
        first_token(&self.0)
    }

    pub fn operand(&self) -> Option<Filter> {
        self.0.children().find_map(Filter::cast)
    }
}

impl FieldComparison {
    pub fn field(&self) -> Option<FieldName> {
        self.0.children().find_map(FieldName::cast)
    }

    pub fn operator(&self) -> Option<SyntaxToken> {
        first_token(&self.0)
    }

    pub fn value(&self) -> Option<Value> {
        self.0.children().find_map(Value::cast)
    }
}

impl FreeTextPattern {
    pub fn value(&self) -> Option<Value> {
        self.0.children().find_map(Value::cast)
    }
}

impl ParenthesizedFilter {
    pub fn inner(&self) -> Option<Filter> {
        self.0.children().find_map(Filter::cast)
    }
}

impl BooleanFilter {
    pub fn value(&self) -> Option<bool> {
        match first_token(&self.0)?.kind() {
            SyntaxKind::KwTrue => Some(true),
            SyntaxKind::KwFalse => Some(false),
            _ => None,
        }
    }
}

impl Pattern {
    pub fn token(&self) -> Option<SyntaxToken> {
        first_token(&self.0)
    }

    pub fn text(&self) -> String {
        self.token().map(|t| t.text().to_string()).unwrap_or_default()
    }
}

impl AnchoredPattern {
    pub fn value(&self) -> Option<Value> {
        self.0.children().find_map(Value::cast)
    }
}

impl Wildcard {
    pub fn token(&self) -> Option<SyntaxToken> {
        first_token(&self.0)
    }
}

macro_rules! binary_expr {
    ($name:ident) => {
        impl $name {
            pub fn lhs(&self) -> Option<Expr> {
                self.0.children().find_map(Expr::cast)
            }

            pub fn rhs(&self) -> Option<Expr> {
                self.0.children().filter_map(Expr::cast).nth(1)
            }

            pub fn operator(&self) -> Option<SyntaxToken> {
                first_token(&self.0)
            }
        }
    };
}

binary_expr!(ComparisonExpr);
binary_expr!(AdditiveExpr);
binary_expr!(MultiplicativeExpr);

impl UnaryExpr {
    pub fn operator(&self) -> Option<SyntaxToken> {
        first_token(&self.0)
    }

    pub fn operand(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

impl ParenExpr {
    pub fn inner(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

impl FunctionCall {
    pub fn name(&self) -> Option<Identifier> {
        self.0.children().find_map(Identifier::cast)
    }

    pub fn arg_list(&self) -> Option<ArgList> {
        self.0.children().find_map(ArgList::cast)
    }

    pub fn args(&self) -> impl Iterator<Item = Arg> + '_ {
        self.arg_list().into_iter().flat_map(|list| list.args().collect::<Vec<_>>())
    }
}

impl ArgList {
    pub fn args(&self) -> impl Iterator<Item = Arg> + '_ {
        self.0.children().filter_map(Arg::cast)
    }
}

impl NamedArg {
    pub fn name(&self) -> Option<Identifier> {
        self.0.children().find_map(Identifier::cast)
    }

    pub fn value(&self) -> Option<ArgValue> {
        self.0.children().find_map(ArgValue::cast)
    }
}

impl UnnamedArg {
    pub fn value(&self) -> Option<ArgValue> {
        self.0.children().find_map(ArgValue::cast)
    }
}

impl EvalShorthand {
    pub fn field(&self) -> Option<FieldName> {
        self.0.children().find_map(FieldName::cast)
    }

    /// Right-hand side. Skips the target, which is also a `FieldName` node.
    pub fn value(&self) -> Option<Expr> {
        self.0.children().filter_map(Expr::cast).nth(1)
    }
}

impl EvalFunctionShorthand {
    pub fn field(&self) -> Option<FieldName> {
        self.0.children().find_map(FieldName::cast)
    }

    pub fn call(&self) -> Option<FunctionCall> {
        self.0.children().find_map(FunctionCall::cast)
    }
}

impl FieldShorthand {
    pub fn field(&self) -> Option<FieldName> {
        self.0.children().find_map(FieldName::cast)
    }

    pub fn call(&self) -> Option<FunctionCall> {
        self.0.children().find_map(FunctionCall::cast)
    }
}

impl ArrayExpr {
    pub fn elements(&self) -> impl Iterator<Item = ArgValue> + '_ {
        self.0.children().filter_map(ArgValue::cast)
    }
}

impl Subquery {
    pub fn pipeline(&self) -> Option<Pipeline> {
        self.0.children().find_map(Pipeline::cast)
    }
}

impl CaseExpr {
    pub fn branches(&self) -> impl Iterator<Item = Pipeline> + '_ {
        self.0.children().filter_map(Pipeline::cast)
    }
}

impl MatchExpr {
    pub fn field(&self) -> Option<FieldName> {
        self.0.children().find_map(FieldName::cast)
    }

    pub fn arms(&self) -> impl Iterator<Item = MatchArm> + '_ {
        self.0.children().filter_map(MatchArm::cast)
    }
}

impl MatchArm {
    pub fn guard(&self) -> Option<Guard> {
        self.0.children().find_map(Guard::cast)
    }

    pub fn body(&self) -> Option<Pipeline> {
        self.0.children().find_map(Pipeline::cast)
    }
}

impl SavedQuery {
    /// Name as written: an `Identifier`, or the text of a quoted name including quotes.
    pub fn name(&self) -> Option<String> {
        self.0.children().find_map(|n| match n.kind() {
            SyntaxKind::Identifier | SyntaxKind::QuotedString => Some(n.text().to_string()),
            _ => None,
        })
    }

    pub fn args(&self) -> impl Iterator<Item = Arg> + '_ {
        self.0
            .children()
            .find_map(ArgList::cast)
            .into_iter()
            .flat_map(|list| list.args().collect::<Vec<_>>())
    }
}

impl QueryParameter {
    pub fn name(&self) -> Option<Identifier> {
        self.0.children().find_map(Identifier::cast)
    }

    pub fn default_value(&self) -> Option<Value> {
        self.0.children().find_map(Value::cast)
    }
}

impl Regex {
    pub fn body(&self) -> Option<SyntaxToken> {
        token(&self.0, |k| k == SyntaxKind::RegexBody)
    }

    pub fn flags(&self) -> Option<SyntaxToken> {
        token(&self.0, |k| k == SyntaxKind::RegexFlags)
    }

    pub fn is_terminated(&self) -> bool {
        self.0
            .children_with_tokens()
            .filter(|it| it.kind() == SyntaxKind::Slash)
            .count()
            == 2
    }
}

impl Identifier {
    /// Full name, namespace segments included (`text:contains`).
    pub fn text(&self) -> String {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .filter(|t| !t.kind().is_trivia())
            .map(|t| t.text().to_string())
            .collect()
    }
}

impl QuotedString {
    pub fn token(&self) -> Option<SyntaxToken> {
        first_token(&self.0)
    }

    pub fn is_terminated(&self) -> bool {
        self.token()
            .is_some_and(|t| t.kind() == SyntaxKind::StringLit)
    }
}

impl Number {
    pub fn token(&self) -> Option<SyntaxToken> {
        first_token(&self.0)
    }
}

impl FieldName {
    pub fn token(&self) -> Option<SyntaxToken> {
        first_token(&self.0)
    }

    pub fn text(&self) -> String {
        self.token().map(|t| t.text().to_string()).unwrap_or_default()
    }
}
