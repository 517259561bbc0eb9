//! Tree dumps: the raw CST, or an outline of the typed AST.

use std::fmt::Write;

use rowan::NodeOrToken;

use crate::parser::{
    Arg, ArgValue, Expr, Filter, FunctionCall, Guard, MatchArm, Pipeline, QueryParameter, Root,
    Step, SyntaxNode, Value, ast,
};

use super::Query;

pub struct QueryPrinter<'q, 'src> {
    query: &'q Query<'src>,
    raw: bool,
    trivia: bool,
    spans: bool,
}

impl<'q, 'src> QueryPrinter<'q, 'src> {
    pub fn new(query: &'q Query<'src>) -> Self {
        Self {
            query,
            raw: false,
            trivia: false,
            spans: false,
        }
    }

    /// Dump the CST node by node instead of the AST outline.
    pub fn raw(mut self, value: bool) -> Self {
        self.raw = value;
        self
    }

    /// Include whitespace and comments in the raw dump.
    pub fn with_trivia(mut self, value: bool) -> Self {
        self.trivia = value;
        self
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        if self.raw {
            self.format_cst(self.query.as_cst(), 0, w)
        } else {
            self.format_root(self.query.root(), w)
        }
    }

    fn format_cst(&self, node: &SyntaxNode, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        let span = self.span_str(node.text_range());

        writeln!(w, "{}{:?}{}", prefix, node.kind(), span)?;

        for child in node.children_with_tokens() {
            match child {
                NodeOrToken::Node(n) => self.format_cst(&n, indent + 1, w)?,
                NodeOrToken::Token(t) => {
                    if self.trivia || !t.kind().is_trivia() {
                        let child_prefix = "  ".repeat(indent + 1);
                        let child_span = self.span_str(t.text_range());
                        writeln!(
                            w,
                            "{}{:?}{} {:?}",
                            child_prefix,
                            t.kind(),
                            child_span,
                            t.text()
                        )?;
                    }
                }
            }
        }
        Ok(())
    }

    /// One outline line: `Label [s..e] detail`.
    fn line(
        &self,
        indent: usize,
        label: &str,
        node: &SyntaxNode,
        detail: Option<&str>,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        let span = self.span_str(node.text_range());
        match detail {
            Some(d) => writeln!(w, "{}{}{} {}", prefix, label, span, d),
            None => writeln!(w, "{}{}{}", prefix, label, span),
        }
    }

    fn format_root(&self, root: &Root, w: &mut impl Write) -> std::fmt::Result {
        self.line(0, "Query", root.as_cst(), None, w)?;
        if let Some(pipeline) = root.pipeline() {
            self.format_pipeline(&pipeline, 1, w)?;
        }
        Ok(())
    }

    fn format_pipeline(&self, pipeline: &Pipeline, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        self.line(indent, "Pipeline", pipeline.as_cst(), None, w)?;
        for step in pipeline.steps() {
            self.format_step(&step, indent + 1, w)?;
        }
        Ok(())
    }

    fn format_step(&self, step: &Step, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        match step {
            Step::Filter(filter) => self.format_filter(filter, indent, w),
            Step::Eval(eval) => {
                let field = eval.field().map(|f| f.text());
                self.line(indent, "Eval", eval.as_cst(), field.as_deref(), w)?;
                if let Some(value) = eval.value() {
                    self.format_expr(&value, indent + 1, w)?;
                }
                Ok(())
            }
            Step::EvalFunction(eval) => {
                let field = eval.field().map(|f| f.text());
                self.line(indent, "EvalFunction", eval.as_cst(), field.as_deref(), w)?;
                if let Some(call) = eval.call() {
                    self.format_call(&call, indent + 1, w)?;
                }
                Ok(())
            }
            Step::FieldShorthand(shorthand) => {
                let field = shorthand.field().map(|f| f.text());
                self.line(indent, "FieldShorthand", shorthand.as_cst(), field.as_deref(), w)?;
                if let Some(call) = shorthand.call() {
                    self.format_call(&call, indent + 1, w)?;
                }
                Ok(())
            }
            Step::Array(array) => self.format_array(array, indent, w),
            Step::Case(case) => {
                self.line(indent, "Case", case.as_cst(), None, w)?;
                for branch in case.branches() {
                    self.format_pipeline(&branch, indent + 1, w)?;
                }
                Ok(())
            }
            Step::Match(expr) => {
                let field = expr.field().map(|f| f.text());
                self.line(indent, "Match", expr.as_cst(), field.as_deref(), w)?;
                for arm in expr.arms() {
                    self.format_arm(&arm, indent + 1, w)?;
                }
                Ok(())
            }
            Step::SavedQuery(saved) => {
                let name = saved.name();
                self.line(indent, "SavedQuery", saved.as_cst(), name.as_deref(), w)?;
                for arg in saved.args() {
                    self.format_arg(&arg, indent + 1, w)?;
                }
                Ok(())
            }
        }
    }

    fn format_filter(&self, filter: &Filter, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        match filter {
            Filter::And(and) => {
                let detail = and.is_implicit().then_some("implicit");
                self.line(indent, "And", and.as_cst(), detail, w)?;
                for operand in and.operands() {
                    self.format_filter(&operand, indent + 1, w)?;
                }
            }
            Filter::Or(or) => {
                self.line(indent, "Or", or.as_cst(), None, w)?;
                for operand in or.operands() {
                    self.format_filter(&operand, indent + 1, w)?;
                }
            }
            Filter::Not(not) => {
                self.line(indent, "Not", not.as_cst(), None, w)?;
                if let Some(operand) = not.operand() {
                    self.format_filter(&operand, indent + 1, w)?;
                }
            }
            Filter::FieldComparison(cmp) => {
                let field = cmp.field().map(|f| f.text()).unwrap_or_default();
                let op = cmp.operator().map(|t| t.text().to_string()).unwrap_or_default();
                let detail = format!("{} {}", field, op);
                self.line(indent, "Compare", cmp.as_cst(), Some(&detail), w)?;
                if let Some(value) = cmp.value() {
                    self.format_value(&value, indent + 1, w)?;
                }
            }
            Filter::FreeText(text) => {
                self.line(indent, "FreeText", text.as_cst(), None, w)?;
                if let Some(value) = text.value() {
                    self.format_value(&value, indent + 1, w)?;
                }
            }
            Filter::Parenthesized(paren) => {
                self.line(indent, "Paren", paren.as_cst(), None, w)?;
                if let Some(inner) = paren.inner() {
                    self.format_filter(&inner, indent + 1, w)?;
                }
            }
            Filter::Boolean(boolean) => {
                let detail = boolean.value().map(|b| b.to_string());
                self.line(indent, "Bool", boolean.as_cst(), detail.as_deref(), w)?;
            }
            Filter::Call(call) => self.format_call(call, indent, w)?,
            Filter::Parameter(param) => self.format_parameter(param, indent, w)?,
        }
        Ok(())
    }

    fn format_value(&self, value: &Value, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        match value {
            Value::Pattern(pattern) => {
                self.line(indent, "Pattern", pattern.as_cst(), Some(&pattern.text()), w)
            }
            Value::String(string) => self.format_leaf("String", string.as_cst(), indent, w),
            Value::Regex(regex) => self.format_leaf("Regex", regex.as_cst(), indent, w),
            Value::Parameter(param) => self.format_parameter(param, indent, w),
        }
    }

    fn format_leaf(
        &self,
        label: &str,
        node: &SyntaxNode,
        indent: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        let text = node.text().to_string();
        self.line(indent, label, node, Some(text.trim()), w)
    }

    fn format_parameter(&self, param: &QueryParameter, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let name = param.name().map(|n| n.text()).unwrap_or_default();
        self.line(indent, "Param", param.as_cst(), Some(&name), w)?;
        if let Some(default) = param.default_value() {
            self.format_value(&default, indent + 1, w)?;
        }
        Ok(())
    }

    fn format_call(&self, call: &FunctionCall, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let name = call.name().map(|n| n.text());
        self.line(indent, "Call", call.as_cst(), name.as_deref(), w)?;
        for arg in call.args() {
            self.format_arg(&arg, indent + 1, w)?;
        }
        Ok(())
    }

    fn format_arg(&self, arg: &Arg, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let value = match arg {
            Arg::Named(named) => {
                let name = named.name().map(|n| format!("{}=", n.text()));
                self.line(indent, "Arg", named.as_cst(), name.as_deref(), w)?;
                named.value()
            }
            Arg::Unnamed(unnamed) => {
                self.line(indent, "Arg", unnamed.as_cst(), None, w)?;
                unnamed.value()
            }
        };
        if let Some(value) = value {
            self.format_arg_value(&value, indent + 1, w)?;
        }
        Ok(())
    }

    fn format_arg_value(&self, value: &ArgValue, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        match value {
            ArgValue::Expr(expr) => self.format_expr(expr, indent, w),
            ArgValue::Array(array) => self.format_array(array, indent, w),
            ArgValue::Subquery(subquery) => {
                self.line(indent, "Subquery", subquery.as_cst(), None, w)?;
                if let Some(pipeline) = subquery.pipeline() {
                    self.format_pipeline(&pipeline, indent + 1, w)?;
                }
                Ok(())
            }
        }
    }

    fn format_array(&self, array: &ast::ArrayExpr, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        self.line(indent, "Array", array.as_cst(), None, w)?;
        for element in array.elements() {
            self.format_arg_value(&element, indent + 1, w)?;
        }
        Ok(())
    }

    fn format_expr(&self, expr: &Expr, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let (op, lhs, rhs) = match expr {
            Expr::Comparison(e) => (e.operator(), e.lhs(), e.rhs()),
            Expr::Additive(e) => (e.operator(), e.lhs(), e.rhs()),
            Expr::Multiplicative(e) => (e.operator(), e.lhs(), e.rhs()),
            Expr::Unary(unary) => {
                let op = unary.operator().map(|t| t.text().to_string());
                self.line(indent, "Unary", unary.as_cst(), op.as_deref(), w)?;
                if let Some(operand) = unary.operand() {
                    self.format_expr(&operand, indent + 1, w)?;
                }
                return Ok(());
            }
            Expr::Paren(paren) => {
                self.line(indent, "Paren", paren.as_cst(), None, w)?;
                if let Some(inner) = paren.inner() {
                    self.format_expr(&inner, indent + 1, w)?;
                }
                return Ok(());
            }
            Expr::Number(number) => return self.format_leaf("Number", number.as_cst(), indent, w),
            Expr::String(string) => return self.format_leaf("String", string.as_cst(), indent, w),
            Expr::Call(call) => return self.format_call(call, indent, w),
            Expr::Field(field) => {
                return self.line(indent, "Field", field.as_cst(), Some(&field.text()), w);
            }
            Expr::Parameter(param) => return self.format_parameter(param, indent, w),
        };

        let op = op.map(|t| t.text().to_string());
        self.line(indent, "Binary", expr.as_cst(), op.as_deref(), w)?;
        for operand in [lhs, rhs].into_iter().flatten() {
            self.format_expr(&operand, indent + 1, w)?;
        }
        Ok(())
    }

    fn format_arm(&self, arm: &MatchArm, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        self.line(indent, "Arm", arm.as_cst(), None, w)?;
        if let Some(guard) = arm.guard() {
            self.format_guard(&guard, indent + 1, w)?;
        }
        if let Some(body) = arm.body() {
            self.format_pipeline(&body, indent + 1, w)?;
        }
        Ok(())
    }

    fn format_guard(&self, guard: &Guard, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        match guard {
            Guard::Wildcard(wildcard) => self.line(indent, "Wildcard", wildcard.as_cst(), None, w),
            Guard::Regex(regex) => self.format_leaf("Regex", regex.as_cst(), indent, w),
            Guard::Call(call) => self.format_call(call, indent, w),
            Guard::Parameter(param) => self.format_parameter(param, indent, w),
            Guard::Anchored(anchored) => {
                self.line(indent, "Anchored", anchored.as_cst(), None, w)?;
                if let Some(value) = anchored.value() {
                    self.format_value(&value, indent + 1, w)?;
                }
                Ok(())
            }
        }
    }

    fn span_str(&self, range: rowan::TextRange) -> String {
        if !self.spans {
            return String::new();
        }
        format!(
            " [{}..{}]",
            u32::from(range.start()),
            u32::from(range.end())
        )
    }
}
