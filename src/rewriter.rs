// Copyright (C) Brian G. Milnes 2025

//! Expression rewriter for comparator bodies
//!
//! Replaces qualifying relational returns with three-way `cmp.Compare`
//! calls and flips the declared result type from `bool` to `int`. Every
//! statement outside the recognized shapes is preserved exactly as the
//! author wrote it.

pub mod rewriter {
    use crate::ast_utils::ast_utils::{line_number, named_children, node_text, TextEdit};
    use crate::classifier::classifier::Comparator;
    use serde::{Deserialize, Serialize};
    use tree_sitter::Node;

    /// Package providing the three-way comparison
    pub const CMP_PACKAGE: &str = "cmp";

    /// Three-way comparison function within that package
    pub const CMP_COMPARE_FUNC: &str = "Compare";

    /// Result type a rewritten comparator declares
    pub const INT_TYPE: &str = "int";

    /// Relational operators the rewriter understands
    ///
    /// `<=` and `>=` have no sign-preserving `Compare` equivalent and are
    /// never rewritten.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum RelOp {
        Less,
        Greater,
        Equal,
        NotEqual,
    }

    impl RelOp {
        /// Map an operator token to a recognized relational operator
        pub fn from_token(token: &str) -> Option<RelOp> {
            match token {
                "<" => Some(RelOp::Less),
                ">" => Some(RelOp::Greater),
                "==" => Some(RelOp::Equal),
                "!=" => Some(RelOp::NotEqual),
                _ => None,
            }
        }

        pub fn token(&self) -> &'static str {
            match self {
                RelOp::Less => "<",
                RelOp::Greater => ">",
                RelOp::Equal => "==",
                RelOp::NotEqual => "!=",
            }
        }

        /// Whether operands must swap so the three-way call returns a
        /// negative value exactly when the boolean comparator returned true
        pub fn swaps_operands(&self) -> bool {
            matches!(self, RelOp::Greater | RelOp::NotEqual)
        }
    }

    /// One applied return-statement rewrite
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct Rewrite {
        pub line: usize,
        pub operator: String,
        pub original: String,
        pub replacement: String,
    }

    impl std::fmt::Display for Rewrite {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(
                f,
                "line {}: `{}` ({}) -> `{}`",
                self.line, self.original, self.operator, self.replacement
            )
        }
    }

    /// Edits and records produced for one comparator
    #[derive(Debug, Default)]
    pub struct ComparatorRewrite {
        pub edits: Vec<TextEdit>,
        pub rewrites: Vec<Rewrite>,
    }

    /// Check for a logical `&&`/`||` anywhere in an expression's span
    pub fn has_logical_operator(expr: Node<'_>) -> bool {
        let mut stack = vec![expr];
        while let Some(node) = stack.pop() {
            if node.kind() == "binary_expression" {
                if let Some(op) = node.child_by_field_name("operator") {
                    if matches!(op.kind(), "&&" | "||") {
                        return true;
                    }
                }
            }
            for i in 0..node.child_count() {
                if let Some(child) = node.child(i) {
                    stack.push(child);
                }
            }
        }
        false
    }

    /// Pick apart a return statement the rewriter may replace
    ///
    /// Returns the operator and the left/right operands of the relational
    /// expression, or `None` when the statement must be preserved.
    fn qualifying_return(stmt: Node<'_>) -> Option<(RelOp, Node<'_>, Node<'_>)> {
        let values = named_children(&stmt)
            .into_iter()
            .find(|n| n.kind() == "expression_list")?;

        let results = named_children(&values);
        if results.len() != 1 {
            return None;
        }

        let expr = results[0];
        if expr.kind() != "binary_expression" {
            return None;
        }
        if has_logical_operator(expr) {
            return None;
        }

        let op = RelOp::from_token(expr.child_by_field_name("operator")?.kind())?;
        let left = expr.child_by_field_name("left")?;
        let right = expr.child_by_field_name("right")?;

        Some((op, left, right))
    }

    /// Rewrite the body of an eligible comparator
    ///
    /// Scans the top-level statements in order, replacing each qualifying
    /// return with `return cmp.Compare(first, second)`. The declared result
    /// type flips `bool` -> `int` only when at least one return was actually
    /// rewritten; a comparator whose body yields nothing is left untouched,
    /// signature included.
    pub fn rewrite_comparator(comparator: &Comparator<'_>, source: &str) -> ComparatorRewrite {
        let mut out = ComparatorRewrite::default();

        for stmt in named_children(&comparator.body) {
            if stmt.kind() != "return_statement" {
                continue;
            }
            let Some((op, left, right)) = qualifying_return(stmt) else {
                continue;
            };

            let (first, second) = if op.swaps_operands() {
                (right, left)
            } else {
                (left, right)
            };

            let replacement = format!(
                "return {}.{}({}, {})",
                CMP_PACKAGE,
                CMP_COMPARE_FUNC,
                node_text(&first, source),
                node_text(&second, source)
            );

            out.rewrites.push(Rewrite {
                line: line_number(&stmt, source),
                operator: op.token().to_string(),
                original: node_text(&stmt, source).to_string(),
                replacement: replacement.clone(),
            });
            out.edits.push(TextEdit::replace(stmt.byte_range(), replacement));
        }

        if !out.rewrites.is_empty() {
            out.edits.push(TextEdit::replace(
                comparator.result_type.byte_range(),
                INT_TYPE.to_string(),
            ));
        }

        out
    }
}
