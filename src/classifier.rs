// Copyright (C) Brian G. Milnes 2025

//! Comparator classifier
//!
//! Decides whether the second argument of a matched call site is a
//! comparator the rewriter is allowed to touch: an anonymous function
//! literal declaring exactly one result whose type is syntactically
//! `bool`. No alias resolution is attempted; `pkg.Bool` or a renamed
//! `bool` never qualifies.

pub mod classifier {
    use crate::ast_utils::ast_utils::{named_children, node_text};
    use tree_sitter::Node;

    /// Result type an eligible comparator must declare
    pub const BOOL_TYPE: &str = "bool";

    /// An eligible comparator function literal
    #[derive(Debug, Clone, Copy)]
    pub struct Comparator<'t> {
        /// The `func_literal` node itself
        pub func_lit: Node<'t>,
        /// The declared `bool` result type, the flip target
        pub result_type: Node<'t>,
        /// The body block whose statements are rewritten
        pub body: Node<'t>,
    }

    /// Classify a call-site argument as an eligible comparator
    ///
    /// Returns `None` for anything the rewriter must leave alone.
    pub fn classify<'t>(candidate: Node<'t>, source: &str) -> Option<Comparator<'t>> {
        if candidate.kind() != "func_literal" {
            return None;
        }

        let result = candidate.child_by_field_name("result")?;
        let result_type = single_result_type(result)?;
        if result_type.kind() != "type_identifier"
            || node_text(&result_type, source) != BOOL_TYPE
        {
            return None;
        }

        let body = candidate.child_by_field_name("body")?;

        Some(Comparator {
            func_lit: candidate,
            result_type,
            body,
        })
    }

    /// Extract the type node of a single-result result list
    ///
    /// The result of a Go func literal is either a bare type (`func(...) bool`)
    /// or a parenthesized parameter list (`(bool)`, `(ok bool)`). A list with
    /// more than one declaration, or one declaration naming several results
    /// (`(ok, less bool)`), declares more than one result.
    fn single_result_type(result: Node<'_>) -> Option<Node<'_>> {
        if result.kind() != "parameter_list" {
            return Some(result);
        }

        let declarations = named_children(&result);
        if declarations.len() != 1 {
            return None;
        }

        let declaration = declarations[0];
        if declaration.kind() != "parameter_declaration" {
            return None;
        }

        let mut cursor = declaration.walk();
        let names = declaration.children_by_field_name("name", &mut cursor).count();
        if names > 1 {
            return None;
        }

        declaration.child_by_field_name("type")
    }
}
