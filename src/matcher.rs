// Copyright (C) Brian G. Milnes 2025

//! Call-site matcher for the slices sort-function family
//!
//! Walks the tree once, pre-order, and yields every call expression of the
//! form `slices.SortFunc(xs, cmp)` / `slices.SortStableFunc(xs, cmp)` with
//! exactly two arguments. Anything that fails a filter is skipped, never an
//! error. Traversal descends into children whether or not the node itself
//! matched, so nested call sites are found independently.

pub mod matcher {
    use crate::ast_utils::ast_utils::{named_children, node_text};
    use tree_sitter::Node;

    /// Package qualifier of the target sort functions
    pub const SORT_MODULE: &str = "slices";

    /// Member-name whitelist; a prefix match also qualifies
    pub const SORT_FUNC_NAMES: [&str; 2] = ["SortFunc", "SortStableFunc"];

    /// Check whether a member name is in, or prefixed by, the whitelist
    pub fn is_sort_func_name(name: &str) -> bool {
        SORT_FUNC_NAMES.iter().any(|n| name.starts_with(n))
    }

    /// An eligible call site: `slices.SortFunc*(collection, comparator)`
    #[derive(Debug, Clone, Copy)]
    pub struct CallSite<'t> {
        /// The whole call expression
        pub call: Node<'t>,
        /// First argument, the collection being sorted
        pub collection: Node<'t>,
        /// Second argument, the comparator candidate
        pub comparator: Node<'t>,
    }

    impl<'t> CallSite<'t> {
        /// Structural filters, applied in order; any failure skips the node
        fn match_node(node: Node<'t>, source: &str) -> Option<CallSite<'t>> {
            if node.kind() != "call_expression" {
                return None;
            }

            // Callee must be a qualified reference, not a bare name
            let callee = node.child_by_field_name("function")?;
            if callee.kind() != "selector_expression" {
                return None;
            }

            let operand = callee.child_by_field_name("operand")?;
            if operand.kind() != "identifier" || node_text(&operand, source) != SORT_MODULE {
                return None;
            }

            let member = callee.child_by_field_name("field")?;
            if !is_sort_func_name(node_text(&member, source)) {
                return None;
            }

            let arguments = node.child_by_field_name("arguments")?;
            let args = named_children(&arguments);
            if args.len() != 2 {
                return None;
            }

            Some(CallSite {
                call: node,
                collection: args[0],
                comparator: args[1],
            })
        }
    }

    /// Lazy, finite, non-restartable sequence of eligible call sites
    pub struct CallSites<'t> {
        source: &'t str,
        stack: Vec<Node<'t>>,
    }

    impl<'t> Iterator for CallSites<'t> {
        type Item = CallSite<'t>;

        fn next(&mut self) -> Option<CallSite<'t>> {
            while let Some(node) = self.stack.pop() {
                for i in (0..node.child_count()).rev() {
                    if let Some(child) = node.child(i) {
                        self.stack.push(child);
                    }
                }
                if let Some(site) = CallSite::match_node(node, self.source) {
                    return Some(site);
                }
            }
            None
        }
    }

    /// Find all eligible sort call sites under a root node
    pub fn find_sort_call_sites<'t>(root: Node<'t>, source: &'t str) -> CallSites<'t> {
        CallSites {
            source,
            stack: vec![root],
        }
    }
}
