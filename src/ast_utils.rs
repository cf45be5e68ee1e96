// Copyright (C) Brian G. Milnes 2025

//! CST traversal utilities and text edits
//!
//! Provides common functions for walking and querying a tree-sitter tree,
//! plus the TextEdit type the rewriting passes emit instead of mutating
//! the tree.

pub mod ast_utils {
    use std::ops::Range;
    use tree_sitter::Node;

    /// Find all nodes of a specific kind, pre-order
    pub fn find_nodes<'t>(root: Node<'t>, kind: &str) -> Vec<Node<'t>> {
        let mut results = Vec::new();

        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if node.kind() == kind {
                results.push(node);
            }
            for i in (0..node.child_count()).rev() {
                if let Some(child) = node.child(i) {
                    stack.push(child);
                }
            }
        }

        results
    }

    /// Named children of a node, with comments filtered out
    ///
    /// Go comments are named nodes and may sit between arguments or
    /// statements; counting them as arguments or results would reject
    /// call sites the tool should handle.
    pub fn named_children<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
        let mut cursor = node.walk();
        node.named_children(&mut cursor)
            .filter(|child| child.kind() != "comment")
            .collect()
    }

    /// Get the text content of a node
    pub fn node_text<'s>(node: &Node<'_>, source: &'s str) -> &'s str {
        node.utf8_text(source.as_bytes()).unwrap_or("")
    }

    /// Get the line number of a node (1-indexed)
    pub fn line_number(node: &Node<'_>, source: &str) -> usize {
        let offset = node.start_byte();
        source[..offset].bytes().filter(|&b| b == b'\n').count() + 1
    }

    /// Get the indentation of the line containing the given offset
    pub fn get_indentation(source: &str, offset: usize) -> String {
        let line_start = source[..offset].rfind('\n').map(|p| p + 1).unwrap_or(0);
        let line = &source[line_start..];
        let indent_end = line.find(|c: char| !c.is_whitespace()).unwrap_or(0);
        line[..indent_end].to_string()
    }

    /// A single replacement of a byte range with new text
    ///
    /// Edits produced during one file's scan are disjoint and get applied
    /// together once the scan has completed.
    #[derive(Debug, Clone)]
    pub struct TextEdit {
        pub range: Range<usize>,
        pub replacement: String,
    }

    impl TextEdit {
        pub fn replace(range: Range<usize>, replacement: String) -> Self {
            TextEdit { range, replacement }
        }

        pub fn insert(offset: usize, text: String) -> Self {
            TextEdit {
                range: offset..offset,
                replacement: text,
            }
        }
    }

    /// Apply edits to the source, returning the new text
    ///
    /// Edits are sorted by start offset and applied in reverse so earlier
    /// offsets stay valid while later ranges are spliced.
    pub fn apply_edits(source: &str, edits: &[TextEdit]) -> String {
        let mut ordered: Vec<&TextEdit> = edits.iter().collect();
        ordered.sort_by_key(|e| e.range.start);

        let mut new_source = source.to_string();
        for edit in ordered.iter().rev() {
            new_source.replace_range(edit.range.clone(), &edit.replacement);
        }

        new_source
    }
}
