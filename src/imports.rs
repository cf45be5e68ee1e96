// Copyright (C) Brian G. Milnes 2025

//! Import fixer for Go files
//!
//! Adds a package to a file's import declarations without disturbing the
//! rest of the text. Adding an already-imported package is a no-op.

pub mod imports {
    use crate::ast_utils::ast_utils::{
        find_nodes, get_indentation, named_children, node_text, TextEdit,
    };
    use tree_sitter::Node;

    /// Strip the surrounding quotes from an import path literal
    ///
    /// Handles both interpreted (`"cmp"`) and raw (`` `cmp` ``) literals.
    fn strip_string_quotes(literal: &str) -> &str {
        literal
            .trim_matches('"')
            .trim_matches('`')
    }

    /// Import path declared by one import spec
    fn spec_path<'s>(spec: &Node<'_>, source: &'s str) -> Option<&'s str> {
        let path = spec.child_by_field_name("path")?;
        Some(strip_string_quotes(node_text(&path, source)))
    }

    /// All import paths declared in the file
    pub fn import_paths(root: Node<'_>, source: &str) -> Vec<String> {
        find_nodes(root, "import_spec")
            .iter()
            .filter_map(|spec| spec_path(spec, source))
            .map(str::to_string)
            .collect()
    }

    /// Ensure the file imports `path`, returning the edit to add it
    ///
    /// Returns `None` when the import is already present. A grouped
    /// `import ( ... )` gets the new spec at its sorted position with the
    /// neighboring indentation; single-line imports get a new declaration
    /// after the last one; a file with no imports gets a declaration after
    /// the package clause.
    pub fn ensure_import(root: Node<'_>, source: &str, path: &str) -> Option<TextEdit> {
        let specs = find_nodes(root, "import_spec");
        if specs
            .iter()
            .any(|spec| spec_path(spec, source) == Some(path))
        {
            return None;
        }

        if let Some(list) = find_nodes(root, "import_spec_list").into_iter().next() {
            return Some(insert_into_group(&list, source, path));
        }

        let declarations = find_nodes(root, "import_declaration");
        if let Some(last) = declarations.last() {
            return Some(TextEdit::insert(
                last.end_byte(),
                format!("\nimport \"{path}\""),
            ));
        }

        match find_nodes(root, "package_clause").into_iter().next() {
            Some(package) => Some(TextEdit::insert(
                package.end_byte(),
                format!("\n\nimport \"{path}\""),
            )),
            None => Some(TextEdit::insert(0, format!("import \"{path}\"\n\n"))),
        }
    }

    /// Insert a spec into a grouped import at its sorted position
    fn insert_into_group(list: &Node<'_>, source: &str, path: &str) -> TextEdit {
        let specs: Vec<Node<'_>> = named_children(list)
            .into_iter()
            .filter(|n| n.kind() == "import_spec")
            .collect();

        for spec in &specs {
            if spec_path(spec, source).is_some_and(|p| p > path) {
                let line_start = source[..spec.start_byte()]
                    .rfind('\n')
                    .map(|p| p + 1)
                    .unwrap_or(0);
                let indent = get_indentation(source, spec.start_byte());
                return TextEdit::insert(line_start, format!("{indent}\"{path}\"\n"));
            }
        }

        if let Some(last) = specs.last() {
            let indent = get_indentation(source, last.start_byte());
            return TextEdit::insert(last.end_byte(), format!("\n{indent}\"{path}\""));
        }

        // Empty group: import ()
        TextEdit::insert(
            list.start_byte() + 1,
            format!("\n\t\"{path}\"\n"),
        )
    }
}
