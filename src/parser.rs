// Copyright (C) Brian G. Milnes 2025

//! Parser module wrapping tree-sitter's Go grammar

pub mod parser {
    use anyhow::Result;
    use tree_sitter::Tree;

    /// Parse Go source text into a concrete syntax tree
    ///
    /// The returned tree covers every byte of the input, so unmodified
    /// spans (comments, formatting, build tags) can be carried through
    /// to the output verbatim.
    pub fn parse_source(source: &str) -> Result<Tree> {
        let language: tree_sitter::Language = tree_sitter_go::LANGUAGE.into();
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&language)
            .map_err(|e| anyhow::anyhow!("Failed to load Go grammar: {e}"))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| anyhow::anyhow!("Parser produced no tree"))?;

        if tree.root_node().has_error() {
            return Err(anyhow::anyhow!("Parse errors in Go source"));
        }

        Ok(tree)
    }
}
