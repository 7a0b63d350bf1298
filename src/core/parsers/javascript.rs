use tree_sitter::{Node, Parser, Tree};

use crate::error::{Error, Result};

/// Parse JS/JSX source code with tree-sitter.
///
/// tree-sitter recovers from syntax errors by inserting error nodes; such a
/// tree is rejected here so that no key is ever derived from a guess.
pub fn parse_javascript_source(code: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_javascript::LANGUAGE.into())
        .map_err(|e| Error::Parse {
            parser: "tree-sitter",
            message: format!("Failed to set language: {e}"),
        })?;

    let tree = parser.parse(code, None).ok_or_else(|| Error::Parse {
        parser: "tree-sitter",
        message: "Failed to parse file".to_string(),
    })?;

    if let Some(error_node) = first_error(tree.root_node()) {
        let position = error_node.start_position();
        return Err(Error::Parse {
            parser: "tree-sitter",
            message: format!(
                "syntax error at line {}, column {}",
                position.row + 1,
                position.column + 1
            ),
        });
    }

    Ok(tree)
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if !node.has_error() {
        return None;
    }
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error).or(Some(node))
}
