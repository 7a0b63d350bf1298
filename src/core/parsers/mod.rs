//! Source parsers, one per front-end.
//!
//! - `jsx`: JS/TS/JSX/TSX parser built on swc (owned, mutable AST)
//! - `javascript`: JS/JSX parser built on tree-sitter (concrete syntax tree)

pub mod javascript;
pub mod jsx;
