use std::sync::Arc;

use swc_common::{BytePos, FileName, Globals, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

use crate::error::{Error, Result};

pub struct ParsedJSX {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
    /// Position of the first source byte inside `source_map`.
    pub start_pos: BytePos,
    pub source: String,
}

/// Parse JSX/TSX source code string into an AST.
///
/// Every call registers the file in a fresh `SourceMap`, so concurrent
/// transforms never share parser state.
pub fn parse_jsx_source(code: String, file_path: &str) -> Result<ParsedJSX> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_map = Arc::new(SourceMap::default());
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), code.clone());

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        });

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);
        let module = parser.parse_module().map_err(|e| Error::Parse {
            parser: "swc",
            message: format!("{:?}", e.kind()),
        })?;

        Ok(ParsedJSX {
            module,
            start_pos: source_file.start_pos,
            source_map,
            source: code,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tsx() {
        let parsed = parse_jsx_source(
            "const x: string = t('Email address'); const y = <Trans>Hi</Trans>;".to_string(),
            "test.tsx",
        )
        .unwrap();
        assert_eq!(parsed.module.body.len(), 2);
        assert!(parsed.source.starts_with("const x"));
    }

    #[test]
    fn test_parse_error() {
        let err = parse_jsx_source("const = ;".to_string(), "broken.tsx")
            .err()
            .unwrap();
        assert!(matches!(err, Error::Parse { parser: "swc", .. }));
    }
}
