use std::sync::Arc;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use swc_common::{FileName, GLOBALS, Globals, SourceMap, Spanned};
use swc_ecma_ast::Module;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax, error::Error as SwcError};
use thiserror::Error;

/// Language features enabled while parsing a source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// JSX, TypeScript, class fields, legacy decorators, dynamic import and
    /// optional chaining.
    #[default]
    Full,
    /// ECMAScript with the JSX extension only.
    Minimal,
}

impl Dialect {
    fn syntax(self) -> Syntax {
        match self {
            Dialect::Full => Syntax::Typescript(TsSyntax {
                tsx: true,
                decorators: true,
                ..Default::default()
            }),
            Dialect::Minimal => Syntax::Es(EsSyntax {
                jsx: true,
                ..Default::default()
            }),
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Full => write!(f, "full"),
            Dialect::Minimal => write!(f, "minimal"),
        }
    }
}

/// A source file that failed to parse.
///
/// `line` and `column` are both 1-based and absent when the parser could not
/// attach a position to the error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    pub line: Option<usize>,
    pub column: Option<usize>,
}

impl ParseError {
    fn from_swc(error: &SwcError, source_map: &SourceMap) -> Self {
        let span = error.span();
        let (line, column) = if span.is_dummy() {
            (None, None)
        } else {
            let loc = source_map.lookup_char_pos(span.lo);
            (Some(loc.line), Some(loc.col.0 + 1))
        };

        Self {
            message: error.kind().msg().to_string(),
            line,
            column,
        }
    }
}

pub struct ParsedSource {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
}

/// Parse JS/JSX/TS/TSX source code into a module AST.
///
/// The source is always treated as an ES module. Errors the parser recovers
/// from on its own are still returned as a `ParseError`, so a file either
/// parses cleanly or contributes nothing.
pub fn parse_source(code: &str, file_path: &str, dialect: Dialect) -> Result<ParsedSource, ParseError> {
    // Wrap in GLOBALS.set() for thread safety
    GLOBALS.set(&Globals::new(), || {
        let source_map = Arc::new(SourceMap::default());
        let source_file = source_map
            .new_source_file(FileName::Real(file_path.into()).into(), code.to_string());

        let mut parser = Parser::new(dialect.syntax(), StringInput::from(&*source_file), None);

        let module = parser
            .parse_module()
            .map_err(|e| ParseError::from_swc(&e, &source_map))?;

        if let Some(recovered) = parser.take_errors().first() {
            return Err(ParseError::from_swc(recovered, &source_map));
        }

        Ok(ParsedSource { module, source_map })
    })
}
