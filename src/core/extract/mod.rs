//! Text extraction from parsed modules.
//!
//! The swc visitor lowers the handful of text-bearing AST nodes into
//! `TextNode` values; the extractor then decides, per scan mode, which kinds
//! are consumed and whether their text passes the mode's detector.

pub mod extractor;
pub mod node;


pub use extractor::{TextExtractor, extract};
pub use node::{NodeKind, TextNode};
