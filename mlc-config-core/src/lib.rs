//! Component descriptor tree and JSON document primitives used by the
//! shell configuration tooling.

pub mod parser;
pub mod tree;
pub mod writer;

pub use parser::{ensure_json_extension, parse, parse_file, ParseError};
pub use tree::{Component, Content};
pub use writer::{write, write_file, WriteError};
