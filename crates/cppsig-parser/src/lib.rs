//! # cppsig-parser
//!
//! tree-sitter based extraction of C and C++ source facts:
//! - **Functions**: every well-formed function definition, rebuilt into a
//!   canonical signature (`const std::string& app::Status::error() const`)
//!   that compares exactly against symbols recovered from binaries
//! - **Defines**: `#define` macros that carry a replacement value
//! - **String literals**: the statement around each literal, outside
//!   `#include` directives
//!
//! C sources are parsed with the C++ grammar. Per-item failures (malformed
//! declarators, undecodable bytes) drop only that item.

pub mod error;
pub mod extractors;
mod parser;
mod source;
pub mod types;

pub use cppsig_config::{Encoding, ParserConfig};
pub use error::ParserError;
pub use extractors::{ancestors, normalize};
pub use parser::CppTreeParser;
pub use types::{FunctionSymbol, PreprocessDefine, SourceFacts, StringLiteral};
