//! Value records emitted by the extractors.

mod function_symbol;
mod preprocess_define;
mod source_facts;
mod string_literal;

pub use function_symbol::FunctionSymbol;
pub use preprocess_define::PreprocessDefine;
pub use source_facts::SourceFacts;
pub use string_literal::StringLiteral;
