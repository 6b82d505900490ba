use serde::{Deserialize, Serialize};

use super::{FunctionSymbol, PreprocessDefine, StringLiteral};

/// Every fact extracted from one source file, each kind in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFacts {
    pub functions: Vec<FunctionSymbol>,
    pub defines: Vec<PreprocessDefine>,
    pub literals: Vec<StringLiteral>,
}

impl SourceFacts {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.defines.is_empty() && self.literals.is_empty()
    }
}
