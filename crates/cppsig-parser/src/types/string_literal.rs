use serde::{Deserialize, Serialize};

/// A string literal, recorded as the statement that contains it.
///
/// For `const char* greeting = "hi";` the value is the whole declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StringLiteral {
    pub value: String,
}
