use serde::{Deserialize, Serialize};

/// A `#define` that has a replacement value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PreprocessDefine {
    pub name: String,
    pub value: String,
}
