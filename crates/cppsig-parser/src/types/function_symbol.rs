use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A function definition with its canonical signature parts.
///
/// Equality and hashing ignore `source_text`, so the same function written
/// with different formatting compares equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionSymbol {
    pub return_type: String,
    pub symbol_name: String,
    pub qualified_symbol_name: String,
    pub param_list: Vec<String>,
    pub modifiers: Vec<String>,
    /// Signature text with the body removed and whitespace collapsed.
    pub source_text: Option<String>,
}

impl FunctionSymbol {
    /// Parameter types joined with `, `.
    #[must_use]
    pub fn params(&self) -> String {
        self.param_list.join(", ")
    }

    /// `{return_type} {qualified_symbol_name}({params})`, followed by the
    /// space-joined modifiers when there are any.
    #[must_use]
    pub fn full_signature(&self) -> String {
        let signature = format!(
            "{} {}({})",
            self.return_type,
            self.qualified_symbol_name,
            self.params()
        );
        if self.modifiers.is_empty() {
            signature
        } else {
            format!("{signature} {}", self.modifiers.join(" "))
        }
    }

    fn key(&self) -> (&str, &str, &str, &[String], &[String]) {
        (
            &self.return_type,
            &self.symbol_name,
            &self.qualified_symbol_name,
            &self.param_list,
            &self.modifiers,
        )
    }
}

impl PartialEq for FunctionSymbol {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for FunctionSymbol {}

impl Hash for FunctionSymbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for FunctionSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_signature())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn symbol(source_text: Option<&str>) -> FunctionSymbol {
        FunctionSymbol {
            return_type: "const std::string&".to_string(),
            symbol_name: "error".to_string(),
            qualified_symbol_name: "app::Status::error".to_string(),
            param_list: vec![],
            modifiers: vec!["const".to_string()],
            source_text: source_text.map(str::to_string),
        }
    }

    #[test]
    fn full_signature_appends_modifiers() {
        assert_eq!(
            symbol(None).full_signature(),
            "const std::string& app::Status::error() const"
        );
    }

    #[test]
    fn full_signature_without_modifiers_has_no_trailing_space() {
        let mut function = symbol(None);
        function.modifiers.clear();
        function.param_list = vec!["int".to_string(), "char**".to_string()];
        assert_eq!(
            function.full_signature(),
            "const std::string& app::Status::error(int, char**)"
        );
        assert_eq!(function.to_string(), function.full_signature());
    }

    #[test]
    fn source_text_does_not_affect_equality() {
        let compact = symbol(Some("const std::string& error() const"));
        let spread = symbol(Some("const std::string &\nerror ( ) const"));
        assert_eq!(compact, spread);

        let unique: HashSet<_> = [compact, spread, symbol(None)].into_iter().collect();
        assert_eq!(unique.len(), 1);
    }

    #[test]
    fn other_fields_affect_equality() {
        let mut renamed = symbol(None);
        renamed.symbol_name = "warning".to_string();
        assert_ne!(symbol(None), renamed);
    }

    #[test]
    fn serializes_all_fields() {
        let value = serde_json::to_value(symbol(Some("sig"))).unwrap();
        assert_eq!(value["qualified_symbol_name"], "app::Status::error");
        assert_eq!(value["modifiers"], serde_json::json!(["const"]));
        assert_eq!(value["source_text"], "sig");
    }
}
