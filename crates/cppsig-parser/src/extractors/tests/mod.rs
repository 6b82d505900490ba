use pretty_assertions::assert_eq;

use crate::{CppTreeParser, FunctionSymbol, PreprocessDefine, StringLiteral};

mod declarator_tests;

fn functions(source: &str) -> Vec<FunctionSymbol> {
    CppTreeParser::from_text(source)
        .expect("parser should build")
        .parse_functions()
        .collect()
}

fn only_function(source: &str) -> FunctionSymbol {
    let mut found = functions(source);
    assert_eq!(found.len(), 1, "expected exactly one function in {source:?}");
    found.remove(0)
}

fn defines(source: &str) -> Vec<PreprocessDefine> {
    CppTreeParser::from_text(source)
        .expect("parser should build")
        .parse_preproc_defs()
        .collect()
}

fn literals(source: &str) -> Vec<String> {
    CppTreeParser::from_text(source)
        .expect("parser should build")
        .parse_string_literals()
        .map(|StringLiteral { value }| value)
        .collect()
}

fn symbol(
    return_type: &str,
    symbol_name: &str,
    qualified_symbol_name: &str,
    param_list: &[&str],
    modifiers: &[&str],
) -> FunctionSymbol {
    FunctionSymbol {
        return_type: return_type.to_string(),
        symbol_name: symbol_name.to_string(),
        qualified_symbol_name: qualified_symbol_name.to_string(),
        param_list: param_list.iter().map(ToString::to_string).collect(),
        modifiers: modifiers.iter().map(ToString::to_string).collect(),
        source_text: None,
    }
}
