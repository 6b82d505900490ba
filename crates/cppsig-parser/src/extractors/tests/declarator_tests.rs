use rstest::rstest;

use super::*;
use pretty_assertions::assert_eq;
use crate::error::ParserError;
use crate::extractors::ExtractCtx;
use crate::extractors::declarator::reconstruct_type;
use crate::extractors::patterns::PatternCatalog;
use crate::source::SourceText;

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(5)]
fn pointer_depth_has_no_spaces(#[case] depth: usize) {
    let stars = "*".repeat(depth);
    let spaced = " *".repeat(depth);
    let actual = only_function(&format!("char{spaced} deep(char{spaced} p) {{ return p; }}"));
    assert_eq!(actual.return_type, format!("char{stars}"));
    assert_eq!(actual.param_list, vec![format!("char{stars}")]);
}

#[test]
fn arrays_decay_to_pointers() {
    let actual = only_function("int* make_vector(int* arr[], size_t n) { return 0; }");
    assert_eq!(actual.return_type, "int*");
    assert_eq!(actual.param_list, vec!["int**", "size_t"]);
}

#[test]
fn sized_arrays_decay_once_per_dimension() {
    let actual = only_function("void fill(int grid[4][4], char name[N]) {}");
    assert_eq!(actual.param_list, vec!["int**", "char*"]);
}

#[rstest]
#[case::pointer("void f(int*) {}", "int*")]
#[case::double_pointer("void f(int**) {}", "int**")]
#[case::array("void f(char[]) {}", "char*")]
#[case::const_reference("void f(const std::string&) {}", "const std::string&")]
#[case::rvalue_reference("void f(Widget&&) {}", "Widget&&")]
#[case::plain("void f(unsigned int) {}", "unsigned int")]
fn unnamed_parameters_keep_abstract_declarators(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(only_function(source).param_list, vec![expected]);
}

#[test]
fn qualifiers_inside_pointer_declarators_are_kept() {
    let actual = only_function("int run(const char* const* argv, char* const name) { return 0; }");
    assert_eq!(actual.param_list, vec!["const char* const*", "char* const"]);
}

#[test]
fn default_arguments_are_parameters() {
    let actual = only_function("void resize(size_t n = DEFAULT_SIZE, bool grow = true) {}");
    assert_eq!(actual.param_list, vec!["size_t", "bool"]);
}

#[test]
fn variadic_marker_is_not_a_parameter() {
    let actual = only_function("int log_line(const char* fmt, ...) { return 0; }");
    assert_eq!(actual.param_list, vec!["const char*"]);
    assert_eq!(actual.full_signature(), "int log_line(const char*)");
}

#[test]
fn void_parameter_list_is_kept_verbatim() {
    let actual = only_function("int main(void) { return 0; }");
    assert_eq!(actual.param_list, vec!["void"]);
}

#[test]
fn template_arguments_are_normalized() {
    let actual = only_function(
        "std::map< std::string,int > index(std::vector< std::pair<int,int> >& v) { return {}; }",
    );
    assert_eq!(actual.return_type, "std::map<std::string, int>");
    assert_eq!(actual.param_list, vec!["std::vector<std::pair<int, int>>&"]);
}

#[test]
fn unsupported_node_kind_is_rejected() {
    let source = SourceText::new(b"int x;", cppsig_config::Encoding::Utf8);
    let catalog = PatternCatalog::get().unwrap();
    let ctx = ExtractCtx {
        source: &source,
        catalog,
    };
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&crate::extractors::patterns::cpp_language())
        .unwrap();
    let tree = parser.parse(source.bytes(), None).unwrap();

    let error = reconstruct_type(ctx, tree.root_node()).unwrap_err();
    assert_eq!(
        error,
        ParserError::UnexpectedNode {
            kind: "translation_unit".to_string(),
            text: "int x;".to_string(),
        }
    );
}
