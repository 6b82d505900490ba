//! Tree walking helpers shared by every extractor.

use tree_sitter::Node;

/// Declarator wrappers that decay to a pointer when printed as a type.
pub(super) const ARRAY_DECLARATORS: &[&str] = &["array_declarator", "abstract_array_declarator"];

/// Tokens copied verbatim out of a declarator wrapper.
pub(super) const INDIRECTION_TOKENS: &[&str] = &["*", "&", "&&"];

/// Scopes that contribute a `::` qualifier to a function name.
pub(super) const QUALIFYING_SCOPES: &[&str] =
    &["namespace_definition", "class_specifier", "struct_specifier"];

/// Real parameters inside a `parameter_list`; everything else is punctuation.
pub(super) const PARAMETER_KINDS: &[&str] =
    &["parameter_declaration", "optional_parameter_declaration"];

/// Statements whose text stands in for a string literal they contain.
pub(super) const LITERAL_STATEMENTS: &[&str] = &["declaration", "expression_statement"];

/// Enclosing nodes of `node`, nearest first, ending at the root.
pub fn ancestors<'tree>(node: Node<'tree>) -> impl Iterator<Item = Node<'tree>> {
    std::iter::successors(node.parent(), |current| current.parent())
}

pub(super) fn children<'tree>(node: Node<'tree>) -> Vec<Node<'tree>> {
    let mut cursor = node.walk();
    node.children(&mut cursor).collect()
}

pub(super) fn children_of_kind<'tree>(node: Node<'tree>, kind: &str) -> Vec<Node<'tree>> {
    children(node)
        .into_iter()
        .filter(|child| child.kind() == kind)
        .collect()
}

/// Follow `declarator` fields down to the innermost declarator.
pub(super) fn innermost_declarator(node: Node<'_>) -> Node<'_> {
    std::iter::successors(Some(node), |current| current.child_by_field_name("declarator"))
        .last()
        .unwrap_or(node)
}
