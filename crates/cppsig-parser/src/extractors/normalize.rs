//! Canonical spacing for type and signature text.

use std::sync::LazyLock;

use regex::Regex;

/// Ordered rewrite rules. Order matters: indirection tokens are pulled onto
/// the preceding word before runs of whitespace are collapsed.
static RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"\n", " "),
        (r"\s+([*&])", "$1"),
        (r",", ", "),
        (r"<\s+", "<"),
        (r"\s+>", ">"),
        (r"\s+", " "),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        let regex = Regex::new(pattern).expect("normalizer rule is a valid regex");
        (regex, replacement)
    })
    .collect()
});

/// Normalize spacing in a type or signature fragment.
///
/// `int *  x` becomes `int* x`, `std::map< int,int >` becomes
/// `std::map<int, int>`. Applying it twice is the same as applying it once.
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut current = text.to_owned();
    for (regex, replacement) in RULES.iter() {
        current = regex.replace_all(&current, *replacement).into_owned();
    }
    current.trim().to_owned()
}
