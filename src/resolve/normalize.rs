//! Name normalization shared by every matching stage.

/// Generational suffixes dropped from the end of a name.
const SUFFIXES: &[&str] = &["jr", "sr", "ii", "iii", "iv", "v"];

/// Lower-case, drop periods, collapse whitespace and strip a trailing
/// generational suffix.
///
/// ```rust
/// use opfl_scorer::resolve::normalize_name;
///
/// assert_eq!(normalize_name("  A.J.  Brown "), "aj brown");
/// assert_eq!(normalize_name("Patrick Mahomes II"), "patrick mahomes");
/// assert_eq!(normalize_name("Marvin Harrison Jr."), "marvin harrison");
/// ```
pub fn normalize_name(name: &str) -> String {
    let mut tokens = name_tokens(name);
    if tokens.len() > 1 {
        if let Some(last) = tokens.last() {
            if SUFFIXES.contains(&last.as_str()) {
                tokens.pop();
            }
        }
    }
    tokens.join(" ")
}

fn name_tokens(name: &str) -> Vec<String> {
    name.split_whitespace()
        .map(|t| t.replace('.', "").to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Length in chars of the common prefix of two normalized names.
pub fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}
