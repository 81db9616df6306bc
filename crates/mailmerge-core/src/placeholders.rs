use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use mailmerge_model::Placeholder;

/// `{{` followed by at least one non-`}` character and `}}`.
static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{[^}]+\}\}").expect("placeholder pattern is valid")
});

/// Distinct placeholder tokens in order of first appearance.
///
/// Tokens are captured verbatim, so `{{ name }}` and `{{name}}` are both returned.
/// Reserved tokens (`{{date}}`, `{{today}}`) are included; callers filter them
/// with [`Placeholder::is_reserved`] where needed.
pub fn extract_placeholders(text: &str) -> Vec<Placeholder> {
    let mut seen = BTreeSet::new();
    PLACEHOLDER_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|token| seen.insert(*token))
        .filter_map(|token| Placeholder::new(token).ok())
        .collect()
}

/// Placeholders the user has to map: every extracted token except the reserved ones.
pub fn mappable_placeholders(text: &str) -> Vec<Placeholder> {
    extract_placeholders(text)
        .into_iter()
        .filter(|p| !p.is_reserved())
        .collect()
}
