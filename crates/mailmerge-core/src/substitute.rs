//! Per-record placeholder substitution.

use mailmerge_model::{DATE_TOKEN, FieldMapping, Record, TODAY_TOKEN};

/// Replace mapped placeholders with record values, then resolve the reserved date tokens.
///
/// Every occurrence of a mapped placeholder is replaced. A missing or empty value is
/// written as the bracketed token (`[{{name}}]`) so the gap stays visible. `{{date}}`
/// and `{{today}}` are replaced with `date` last, whatever the mapping contains.
pub fn substitute(template: &str, record: &Record, mapping: &FieldMapping, date: &str) -> String {
    let mut text = template.to_string();
    for (placeholder, column) in mapping.iter() {
        let token = placeholder.as_str();
        if !text.contains(token) {
            continue;
        }
        text = match record.non_empty(column) {
            Some(value) => text.replace(token, value),
            None => text.replace(token, &placeholder.fallback()),
        };
    }
    resolve_reserved(&text, date)
}

/// Replace `{{date}}` and `{{today}}` with `date`.
pub fn resolve_reserved(text: &str, date: &str) -> String {
    text.replace(DATE_TOKEN, date).replace(TODAY_TOKEN, date)
}

#[cfg(test)]
mod tests {
    use mailmerge_model::Placeholder;

    use super::*;

    fn mapping(pairs: &[(&str, &str)]) -> FieldMapping {
        pairs
            .iter()
            .map(|(p, c)| (Placeholder::new(*p).unwrap(), (*c).to_string()))
            .collect()
    }

    #[test]
    fn replaces_every_occurrence() {
        let record = Record::from_pairs([("name", "Alice")]);
        let text = substitute(
            "{{name}}, {{name}}!",
            &record,
            &mapping(&[("{{name}}", "name")]),
            "1/1/2026",
        );
        assert_eq!(text, "Alice, Alice!");
    }

    #[test]
    fn empty_and_missing_values_fall_back_to_marker() {
        let record = Record::from_pairs([("name", "")]);
        let text = substitute(
            "{{name}} / {{city}}",
            &record,
            &mapping(&[("{{name}}", "name"), ("{{city}}", "City")]),
            "1/1/2026",
        );
        assert_eq!(text, "[{{name}}] / [{{city}}]");
    }

    #[test]
    fn unmapped_placeholders_are_left_alone() {
        let record = Record::from_pairs([("name", "Alice")]);
        let text = substitute("{{other}}", &record, &FieldMapping::new(), "1/1/2026");
        assert_eq!(text, "{{other}}");
    }

    #[test]
    fn reserved_tokens_resolve_after_mapped_values() {
        let record = Record::from_pairs([("note", "due {{date}}")]);
        let text = substitute(
            "{{note}} / {{today}}",
            &record,
            &mapping(&[("{{note}}", "note")]),
            "10/17/2026",
        );
        assert_eq!(text, "due 10/17/2026 / 10/17/2026");
    }

    #[test]
    fn values_are_inserted_verbatim() {
        let record = Record::from_pairs([("amount", "$1.00 (\\d+)")]);
        let text = substitute(
            "Pay {{amount}}",
            &record,
            &mapping(&[("{{amount}}", "amount")]),
            "1/1/2026",
        );
        assert_eq!(text, "Pay $1.00 (\\d+)");
    }
}
