//! `{{key}}` placeholder substitution for prompt templates.

use std::collections::HashMap;

/// Replace every `{{key}}` occurrence for each key in `values`.
///
/// Unknown placeholders are left verbatim. The output is built in a single
/// left-to-right scan, so substituted values are never re-scanned for
/// further placeholders.
pub fn render(template: &str, values: &HashMap<&str, &str>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        match after.find("}}") {
            Some(close) => {
                let key = &after[..close];
                match values.get(key) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push_str("{{");
                        out.push_str(key);
                        out.push_str("}}");
                    }
                }
                rest = &after[close + 2..];
            }
            // Unterminated opener; no placeholder can follow.
            None => {
                out.push_str(&rest[open..]);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}
