use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;
use tracing::warn;

pub const REMOTE_ID_MARKER: &str = "<%= remote_id %>";

/// Field names a markup template may reference.
pub const KNOWN_FIELDS: &[&str] = &["site", "provider", "source", "height", "embed", "src"];

static MARKER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{((?-u:\w)*)\}\}").unwrap());

pub fn expand_embed_url(template: &str, id: &str) -> String {
    template.replace(REMOTE_ID_MARKER, id)
}

/// Replaces every `{{name}}` marker with the field of the same name, compared
/// case-insensitively. Unknown markers expand to nothing.
pub fn expand_markup(template: &str, fields: &HashMap<&str, String>) -> String {
    MARKER_RE
        .replace_all(template, |caps: &Captures| {
            let name = caps[1].to_lowercase();
            match fields.get(name.as_str()) {
                Some(value) => value.clone(),
                None => {
                    warn!("Unresolved markup marker {{{{{}}}}}", &caps[1]);
                    String::new()
                }
            }
        })
        .into_owned()
}

/// Lowercased marker names in template order.
pub fn markers(template: &str) -> Vec<String> {
    MARKER_RE
        .captures_iter(template)
        .map(|caps| caps[1].to_lowercase())
        .collect()
}
