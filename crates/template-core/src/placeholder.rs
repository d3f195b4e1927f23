use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;
use tessera_types::DataMap;

/// `{{identifier}}` where identifier is one or more ASCII word characters.
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("placeholder pattern must compile")
});

/// Replaces every `{{key}}` in `text` with the stringified value of `key`.
/// Keys missing from `data` resolve to the empty string.
pub fn resolve(text: &str, data: &DataMap) -> String {
    resolve_with(text, data, crate::escape::identity)
}

/// Like [`resolve`], but passes every substituted value through `escape`.
///
/// Literal text around the placeholders is copied unchanged; only values
/// coming from `data` are escaped.
pub fn resolve_with<F>(text: &str, data: &DataMap, escape: F) -> String
where
    F: Fn(&str) -> Cow<'_, str>,
{
    PLACEHOLDER
        .replace_all(text, |caps: &Captures<'_>| match data.get(&caps[1]) {
            Some(value) => escape(&value.to_string()).into_owned(),
            None => {
                log::trace!("Placeholder '{}' has no value, substituting empty string", &caps[1]);
                String::new()
            }
        })
        .into_owned()
}
