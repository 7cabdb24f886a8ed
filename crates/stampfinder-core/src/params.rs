//! Key/value parameter maps used to mirror options in page URLs.
//!
//! Options serialize to a full map of text values; only the entries that
//! differ from the defaults are emitted, so default options encode to an
//! empty map. Decoding overlays the given entries onto the default map.

use std::collections::BTreeMap;

/// Ordered parameter map (`key -> text value`).
pub type ParamMap = BTreeMap<String, String>;

/// Keeps the entries of `full` whose value differs from `defaults`.
pub fn without_defaults(full: ParamMap, defaults: &ParamMap) -> ParamMap {
    full.into_iter()
        .filter(|(k, v)| defaults.get(k) != Some(v))
        .collect()
}

/// Returns `defaults` with every entry of `params` written over it.
///
/// Keys unknown to `defaults` are ignored.
pub fn overlay<'a, I>(defaults: &ParamMap, params: I) -> ParamMap
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut merged = defaults.clone();
    for (k, v) in params {
        if let Some(slot) = merged.get_mut(k) {
            *slot = v.to_string();
        }
    }
    merged
}

/// Looks up a key that `overlay` guarantees to be present.
pub fn get<'m>(map: &'m ParamMap, key: &str) -> &'m str {
    map.get(key).map(String::as_str).unwrap_or("")
}
