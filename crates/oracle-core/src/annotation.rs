//! Splitting a trailing `(source)` annotation off a quotation.

/// Label used when a quotation carries no parenthesized source.
pub const UNKNOWN_SOURCE: &str = "Unknown Source";

/// Split `raw` into its main text and source label.
///
/// When `raw` contains both `(` and `)`, it is split at the last `(`: the
/// prefix (trimmed) is the main text and the suffix, with every `)` removed
/// and trimmed, is the label. Otherwise the text is returned unchanged with
/// [`UNKNOWN_SOURCE`].
pub fn split(raw: &str) -> (String, String) {
    if raw.contains(')')
        && let Some(open) = raw.rfind('(')
    {
        let main = raw[..open].trim().to_string();
        let source = raw[open + 1..].replace(')', "").trim().to_string();
        return (main, source);
    }
    (raw.to_string(), UNKNOWN_SOURCE.to_string())
}
