//! Leading tag extraction from raw markup.
//!
//! The scan is a plain left-to-right character walk: the first `>` after the
//! opening `<` ends the tag, even inside a quoted attribute value.

const OPENING_CHEVRON: char = '<';
const CLOSING_CHEVRON: char = '>';

/// Returns true when `raw` starts with `<` and contains a `>` after it.
pub fn begins_with_tag(raw: &str) -> bool {
    raw.strip_prefix(OPENING_CHEVRON)
        .is_some_and(|rest| rest.contains(CLOSING_CHEVRON))
}

/// Returns the raw interior of the first tag in `raw`: everything between
/// the leading `<` and the first `>` after it, attributes and self-closing
/// slash included.
pub fn extract_leading_tag_name(raw: &str) -> Option<&str> {
    let rest = raw.strip_prefix(OPENING_CHEVRON)?;
    let end = rest.find(CLOSING_CHEVRON)?;
    Some(&rest[..end])
}
