//! Theme block location — a scanner, not a CSS parser.
//!
//! A theme block is the text between the first `{` after a selector and the
//! first `}` after that brace. Braces are not counted: a nested rule inside
//! the block ends it early. Token blocks are flat lists of custom
//! properties, so this holds for every stylesheet the auditor targets.

/// Return the body of the first `selector { ... }` block in `css`.
///
/// The selector is matched as a plain substring. An occurrence only counts
/// if it is followed, after optional whitespace, by `{`; otherwise the scan
/// moves on to the next occurrence. Returns `""` if no occurrence qualifies
/// or the opening brace is never closed.
///
/// # Examples
///
/// ```
/// use tone_tokens::extract_block;
///
/// let css = ":root { --background: 0 0% 100%; }\n.dark { --background: 0 0% 0%; }";
/// assert_eq!(extract_block(css, ".dark"), " --background: 0 0% 0%; ");
/// assert_eq!(extract_block(css, ".light"), "");
/// ```
#[must_use]
pub fn extract_block<'a>(css: &'a str, selector: &str) -> &'a str {
    let mut from = 0;

    while let Some(offset) = css[from..].find(selector) {
        let start = from + offset;
        let after = css[start + selector.len()..].trim_start();

        if let Some(body) = after.strip_prefix('{') {
            // No later occurrence can find a `}` this one missed.
            return body.find('}').map_or("", |end| &body[..end]);
        }

        // Step one character so overlapping occurrences are still seen.
        from = start + css[start..].chars().next().map_or(1, char::len_utf8);
        if from > css.len() {
            break;
        }
    }

    ""
}
