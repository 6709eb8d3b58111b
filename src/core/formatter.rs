//! Positional template formatting
//!
//! Substitutes `{0}`, `{1}`, … placeholders in a template with
//! already-stringified arguments. Mismatches between the template and the
//! argument list are reported to the caller instead of being silently
//! ignored: a placeholder index beyond the argument list and an argument the
//! template never references are both errors.

use super::error::{LoggerError, Result};

/// Substitute `{index}` placeholders in `template` with `args`.
///
/// The template is scanned once, left to right. Each `{index}` (a decimal
/// number in braces) is replaced by the argument at that position; an index
/// may appear more than once and substitutes the same argument at each
/// occurrence. Substituted text is never rescanned, so an argument that
/// itself contains `{0}` stays literal. Brace sequences that do not form
/// `{decimal}` pass through unchanged.
///
/// # Errors
///
/// [`LoggerError::PlaceholderOutOfRange`] when the template references an
/// index with no corresponding argument, and
/// [`LoggerError::MissingPlaceholder`] when an argument is never referenced.
///
/// # Examples
///
/// ```
/// use kazlog::format_positional;
///
/// let line = format_positional("{0} failed after {1} retries", &["fsync", "3"]).unwrap();
/// assert_eq!(line, "fsync failed after 3 retries");
///
/// assert!(format_positional("{0} and {2}", &["a", "b"]).is_err());
/// ```
pub fn format_positional<S: AsRef<str>>(template: &str, args: &[S]) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut used = vec![false; args.len()];
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];

        match parse_index(tail) {
            Some((index, consumed)) => {
                if index >= args.len() {
                    return Err(LoggerError::placeholder_out_of_range(index, args.len()));
                }
                out.push_str(args[index].as_ref());
                used[index] = true;
                rest = &tail[consumed..];
            }
            None => {
                // Not a placeholder; the brace is literal text.
                out.push('{');
                rest = tail;
            }
        }
    }
    out.push_str(rest);

    if let Some(index) = used.iter().position(|u| !u) {
        return Err(LoggerError::missing_placeholder(index, template));
    }

    Ok(out)
}

/// Parse a `digits}` prefix of `tail`, returning the index and the number of
/// bytes consumed including the closing brace.
fn parse_index(tail: &str) -> Option<(usize, usize)> {
    let digits_len = tail.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 || tail.as_bytes().get(digits_len) != Some(&b'}') {
        return None;
    }
    let index = tail[..digits_len].parse().ok()?;
    Some((index, digits_len + 1))
}
