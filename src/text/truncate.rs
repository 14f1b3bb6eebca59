use tracing::trace;

/// Marker returned on its own when nothing of the message fits
pub const ELLIPSIS: &str = "...";

/// Suffix appended to a message that was cut short
pub const ELLIPSIS_SUFFIX: &str = " ...";

const SUFFIX_LEN: usize = 4;

/// Shorten `message` to at most `max_length` characters on word boundaries.
///
/// Words are separated by single spaces. Whole words are kept greedily while
/// there is still room for the `" ..."` suffix; if any of the message was
/// dropped the suffix is appended. A budget smaller than the suffix, or a
/// first word that does not fit, yields the bare `"..."` marker.
///
/// Lengths are counted in `char`s, so multi-byte characters are never split.
pub fn truncate(message: &str, max_length: usize) -> String {
    if max_length < SUFFIX_LEN {
        trace!(max_length, "budget smaller than suffix");
        return ELLIPSIS.to_string();
    }

    let mut kept: Vec<&str> = Vec::new();
    let mut used = 0;

    for word in message.split(' ') {
        let space = usize::from(!kept.is_empty());
        let cost = space + word.chars().count();

        if used + cost + SUFFIX_LEN > max_length {
            break;
        }

        kept.push(word);
        used += cost;
    }

    let result = kept.join(" ");

    if used >= message.chars().count() {
        return result;
    }

    trace!(kept = kept.len(), used, max_length, "message truncated");

    if result.is_empty() {
        ELLIPSIS.to_string()
    } else {
        result + ELLIPSIS_SUFFIX
    }
}
