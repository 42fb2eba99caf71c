/// Calendar date of a backend timestamp (`2025-03-04T10:00:00Z` -> `2025-03-04`).
/// Anything that does not start with a `YYYY-MM-DD` date is shown as-is.
pub fn format_created_date(raw: &str) -> String {
    let raw = raw.trim();
    let Some(date) = raw.get(..10) else {
        return raw.to_string();
    };

    let looks_like_date = date.char_indices().all(|(i, c)| match i {
        4 | 7 => c == '-',
        _ => c.is_ascii_digit(),
    });

    if looks_like_date {
        date.to_string()
    } else {
        raw.to_string()
    }
}

/// Whether a nav link should be highlighted for the current location.
pub fn is_active_path(current: &str, link: &str) -> bool {
    if link == "/" {
        return current == "/" || current.is_empty();
    }
    current == link
        || current
            .strip_prefix(link)
            .is_some_and(|rest| rest.starts_with('/'))
}
