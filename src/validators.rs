
/// Trims a raw identifier, returning `None` when nothing is left to search for.
pub fn normalize_identifier(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed)
}

/// Pages are 1-indexed; with no pages at all, no page is valid.
pub fn is_page_in_range(page: usize, page_count: usize) -> bool {
    page >= 1 && page <= page_count
}

/// Only `http://` and `https://` links are rendered as `href`s.
pub fn is_http_url(value: &str) -> bool {
    let lower = value.trim().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
