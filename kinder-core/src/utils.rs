/// Longest slug produced by `slugify`, in characters
const MAX_SLUG_CHARS: usize = 50;

/// Lowercase words joined by single dashes, cut to `MAX_SLUG_CHARS`.
///
/// Used for user directories and event file names. Letters outside ASCII are
/// kept ("niño" stays "niño").
pub fn slugify(s: &str) -> String {
    let mut slug = String::with_capacity(s.len());
    let mut pending_dash = false;

    for c in s.chars().flat_map(char::to_lowercase) {
        if !c.is_alphanumeric() {
            pending_dash = !slug.is_empty();
            continue;
        }
        if pending_dash {
            slug.push('-');
            pending_dash = false;
        }
        slug.push(c);
    }

    match slug.char_indices().nth(MAX_SLUG_CHARS) {
        Some((cut, _)) => slug[..cut].trim_end_matches('-').to_string(),
        None => slug,
    }
}
